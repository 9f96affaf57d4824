mod batch;
mod crud;
mod help;
mod search;
