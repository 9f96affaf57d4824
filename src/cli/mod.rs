mod display;
mod interface;

pub use display::display_output;
pub use interface::{CLI, PROMPT};
