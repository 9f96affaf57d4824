use std::path::PathBuf;

use clap::Parser;

use crate::storage::DEFAULT_FILE_PATH;

/// Command interpreter for hbnb objects stored in a JSON file.
#[derive(Debug, Clone, Parser)]
#[command(name = "hbnb", version)]
pub struct Config {
    /// JSON file the objects are loaded from and saved to
    #[arg(long, env = "HBNB_FILE_PATH", default_value = DEFAULT_FILE_PATH)]
    pub file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            file: PathBuf::from(DEFAULT_FILE_PATH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file() {
        let config = Config::try_parse_from(["hbnb"]).unwrap();
        // HBNB_FILE_PATH may be set in the environment running the tests
        if std::env::var_os("HBNB_FILE_PATH").is_none() {
            assert_eq!(config.file, PathBuf::from("file.json"));
        }
        assert_eq!(Config::default().file, PathBuf::from(DEFAULT_FILE_PATH));
    }

    #[test]
    fn test_file_flag() {
        let config = Config::try_parse_from(["hbnb", "--file", "/tmp/objects.json"]).unwrap();
        assert_eq!(config.file, PathBuf::from("/tmp/objects.json"));
    }

    #[test]
    fn test_rejects_unknown_flags() {
        assert!(Config::try_parse_from(["hbnb", "--verbose"]).is_err());
    }
}
