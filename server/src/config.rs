//! Configuration for the quotable server
//!
//! Handles data directory configuration with the following precedence:
//! 1. QUOTABLE_DATA_DIR environment variable
//! 2. ~/.config/quotable/data (production default)
//! 3. ./data (fallback for development)

use std::path::PathBuf;

const DEFAULT_CONFIG_DIR: &str = ".config/quotable/data";
const DEV_DATA_DIR: &str = "./data";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Get the data directory for persistence.
///
/// Priority:
/// 1. QUOTABLE_DATA_DIR env variable if set
/// 2. $HOME/.config/quotable/data if HOME is set
/// 3. ./data as fallback
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("QUOTABLE_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(DEFAULT_CONFIG_DIR);
    }

    PathBuf::from(DEV_DATA_DIR)
}

/// Get the socket address the HTTP listener binds to.
///
/// QUOTABLE_BIND_ADDR overrides the default.
pub fn get_bind_addr() -> String {
    std::env::var("QUOTABLE_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_data_dir_fallback() {
        // Note: This test assumes QUOTABLE_DATA_DIR is not set in the test
        // environment. If it is set, it will return that value (which is
        // correct behavior).
        let dir = get_data_dir();
        assert!(!dir.as_os_str().is_empty());
    }

    #[test]
    fn test_get_bind_addr_default() {
        // Same caveat as above for QUOTABLE_BIND_ADDR.
        let addr = get_bind_addr();
        assert!(addr.contains(':'));
    }
}
