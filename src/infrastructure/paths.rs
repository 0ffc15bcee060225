//! Path manipulation utilities for Zellij sandbox environment.
//!
//! In the Zellij plugin sandbox the host filesystem is mounted under `/host`.
//! These helpers map user-supplied paths and the plugin's data location onto
//! that mount.

use std::path::PathBuf;

/// Returns the data directory for Bookcase files (the log file lives here).
///
/// The directory is located at `/host/.local/share/zellij/bookcase` in the Zellij
/// sandbox. `/host` points to the cwd of the last focused terminal, or the folder
/// where Zellij was started if that's not available, so this typically resolves
/// to `~/.local/share/zellij/bookcase`.
///
/// # Examples
///
/// ```
/// use bookcase::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str(), Some("/host/.local/share/zellij/bookcase"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("bookcase")
}

/// Expands tilde paths to use the `/host` prefix for Zellij sandbox.
///
/// # Examples
///
/// ```
/// use bookcase::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/books.json"), "/host/books.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_leading_tilde_expands() {
        assert_eq!(expand_tilde("~user/file"), "~user/file");
        assert_eq!(expand_tilde("books/~/x"), "books/~/x");
        assert_eq!(expand_tilde("~/a/~/b"), "/host/a/~/b");
    }
}
