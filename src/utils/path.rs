//! Paths from the config file and the command line may start with `~`.

use std::path::PathBuf;

/// Expand a leading `~` or `~/` to the home directory. Anything else,
/// including `~user`, is returned as is.
pub fn expand_tilde(path: &str) -> PathBuf {
    let path = path.trim();
    let rest = match path.strip_prefix('~') {
        Some("") => Some(""),
        Some(r) if r.starts_with('/') || r.starts_with('\\') => Some(&r[1..]),
        _ => None,
    };

    match (rest, dirs::home_dir()) {
        (Some(""), Some(home)) => home,
        (Some(r), Some(home)) => home.join(r),
        _ => PathBuf::from(path),
    }
}
