use std::path::{Path, PathBuf};

/// Environment variables consulted for the login name, in order
const USER_VARS: [&str; 4] = ["LOGNAME", "USER", "LNAME", "USERNAME"];

/// Login name of the invoking user
///
/// The first non-empty variable of `USER_VARS`, else the account name the
/// operating system reports for the current user.
pub fn current_user() -> String {
    user_from_env(|var| std::env::var(var).ok())
        .or_else(|| whoami::fallible::username().ok())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn user_from_env<F: Fn(&str) -> Option<String>>(lookup: F) -> Option<String> {
    USER_VARS
        .iter()
        .copied()
        .filter_map(lookup)
        .find(|name| !name.is_empty())
}

/// Absolute form of `path`, resolved against `base` when relative
pub fn absolute(base: &Path, path: &Path) -> PathBuf {
    std::path::absolute(base.join(path)).unwrap_or_else(|_| base.join(path))
}
