#![forbid(unsafe_code)]

//! Flag-name patterns

use regex::Regex;
use std::sync::LazyLock;

/// Long flag names: alphanumeric segments joined by single hyphens (`dry-run`)
pub static LONG_FLAG_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*$").expect("long flag pattern is valid")
});

/// Short flag names: one or more ASCII letters (`v`, `lvk`)
pub static SHORT_FLAG_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").expect("short flag pattern is valid"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_flag_names() {
        for name in ["help", "dry-run", "a-b-c", "v2", "3", "UTF-8"] {
            assert!(LONG_FLAG_NAME.is_match(name), "{name} should match");
        }
        for name in ["-x", "x-", "a--b", "a_b", "na me", "é", ""] {
            assert!(!LONG_FLAG_NAME.is_match(name), "{name} should not match");
        }
    }

    #[test]
    fn test_short_flag_names() {
        for name in ["v", "lvk", "Q"] {
            assert!(SHORT_FLAG_NAME.is_match(name), "{name} should match");
        }
        for name in ["3", "a1", "!", "v-", "ü", ""] {
            assert!(!SHORT_FLAG_NAME.is_match(name), "{name} should not match");
        }
    }
}
