//! Location of the durable state blob.

use std::path::PathBuf;

/// Default location when `CAMPUS_HUB_STATE_PATH` is not set.
pub const DEFAULT_STATE_PATH: &str = "data/campus_hub_state.json";

/// Resolves the state file path from `CAMPUS_HUB_STATE_PATH`, falling back
/// to [`DEFAULT_STATE_PATH`].
#[must_use]
pub fn state_path() -> PathBuf {
    std::env::var("CAMPUS_HUB_STATE_PATH")
        .map_or_else(|_| PathBuf::from(DEFAULT_STATE_PATH), PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_path() {
        // The env var is not set in the test environment.
        if std::env::var("CAMPUS_HUB_STATE_PATH").is_err() {
            assert_eq!(state_path(), PathBuf::from(DEFAULT_STATE_PATH));
        }
    }
}
