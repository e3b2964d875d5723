use crate::models::MAX_QUESTIONS;
use std::path::PathBuf;

pub const QUESTIONS_DIR_VAR: &str = "QCM_QUESTIONS_DIR";
pub const LOG_FILE_VAR: &str = "QCM_LOG_FILE";

const DEFAULT_QUESTIONS_DIR: &str = "questions";
const DEFAULT_LOG_FILE: &str = "qcm_debug.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub questions_dir: PathBuf,
    pub log_file: PathBuf,
    pub max_questions: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup. Empty values fall
    /// back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default))
        };

        Self {
            questions_dir: read(QUESTIONS_DIR_VAR, DEFAULT_QUESTIONS_DIR),
            log_file: read(LOG_FILE_VAR, DEFAULT_LOG_FILE),
            max_questions: MAX_QUESTIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.questions_dir, PathBuf::from("questions"));
        assert_eq!(config.log_file, PathBuf::from("qcm_debug.log"));
        assert_eq!(config.max_questions, 10);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(|key| match key {
            QUESTIONS_DIR_VAR => Some("/srv/banks".to_string()),
            LOG_FILE_VAR => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(config.questions_dir, PathBuf::from("/srv/banks"));
        assert_eq!(config.log_file, PathBuf::from("qcm_debug.log"));
    }
}
