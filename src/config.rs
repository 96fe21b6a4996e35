use std::path::PathBuf;

use crate::error::AppError;

pub const DEFAULT_COURSES_FILE: &str = "courses.json";
pub const DEFAULT_START_URL: &str = "https://answersq.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub courses_file: PathBuf,
    pub start_url: String,
}

impl Config {
    /// Optional:
    /// - `COURSES_FILE` (default: "courses.json")
    /// - `COURSES_START_URL` (default: "https://answersq.com")
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(
            std::env::var("COURSES_FILE").ok(),
            std::env::var("COURSES_START_URL").ok(),
        )
    }

    fn from_vars(
        courses_file: Option<String>,
        start_url: Option<String>,
    ) -> Result<Self, AppError> {
        let courses_file = courses_file
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_COURSES_FILE.to_string());

        let start_url = start_url
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_START_URL.to_string());

        if !(start_url.starts_with("http://") || start_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "COURSES_START_URL must be an http(s) URL, got {start_url}"
            )));
        }

        Ok(Self {
            courses_file: PathBuf::from(courses_file),
            start_url,
        })
    }
}
