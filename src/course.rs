use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AppError;

/// Date label for courses listed before any date heading.
pub const UNKNOWN_DATE: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub url: String,
    pub date: String,
}

impl Course {
    pub fn new(title: impl Into<String>, url: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            date: date.into(),
        }
    }
}

/// Reads the whole record file in one go. There is no partial load: any
/// failure is returned and the caller decides whether to bail.
pub fn load_courses(path: &Path) -> Result<Vec<Course>, AppError> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            AppError::NotFound(path.to_path_buf())
        } else {
            AppError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let courses: Vec<Course> = serde_json::from_str(&content).map_err(|source| AppError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), count = courses.len(), "course file parsed");
    Ok(courses)
}

pub fn save_courses(path: &Path, courses: &[Course]) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(courses).map_err(|source| AppError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })
}
