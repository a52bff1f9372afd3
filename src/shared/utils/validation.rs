use crate::shared::errors::{AppError, AppResult};
use chrono::{Datelike, Utc};

/// Earliest release year the catalog accepts.
pub const MIN_RELEASE_YEAR: i32 = 1980;

pub struct Validator;

impl Validator {
    pub fn validate_anime_name(name: &str) -> AppResult<()> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(AppError::ValidationError(
                "Anime name cannot be empty".to_string(),
            ));
        }
        if trimmed.len() > 255 {
            return Err(AppError::ValidationError(
                "Anime name cannot exceed 255 characters".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_genre(genre: &str) -> AppResult<()> {
        if genre.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Please enter a genre".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_release_year(year: i32) -> AppResult<()> {
        let current_year = Utc::now().year();
        if year < MIN_RELEASE_YEAR || year > current_year {
            return Err(AppError::ValidationError(format!(
                "Release year must be between {} and {}",
                MIN_RELEASE_YEAR, current_year
            )));
        }
        Ok(())
    }
}
