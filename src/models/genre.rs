//! Genre model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Genre model from database, embedded by value in movie responses
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Genre {
    pub id: i32,
    pub name: String,
}

/// Create or rename genre request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GenrePayload {
    #[validate(length(min = 1, message = "Genre name must not be empty"))]
    pub name: String,
}

impl GenrePayload {
    /// Genre names are stored trimmed and lowercased
    pub fn normalized_name(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_normalized() {
        let payload = GenrePayload {
            name: "  Science Fiction ".to_string(),
        };
        assert_eq!(payload.normalized_name(), "science fiction");
    }

    #[test]
    fn empty_name_fails_validation() {
        let payload = GenrePayload {
            name: String::new(),
        };
        assert!(payload.validate().is_err());
    }
}
