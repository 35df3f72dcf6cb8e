use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateGenreRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateGenreRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,
}

use crate::modules::genre::model::Genre;

#[derive(Debug, Serialize, ToSchema)]
pub struct GenreResponse {
    pub id: i16,
    pub name: String,
}

impl From<Genre> for GenreResponse {
    fn from(genre: Genre) -> Self {
        Self {
            id: genre.id,
            name: genre.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_name_up_to_100_characters() {
        let req = CreateGenreRequest { name: "a".repeat(100) };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn rejects_name_over_100_characters() {
        let req = CreateGenreRequest { name: "a".repeat(101) };
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_empty_name() {
        let req = CreateGenreRequest { name: String::new() };
        assert!(req.validate().is_err());
    }
}
