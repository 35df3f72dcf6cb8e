use super::model::{Movie, NewMovie};
use crate::common::error::ApiError;
use crate::common::upload::{self, UploadedFile};
use axum::extract::Multipart;
use axum::extract::multipart::Field;
use serde::Serialize;
use std::str::FromStr;
use utoipa::ToSchema;

/// Fields accepted from the multipart form. Everything is optional here;
/// the create pipeline decides which ones are actually required.
#[derive(Debug, Default)]
pub struct MovieSubmission {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub storyline: Option<String>,
    pub rate: Option<f64>,
    pub genre_id: Option<u8>,
    pub poster: Option<UploadedFile>,
}

impl MovieSubmission {
    /// Drains a `multipart/form-data` body into a submission. Unknown
    /// fields are ignored; malformed numeric fields are rejected up front.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut submission = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::InvalidRequest(format!("Malformed multipart body: {e}")))?
        {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "title" => submission.title = Some(text_field(field).await?),
                "storyline" => submission.storyline = Some(text_field(field).await?),
                "year" => submission.year = Some(parsed_field(&name, field).await?),
                "rate" => submission.rate = Some(parsed_field(&name, field).await?),
                "genreId" => submission.genre_id = Some(parsed_field(&name, field).await?),
                "poster" => submission.poster = Some(upload::read_file_field(field).await?),
                _ => {}
            }
        }

        Ok(submission)
    }
}

async fn text_field(field: Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::InvalidRequest(format!("Failed to read form field: {e}")))
}

async fn parsed_field<T: FromStr>(name: &str, field: Field<'_>) -> Result<T, ApiError> {
    let raw = text_field(field).await?;
    raw.trim()
        .parse::<T>()
        .map_err(|_| ApiError::InvalidRequest(format!("Invalid value for field '{name}'.")))
}

/// Read projection of a movie. Poster bytes are deliberately not part of
/// the JSON shape; they are served raw by the poster endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct MovieDetails {
    pub id: i32,
    pub title: String,
    pub year: i32,
    pub storyline: String,
    pub rate: Option<f64>,
    pub genre_id: i16,
}

impl From<Movie> for MovieDetails {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            year: movie.year,
            storyline: movie.storyline,
            rate: movie.rate,
            genre_id: movie.genre_id,
        }
    }
}

impl From<&MovieSubmission> for NewMovie {
    fn from(submission: &MovieSubmission) -> Self {
        Self {
            title: submission.title.clone().unwrap_or_default(),
            year: submission.year.unwrap_or_default(),
            storyline: submission.storyline.clone().unwrap_or_default(),
            rate: submission.rate,
            // The poster never travels through this projection; the service
            // assigns the uploaded bytes explicitly.
            poster: None,
            genre_id: submission.genre_id.map(i16::from).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> MovieSubmission {
        MovieSubmission {
            title: Some("Heat".to_string()),
            year: Some(1995),
            storyline: Some("A heist crew against a relentless detective.".to_string()),
            rate: Some(8.3),
            genre_id: Some(4),
            poster: Some(UploadedFile {
                file_name: "heat.jpg".to_string(),
                bytes: vec![0xff, 0xd8, 0xff],
            }),
        }
    }

    #[test]
    fn submission_projection_copies_every_field_except_poster() {
        let new_movie = NewMovie::from(&submission());

        assert_eq!(new_movie.title, "Heat");
        assert_eq!(new_movie.year, 1995);
        assert_eq!(new_movie.storyline, "A heist crew against a relentless detective.");
        assert_eq!(new_movie.rate, Some(8.3));
        assert_eq!(new_movie.genre_id, 4);
        assert!(new_movie.poster.is_none());
    }

    #[test]
    fn details_projection_copies_fields_and_drops_poster() {
        let movie = Movie {
            id: 9,
            title: "Heat".to_string(),
            year: 1995,
            storyline: "Heist.".to_string(),
            rate: None,
            poster: Some(vec![1, 2, 3]),
            genre_id: 4,
        };

        let details = MovieDetails::from(movie);
        assert_eq!(details.id, 9);
        assert_eq!(details.title, "Heat");
        assert_eq!(details.genre_id, 4);

        let json = serde_json::to_value(&details).unwrap();
        assert!(json.get("poster").is_none());
    }
}
