use super::dto::MovieSubmission;
use super::model::{Movie, NewMovie};
use super::repository::MovieRepository;
use crate::common::error::ApiError;
use crate::common::upload::{UploadedFile, validate_poster};
use crate::modules::genre::repository::GenreRepository;
use crate::state::AppState;

pub struct MovieService;

impl MovieService {
    pub async fn list(state: AppState) -> Result<Vec<Movie>, ApiError> {
        Ok(MovieRepository::find_all(&state.db).await?)
    }

    pub async fn list_by_genre(state: AppState, genre_id: u8) -> Result<Vec<Movie>, ApiError> {
        Ok(MovieRepository::find_by_genre(&state.db, i16::from(genre_id)).await?)
    }

    pub async fn get(state: AppState, id: i32) -> Result<Movie, ApiError> {
        MovieRepository::find_by_id(&state.db, id)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    /// Creation pipeline. Validation short-circuits on the first failure,
    /// before any storage write: poster presence, extension, size, genre
    /// presence, genre existence.
    pub async fn create(state: AppState, submission: MovieSubmission) -> Result<Movie, ApiError> {
        let (poster, genre_id) = validate_creation(&submission)?;
        Self::ensure_genre_exists(&state, genre_id).await?;

        // The submission projection never carries the poster; the uploaded
        // bytes are assigned explicitly once validation has passed.
        let mut movie = NewMovie::from(&submission);
        movie.poster = Some(poster.bytes.clone());

        Ok(MovieRepository::create(&state.db, &movie).await?)
    }

    /// Partial update: only fields present in the submission overwrite the
    /// stored entity. A supplied poster or genre goes through the same
    /// validation as on create.
    pub async fn update(
        state: AppState,
        id: i32,
        submission: MovieSubmission,
    ) -> Result<Movie, ApiError> {
        let mut movie = MovieRepository::find_by_id(&state.db, id)
            .await?
            .ok_or_else(|| Self::not_found(id))?;

        if let Some(genre_id) = submission.genre_id {
            Self::ensure_genre_exists(&state, genre_id).await?;
            movie.genre_id = i16::from(genre_id);
        }

        apply_scalar_fields(&mut movie, &submission);

        if let Some(poster) = &submission.poster {
            validate_poster(poster)?;
            movie.poster = Some(poster.bytes.clone());
        }

        Ok(MovieRepository::update(&state.db, &movie).await?)
    }

    /// Deletes the movie and returns its prior state. A second delete of
    /// the same id fails the fetch and surfaces as NotFound.
    pub async fn delete(state: AppState, id: i32) -> Result<Movie, ApiError> {
        let movie = MovieRepository::find_by_id(&state.db, id)
            .await?
            .ok_or_else(|| Self::not_found(id))?;

        MovieRepository::delete(&state.db, id).await?;
        Ok(movie)
    }

    async fn ensure_genre_exists(state: &AppState, genre_id: u8) -> Result<(), ApiError> {
        if GenreRepository::exists(&state.db, i16::from(genre_id)).await? {
            Ok(())
        } else {
            Err(ApiError::invalid("Invalid genre."))
        }
    }

    fn not_found(id: i32) -> ApiError {
        ApiError::NotFound(format!("No movie was found with ID: {id}"))
    }
}

/// The storage-free part of the creation pipeline: poster presence, poster
/// rules, genre presence, in that order. Genre existence needs storage and
/// is checked afterwards.
fn validate_creation(submission: &MovieSubmission) -> Result<(&UploadedFile, u8), ApiError> {
    let poster = submission
        .poster
        .as_ref()
        .ok_or_else(|| ApiError::invalid("Poster is required."))?;
    validate_poster(poster)?;

    let genre_id = submission
        .genre_id
        .ok_or_else(|| ApiError::invalid("GenreId is required."))?;

    Ok((poster, genre_id))
}

/// Overwrites only the scalar fields present in the submission. Empty
/// strings do not clear existing text fields.
fn apply_scalar_fields(movie: &mut Movie, submission: &MovieSubmission) {
    if let Some(title) = submission.title.as_deref().filter(|t| !t.is_empty()) {
        movie.title = title.to_string();
    }
    if let Some(year) = submission.year {
        movie.year = year;
    }
    if let Some(storyline) = submission.storyline.as_deref().filter(|s| !s.is_empty()) {
        movie.storyline = storyline.to_string();
    }
    if let Some(rate) = submission.rate {
        movie.rate = Some(rate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing_movie() -> Movie {
        Movie {
            id: 1,
            title: "Alien".to_string(),
            year: 1979,
            storyline: "The crew of the Nostromo answers a distress call.".to_string(),
            rate: Some(8.5),
            poster: Some(vec![0xff, 0xd8]),
            genre_id: 2,
        }
    }

    #[test]
    fn title_only_update_leaves_other_fields_untouched() {
        let mut movie = existing_movie();
        let submission = MovieSubmission {
            title: Some("New Title".to_string()),
            ..Default::default()
        };

        apply_scalar_fields(&mut movie, &submission);

        assert_eq!(movie.title, "New Title");
        assert_eq!(movie.year, 1979);
        assert_eq!(movie.storyline, "The crew of the Nostromo answers a distress call.");
        assert_eq!(movie.rate, Some(8.5));
        assert_eq!(movie.poster, Some(vec![0xff, 0xd8]));
        assert_eq!(movie.genre_id, 2);
    }

    #[test]
    fn empty_strings_do_not_clear_text_fields() {
        let mut movie = existing_movie();
        let submission = MovieSubmission {
            title: Some(String::new()),
            storyline: Some(String::new()),
            ..Default::default()
        };

        apply_scalar_fields(&mut movie, &submission);

        assert_eq!(movie.title, "Alien");
        assert!(!movie.storyline.is_empty());
    }

    #[test]
    fn year_and_rate_overwrite_when_present() {
        let mut movie = existing_movie();
        let submission = MovieSubmission {
            year: Some(2003),
            rate: Some(7.1),
            ..Default::default()
        };

        apply_scalar_fields(&mut movie, &submission);

        assert_eq!(movie.year, 2003);
        assert_eq!(movie.rate, Some(7.1));
    }

    fn creation_submission() -> MovieSubmission {
        MovieSubmission {
            title: Some("Alien".to_string()),
            year: Some(1979),
            storyline: Some("Distress call.".to_string()),
            rate: Some(8.5),
            genre_id: Some(2),
            poster: Some(UploadedFile {
                file_name: "alien.jpg".to_string(),
                bytes: vec![0xff, 0xd8, 0xff],
            }),
        }
    }

    #[test]
    fn creation_without_poster_is_rejected() {
        let submission = MovieSubmission {
            poster: None,
            ..creation_submission()
        };

        let err = validate_creation(&submission).unwrap_err();
        assert_eq!(err.to_string(), "Poster is required.");
    }

    #[test]
    fn creation_without_genre_is_rejected() {
        let submission = MovieSubmission {
            genre_id: None,
            ..creation_submission()
        };

        let err = validate_creation(&submission).unwrap_err();
        assert_eq!(err.to_string(), "GenreId is required.");
    }

    #[test]
    fn poster_presence_is_checked_before_everything_else() {
        // Poster missing and genre missing: the poster message wins.
        let submission = MovieSubmission {
            poster: None,
            genre_id: None,
            ..creation_submission()
        };

        let err = validate_creation(&submission).unwrap_err();
        assert_eq!(err.to_string(), "Poster is required.");
    }

    #[test]
    fn poster_rules_are_checked_before_genre_presence() {
        let submission = MovieSubmission {
            poster: Some(UploadedFile {
                file_name: "alien.gif".to_string(),
                bytes: vec![0u8; 16],
            }),
            genre_id: None,
            ..creation_submission()
        };

        let err = validate_creation(&submission).unwrap_err();
        assert_eq!(err.to_string(), "Only .png and .jpg images are allowed.");
    }

    #[test]
    fn valid_creation_submission_passes() {
        let submission = creation_submission();
        let (poster, genre_id) = validate_creation(&submission).unwrap();

        assert_eq!(poster.file_name, "alien.jpg");
        assert_eq!(genre_id, 2);
    }

    #[test]
    fn absent_submission_changes_nothing() {
        let mut movie = existing_movie();
        apply_scalar_fields(&mut movie, &MovieSubmission::default());

        assert_eq!(movie.title, "Alien");
        assert_eq!(movie.year, 1979);
        assert_eq!(movie.rate, Some(8.5));
    }
}
