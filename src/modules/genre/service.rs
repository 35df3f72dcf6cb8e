use super::dto::{CreateGenreRequest, UpdateGenreRequest};
use super::model::Genre;
use super::repository::GenreRepository;
use crate::common::error::ApiError;
use crate::state::AppState;
use validator::Validate;

pub struct GenreService;

impl GenreService {
    pub async fn list(state: AppState) -> Result<Vec<Genre>, ApiError> {
        Ok(GenreRepository::find_all(&state.db).await?)
    }

    pub async fn create(state: AppState, req: CreateGenreRequest) -> Result<Genre, ApiError> {
        req.validate()
            .map_err(|e| ApiError::InvalidRequest(validation_message(&e)))?;

        Ok(GenreRepository::create(&state.db, &req.name).await?)
    }

    pub async fn update(
        state: AppState,
        id: i16,
        req: UpdateGenreRequest,
    ) -> Result<Genre, ApiError> {
        req.validate()
            .map_err(|e| ApiError::InvalidRequest(validation_message(&e)))?;

        GenreRepository::find_by_id(&state.db, id)
            .await?
            .ok_or_else(|| Self::not_found(id))?;

        Ok(GenreRepository::update(&state.db, id, &req.name).await?)
    }

    /// Deletes the genre and returns its prior state. Genres still
    /// referenced by movies are protected by the foreign key; that failure
    /// surfaces as a 400, not a 500.
    pub async fn delete(state: AppState, id: i16) -> Result<Genre, ApiError> {
        let genre = GenreRepository::find_by_id(&state.db, id)
            .await?
            .ok_or_else(|| Self::not_found(id))?;

        match GenreRepository::delete(&state.db, id).await {
            Err(sqlx::Error::Database(db)) if db.code().as_deref() == Some("23503") => {
                Err(ApiError::invalid("Genre is referenced by existing movies."))
            }
            Err(e) => Err(e.into()),
            Ok(()) => Ok(genre),
        }
    }

    fn not_found(id: i16) -> ApiError {
        ApiError::NotFound(format!("No genre was found with ID: {id}"))
    }
}

/// First declared message out of a `validator` error set.
fn validation_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|field| field.iter())
        .filter_map(|e| e.message.as_ref())
        .map(|m| m.to_string())
        .next()
        .unwrap_or_else(|| "Invalid request".to_string())
}
