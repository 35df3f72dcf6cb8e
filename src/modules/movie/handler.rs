use super::dto::{MovieDetails, MovieSubmission};
use super::service::MovieService;
use crate::common::error::ApiError;
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::common::upload::poster_content_type;
use crate::state::AppState;
use axum::{
    extract::{Multipart, Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

/// List all movies
#[utoipa::path(
    get,
    path = "/api/movies",
    responses(
        (status = 200, description = "List of movies", body = ApiResponse<Vec<MovieDetails>>)
    ),
    tag = "Movies"
)]
pub async fn list_movies(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let movies = MovieService::list(state).await?;
    let data: Vec<MovieDetails> = movies.into_iter().map(MovieDetails::from).collect();

    Ok(ApiSuccess(
        ApiResponse::success(data, "Movies retrieved successfully"),
        StatusCode::OK,
    ))
}

/// Get movie by ID
#[utoipa::path(
    get,
    path = "/api/movies/{id}",
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie details", body = ApiResponse<MovieDetails>),
        (status = 404, description = "Movie not found")
    ),
    tag = "Movies"
)]
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let movie = MovieService::get(state, id).await?;

    Ok(ApiSuccess(
        ApiResponse::success(MovieDetails::from(movie), "Movie retrieved successfully"),
        StatusCode::OK,
    ))
}

/// List movies by genre
#[utoipa::path(
    get,
    path = "/api/movies/ByGenre/{genre_id}",
    params(
        ("genre_id" = u8, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Movies in the genre", body = ApiResponse<Vec<MovieDetails>>),
        (status = 400, description = "GenreId missing")
    ),
    tag = "Movies"
)]
pub async fn list_movies_by_genre(
    State(state): State<AppState>,
    Path(genre_id): Path<u8>,
) -> Result<impl IntoResponse, ApiError> {
    let movies = MovieService::list_by_genre(state, genre_id).await?;
    let data: Vec<MovieDetails> = movies.into_iter().map(MovieDetails::from).collect();

    Ok(ApiSuccess(
        ApiResponse::success(data, "Movies retrieved successfully"),
        StatusCode::OK,
    ))
}

// The genre-scoped route with no id segment is still a valid URL; it just
// never has anything to return.
pub async fn list_movies_missing_genre() -> Result<(), ApiError> {
    Err(ApiError::invalid("GenreId is required."))
}

/// Create a movie from a multipart form with a poster upload
#[utoipa::path(
    post,
    path = "/api/movies",
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Movie created", body = ApiResponse<MovieDetails>),
        (status = 400, description = "Validation failure")
    ),
    tag = "Movies"
)]
pub async fn create_movie(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let submission = MovieSubmission::from_multipart(multipart).await?;
    let movie = MovieService::create(state, submission).await?;

    Ok(ApiSuccess(
        ApiResponse::success(MovieDetails::from(movie), "Movie created successfully"),
        StatusCode::OK,
    ))
}

/// Partially update a movie
#[utoipa::path(
    put,
    path = "/api/movies/{id}",
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Movie updated", body = ApiResponse<MovieDetails>),
        (status = 400, description = "Validation failure"),
        (status = 404, description = "Movie not found")
    ),
    tag = "Movies"
)]
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let submission = MovieSubmission::from_multipart(multipart).await?;
    let movie = MovieService::update(state, id, submission).await?;

    Ok(ApiSuccess(
        ApiResponse::success(MovieDetails::from(movie), "Movie updated successfully"),
        StatusCode::OK,
    ))
}

/// Delete a movie
#[utoipa::path(
    delete,
    path = "/api/movies/{id}",
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie deleted", body = ApiResponse<MovieDetails>),
        (status = 404, description = "Movie not found")
    ),
    tag = "Movies"
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let movie = MovieService::delete(state, id).await?;

    Ok(ApiSuccess(
        ApiResponse::success(MovieDetails::from(movie), "Movie deleted successfully"),
        StatusCode::OK,
    ))
}

/// Serve the stored poster bytes
#[utoipa::path(
    get,
    path = "/api/movies/{id}/poster",
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Poster image", body = Vec<u8>),
        (status = 404, description = "Movie or poster not found")
    ),
    tag = "Movies"
)]
pub async fn get_movie_poster(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let movie = MovieService::get(state, id).await?;
    let bytes = movie
        .poster
        .ok_or_else(|| ApiError::NotFound(format!("No poster was found for movie with ID: {id}")))?;

    let content_type = poster_content_type(&bytes);
    Ok(([(header::CONTENT_TYPE, content_type.to_string())], bytes).into_response())
}
