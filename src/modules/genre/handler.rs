use super::dto::{CreateGenreRequest, GenreResponse, UpdateGenreRequest};
use super::service::GenreService;
use crate::common::error::ApiError;
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

/// List all genres
#[utoipa::path(
    get,
    path = "/api/genres",
    responses(
        (status = 200, description = "List of genres", body = ApiResponse<Vec<GenreResponse>>)
    ),
    tag = "Genres"
)]
pub async fn list_genres(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let genres = GenreService::list(state).await?;
    let data: Vec<GenreResponse> = genres.into_iter().map(GenreResponse::from).collect();

    Ok(ApiSuccess(
        ApiResponse::success(data, "Genres retrieved successfully"),
        StatusCode::OK,
    ))
}

/// Create a new genre
#[utoipa::path(
    post,
    path = "/api/genres",
    request_body = CreateGenreRequest,
    responses(
        (status = 200, description = "Genre created", body = ApiResponse<GenreResponse>),
        (status = 400, description = "Invalid name")
    ),
    tag = "Genres"
)]
pub async fn create_genre(
    State(state): State<AppState>,
    Json(payload): Json<CreateGenreRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let genre = GenreService::create(state, payload).await?;

    Ok(ApiSuccess(
        ApiResponse::success(GenreResponse::from(genre), "Genre created successfully"),
        StatusCode::OK,
    ))
}

/// Update a genre
#[utoipa::path(
    put,
    path = "/api/genres/{id}",
    params(
        ("id" = i16, Path, description = "Genre ID")
    ),
    request_body = UpdateGenreRequest,
    responses(
        (status = 200, description = "Genre updated", body = ApiResponse<GenreResponse>),
        (status = 400, description = "Invalid name"),
        (status = 404, description = "Genre not found")
    ),
    tag = "Genres"
)]
pub async fn update_genre(
    State(state): State<AppState>,
    Path(id): Path<i16>,
    Json(payload): Json<UpdateGenreRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let genre = GenreService::update(state, id, payload).await?;

    Ok(ApiSuccess(
        ApiResponse::success(GenreResponse::from(genre), "Genre updated successfully"),
        StatusCode::OK,
    ))
}

/// Delete a genre
#[utoipa::path(
    delete,
    path = "/api/genres/{id}",
    params(
        ("id" = i16, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Genre deleted", body = ApiResponse<GenreResponse>),
        (status = 400, description = "Genre still referenced by movies"),
        (status = 404, description = "Genre not found")
    ),
    tag = "Genres"
)]
pub async fn delete_genre(
    State(state): State<AppState>,
    Path(id): Path<i16>,
) -> Result<impl IntoResponse, ApiError> {
    let genre = GenreService::delete(state, id).await?;

    Ok(ApiSuccess(
        ApiResponse::success(GenreResponse::from(genre), "Genre deleted successfully"),
        StatusCode::OK,
    ))
}
