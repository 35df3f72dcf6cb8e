use crate::state::AppState;
use axum::Router;
use axum::routing::get;

pub mod dto;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_movies).post(handler::create_movie))
        .route("/ByGenre", get(handler::list_movies_missing_genre))
        .route("/ByGenre/{genre_id}", get(handler::list_movies_by_genre))
        .route(
            "/{id}",
            get(handler::get_movie)
                .put(handler::update_movie)
                .delete(handler::delete_movie),
        )
        .route("/{id}/poster", get(handler::get_movie_poster))
}
