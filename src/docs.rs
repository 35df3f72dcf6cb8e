use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::movie::handler::list_movies,
        crate::modules::movie::handler::get_movie,
        crate::modules::movie::handler::list_movies_by_genre,
        crate::modules::movie::handler::create_movie,
        crate::modules::movie::handler::update_movie,
        crate::modules::movie::handler::delete_movie,
        crate::modules::movie::handler::get_movie_poster,
        crate::modules::genre::handler::list_genres,
        crate::modules::genre::handler::create_genre,
        crate::modules::genre::handler::update_genre,
        crate::modules::genre::handler::delete_genre,
    ),
    components(
        schemas(
            crate::modules::movie::dto::MovieDetails,
            crate::modules::genre::dto::CreateGenreRequest,
            crate::modules::genre::dto::UpdateGenreRequest,
            crate::modules::genre::dto::GenreResponse,
        )
    ),
    tags(
        (name = "Movies", description = "Movie catalog management"),
        (name = "Genres", description = "Genre management")
    )
)]
pub struct ApiDoc;
