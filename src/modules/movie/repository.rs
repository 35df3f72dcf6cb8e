use super::model::{Movie, NewMovie};
use sqlx::PgPool;

const COLUMNS: &str = "id, title, year, storyline, rate, poster, genre_id";

pub struct MovieRepository;

impl MovieRepository {
    /// All movies, best rated first.
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM movies ORDER BY rate DESC NULLS LAST, id ASC");
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }

    pub async fn find_by_genre(pool: &PgPool, genre_id: i16) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movies WHERE genre_id = $1 ORDER BY rate DESC NULLS LAST, id ASC"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(genre_id)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, movie: &NewMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, year, storyline, rate, poster, genre_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&movie.title)
            .bind(movie.year)
            .bind(&movie.storyline)
            .bind(movie.rate)
            .bind(&movie.poster)
            .bind(movie.genre_id)
            .fetch_one(pool)
            .await
    }

    /// Writes the full entity back; the service has already merged the
    /// submission into it.
    pub async fn update(pool: &PgPool, movie: &Movie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "UPDATE movies
             SET title = $2, year = $3, storyline = $4, rate = $5, poster = $6, genre_id = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(movie.id)
            .bind(&movie.title)
            .bind(movie.year)
            .bind(&movie.storyline)
            .bind(movie.rate)
            .bind(&movie.poster)
            .bind(movie.genre_id)
            .fetch_one(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: i32) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
