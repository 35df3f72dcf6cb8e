use sqlx::FromRow;

/// Catalog entity. `genre_id` must always reference an existing genre; the
/// service validates it on write and the schema enforces it with a
/// restricted foreign key.
#[derive(Debug, Clone, FromRow)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub year: i32,
    pub storyline: String,
    pub rate: Option<f64>,
    pub poster: Option<Vec<u8>>,
    pub genre_id: i16,
}

/// Insert shape: everything the storage layer needs to create a row.
#[derive(Debug, Clone, Default)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub storyline: String,
    pub rate: Option<f64>,
    pub poster: Option<Vec<u8>>,
    pub genre_id: i16,
}
