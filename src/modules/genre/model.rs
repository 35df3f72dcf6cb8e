use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Genre {
    pub id: i16,
    pub name: String,
}
