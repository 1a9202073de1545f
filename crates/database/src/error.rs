use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to load the database connection settings: {0}")]
    ConnectionConfigError(String),

    #[error("Database operation failed: {0}")]
    QueryError(#[from] sqlx::Error),

    #[error("Database migration failed: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    #[error("An opinion with the same nome is already stored.")]
    Duplicate,

    #[error("The requested data was not found in the database.")]
    NotFound,
}
