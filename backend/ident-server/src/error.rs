use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] ident_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] ident_db::DbError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger setup failed: {message}")]
    Logger { message: String },

    #[error("Missing signing secret: {message}")]
    MissingSecret { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
