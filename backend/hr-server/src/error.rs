use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] hr_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] hr_db::DbError),

    #[error("Auth setup error: {0}")]
    Auth(#[from] hr_auth::AuthError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ServerError>;
