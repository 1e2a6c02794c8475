use thiserror::Error;

/// Errores del cliente de formularios
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),
}

pub type ClientResult<T> = Result<T, ClientError>;
