use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read env file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing or empty credential: {0}. Set it in the env file or process environment.")]
    MissingCredential(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
