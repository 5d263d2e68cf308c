use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum RemoteError {
    Disconnected,
    Internal(String),
}

impl Display for RemoteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoteError::Disconnected => f.write_str("remote endpoint disconnected"),
            RemoteError::Internal(message) => f.write_str(message),
        }
    }
}

impl Error for RemoteError {}

impl From<anyhow::Error> for RemoteError {
    fn from(value: anyhow::Error) -> Self {
        RemoteError::Internal(value.to_string())
    }
}

pub type RemoteResult<T> = Result<T, RemoteError>;
