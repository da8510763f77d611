use bridge_traits::error::BridgeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Bridge error: {0}")]
    Bridge(#[from] BridgeError),

    #[error("Load worker failed: {0}")]
    WorkerFailed(String),
}

pub type Result<T> = std::result::Result<T, LibraryError>;
