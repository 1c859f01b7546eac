//! Error types for the creature gallery

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DexError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog returned status {status} for creature #{id}")]
    Status { id: u32, status: u16 },

    #[error("Invalid record for creature #{id}: {source}")]
    Decode {
        id: u32,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Card not found: {0}")]
    NotFound(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Task join error: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, DexError>;
