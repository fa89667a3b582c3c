use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decompression failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid utf-8 in state: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("invalid state json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("workspace already initialized")]
    AlreadyInitialized,

    #[error("failed to evaluate {file}: {message}")]
    BuildConfig { file: String, message: String },

    #[error("state codec error: {0}")]
    Codec(#[from] CodecError),
}
