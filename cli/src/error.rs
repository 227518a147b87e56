use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid deck definition: {0}")]
    Validation(#[from] deckstring::error::ValidationError),

    #[error("deckstring decode error: {0}")]
    Decode(#[from] deckstring::error::DecodeError),

    #[error("varint error: {0}")]
    Varint(#[from] varint::error::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

pub(crate) type Result<T> = std::result::Result<T, Error>;
