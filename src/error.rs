pub type VisResult<T> = Result<T, VisError>;

#[derive(thiserror::Error, Debug)]
pub enum VisError {
    #[error("missing file: {0}")]
    MissingFile(String),

    #[error("precondition failed: {0}")]
    Precondition(String),

    #[error("load error: {0}")]
    Load(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VisError {
    pub fn missing_file(path: impl AsRef<std::path::Path>) -> Self {
        Self::MissingFile(path.as_ref().display().to_string())
    }

    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::Precondition(msg.into())
    }

    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}
