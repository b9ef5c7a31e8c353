use thiserror::Error;

pub type TreeResult<T> = Result<T, TreeError>;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Unknown item kind: {0}")]
    UnknownItemKind(String),

    #[error("Unknown property modifier: {0}")]
    UnknownModifier(String),

    #[error("Index {index} out of bounds for {len} content entries")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Invalid emit configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

impl TreeError {
    pub fn unknown_item_kind(name: impl Into<String>) -> Self {
        Self::UnknownItemKind(name.into())
    }

    pub fn unknown_modifier(name: impl Into<String>) -> Self {
        Self::UnknownModifier(name.into())
    }

    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }
}
