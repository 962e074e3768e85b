use thiserror::Error;

#[derive(Error, Debug)]
pub enum CarouselError {
    #[error("carousel needs at least one item")]
    EmptyCatalog,

    #[error("invalid config value for `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },

    #[error("invalid interpolation table: {0}")]
    InvalidTable(String),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}
