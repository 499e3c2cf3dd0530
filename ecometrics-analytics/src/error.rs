/// Failure of the upstream sample retrieval.
///
/// Degenerate numeric input is never an error: it resolves to the documented fallbacks.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{kind} `{id}` is not found")]
    NotFound { kind: &'static str, id: String },

    #[error("sample retrieval failed: {0}")]
    Unavailable(String),
}

impl Error {
    pub fn entity_not_found(id: impl Into<String>) -> Self {
        Self::NotFound { kind: "entity", id: id.into() }
    }
}

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
