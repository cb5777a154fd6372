use thiserror::Error;

/// Errors raised while bootstrapping a page from the embedding document.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A data attribute was present but held invalid JSON.
    #[error("Malformed page attribute '{attribute}': {source}")]
    MalformedAttribute {
        attribute: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
