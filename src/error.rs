use thiserror::Error;

/// Failures produced while computing SCM metadata properties.
///
/// The first four variants are deterministic configuration or environment
/// mismatches and are never retried. `Inspection` wraps unexpected internal
/// failures raised by a repository inspector.
#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("SCM connection string is malformed, {0}")]
    MalformedConnectionString(String),

    #[error("illegal value \"{value}\" in notation \"{input}\", legal values: NONE, ARRAY, PROPERTY")]
    InvalidNotation { value: String, input: String },

    #[error("unsupported SCM \"{0}\"")]
    UnsupportedProvider(String),

    #[error("directory does not appear to use SCM \"{0}\"")]
    ProviderMismatch(String),

    #[error("unexpected failure during repository inspection")]
    Inspection(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl MetadataError {
    /// Wrap an unexpected inspector failure.
    pub fn inspection<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Inspection(Box::new(source))
    }
}
