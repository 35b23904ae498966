pub mod connection;
pub mod error;
pub mod inspector;
pub mod logging;
pub mod notation;
pub mod properties;
pub mod remote_path;

// Re-export commonly used types
pub use connection::{Delimiter, ScmConnection, SCM_PREFIX};
pub use error::MetadataError;
pub use inspector::{
    GitInspector, InspectorRegistry, RemoteMetadata, RepositoryInspector, GIT_PROVIDER,
};
pub use logging::{init_logging, parse_level, LogConfig};
pub use notation::Notation;
pub use properties::{build_properties, compute_properties, sorted_entries, PropertyNamer};
pub use remote_path::{chunk_path, extract_path, segment_at};
