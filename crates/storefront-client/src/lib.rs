pub mod client;
pub mod error;
pub mod loader;
pub mod source;

pub use client::CatalogClient;
pub use error::FetchError;
pub use loader::{CatalogLoader, DiagnosticSink, Liveness, LoadOutcome, Mount, TracingDiagnostics};
pub use source::ProductSource;
