pub mod error;
pub mod host;
pub mod models;
pub mod outline;

// Re-export commonly used types
pub use error::{ApiError, ApiResult};
pub use host::OutlineHost;
pub use models::*;
pub use outline::OutlineReader;
