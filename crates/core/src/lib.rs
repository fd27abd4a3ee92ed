pub mod config;
pub mod error;
pub mod logging;
pub mod util;

pub mod features;
pub mod model;
pub mod session;

pub use config::{LinkConfig, UnlConfig};
pub use error::{Result, UnlError};
pub use features::handler::{LinkHandler, LinkOutcome, PARTIAL_MATCH_NOTICE};
pub use features::link::{LinkTarget, parse_link};
pub use features::navigation::{LocatorResolver, format_locator, locator_of, resolve};
pub use features::rows::{RoleTable, RowModel};
pub use model::{Outline, OutlineDocument};
pub use session::OutlineSession;
