pub mod document;
pub mod outline;

pub use document::{NodeDocument, OutlineDocument, load_outline, save_outline};
pub use outline::{Outline, OutlineNode};
