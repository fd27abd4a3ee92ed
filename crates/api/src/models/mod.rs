pub mod locator;
pub mod node;

pub use locator::*;
pub use node::*;
