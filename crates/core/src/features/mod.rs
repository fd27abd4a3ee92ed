//! The plugin's behavior: locator resolution and formatting, link
//! classification, the event handlers, and the list-model projection.

pub mod handler;
pub mod link;
pub mod navigation;
pub mod rows;
