//! Helper functions shared by the renderer and the page templates

mod html;

pub use html::*;
