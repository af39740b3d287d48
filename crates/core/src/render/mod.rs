//! Rendering sinks for the comparison table.

pub mod html;

pub use html::{FILE_NOT_FOUND_TEXT, LOADING_TEXT, READ_ERROR_TEXT, render_html};
