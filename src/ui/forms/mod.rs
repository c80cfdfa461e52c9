//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `form_editor`: The create form editor

mod field_renderer;
mod form_editor;

pub use form_editor::draw_create_form;
