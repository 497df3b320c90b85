pub mod errors;
pub mod html;

pub use errors::*;
pub use html::escape_html;
