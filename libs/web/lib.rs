//! Presentation shell for the dashboard: a fixed page skeleton and one
//! reusable button element, composed declaratively into HTML strings.
//! No state, no I/O.

mod button;
mod escape;
mod page;

pub use button::Button;
pub use escape::{escape_attr, escape_text};
pub use page::Page;
