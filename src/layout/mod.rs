//! Text layout: turning raw text into pages of positioned lines.
//!
//! Layout runs in three steps, each usable on its own:
//!
//! - [`classify`](crate::layout::classify) - splits the input into lines and recognises titles,
//!   `#` headings, bullets and numbered items, producing [`StyledBlock`](crate::layout::StyledBlock)s
//! - [`wrap_text`](crate::layout::wrap_text) - greedy word wrapping against an estimated
//!   characters-per-line bound
//! - [`Paginator`](crate::layout::Paginator) - stacks wrapped blocks down A4 pages, keeping a
//!   block together when it fits and spilling it across pages when it does not
//!
//! [`layout_document`](crate::layout::layout_document) runs all three.
//!
//! # Example
//!
//! ```
//! use pdf_export::layout::{layout_document, LayoutConfig};
//!
//! let config = LayoutConfig::default();
//! let document = layout_document("Shopping\n\n- milk\n- eggs", &config);
//! assert_eq!(document.page_count(), 1);
//! ```

mod classify;
mod margins;
mod paginate;
mod style;
mod wrap;

pub use classify::*;
pub use margins::*;
pub use paginate::*;
pub use style::*;
pub use wrap::*;
