//! # Normalized Views
//!
//! Second-pass projections from the [`Block`](crate::ast::Block) tree into
//! simplified, application-facing trees.
//!
//! - **`list`**: [`ListElement`](crate::ast::ListElement) view. Paragraphs,
//!   quotes, code and custom blocks collapse into text runs; list nesting is
//!   kept and annotated with its level.
//! - **`flat`**: [`FlatElement`](crate::ast::FlatElement) view of a whole
//!   document, with quotes unrolled by depth and tables reduced to rows of
//!   text cells.

mod flat;
mod list;

pub use flat::flat_elements;
pub use list::{list_elements, normalize_list_element};
