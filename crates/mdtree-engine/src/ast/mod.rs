//! # Document Model
//!
//! Owned, recursive sum types describing a projected Markdown document.
//!
//! - **`Inline`** / **`Block`**: the typed tree projected from parse nodes
//! - **`TextElement`** / **`TextLine`**: leaf text runs of the normalized views
//! - **`ListElement`**: normalized list/quote/text view of a block
//! - **`FlatElement`**: document-level view for rendering front-ends
//!
//! Nothing here is mutated after construction; every view is derived by a pure
//! tree-to-tree function.

mod block;
mod flat;
mod inline;
mod list_element;
mod text;

pub use block::{Block, ListKind};
pub use flat::{FlatElement, TableRow};
pub use inline::Inline;
pub use list_element::{BASE_LEVEL, ListElement};
pub use text::{TextElement, TextLine, plain_text};
pub(crate) use text::text_line;
