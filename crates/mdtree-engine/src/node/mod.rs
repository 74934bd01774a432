//! # Parse Nodes
//!
//! The contract between a Markdown parser and the projectors.
//!
//! A parser hands over a tree rooted at a `document` node. Each node answers a
//! small set of accessors ([`ParseNode`]); which ones are meaningful depends on
//! its type tag. The projectors only read nodes, they never mutate them.
//!
//! ## Modules
//!
//! - **`tags`**: the closed tag vocabulary (`InlineType`, `BlockType`)
//! - **`span`**: 1-indexed source positions and byte offset mapping
//! - **`tree`**: `Node`, an owned parse tree implementing [`ParseNode`]
//! - **`builder`**: builds a `Node` tree from pulldown-cmark events
//! - **`options`**: parser extension toggles

pub mod builder;
pub mod options;
pub mod span;
pub mod tags;
pub mod tree;

pub use builder::parse_document;
pub use options::ParseOptions;
pub use span::{LineIndex, SourcePosition, SourceSpan};
pub use tags::{BlockType, InlineType};
pub use tree::Node;

use crate::ast::ListKind;

/// Read-only view of a node produced by an external Markdown parser.
///
/// Accessor domains by tag:
///
/// - `literal`: present for `text`, `code`, `html_inline`, `custom_inline`,
///   `code_block`, `html_block` and `custom_block`
/// - `list_kind`: present for `list`
/// - `header_level`: meaningful for `heading` (1-6)
/// - `fence_info`: optional, only for `code_block`
/// - `title` / `url`: optional, for `link` and `image`
/// - `wikilink_title` / `wikilink_url`: optional, for `wikilink`
/// - `task_checked`: meaningful for `tasklist`
pub trait ParseNode: Sized {
    fn type_tag(&self) -> &str;
    fn literal(&self) -> Option<&str>;
    fn list_kind(&self) -> Option<ListKind>;
    fn header_level(&self) -> u8;
    fn fence_info(&self) -> Option<&str>;
    fn title(&self) -> Option<&str>;
    fn url(&self) -> Option<&str>;
    fn wikilink_title(&self) -> Option<&str>;
    fn wikilink_url(&self) -> Option<&str>;
    fn task_checked(&self) -> bool;
    fn children(&self) -> &[Self];
    fn span(&self) -> SourceSpan;
}
