//! Projects Markdown parse trees into a typed document model.
//!
//! A parser produces a tree of [`ParseNode`]s (this crate ships one backed by
//! pulldown-cmark, see [`parse_document`]). [`project_blocks`] turns it into
//! [`Block`]s and [`Inline`]s; the normalized views, the table of contents
//! and the outline formatter all work from those blocks.
//!
//! ```
//! use mdtree_engine::{ParseOptions, parse_document, project_blocks, table_of_contents};
//!
//! let doc = parse_document("# Notes\n\n- one\n- two\n", &ParseOptions::default());
//! let blocks = project_blocks(&doc);
//! assert_eq!(blocks.len(), 2);
//! assert_eq!(table_of_contents(&blocks).count(), 1);
//! ```

pub mod ast;
pub mod io;
pub mod node;
pub mod normalize;
pub mod outline;
pub mod projection;
pub mod toc;

pub use ast::{
    BASE_LEVEL, Block, FlatElement, Inline, ListElement, ListKind, TableRow, TextElement,
    TextLine, plain_text,
};
pub use io::{IoError, read_document, read_markdown, scan_markdown_files};
pub use node::{
    BlockType, InlineType, Node, ParseNode, ParseOptions, SourcePosition, SourceSpan,
    parse_document,
};
pub use normalize::{flat_elements, list_elements, normalize_list_element};
pub use outline::{format_blocks, format_flat_elements, format_list_elements};
pub use projection::{project_block, project_blocks, project_inline, project_inlines};
pub use toc::{TOC_MAX_LEVEL, table_of_contents, table_of_contents_to};
