//! # Projection
//!
//! Maps a parse tree onto the typed [`Block`]/[`Inline`](crate::ast::Inline)
//! model.
//!
//! ## Failure policy
//!
//! Projection is best effort. A node whose tag is outside the vocabulary
//! projects to `None` and is left out of the containing sequence; the rest of
//! the document still projects. Drops are logged at debug level.
//!
//! The one exception is a broken parser contract: a literal-bearing tag
//! (`text`, `code`, `code_block`, ...) without literal text panics.

mod block;
mod inline;

pub use block::{project_block, resolve_list_item};
pub use inline::{project_inline, project_inlines};

use crate::ast::Block;
use crate::node::ParseNode;

/// Projects the children of a `document` node into blocks, in source order.
pub fn project_blocks<N: ParseNode>(root: &N) -> Vec<Block> {
    project_block_sequence(root.children())
}

fn project_block_sequence<N: ParseNode>(nodes: &[N]) -> Vec<Block> {
    nodes.iter().filter_map(project_block).collect()
}

/// # Panics
///
/// Panics when the parser produced a literal-bearing node without literal text.
fn required_literal<N: ParseNode>(node: &N) -> String {
    match node.literal() {
        Some(literal) => literal.to_owned(),
        None => panic!(
            "`{}` node at {:?} has no literal text",
            node.type_tag(),
            node.span().start
        ),
    }
}

fn log_dropped<N: ParseNode>(kind: &str, node: &N) {
    log::debug!(
        "dropping unrecognized {kind} node `{}` at {:?}",
        node.type_tag(),
        node.span().start
    );
}
