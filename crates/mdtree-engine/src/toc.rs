//! Table-of-contents extraction.

use crate::ast::Block;

/// Deepest heading level [`table_of_contents`] keeps.
pub const TOC_MAX_LEVEL: u8 = 2;

/// Top-level headings of level 1 and 2, in document order.
///
/// Only the given sequence is inspected: headings nested in block quotes or
/// list items are not part of the table of contents. The iterator borrows
/// `blocks`; call again to restart.
pub fn table_of_contents(blocks: &[Block]) -> impl Iterator<Item = &Block> + Clone {
    table_of_contents_to(blocks, TOC_MAX_LEVEL)
}

/// Top-level headings whose level is at most `max_level`.
pub fn table_of_contents_to(
    blocks: &[Block],
    max_level: u8,
) -> impl Iterator<Item = &Block> + Clone {
    blocks
        .iter()
        .filter(move |block| block.heading_level().is_some_and(|level| level <= max_level))
}
