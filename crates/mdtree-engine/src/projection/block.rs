use crate::ast::{Block, ListKind};
use crate::node::{BlockType, ParseNode, tags::ITEM_TAG};

use super::{log_dropped, project_block_sequence, project_inlines, required_literal};

/// Projects a block-level node, or `None` for a tag outside the block
/// vocabulary.
///
/// Table nodes project their children recursively; row and cell counts are not
/// validated.
///
/// # Panics
///
/// Panics when a `code_block`, `html_block` or `custom_block` node has no
/// literal text.
pub fn project_block<N: ParseNode>(node: &N) -> Option<Block> {
    let Some(ty) = BlockType::from_tag(node.type_tag()) else {
        log_dropped("block", node);
        return None;
    };
    let literal = ty
        .has_literal()
        .then(|| required_literal(node))
        .unwrap_or_default();

    let block = match ty {
        BlockType::Paragraph => Block::Paragraph(project_inlines(node.children())),
        BlockType::Heading => Block::Heading {
            text: project_inlines(node.children()),
            level: node.header_level(),
        },
        BlockType::BlockQuote => Block::BlockQuote(project_block_sequence(node.children())),
        BlockType::CustomBlock => Block::Custom(literal),
        BlockType::CodeBlock => Block::CodeBlock {
            text: literal,
            language: node.fence_info().map(str::to_owned),
        },
        BlockType::HtmlBlock => Block::Html(literal),
        BlockType::ThematicBreak => Block::ThematicBreak,
        BlockType::Table => Block::Table(project_block_sequence(node.children())),
        BlockType::TableHeader => Block::TableHeader(project_block_sequence(node.children())),
        BlockType::TableRow => Block::TableRow(project_block_sequence(node.children())),
        BlockType::TableCell => Block::TableCell(project_inlines(node.children())),
        BlockType::List => Block::List {
            items: node
                .children()
                .iter()
                .filter_map(resolve_list_item)
                .collect(),
            kind: node.list_kind().unwrap_or(ListKind::Bullet),
        },
        BlockType::Tasklist => Block::Tasklist {
            items: project_block_sequence(node.children()),
            checked: node.task_checked(),
        },
    };
    Some(block)
}

/// List-item resolution: the block sequence of one list item.
///
/// Parsers represent a task list item as a list item wrapping a `tasklist`
/// node; cmark-gfm tags the item node itself `tasklist`, others nest a single
/// `tasklist` child inside an `item`. Either way the item resolves to exactly
/// `[Block::Tasklist]`, never to a sequence wrapping it a second time. Any
/// other item resolves to the projection of all of its children.
///
/// Children of a list that are not list items have no mapping.
pub fn resolve_list_item<N: ParseNode>(item: &N) -> Option<Vec<Block>> {
    let tag = item.type_tag();
    if BlockType::from_tag(tag) == Some(BlockType::Tasklist) {
        return project_block(item).map(|task| vec![task]);
    }
    if tag != ITEM_TAG {
        log_dropped("list item", item);
        return None;
    }

    match item.children() {
        [only] if BlockType::from_tag(only.type_tag()) == Some(BlockType::Tasklist) => {
            project_block(only).map(|task| vec![task])
        }
        children => Some(project_block_sequence(children)),
    }
}
