use crate::ast::{BASE_LEVEL, Block, FlatElement, TableRow, TextElement, TextLine, text_line};

use super::list::item_elements;

/// Flattens a document's blocks for rendering.
///
/// Top-level lists are normalized as in the list view. Block quotes are
/// unrolled: each quoted paragraph becomes its own [`FlatElement::Quote`]
/// with the quote depth (1 for a top-level quote), and other blocks inside a
/// quote are flattened in place. Task list blocks outside a list and stray
/// table parts have no flat form and are dropped.
pub fn flat_elements(blocks: &[Block]) -> Vec<FlatElement> {
    let mut out = Vec::with_capacity(blocks.len());
    for block in blocks {
        push_flat(block, &mut out);
    }
    out
}

fn push_flat(block: &Block, out: &mut Vec<FlatElement>) {
    let element = match block {
        Block::Heading { text, level } => FlatElement::Heading {
            text: text_line(text),
            level: *level,
        },
        Block::Paragraph(text) => FlatElement::Text(text_line(text)),
        Block::Custom(literal) => FlatElement::Text(vec![TextElement::Text(literal.clone())]),
        Block::List { items, kind } => FlatElement::List {
            items: items
                .iter()
                .map(|item| item_elements(item, BASE_LEVEL + 1))
                .collect(),
            kind: *kind,
        },
        Block::BlockQuote(items) => {
            push_quote(items, 1, out);
            return;
        }
        Block::CodeBlock { text, language } => FlatElement::CodeBlock {
            text: text.clone(),
            language: language.clone(),
        },
        Block::Html(text) => FlatElement::Html(text.clone()),
        Block::ThematicBreak => FlatElement::Rule,
        Block::Table(rows) => FlatElement::Table {
            rows: rows.iter().filter_map(table_row).collect(),
        },
        Block::Tasklist { .. } | Block::TableHeader(_) | Block::TableRow(_) | Block::TableCell(_) => {
            log::debug!("no flat form for block, dropping: {block:?}");
            return;
        }
    };
    out.push(element);
}

fn push_quote(items: &[Block], level: usize, out: &mut Vec<FlatElement>) {
    for block in items {
        match block {
            Block::Paragraph(text) => out.push(FlatElement::Quote {
                text: text_line(text),
                level,
            }),
            Block::BlockQuote(inner) => push_quote(inner, level + 1, out),
            other => push_flat(other, out),
        }
    }
}

fn table_row(block: &Block) -> Option<TableRow> {
    match block {
        Block::TableHeader(cells) => Some(TableRow::Header(table_cells(cells))),
        Block::TableRow(cells) => Some(TableRow::Row(table_cells(cells))),
        _ => None,
    }
}

fn table_cells(cells: &[Block]) -> Vec<TextLine> {
    cells
        .iter()
        .filter_map(|cell| match cell {
            Block::TableCell(text) => Some(text_line(text)),
            _ => None,
        })
        .collect()
}
