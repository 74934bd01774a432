use crate::ast::{BASE_LEVEL, Block, ListElement, TextElement, TextLine, text_line};

/// Normalizes a block into the list view. A list with no enclosing list gets
/// [`BASE_LEVEL`].
///
/// | block | element |
/// |---|---|
/// | paragraph | text of its inlines |
/// | block quote | one text run: the concatenated text of its children; nested lists are dropped |
/// | custom | its literal as a single text run |
/// | code block | its text as a single code run (language dropped) |
/// | list | list, every item normalized, nested lists one level deeper |
/// | anything else | `None` |
///
/// A task list block inside a list item becomes [`ListElement::Tasklist`]; on
/// its own it has no mapping.
pub fn normalize_list_element(block: &Block) -> Option<ListElement> {
    element(block, BASE_LEVEL)
}

/// Normalizes every block, skipping those without a mapping.
pub fn list_elements(blocks: &[Block]) -> Vec<ListElement> {
    blocks.iter().filter_map(normalize_list_element).collect()
}

impl Block {
    /// See [`normalize_list_element`].
    pub fn list_element(&self) -> Option<ListElement> {
        normalize_list_element(self)
    }
}

/// `level` is the level a list found at this position gets.
fn element(block: &Block, level: usize) -> Option<ListElement> {
    let element = match block {
        Block::Paragraph(text) => ListElement::Text(text_line(text)),
        Block::BlockQuote(items) => ListElement::Text(quote_text(items, level)),
        Block::Custom(literal) => ListElement::Text(vec![TextElement::Text(literal.clone())]),
        Block::CodeBlock { text, .. } => ListElement::Text(vec![TextElement::Code(text.clone())]),
        Block::List { items, kind } => ListElement::List {
            children: items
                .iter()
                .map(|item| item_elements(item, level + 1))
                .collect(),
            kind: *kind,
            level,
        },
        _ => return None,
    };
    Some(element)
}

/// Normalized content of one list item; lists inside it get `level`.
pub(super) fn item_elements(item: &[Block], level: usize) -> Vec<ListElement> {
    item.iter()
        .filter_map(|block| match block {
            Block::Tasklist { items, checked } => Some(ListElement::Tasklist {
                children: items
                    .iter()
                    .filter_map(|child| element(child, level))
                    .collect(),
                checked: *checked,
            }),
            other => element(other, level),
        })
        .collect()
}

// Lossy: lists inside a quote do not survive the collapse into one text run.
fn quote_text(items: &[Block], level: usize) -> TextLine {
    items
        .iter()
        .filter_map(|block| element(block, level))
        .filter_map(|element| match element {
            ListElement::Text(line) => Some(line),
            _ => None,
        })
        .flatten()
        .collect()
}
