use super::{ListKind, TextLine};

/// Nesting level of a list with no enclosing list.
pub const BASE_LEVEL: usize = 0;

/// Normalized view of list, quote and text structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListElement {
    /// A run of text: a paragraph, a collapsed block quote, a code block or a
    /// custom block.
    Text(TextLine),
    /// A list; each item is the normalized content of one list item.
    List {
        children: Vec<Vec<ListElement>>,
        kind: ListKind,
        level: usize,
    },
    /// A task list item with its normalized content.
    Tasklist {
        children: Vec<ListElement>,
        checked: bool,
    },
}

impl ListElement {
    /// Nesting level, for lists.
    pub fn level(&self) -> Option<usize> {
        match self {
            ListElement::List { level, .. } => Some(*level),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextLine> {
        match self {
            ListElement::Text(line) => Some(line),
            _ => None,
        }
    }
}
