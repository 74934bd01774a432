use super::{ListElement, ListKind, TextLine};

/// A document-level element for rendering front-ends.
///
/// Block quotes are unrolled into one [`FlatElement::Quote`] per paragraph,
/// tagged with their quote depth; lists carry their normalized items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlatElement {
    Heading {
        text: TextLine,
        level: u8,
    },
    Text(TextLine),
    List {
        items: Vec<Vec<ListElement>>,
        kind: ListKind,
    },
    /// A quoted paragraph; `level` 1 is a top-level quote.
    Quote {
        text: TextLine,
        level: usize,
    },
    CodeBlock {
        text: String,
        language: Option<String>,
    },
    Html(String),
    Rule,
    Table {
        rows: Vec<TableRow>,
    },
}

/// A table row; each cell is one line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    Header(Vec<TextLine>),
    Row(Vec<TextLine>),
}

impl TableRow {
    pub fn cells(&self) -> &[TextLine] {
        match self {
            TableRow::Header(cells) | TableRow::Row(cells) => cells,
        }
    }
}
