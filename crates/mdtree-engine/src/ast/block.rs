use super::Inline;

/// Whether a list is bulleted or numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Bullet,
    Ordered,
}

/// A block-level element of a Markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Each item is the sequence of blocks inside one list item.
    List {
        items: Vec<Vec<Block>>,
        kind: ListKind,
    },
    BlockQuote(Vec<Block>),
    CodeBlock {
        text: String,
        language: Option<String>,
    },
    Html(String),
    Paragraph(Vec<Inline>),
    Heading {
        text: Vec<Inline>,
        level: u8,
    },
    Custom(String),
    /// A task list item: its content blocks and checkbox state.
    Tasklist {
        items: Vec<Block>,
        checked: bool,
    },
    ThematicBreak,
    Table(Vec<Block>),
    TableHeader(Vec<Block>),
    TableRow(Vec<Block>),
    TableCell(Vec<Inline>),
}

impl Block {
    /// Heading level, if this is a heading.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            Block::Heading { level, .. } => Some(*level),
            _ => None,
        }
    }
}
