/// An inline element of a Markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    SoftBreak,
    LineBreak,
    Code(String),
    Html(String),
    Emphasis(Vec<Inline>),
    Strong(Vec<Inline>),
    Custom(String),
    Link {
        children: Vec<Inline>,
        title: Option<String>,
        url: Option<String>,
    },
    Image {
        children: Vec<Inline>,
        title: Option<String>,
        url: Option<String>,
    },
    Strikethrough(Vec<Inline>),
    Wikilink {
        children: Vec<Inline>,
        title: Option<String>,
        url: Option<String>,
    },
}

impl From<&str> for Inline {
    fn from(text: &str) -> Self {
        Inline::Text(text.to_owned())
    }
}

impl From<String> for Inline {
    fn from(text: String) -> Self {
        Inline::Text(text)
    }
}
