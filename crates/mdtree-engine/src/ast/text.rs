use super::Inline;

/// One line of styled text: the leaf payload of the normalized views.
pub type TextLine = Vec<TextElement>;

/// A styled text run.
///
/// Mirrors [`Inline`] variant for variant; the normalized views use their own
/// type so consumers of those views never depend on the projection model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextElement {
    Text(String),
    SoftBreak,
    LineBreak,
    Code(String),
    Html(String),
    Emphasis(TextLine),
    Strong(TextLine),
    Strikethrough(TextLine),
    Custom(String),
    Link {
        children: TextLine,
        title: Option<String>,
        url: Option<String>,
    },
    Image {
        children: TextLine,
        title: Option<String>,
        url: Option<String>,
    },
    Wikilink {
        children: TextLine,
        title: Option<String>,
        url: Option<String>,
    },
}

impl TextElement {
    /// Text with all styling removed. Breaks become a single space; raw html
    /// contributes nothing.
    pub fn plain_text(&self) -> String {
        match self {
            TextElement::Text(text) | TextElement::Code(text) | TextElement::Custom(text) => {
                text.clone()
            }
            TextElement::SoftBreak | TextElement::LineBreak => " ".to_owned(),
            TextElement::Html(_) => String::new(),
            TextElement::Emphasis(children)
            | TextElement::Strong(children)
            | TextElement::Strikethrough(children)
            | TextElement::Link { children, .. }
            | TextElement::Image { children, .. }
            | TextElement::Wikilink { children, .. } => plain_text(children),
        }
    }
}

/// Concatenated [`TextElement::plain_text`] of a line.
pub fn plain_text(line: &[TextElement]) -> String {
    line.iter().map(TextElement::plain_text).collect()
}

pub(crate) fn text_line(inlines: &[Inline]) -> TextLine {
    inlines.iter().map(TextElement::from).collect()
}

impl From<&Inline> for TextElement {
    fn from(inline: &Inline) -> Self {
        match inline {
            Inline::Text(text) => TextElement::Text(text.clone()),
            Inline::SoftBreak => TextElement::SoftBreak,
            Inline::LineBreak => TextElement::LineBreak,
            Inline::Code(text) => TextElement::Code(text.clone()),
            Inline::Html(text) => TextElement::Html(text.clone()),
            Inline::Emphasis(children) => TextElement::Emphasis(text_line(children)),
            Inline::Strong(children) => TextElement::Strong(text_line(children)),
            Inline::Strikethrough(children) => TextElement::Strikethrough(text_line(children)),
            Inline::Custom(literal) => TextElement::Custom(literal.clone()),
            Inline::Link {
                children,
                title,
                url,
            } => TextElement::Link {
                children: text_line(children),
                title: title.clone(),
                url: url.clone(),
            },
            Inline::Image {
                children,
                title,
                url,
            } => TextElement::Image {
                children: text_line(children),
                title: title.clone(),
                url: url.clone(),
            },
            Inline::Wikilink {
                children,
                title,
                url,
            } => TextElement::Wikilink {
                children: text_line(children),
                title: title.clone(),
                url: url.clone(),
            },
        }
    }
}

impl From<&str> for TextElement {
    fn from(text: &str) -> Self {
        TextElement::Text(text.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn retagging_preserves_structure() {
        let inline = Inline::Link {
            children: vec![Inline::Emphasis(vec!["a".into()]), Inline::Code("b".into())],
            title: None,
            url: Some("u".into()),
        };
        assert_eq!(
            TextElement::from(&inline),
            TextElement::Link {
                children: vec![TextElement::Emphasis(vec!["a".into()]), TextElement::Code("b".into())],
                title: None,
                url: Some("u".into()),
            }
        );
    }

    #[test]
    fn plain_text_strips_styles() {
        let line = vec![
            TextElement::from("Lorem "),
            TextElement::Emphasis(vec!["dolor sit".into()]),
            TextElement::SoftBreak,
            TextElement::Strong(vec!["amet".into()]),
            TextElement::Html("<br>".into()),
        ];
        assert_eq!(plain_text(&line), "Lorem dolor sit amet");
    }
}
