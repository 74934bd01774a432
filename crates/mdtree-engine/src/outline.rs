//! Readable text outlines of projected trees.
//!
//! One node per line, children indented by two spaces. Text runs are written
//! inline after a `:`; plain text is quoted, styled runs are written as
//! `style[...]`. The output is deterministic and is what the CLI prints.

use crate::ast::{
    Block, FlatElement, Inline, ListElement, ListKind, TableRow, TextElement, text_line,
};

pub fn format_blocks(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        write_block(&mut out, block, 0);
    }
    out
}

pub fn format_list_elements(elements: &[ListElement]) -> String {
    let mut out = String::new();
    for element in elements {
        write_list_element(&mut out, element, 0);
    }
    out
}

pub fn format_flat_elements(elements: &[FlatElement]) -> String {
    let mut out = String::new();
    for element in elements {
        write_flat_element(&mut out, element);
    }
    out
}

/// Renders a line of text runs the way the outline shows them.
pub fn format_text_line(line: &[TextElement]) -> String {
    line.iter().map(format_text_element).collect::<Vec<_>>().join(" ")
}

fn write_line(out: &mut String, depth: usize, label: &str) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(label);
    out.push('\n');
}

fn labeled(label: &str, line: &[TextElement]) -> String {
    if line.is_empty() {
        label.to_owned()
    } else {
        format!("{label}: {}", format_text_line(line))
    }
}

fn inlines(label: &str, inlines: &[Inline]) -> String {
    labeled(label, &text_line(inlines))
}

fn kind_name(kind: ListKind) -> &'static str {
    match kind {
        ListKind::Bullet => "bullet",
        ListKind::Ordered => "ordered",
    }
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

fn code_label(label: &str, text: &str, language: Option<&str>) -> String {
    match language {
        Some(language) => format!("{label} {language}: {text:?}"),
        None => format!("{label}: {text:?}"),
    }
}

fn write_block(out: &mut String, block: &Block, depth: usize) {
    match block {
        Block::Heading { text, level } => {
            write_line(out, depth, &inlines(&format!("heading {level}"), text))
        }
        Block::Paragraph(text) => write_line(out, depth, &inlines("paragraph", text)),
        Block::List { items, kind } => {
            write_line(out, depth, &format!("list {}", kind_name(*kind)));
            for item in items {
                write_line(out, depth + 1, "item");
                for block in item {
                    write_block(out, block, depth + 2);
                }
            }
        }
        Block::BlockQuote(items) => {
            write_line(out, depth, "block_quote");
            for block in items {
                write_block(out, block, depth + 1);
            }
        }
        Block::CodeBlock { text, language } => write_line(
            out,
            depth,
            &code_label("code_block", text, language.as_deref()),
        ),
        Block::Html(text) => write_line(out, depth, &format!("html: {text:?}")),
        Block::Custom(text) => write_line(out, depth, &format!("custom: {text:?}")),
        Block::Tasklist { items, checked } => {
            write_line(out, depth, &format!("tasklist {}", checkbox(*checked)));
            for block in items {
                write_block(out, block, depth + 1);
            }
        }
        Block::ThematicBreak => write_line(out, depth, "thematic_break"),
        Block::Table(rows) => {
            write_line(out, depth, "table");
            for row in rows {
                write_block(out, row, depth + 1);
            }
        }
        Block::TableHeader(cells) | Block::TableRow(cells) => {
            let label = if matches!(block, Block::TableHeader(_)) {
                "table_header"
            } else {
                "table_row"
            };
            write_line(out, depth, label);
            for cell in cells {
                write_block(out, cell, depth + 1);
            }
        }
        Block::TableCell(text) => write_line(out, depth, &inlines("table_cell", text)),
    }
}

fn write_list_element(out: &mut String, element: &ListElement, depth: usize) {
    match element {
        ListElement::Text(line) => write_line(out, depth, &labeled("text", line)),
        ListElement::List {
            children,
            kind,
            level,
        } => {
            write_line(
                out,
                depth,
                &format!("list {} level {level}", kind_name(*kind)),
            );
            write_list_items(out, children, depth + 1);
        }
        ListElement::Tasklist { children, checked } => {
            write_line(out, depth, &format!("tasklist {}", checkbox(*checked)));
            for child in children {
                write_list_element(out, child, depth + 1);
            }
        }
    }
}

fn write_list_items(out: &mut String, items: &[Vec<ListElement>], depth: usize) {
    for item in items {
        write_line(out, depth, "item");
        for element in item {
            write_list_element(out, element, depth + 1);
        }
    }
}

fn write_flat_element(out: &mut String, element: &FlatElement) {
    match element {
        FlatElement::Heading { text, level } => {
            write_line(out, 0, &labeled(&format!("heading {level}"), text))
        }
        FlatElement::Text(line) => write_line(out, 0, &labeled("text", line)),
        FlatElement::List { items, kind } => {
            write_line(out, 0, &format!("list {}", kind_name(*kind)));
            write_list_items(out, items, 1);
        }
        FlatElement::Quote { text, level } => {
            write_line(out, 0, &labeled(&format!("quote {level}"), text))
        }
        FlatElement::CodeBlock { text, language } => write_line(
            out,
            0,
            &code_label("code_block", text, language.as_deref()),
        ),
        FlatElement::Html(text) => write_line(out, 0, &format!("html: {text:?}")),
        FlatElement::Rule => write_line(out, 0, "rule"),
        FlatElement::Table { rows } => {
            write_line(out, 0, "table");
            for row in rows {
                let label = match row {
                    TableRow::Header(_) => "header",
                    TableRow::Row(_) => "row",
                };
                let cells: Vec<_> = row.cells().iter().map(|c| format_text_line(c)).collect();
                write_line(out, 1, &format!("{label}: {}", cells.join(" | ")));
            }
        }
    }
}

fn format_text_element(element: &TextElement) -> String {
    match element {
        TextElement::Text(text) => format!("{text:?}"),
        TextElement::SoftBreak => "softbreak".to_owned(),
        TextElement::LineBreak => "linebreak".to_owned(),
        TextElement::Code(text) => format!("code({text:?})"),
        TextElement::Html(text) => format!("html({text:?})"),
        TextElement::Custom(text) => format!("custom({text:?})"),
        TextElement::Emphasis(children) => format!("emph[{}]", format_text_line(children)),
        TextElement::Strong(children) => format!("strong[{}]", format_text_line(children)),
        TextElement::Strikethrough(children) => {
            format!("strike[{}]", format_text_line(children))
        }
        TextElement::Link {
            children,
            title,
            url,
        } => linked("link", children, title.as_deref(), url.as_deref()),
        TextElement::Image {
            children,
            title,
            url,
        } => linked("image", children, title.as_deref(), url.as_deref()),
        TextElement::Wikilink {
            children,
            title,
            url,
        } => linked("wikilink", children, title.as_deref(), url.as_deref()),
    }
}

fn linked(style: &str, children: &[TextElement], title: Option<&str>, url: Option<&str>) -> String {
    let url = url.unwrap_or_default();
    let target = match title {
        Some(title) => format!("{url} {title:?}"),
        None => url.to_owned(),
    };
    format!("{style}({target})[{}]", format_text_line(children))
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn para(text: &str) -> Block {
        Block::Paragraph(vec![Inline::Text(text.into())])
    }

    #[test]
    fn block_outline() {
        let blocks = vec![
            Block::Heading {
                text: vec!["Title".into()],
                level: 1,
            },
            Block::Paragraph(vec![
                "Hello ".into(),
                Inline::Emphasis(vec!["World".into()]),
                Inline::SoftBreak,
                Inline::Link {
                    children: vec!["docs".into()],
                    title: Some("Docs".into()),
                    url: Some("https://example.com".into()),
                },
            ]),
            Block::List {
                items: vec![
                    vec![para("a")],
                    vec![Block::Tasklist {
                        items: vec![para("b")],
                        checked: true,
                    }],
                ],
                kind: ListKind::Bullet,
            },
            Block::BlockQuote(vec![para("quoted")]),
            Block::CodeBlock {
                text: "fn main() {}\n".into(),
                language: Some("rust".into()),
            },
            Block::ThematicBreak,
        ];
        assert_snapshot!(format_blocks(&blocks), @r#"
        heading 1: "Title"
        paragraph: "Hello " emph["World"] softbreak link(https://example.com "Docs")["docs"]
        list bullet
          item
            paragraph: "a"
          item
            tasklist [x]
              paragraph: "b"
        block_quote
          paragraph: "quoted"
        code_block rust: "fn main() {}\n"
        thematic_break
        "#);
    }

    #[test]
    fn list_element_outline() {
        let elements = vec![ListElement::List {
            children: vec![
                vec![ListElement::Text(vec!["one".into()])],
                vec![
                    ListElement::Tasklist {
                        children: vec![ListElement::Text(vec![TextElement::Code("two".into())])],
                        checked: false,
                    },
                    ListElement::List {
                        children: vec![vec![ListElement::Text(vec!["three".into()])]],
                        kind: ListKind::Ordered,
                        level: 1,
                    },
                ],
            ],
            kind: ListKind::Bullet,
            level: 0,
        }];
        assert_snapshot!(format_list_elements(&elements), @r#"
        list bullet level 0
          item
            text: "one"
          item
            tasklist [ ]
              text: code("two")
            list ordered level 1
              item
                text: "three"
        "#);
    }

    #[test]
    fn flat_outline() {
        let elements = vec![
            FlatElement::Quote {
                text: vec!["q".into()],
                level: 2,
            },
            FlatElement::Table {
                rows: vec![
                    TableRow::Header(vec![vec!["a".into()], vec!["b".into()]]),
                    TableRow::Row(vec![vec!["1".into()], vec!["2".into()]]),
                ],
            },
            FlatElement::Rule,
        ];
        assert_snapshot!(format_flat_elements(&elements), @r#"
        quote 2: "q"
        table
          header: "a" | "b"
          row: "1" | "2"
        rule
        "#);
    }

    #[test]
    fn empty_paragraph_has_no_colon() {
        assert_eq!(format_blocks(&[Block::Paragraph(vec![])]), "paragraph\n");
    }
}
