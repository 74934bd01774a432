use std::ops::Range;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, LinkType, Parser, Tag};

use crate::ast::ListKind;

use super::tags::{DOCUMENT_TAG, ITEM_TAG};
use super::{LineIndex, Node, ParseOptions, SourceSpan};

/// Parses `text` into a `document` rooted [`Node`] tree.
///
/// pulldown-cmark is event based; this folds its events into the node shape the
/// projectors expect (the cmark-gfm shape):
///
/// - list items are `item` nodes, retagged `tasklist` when they carry a task
///   marker
/// - inline content sitting directly in a tight list item is wrapped in a
///   `paragraph`, so tight and loose lists look the same
/// - adjacent text is merged into a single `text` node
/// - wiki-links are read from their source as `[[title]]` or `[[title|url]]`;
///   one with an empty title or url stays literal text
/// - front matter becomes a `custom_block` holding the raw metadata
/// - footnotes, math and other unmodelled constructs keep a tag of their own,
///   which the projectors drop
pub fn parse_document(text: &str, options: &ParseOptions) -> Node {
    let index = LineIndex::new(text);
    let mut builder = TreeBuilder::new(&index, text);

    for (event, range) in Parser::new_ext(text, options.to_pulldown()).into_offset_iter() {
        builder.event(event, range);
    }

    builder.finish()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameKind {
    Container,
    /// Accumulates text events into the node literal (code, html, metadata).
    Literal,
    Item,
    /// Paragraph synthesized around inline content of a tight list item.
    ImplicitParagraph,
}

#[derive(Debug)]
struct Frame {
    kind: FrameKind,
    node: Node,
}

struct TreeBuilder<'a> {
    index: &'a LineIndex<'a>,
    source: &'a str,
    stack: Vec<Frame>,
    /// Open tags still to be skipped; set while inside a wiki-link, whose
    /// node is built from source rather than from its events.
    skip_depth: usize,
}

impl<'a> TreeBuilder<'a> {
    fn new(index: &'a LineIndex<'a>, source: &'a str) -> Self {
        let root = Node::new(DOCUMENT_TAG).with_span(index.span(0..source.len()));
        Self {
            index,
            source,
            stack: vec![Frame {
                kind: FrameKind::Container,
                node: root,
            }],
            skip_depth: 0,
        }
    }

    fn event(&mut self, event: Event<'_>, range: Range<usize>) {
        if self.skip_depth > 0 {
            match event {
                Event::Start(_) => self.skip_depth += 1,
                Event::End(_) => self.skip_depth -= 1,
                _ => {}
            }
            return;
        }

        let span = self.index.span(range.clone());
        match event {
            Event::Start(tag) => self.start(tag, range, span),
            Event::End(_) => {
                if self.top_kind() == FrameKind::ImplicitParagraph {
                    self.close_top();
                }
                self.close_top();
            }
            Event::Text(text) => {
                if self.top_kind() == FrameKind::Literal {
                    self.append_literal(&text);
                } else {
                    self.push_inline(Node::text(text.into_string()).with_span(span));
                }
            }
            Event::Code(code) => {
                self.push_inline(Node::new("code").with_literal(code.into_string()).with_span(span))
            }
            Event::InlineHtml(html) => self.push_inline(
                Node::new("html_inline")
                    .with_literal(html.into_string())
                    .with_span(span),
            ),
            Event::Html(html) => {
                if self.top_kind() == FrameKind::Literal {
                    self.append_literal(&html);
                } else {
                    self.push_block(
                        Node::new("html_block")
                            .with_literal(html.into_string())
                            .with_span(span),
                    );
                }
            }
            Event::SoftBreak => self.push_inline(Node::new("softbreak").with_span(span)),
            Event::HardBreak => self.push_inline(Node::new("linebreak").with_span(span)),
            Event::Rule => self.push_block(Node::new("thematic_break").with_span(span)),
            Event::TaskListMarker(checked) => self.mark_task(checked),
            Event::FootnoteReference(label) => self.push_inline(
                Node::new("footnote_reference")
                    .with_literal(label.into_string())
                    .with_span(span),
            ),
            Event::InlineMath(math) | Event::DisplayMath(math) => self.push_inline(
                Node::new("math")
                    .with_literal(math.into_string())
                    .with_span(span),
            ),
        }
    }

    fn start(&mut self, tag: Tag<'_>, range: Range<usize>, span: SourceSpan) {
        if is_inline(&tag) {
            self.ensure_paragraph(span);
        } else if self.top_kind() == FrameKind::ImplicitParagraph {
            self.close_top();
        }

        if let Tag::Link {
            link_type: LinkType::WikiLink { .. },
            ..
        } = tag
        {
            self.wikilink(range, span);
            return;
        }

        let (kind, node) = match tag {
            Tag::Paragraph => (FrameKind::Container, Node::new("paragraph")),
            Tag::Heading { level, .. } => (
                FrameKind::Container,
                Node::new("heading").with_header_level(level as u8),
            ),
            Tag::BlockQuote(_) => (FrameKind::Container, Node::new("block_quote")),
            Tag::CodeBlock(kind) => {
                let mut node = Node::new("code_block").with_literal("");
                if let CodeBlockKind::Fenced(info) = kind
                    && !info.is_empty()
                {
                    node = node.with_fence_info(info.into_string());
                }
                (FrameKind::Literal, node)
            }
            Tag::HtmlBlock => (
                FrameKind::Literal,
                Node::new("html_block").with_literal(""),
            ),
            Tag::MetadataBlock(_) => (
                FrameKind::Literal,
                Node::new("custom_block").with_literal(""),
            ),
            Tag::List(start) => {
                let kind = if start.is_some() {
                    ListKind::Ordered
                } else {
                    ListKind::Bullet
                };
                (FrameKind::Container, Node::new("list").with_list_kind(kind))
            }
            Tag::Item => (FrameKind::Item, Node::new(ITEM_TAG)),
            Tag::FootnoteDefinition(_) => {
                (FrameKind::Container, Node::new("footnote_definition"))
            }
            Tag::Table(_) => (FrameKind::Container, Node::new("table")),
            Tag::TableHead => (FrameKind::Container, Node::new("table_header")),
            Tag::TableRow => (FrameKind::Container, Node::new("table_row")),
            Tag::TableCell => (FrameKind::Container, Node::new("table_cell")),
            Tag::Emphasis => (FrameKind::Container, Node::new("emph")),
            Tag::Strong => (FrameKind::Container, Node::new("strong")),
            Tag::Strikethrough => (FrameKind::Container, Node::new("strikethrough")),
            Tag::Link {
                dest_url, title, ..
            } => (
                FrameKind::Container,
                Node::new("link").with_link(non_empty(&title), Some(&*dest_url)),
            ),
            Tag::Image {
                dest_url, title, ..
            } => (
                FrameKind::Container,
                Node::new("image").with_link(non_empty(&title), Some(&*dest_url)),
            ),
            _ => (FrameKind::Container, Node::new("unsupported")),
        };

        log::trace!("open {} at {:?}", node.tag, span.start);
        self.stack.push(Frame {
            kind,
            node: node.with_span(span),
        });
    }

    /// Attaches a complete wiki-link node, or its source as text when the
    /// link is malformed, and skips the events pulldown-cmark nests inside it.
    fn wikilink(&mut self, range: Range<usize>, span: SourceSpan) {
        self.skip_depth = 1;
        let source = self.source.get(range).unwrap_or_default();
        let node = match split_wikilink(source) {
            Some((title, url)) => Node::new("wikilink")
                .with_wikilink(Some(title), Some(url))
                .with_children([Node::text(title).with_span(span)]),
            None => {
                log::debug!("malformed wiki-link {source:?} kept as text");
                Node::text(source)
            }
        };
        self.attach(node.with_span(span));
    }

    fn top_kind(&self) -> FrameKind {
        self.stack
            .last()
            .map_or(FrameKind::Container, |frame| frame.kind)
    }

    /// Opens a synthetic paragraph when inline content lands directly in a list item.
    fn ensure_paragraph(&mut self, span: SourceSpan) {
        if self.top_kind() == FrameKind::Item {
            self.stack.push(Frame {
                kind: FrameKind::ImplicitParagraph,
                node: Node::new("paragraph").with_span(span),
            });
        }
    }

    fn push_inline(&mut self, node: Node) {
        self.ensure_paragraph(node.span);
        self.attach(node);
    }

    fn push_block(&mut self, node: Node) {
        if self.top_kind() == FrameKind::ImplicitParagraph {
            self.close_top();
        }
        self.attach(node);
    }

    fn append_literal(&mut self, text: &CowStr<'_>) {
        if let Some(frame) = self.stack.last_mut() {
            frame
                .node
                .literal
                .get_or_insert_with(String::new)
                .push_str(text);
        }
    }

    /// Retags the innermost open list item as a task list item.
    fn mark_task(&mut self, checked: bool) {
        let item = self
            .stack
            .iter_mut()
            .rev()
            .find(|frame| frame.kind == FrameKind::Item);
        if let Some(frame) = item {
            frame.node.tag = "tasklist".into();
            frame.node.checked = checked;
        }
    }

    fn close_top(&mut self) {
        if self.stack.len() <= 1 {
            return;
        }
        let Some(frame) = self.stack.pop() else {
            return;
        };
        self.attach(frame.node);
    }

    fn attach(&mut self, node: Node) {
        let Some(parent) = self.stack.last_mut() else {
            return;
        };
        if parent.kind == FrameKind::ImplicitParagraph {
            parent.node.span = parent.node.span.cover(node.span);
        }

        if node.tag == "text"
            && let Some(previous) = parent.node.children.last_mut()
            && previous.tag == "text"
        {
            if let (Some(previous_text), Some(text)) = (previous.literal.as_mut(), node.literal) {
                previous_text.push_str(&text);
            }
            previous.span = previous.span.cover(node.span);
            return;
        }

        parent.node.push_child(node);
    }

    fn finish(mut self) -> Node {
        while self.stack.len() > 1 {
            self.close_top();
        }
        match self.stack.pop() {
            Some(frame) => frame.node,
            None => Node::new(DOCUMENT_TAG),
        }
    }
}

fn is_inline(tag: &Tag<'_>) -> bool {
    matches!(
        tag,
        Tag::Emphasis | Tag::Strong | Tag::Strikethrough | Tag::Link { .. } | Tag::Image { .. }
    )
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

/// Title and url of `[[title]]` or `[[title|url]]`. The url of a bare
/// `[[title]]` is the title. Contents that are empty, contain `]`, or start or
/// end with `|` are not a wiki-link; tokens past the second are ignored.
fn split_wikilink(source: &str) -> Option<(&str, &str)> {
    let contents = source.strip_prefix("[[")?.strip_suffix("]]")?;
    if contents.is_empty()
        || contents.contains(']')
        || contents.starts_with('|')
        || contents.ends_with('|')
    {
        return None;
    }

    let mut tokens = contents.split('|').filter(|token| !token.is_empty());
    let title = tokens.next()?;
    let url = tokens.next().unwrap_or(title);
    Some((title, url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{ParseNode, SourcePosition};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn parse(text: &str) -> Node {
        parse_document(text, &ParseOptions::default())
    }

    fn tags(node: &Node) -> Vec<&str> {
        node.children().iter().map(|c| c.type_tag()).collect()
    }

    #[test]
    fn root_is_document() {
        let doc = parse("hello");
        assert_eq!(doc.type_tag(), "document");
        assert_eq!(tags(&doc), vec!["paragraph"]);
    }

    #[test]
    fn empty_input_has_no_children() {
        assert!(parse("").children().is_empty());
    }

    #[test]
    fn tight_list_items_get_paragraphs() {
        let doc = parse("- one\n- two\n");
        let list = &doc.children()[0];
        assert_eq!(list.type_tag(), "list");
        assert_eq!(list.list_kind(), Some(ListKind::Bullet));
        for item in list.children() {
            assert_eq!(item.type_tag(), "item");
            assert_eq!(tags(item), vec!["paragraph"]);
        }
    }

    #[test]
    fn tight_item_with_nested_list_closes_paragraph() {
        let doc = parse("- parent\n  - child\n");
        let item = &doc.children()[0].children()[0];
        assert_eq!(tags(item), vec!["paragraph", "list"]);
        assert_eq!(item.children()[0].children()[0].literal(), Some("parent"));
    }

    #[test]
    fn ordered_list_kind() {
        let doc = parse("1. one\n2. two\n");
        assert_eq!(doc.children()[0].list_kind(), Some(ListKind::Ordered));
    }

    #[test]
    fn task_items_are_retagged() {
        let doc = parse("- [ ] open\n- [x] done\n");
        let list = &doc.children()[0];
        assert_eq!(tags(list), vec!["tasklist", "tasklist"]);
        assert!(!list.children()[0].task_checked());
        assert!(list.children()[1].task_checked());
        assert_eq!(
            list.children()[1].children()[0].children()[0].literal(),
            Some("done")
        );
    }

    #[test]
    fn task_markers_ignored_without_extension() {
        let doc = parse_document("- [x] done\n", &ParseOptions::commonmark());
        assert_eq!(tags(&doc.children()[0]), vec!["item"]);
    }

    #[test]
    fn code_block_collects_literal_and_info() {
        let doc = parse("```rust\nlet a = 1;\n```\n");
        let code = &doc.children()[0];
        assert_eq!(code.type_tag(), "code_block");
        assert_eq!(code.literal(), Some("let a = 1;\n"));
        assert_eq!(code.fence_info(), Some("rust"));
    }

    #[test]
    fn fence_without_info_has_none() {
        let doc = parse("```\nx\n```\n");
        assert_eq!(doc.children()[0].fence_info(), None);
    }

    #[test]
    fn html_block_collects_literal() {
        let doc = parse("<div>\nhi\n</div>\n");
        let html = &doc.children()[0];
        assert_eq!(html.type_tag(), "html_block");
        assert_eq!(html.literal(), Some("<div>\nhi\n</div>\n"));
    }

    #[test]
    fn adjacent_text_is_merged() {
        let doc = parse("[[wikilink]");
        let paragraph = &doc.children()[0];
        assert_eq!(tags(paragraph), vec!["text"]);
        assert_eq!(paragraph.children()[0].literal(), Some("[[wikilink]"));
    }

    #[test]
    fn wikilink_without_label_uses_target_for_both() {
        let doc = parse("[[target]]");
        let wiki = &doc.children()[0].children()[0];
        assert_eq!(wiki.type_tag(), "wikilink");
        assert_eq!(wiki.wikilink_title(), Some("target"));
        assert_eq!(wiki.wikilink_url(), Some("target"));
        assert_eq!(wiki.title(), None);
    }

    #[test]
    fn wikilink_title_comes_before_pipe() {
        let doc = parse("see [[the page|notes/page]]");
        let wiki = &doc.children()[0].children()[1];
        assert_eq!(wiki.wikilink_title(), Some("the page"));
        assert_eq!(wiki.wikilink_url(), Some("notes/page"));
        assert_eq!(tags(wiki), vec!["text"]);
        assert_eq!(wiki.children()[0].literal(), Some("the page"));
    }

    #[test]
    fn malformed_wikilink_keeps_source_text() {
        let doc = parse("a [[pre|]] b");
        let paragraph = &doc.children()[0];
        assert_eq!(tags(paragraph), vec!["text"]);
        assert_eq!(paragraph.children()[0].literal(), Some("a [[pre|]] b"));
    }

    #[rstest]
    #[case("[[page]]", Some(("page", "page")))]
    #[case("[[title|url]]", Some(("title", "url")))]
    #[case("[[a||b]]", Some(("a", "b")))]
    #[case("[[a|b|c]]", Some(("a", "b")))]
    #[case("[[]]", None)]
    #[case("[[|]]", None)]
    #[case("[[pre|]]", None)]
    #[case("[[|post]]", None)]
    #[case("[[a]b]]", None)]
    #[case("[[open]", None)]
    #[case("[single]]", None)]
    fn split_wikilink_rules(#[case] source: &str, #[case] expected: Option<(&str, &str)>) {
        assert_eq!(split_wikilink(source), expected);
    }

    #[test]
    fn link_title_is_optional() {
        let doc = parse("[a](https://example.com) [b](https://example.com \"T\")");
        let paragraph = &doc.children()[0];
        let first = &paragraph.children()[0];
        let second = &paragraph.children()[2];
        assert_eq!(first.type_tag(), "link");
        assert_eq!(first.title(), None);
        assert_eq!(first.url(), Some("https://example.com"));
        assert_eq!(second.title(), Some("T"));
    }

    #[test]
    fn table_shape() {
        let doc = parse("| a | b |\n| - | - |\n| c | d |\n");
        let table = &doc.children()[0];
        assert_eq!(table.type_tag(), "table");
        assert_eq!(tags(table), vec!["table_header", "table_row"]);
        assert_eq!(tags(&table.children()[0]), vec!["table_cell", "table_cell"]);
    }

    #[test]
    fn front_matter_becomes_custom_block() {
        let options = ParseOptions {
            front_matter: true,
            ..ParseOptions::default()
        };
        let doc = parse_document("---\ntitle: x\n---\n\nbody\n", &options);
        let meta = &doc.children()[0];
        assert_eq!(meta.type_tag(), "custom_block");
        assert_eq!(meta.literal().map(str::trim), Some("title: x"));
    }

    #[test]
    fn footnotes_keep_their_own_tags() {
        let options = ParseOptions {
            footnotes: true,
            ..ParseOptions::default()
        };
        let doc = parse_document("text[^1]\n\n[^1]: note\n", &options);
        assert_eq!(tags(&doc), vec!["paragraph", "footnote_definition"]);
        assert_eq!(tags(&doc.children()[0]), vec!["text", "footnote_reference"]);
    }

    #[test]
    fn spans_are_one_indexed() {
        let doc = parse("Hello there\n\n- [ ] Some list\n");
        let paragraph = &doc.children()[0];
        assert_eq!(paragraph.span().start, SourcePosition::new(1, 1));
        assert!(paragraph.span().end >= SourcePosition::new(1, 11));

        let list = &doc.children()[1];
        assert_eq!(list.span().start, SourcePosition::new(3, 1));
        assert!(list.span().end.line >= 3);

        let text = &list.children()[0].children()[0].children()[0];
        assert_eq!(text.literal(), Some("Some list"));
        assert_eq!(text.span().start, SourcePosition::new(3, 7));
    }
}
