use std::borrow::Cow;

use crate::ast::{Block, ListKind};
use crate::projection::project_blocks;

use super::{ParseNode, SourceSpan};

/// Title and destination of a link-like node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkAttrs {
    pub title: Option<String>,
    pub url: Option<String>,
}

/// An owned parse tree node.
///
/// Produced by [`parse_document`](super::parse_document), or assembled by hand
/// with the `with_*` builders (useful for parsers that are not pulldown-cmark,
/// and for tests).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) tag: Cow<'static, str>,
    pub(crate) literal: Option<String>,
    pub(crate) list_kind: Option<ListKind>,
    pub(crate) header_level: u8,
    pub(crate) fence_info: Option<String>,
    pub(crate) link: Option<LinkAttrs>,
    pub(crate) wikilink: Option<LinkAttrs>,
    pub(crate) checked: bool,
    pub(crate) children: Vec<Node>,
    pub(crate) span: SourceSpan,
}

impl Node {
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tag: tag.into(),
            literal: None,
            list_kind: None,
            header_level: 0,
            fence_info: None,
            link: None,
            wikilink: None,
            checked: false,
            children: vec![],
            span: SourceSpan::default(),
        }
    }

    /// A `text` node.
    pub fn text(literal: impl Into<String>) -> Self {
        Self::new("text").with_literal(literal)
    }

    pub fn with_literal(mut self, literal: impl Into<String>) -> Self {
        self.literal = Some(literal.into());
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn with_list_kind(mut self, kind: ListKind) -> Self {
        self.list_kind = Some(kind);
        self
    }

    pub fn with_header_level(mut self, level: u8) -> Self {
        self.header_level = level;
        self
    }

    pub fn with_fence_info(mut self, info: impl Into<String>) -> Self {
        self.fence_info = Some(info.into());
        self
    }

    pub fn with_link(mut self, title: Option<&str>, url: Option<&str>) -> Self {
        self.link = Some(LinkAttrs {
            title: title.map(str::to_owned),
            url: url.map(str::to_owned),
        });
        self
    }

    pub fn with_wikilink(mut self, title: Option<&str>, url: Option<&str>) -> Self {
        self.wikilink = Some(LinkAttrs {
            title: title.map(str::to_owned),
            url: url.map(str::to_owned),
        });
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn with_span(mut self, span: SourceSpan) -> Self {
        self.span = span;
        self
    }

    pub fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Projects this node's children into the typed block model.
    pub fn blocks(&self) -> Vec<Block> {
        project_blocks(self)
    }
}

impl ParseNode for Node {
    fn type_tag(&self) -> &str {
        &self.tag
    }

    fn literal(&self) -> Option<&str> {
        self.literal.as_deref()
    }

    fn list_kind(&self) -> Option<ListKind> {
        self.list_kind
    }

    fn header_level(&self) -> u8 {
        self.header_level
    }

    fn fence_info(&self) -> Option<&str> {
        self.fence_info.as_deref()
    }

    fn title(&self) -> Option<&str> {
        self.link.as_ref()?.title.as_deref()
    }

    fn url(&self) -> Option<&str> {
        self.link.as_ref()?.url.as_deref()
    }

    fn wikilink_title(&self) -> Option<&str> {
        self.wikilink.as_ref()?.title.as_deref()
    }

    fn wikilink_url(&self) -> Option<&str> {
        self.wikilink.as_ref()?.url.as_deref()
    }

    fn task_checked(&self) -> bool {
        self.checked
    }

    fn children(&self) -> &[Node] {
        &self.children
    }

    fn span(&self) -> SourceSpan {
        self.span
    }
}
