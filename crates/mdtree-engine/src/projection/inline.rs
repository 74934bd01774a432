use crate::ast::Inline;
use crate::node::{InlineType, ParseNode};

use super::{log_dropped, required_literal};

/// Projects an inline-level node, or `None` for a tag outside the inline
/// vocabulary.
///
/// # Panics
///
/// Panics when a `text`, `code`, `html_inline` or `custom_inline` node has no
/// literal text.
pub fn project_inline<N: ParseNode>(node: &N) -> Option<Inline> {
    let Some(ty) = InlineType::from_tag(node.type_tag()) else {
        log_dropped("inline", node);
        return None;
    };
    let literal = ty
        .has_literal()
        .then(|| required_literal(node))
        .unwrap_or_default();

    let inline = match ty {
        InlineType::Text => Inline::Text(literal),
        InlineType::SoftBreak => Inline::SoftBreak,
        InlineType::LineBreak => Inline::LineBreak,
        InlineType::Code => Inline::Code(literal),
        InlineType::HtmlInline => Inline::Html(literal),
        InlineType::CustomInline => Inline::Custom(literal),
        InlineType::Emph => Inline::Emphasis(project_inlines(node.children())),
        InlineType::Strong => Inline::Strong(project_inlines(node.children())),
        InlineType::Strikethrough => Inline::Strikethrough(project_inlines(node.children())),
        InlineType::Link => Inline::Link {
            children: project_inlines(node.children()),
            title: node.title().map(str::to_owned),
            url: node.url().map(str::to_owned),
        },
        InlineType::Image => Inline::Image {
            children: project_inlines(node.children()),
            title: node.title().map(str::to_owned),
            url: node.url().map(str::to_owned),
        },
        InlineType::Wikilink => Inline::Wikilink {
            children: project_inlines(node.children()),
            title: node.wikilink_title().map(str::to_owned),
            url: node.wikilink_url().map(str::to_owned),
        },
    };
    Some(inline)
}

/// Projects a sequence of inline nodes in order, skipping those without a
/// mapping.
pub fn project_inlines<N: ParseNode>(nodes: &[N]) -> Vec<Inline> {
    nodes.iter().filter_map(project_inline).collect()
}
