//! The closed tag vocabulary understood by the projectors.
//!
//! Parse nodes carry their type as a string tag. Lookup through
//! [`InlineType::from_tag`] / [`BlockType::from_tag`] is the only place strings
//! are compared; everything downstream matches on the enums. Tags outside the
//! vocabulary (structural tags such as `document` and `item`, or tags from
//! extensions this crate does not model) have no mapping.

/// Inline-level tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineType {
    Text,
    SoftBreak,
    LineBreak,
    Code,
    HtmlInline,
    CustomInline,
    Emph,
    Strong,
    Strikethrough,
    Link,
    Image,
    Wikilink,
}

impl InlineType {
    /// Every inline tag, in declaration order.
    pub const ALL: [InlineType; 12] = [
        InlineType::Text,
        InlineType::SoftBreak,
        InlineType::LineBreak,
        InlineType::Code,
        InlineType::HtmlInline,
        InlineType::CustomInline,
        InlineType::Emph,
        InlineType::Strong,
        InlineType::Strikethrough,
        InlineType::Link,
        InlineType::Image,
        InlineType::Wikilink,
    ];

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.as_tag() == tag)
    }

    pub fn as_tag(self) -> &'static str {
        match self {
            InlineType::Text => "text",
            InlineType::SoftBreak => "softbreak",
            InlineType::LineBreak => "linebreak",
            InlineType::Code => "code",
            InlineType::HtmlInline => "html_inline",
            InlineType::CustomInline => "custom_inline",
            InlineType::Emph => "emph",
            InlineType::Strong => "strong",
            InlineType::Strikethrough => "strikethrough",
            InlineType::Link => "link",
            InlineType::Image => "image",
            InlineType::Wikilink => "wikilink",
        }
    }

    /// Tags whose node must carry literal text.
    pub fn has_literal(self) -> bool {
        matches!(
            self,
            InlineType::Text | InlineType::Code | InlineType::HtmlInline | InlineType::CustomInline
        )
    }
}

/// Block-level tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    BlockQuote,
    CodeBlock,
    CustomBlock,
    Heading,
    HtmlBlock,
    List,
    Paragraph,
    Table,
    TableCell,
    TableHeader,
    TableRow,
    Tasklist,
    ThematicBreak,
}

impl BlockType {
    pub const ALL: [BlockType; 13] = [
        BlockType::BlockQuote,
        BlockType::CodeBlock,
        BlockType::CustomBlock,
        BlockType::Heading,
        BlockType::HtmlBlock,
        BlockType::List,
        BlockType::Paragraph,
        BlockType::Table,
        BlockType::TableCell,
        BlockType::TableHeader,
        BlockType::TableRow,
        BlockType::Tasklist,
        BlockType::ThematicBreak,
    ];

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.as_tag() == tag)
    }

    pub fn as_tag(self) -> &'static str {
        match self {
            BlockType::BlockQuote => "block_quote",
            BlockType::CodeBlock => "code_block",
            BlockType::CustomBlock => "custom_block",
            BlockType::Heading => "heading",
            BlockType::HtmlBlock => "html_block",
            BlockType::List => "list",
            BlockType::Paragraph => "paragraph",
            BlockType::Table => "table",
            BlockType::TableCell => "table_cell",
            BlockType::TableHeader => "table_header",
            BlockType::TableRow => "table_row",
            BlockType::Tasklist => "tasklist",
            BlockType::ThematicBreak => "thematic_break",
        }
    }

    /// Tags whose node must carry literal text.
    pub fn has_literal(self) -> bool {
        matches!(
            self,
            BlockType::CodeBlock | BlockType::HtmlBlock | BlockType::CustomBlock
        )
    }
}

/// Structural tags emitted by parsers that are not projected on their own.
pub const DOCUMENT_TAG: &str = "document";
pub const ITEM_TAG: &str = "item";

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn inline_tags_round_trip() {
        for ty in InlineType::ALL {
            assert_eq!(InlineType::from_tag(ty.as_tag()), Some(ty));
        }
    }

    #[test]
    fn block_tags_round_trip() {
        for ty in BlockType::ALL {
            assert_eq!(BlockType::from_tag(ty.as_tag()), Some(ty));
        }
    }

    #[rstest]
    #[case(DOCUMENT_TAG)]
    #[case(ITEM_TAG)]
    #[case("footnote_reference")]
    #[case("math")]
    #[case("Paragraph")]
    #[case("")]
    fn unknown_tags_have_no_mapping(#[case] tag: &str) {
        assert_eq!(InlineType::from_tag(tag), None);
        assert_eq!(BlockType::from_tag(tag), None);
    }

    #[test]
    fn literal_bearing_tags() {
        let inline: Vec<_> = InlineType::ALL
            .into_iter()
            .filter(|ty| ty.has_literal())
            .map(InlineType::as_tag)
            .collect();
        assert_eq!(inline, vec!["text", "code", "html_inline", "custom_inline"]);

        let block: Vec<_> = BlockType::ALL
            .into_iter()
            .filter(|ty| ty.has_literal())
            .map(BlockType::as_tag)
            .collect();
        assert_eq!(block, vec!["code_block", "custom_block", "html_block"]);
    }

    #[test]
    fn vocabularies_do_not_overlap() {
        for ty in InlineType::ALL {
            assert_eq!(BlockType::from_tag(ty.as_tag()), None, "{ty:?}");
        }
    }
}
