use pulldown_cmark::Options;

/// Markdown extensions recognized by [`parse_document`](super::parse_document).
///
/// CommonMark is always on. The default enables the GitHub-flavoured set this
/// crate models (tables, strikethrough, task lists) plus wiki-links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub tables: bool,
    pub strikethrough: bool,
    pub tasklists: bool,
    pub wikilinks: bool,
    pub footnotes: bool,
    /// YAML (`---`) and TOML (`+++`) front matter blocks.
    pub front_matter: bool,
    pub smart_punctuation: bool,
}

impl ParseOptions {
    /// Plain CommonMark with every extension off.
    pub const fn commonmark() -> Self {
        Self {
            tables: false,
            strikethrough: false,
            tasklists: false,
            wikilinks: false,
            footnotes: false,
            front_matter: false,
            smart_punctuation: false,
        }
    }

    pub(crate) fn to_pulldown(self) -> Options {
        let mut options = Options::empty();
        options.set(Options::ENABLE_TABLES, self.tables);
        options.set(Options::ENABLE_STRIKETHROUGH, self.strikethrough);
        options.set(Options::ENABLE_TASKLISTS, self.tasklists);
        options.set(Options::ENABLE_WIKILINKS, self.wikilinks);
        options.set(Options::ENABLE_FOOTNOTES, self.footnotes);
        options.set(
            Options::ENABLE_YAML_STYLE_METADATA_BLOCKS,
            self.front_matter,
        );
        options.set(
            Options::ENABLE_PLUSES_DELIMITED_METADATA_BLOCKS,
            self.front_matter,
        );
        options.set(Options::ENABLE_SMART_PUNCTUATION, self.smart_punctuation);
        options
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            tasklists: true,
            wikilinks: true,
            ..Self::commonmark()
        }
    }
}
