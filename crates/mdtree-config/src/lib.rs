use mdtree_engine::{ParseOptions, TOC_MAX_LEVEL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid table of contents depth {max_level} in {config_path}: must be 1 to 6")]
    InvalidTocDepth { config_path: PathBuf, max_level: u8 },
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default input when no path is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes_path: Option<PathBuf>,
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub toc: TocConfig,
}

/// Markdown extensions, mirroring [`ParseOptions`]. Missing keys take the
/// parser defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub tables: bool,
    pub strikethrough: bool,
    pub tasklists: bool,
    pub wikilinks: bool,
    pub footnotes: bool,
    pub front_matter: bool,
    pub smart_punctuation: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParseOptions::default().into()
    }
}

impl From<ParseOptions> for ParserConfig {
    fn from(options: ParseOptions) -> Self {
        Self {
            tables: options.tables,
            strikethrough: options.strikethrough,
            tasklists: options.tasklists,
            wikilinks: options.wikilinks,
            footnotes: options.footnotes,
            front_matter: options.front_matter,
            smart_punctuation: options.smart_punctuation,
        }
    }
}

impl From<ParserConfig> for ParseOptions {
    fn from(config: ParserConfig) -> Self {
        Self {
            tables: config.tables,
            strikethrough: config.strikethrough,
            tasklists: config.tasklists,
            wikilinks: config.wikilinks,
            footnotes: config.footnotes,
            front_matter: config.front_matter,
            smart_punctuation: config.smart_punctuation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TocConfig {
    /// Deepest heading level listed in the table of contents
    pub max_level: u8,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            max_level: TOC_MAX_LEVEL,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        if !(1..=6).contains(&config.toc.max_level) {
            return Err(ConfigError::InvalidTocDepth {
                config_path: config_path.to_path_buf(),
                max_level: config.toc.max_level,
            });
        }

        // Expand shell variables and tilde in the loaded notes path
        config.notes_path = config
            .notes_path
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/mdtree");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn parse_options(&self) -> ParseOptions {
        self.parser.into()
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
