use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use mdtree_config::Config;
use mdtree_engine::{
    Block, ParseOptions, flat_elements, format_blocks, format_flat_elements,
    format_list_elements, list_elements, project_blocks, read_document, scan_markdown_files,
    table_of_contents_to,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mdtree-cli")]
#[command(about = "Print the typed outline of Markdown documents")]
struct Cli {
    /// Markdown file, or a directory to scan for .md files
    /// (defaults to notes_path from the config file)
    path: Option<PathBuf>,

    /// Config file to use instead of ~/.config/mdtree/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Which projection to print
    #[arg(short, long, value_enum, default_value_t = View::Blocks)]
    view: View,

    /// Deepest heading level shown by the toc view
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=6))]
    toc_depth: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum View {
    /// Block and inline tree
    Blocks,
    /// Normalized list elements
    Lists,
    /// Flat document elements
    Flat,
    /// Table of contents
    Toc,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    let Some(path) = cli.path.or_else(|| config.notes_path.clone()) else {
        bail!(
            "No input path provided and no notes_path in {}",
            Config::config_path().display()
        );
    };

    let options = config.parse_options();
    let toc_depth = cli.toc_depth.unwrap_or(config.toc.max_level);

    if path.is_dir() {
        let files = scan_markdown_files(&path)
            .with_context(|| format!("Failed to scan {}", path.display()))?;
        log::info!("found {} markdown files under {}", files.len(), path.display());
        for file in files {
            let name = file.strip_prefix(&path).unwrap_or(&file);
            println!("== {} ==", name.display());
            print!("{}", render_file(&file, &options, cli.view, toc_depth)?);
        }
    } else {
        print!("{}", render_file(&path, &options, cli.view, toc_depth)?);
    }

    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("Config file not found: {}", path.display())),
        None => {
            log::info!("Config path: {}", Config::config_path().display());
            Ok(Config::load()?.unwrap_or_default())
        }
    }
}

fn render_file(path: &Path, options: &ParseOptions, view: View, toc_depth: u8) -> Result<String> {
    let doc = read_document(path, options)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(render(&project_blocks(&doc), view, toc_depth))
}

fn render(blocks: &[Block], view: View, toc_depth: u8) -> String {
    match view {
        View::Blocks => format_blocks(blocks),
        View::Lists => format_list_elements(&list_elements(blocks)),
        View::Flat => format_flat_elements(&flat_elements(blocks)),
        View::Toc => {
            let toc: Vec<Block> = table_of_contents_to(blocks, toc_depth).cloned().collect();
            format_blocks(&toc)
        }
    }
}
