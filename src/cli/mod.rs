//! Command-line interface for manifold.
//!
//! Provides commands for browsing books and topics, opening book and story
//! pages, building shareable links, and inspecting the loaded snapshot.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use crate::config;
use crate::content::ContentStore;
use crate::navigation::{NavAction, NavState, Route, SortMode, ViewMode};
use crate::views::attribute_domains;

pub mod pages;

/// manifold - browse study resources by book, story and theme
#[derive(Parser, Debug)]
#[command(name = "manifold")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Snapshot file to load instead of the configured or bundled one
    #[arg(long, global = true, env = config::CONTENT_ENV)]
    pub content: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List books, optionally filtered by name or category
    Books {
        /// Search text
        #[arg(short, long, default_value = "")]
        query: String,

        /// Ordering of the list
        #[arg(short, long, value_enum, default_value = "canonical")]
        sort: SortArg,
    },

    /// List themes and the stories filed under them
    Topics {
        /// Search text matched against theme names
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Show a book page
    Book {
        /// Book ID
        book_id: String,
    },

    /// Show a story page
    Story {
        /// Book ID
        book_id: String,

        /// Story ID (unique within the book)
        story_id: String,
    },

    /// Render the page a location points at (e.g. "/?q=exodus&view=topics")
    Open {
        /// Location path with optional query string
        location: String,
    },

    /// Print the shareable location for a home-page state
    Link {
        /// Search text
        #[arg(short, long, default_value = "")]
        query: String,

        /// View mode
        #[arg(short, long, value_enum, default_value = "books")]
        view: ViewArg,

        /// Ordering of the book list
        #[arg(short, long, value_enum, default_value = "canonical")]
        sort: SortArg,
    },

    /// List credited source domains
    Sources,

    /// Load the snapshot and report on it
    Validate,

    /// Show resolved configuration (debug)
    Config,
}

/// View mode for CLI (maps to ViewMode)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ViewArg {
    Books,
    Topics,
}

impl From<ViewArg> for ViewMode {
    fn from(v: ViewArg) -> Self {
        match v {
            ViewArg::Books => ViewMode::Books,
            ViewArg::Topics => ViewMode::Topics,
        }
    }
}

/// Sort mode for CLI (maps to SortMode)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortArg {
    /// Canonical book order
    Canonical,

    /// Alphabetical by name
    Name,

    /// Most resources first
    Resources,
}

impl From<SortArg> for SortMode {
    fn from(s: SortArg) -> Self {
        match s {
            SortArg::Canonical => SortMode::Canonical,
            SortArg::Name => SortMode::Name,
            SortArg::Resources => SortMode::Resources,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let content = self.content;

        match self.command {
            Commands::Books { query, sort } => {
                let mut nav = NavState::default();
                nav.apply(NavAction::SetQuery(query));
                nav.apply(NavAction::SetSort(sort.into()));
                show_route(content, Route::Home(nav)).await
            }
            Commands::Topics { query } => {
                let mut nav = NavState::default();
                nav.apply(NavAction::SetQuery(query));
                nav.apply(NavAction::SetView(ViewMode::Topics));
                show_route(content, Route::Home(nav)).await
            }
            Commands::Book { book_id } => show_route(content, Route::Book { book_id }).await,
            Commands::Story { book_id, story_id } => {
                show_route(content, Route::Story { book_id, story_id }).await
            }
            Commands::Open { location } => show_route(content, Route::parse(&location)).await,
            Commands::Link { query, view, sort } => {
                let nav = NavState::new(query, view.into()).with_sort(sort.into());
                println!("{}", nav.to_location());
                Ok(())
            }
            Commands::Sources => list_sources(content).await,
            Commands::Validate => validate(content).await,
            Commands::Config => show_config(),
        }
    }
}

/// Load the snapshot named on the command line, then the configured one,
/// falling back to the bundled snapshot
pub async fn load_store(content: Option<PathBuf>) -> Result<ContentStore> {
    let path = match content {
        Some(path) => Some(path),
        None => config::config()?.content_path.clone(),
    };

    match path {
        Some(path) => ContentStore::load(&path)
            .await
            .with_context(|| format!("Failed to load content from {}", path.display())),
        None => {
            debug!("Using bundled snapshot");
            ContentStore::bundled().context("Bundled snapshot is invalid")
        }
    }
}

/// Render whichever page a route names
async fn show_route(content: Option<PathBuf>, route: Route) -> Result<()> {
    let store = load_store(content).await?;
    let page = pages::render_route(&store, &route)?;
    print!("{}", page);
    Ok(())
}

/// List credited source domains
async fn list_sources(content: Option<PathBuf>) -> Result<()> {
    let store = load_store(content).await?;
    let cfg = config::config()?;

    let domains = attribute_domains(&store, &cfg.attribution);
    if domains.is_empty() {
        println!("No source reaches {} resources", cfg.attribution.min_count);
        return Ok(());
    }

    println!("{:<32} {:>6}  {:<50}", "DOMAIN", "COUNT", "FAVICON");
    println!("{}", "-".repeat(90));

    for domain in &domains {
        println!(
            "{:<32} {:>6}  {:<50}",
            domain.hostname,
            domain.count,
            domain.favicon_url(&cfg.favicon_service)
        );
    }

    println!("\nTotal: {} sources", domains.len());

    Ok(())
}

/// Load the snapshot and report on it
async fn validate(content: Option<PathBuf>) -> Result<()> {
    let store = load_store(content).await?;

    println!("Snapshot OK");
    println!("  Digest:    {}", store.digest());
    println!("  Books:     {}", store.len());
    println!("  Stories:   {}", store.story_count());
    println!("  Resources: {}", store.resource_count());

    let unknown = store.unknown_categories();
    if unknown.is_empty() {
        println!("  Categories: all recognised");
    } else {
        println!("  Unrecognised categories (default badge):");
        for book in unknown {
            println!("    {} ({})", book.category, book.id);
        }
    }

    Ok(())
}

/// Show the resolved configuration (for debugging)
fn show_config() -> Result<()> {
    let cfg = config::config()?;

    println!("Manifold Configuration");
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!(
        "Content:     {}",
        cfg.content_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(bundled snapshot)".to_string())
    );
    println!();
    println!("Attribution:");
    println!("  Min count:       {}", cfg.attribution.min_count);
    println!("  Blocklist:       {}", cfg.attribution.blocklist.join(", "));
    println!("  Favicon service: {}", cfg.favicon_service);

    Ok(())
}
