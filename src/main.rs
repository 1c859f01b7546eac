//! Dexcards - Main Binary
//!
//! Fetches creatures from the catalog and shows them as flip-cards

use clap::{Args, Parser, Subcommand, ValueEnum};
use dexcards::{
    config::{GalleryConfig, DEFAULT_BASE_URL, DEFAULT_COLUMNS, DEFAULT_COUNT},
    core::{ArtworkSet, DexNumber},
    loader::{FetchReport, Fetcher, HttpCatalog},
    logger::{FetchLogger, VerbosityLevel},
    view::{
        render::{footer, header, loading},
        render_card, render_page, Browser, CardView, FlipState, Gallery, RenderOptions,
    },
    DexError, Result,
};
use std::io;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Artwork set shown on the card front
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ArtworkArg {
    /// Dream World vector art
    DreamWorld,
    /// Official artwork
    OfficialArtwork,
    /// HOME renders
    Home,
}

impl From<ArtworkArg> for ArtworkSet {
    fn from(arg: ArtworkArg) -> Self {
        match arg {
            ArtworkArg::DreamWorld => ArtworkSet::DreamWorld,
            ArtworkArg::OfficialArtwork => ArtworkSet::OfficialArtwork,
            ArtworkArg::Home => ArtworkSet::Home,
        }
    }
}

/// Verbosity level for diagnostics (custom parser supporting both names and numbers)
#[derive(Debug, Clone, Copy)]
struct VerbosityArg(VerbosityLevel);

impl std::str::FromStr for VerbosityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityArg(VerbosityLevel::Silent)),
            "minimal" | "1" => Ok(VerbosityArg(VerbosityLevel::Minimal)),
            "normal" | "2" => Ok(VerbosityArg(VerbosityLevel::Normal)),
            "verbose" | "3" => Ok(VerbosityArg(VerbosityLevel::Verbose)),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

impl From<VerbosityArg> for VerbosityLevel {
    fn from(arg: VerbosityArg) -> Self {
        arg.0
    }
}

#[derive(Parser)]
#[command(name = "dex")]
#[command(about = "Dexcards - creature flip-card gallery", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Catalog and display options shared by every command
#[derive(Args, Debug, Clone)]
struct CatalogArgs {
    /// Catalog host
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Artwork set shown on the card front
    #[arg(long, value_enum, default_value = "dream-world")]
    artwork: ArtworkArg,

    /// Per-request timeout in seconds (default: wait indefinitely)
    #[arg(long, value_name = "SECS")]
    timeout_secs: Option<u64>,

    /// Disable colored card borders
    #[arg(long)]
    no_color: bool,

    /// Verbosity level for diagnostics (0=silent, 1=minimal, 2=normal, 3=verbose)
    #[arg(long, default_value = "normal", short = 'v')]
    verbosity: VerbosityArg,
}

/// Which creatures to fetch and how to lay them out
#[derive(Args, Debug, Clone)]
struct RangeArgs {
    /// First dex number
    #[arg(long, default_value_t = 1)]
    first: u32,

    /// Number of consecutive creatures
    #[arg(long, short = 'n', default_value_t = DEFAULT_COUNT)]
    count: u32,

    /// Requests in flight at once (1 = one after another)
    #[arg(long, default_value_t = 1)]
    concurrency: usize,

    /// Cards per row
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    columns: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and print the gallery
    Gallery {
        #[command(flatten)]
        range: RangeArgs,

        #[command(flatten)]
        catalog: CatalogArgs,

        /// Print card views as JSON instead of cards
        #[arg(long)]
        json: bool,
    },

    /// Fetch one creature and print both faces of its card
    Show {
        /// Dex number
        #[arg(value_name = "ID")]
        id: u32,

        #[command(flatten)]
        catalog: CatalogArgs,
    },

    /// Fetch the gallery, then flip cards interactively
    Browse {
        #[command(flatten)]
        range: RangeArgs,

        #[command(flatten)]
        catalog: CatalogArgs,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Gallery {
            range,
            catalog,
            json,
        } => run_gallery(build_config(&range, &catalog)?, json).await?,
        Commands::Show { id, catalog } => {
            let range = RangeArgs {
                first: id,
                count: 1,
                concurrency: 1,
                columns: DEFAULT_COLUMNS,
            };
            run_show(build_config(&range, &catalog)?).await?
        }
        Commands::Browse { range, catalog } => {
            run_browse(build_config(&range, &catalog)?).await?
        }
    }

    Ok(())
}

fn build_config(range: &RangeArgs, catalog: &CatalogArgs) -> Result<GalleryConfig> {
    let config = GalleryConfig {
        base_url: catalog.base_url.clone(),
        first: range.first,
        count: range.count,
        concurrency: range.concurrency,
        timeout: catalog.timeout_secs.map(Duration::from_secs),
        artwork: catalog.artwork.into(),
        columns: range.columns,
        color: !catalog.no_color,
        verbosity: catalog.verbosity.into(),
    };
    config.validate()?;
    Ok(config)
}

fn render_options(config: &GalleryConfig) -> RenderOptions {
    RenderOptions {
        color: config.color,
        columns: config.columns,
    }
}

/// Fetch the configured range; Ctrl-C cancels the batch
async fn fetch_gallery(config: &GalleryConfig, logger: &FetchLogger) -> Result<FetchReport> {
    let catalog = HttpCatalog::from_config(config)?;
    let fetcher = Fetcher::new(catalog).with_concurrency(config.concurrency);

    let cancel = CancellationToken::new();
    let interrupt = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        })
    };

    // The loading line is part of the page, not a log message
    eprint!("{}", loading());
    let report = fetcher.fetch_all(&config.ids(), &cancel, logger).await;
    interrupt.abort();

    logger.minimal(&format!(
        "Loaded {} of {} creatures",
        report.loaded(),
        report.requested
    ));
    logger.verbose(&format!(
        "(Loading time: {:.2}ms)",
        report.elapsed.as_secs_f64() * 1000.0
    ));
    Ok(report)
}

async fn run_gallery(config: GalleryConfig, json: bool) -> Result<()> {
    let logger = FetchLogger::with_verbosity(config.verbosity);
    let report = fetch_gallery(&config, &logger).await?;

    if json {
        let views = CardView::from_records(&report.records, config.artwork);
        let out = serde_json::to_string_pretty(&views)
            .map_err(|e| DexError::Serialization(e.to_string()))?;
        println!("{out}");
    } else {
        let gallery = Gallery::from_records(&report.records, config.artwork);
        print!("{}", render_page(&gallery, &render_options(&config)));
    }
    Ok(())
}

async fn run_show(config: GalleryConfig) -> Result<()> {
    let id = DexNumber::new(config.first)
        .ok_or_else(|| DexError::InvalidConfig("dex number must be at least 1".to_string()))?;

    let logger = FetchLogger::with_verbosity(config.verbosity);
    let fetcher = Fetcher::new(HttpCatalog::from_config(&config)?);
    logger.verbose(&format!("requesting {}", config.endpoint(id)));

    let record = fetcher.fetch_one(id).await.inspect_err(|e| {
        logger.fetch_error(id.get(), e);
    })?;
    let view = CardView::from_record(&record, config.artwork);

    let options = render_options(&config);
    let front = render_card(&view, FlipState::Front, &options);
    let back = render_card(&view, FlipState::Back, &options);

    print!("{}", header());
    for (f, b) in front.iter().zip(&back) {
        println!("{f} {b}");
    }
    println!(
        "Artwork: {}",
        view.image.as_deref().unwrap_or("(none)")
    );
    print!("{}", footer());
    Ok(())
}

async fn run_browse(config: GalleryConfig) -> Result<()> {
    let logger = FetchLogger::with_verbosity(config.verbosity);
    let report = fetch_gallery(&config, &logger).await?;
    if report.cancelled {
        return Ok(());
    }

    // The fetch installed a Ctrl-C handler; from here on Ctrl-C quits
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            std::process::exit(130);
        }
    });

    let mut gallery = Gallery::from_records(&report.records, config.artwork);
    let options = render_options(&config);

    // Stdin reads block, so keep them off the runtime's worker threads
    tokio::task::spawn_blocking(move || {
        let stdin = io::stdin();
        let mut browser = Browser::new(&mut gallery, options, stdin.lock(), io::stdout());
        browser.run()
    })
    .await?
}
