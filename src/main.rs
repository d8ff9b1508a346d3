//! CLI entry point for winston.
//!
//! Every query command ingests its locations into a fresh in-memory corpus,
//! then answers from it. Nothing is persisted between runs.

use anyhow::Context;
use clap::{
    Args, Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::Level;
use winston::display::{create_comparison_table, create_pairing_table, create_stats_table};
use winston::io::{ExitCode, OutputFormat, OutputManager};
use winston::{
    Corpus, CorpusError, CorpusResult, DocumentId, DocumentStats, Settings, SharedCorpus,
    SourceFetcher,
};

// JSON output structures
#[derive(Debug, Serialize)]
struct DocumentSummary {
    id: DocumentId,
    location: String,
    #[serde(flatten)]
    stats: DocumentStats,
}

#[derive(Debug, Serialize)]
struct AdjacentScore {
    left: String,
    right: String,
    score: f64,
}

#[derive(Debug, Serialize)]
struct CompareReport {
    documents: Vec<DocumentSummary>,
    scores: Vec<AdjacentScore>,
}

#[derive(Debug, Serialize)]
struct PairingView {
    id: DocumentId,
    left: String,
    right: Option<String>,
    score: f64,
}

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Document similarity and retrieval
#[derive(Parser)]
#[command(
    name = "winston",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compare fetched documents and search across them",
    long_about = "Fetch documents from URLs or files, compare them by token frequency, \
                  and query them by exact token or sentence substring.",
    next_line_help = true,
    styles = clap_cargo_style()
)]
struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Show ingestion progress on stderr
    #[arg(long, global = true)]
    info: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Locations to ingest before answering a query
#[derive(Args, Debug, Clone)]
struct SourceArgs {
    /// URLs (http/https), file:// URLs, or local paths
    #[arg(required = true, num_args = 1..)]
    locations: Vec<String>,

    /// Number of ingest threads (overrides config)
    #[arg(short, long)]
    threads: Option<usize>,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Initialize project
    #[command(about = "Create .winston/settings.toml with default configuration")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration settings
    #[command(about = "Display the effective settings")]
    Config,

    /// Per-document statistics and adjacent-pair similarity
    #[command(
        about = "Print document stats and Pearson scores of consecutive documents",
        after_help = "Example:\n  winston compare https://example.com/a https://example.com/b"
    )]
    Compare {
        #[command(flatten)]
        sources: SourceArgs,
    },

    /// Nearest-neighbour pairing
    #[command(about = "Pair every document with its most similar later document")]
    Pairs {
        #[command(flatten)]
        sources: SourceArgs,
    },

    /// Exact token lookup
    #[command(
        about = "List documents containing a normalized token",
        after_help = "Tokens are lowercase ASCII words. A document is listed once per occurrence\nunless index.multiplicity = \"per_document\"."
    )]
    Search {
        /// Token to look up
        token: String,

        #[command(flatten)]
        sources: SourceArgs,
    },

    /// Sentence substring search
    #[command(about = "List raw sentences containing a case-sensitive substring")]
    Sentences {
        /// Substring to find
        needle: String,

        #[command(flatten)]
        sources: SourceArgs,
    },
}

/// Entry point with tokio async runtime.
///
/// Loads configuration, installs logging, and dispatches the command.
#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let format = OutputFormat::from_json_flag(cli.json);
    let mut output = OutputManager::new(format);

    let settings = match &cli.config {
        Some(config_path) => match Settings::load_from(config_path) {
            Ok(settings) => settings,
            Err(e) => {
                let error = config_error(format!("{}: {e}", config_path.display()));
                return report(&mut output, &error).into();
            }
        },
        None => match Settings::load() {
            Ok(settings) => settings,
            Err(e) => {
                report(&mut output, &config_error(e.to_string()));
                let _ = output.progress("Using default configuration.");
                Settings::default()
            }
        },
    };

    init_tracing(&settings, cli.info);

    match run(cli.command, settings, &mut output).await {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::GeneralError.into()
        }
    }
}

fn config_error(reason: String) -> CorpusError {
    CorpusError::ConfigError { reason }
}

/// Report an error before a command runs; a broken stderr still yields the code.
fn report(output: &mut OutputManager, error: &CorpusError) -> ExitCode {
    output
        .error(error)
        .unwrap_or_else(|_| ExitCode::from_error(error))
}

fn init_tracing(settings: &Settings, info: bool) {
    let level = if settings.debug {
        Level::DEBUG
    } else if info {
        Level::INFO
    } else {
        Level::ERROR
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(
    command: Commands,
    mut settings: Settings,
    output: &mut OutputManager,
) -> anyhow::Result<ExitCode> {
    match command {
        Commands::Init { force } => match Settings::init_config_file(force) {
            Ok(path) => {
                println!("Created configuration file at: {}", path.display());
                println!("Edit this file to customize your settings.");
                Ok(ExitCode::Success)
            }
            Err(e) => Ok(output.error(&config_error(e.to_string()))?),
        },

        Commands::Config => {
            println!("Current Configuration:");
            println!("{}", "=".repeat(50));
            println!(
                "{}",
                toml::to_string_pretty(&settings).context("serializing settings")?
            );
            Ok(ExitCode::Success)
        }

        Commands::Compare { sources } => {
            let corpus = match ingest(&mut settings, sources, output).await? {
                Ok(corpus) => corpus,
                Err(code) => return Ok(code),
            };
            let scores = corpus.adjacent_similarities();

            let report = CompareReport {
                documents: corpus
                    .documents()
                    .iter()
                    .enumerate()
                    .map(|(i, doc)| DocumentSummary {
                        id: DocumentId::from_index(i),
                        location: doc.location().to_string(),
                        stats: doc.stats(),
                    })
                    .collect(),
                scores: corpus
                    .documents()
                    .windows(2)
                    .zip(&scores)
                    .map(|(pair, score)| AdjacentScore {
                        left: pair[0].location().to_string(),
                        right: pair[1].location().to_string(),
                        score: *score,
                    })
                    .collect(),
            };

            let mut text = create_stats_table(&corpus);
            if !scores.is_empty() {
                text.push('\n');
                text.push_str(&create_comparison_table(&corpus, &scores));
            }
            Ok(output.rendered(report, &text)?)
        }

        Commands::Pairs { sources } => {
            let corpus = match ingest(&mut settings, sources, output).await? {
                Ok(corpus) => corpus,
                Err(code) => return Ok(code),
            };
            let pairings = corpus.nearest_neighbors();

            let location = |id: DocumentId| {
                corpus
                    .get(id)
                    .map(|doc| doc.location().to_string())
                    .unwrap_or_default()
            };
            let views: Vec<PairingView> = pairings
                .iter()
                .map(|pairing| PairingView {
                    id: pairing.id,
                    left: location(pairing.left),
                    right: pairing.right.map(location),
                    score: pairing.score,
                })
                .collect();

            let text = create_pairing_table(&corpus, &pairings);
            Ok(output.rendered(views, &text)?)
        }

        Commands::Search { token, sources } => {
            let corpus = match ingest(&mut settings, sources, output).await? {
                Ok(corpus) => corpus,
                Err(code) => return Ok(code),
            };
            let locations = corpus.query_token(&token);
            Ok(output.collection(locations, "documents", &token)?)
        }

        Commands::Sentences { needle, sources } => {
            let corpus = match ingest(&mut settings, sources, output).await? {
                Ok(corpus) => corpus,
                Err(code) => return Ok(code),
            };
            let matches = corpus.query_substring(&needle);
            Ok(output.collection(matches, "sentences", &needle)?)
        }
    }
}

/// Fetch and ingest all locations into a fresh corpus.
///
/// Failed locations are reported and skipped. `Err(code)` is returned only
/// when nothing could be ingested.
async fn ingest(
    settings: &mut Settings,
    sources: SourceArgs,
    output: &mut OutputManager,
) -> anyhow::Result<Result<Corpus, ExitCode>> {
    if let Some(threads) = sources.threads {
        settings.ingest.parallel_threads = threads;
    }

    let shared = SharedCorpus::new(Corpus::from_settings(settings));
    let handle = shared.clone();
    let fetch_config = settings.fetch.clone();
    let threads = settings.ingest.parallel_threads;
    let locations = sources.locations;

    output.progress(&format!("Fetching {} location(s)...", locations.len()))?;

    // The blocking HTTP client runs its own runtime and must live off the
    // async worker threads.
    let outcome = tokio::task::spawn_blocking(move || -> CorpusResult<_> {
        let fetcher = SourceFetcher::new(&fetch_config)?;
        handle.ingest_all_with_threads(&fetcher, &locations, threads)
    })
    .await
    .context("ingest task failed")?;

    let results = match outcome {
        Ok(results) => results,
        Err(e) => return Ok(Err(output.error(&e)?)),
    };

    let mut first_failure: Option<CorpusError> = None;
    for result in results {
        if let Err(e) = result {
            output.error(&e)?;
            first_failure.get_or_insert(e);
        }
    }

    let corpus = match shared.try_into_inner() {
        Ok(corpus) => corpus,
        Err(shared) => shared.read().clone(),
    };

    if corpus.is_empty() {
        let code = first_failure
            .as_ref()
            .map_or(ExitCode::GeneralError, ExitCode::from_error);
        return Ok(Err(code));
    }

    output.set_document_count(corpus.len());
    Ok(Ok(corpus))
}
