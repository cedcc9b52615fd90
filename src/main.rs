use clap::Parser;
use search_store::demo::{self, DemoConfig};
use search_store::logging::init_tracing;
use search_store::search::{self, render, SearchState};
use search_store::store::HistoryRecorder;
use std::path::PathBuf;
use std::process::ExitCode;

/// Transitions kept for the end-of-run summary.
const SESSION_HISTORY: usize = 256;

/// Play a scripted search session against a fresh store.
#[derive(Debug, Parser)]
#[command(name = "search-store", version, about)]
struct Cli {
    /// TOML file with `step_delay_ms` and `[[steps]]`; the built-in script is used when absent
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the pause between dispatches, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Tracing filter directive (RUST_LOG wins when set)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let mut config = match &cli.config {
        Some(path) => match DemoConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => DemoConfig::default(),
    };

    if let Some(delay_ms) = cli.delay_ms {
        config.step_delay_ms = delay_ms;
        if let Err(e) = config.validate() {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    }

    let recorder = HistoryRecorder::<SearchState>::with_capacity(SESSION_HISTORY);
    let store = search::store_builder().middleware(recorder.clone()).build();
    println!("{}", render(&store.state()));

    let weak = store.downgrade();
    let subscription = store.subscribe(move || {
        if let Some(store) = weak.upgrade() {
            println!("{}", render(&store.state()));
        }
    });

    demo::run(&store, &config).await;
    subscription.unsubscribe();

    let history = recorder.history();
    tracing::info!(
        transitions = history.len(),
        elapsed_ms = history.duration().map_or(0, |d| d.as_millis() as u64),
        "session recorded"
    );

    ExitCode::SUCCESS
}
