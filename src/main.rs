#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use lock_bench::{gen_cmd, list_cmd, play_cmd, run_cmd};

#[derive(Parser, Debug)]
#[command(name = "lock-bench")]
#[command(about = "Micro-benchmark for field-granular lock contention", long_about = None)]
struct Cli {
    /// Enable verbose logging (or set LOCK_BENCH_LOG)
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate trace files for every (variant, threads, worker) triple
    Gen {
        /// Path to sweep config (bench-config.toml)
        #[arg(long)]
        config: Option<std::path::PathBuf>,
        /// Directory to write trace files into
        #[arg(long, default_value = "traces")]
        out_dir: std::path::PathBuf,
        /// Fixed generator seed for reproducible traces
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run the full variant x thread-count sweep and print the table
    Run {
        /// Path to sweep config (bench-config.toml)
        #[arg(long)]
        config: Option<std::path::PathBuf>,
        /// Read traces from this directory instead of generating in memory
        #[arg(long)]
        trace_dir: Option<std::path::PathBuf>,
        /// Append machine-readable records to this JSONL file
        #[arg(long)]
        jsonl: Option<std::path::PathBuf>,
        /// Append flat rows to this CSV file
        #[arg(long)]
        csv: Option<std::path::PathBuf>,
        /// Fixed generator seed for reproducible traces
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Replay one trace file on a single worker
    Play {
        /// Path to the trace file
        #[arg(long)]
        trace: std::path::PathBuf,
        /// Number of measured repeats to run
        #[arg(long, default_value_t = 5)]
        repeats: usize,
    },

    /// List workload variants from the config
    List {
        /// Path to sweep config (bench-config.toml)
        #[arg(long)]
        config: Option<std::path::PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let env = std::env::var("LOCK_BENCH_LOG").unwrap_or_else(|_| {
        if verbose {
            "lock_bench=debug".to_string()
        } else {
            "lock_bench=info".to_string()
        }
    });
    let _ = tracing_subscriber::fmt()
        .with_span_events(FmtSpan::ACTIVE)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_env_filter(EnvFilter::new(env))
        .try_init();
}

fn main() {
    color_eyre::install().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Gen {
            config,
            out_dir,
            seed,
        } => gen_cmd::run(config, out_dir, seed),
        Commands::Run {
            config,
            trace_dir,
            jsonl,
            csv,
            seed,
        } => run_cmd::run(config, trace_dir, jsonl, csv, seed),
        Commands::Play { trace, repeats } => play_cmd::run(trace, repeats),
        Commands::List { config } => list_cmd::run(config),
    };

    if let Err(e) = result {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
