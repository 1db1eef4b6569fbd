//! CLI entry point for the grade mapper.
//!
//! Provides subcommands for grading a single score, running an interactive
//! grading session, and describing the available difficulty levels.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use grade_mapper::{
    config::GradingConfig,
    display::is_over_limit,
    grading::{ComplexityLevel, compute},
    help::{explanation, level_listing},
    logging::env_filter,
    output::{GradeRecord, append_records, render_table, to_json},
    parser::parse_score,
    session,
};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{
    Layer,
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "grade_mapper")]
#[command(about = "Convert raw test scores into 2-10 grades per difficulty level", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that grades scores.
#[derive(Args)]
struct SessionArgs {
    /// Total points of the test
    #[arg(short, long)]
    total: Option<f64>,

    /// Number of difficulty levels: 1, 2, 3 (or single, dual, triple)
    #[arg(short, long)]
    levels: Option<ComplexityLevel>,

    /// JSON config file with `total_points` and `levels`
    #[arg(short, long)]
    config: Option<String>,

    /// CSV file to append every computed grade to
    #[arg(short, long)]
    output: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade a single score
    Grade {
        /// Points earned (`,` or `.` as decimal separator)
        #[arg(value_name = "SCORE", allow_hyphen_values = true)]
        score: String,

        #[command(flatten)]
        session: SessionArgs,

        /// Print the results as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Read scores from stdin, one per line, and grade each
    Interactive {
        #[command(flatten)]
        session: SessionArgs,
    },
    /// List the available difficulty levels
    Levels,
    /// Explain how grades are computed
    Explain,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/grade_mapper.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("grade_mapper.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(env_filter("RUST_LOG", LevelFilter::WARN));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(env_filter("RUST_LOG_JSON", LevelFilter::DEBUG));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Grade {
            score,
            session: args,
            json,
        } => {
            let config = resolve_config(&args)?;
            let raw_score = parse_score(&score)?;
            grade_once(raw_score, &config, args.output.as_deref(), json)?;
        }
        Commands::Interactive { session: args } => {
            let config = resolve_config(&args)?;
            let stdin = std::io::stdin();
            session::run(&config, stdin.lock(), std::io::stdout(), args.output.as_deref())?;
        }
        Commands::Levels => print!("{}", level_listing()),
        Commands::Explain => print!("{}", explanation()),
    }

    Ok(())
}

/// Resolves the session config: config file if given, otherwise env, then flags.
#[tracing::instrument(skip(args), fields(config_file = args.config.as_deref()))]
fn resolve_config(args: &SessionArgs) -> Result<GradingConfig> {
    let base = match &args.config {
        Some(path) => GradingConfig::load(path)?,
        None => GradingConfig::from_env()?,
    };
    let config = base.with_overrides(args.total, args.levels).validate()?;
    info!(total_points = config.total_points, levels = %config.levels, "Config resolved");
    Ok(config)
}

/// Grades one score and prints it as a table or JSON.
fn grade_once(raw_score: f64, config: &GradingConfig, output: Option<&str>, json: bool) -> Result<()> {
    if is_over_limit(raw_score, config.total_points) {
        warn!(raw_score, total_points = config.total_points, "Score exceeds total");
    }

    let results = compute(raw_score, config.total_points, config.levels);

    if json {
        println!("{}", to_json(raw_score, config, &results)?);
    } else {
        print!("{}", render_table(raw_score, config, &results));
    }

    if let Some(path) = output {
        append_records(path, &GradeRecord::from_results(raw_score, config, &results))?;
    }
    Ok(())
}
