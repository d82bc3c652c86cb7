//! CLI entrypoint for ara-merge
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use aramerge_application::{
    MergeBatchUseCase, MergeEventLogger, MergeProgressNotifier, MergeQueryUseCase, NoProgress,
};
use aramerge_domain::ConfigIssue;
use aramerge_domain::OutputFormat as ReportFormat;
use aramerge_infrastructure::{
    ConfigLoader, FileConfig, FsMergeWriter, FsResponseSource, JsonlMergeEventLogger,
    QueryLayout, discover_query_dirs,
};
use aramerge_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

fn init_tracing(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    // Initialize logging based on verbosity level
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .with_context(|| format!("--log-file {} has no file name", path.display()))?;
    std::fs::create_dir_all(directory)
        .with_context(|| format!("Could not create log directory {}", directory.display()))?;

    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(directory, file_name));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr.and(file_writer))
        .init();

    Ok(Some(guard))
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?
    };

    let issues = config.validate();
    for issue in &issues {
        warn!("{}", issue);
    }
    let errors = ConfigIssue::error_count(&issues);
    if errors > 0 {
        bail!("Configuration has {} error(s); see above", errors);
    }

    Ok(config)
}

fn query_dirs(cli: &Cli, config: &FileConfig) -> Result<Vec<PathBuf>> {
    let mut dirs = cli.query_dirs.clone();

    if let Some(root) = &cli.root {
        let found = discover_query_dirs(root, &config.input.query_graph_file)
            .with_context(|| format!("Could not scan {}", root.display()))?;
        info!("Found {} query directories under {}", found.len(), root.display());
        dirs.extend(found);
    }

    if dirs.is_empty() {
        bail!("No query directories given. Pass QUERY_DIR arguments or --root <DIR>.");
    }
    Ok(dirs)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let _log_guard = init_tracing(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting ara-merge");

    let config = load_config(&cli)?;
    if !config.output.color {
        colored::control::set_override(false);
    }
    let format: ReportFormat = cli.output.map(Into::into).unwrap_or(config.output.format);
    let dirs = query_dirs(&cli, &config)?;

    // === Dependency Injection ===
    let layout = QueryLayout::from_config(&config);
    let source = Arc::new(FsResponseSource::new(layout.clone()));
    let writer = Arc::new(FsMergeWriter::new(layout).with_pretty(config.output.pretty));

    let mut query_use_case = MergeQueryUseCase::new(source, writer);
    if let Some(path) = &cli.event_log {
        match JsonlMergeEventLogger::new(path) {
            Some(logger) => {
                info!("Recording merge events to {}", logger.path().display());
                query_use_case =
                    query_use_case.with_event_logger(Arc::new(logger) as Arc<dyn MergeEventLogger>);
            }
            None => warn!("Continuing without merge event log"),
        }
    }
    let batch = MergeBatchUseCase::new(query_use_case);

    let progress: Box<dyn MergeProgressNotifier> = if cli.quiet || format == ReportFormat::Json {
        Box::new(NoProgress)
    } else if cli.verbose > 0 {
        Box::new(SimpleProgress)
    } else {
        Box::new(ProgressReporter::new())
    };

    let output = batch
        .execute_with_progress(dirs, config.merge.to_params(), progress.as_ref())
        .await;

    for merged in output.succeeded() {
        let text = match format {
            ReportFormat::Summary => ConsoleFormatter::format_summary(merged),
            ReportFormat::Json => ConsoleFormatter::format_json(merged),
        };
        println!("{}", text);
    }

    if format == ReportFormat::Summary || output.has_failures() {
        eprint!("{}", ConsoleFormatter::format_batch_footer(&output));
    }

    if output.has_failures() {
        bail!(
            "{} of {} queries failed to merge",
            output.failure_count(),
            output.outcomes.len()
        );
    }

    Ok(())
}
