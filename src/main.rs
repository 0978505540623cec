use clap::Parser;
use colored::Colorize;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;
use tracing::info;

use depmerge::aggregate::Aggregator;
use depmerge::config::Config;
use depmerge::discovery::DescriptorFinder;
use depmerge::report::{self, Reporter, TerminalReporter};

/// depmerge - Merge the dependencies of every project.xml in a tree
#[derive(Parser, Debug)]
#[command(name = "depmerge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root directory to scan for descriptors [default: ..]
    path: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Deepest directory level to scan
    #[arg(long)]
    max_depth: Option<usize>,

    /// Path fragments to exclude (can be specified multiple times)
    #[arg(short, long)]
    exclude: Vec<String>,

    /// Descriptor file name to collect
    #[arg(long, value_name = "NAME")]
    descriptor: Option<String>,

    /// Output file; `.new` is appended if it already exists
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "xml")]
    format: OutputFormat,

    /// Print the result instead of writing a file
    #[arg(long)]
    dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only output results
    #[arg(short, long)]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Debug, Default)]
enum OutputFormat {
    #[default]
    Xml,
    Json,
}

impl From<OutputFormat> for report::ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Xml => report::ReportFormat::Manifest,
            OutputFormat::Json => report::ReportFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.quiet);

    info!("depmerge v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;
    run(&config, &cli)
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else {
        let cwd = std::env::current_dir().into_diagnostic()?;
        Config::from_default_locations(&cwd)?
    };

    // Override with CLI arguments
    if let Some(path) = &cli.path {
        config.root = path.clone();
    }
    if let Some(max_depth) = cli.max_depth {
        config.max_depth = max_depth;
    }
    if !cli.exclude.is_empty() {
        config.exclude.extend(cli.exclude.clone());
    }
    if let Some(descriptor) = &cli.descriptor {
        config.descriptor_name = descriptor.clone();
    }

    Ok(config)
}

fn run(config: &Config, cli: &Cli) -> Result<()> {
    use indicatif::{ProgressBar, ProgressStyle};

    // Step 1: Discover descriptors
    info!("Discovering descriptors...");
    let finder = DescriptorFinder::new(config);
    let files = finder.find_descriptors(&config.root)?;

    info!("Found {} descriptors to merge", files.len());

    if files.is_empty() && !cli.quiet {
        eprintln!(
            "{}",
            format!("No {} files found under {}", config.descriptor_name, config.root.display())
                .yellow()
        );
    }

    // Step 2: Merge in discovery order
    let pb = if cli.quiet || cli.verbose {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(files.len() as u64)
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .into_diagnostic()?
            .progress_chars("#>-"),
    );

    let mut aggregator = Aggregator::new();
    for file in &files {
        pb.set_message(file.relative.display().to_string());
        aggregator.process_file(&file.path).into_diagnostic()?;
        pb.inc(1);
    }
    pb.finish_and_clear();

    let summary = aggregator.finish();

    // Step 3: Report
    let output_path = if cli.dry_run {
        None
    } else if let Some(output) = &cli.output {
        Some(output.clone())
    } else {
        match cli.format {
            OutputFormat::Xml => Some(config.output_path()),
            OutputFormat::Json => None,
        }
    };

    let reporter = Reporter::new(
        cli.format.clone().into(),
        config.manifest.clone(),
        output_path,
    );
    let written = reporter.report(&summary).into_diagnostic()?;

    if !cli.quiet {
        TerminalReporter::new()
            .with_dependencies(cli.verbose)
            .report(&summary, written.as_deref());
    }

    Ok(())
}
