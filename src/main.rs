use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use vibecheck::config::{ColorMode, OutputFormat};

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_ANALYSIS: i32 = 2;
const EXIT_CONFIG: i32 = 3;

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Text to analyze (joined with spaces; reads piped stdin if omitted)
    text: Vec<String>,

    /// Read the text to analyze from a file
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Output the analysis as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a piece of text (default if no subcommand)
    Analyze(AnalyzeArgs),
    /// Create a config file interactively
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "vibecheck")]
#[command(about = "Text sentiment scoring with the VADER lexicon", long_about = None)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/vibecheck/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    analyze: AnalyzeArgs,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Analyze(cli.analyze));
    let start_time = Instant::now();

    let config_path = cli.config.map(PathBuf::from);

    match command {
        Commands::Init => {
            if let Err(e) = vibecheck::config::init::run_init_wizard(config_path) {
                eprintln!("Init error: {}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
        Commands::Analyze(args) => run_analyze(args, config_path, cli.verbose, start_time),
    }

    std::process::exit(EXIT_SUCCESS);
}

fn run_analyze(args: AnalyzeArgs, config_path: Option<PathBuf>, verbose: bool, start_time: Instant) {
    // Load config
    let config = match vibecheck::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate thresholds at startup
    let effective_thresholds = config.thresholds.clone().unwrap_or_default();
    if let Err(errors) = vibecheck::sentiment::validate_thresholds(&effective_thresholds) {
        eprintln!("Threshold config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if verbose {
        eprintln!(
            "Cutoffs: positive >= {}, negative <= {}",
            effective_thresholds
                .positive
                .unwrap_or(vibecheck::sentiment::ThresholdConfig::DEFAULT_POSITIVE),
            effective_thresholds
                .negative
                .unwrap_or(vibecheck::sentiment::ThresholdConfig::DEFAULT_NEGATIVE)
        );
    }

    // Resolve the text to analyze
    let (text, source) = match vibecheck::input::resolve_input(&args.text, args.file.as_deref()) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("Input error: {}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    if verbose {
        eprintln!("Analyzing {} bytes from {} input", text.len(), source);
    }

    let analysis = match vibecheck::sentiment::analyze_text(&text, &effective_thresholds, source) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Analysis error: {}", e);
            std::process::exit(EXIT_ANALYSIS);
        }
    };

    // Resolve output format and color policy; --json overrides the config
    let output_config = config.output.clone().unwrap_or_default();
    let format = if args.json {
        OutputFormat::Json
    } else {
        output_config.format.unwrap_or(OutputFormat::Detail)
    };
    let use_colors = match output_config.color.unwrap_or(ColorMode::Auto) {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => vibecheck::output::should_use_colors(),
    };

    match format {
        OutputFormat::Json => match vibecheck::output::format_json(&analysis) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Output error: {}", e);
                std::process::exit(EXIT_ANALYSIS);
            }
        },
        OutputFormat::Compact => {
            println!("{}", vibecheck::output::format_compact(&analysis, use_colors));
        }
        OutputFormat::Detail => {
            println!("{}", vibecheck::output::format_detail(&analysis, use_colors));
        }
    }

    if verbose {
        eprintln!();
        eprintln!("Analyzed in {:?}", start_time.elapsed());
    }
}
