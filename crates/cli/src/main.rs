use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use densito_core::{
    Analyzer, AnalyzerConfig, FetchConfig, JsonConfig, TextConfig, convert_to_json, convert_to_text, fetch_file,
    fetch_stdin, fetch_url,
};
use owo_colors::OwoColorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod echo;

pub(crate) const VERSION: &str = env!("CARGO_PKG_VERSION");

const PROMPT: &str = "Enter URL to analyze: ";
const STEPS: usize = 3;

/// Output format for the density report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: text, json", s)),
        }
    }
}

/// Measure 1, 2 and 3-word phrase density in the headings, links, image alt
/// text and body of a web page
#[derive(Parser, Debug)]
#[command(name = "densito")]
#[command(version)]
#[command(about = "Measure phrase density on a web page", long_about = None)]
struct Args {
    /// URL to fetch, local HTML file, or "-" for stdin (prompted for when omitted)
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: OutputFormat,

    /// Number of phrases listed per table
    #[arg(long, default_value = "5", value_name = "NUM")]
    top: usize,

    /// HTTP timeout in seconds (default: no timeout)
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Generate shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Where the page comes from
#[derive(Debug, PartialEq, Eq)]
enum Source {
    Url(String),
    File(String),
    Stdin,
}

impl Source {
    fn detect(input: &str) -> Self {
        if input == "-" {
            Source::Stdin
        } else if input.starts_with("http://") || input.starts_with("https://") || !Path::new(input).exists() {
            Source::Url(input.to_string())
        } else {
            Source::File(input.to_string())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "densito_core=debug,densito=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Ask for the input on stdout and read one line from stdin
fn prompt_for_input() -> anyhow::Result<String> {
    print!("{}", PROMPT);
    io::stdout().flush().context("Failed to write prompt")?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).context("Failed to read URL from stdin")?;
    Ok(line.trim().to_string())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(shell) = args.completions {
        clap_complete::generate(shell, &mut Args::command(), "densito", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    init_tracing(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    if args.verbose {
        echo::print_banner();
        echo::print_info("Debug logging enabled");
        eprintln!();
    }

    let input = match &args.input {
        Some(input) => input.clone(),
        None => prompt_for_input()?,
    };

    let started = Instant::now();
    let mut timings: Vec<(&str, Duration)> = Vec::new();

    let fetch_config = FetchConfig {
        timeout: args.timeout,
        user_agent: args.user_agent.clone().unwrap_or_else(|| FetchConfig::default().user_agent),
    };
    let config = AnalyzerConfig { max_entries: args.top, fetch: fetch_config };

    let source = Source::detect(&input);
    debug!(?source, "resolved input");
    let step_start = Instant::now();
    let (html, label) = match &source {
        Source::Url(url) => {
            if args.verbose {
                echo::print_step(1, STEPS, &format!("Fetching {}", url.bright_white().underline()));
            }
            (fetch_url(url, &config.fetch).await?, Some(url.clone()))
        }
        Source::File(path) => {
            if args.verbose {
                echo::print_step(1, STEPS, &format!("Reading from file {}", path.bright_white()));
            }
            (fetch_file(path)?, Some(path.clone()))
        }
        Source::Stdin => {
            if args.verbose {
                echo::print_step(1, STEPS, "Reading from stdin");
            }
            (fetch_stdin()?, None)
        }
    };
    timings.push(("Input", step_start.elapsed()));

    if args.verbose {
        echo::print_detail("Size", &echo::format_size(html.len()));
        eprintln!();
        echo::print_step(2, STEPS, "Analyzing headings, links, images and body");
    }

    let step_start = Instant::now();
    let mut report = Analyzer::with_config(config).analyze_html(&html)?;
    report.url = label;
    timings.push(("Analysis", step_start.elapsed()));

    if args.verbose {
        echo::print_region_summary(&report);
        eprintln!();
        echo::print_step(3, STEPS, "Writing report");
        echo::print_detail("Format", &format!("{:?}", args.format));
        eprintln!();
    }

    let output = match args.format {
        OutputFormat::Text => convert_to_text(&report, &TextConfig::default()),
        OutputFormat::Json => {
            let mut json = convert_to_json(&report, &JsonConfig { pretty: true })?;
            json.push('\n');
            json
        }
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            echo::print_success(&format!("Report written to {}", path.display().bright_white()));
        }
        None => print!("{}", output),
    }

    if args.verbose {
        echo::print_timing_summary(started.elapsed(), &timings);
    }

    Ok(())
}
