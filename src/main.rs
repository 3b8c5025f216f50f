use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};

use kira_introscore::error::CliError;
use kira_introscore::evaluate_transcript;
use kira_introscore::logging::init_logging;
use kira_introscore::report::{OutputFormat, render, write_reports};

#[derive(Debug, Parser)]
#[command(
    name = "kira-introscore",
    version,
    about = "Deterministic rubric scoring for spoken self-introduction transcripts."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score one transcript.
    Score(ScoreArgs),
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("source").required(true).args(["input", "text"])))]
struct ScoreArgs {
    /// Transcript file (UTF-8 text); `-` reads stdin.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Transcript passed inline.
    #[arg(long)]
    text: Option<String>,

    /// Audio duration in seconds; 0 means not provided.
    #[arg(long, allow_negative_numbers = true)]
    duration: Option<f64>,

    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,

    /// Append the raw JSON structure to the text report.
    #[arg(long)]
    raw: bool,

    /// Write evaluation.json and report.txt here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Score(args) => run_score(&args),
    }
}

fn run_score(args: &ScoreArgs) -> Result<(), CliError> {
    let transcript = read_transcript(args)?;
    if transcript.trim().is_empty() {
        return Err(CliError::EmptyTranscript);
    }
    let duration = resolve_duration(args.duration)?;

    let result = evaluate_transcript(&transcript, duration);
    tracing::info!(
        overall_score = result.overall_score,
        word_count = result.meta.word_count,
        "scored transcript"
    );

    match &args.out {
        Some(dir) => {
            let paths = write_reports(&result, dir, args.raw)?;
            tracing::info!(
                json = %paths.json.display(),
                text = %paths.text.display(),
                "reports written"
            );
        }
        None => {
            let rendered = render(&result, args.format.into(), args.raw)?;
            println!("{rendered}");
        }
    }
    Ok(())
}

fn read_transcript(args: &ScoreArgs) -> Result<String, CliError> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    match args.input.as_deref() {
        Some(path) if path == Path::new("-") => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .map_err(|e| CliError::io("reading transcript", path, e))?;
            Ok(String::from_utf8_lossy(&buf).into_owned())
        }
        Some(path) => {
            tracing::info!(path = %path.display(), "reading transcript");
            let bytes =
                std::fs::read(path).map_err(|e| CliError::io("reading transcript", path, e))?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        // clap's required `source` group guarantees one of the two.
        None => Err(CliError::EmptyTranscript),
    }
}

/// Zero is the "not provided" sentinel; negatives and non-finite values are rejected.
fn resolve_duration(duration: Option<f64>) -> Result<Option<f64>, CliError> {
    match duration {
        None => Ok(None),
        Some(d) if !d.is_finite() || d < 0.0 => Err(CliError::InvalidDuration(d)),
        Some(d) if d == 0.0 => Ok(None),
        Some(d) => Ok(Some(d)),
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
