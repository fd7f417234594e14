use anyhow::{Context, Result};
use clap::{ArgAction, Parser as ClapParser};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use toyc::session::{InputMode, Session, SessionConfig, DEFAULT_SENTINEL};
use tracing::Level;

#[derive(ClapParser)]
#[command(name = "toyc")]
#[command(about = "Tokenize, validate and interpret toy-language source lines", long_about = None)]
struct Cli {
    /// Read source lines from a file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Compile only the first input line
    #[arg(short, long)]
    single: bool,

    /// Line that ends multi-line input
    #[arg(long, value_name = "TEXT", default_value = DEFAULT_SENTINEL)]
    sentinel: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::ERROR,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_max_level(level)
        .init();

    let config = SessionConfig {
        mode: if cli.single {
            InputMode::SingleLine
        } else {
            InputMode::MultiLine
        },
        sentinel: cli.sentinel,
        prompt: cli.file.is_none(),
    };

    let input: Box<dyn BufRead> = match &cli.file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open '{}'", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let mut session = Session::new(config);
    session
        .run(input, &mut io::stdout().lock(), &mut io::stderr().lock())
        .context("failed to compile input")?;

    Ok(())
}
