use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

mod display;
mod menu;

use drill_core::model::DEFAULT_QUESTIONS;
use services::DrillService;
use storage::repository::SessionStore;
use storage::JournalStore;

const DEFAULT_LOG_PATH: &str = "weekday_drill_log.jsonl";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidQuestions { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidQuestions { raw } => {
                write!(f, "invalid --questions value: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct Args {
    log_path: PathBuf,
    questions: usize,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut log_path = std::env::var("DRILL_LOG")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_LOG_PATH), PathBuf::from);
        let mut questions = std::env::var("DRILL_QUESTIONS")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_QUESTIONS);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--log" => {
                    let value = require_value(args, "--log")?;
                    log_path = PathBuf::from(value);
                }
                "--questions" => {
                    let value = require_value(args, "--questions")?;
                    questions = value
                        .parse::<usize>()
                        .ok()
                        .filter(|&n| n > 0)
                        .ok_or(ArgsError::InvalidQuestions { raw: value })?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            log_path,
            questions,
        })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--log <path>] [--questions <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --log {DEFAULT_LOG_PATH}");
    eprintln!("  --questions {DEFAULT_QUESTIONS}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  DRILL_LOG, DRILL_QUESTIONS");
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let store: Arc<dyn SessionStore> = Arc::new(JournalStore::new(args.log_path));
    let mut service = DrillService::new(Arc::clone(&store));

    display::intro(args.questions);

    loop {
        match menu::pick()? {
            menu::MenuChoice::Mode(mode) => {
                let mut answers = menu::StdinAnswers::new();
                println!();
                println!("Starting \"{}\"", mode.label());
                let session = service.run(mode, args.questions, &mut answers)?;
                display::results(&session);
                if !menu::play_again()? {
                    break;
                }
            }
            menu::MenuChoice::Help => display::help(),
            menu::MenuChoice::Stats => display::stats(store.as_ref())?,
            menu::MenuChoice::Quit => break,
        }
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
