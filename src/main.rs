use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use quiz_form::{Quiz, QuizError};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from. Uses the built-in quiz if omitted.
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Write logs to this file. Logging is off otherwise.
    #[arg(long, env = "QUIZ_FORM_LOG")]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), QuizError> {
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let quiz = match args.questions {
        Some(path) => Quiz::from_json(path)?,
        None => Quiz::builtin(),
    };
    quiz.run()
}

fn init_logging(path: &Path) -> Result<(), QuizError> {
    let file = File::create(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quiz_form=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
