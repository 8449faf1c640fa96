use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::models::Question;

/// Error loading a question file.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The file is not a JSON array of questions.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            LoadError::Parse { path, source } => {
                write!(f, "failed to parse {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Parse { source, .. } => Some(source),
        }
    }
}

/// Load questions from a JSON file containing an array of questions.
///
/// An empty array is a valid quiz. Questions whose correct index does not
/// point at an option are kept as-is and reported in the log.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let questions = parse_questions(&json_content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), count = questions.len(), "loaded questions");
    Ok(questions)
}

fn parse_questions(json: &str) -> Result<Vec<Question>, serde_json::Error> {
    let questions: Vec<Question> = serde_json::from_str(json)?;

    for (index, question) in questions.iter().enumerate() {
        if !question.is_answerable() {
            tracing::warn!(
                index,
                correct_option_index = question.correct_option_index,
                options = question.options.len(),
                "question can never be answered correctly"
            );
        }
    }

    Ok(questions)
}
