//! # quiz-form
//!
//! A radio-button quiz form for the terminal: every question is shown at
//! once, the user picks one option per question, and submitting grades the
//! whole form, annotating each answered question and updating the running
//! totals in the header.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_form::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Load questions from a JSON file
//!     let quiz = Quiz::from_json("questions.json")?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! The view tree and grader can also be driven without a terminal:
//!
//! ```rust
//! use quiz_form::{grader, view, Question};
//!
//! let questions = vec![Question::new("2 + 2?", ["3", "4"], 1, "Correct!")];
//! let mut view = view::build(&questions);
//! view.form.select(0, 1);
//!
//! let score = grader::grade(&questions, &mut view);
//! assert_eq!((score.answered, score.correct), (1, 1));
//! ```

mod app;
mod data;
pub mod grader;
mod models;
pub mod terminal;
mod ui;
pub mod view;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::{App, Focus};
pub use data::{LoadError, builtin_questions, load_questions_from_json};
pub use grader::{ERROR_MESSAGE, Score};
pub use models::Question;

/// Error type for quiz operations.
#[derive(Debug)]
pub enum QuizError {
    /// Error loading questions from file.
    Load(LoadError),
    /// IO error during quiz execution.
    Io(io::Error),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Load(e) => write!(f, "Failed to load questions: {}", e),
            QuizError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Load(e) => Some(e),
            QuizError::Io(e) => Some(e),
        }
    }
}

impl From<LoadError> for QuizError {
    fn from(err: LoadError) -> Self {
        QuizError::Load(err)
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a new quiz from a vector of questions.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            app: App::with_questions(questions),
        }
    }

    /// Create the quiz that ships with the crate.
    pub fn builtin() -> Self {
        Self::new(builtin_questions())
    }

    /// Load a quiz from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file containing questions.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use quiz_form::Quiz;
    ///
    /// let quiz = Quiz::from_json("questions.json").expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let questions = load_questions_from_json(path)?;
        Ok(Self::new(questions))
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits. When stdout is not a terminal nothing is rendered
    /// and this returns immediately.
    pub fn run(mut self) -> Result<(), QuizError> {
        let Some(mut term) = terminal::mount()? else {
            tracing::debug!("stdout is not a terminal, nothing to render");
            return Ok(());
        };
        let result = run_event_loop(&mut term, &mut self.app);
        finish(result, terminal::restore())
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// An error from the event loop wins over one from restoring the terminal.
fn finish(result: Result<(), QuizError>, restored: io::Result<()>) -> Result<(), QuizError> {
    result.and(restored.map_err(QuizError::from))
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
            app.focus_next();
            false
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
            app.focus_previous();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.activate();
            false
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.submit();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_drive_selection_and_submission() {
        let mut quiz = Quiz::new(vec![Question::new("Q", ["a", "b"], 1, "yes")]);
        let app = quiz.app_mut();

        assert!(!handle_input(app, KeyCode::Char('j')));
        assert!(!handle_input(app, KeyCode::Char(' ')));
        assert!(!handle_input(app, KeyCode::Char('s')));

        assert_eq!(app.last_score(), Some(Score { answered: 1, correct: 1 }));
        assert!(handle_input(app, KeyCode::Char('q')));
        assert!(handle_input(app, KeyCode::Esc));
    }

    #[test]
    fn loop_error_survives_failed_restore() {
        let looped = Err(QuizError::Io(io::Error::other("read failed")));
        let restored = Err(io::Error::other("restore failed"));

        let err = finish(looped, restored).unwrap_err();
        assert_eq!(err.to_string(), "IO error: read failed");
    }

    #[test]
    fn restore_error_reported_after_clean_exit() {
        let err = finish(Ok(()), Err(io::Error::other("restore failed"))).unwrap_err();
        assert_eq!(err.to_string(), "IO error: restore failed");
        assert!(finish(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn builtin_quiz_starts_ungraded() {
        let quiz = Quiz::builtin();
        assert_eq!(quiz.app().questions().len(), 4);
        assert_eq!(quiz.app().last_score(), None);
    }
}
