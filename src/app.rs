use crate::grader::{self, Score};
use crate::models::Question;
use crate::view::{self, QuizView};

/// The control that currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Option { question: usize, option: usize },
    Submit,
}

pub struct App {
    questions: Vec<Question>,
    view: QuizView,
    cursor: usize,
    last_score: Option<Score>,
}

impl App {
    pub fn with_questions(questions: Vec<Question>) -> Self {
        let view = view::build(&questions);

        Self {
            questions,
            view,
            cursor: 0,
            last_score: None,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn view(&self) -> &QuizView {
        &self.view
    }

    pub fn last_score(&self) -> Option<Score> {
        self.last_score
    }

    /// Focusable controls: every option, then the submit control.
    fn focus_count(&self) -> usize {
        self.view.form.control_count() + 1
    }

    pub fn focus(&self) -> Focus {
        let mut remaining = self.cursor;
        for (question, view) in self.view.form.questions().iter().enumerate() {
            let options = view.options().len();
            if remaining < options {
                return Focus::Option {
                    question,
                    option: remaining,
                };
            }
            remaining -= options;
        }
        Focus::Submit
    }

    pub fn focus_next(&mut self) {
        self.cursor = (self.cursor + 1) % self.focus_count();
    }

    pub fn focus_previous(&mut self) {
        let count = self.focus_count();
        self.cursor = (self.cursor + count - 1) % count;
    }

    pub fn focus_submit(&mut self) {
        self.cursor = self.focus_count() - 1;
    }

    /// Select the focused option, or submit when the submit control is focused.
    pub fn activate(&mut self) {
        match self.focus() {
            Focus::Option { question, option } => {
                self.select(question, option);
            }
            Focus::Submit => {
                self.submit();
            }
        }
    }

    pub fn select(&mut self, question: usize, option: usize) -> bool {
        self.view.form.select(question, option)
    }

    pub fn submit(&mut self) -> Score {
        let score = grader::grade(&self.questions, &mut self.view);
        self.last_score = Some(score);
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::with_questions(vec![
            Question::new("A?", ["a0", "a1"], 1, "yes"),
            Question::new("B?", ["b0", "b1", "b2"], 0, "yes"),
        ])
    }

    #[test]
    fn focus_walks_options_then_submit() {
        let mut app = app();
        let mut seen = vec![app.focus()];
        for _ in 0..5 {
            app.focus_next();
            seen.push(app.focus());
        }

        assert_eq!(
            seen,
            vec![
                Focus::Option { question: 0, option: 0 },
                Focus::Option { question: 0, option: 1 },
                Focus::Option { question: 1, option: 0 },
                Focus::Option { question: 1, option: 1 },
                Focus::Option { question: 1, option: 2 },
                Focus::Submit,
            ]
        );

        app.focus_next();
        assert_eq!(app.focus(), Focus::Option { question: 0, option: 0 });
        app.focus_previous();
        assert_eq!(app.focus(), Focus::Submit);
    }

    #[test]
    fn activate_selects_then_submits() {
        let mut app = app();
        app.focus_next();
        app.activate();
        assert_eq!(app.view().form.questions()[0].selected_option(), Some(1));
        assert_eq!(app.last_score(), None);

        app.focus_submit();
        app.activate();
        assert_eq!(app.last_score(), Some(Score { answered: 1, correct: 1 }));
    }

    #[test]
    fn empty_quiz_focuses_submit_only() {
        let mut app = App::with_questions(Vec::new());
        assert_eq!(app.focus(), Focus::Submit);
        app.focus_next();
        assert_eq!(app.focus(), Focus::Submit);
        app.focus_previous();
        assert_eq!(app.focus(), Focus::Submit);

        assert_eq!(app.submit(), Score::default());
    }
}
