//! Scoring of a submitted quiz form.

use crate::models::Question;
use crate::view::{
    ANSWERED_SLOT_ID, CORRECT_SLOT_ID, Feedback, Marker, QuestionView, QuizForm, QuizView,
};

/// Feedback shown for any wrong answer.
pub const ERROR_MESSAGE: &str = "The selected option is incorrect";

/// Totals of one grading pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub answered: usize,
    pub correct: usize,
}

/// The option value chosen for one question at submission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub question: usize,
    pub value: String,
}

/// Every selected control of the form, in display order.
pub fn collect_selections(form: &QuizForm) -> Vec<Selection> {
    form.controls()
        .filter(|control| control.is_selected())
        .map(|control| Selection {
            question: control.group(),
            value: control.value().to_string(),
        })
        .collect()
}

/// Grade the current selections of `view` against `questions`.
///
/// Counts and feedback are overwritten, never accumulated: the summary and
/// the feedback of every answered question reflect this pass only.
/// Unanswered questions keep whatever feedback they had.
pub fn grade(questions: &[Question], view: &mut QuizView) -> Score {
    let mut score = Score::default();

    for selection in collect_selections(&view.form) {
        let Some(question) = questions.get(selection.question) else {
            continue;
        };

        score.answered += 1;
        let (message, marker) = if question.is_correct(&selection.value) {
            score.correct += 1;
            (question.success_message.as_str(), Marker::Positive)
        } else {
            (ERROR_MESSAGE, Marker::Negative)
        };

        if let Some(question_view) = view.form.question_mut(selection.question) {
            set_feedback(question_view, message, marker);
        }
    }

    view.summary.set(ANSWERED_SLOT_ID, score.answered);
    view.summary.set(CORRECT_SLOT_ID, score.correct);

    tracing::debug!(
        answered = score.answered,
        correct = score.correct,
        total = questions.len(),
        "graded submission"
    );
    score
}

/// Show `message` under `question`, reusing its feedback node if present.
pub fn set_feedback(question: &mut QuestionView, message: &str, marker: Marker) {
    match &mut question.feedback {
        Some(feedback) => {
            feedback.message.clear();
            feedback.message.push_str(message);
            feedback.marker = marker;
        }
        None => {
            question.feedback = Some(Feedback {
                message: message.to_string(),
                marker,
            });
        }
    }
}
