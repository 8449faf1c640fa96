use crate::models::Question;

use super::{
    ANSWERED_SLOT_ID, CORRECT_SLOT_ID, OptionControl, QuestionView, QuizForm, QuizView,
    SUBMIT_LABEL, Summary, SummarySlot,
};

const ANSWERED_LABEL: &str = "Questions answered: ";
const CORRECT_LABEL: &str = "Correct answers: ";

/// Build the view tree for `questions`.
///
/// Every question gets its own selection group keyed by its index, with one
/// control per option in order. Both summary slots start at "0" and no
/// question has feedback yet.
pub fn build(questions: &[Question]) -> QuizView {
    QuizView {
        summary: summary(),
        form: form(questions),
    }
}

fn summary() -> Summary {
    Summary::new(vec![
        SummarySlot::new(ANSWERED_SLOT_ID, ANSWERED_LABEL),
        SummarySlot::new(CORRECT_SLOT_ID, CORRECT_LABEL),
    ])
}

fn form(questions: &[Question]) -> QuizForm {
    QuizForm {
        questions: questions
            .iter()
            .enumerate()
            .map(|(index, question)| question_view(index, question))
            .collect(),
        submit_label: SUBMIT_LABEL,
    }
}

fn question_view(index: usize, question: &Question) -> QuestionView {
    QuestionView {
        index,
        prompt: question.prompt.clone(),
        options: question
            .options
            .iter()
            .map(|option| OptionControl {
                group: index,
                value: option.clone(),
                selected: false,
            })
            .collect(),
        feedback: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_group_per_question_in_order() {
        let questions = vec![
            Question::new("First", ["a", "b"], 0, "ok"),
            Question::new("Second", ["c", "d", "e"], 2, "ok"),
        ];
        let view = build(&questions);

        assert_eq!(view.form.questions().len(), 2);
        for (index, question) in view.form.questions().iter().enumerate() {
            assert_eq!(question.index(), index);
            assert_eq!(question.prompt(), questions[index].prompt);
            assert!(question.feedback.is_none());
            assert!(question.options().iter().all(|c| c.group() == index));
            let values: Vec<&str> = question.options().iter().map(OptionControl::value).collect();
            assert_eq!(values, questions[index].options);
        }
        assert_eq!(view.form.control_count(), 5);
        assert!(view.form.controls().all(|c| !c.is_selected()));
    }

    #[test]
    fn summary_starts_at_zero() {
        let view = build(&[Question::new("Q", ["a"], 0, "ok")]);
        let slots = view.summary.slots();

        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].id(), ANSWERED_SLOT_ID);
        assert_eq!(slots[0].label(), ANSWERED_LABEL);
        assert_eq!(slots[1].id(), CORRECT_SLOT_ID);
        assert_eq!(slots[1].label(), CORRECT_LABEL);
        assert!(slots.iter().all(|slot| slot.text() == "0"));
    }

    #[test]
    fn empty_list_renders_submit_only() {
        let view = build(&[]);
        assert!(view.form.questions().is_empty());
        assert_eq!(view.form.control_count(), 0);
        assert_eq!(view.form.submit_label(), SUBMIT_LABEL);
        assert_eq!(view.summary.slots().len(), 2);
    }
}
