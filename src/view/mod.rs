//! Retained view tree for a quiz.
//!
//! [`build`] produces the tree once; afterwards only the grader mutates the
//! summary slots and the per-question feedback, and only the user's
//! selections change the option controls.

mod builder;

pub use builder::build;

/// Stable identifier of the answered-count summary slot.
pub const ANSWERED_SLOT_ID: &str = "answer";
/// Stable identifier of the correct-count summary slot.
pub const CORRECT_SLOT_ID: &str = "correct";

pub const SUBMIT_LABEL: &str = "Submit";

/// The whole rendered quiz: summary header plus the question form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizView {
    pub summary: Summary,
    pub form: QuizForm,
}

/// A live text slot in the summary header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarySlot {
    id: &'static str,
    label: &'static str,
    text: String,
}

impl SummarySlot {
    pub(crate) fn new(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            text: "0".to_string(),
        }
    }

    pub fn id(&self) -> &str {
        self.id
    }

    pub fn label(&self) -> &str {
        self.label
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// The running totals shown above the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    slots: Vec<SummarySlot>,
}

impl Summary {
    pub(crate) fn new(slots: Vec<SummarySlot>) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[SummarySlot] {
        &self.slots
    }

    pub fn slot(&self, id: &str) -> Option<&SummarySlot> {
        self.slots.iter().find(|slot| slot.id == id)
    }

    pub fn slot_mut(&mut self, id: &str) -> Option<&mut SummarySlot> {
        self.slots.iter_mut().find(|slot| slot.id == id)
    }

    /// Replace the text of slot `id`. Returns false if there is no such slot.
    pub fn set(&mut self, id: &str, value: impl ToString) -> bool {
        match self.slot_mut(id) {
            Some(slot) => {
                slot.text = value.to_string();
                true
            }
            None => false,
        }
    }
}

/// Visual marker carried by a feedback node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Positive,
    Negative,
}

/// Result message shown under a graded question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub message: String,
    pub marker: Marker,
}

/// A radio control for one option of one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionControl {
    group: usize,
    value: String,
    selected: bool,
}

impl OptionControl {
    /// Index of the question this control belongs to.
    pub fn group(&self) -> usize {
        self.group
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    index: usize,
    prompt: String,
    options: Vec<OptionControl>,
    pub feedback: Option<Feedback>,
}

impl QuestionView {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[OptionControl] {
        &self.options
    }

    /// Position of the selected option, if any.
    pub fn selected_option(&self) -> Option<usize> {
        self.options.iter().position(|control| control.selected)
    }
}

/// The submittable container of question views and the submit control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizForm {
    questions: Vec<QuestionView>,
    submit_label: &'static str,
}

impl QuizForm {
    pub fn questions(&self) -> &[QuestionView] {
        &self.questions
    }

    pub fn question(&self, index: usize) -> Option<&QuestionView> {
        self.questions.get(index)
    }

    pub fn question_mut(&mut self, index: usize) -> Option<&mut QuestionView> {
        self.questions.get_mut(index)
    }

    pub fn submit_label(&self) -> &str {
        self.submit_label
    }

    /// Every option control in the form, in display order.
    pub fn controls(&self) -> impl Iterator<Item = &OptionControl> {
        self.questions.iter().flat_map(|question| question.options.iter())
    }

    pub fn control_count(&self) -> usize {
        self.questions.iter().map(|question| question.options.len()).sum()
    }

    /// Select `option` of `question`, clearing the rest of its group.
    ///
    /// Returns false and leaves the form untouched if either index is out of
    /// range.
    pub fn select(&mut self, question: usize, option: usize) -> bool {
        let Some(view) = self.questions.get_mut(question) else {
            return false;
        };
        if option >= view.options.len() {
            return false;
        }

        for (position, control) in view.options.iter_mut().enumerate() {
            control.selected = position == option;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Question;

    fn form() -> QuizForm {
        build(&[
            Question::new("A?", ["a0", "a1", "a2"], 0, "ok"),
            Question::new("B?", ["b0", "b1"], 1, "ok"),
        ])
        .form
    }

    #[test]
    fn select_is_exclusive_within_group() {
        let mut form = form();
        assert!(form.select(0, 1));
        assert!(form.select(0, 2));

        assert_eq!(form.questions()[0].selected_option(), Some(2));
        assert_eq!(form.controls().filter(|c| c.is_selected()).count(), 1);
    }

    #[test]
    fn select_leaves_other_groups_alone() {
        let mut form = form();
        form.select(0, 0);
        form.select(1, 1);

        assert_eq!(form.questions()[0].selected_option(), Some(0));
        assert_eq!(form.questions()[1].selected_option(), Some(1));
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let mut form = form();
        form.select(1, 0);
        let before = form.clone();

        assert!(!form.select(1, 2));
        assert!(!form.select(7, 0));
        assert_eq!(form, before);
    }

    #[test]
    fn summary_set_skips_unknown_slot() {
        let mut summary = build(&[]).summary;
        assert!(!summary.set("missing", 3));
        assert!(summary.set(ANSWERED_SLOT_ID, 3));
        assert_eq!(summary.slot(ANSWERED_SLOT_ID).map(SummarySlot::text), Some("3"));
        assert_eq!(summary.slot(CORRECT_SLOT_ID).map(SummarySlot::text), Some("0"));
    }
}
