use serde::Deserialize;

/// A single multiple-choice question.
///
/// `correct_option_index` is expected to point into `options`. Nothing
/// enforces this; a question with an out-of-range index simply can never be
/// answered correctly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(alias = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(alias = "answerIndex")]
    pub correct_option_index: usize,
    pub success_message: String,
}

impl Question {
    pub fn new<P, O, S>(
        prompt: P,
        options: O,
        correct_option_index: usize,
        success_message: S,
    ) -> Self
    where
        P: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
        S: Into<String>,
    {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_option_index,
            success_message: success_message.into(),
        }
    }

    /// The text of the correct option, if the index is in range.
    pub fn correct_option(&self) -> Option<&str> {
        self.options
            .get(self.correct_option_index)
            .map(String::as_str)
    }

    pub fn is_answerable(&self) -> bool {
        self.correct_option().is_some()
    }

    /// Whether `value` is the correct option.
    ///
    /// Options are matched by value: the first option equal to `value` is the
    /// one that counts, so duplicated labels resolve to the earliest position.
    pub fn is_correct(&self, value: &str) -> bool {
        self.options.iter().position(|option| option == value)
            == Some(self.correct_option_index)
    }
}
