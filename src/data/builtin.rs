use crate::models::Question;

/// The quiz shipped with the binary, used when no question file is given.
pub fn builtin_questions() -> Vec<Question> {
    vec![
        Question::new(
            "Which keyword declares a mutable binding?",
            ["let", "let mut", "var", "mut let"],
            1,
            "Right: bindings are immutable unless declared with `let mut`.",
        ),
        Question::new(
            "What does the `?` operator do on an `Err` value?",
            [
                "Panics with the error",
                "Returns the error from the enclosing function",
                "Ignores the error",
                "Converts it to `None`",
            ],
            1,
            "Right: `?` returns early, converting the error with `From`.",
        ),
        Question::new(
            "Which type owns a heap-allocated, growable string?",
            ["&str", "String", "char", "Box<str>"],
            1,
            "Right: `String` owns its buffer and can grow.",
        ),
        Question::new(
            "How many mutable references to a value may exist at once?",
            ["Zero", "One", "Two", "Unlimited"],
            1,
            "Right: at most one mutable borrow at a time.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_question_is_answerable() {
        let questions = builtin_questions();
        assert_eq!(questions.len(), 4);
        assert!(questions.iter().all(Question::is_answerable));
    }
}
