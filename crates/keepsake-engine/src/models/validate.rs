//! Section validation for the setup flow.
//!
//! Each page reports its section as complete or not; the progress tracker
//! (an external collaborator) aggregates the results. Messages are
//! user-facing setup hints, not errors; incomplete content is a normal
//! state while a card is being authored.

use crate::models::card::{CardData, Gifts, Greeting, Letter, Quiz, Slide};

/// Minimum letter body length, in characters, after trimming.
const MIN_LETTER_CONTENT_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: Option<String>,
}

impl ValidationResult {
    fn ok() -> Self {
        Self {
            is_valid: true,
            message: None,
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: Some(message.into()),
        }
    }
}

pub fn validate_greeting(greeting: &Greeting) -> ValidationResult {
    if greeting.title.trim().is_empty() {
        return ValidationResult::fail("Greeting title is required");
    }
    if greeting.message.trim().is_empty() {
        return ValidationResult::fail("Greeting message is required");
    }
    if greeting.button_text.trim().is_empty() {
        return ValidationResult::fail("Button text is required");
    }
    ValidationResult::ok()
}

pub fn validate_letter(letter: &Letter) -> ValidationResult {
    if letter.title.trim().is_empty() {
        return ValidationResult::fail("Letter title is required");
    }
    if letter.content.trim().chars().count() < MIN_LETTER_CONTENT_CHARS {
        return ValidationResult::fail("Letter content must be at least 50 characters");
    }
    ValidationResult::ok()
}

pub fn validate_slides(slides: &[Slide]) -> ValidationResult {
    if slides.is_empty() {
        return ValidationResult::fail("At least one slide is required");
    }
    if slides.iter().any(|s| s.image_url.trim().is_empty()) {
        return ValidationResult::fail("All slides must have images");
    }
    ValidationResult::ok()
}

pub fn validate_quiz(quiz: &Quiz) -> ValidationResult {
    if quiz.questions.is_empty() {
        return ValidationResult::fail("At least one question is required");
    }
    for (i, q) in quiz.questions.iter().enumerate() {
        if q.question.trim().is_empty() {
            return ValidationResult::fail(format!("Question {} is empty", i + 1));
        }
        if q.answers.len() < 2 {
            return ValidationResult::fail(format!("Question {} needs at least 2 answers", i + 1));
        }
    }
    ValidationResult::ok()
}

pub fn validate_gifts(gifts: &Gifts) -> ValidationResult {
    if gifts.prizes.is_empty() {
        return ValidationResult::fail("At least one prize is required");
    }
    for (i, p) in gifts.prizes.iter().enumerate() {
        if p.title.trim().is_empty() {
            return ValidationResult::fail(format!("Prize {} needs a title", i + 1));
        }
        if p.message.trim().is_empty() {
            return ValidationResult::fail(format!("Prize {} needs a message", i + 1));
        }
    }
    ValidationResult::ok()
}

/// Validates every section, reporting the first incomplete one. A card is
/// ready to share only when this passes.
pub fn validate_card(card: &CardData) -> ValidationResult {
    for result in [
        validate_greeting(&card.greeting),
        validate_letter(&card.letter),
        validate_slides(&card.slides),
        validate_quiz(&card.quiz),
        validate_gifts(&card.gifts),
    ] {
        if !result.is_valid {
            return result;
        }
    }
    ValidationResult::ok()
}
