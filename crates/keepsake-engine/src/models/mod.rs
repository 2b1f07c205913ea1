//! Shared content model for the card's editable sections, and the
//! per-section validation the setup flow runs before a card can be shared.

pub mod card;
pub mod validate;

pub use card::{
    CardData, Gifts, Greeting, Letter, Prize, Quiz, QuizAnswer, QuizQuestion, Slide,
};
pub use validate::{
    ValidationResult, validate_card, validate_gifts, validate_greeting, validate_letter,
    validate_quiz, validate_slides,
};
