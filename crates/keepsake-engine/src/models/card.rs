//! The card's content: one struct per page section, one document per field.
//!
//! Rich-text fields (`Letter::content`, `Slide::caption`, `QuizQuestion::
//! question`, `Prize::message`, ...) hold strings in the markdown codec's
//! format; everything else is plain text. Field names serialize in
//! camelCase to stay byte-compatible with the JSON documents the original
//! store kept.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The landing page's greeting card front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Greeting {
    pub title: String,
    pub message: String,
    pub button_text: String,
}

/// The letter page: a title and a rich-text body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Letter {
    pub title: String,
    pub content: String,
}

/// One photo slide with a rich-text caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: String,
    pub image_url: String,
    pub caption: String,
}

impl Slide {
    pub fn new(image_url: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            image_url: image_url.into(),
            caption: caption.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnswer {
    pub id: String,
    pub text: String,
    pub is_correct: bool,
}

impl QuizAnswer {
    pub fn new(text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            id: new_id(),
            text: text.into(),
            is_correct,
        }
    }
}

/// One quiz question; the question text is rich text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    pub has_correct_answer: bool,
    pub answers: Vec<QuizAnswer>,
}

impl QuizQuestion {
    pub fn new(question: impl Into<String>, answers: Vec<QuizAnswer>) -> Self {
        let has_correct_answer = answers.iter().any(|a| a.is_correct);
        Self {
            id: new_id(),
            question: question.into(),
            has_correct_answer,
            answers,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub title: String,
    pub passing_score: u32,
    pub enable_scoring: bool,
    pub questions: Vec<QuizQuestion>,
}

/// One gift reveal; the message is rich text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prize {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Prize {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            message: message.into(),
            image_url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gifts {
    pub page_title: String,
    pub prizes: Vec<Prize>,
}

/// Everything one shareable card contains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    pub id: String,
    pub greeting: Greeting,
    pub letter: Letter,
    pub slides: Vec<Slide>,
    pub quiz: Quiz,
    pub gifts: Gifts,
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let a = Slide::new("/slides/a.jpg", "caption");
        let b = Slide::new("/slides/b.jpg", "caption");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn question_detects_correct_answer() {
        let with = QuizQuestion::new(
            "What is my **favorite color**?",
            vec![
                QuizAnswer::new("Blue", false),
                QuizAnswer::new("Pink", true),
            ],
        );
        assert!(with.has_correct_answer);

        let without = QuizQuestion::new(
            "Pick anything",
            vec![QuizAnswer::new("A", false), QuizAnswer::new("B", false)],
        );
        assert!(!without.has_correct_answer);
    }

    #[test]
    fn serialization_uses_camel_case_field_names() {
        let greeting = Greeting {
            title: "Happy Birthday!".into(),
            message: "Surprise".into(),
            button_text: "Open My Letter".into(),
        };
        let json = serde_json::to_string(&greeting).unwrap();
        assert!(json.contains("\"buttonText\""));
        assert!(!json.contains("button_text"));
    }

    #[test]
    fn prize_without_image_omits_the_field() {
        let prize = Prize::new("Your Surprise", "It is **special**");
        let json = serde_json::to_string(&prize).unwrap();
        assert!(!json.contains("imageUrl"));
    }
}
