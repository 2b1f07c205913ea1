//! Default card content and its on-disk configuration.
//!
//! A fresh deployment starts from [`default_card`], the content a sender
//! sees before editing anything. Deployments that want to ship different
//! starting content provide a TOML file with the same shape as
//! [`CardData`]; rich-text fields in it use the markdown codec's
//! `**bold**`/`*italic*` markers.

use std::path::{Path, PathBuf};

use keepsake_engine::models::{
    CardData, Gifts, Greeting, Letter, Prize, Quiz, QuizAnswer, QuizQuestion, Slide,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read card config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse card config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Card id used when the environment doesn't provide one.
pub const DEFAULT_CARD_ID: &str = "my-lovely-card";

/// The card id for this deployment, from `KEEPSAKE_CARD_ID` if set.
pub fn card_id() -> String {
    std::env::var("KEEPSAKE_CARD_ID").unwrap_or_else(|_| DEFAULT_CARD_ID.to_string())
}

/// Loads starting card content from a TOML file. A missing file is not an
/// error; the caller falls back to [`default_card`].
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Option<CardData>, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let card: CardData = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Some(card))
}

/// Writes card content to a TOML file, creating parent directories.
pub fn save_to_path<P: AsRef<Path>>(card: &CardData, path: P) -> anyhow::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(card)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// The content every new card starts with.
pub fn default_card() -> CardData {
    CardData {
        id: card_id(),
        greeting: Greeting {
            title: "Happy Birthday! 🎉".to_string(),
            message: "This little site was made just for you.\nThere is something beautiful waiting inside..."
                .to_string(),
            button_text: "Open My Letter".to_string(),
        },
        letter: Letter {
            title: "My Letter to You".to_string(),
            content: "From the day we met, every moment with you has been a gift.\n\n\
                      You make the ordinary days feel **special**, and the special days \
                      feel *unforgettable*.\n\nHappy birthday, with all my love."
                .to_string(),
        },
        slides: vec![
            Slide {
                id: "1".to_string(),
                image_url: "/slides/slide1.jpg".to_string(),
                caption: "Where it all began ❤️".to_string(),
            },
            Slide {
                id: "2".to_string(),
                image_url: "/slides/slide2.jpg".to_string(),
                caption: "Together we create **beautiful memories** ✨".to_string(),
            },
            Slide {
                id: "3".to_string(),
                image_url: "/slides/slide3.jpg".to_string(),
                caption: "Forever grateful to have you in my life 💖".to_string(),
            },
        ],
        quiz: Quiz {
            title: "How Well Do You Know Me? 💕".to_string(),
            passing_score: 2,
            enable_scoring: true,
            questions: vec![
                QuizQuestion {
                    id: "1".to_string(),
                    question: "What is my **favorite color**?".to_string(),
                    has_correct_answer: true,
                    answers: vec![
                        QuizAnswer {
                            id: "a1".to_string(),
                            text: "Blue 💙".to_string(),
                            is_correct: false,
                        },
                        QuizAnswer {
                            id: "a2".to_string(),
                            text: "Pink 💗".to_string(),
                            is_correct: true,
                        },
                        QuizAnswer {
                            id: "a3".to_string(),
                            text: "Green 💚".to_string(),
                            is_correct: false,
                        },
                    ],
                },
                QuizQuestion {
                    id: "2".to_string(),
                    question: "Where did we have our *first date*?".to_string(),
                    has_correct_answer: true,
                    answers: vec![
                        QuizAnswer {
                            id: "a1".to_string(),
                            text: "Coffee Shop ☕".to_string(),
                            is_correct: true,
                        },
                        QuizAnswer {
                            id: "a2".to_string(),
                            text: "Restaurant 🍽️".to_string(),
                            is_correct: false,
                        },
                        QuizAnswer {
                            id: "a3".to_string(),
                            text: "Cinema 🎬".to_string(),
                            is_correct: false,
                        },
                    ],
                },
            ],
        },
        gifts: Gifts {
            page_title: "Your Special Gift 🎁".to_string(),
            prizes: vec![Prize {
                id: "1".to_string(),
                title: "Your Birthday Surprise".to_string(),
                message: "I have prepared something **special** just for you!\n\n\
                          I hope you love it as much as I love you 💕"
                    .to_string(),
                image_url: Some("/gifts/gift1.jpg".to_string()),
            }],
        },
    }
}
