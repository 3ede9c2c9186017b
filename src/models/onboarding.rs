//! Onboarding carousel content.

use serde::{Deserialize, Serialize};

/// Response of `GET /api/mobile/onboarding`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnboardingData {
    pub slides: Vec<OnboardingSlide>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OnboardingSlide {
    pub key: String,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
}

impl Default for OnboardingData {
    /// Built-in slides used when the backend has none.
    fn default() -> Self {
        let slide = |key: &str, title: &str, description: &str| OnboardingSlide {
            key: key.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            image_url: None,
        };

        Self {
            slides: vec![
                slide(
                    "slide1",
                    "Welcome to EduTrack",
                    "Monitor your child's academic progress, attendance, and school activities all in one place.",
                ),
                slide(
                    "slide2",
                    "Stay Connected",
                    "Receive instant updates, announcements, and communicate with teachers and school staff easily.",
                ),
                slide(
                    "slide3",
                    "Easy Payments",
                    "Pay school fees securely and access receipts and statements anytime, anywhere.",
                ),
            ],
        }
    }
}
