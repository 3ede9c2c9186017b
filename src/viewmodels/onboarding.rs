// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Onboarding carousel shown after sign-up.

use super::lifecycle::{run_guarded, ViewGuard};
use super::ScreenContext;
use crate::models::{OnboardingData, OnboardingSlide};

/// Carousel position over the slides. Starts on the built-in slides and
/// switches to the backend's if it has any.
#[derive(Debug, Clone)]
pub struct OnboardingViewModel {
    user_id: String,
    slides: Vec<OnboardingSlide>,
    index: usize,
}

impl OnboardingViewModel {
    pub fn new(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            slides: OnboardingData::default().slides,
            index: 0,
        }
    }

    /// Fetch the user's slides. Failures keep the built-in slides.
    pub async fn load(&mut self, ctx: &ScreenContext, guard: &ViewGuard) -> bool {
        let user_id = self.user_id.clone();
        let fetch = ctx.fetch(|api, token| {
            let user_id = user_id.clone();
            async move { api.onboarding(&token, &user_id).await }
        });

        match run_guarded(guard, fetch).await {
            Some(Ok(data)) if !data.slides.is_empty() => {
                self.slides = data.slides;
                self.index = 0;
                true
            }
            Some(Ok(_)) => true,
            Some(Err(e)) => {
                tracing::warn!(error = %e, "Onboarding fetch failed, using built-in slides");
                true
            }
            None => false,
        }
    }

    pub fn slides(&self) -> &[OnboardingSlide] {
        &self.slides
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&OnboardingSlide> {
        self.slides.get(self.index)
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.slides.len()
    }

    /// Advance one slide. Returns false on the last slide.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }

    pub fn skip(&mut self) {
        self.index = self.slides.len().saturating_sub(1);
    }
}
