// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Child profile with a handful of locally editable contact fields.
//!
//! Edits are never sent to the backend; saving only replaces the local copy.

use super::lifecycle::{load_into, Loadable, ViewGuard};
use super::ScreenContext;
use crate::models::ChildProfile;

pub const NO_PROFILE: &str = "No profile data found.";

/// Fields the parent may edit on the profile screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditableDetails {
    pub emergency_contact: String,
    pub address: String,
    pub medical_info: String,
    pub parent_phone: String,
}

impl Default for EditableDetails {
    fn default() -> Self {
        Self {
            emergency_contact: "+233 24 123 4567".to_string(),
            address: "123 Accra Street, East Legon".to_string(),
            medical_info: "No known allergies".to_string(),
            parent_phone: "+233 20 987 6543".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditableField {
    EmergencyContact,
    Address,
    MedicalInfo,
    ParentPhone,
}

impl EditableDetails {
    fn field_mut(&mut self, field: EditableField) -> &mut String {
        match field {
            EditableField::EmergencyContact => &mut self.emergency_contact,
            EditableField::Address => &mut self.address,
            EditableField::MedicalInfo => &mut self.medical_info,
            EditableField::ParentPhone => &mut self.parent_phone,
        }
    }
}

/// What the profile screen should draw.
#[derive(Debug, PartialEq)]
pub enum ProfileView<'a> {
    Loading,
    Error(&'a str),
    Empty(&'a str),
    Profile(&'a ChildProfile),
}

#[derive(Debug, Clone, Default)]
pub struct ChildProfileViewModel {
    student_id: Option<String>,
    state: Loadable<ChildProfile>,
    saved: EditableDetails,
    draft: Option<EditableDetails>,
}

impl ChildProfileViewModel {
    pub fn new(student_id: Option<&str>) -> Self {
        Self {
            student_id: student_id.map(str::to_string),
            ..Self::default()
        }
    }

    pub fn state(&self) -> &Loadable<ChildProfile> {
        &self.state
    }

    pub async fn load(&mut self, ctx: &ScreenContext, guard: &ViewGuard) -> bool {
        let student_id = self.student_id.clone();
        let fetch = ctx.fetch(|api, token| {
            let student_id = student_id.clone();
            async move { api.child_profile(&token, student_id.as_deref()).await }
        });
        load_into(&mut self.state, guard, "profile", fetch).await
    }

    pub fn render(&self) -> ProfileView<'_> {
        match &self.state {
            Loadable::Idle | Loadable::Loading => ProfileView::Loading,
            Loadable::Failed(msg) => ProfileView::Error(msg),
            Loadable::Loaded(profile) if profile.child.name.is_empty() => {
                ProfileView::Empty(NO_PROFILE)
            }
            Loadable::Loaded(profile) => ProfileView::Profile(profile),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// Current values: the draft while editing, the saved copy otherwise.
    pub fn details(&self) -> &EditableDetails {
        self.draft.as_ref().unwrap_or(&self.saved)
    }

    pub fn begin_edit(&mut self) {
        if self.draft.is_none() {
            self.draft = Some(self.saved.clone());
        }
    }

    /// Returns false when not editing.
    pub fn update(&mut self, field: EditableField, value: &str) -> bool {
        match self.draft.as_mut() {
            Some(draft) => {
                *draft.field_mut(field) = value.to_string();
                true
            }
            None => false,
        }
    }

    pub fn has_changes(&self) -> bool {
        self.draft.as_ref().is_some_and(|draft| *draft != self.saved)
    }

    /// Keep the draft locally and leave edit mode.
    pub fn save(&mut self) {
        if let Some(draft) = self.draft.take() {
            let changed = draft != self.saved;
            self.saved = draft;
            tracing::info!(changed, "Profile edits kept locally");
        }
    }

    /// Drop the draft and leave edit mode.
    pub fn cancel(&mut self) {
        self.draft = None;
    }
}
