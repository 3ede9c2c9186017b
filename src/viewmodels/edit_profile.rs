// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Edit-profile form for the student record.
//!
//! School-managed fields are read-only. Saving validates the required
//! fields and replaces the local original; nothing is sent to the backend.

use validator::{Validate, ValidationError};

pub const SAVED_MESSAGE: &str = "Profile updated successfully!";
pub const DEFAULT_AVATAR: &str =
    "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?w=200&h=200&fit=crop&crop=face";

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct StudentProfile {
    #[validate(custom(function = "required"))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(custom(function = "required"))]
    pub phone: String,
    pub student_id: String,
    pub class: String,
    pub date_of_birth: String,
    #[validate(custom(function = "required"))]
    pub address: String,
    #[validate(custom(function = "required"))]
    pub emergency_contact: String,
    pub blood_group: String,
    pub avatar: String,
    #[validate(custom(function = "required"))]
    pub parent_name: String,
    #[validate(email)]
    pub parent_email: String,
    pub allergies: String,
    pub medical_conditions: String,
}

impl Default for StudentProfile {
    fn default() -> Self {
        Self {
            name: "Osei Koomson Ajei".to_string(),
            email: "osei.ajei@student.lfi.edu.gh".to_string(),
            phone: "+233 24 123 4567".to_string(),
            student_id: "LFI2024001".to_string(),
            class: "Class 5".to_string(),
            date_of_birth: "March 15, 2014".to_string(),
            address: "123 Accra Street, East Legon".to_string(),
            emergency_contact: "+233 20 987 6543".to_string(),
            blood_group: "O+".to_string(),
            avatar: DEFAULT_AVATAR.to_string(),
            parent_name: "Mr. & Mrs. Koomson".to_string(),
            parent_email: "parents@koomson.com".to_string(),
            allergies: "None".to_string(),
            medical_conditions: "None".to_string(),
        }
    }
}

fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    DateOfBirth,
    BloodGroup,
    Address,
    StudentId,
    Class,
    ParentName,
    ParentEmail,
    EmergencyContact,
    Allergies,
    MedicalConditions,
}

impl ProfileField {
    /// Form order, section by section.
    pub const ALL: [ProfileField; 13] = [
        ProfileField::Name,
        ProfileField::Email,
        ProfileField::Phone,
        ProfileField::DateOfBirth,
        ProfileField::BloodGroup,
        ProfileField::Address,
        ProfileField::StudentId,
        ProfileField::Class,
        ProfileField::ParentName,
        ProfileField::ParentEmail,
        ProfileField::EmergencyContact,
        ProfileField::Allergies,
        ProfileField::MedicalConditions,
    ];

    /// Struct field name, as reported by validation.
    fn key(self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Email => "email",
            ProfileField::Phone => "phone",
            ProfileField::DateOfBirth => "date_of_birth",
            ProfileField::BloodGroup => "blood_group",
            ProfileField::Address => "address",
            ProfileField::StudentId => "student_id",
            ProfileField::Class => "class",
            ProfileField::ParentName => "parent_name",
            ProfileField::ParentEmail => "parent_email",
            ProfileField::EmergencyContact => "emergency_contact",
            ProfileField::Allergies => "allergies",
            ProfileField::MedicalConditions => "medical_conditions",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProfileField::Name => "Full Name",
            ProfileField::Email => "Email Address",
            ProfileField::Phone => "Phone Number",
            ProfileField::DateOfBirth => "Date of Birth",
            ProfileField::BloodGroup => "Blood Group",
            ProfileField::Address => "Home Address",
            ProfileField::StudentId => "Student ID",
            ProfileField::Class => "Current Class",
            ProfileField::ParentName => "Parent/Guardian Name",
            ProfileField::ParentEmail => "Parent Email",
            ProfileField::EmergencyContact => "Emergency Phone",
            ProfileField::Allergies => "Known Allergies",
            ProfileField::MedicalConditions => "Medical Conditions",
        }
    }

    /// Kept by the school; the form shows but never changes these.
    pub fn is_readonly(self) -> bool {
        matches!(
            self,
            ProfileField::DateOfBirth
                | ProfileField::BloodGroup
                | ProfileField::StudentId
                | ProfileField::Class
        )
    }
}

impl StudentProfile {
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::DateOfBirth => &self.date_of_birth,
            ProfileField::BloodGroup => &self.blood_group,
            ProfileField::Address => &self.address,
            ProfileField::StudentId => &self.student_id,
            ProfileField::Class => &self.class,
            ProfileField::ParentName => &self.parent_name,
            ProfileField::ParentEmail => &self.parent_email,
            ProfileField::EmergencyContact => &self.emergency_contact,
            ProfileField::Allergies => &self.allergies,
            ProfileField::MedicalConditions => &self.medical_conditions,
        }
    }

    fn get_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::DateOfBirth => &mut self.date_of_birth,
            ProfileField::BloodGroup => &mut self.blood_group,
            ProfileField::Address => &mut self.address,
            ProfileField::StudentId => &mut self.student_id,
            ProfileField::Class => &mut self.class,
            ProfileField::ParentName => &mut self.parent_name,
            ProfileField::ParentEmail => &mut self.parent_email,
            ProfileField::EmergencyContact => &mut self.emergency_contact,
            ProfileField::Allergies => &mut self.allergies,
            ProfileField::MedicalConditions => &mut self.medical_conditions,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EditProfileViewModel {
    original: StudentProfile,
    draft: StudentProfile,
}

impl EditProfileViewModel {
    pub fn new(profile: StudentProfile) -> Self {
        Self {
            draft: profile.clone(),
            original: profile,
        }
    }

    pub fn profile(&self) -> &StudentProfile {
        &self.draft
    }

    /// Edit one field. Read-only fields are left alone and return false.
    pub fn update(&mut self, field: ProfileField, value: &str) -> bool {
        if field.is_readonly() {
            return false;
        }
        *self.draft.get_mut(field) = value.to_string();
        true
    }

    pub fn set_avatar(&mut self, url: &str) {
        self.draft.avatar = url.to_string();
    }

    pub fn remove_avatar(&mut self) {
        self.set_avatar(DEFAULT_AVATAR);
    }

    pub fn has_changes(&self) -> bool {
        self.draft != self.original
    }

    /// Labels of required fields that are blank or malformed, in form order.
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        let Err(errors) = self.draft.validate() else {
            return Vec::new();
        };
        let failed = errors.field_errors();
        ProfileField::ALL
            .into_iter()
            .filter(|field| failed.contains_key(field.key()))
            .map(ProfileField::label)
            .collect()
    }

    /// Validate and keep the draft as the new original.
    pub fn save(&mut self) -> Result<&'static str, String> {
        let invalid = self.invalid_fields();
        if !invalid.is_empty() {
            return Err(format!("Please fill in: {}", invalid.join(", ")));
        }
        self.original = self.draft.clone();
        tracing::info!(student_id = %self.original.student_id, "Profile saved locally");
        Ok(SAVED_MESSAGE)
    }

    /// Leaving with unsaved edits needs a discard confirmation first.
    pub fn needs_discard_confirmation(&self) -> bool {
        self.has_changes()
    }

    /// Throw the draft away and return to the original.
    pub fn discard(&mut self) {
        self.draft = self.original.clone();
    }
}
