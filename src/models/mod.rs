// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Typed request and response schemas for the EduTrack backend.
//!
//! Every field the screens read is declared explicitly. Missing fields are
//! default-filled at deserialization so renderers never see a partial shape.

pub mod announcement;
pub mod assignment;
pub mod attendance;
pub mod auth;
pub mod calendar;
pub mod chat;
pub mod child;
pub mod fee;
pub mod home;
pub mod notification;
pub mod onboarding;
pub mod results;
pub mod timetable;
pub mod user;

pub use announcement::Announcement;
pub use assignment::Assignment;
pub use attendance::{AttendanceFilter, AttendanceRecord, AttendanceSummary};
pub use auth::{
    LoginRequest, LoginResponse, RefreshResponse, RegisterForm, RegisterRequest,
    UserProfileLookup,
};
pub use calendar::{CalendarEvent, CalendarQuery};
pub use chat::ChatThread;
pub use child::{ChildInfo, ChildProfile, ParentInfo, TeacherInfo};
pub use fee::{FeeBalance, FeePayment, FeeStructure};
pub use home::{HomeScreen, StudentSummary};
pub use notification::Notification;
pub use onboarding::{OnboardingData, OnboardingSlide};
pub use results::{SubjectResult, TermResults};
pub use timetable::{DayOfWeek, Period, WeeklyTimeTable};
pub use user::User;

use serde::{Deserialize, Deserializer};

/// A response body that is either the payload itself or `{ "data": payload }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(data) => data,
        }
    }
}

/// Accept an identifier sent as a JSON string or number; `null` becomes "".
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Str(s)) => s,
        Some(Raw::Int(n)) => n.to_string(),
        Some(Raw::Float(f)) => f.to_string(),
        None => String::new(),
    })
}
