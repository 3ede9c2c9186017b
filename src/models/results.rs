//! Term examination results.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubjectResult {
    pub name: String,
    pub teacher: String,
    pub class_score: u32,
    pub exam_score: u32,
    pub total_score: u32,
    pub grade: String,
    pub position: u32,
    pub comment: String,
}

/// Results for one term tab ("current", "previous", "annual").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TermResults {
    /// Tab key
    pub key: String,
    /// "Term 2, 2024"
    pub period: String,
    pub position: u32,
    pub total_students: u32,
    pub overall_grade: String,
    pub subjects: Vec<SubjectResult>,
}

impl TermResults {
    /// Mean of subject totals, one decimal place.
    pub fn overall_percentage(&self) -> f64 {
        if self.subjects.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.subjects.iter().map(|s| s.total_score).sum();
        let mean = sum as f64 / self.subjects.len() as f64;
        (mean * 10.0).round() / 10.0
    }
}
