// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Child profile bundle: the child, their parents, and the class teacher.

use serde::{Deserialize, Serialize};

/// Response of `GET /api/mobile/child-profile`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChildProfile {
    #[serde(default)]
    pub child: ChildInfo,
    #[serde(default)]
    pub parent: ParentInfo,
    #[serde(default)]
    pub teacher: TeacherInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChildInfo {
    #[serde(deserialize_with = "super::string_or_number")]
    pub student_id: String,
    pub name: String,
    pub class: String,
    pub academic_year: String,
    pub date_of_birth: String,
    #[serde(deserialize_with = "super::string_or_number")]
    pub age: String,
    pub blood_group: String,
    pub admission_date: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParentInfo {
    pub father_name: String,
    pub father_occupation: String,
    pub father_phone: String,
    pub father_email: String,
    pub mother_name: String,
    pub mother_occupation: String,
    pub mother_phone: String,
    pub mother_email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeacherInfo {
    pub class_teacher: String,
    pub teacher_email: String,
    pub teacher_phone: String,
    pub teacher_avatar: Option<String>,
    pub subjects: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_profile_is_default_filled() {
        let profile: ChildProfile = serde_json::from_str(
            r#"{"child": {"name": "Osei Koomson Ajei", "age": 10, "studentId": 42}}"#,
        )
        .unwrap();

        assert_eq!(profile.child.name, "Osei Koomson Ajei");
        assert_eq!(profile.child.age, "10");
        assert_eq!(profile.child.student_id, "42");
        assert!(profile.teacher.subjects.is_empty());
        assert_eq!(profile.parent, ParentInfo::default());
    }
}
