// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Auth endpoint payloads: login, refresh, logout, registration.

use super::User;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// `POST /api/auth/login` body.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response. Either token may be absent on a rejected login.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

impl LoginResponse {
    /// Both tokens, if the backend issued a complete pair.
    pub fn token_pair(&self) -> Option<(&str, &str)> {
        match (self.access_token.as_deref(), self.refresh_token.as_deref()) {
            (Some(access), Some(refresh)) if !access.is_empty() && !refresh.is_empty() => {
                Some((access, refresh))
            }
            _ => None,
        }
    }
}

/// Body carrying a refresh token (refresh and logout endpoints).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenBody {
    pub refresh_token: String,
}

/// Token refresh response. The refresh token is only sent when rotated.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Pre-registration profile lookup (`GET /api/mobile/user-profile`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileLookup {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default, deserialize_with = "super::string_or_number")]
    pub age: String,
}

impl UserProfileLookup {
    /// Name to prefill in the sign-up form.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .or(self.username.as_deref())
            .unwrap_or("")
    }
}

/// Sign-up form as entered by the parent, validated before submission.
#[derive(Debug, Clone, Default, Validate)]
#[validate(schema(function = "passwords_match", skip_on_field_errors = false))]
pub struct RegisterForm {
    pub user_name: String,
    #[validate(email(message = "Please enter a valid email"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    pub confirm_password: String,
}

fn passwords_match(form: &RegisterForm) -> Result<(), ValidationError> {
    if form.password != form.confirm_password {
        let mut err = ValidationError::new("password_mismatch");
        err.message = Some("Passwords do not match".into());
        return Err(err);
    }
    Ok(())
}

/// `POST /api/auth/register` body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub username: String,
    pub name: String,
    pub surname: String,
    pub role: String,
}

impl From<&RegisterForm> for RegisterRequest {
    fn from(form: &RegisterForm) -> Self {
        let mut parts = form.user_name.split(' ');
        let name = parts.next().unwrap_or("").to_string();
        let surname = parts.next().unwrap_or("").to_string();

        Self {
            email: form.email.trim().to_string(),
            password: form.password.clone(),
            username: form.user_name.clone(),
            name,
            surname,
            role: "PARENT".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> RegisterForm {
        RegisterForm {
            user_name: "Kofi Mensah".to_string(),
            email: "kofi@example.com".to_string(),
            password: "secret".to_string(),
            confirm_password: "secret".to_string(),
        }
    }

    #[test]
    fn test_login_response_requires_both_tokens() {
        let empty: LoginResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.token_pair().is_none());

        let partial: LoginResponse = serde_json::from_str(r#"{"accessToken":"a"}"#).unwrap();
        assert!(partial.token_pair().is_none());

        let full: LoginResponse =
            serde_json::from_str(r#"{"accessToken":"a","refreshToken":"r","user":{"id":"1"}}"#)
                .unwrap();
        assert_eq!(full.token_pair(), Some(("a", "r")));
        assert_eq!(full.user.unwrap().id, "1");
    }

    #[test]
    fn test_register_form_validation() {
        assert!(form().validate().is_ok());

        let mut mismatch = form();
        mismatch.confirm_password = "other".to_string();
        assert!(mismatch.validate().is_err());

        let mut bad_email = form();
        bad_email.email = "not-an-email".to_string();
        assert!(bad_email.validate().is_err());

        let mut no_password = form();
        no_password.password.clear();
        no_password.confirm_password.clear();
        assert!(no_password.validate().is_err());
    }

    #[test]
    fn test_register_request_splits_name() {
        let req = RegisterRequest::from(&form());
        assert_eq!(req.name, "Kofi");
        assert_eq!(req.surname, "Mensah");
        assert_eq!(req.role, "PARENT");

        let mut single = form();
        single.user_name = "Kofi".to_string();
        assert_eq!(RegisterRequest::from(&single).surname, "");
    }

    #[test]
    fn test_lookup_display_name_prefers_full_name() {
        let lookup: UserProfileLookup =
            serde_json::from_str(r#"{"fullName":"Ama Owusu","username":"ama","age":10}"#).unwrap();
        assert_eq!(lookup.display_name(), "Ama Owusu");
        assert_eq!(lookup.age, "10");
    }
}
