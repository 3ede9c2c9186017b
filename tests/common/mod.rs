// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process mock of the EduTrack backend.
//!
//! Bound to an ephemeral port on 127.0.0.1. Counters and the last request
//! details are exposed so tests can assert what the client sent.

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use edutrack_mobile::config::Config;
use edutrack_mobile::services::{ApiGateway, MemoryTokenStore, MobileApi, Session};
use edutrack_mobile::viewmodels::ScreenContext;
use edutrack_mobile::App;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const VALID_EMAIL: &str = "parent@example.com";
pub const VALID_PASSWORD: &str = "correct-horse";
pub const FIRST_ACCESS_TOKEN: &str = "access-1";
pub const REFRESH_TOKEN: &str = "refresh-1";

#[derive(Default)]
pub struct MockState {
    /// Access token the mobile endpoints accept. None rejects everything.
    valid_token: Mutex<Option<String>>,
    issued: AtomicUsize,
    pub refresh_fails: AtomicBool,
    /// Delay applied to the attendance endpoint
    pub attendance_delay_ms: AtomicU64,

    pub login_calls: AtomicUsize,
    pub refresh_calls: AtomicUsize,
    pub logout_calls: AtomicUsize,
    pub mobile_calls: AtomicUsize,
    pub rejected_calls: AtomicUsize,

    pub last_query: Mutex<HashMap<String, String>>,
    pub last_auth: Mutex<Option<String>>,
    pub last_body: Mutex<Option<Value>>,
    /// `Authorization` header seen by each auth endpoint, in call order
    pub auth_headers: Mutex<Vec<(&'static str, Option<String>)>>,
}

impl MockState {
    /// Reject the current access token until the next refresh.
    #[allow(dead_code)]
    pub fn expire_access_token(&self) {
        *self.valid_token.lock().unwrap() = None;
    }

    #[allow(dead_code)]
    pub fn count(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }

    fn issue_token(&self) -> String {
        let n = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let token = format!("access-{n}");
        *self.valid_token.lock().unwrap() = Some(token.clone());
        token
    }

    fn record_auth(&self, endpoint: &'static str, headers: &HeaderMap) {
        self.auth_headers
            .lock()
            .unwrap()
            .push((endpoint, authorization(headers)));
    }

    fn check_bearer(&self, headers: &HeaderMap, query: &HashMap<String, String>) -> Result<(), StatusCode> {
        self.mobile_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = query.clone();

        let auth = authorization(headers);
        *self.last_auth.lock().unwrap() = auth.clone();

        let expected = self
            .valid_token
            .lock()
            .unwrap()
            .as_ref()
            .map(|t| format!("Bearer {t}"));
        match (auth, expected) {
            (Some(got), Some(want)) if got == want => Ok(()),
            _ => {
                self.rejected_calls.fetch_add(1, Ordering::SeqCst);
                Err(StatusCode::UNAUTHORIZED)
            }
        }
    }
}

fn authorization(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

pub struct MockBackend {
    pub base_url: String,
    pub state: Arc<MockState>,
}

impl MockBackend {
    pub fn config(&self) -> Config {
        Config::test_default().with_base_url(&self.base_url)
    }

    #[allow(dead_code)]
    pub fn session(&self) -> (Arc<Session>, Arc<MemoryTokenStore>) {
        let gateway = ApiGateway::new(&self.config()).unwrap();
        let store = Arc::new(MemoryTokenStore::new());
        (Arc::new(Session::new(gateway, store.clone())), store)
    }

    #[allow(dead_code)]
    pub fn app(&self) -> App {
        App::new(self.config(), Arc::new(MemoryTokenStore::new())).unwrap()
    }

    /// Screen context with a logged-in session.
    #[allow(dead_code)]
    pub async fn logged_in_context(&self) -> ScreenContext {
        let (session, _) = self.session();
        assert!(session.login(VALID_EMAIL, VALID_PASSWORD).await);
        let gateway = ApiGateway::new(&self.config()).unwrap();
        ScreenContext::new(session, MobileApi::new(gateway))
    }
}

/// Start the mock backend on an ephemeral port.
pub async fn spawn_backend() -> MockBackend {
    let state = Arc::new(MockState::default());

    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/refresh-token", post(refresh))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/register", post(register))
        .route("/api/mobile/user-profile", get(user_profile))
        .route("/api/mobile/home-screen", get(home_screen))
        .route("/api/mobile/child-profile", get(child_profile))
        .route("/api/mobile/attendance-record", get(attendance))
        .route("/api/mobile/academic-calendar", get(calendar))
        .route("/api/mobile/time-table", get(time_table))
        .route("/api/mobile/onboarding", get(onboarding))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockBackend {
        base_url: format!("http://{addr}"),
        state,
    }
}

type Shared = State<Arc<MockState>>;
type Params = Query<HashMap<String, String>>;

async fn login(State(state): Shared, headers: HeaderMap, Json(body): Json<Value>) -> Json<Value> {
    state.login_calls.fetch_add(1, Ordering::SeqCst);
    state.record_auth("login", &headers);
    let ok = body["email"] == VALID_EMAIL && body["password"] == VALID_PASSWORD;
    if !ok {
        // The real backend also answers 200 with no tokens
        return Json(json!({}));
    }
    Json(json!({
        "accessToken": state.issue_token(),
        "refreshToken": REFRESH_TOKEN,
        "user": {"id": 42, "name": "Yaw Boateng", "email": VALID_EMAIL, "role": "PARENT"}
    }))
}

async fn refresh(
    State(state): Shared,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    state.refresh_calls.fetch_add(1, Ordering::SeqCst);
    state.record_auth("refresh", &headers);
    if state.refresh_fails.load(Ordering::SeqCst) || body["refreshToken"] != REFRESH_TOKEN {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(Json(json!({ "accessToken": state.issue_token() })))
}

async fn logout(State(state): Shared) -> StatusCode {
    state.logout_calls.fetch_add(1, Ordering::SeqCst);
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn register(
    State(state): Shared,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.record_auth("register", &headers);
    *state.last_body.lock().unwrap() = Some(body);
    (StatusCode::CREATED, Json(json!({"message": "Registered"})))
}

async fn user_profile(State(state): Shared, headers: HeaderMap, Query(query): Params) -> Json<Value> {
    state.record_auth("user-profile", &headers);
    *state.last_query.lock().unwrap() = query;
    Json(json!({"fullName": "Ama Owusu", "username": "ama", "age": 10}))
}

async fn home_screen(
    State(state): Shared,
    headers: HeaderMap,
    Query(query): Params,
) -> Result<Json<Value>, StatusCode> {
    state.check_bearer(&headers, &query)?;
    Ok(Json(json!({
        "data": {
            "parent": {"id": 7, "name": "Yaw Boateng"},
            "children": [
                {"id": "stu-1", "name": "Ama Boateng", "class": "Class 5", "todayAttendance": "present"},
                {"id": "stu-2", "name": "Kofi Boateng", "class": "Class 2"}
            ]
        }
    })))
}

async fn child_profile(
    State(state): Shared,
    headers: HeaderMap,
    Query(query): Params,
) -> Result<Json<Value>, StatusCode> {
    state.check_bearer(&headers, &query)?;
    Ok(Json(json!({
        "child": {"studentId": "stu-1", "name": "Ama Boateng", "class": "Class 5", "age": 10},
        "parent": {"fatherName": "Yaw Boateng"},
        "teacher": {"classTeacher": "Mrs. Abena Mensah", "subjects": ["Mathematics"]}
    })))
}

async fn attendance(
    State(state): Shared,
    headers: HeaderMap,
    Query(query): Params,
) -> Result<Json<Value>, StatusCode> {
    let delay = state.attendance_delay_ms.load(Ordering::SeqCst);
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }
    state.check_bearer(&headers, &query)?;
    Ok(Json(json!([
        {"id": 1, "date": "2024-07-01", "day": "Mon", "status": "present"},
        {"id": 2, "date": "2024-07-02", "day": "Tue", "status": "absent", "remarks": "Sick"},
        {"id": 3, "date": "2024-07-03", "day": "Wed", "status": "late"},
        {"id": 4, "date": "2024-07-04", "day": "Thu", "status": "present"}
    ])))
}

async fn calendar(
    State(state): Shared,
    headers: HeaderMap,
    Query(query): Params,
) -> Result<Json<Value>, StatusCode> {
    state.check_bearer(&headers, &query)?;
    Ok(Json(json!({
        "data": [
            {"id": "e1", "title": "School Holiday", "date": "2024-07-12", "type": "holiday"},
            {"id": "e2", "title": "Final Exams Begin", "date": "2024-07-28T08:00:00Z", "type": "exam"}
        ]
    })))
}

async fn time_table(
    State(state): Shared,
    headers: HeaderMap,
    Query(query): Params,
) -> Result<Json<Value>, StatusCode> {
    state.check_bearer(&headers, &query)?;
    Ok(Json(json!({
        "Monday": [
            {"time": "08:00", "subject": "Mathematics", "teacher": "Mrs. Mensah", "room": "5A"}
        ],
        "Wednesday": [
            {"time": "10:00", "subject": "Science", "teacher": "Dr. Osei", "room": "Lab"}
        ]
    })))
}

async fn onboarding(
    State(state): Shared,
    headers: HeaderMap,
    Query(query): Params,
) -> Result<Json<Value>, StatusCode> {
    state.check_bearer(&headers, &query)?;
    Ok(Json(json!({
        "slides": [
            {"key": "welcome", "title": "Hello Yaw", "description": "Server slide"}
        ]
    })))
}
