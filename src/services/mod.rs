// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - backend access and session layer.

pub mod auth;
pub mod gateway;
pub mod mobile;
pub mod session;

pub use auth::AuthApi;
pub use gateway::{ApiGateway, Auth};
pub use mobile::{MobileApi, TimeTableQuery};
pub use session::{MemoryTokenStore, Session, SessionState, SessionStatus, TokenStore};
