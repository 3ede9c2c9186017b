// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! EduTrack demo client
//!
//! Logs in with the configured demo credentials, loads the dashboard and
//! the first child's attendance, then logs out.

use edutrack_mobile::{
    config::Config,
    services::MemoryTokenStore,
    viewmodels::{
        attendance::AttendanceViewModel, dashboard::DashboardViewModel, ViewScope,
    },
    App,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(base_url = %config.api_base_url, "Starting EduTrack client");

    let (email, password) = match config.demo_credentials() {
        Ok((email, password)) => (email.to_string(), password.to_string()),
        Err(e) => {
            tracing::warn!(error = %e, "No demo credentials, nothing to do");
            return Ok(());
        }
    };

    let mut app = App::new(config, Arc::new(MemoryTokenStore::new()))?;
    app.start().await;

    if !app.login(&email, &password).await {
        tracing::error!("Login failed");
        return Ok(());
    }

    let ctx = app.screen_context();
    let scope = ViewScope::mount();

    let mut dashboard = DashboardViewModel::new(None);
    dashboard.load(&ctx, &scope.guard()).await;
    if let Some(error) = dashboard.state().error() {
        tracing::warn!(error, "Dashboard unavailable");
    } else {
        tracing::info!(
            parent = dashboard.parent_first_name(),
            student = dashboard.student_name(),
            class = dashboard.student_class(),
            "Dashboard loaded"
        );
    }

    if let Some(child) = dashboard.selected_child() {
        let mut attendance = AttendanceViewModel::new(&child.id);
        attendance.load(&ctx, &scope.guard()).await;
        let summary = attendance.summary();
        tracing::info!(
            total = summary.total_days,
            present = summary.present_days,
            percentage = summary.percentage,
            "Attendance loaded"
        );
    }

    scope.unmount();
    app.logout().await;
    tracing::info!("Logged out");
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("edutrack_mobile=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
