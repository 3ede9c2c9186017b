// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Screen view-models mounted against the mock backend.

use chrono::NaiveDate;
use edutrack_mobile::models::DayOfWeek;
use edutrack_mobile::viewmodels::attendance::AttendanceViewModel;
use edutrack_mobile::viewmodels::calendar::CalendarViewModel;
use edutrack_mobile::viewmodels::child_profile::{ChildProfileViewModel, ProfileView};
use edutrack_mobile::viewmodels::dashboard::DashboardViewModel;
use edutrack_mobile::viewmodels::onboarding::OnboardingViewModel;
use edutrack_mobile::viewmodels::timetable::{TimeTableViewModel, NO_CLASSES};
use edutrack_mobile::viewmodels::{ListView, ScreenContext, ViewScope};
use edutrack_mobile::services::MobileApi;
use std::sync::atomic::Ordering;
use std::time::Duration;

mod common;
use common::spawn_backend;

#[tokio::test]
async fn test_attendance_mount_filter_and_summary() {
    let backend = spawn_backend().await;
    let ctx = backend.logged_in_context().await;
    let scope = ViewScope::mount();

    let mut vm = AttendanceViewModel::new("stu-1");
    assert!(vm.load(&ctx, &scope.guard()).await);
    assert_eq!(vm.render().items().len(), 4);

    let summary = vm.summary();
    assert_eq!(summary.total_days, 4);
    // The late day counts against attendance
    assert_eq!(summary.present_days, 2);
    assert_eq!(summary.absent_days, 2);
    assert_eq!(summary.percentage, 50);

    vm.list_mut().select_filter("absent");
    let dates: Vec<&str> = vm.render().items().iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, vec!["2024-07-02"]);

    // Summary ignores the active filter
    assert_eq!(vm.summary().total_days, 4);
}

#[tokio::test]
async fn test_logged_out_screen_shows_fixed_error() {
    let backend = spawn_backend().await;
    let (session, _) = backend.session();
    let gateway = edutrack_mobile::services::ApiGateway::new(&backend.config()).unwrap();
    let ctx = ScreenContext::new(session, MobileApi::new(gateway));
    let scope = ViewScope::mount();

    let mut vm = AttendanceViewModel::new("stu-1");
    assert!(vm.load(&ctx, &scope.guard()).await);
    assert_eq!(vm.render(), ListView::Error("Failed to load attendance records"));
    assert_eq!(backend.state.mobile_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_response_after_unmount_is_dropped() {
    let backend = spawn_backend().await;
    let ctx = backend.logged_in_context().await;
    backend.state.attendance_delay_ms.store(300, Ordering::SeqCst);
    let scope = ViewScope::mount();
    let guard = scope.guard();

    let mut vm = AttendanceViewModel::new("stu-1");
    let (applied, _) = tokio::join!(vm.load(&ctx, &guard), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        scope.unmount();
    });

    assert!(!applied);
    assert_eq!(vm.render(), ListView::Loading);
}

#[tokio::test]
async fn test_dashboard_selects_first_child() {
    let backend = spawn_backend().await;
    let ctx = backend.logged_in_context().await;
    let scope = ViewScope::mount();

    let mut vm = DashboardViewModel::new(None);
    assert!(vm.load(&ctx, &scope.guard()).await);
    assert_eq!(vm.parent_first_name(), "Yaw");
    assert_eq!(vm.student_name(), "Ama Boateng");

    assert!(vm.select_child("stu-2"));
    assert_eq!(vm.student_class(), "Class 2");

    // A reload keeps a selection that is still listed
    assert!(vm.load(&ctx, &scope.guard()).await);
    assert_eq!(vm.student_name(), "Kofi Boateng");
}

#[tokio::test]
async fn test_dashboard_expired_token_recovers_via_refresh() {
    let backend = spawn_backend().await;
    let ctx = backend.logged_in_context().await;
    backend.state.expire_access_token();
    let scope = ViewScope::mount();

    let mut vm = DashboardViewModel::new(None);
    assert!(vm.load(&ctx, &scope.guard()).await);
    assert!(vm.state().error().is_none());
    assert_eq!(backend.state.refresh_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_calendar_events_on_day() {
    let backend = spawn_backend().await;
    let ctx = backend.logged_in_context().await;
    let scope = ViewScope::mount();

    let mut vm = CalendarViewModel::new(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
    assert!(vm.load(&ctx, &scope.guard()).await);

    vm.select_day(28);
    let titles: Vec<&str> = vm.selected_events().iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Final Exams Begin"]);
    assert_eq!(vm.events_this_month().len(), 2);
}

#[tokio::test]
async fn test_timetable_day_tabs() {
    let backend = spawn_backend().await;
    let ctx = backend.logged_in_context().await;
    let scope = ViewScope::mount();

    let mut vm = TimeTableViewModel::new("stu-1");
    assert!(vm.load(&ctx, &scope.guard()).await);
    assert_eq!(vm.current_schedule()[0].subject, "Mathematics");

    vm.select_day(DayOfWeek::Tuesday);
    assert!(vm.current_schedule().is_empty());
    assert_eq!(vm.render(), ListView::Empty(NO_CLASSES));
}

#[tokio::test]
async fn test_timetable_failure_renders_error() {
    let backend = spawn_backend().await;
    let ctx = backend.logged_in_context().await;
    backend.state.expire_access_token();
    backend.state.refresh_fails.store(true, Ordering::SeqCst);
    let scope = ViewScope::mount();

    let mut vm = TimeTableViewModel::new("stu-1");
    assert!(vm.load(&ctx, &scope.guard()).await);
    assert_eq!(vm.render(), ListView::Error("Failed to load timetable"));
}

#[tokio::test]
async fn test_child_profile_renders_profile() {
    let backend = spawn_backend().await;
    let ctx = backend.logged_in_context().await;
    let scope = ViewScope::mount();

    let mut vm = ChildProfileViewModel::new(Some("stu-1"));
    assert!(vm.load(&ctx, &scope.guard()).await);
    match vm.render() {
        ProfileView::Profile(profile) => {
            assert_eq!(profile.child.name, "Ama Boateng");
            assert_eq!(profile.teacher.class_teacher, "Mrs. Abena Mensah");
        }
        other => panic!("unexpected view: {other:?}"),
    }
}

#[tokio::test]
async fn test_onboarding_prefers_backend_slides() {
    let backend = spawn_backend().await;
    let ctx = backend.logged_in_context().await;
    let scope = ViewScope::mount();

    let mut vm = OnboardingViewModel::new("42");
    assert_eq!(vm.slides().len(), 3);
    assert!(vm.load(&ctx, &scope.guard()).await);
    assert_eq!(vm.slides().len(), 1);
    assert_eq!(vm.current().unwrap().title, "Hello Yaw");
}
