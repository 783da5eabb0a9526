use chrono::{Duration, NaiveTime};

use super::common::*;
use crate::integrations::SimulatedScheduler;
use crate::workflows::interview::{
    InterviewDuration, InterviewScheduler, InterviewStep, InterviewType, SchedulerError,
    CONFIRMATION_MESSAGE,
};

fn slot(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time")
}

#[test]
fn calendar_blocks_until_date_and_time_are_set() {
    let mut scheduler = InterviewScheduler::new("Maria Santos", "Backend Engineer");
    assert_eq!(scheduler.next().expect("details always advance"), InterviewStep::Calendar);

    assert!(!scheduler.can_advance());
    assert!(matches!(scheduler.next(), Err(SchedulerError::SlotIncomplete)));

    scheduler.select_date(today(), today()).expect("today is bookable");
    assert!(!scheduler.can_advance());
    assert!(matches!(scheduler.next(), Err(SchedulerError::SlotIncomplete)));

    scheduler.select_time(slot(14, 0)).expect("on the grid");
    assert!(scheduler.can_advance());
    assert_eq!(scheduler.next().expect("slot complete"), InterviewStep::Confirm);
}

#[test]
fn past_dates_and_off_grid_times_are_rejected() {
    let mut scheduler = InterviewScheduler::new("Maria Santos", "Backend Engineer");
    let yesterday = today() - Duration::days(1);

    assert!(matches!(
        scheduler.select_date(yesterday, today()),
        Err(SchedulerError::DateInPast { .. })
    ));
    assert!(matches!(
        scheduler.select_time(slot(8, 30)),
        Err(SchedulerError::OffGridTime { .. })
    ));
    assert!(matches!(
        scheduler.select_time(slot(17, 45)),
        Err(SchedulerError::OffGridTime { .. })
    ));
    assert!(scheduler.date().is_none());
    assert!(scheduler.time().is_none());
}

#[test]
fn back_walks_towards_details() {
    let mut scheduler = InterviewScheduler::new("Maria Santos", "Backend Engineer");
    scheduler.next().expect("to calendar");
    scheduler.select_date(today() + Duration::days(2), today()).expect("future date");
    scheduler.select_time(slot(9, 0)).expect("first slot");
    scheduler.next().expect("to confirm");

    assert_eq!(scheduler.back(), InterviewStep::Calendar);
    assert_eq!(scheduler.back(), InterviewStep::Details);
    assert_eq!(scheduler.back(), InterviewStep::Details);
}

#[test]
fn confirm_sends_invite_then_closes_and_resets() {
    let calendar = SimulatedScheduler::new();
    let mut scheduler = InterviewScheduler::new("Sophie Martin", "Junior Frontend Developer");
    scheduler.open();
    scheduler.interview_type = InterviewType::Onsite;
    scheduler.location = " HQ, Room 4 ".to_string();
    scheduler.duration = InterviewDuration::Minutes45;
    scheduler.set_interviewer(0, "lead@techcorp.com").expect("first row");
    scheduler.add_interviewer();
    let third = scheduler.add_interviewer();
    scheduler.set_interviewer(third, "hr@techcorp.com").expect("third row");

    assert!(matches!(
        scheduler.confirm(&calendar),
        Err(SchedulerError::WrongStep { .. })
    ));

    scheduler.next().expect("to calendar");
    scheduler.select_date(today() + Duration::days(3), today()).expect("future date");
    scheduler.select_time(slot(10, 30)).expect("on the grid");
    scheduler.next().expect("to confirm");

    let message = scheduler.confirm(&calendar).expect("scheduled");
    assert_eq!(message, CONFIRMATION_MESSAGE);
    assert!(!scheduler.is_open());
    assert_eq!(scheduler.step(), InterviewStep::Details);

    let invites = calendar.invites();
    assert_eq!(invites.len(), 1);
    assert_eq!(invites[0].duration_minutes, 45);
    assert_eq!(invites[0].location.as_deref(), Some("HQ, Room 4"));
    assert_eq!(
        invites[0].interviewers,
        vec!["lead@techcorp.com".to_string(), "hr@techcorp.com".to_string()]
    );
}

#[test]
fn calendar_failure_keeps_the_dialog_on_confirm() {
    let mut scheduler = InterviewScheduler::new("Sophie Martin", "Junior Frontend Developer");
    scheduler.open();
    scheduler.next().expect("to calendar");
    scheduler.select_date(today(), today()).expect("today");
    scheduler.select_time(slot(16, 30)).expect("on the grid");
    scheduler.next().expect("to confirm");

    let err = scheduler.confirm(&UnavailableCalendar).expect_err("calendar down");
    assert!(matches!(err, SchedulerError::Scheduling(_)));
    assert!(scheduler.is_open());
    assert_eq!(scheduler.step(), InterviewStep::Confirm);
}
