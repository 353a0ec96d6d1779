use goldfish_core::{Periodicity, Recurrence, RecurringEvent, Task, Urgency};
use serde_json::json;

#[test]
fn recurring_event_serializes_to_flat_periodicity_shape() {
    let event = RecurringEvent {
        id: "e1".to_string(),
        text: "Gym".to_string(),
        recurrence: Recurrence::Weekly {
            day_of_week: Some("Monday".to_string()),
        },
        time: Some("18:30".to_string()),
    };

    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(
        value,
        json!({
            "id": "e1",
            "text": "Gym",
            "periodicity": "weekly",
            "dayOfWeek": "Monday",
            "time": "18:30"
        })
    );
}

#[test]
fn stale_fields_from_other_periodicity_are_ignored_on_load() {
    let event: RecurringEvent = serde_json::from_value(json!({
        "id": "e2",
        "text": "Vitamins",
        "periodicity": "daily",
        "dayOfWeek": "Friday",
        "specificDate": "01/01"
    }))
    .unwrap();

    assert_eq!(event.recurrence, Recurrence::Daily);
    assert_eq!(event.time, None);
}

#[test]
fn weekly_event_without_day_still_loads() {
    let event: RecurringEvent = serde_json::from_value(json!({
        "id": "e3",
        "text": "Call mum",
        "periodicity": "weekly",
        "time": "09:00"
    }))
    .unwrap();

    assert_eq!(event.recurrence, Recurrence::Weekly { day_of_week: None });
    assert_eq!(event.schedule_label(), "Every week at 09:00");
}

#[test]
fn schedule_labels_follow_periodicity() {
    let mut event = RecurringEvent {
        id: "e4".to_string(),
        text: "Check".to_string(),
        recurrence: Recurrence::Daily,
        time: Some("07:15".to_string()),
    };
    assert_eq!(event.schedule_label(), "Every day at 07:15");

    event.recurrence = Recurrence::normalized(Periodicity::Monthly, None, Some("12".to_string()));
    event.time = None;
    assert_eq!(event.schedule_label(), "Monthly on 12");

    event.recurrence = Recurrence::normalized(
        Periodicity::Yearly,
        Some("Sunday".to_string()),
        Some("24/12".to_string()),
    );
    assert_eq!(event.recurrence.day_of_week(), None);
    assert_eq!(event.schedule_label(), "Yearly on 24/12");
}

#[test]
fn task_uses_camel_case_keys_and_tolerates_legacy_empty_target_date() {
    let task: Task = serde_json::from_value(json!({
        "id": "t1",
        "text": "Pay rent",
        "notes": "",
        "urgency": "high",
        "targetDate": ""
    }))
    .unwrap();
    assert_eq!(task.urgency, Urgency::High);
    assert_eq!(task.target_date.as_deref(), Some(""));
    assert!(task.is_urgent());

    let fresh = Task {
        target_date: Some("2024-04-01".to_string()),
        ..task
    };
    let value = serde_json::to_value(&fresh).unwrap();
    assert_eq!(value["targetDate"], "2024-04-01");
    assert!(value.get("target_date").is_none());
}

#[test]
fn urgency_parses_names_and_exposes_badge_tone() {
    assert_eq!("HIGH".parse::<Urgency>().unwrap(), Urgency::High);
    assert!("urgent".parse::<Urgency>().is_err());
    assert_eq!(Urgency::High.badge(), "error");
    assert_eq!(Urgency::Medium.badge(), "warning");
    assert_eq!(Urgency::Low.badge(), "success");
    assert_eq!(Urgency::ALL.len(), 3);
}
