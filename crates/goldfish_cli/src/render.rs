//! Plain-text rendering of the shell frame and the four screens.

use goldfish_core::shell::TABS;
use goldfish_core::{Birthday, DashboardSummary, RecurringEvent, Shell, Task};
use std::fmt::Write;

const APP_TITLE: &str = "GoldFish Hub";

/// Title line plus the tab bar with the current tab bracketed.
pub fn frame(shell: &Shell) -> String {
    let selected = shell.selected_tab();
    let tabs = TABS
        .iter()
        .enumerate()
        .map(|(index, tab)| {
            if Some(index) == selected {
                format!("[{}]", tab.label)
            } else {
                tab.label.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    format!("{APP_TITLE}\n{tabs}\n")
}

pub fn home(summary: &DashboardSummary) -> String {
    let mut out = format!("Welcome to {APP_TITLE}\n");

    section(
        &mut out,
        "Upcoming Birthdays",
        "No upcoming birthdays",
        summary
            .upcoming_birthdays
            .iter()
            .map(|birthday| format!("{} - {}", birthday.name, birthday.date)),
    );
    section(
        &mut out,
        "Urgent Tasks",
        "No urgent tasks",
        summary.urgent_tasks.iter().map(|task| match task.target_date.as_deref() {
            Some(date) if !date.is_empty() => format!("{} - Due: {date}", task.text),
            _ => task.text.clone(),
        }),
    );
    section(
        &mut out,
        "Today's Events",
        "No events today",
        summary.todays_events.iter().map(|event| event.text.clone()),
    );
    out
}

pub fn birthdays(items: &[Birthday], notice: Option<&str>) -> String {
    list(
        "Birthdays",
        notice,
        items
            .iter()
            .map(|birthday| format!("{}  {}  {}", birthday.id, birthday.name, birthday.date)),
    )
}

pub fn tasks(items: &[Task], notice: Option<&str>) -> String {
    list(
        "Tasks",
        notice,
        items.iter().map(|task| {
            let mut line = format!(
                "{}  {}  [{}:{}]",
                task.id,
                task.text,
                task.urgency,
                task.urgency.badge()
            );
            if let Some(date) = task.target_date.as_deref().filter(|date| !date.is_empty()) {
                let _ = write!(line, "  Due: {date}");
            }
            if !task.notes.is_empty() {
                let _ = write!(line, "\n      {}", task.notes);
            }
            line
        }),
    )
}

pub fn events(items: &[RecurringEvent], notice: Option<&str>) -> String {
    list(
        "Recurring Events",
        notice,
        items
            .iter()
            .map(|event| format!("{}  {}  ({})", event.id, event.text, event.schedule_label())),
    )
}

fn list(title: &str, notice: Option<&str>, lines: impl Iterator<Item = String>) -> String {
    let mut out = String::new();
    if let Some(notice) = notice {
        let _ = writeln!(out, "{notice}\n");
    }
    section(&mut out, title, "Nothing here yet", lines);
    out
}

fn section(out: &mut String, title: &str, empty: &str, lines: impl Iterator<Item = String>) {
    let _ = writeln!(out, "\n{title}");
    let mut any = false;
    for line in lines {
        any = true;
        let _ = writeln!(out, "  {line}");
    }
    if !any {
        let _ = writeln!(out, "  {empty}");
    }
}
