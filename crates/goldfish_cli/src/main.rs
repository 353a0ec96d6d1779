//! GoldFish Hub command-line shell.
//!
//! # Responsibility
//! - Map each subcommand to one of the four screens and render it as text.
//! - Drive the collection views for add/edit/delete actions.
//!
//! # Invariants
//! - Every invocation opens its own view, so each screen reloads its
//!   collection from the store.

mod render;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use goldfish_core::db::open_db;
use goldfish_core::{
    init_logging, AppConfig, BirthdaysView, CollectionStore, DashboardService, KeyValueStore,
    Periodicity, RecurringEventsView, Route, Shell, SqliteKeyValueStore, TasksView, Today,
    Urgency, WEEKDAYS,
};
use log::{error, info};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

type CliResult<T> = Result<T, Box<dyn Error>>;

#[derive(Debug, Parser)]
#[command(
    name = "goldfish",
    version,
    about = "Household organizer for birthdays, tasks and recurring events"
)]
struct Cli {
    /// SQLite file holding the collections (overrides GOLDFISH_DB_PATH).
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    /// Absolute directory for rolling log files (overrides GOLDFISH_LOG_DIR).
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    /// trace|debug|info|warn|error (overrides GOLDFISH_LOG_LEVEL).
    #[arg(long, global = true)]
    log_level: Option<String>,
    /// Date the home screen treats as today, as YYYY-MM-DD.
    #[arg(long, global = true)]
    today: Option<NaiveDate>,
    #[command(subcommand)]
    screen: Option<Screen>,
}

#[derive(Debug, Clone, Subcommand)]
enum Screen {
    /// What matters today.
    Home,
    /// Birthday list.
    Birthdays {
        #[command(subcommand)]
        action: Option<BirthdayAction>,
    },
    /// Task list.
    Tasks {
        #[command(subcommand)]
        action: Option<TaskAction>,
    },
    /// Recurring event list.
    #[command(visible_alias = "recurring-events")]
    Events {
        #[command(subcommand)]
        action: Option<EventAction>,
    },
}

impl Screen {
    fn route(&self) -> Route {
        match self {
            Self::Home => Route::Home,
            Self::Birthdays { .. } => Route::Birthdays,
            Self::Tasks { .. } => Route::Tasks,
            Self::Events { .. } => Route::RecurringEvents,
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
enum BirthdayAction {
    List,
    Add {
        #[arg(long)]
        name: String,
        /// DD/MM
        #[arg(long)]
        date: String,
    },
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        date: Option<String>,
    },
    Delete {
        id: String,
    },
}

#[derive(Debug, Clone, Subcommand)]
enum TaskAction {
    List,
    Add {
        #[arg(long)]
        text: String,
        #[arg(long, default_value = "")]
        notes: String,
        #[arg(long, default_value_t = Urgency::Low)]
        urgency: Urgency,
        #[arg(long)]
        target_date: Option<String>,
    },
    Edit {
        id: String,
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        urgency: Option<Urgency>,
        /// Pass an empty value to clear the date.
        #[arg(long)]
        target_date: Option<String>,
    },
    Delete {
        id: String,
    },
}

#[derive(Debug, Clone, Subcommand)]
enum EventAction {
    List,
    Add {
        #[arg(long)]
        text: String,
        #[arg(long, default_value_t = Periodicity::Daily)]
        periodicity: Periodicity,
        /// Weekday name, used by weekly events.
        #[arg(long)]
        day_of_week: Option<String>,
        /// DD for monthly events, DD/MM for yearly ones.
        #[arg(long)]
        specific_date: Option<String>,
        /// HH:MM, defaults to 09:00.
        #[arg(long)]
        time: Option<String>,
    },
    Edit {
        id: String,
        #[arg(long)]
        text: Option<String>,
        /// Changing periodicity clears day of week and specific date.
        #[arg(long)]
        periodicity: Option<Periodicity>,
        #[arg(long)]
        day_of_week: Option<String>,
        #[arg(long)]
        specific_date: Option<String>,
        #[arg(long)]
        time: Option<String>,
    },
    Delete {
        id: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = resolve_config(&cli);

    if let Some(log_dir) = &config.log_dir {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    match run(&cli, &config) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=cli_run module=cli status=error error={err}");
            eprintln!("goldfish: {err}");
            ExitCode::FAILURE
        }
    }
}

fn resolve_config(cli: &Cli) -> AppConfig {
    let mut config = AppConfig::from_env();
    if let Some(db) = &cli.db {
        config.db_path = db.clone();
    }
    if let Some(log_dir) = &cli.log_dir {
        config.log_dir = Some(log_dir.clone());
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    config
}

fn run(cli: &Cli, config: &AppConfig) -> CliResult<String> {
    let conn = open_db(&config.db_path)?;
    let store = CollectionStore::new(SqliteKeyValueStore::new(&conn));

    let screen = cli.screen.clone().unwrap_or(Screen::Home);
    let shell = Shell::new(screen.route());
    info!(
        "event=cli_run module=cli status=start route={}",
        shell.current()
    );

    let body = match screen {
        Screen::Home => {
            let today = cli.today.map(Today::from_date).unwrap_or_else(Today::local);
            render::home(&DashboardService::new(&store).summary(&today))
        }
        Screen::Birthdays { action } => {
            birthdays_screen(&store, action.unwrap_or(BirthdayAction::List))?
        }
        Screen::Tasks { action } => tasks_screen(&store, action.unwrap_or(TaskAction::List))?,
        Screen::Events { action } => events_screen(&store, action.unwrap_or(EventAction::List))?,
    };

    Ok(format!("{}\n{body}", render::frame(&shell)))
}

fn birthdays_screen<S: KeyValueStore>(
    store: &CollectionStore<S>,
    action: BirthdayAction,
) -> CliResult<String> {
    let mut view = BirthdaysView::open(store);
    let notice = match action {
        BirthdayAction::List => None,
        BirthdayAction::Add { name, date } => {
            view.begin_add();
            let form = view.form_mut();
            form.name = name;
            form.date = date;
            view.save()?.map(|id| format!("Added birthday {id}."))
        }
        BirthdayAction::Edit { id, name, date } => {
            if !view.begin_edit(&id) {
                return Err(not_found("birthday", &id));
            }
            let form = view.form_mut();
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(date) = date {
                form.date = date;
            }
            view.save()?.map(|id| format!("Updated birthday {id}."))
        }
        BirthdayAction::Delete { id } => Some(deleted_notice("birthday", &id, view.delete(&id)?)),
    };
    Ok(render::birthdays(view.items(), notice.as_deref()))
}

fn tasks_screen<S: KeyValueStore>(
    store: &CollectionStore<S>,
    action: TaskAction,
) -> CliResult<String> {
    let mut view = TasksView::open(store);
    let notice = match action {
        TaskAction::List => None,
        TaskAction::Add {
            text,
            notes,
            urgency,
            target_date,
        } => {
            view.begin_add();
            let form = view.form_mut();
            form.text = text;
            form.notes = notes;
            form.urgency = urgency;
            form.target_date = target_date.unwrap_or_default();
            view.save()?.map(|id| format!("Added task {id}."))
        }
        TaskAction::Edit {
            id,
            text,
            notes,
            urgency,
            target_date,
        } => {
            if !view.begin_edit(&id) {
                return Err(not_found("task", &id));
            }
            let form = view.form_mut();
            if let Some(text) = text {
                form.text = text;
            }
            if let Some(notes) = notes {
                form.notes = notes;
            }
            if let Some(urgency) = urgency {
                form.urgency = urgency;
            }
            if let Some(target_date) = target_date {
                form.target_date = target_date;
            }
            view.save()?.map(|id| format!("Updated task {id}."))
        }
        TaskAction::Delete { id } => Some(deleted_notice("task", &id, view.delete(&id)?)),
    };
    Ok(render::tasks(view.items(), notice.as_deref()))
}

fn events_screen<S: KeyValueStore>(
    store: &CollectionStore<S>,
    action: EventAction,
) -> CliResult<String> {
    let mut view = RecurringEventsView::open(store);
    let notice = match action {
        EventAction::List => None,
        EventAction::Add {
            text,
            periodicity,
            day_of_week,
            specific_date,
            time,
        } => {
            view.begin_add();
            let form = view.form_mut();
            form.text = text;
            form.set_periodicity(periodicity);
            form.day_of_week = day_of_week.map(canonical_weekday);
            form.specific_date = specific_date;
            if time.is_some() {
                form.time = time;
            }
            view.save()?.map(|id| format!("Added event {id}."))
        }
        EventAction::Edit {
            id,
            text,
            periodicity,
            day_of_week,
            specific_date,
            time,
        } => {
            if !view.begin_edit(&id) {
                return Err(not_found("event", &id));
            }
            let form = view.form_mut();
            if let Some(text) = text {
                form.text = text;
            }
            if let Some(periodicity) = periodicity.filter(|p| *p != form.periodicity) {
                form.set_periodicity(periodicity);
            }
            if day_of_week.is_some() {
                form.day_of_week = day_of_week.map(canonical_weekday);
            }
            if specific_date.is_some() {
                form.specific_date = specific_date;
            }
            if time.is_some() {
                form.time = time;
            }
            view.save()?.map(|id| format!("Updated event {id}."))
        }
        EventAction::Delete { id } => Some(deleted_notice("event", &id, view.delete(&id)?)),
    };
    Ok(render::events(view.items(), notice.as_deref()))
}

/// Spells a known weekday the way the editor lists it; other input is kept
/// as typed.
fn canonical_weekday(day: String) -> String {
    WEEKDAYS
        .iter()
        .find(|name| name.eq_ignore_ascii_case(day.trim()))
        .map_or(day, |name| name.to_string())
}

fn not_found(kind: &str, id: &str) -> Box<dyn Error> {
    format!("no {kind} with id `{id}`").into()
}

fn deleted_notice(kind: &str, id: &str, removed: bool) -> String {
    if removed {
        format!("Deleted {kind} {id}.")
    } else {
        format!("No {kind} with id {id}; nothing deleted.")
    }
}
