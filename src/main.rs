mod app;
mod counter;
mod domain;
mod error;
mod input;
mod logging;
mod notifications;
mod persistence;
mod pomodoro;
mod projector;
mod report;
mod store;
mod ticker;
mod ui;

use app::AppState;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use counter::CompletionCounter;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::{completion_glyph, DetailView, Granularity};
use persistence::{init_local_dir, resolve_data_dir, Storage};
use pomodoro::PomodoroTimer;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use store::TaskStore;

#[derive(Parser)]
#[command(name = "dayplan")]
#[command(about = "A terminal day planner with a calendar and a pomodoro timer", long_about = None)]
struct Cli {
    /// Data directory. Defaults to $DAYPLAN_DIR, a local .dayplan, then ~/.dayplan
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Pomodoro session length in minutes
    #[arg(long, global = true, default_value_t = 25, value_parser = clap::value_parser!(u32).range(1..=240))]
    minutes: u32,

    /// Initial calendar view: month or year
    #[arg(long, global = true, default_value = "month", value_parser = parse_granularity)]
    view: Granularity,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .dayplan directory in the current directory
    Init,
    /// Add a task without opening the TUI
    Add {
        /// Task text
        text: String,
        /// Date (YYYY-MM-DD format). Defaults to today.
        #[arg(short, long)]
        date: Option<String>,
        /// Reminder time (HH:MM)
        #[arg(short, long)]
        time: Option<String>,
    },
    /// List the tasks of a date
    List {
        /// Date (YYYY-MM-DD format). Defaults to today.
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Generate a daily report
    Report {
        /// Date to generate report for (YYYY-MM-DD format). Defaults to today.
        #[arg(short, long)]
        date: Option<String>,
        /// Output file path. Defaults to <data dir>/report-YYYY-MM-DD.md
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn parse_granularity(raw: &str) -> Result<Granularity, String> {
    Granularity::from_key(raw).ok_or_else(|| format!("unknown view `{}` (expected month or year)", raw))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse an optional --date argument, defaulting to today
fn date_or_today(raw: Option<&str>) -> Result<NaiveDate> {
    match raw {
        Some(raw) => Ok(error::parse_date(raw)?),
        None => Ok(today()),
    }
}

/// Resolve the data directory and open storage in it
fn open_storage(dir: Option<&std::path::Path>) -> Result<(PathBuf, Storage)> {
    let data_dir = resolve_data_dir(dir)?;
    let storage = Storage::open(&data_dir)?;
    tracing::info!(dir = %data_dir.display(), "data directory resolved");
    Ok((data_dir, storage))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init()?;

    match cli.command {
        Some(Commands::Init) => {
            let data_dir = init_local_dir()?;
            println!("Initialized dayplan directory: {}", data_dir.display());
            println!();
            println!("dayplan will now use this local directory for task storage.");
            println!("Run 'dayplan' to start planning.");
            Ok(())
        }
        Some(Commands::Add { text, date, time }) => {
            let date = date_or_today(date.as_deref())?;
            let reminder = match time.as_deref() {
                Some(raw) => Some(domain::reminder_for(date, error::parse_time(raw)?)),
                None => None,
            };

            let (_, storage) = open_storage(cli.dir.as_deref())?;
            let mut store = TaskStore::load(storage);
            match store.add_task(date, &text, reminder)? {
                Some(id) => println!("Added task {} for {}", id, domain::date_key(date)),
                None => println!("Nothing added: task text is empty"),
            }
            Ok(())
        }
        Some(Commands::List { date }) => {
            let date = date_or_today(date.as_deref())?;
            let (_, storage) = open_storage(cli.dir.as_deref())?;
            let store = TaskStore::load(storage.clone());
            let counter = CompletionCounter::load(storage);

            print_detail(projector::project_detail(&store, Some(date)));
            println!();
            println!("Total completed: {}", counter.value());
            Ok(())
        }
        Some(Commands::Report { date, output }) => {
            let date = date_or_today(date.as_deref())?;
            let (data_dir, storage) = open_storage(cli.dir.as_deref())?;
            let store = TaskStore::load(storage.clone());
            let counter = CompletionCounter::load(storage);

            println!("Generating report for {}...", date);
            let report_path = report::generate_report(&store, counter.value(), date, output, &data_dir)?;
            println!("Report generated: {}", report_path.display());
            Ok(())
        }
        None => {
            let (_, storage) = open_storage(cli.dir.as_deref())?;
            tracing::info!(minutes = cli.minutes, view = cli.view.as_key(), "starting session");
            run_tui(storage, cli.minutes, cli.view)
        }
    }
}

fn print_detail(view: DetailView) {
    match view {
        DetailView::Closed => {}
        DetailView::Empty { title, .. } => {
            println!("{}", title);
            println!("  {}", domain::EMPTY_DETAIL_MESSAGE);
        }
        DetailView::Tasks { title, rows, .. } => {
            println!("{}", title);
            for row in rows {
                match row.reminder {
                    Some(time) => println!("  {} {}  🕒 {}", completion_glyph(row.completed), row.text, time),
                    None => println!("  {} {}", completion_glyph(row.completed), row.text),
                }
            }
        }
    }
}

fn run_tui(storage: Storage, minutes: u32, view: Granularity) -> Result<()> {
    let store = TaskStore::load(storage.clone());
    let counter = CompletionCounter::load(storage);
    let timer = PomodoroTimer::new(minutes * 60);

    // Create app state
    let mut app = AppState::new(store, counter, timer, today());
    if view != Granularity::Month {
        app.set_granularity(view);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        // Timer countdown and midnight rollover
        app.tick(Instant::now(), today());
    }
}
