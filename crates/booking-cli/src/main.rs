//! `booking` CLI — inspect a unit's calendar payload and replay day picks.
//!
//! ## Usage
//!
//! ```sh
//! # List unavailable days (payload from stdin)
//! curl -s $API/properties/42/calendar/ | booking unavailable
//!
//! # Replay picks and print the resulting selection as JSON
//! booking --today 2024-06-01 pick -i calendar.json 2024-06-10 2024-06-14
//!
//! # Render a month grid with a selection
//! booking month -i calendar.json --year 2024 --month 6 --pick 2024-06-10 --pick 2024-06-14
//!
//! # Validate a stay before submitting it
//! booking check -i calendar.json --check-in 2024-06-10 --check-out 2024-06-14
//!
//! # Free runs of at least 3 nights
//! booking free -i calendar.json --from 2024-06-01 --to 2024-07-01 --min-nights 3
//! ```

mod logging;

use std::io::{self, Read};

use anyhow::{Context, Result};
use booking_engine::{
    apply_pick, check_stay, find_first_free_range, free_ranges, month_view, AvailabilityIndex,
    CalendarDay, CalendarPayload, DayRange, DayStatus, MonthView, SelectionState,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "booking", version, about = "Booking availability CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Reference day for past-day checks (defaults to the local date)
    #[arg(long, global = true)]
    today: Option<CalendarDay>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every unavailable day, one per line
    Unavailable {
        /// Calendar payload file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Apply day picks in order and print the final selection as JSON
    Pick {
        #[arg(short, long)]
        input: Option<String>,
        /// Days picked, in click order
        #[arg(required = true)]
        days: Vec<CalendarDay>,
    },
    /// Print a Monday-first month grid with day statuses
    Month {
        #[arg(short, long)]
        input: Option<String>,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u32,
        /// Day picks applied before rendering (repeatable)
        #[arg(long = "pick")]
        picks: Vec<CalendarDay>,
    },
    /// Check that a stay can be requested
    Check {
        #[arg(short, long)]
        input: Option<String>,
        #[arg(long)]
        check_in: CalendarDay,
        #[arg(long)]
        check_out: CalendarDay,
    },
    /// List free runs of days within [from, to)
    Free {
        #[arg(short, long)]
        input: Option<String>,
        #[arg(long)]
        from: CalendarDay,
        #[arg(long)]
        to: CalendarDay,
        /// Only print the first run of at least this many nights
        #[arg(long)]
        min_nights: Option<i64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let today = cli
        .today
        .unwrap_or_else(|| CalendarDay::from(chrono::Local::now().date_naive()));

    match cli.command {
        Commands::Unavailable { input } => {
            let index = load_index(input.as_deref())?;
            for day in index.iter() {
                println!("{day}");
            }
        }
        Commands::Pick { input, days } => {
            let index = load_index(input.as_deref())?;
            let state = replay_picks(&days, today, &index);
            println!("{}", serde_json::to_string(&state)?);
        }
        Commands::Month {
            input,
            year,
            month,
            picks,
        } => {
            let index = load_index(input.as_deref())?;
            let state = replay_picks(&picks, today, &index);
            let view = month_view(year, month, today, &index, &state)
                .context("Failed to build month view")?;
            print!("{}", render_month(&view));
        }
        Commands::Check {
            input,
            check_in,
            check_out,
        } => {
            let payload = load_payload(input.as_deref())?;
            let stay = check_stay(
                check_in,
                check_out,
                &payload.blocked_dates,
                &payload.reserved_dates,
            )
            .with_context(|| format!("Stay {check_in}..{check_out} rejected"))?;
            println!("ok ({} nights)", stay.nights());
        }
        Commands::Free {
            input,
            from,
            to,
            min_nights,
        } => {
            let index = load_index(input.as_deref())?;
            let window = DayRange::new(from, to).context("Invalid window")?;
            let runs: Vec<_> = match min_nights {
                Some(min) => find_first_free_range(&index, &window, min)
                    .into_iter()
                    .collect(),
                None => free_ranges(&index, &window),
            };
            for run in runs {
                println!("{} ({} nights)", run.range, run.nights);
            }
        }
    }

    Ok(())
}

fn replay_picks(days: &[CalendarDay], today: CalendarDay, index: &AvailabilityIndex) -> SelectionState {
    days.iter().fold(SelectionState::Empty, |state, &day| {
        let transition = apply_pick(state, day, today, index);
        tracing::info!(%day, outcome = ?transition.outcome, "pick");
        transition.state
    })
}

/// One cell per day: the day number followed by a status marker.
fn render_month(view: &MonthView) -> String {
    let mut out = format!("{:04}-{:02}\n", view.year, view.month);
    out.push_str("Mo  Tu  We  Th  Fr  Sa  Su\n");

    let mut column = 0;
    let mut line: Vec<String> = Vec::new();
    for _ in 0..view.leading_blanks {
        line.push("   ".to_string());
        column += 1;
    }
    for cell in &view.cells {
        let marker = match cell.status {
            DayStatus::Past => 'x',
            DayStatus::Unavailable => '#',
            DayStatus::CheckIn => '[',
            DayStatus::CheckOut => ']',
            DayStatus::InRange => '~',
            DayStatus::Available => ' ',
        };
        line.push(format!("{:>2}{}", cell.day.day(), marker));
        column += 1;
        if column == 7 {
            out.push_str(line.join(" ").trim_end());
            out.push('\n');
            line.clear();
            column = 0;
        }
    }
    if !line.is_empty() {
        out.push_str(line.join(" ").trim_end());
        out.push('\n');
    }
    out
}

fn load_index(path: Option<&str>) -> Result<AvailabilityIndex> {
    let build = load_payload(path)?.build_index();
    if !build.skipped.is_empty() {
        tracing::warn!(skipped = build.skipped.len(), "some reservations were left out of the index");
    }
    Ok(build.index)
}

fn load_payload(path: Option<&str>) -> Result<CalendarPayload> {
    let json = read_input(path)?;
    CalendarPayload::from_json(&json).context("Failed to parse calendar payload")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
