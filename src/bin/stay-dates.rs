//! Stay Dates CLI tool
//!
//! A command-line front end for parsing date-range labels and resolving
//! booking options into confirmation payloads.

use clap::{ArgAction, Parser, Subcommand};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use stay_dates::booking::{
    BookingOption, BookingOptionResolver, BookingSelection, ResolverOptions, BOOKING_CONFIRMATION,
};
use stay_dates::clock::{Clock, FixedClock, SystemClock};
use stay_dates::date::{DateRange, DateRangeParser, SELECT_DATE_PLACEHOLDER};
use stay_dates::guests::GuestSelection;
use stay_dates::navigator::JsonNavigator;
use stay_dates::price::PriceInput;
use stay_dates::Error;

/// Stay Dates - Parse date-range labels and resolve booking options
#[derive(Parser)]
#[command(name = "stay-dates")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Parse an alternative-dates label
    stay-dates parse \"29 Dec - 2\"

    # Parse against a fixed date instead of the system clock
    stay-dates parse \"7 Sep - 9 Sep\" --today 2026-10-18

    # Resolve an offer and print the confirmation payload
    stay-dates resolve --property hotel-42 --dates \"Aug 10 - 12\" --price \"$1,234.56\"

    # Resolve without dates and write the payload to a file
    stay-dates resolve --property hotel-42 --price 80 --alt-label \"Weekend deal\" -o intent.json")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a date-range label into check-in and check-out dates
    Parse {
        /// Label such as "7 Sep - 9 Sep", "Aug 10 - 12" or "29 Dec - 2"
        label: String,

        /// Date to treat as today (YYYY-MM-DD) when inferring the year
        #[arg(long)]
        today: Option<String>,
    },

    /// Resolve a booking option and emit the confirmation payload as JSON
    Resolve {
        /// Property reference passed through to the payload
        #[arg(long)]
        property: String,

        /// Date-range label for the option
        #[arg(long, conflicts_with_all = ["check_in", "check_out"])]
        dates: Option<String>,

        /// Check-in date (YYYY-MM-DD)
        #[arg(long)]
        check_in: Option<String>,

        /// Check-out date (YYYY-MM-DD)
        #[arg(long)]
        check_out: Option<String>,

        /// Override price, numeric or currency-formatted (e.g. "$1,234.56")
        #[arg(long)]
        price: Option<PriceInput>,

        /// Label describing the alternate-date offer
        #[arg(long)]
        alt_label: Option<String>,

        /// Number of adults
        #[arg(long, default_value_t = 2)]
        adults: u32,

        /// Number of children
        #[arg(long, default_value_t = 0)]
        children: u32,

        /// Number of rooms
        #[arg(long, default_value_t = 1)]
        rooms: u32,

        /// Navigation destination
        #[arg(long, default_value = BOOKING_CONFIRMATION)]
        destination: String,

        /// Date to treat as today (YYYY-MM-DD) when inferring the year
        #[arg(long)]
        today: Option<String>,

        /// Write the payload to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Parse { label, today } => cmd_parse(label, today),
        Commands::Resolve {
            property, dates, check_in, check_out, price, alt_label,
            adults, children, rooms, destination, today, output,
        } => {
            let option_dates = match dates {
                Some(label) => OptionDates::Label(label),
                None if check_in.is_some() || check_out.is_some() => {
                    OptionDates::Iso { check_in, check_out }
                }
                None => OptionDates::Absent,
            };
            cmd_resolve(
                property, option_dates, price, alt_label,
                GuestSelection::new(adults, children, rooms),
                destination, today, output,
            )
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Install the stderr log subscriber
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Clock pinned to --today, or to the moment the command started
fn make_clock(today: Option<String>) -> Result<FixedClock> {
    match today {
        Some(date) => FixedClock::parse(&date).context("Invalid --today"),
        None => Ok(FixedClock(SystemClock.now())),
    }
}

/// Where the option's dates come from
enum OptionDates {
    Label(String),
    Iso {
        check_in: Option<String>,
        check_out: Option<String>,
    },
    Absent,
}

/// Parse a label and print the resolved range
fn cmd_parse(label: String, today: Option<String>) -> Result<()> {
    let parser = DateRangeParser::new(make_clock(today)?);

    match parser.parse(label.as_str()) {
        Some(range) => {
            if let Some(check_in) = range.check_in {
                println!("Check-in:  {}", check_in);
            }
            if let Some(check_out) = range.check_out {
                println!("Check-out: {}", check_out);
            }
            if let Some(nights) = range.nights() {
                println!("Nights:    {}", nights);
            }
        }
        None => {
            warn!(%label, "could not read date range, falling back to manual selection");
            println!("{}", SELECT_DATE_PLACEHOLDER);
        }
    }

    Ok(())
}

/// Resolve a booking option and emit the navigation payload
#[allow(clippy::too_many_arguments)]
fn cmd_resolve(
    property: String,
    dates: OptionDates,
    price: Option<PriceInput>,
    alt_label: Option<String>,
    guests: GuestSelection,
    destination: String,
    today: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let parser = DateRangeParser::new(make_clock(today)?);

    let dates = match dates {
        OptionDates::Label(label) => {
            let parsed = parser.parse(label.as_str());
            if parsed.is_none() {
                warn!(%label, "could not read date range, resolving without dates");
            }
            parsed
        }
        OptionDates::Iso { check_in, check_out } => {
            Some(strict_iso_range(check_in.as_deref(), check_out.as_deref())?)
        }
        OptionDates::Absent => None,
    };

    let option = BookingOption {
        dates,
        price,
        alternate_label: alt_label,
    };

    let writer: Box<dyn Write> = match &output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    let resolver = BookingOptionResolver::new(ResolverOptions { destination });
    let mut selection = BookingSelection::default();
    let mut navigator = JsonNavigator::new(writer);
    resolver.resolve(&mut selection, &mut navigator, property, guests, &option)?;

    info!(
        dates = %selection.dates.label(),
        guests = %guests,
        price_override = ?selection.price_override,
        "booking option resolved"
    );
    if let Some(path) = output {
        eprintln!("Output: {}", path.display());
    }

    Ok(())
}

/// Explicit ISO dates from the command line must be valid when given
fn strict_iso_range(check_in: Option<&str>, check_out: Option<&str>) -> Result<DateRange> {
    let range = DateRange::from_iso(check_in, check_out);
    for (given, resolved) in [(check_in, range.check_in), (check_out, range.check_out)] {
        if let (Some(raw), None) = (given, resolved) {
            return Err(Error::InvalidDate(raw.to_string()).into());
        }
    }
    Ok(range)
}
