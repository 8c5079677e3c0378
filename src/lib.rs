//! Stay Dates Library
//!
//! Date-range label parsing and booking-intent normalization for travel
//! booking flows. This library provides functionality to:
//! - Parse loose date-range labels ("7 Sep - 9 Sep", "29 Dec - 2") into dates
//! - Normalize override prices from numbers or currency-formatted text
//! - Resolve a picked booking option into state updates and a navigation payload
//! - Step guest and room counts within bounds
//!
//! # Example
//!
//! ```
//! use stay_dates::booking::{BookingOption, BookingOptionResolver, BookingSelection};
//! use stay_dates::clock::FixedClock;
//! use stay_dates::date::DateRangeParser;
//! use stay_dates::navigator::RecordingNavigator;
//!
//! let clock = FixedClock::parse("2026-10-18").unwrap();
//! let parser = DateRangeParser::new(clock);
//! let dates = parser.parse("7 Sep - 9 Sep").expect("label should parse");
//!
//! let option = BookingOption::default()
//!     .with_dates(dates)
//!     .with_price("$1,234.56")
//!     .with_alternate_label("7 Sep - 9 Sep");
//!
//! let mut selection = BookingSelection::default();
//! let mut navigator = RecordingNavigator::new();
//! BookingOptionResolver::default()
//!     .resolve(&mut selection, &mut navigator, "hotel-42", 2, &option)
//!     .unwrap();
//!
//! assert_eq!(selection.price_override, Some(1234.56));
//! assert_eq!(navigator.calls.len(), 1);
//! ```

pub mod error;
pub mod clock;
pub mod date;
pub mod price;
pub mod guests;
pub mod booking;
pub mod navigator;

// Re-export commonly used items
pub use error::{Error, Result};
pub use date::{DateRange, DateRangeParser};
pub use booking::{BookingIntent, BookingOption, BookingOptionResolver};
