//! Booking option resolution
//!
//! A booking option is what the user picked from an offer: an optional date
//! range, an optional override price and an optional alternate-date label.
//! [`BookingOptionResolver`] normalizes it into a [`BookingIntent`], writes the
//! selection into caller-owned state and hands the intent to a [`Navigator`].

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::date::DateRange;
use crate::navigator::Navigator;
use crate::price::{normalize_price, PriceInput};

/// Default destination for resolved booking intents
pub const BOOKING_CONFIRMATION: &str = "BookingConfirmation";

/// Normalized payload handed to the booking confirmation step
///
/// `property` and `guests` are opaque to this crate and passed through as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingIntent<P, G> {
    pub property: P,
    pub dates: DateRange,
    pub guests: G,
    pub price_override: Option<f64>,
    pub alternate_date_label: Option<String>,
}

/// The raw option picked by the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingOption {
    /// Dates for this option; `None` leaves the current date selection alone
    pub dates: Option<DateRange>,
    /// Suggested price, numeric or currency-formatted
    pub price: Option<PriceInput>,
    /// Label describing an alternate-date offer
    pub alternate_label: Option<String>,
}

impl BookingOption {
    pub fn with_dates(mut self, dates: DateRange) -> Self {
        self.dates = Some(dates);
        self
    }

    pub fn with_price(mut self, price: impl Into<PriceInput>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn with_alternate_label(mut self, label: impl Into<String>) -> Self {
        self.alternate_label = Some(label.into());
        self
    }

    /// Build the normalized intent for this option
    pub fn to_intent<P, G>(&self, property: P, guests: G) -> BookingIntent<P, G> {
        BookingIntent {
            property,
            dates: self.dates.unwrap_or_default(),
            guests,
            price_override: normalize_price(self.price.as_ref()),
            alternate_date_label: self.alternate_label.clone(),
        }
    }
}

/// Caller-owned selection state updated before navigation
pub trait BookingState {
    fn set_price_override(&mut self, price: Option<f64>);
    fn set_alternate_label(&mut self, label: Option<String>);
    fn set_dates(&mut self, dates: DateRange);
}

impl<T: BookingState + ?Sized> BookingState for &mut T {
    fn set_price_override(&mut self, price: Option<f64>) {
        (**self).set_price_override(price)
    }

    fn set_alternate_label(&mut self, label: Option<String>) {
        (**self).set_alternate_label(label)
    }

    fn set_dates(&mut self, dates: DateRange) {
        (**self).set_dates(dates)
    }
}

/// Plain holder for the three pieces of selection state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingSelection {
    pub price_override: Option<f64>,
    pub alternate_label: Option<String>,
    pub dates: DateRange,
}

impl BookingState for BookingSelection {
    fn set_price_override(&mut self, price: Option<f64>) {
        self.price_override = price;
    }

    fn set_alternate_label(&mut self, label: Option<String>) {
        self.alternate_label = label;
    }

    fn set_dates(&mut self, dates: DateRange) {
        self.dates = dates;
    }
}

/// Options for [`BookingOptionResolver`]
#[derive(Debug, Clone)]
pub struct ResolverOptions {
    /// Destination passed to the navigator
    pub destination: String,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            destination: BOOKING_CONFIRMATION.to_string(),
        }
    }
}

/// Turns a picked booking option into state updates and one navigation
#[derive(Debug, Clone, Default)]
pub struct BookingOptionResolver {
    options: ResolverOptions,
}

impl BookingOptionResolver {
    pub fn new(options: ResolverOptions) -> Self {
        Self { options }
    }

    pub fn destination(&self) -> &str {
        &self.options.destination
    }

    /// Resolve a booking option
    ///
    /// Sets the price override, then the alternate label, then (only when the
    /// option carries dates) the date range, and finally navigates with the
    /// normalized intent. The calls are sequential, so every state write has
    /// landed before the navigator runs.
    pub fn resolve<S, N, P, G>(
        &self,
        state: &mut S,
        navigator: &mut N,
        property: P,
        guests: G,
        option: &BookingOption,
    ) -> Result<(), N::Error>
    where
        S: BookingState + ?Sized,
        N: Navigator<P, G> + ?Sized,
    {
        let intent = option.to_intent(property, guests);

        state.set_price_override(intent.price_override);
        state.set_alternate_label(intent.alternate_date_label.clone());
        match option.dates {
            Some(dates) => state.set_dates(dates),
            None => debug!("option has no dates, keeping current selection"),
        }

        info!(
            destination = self.destination(),
            dates = %intent.dates.label(),
            price_override = ?intent.price_override,
            "navigating with booking intent"
        );
        navigator.navigate(self.destination(), intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::RecordingNavigator;
    use chrono::NaiveDate;

    /// Records every setter call in order
    #[derive(Debug, Default)]
    struct CallLog(Vec<String>);

    impl BookingState for CallLog {
        fn set_price_override(&mut self, price: Option<f64>) {
            self.0.push(format!("price:{:?}", price));
        }

        fn set_alternate_label(&mut self, label: Option<String>) {
            self.0.push(format!("label:{:?}", label));
        }

        fn set_dates(&mut self, dates: DateRange) {
            self.0.push(format!("dates:{:?}", dates));
        }
    }

    fn sep_7_to_9() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2026, 9, 7).unwrap(),
            NaiveDate::from_ymd_opt(2026, 9, 9).unwrap(),
        )
    }

    #[test]
    fn test_setter_order() {
        let resolver = BookingOptionResolver::default();
        let mut log = CallLog::default();
        let mut nav = RecordingNavigator::new();
        let option = BookingOption::default()
            .with_dates(sep_7_to_9())
            .with_price("$120")
            .with_alternate_label("Flexible: 7-9 Sep");

        resolver.resolve(&mut log, &mut nav, "hotel-1", 2, &option).unwrap();

        assert_eq!(log.0.len(), 3);
        assert!(log.0[0].starts_with("price:Some(120.0)"));
        assert!(log.0[1].starts_with("label:Some"));
        assert!(log.0[2].starts_with("dates:"));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let resolver = BookingOptionResolver::default();
        let option = BookingOption::default()
            .with_dates(sep_7_to_9())
            .with_price("$1,234.56");

        let mut first = CallLog::default();
        let mut second = CallLog::default();
        let mut nav = RecordingNavigator::new();
        resolver.resolve(&mut first, &mut nav, "hotel-1", 2, &option).unwrap();
        resolver.resolve(&mut second, &mut nav, "hotel-1", 2, &option).unwrap();

        assert_eq!(first.0, second.0);
        assert_eq!(nav.calls[0], nav.calls[1]);
    }

    #[test]
    fn test_price_normalization() {
        let resolver = BookingOptionResolver::default();
        let mut nav = RecordingNavigator::new();

        let mut state = BookingSelection::default();
        let option = BookingOption::default().with_price("$1,234.56");
        resolver.resolve(&mut state, &mut nav, (), (), &option).unwrap();
        assert_eq!(state.price_override, Some(1234.56));

        let option = BookingOption::default().with_price(1234.56);
        resolver.resolve(&mut state, &mut nav, (), (), &option).unwrap();
        assert_eq!(state.price_override, Some(1234.56));

        let option = BookingOption::default().with_price("N/A");
        resolver.resolve(&mut state, &mut nav, (), (), &option).unwrap();
        assert_eq!(state.price_override, None);
    }

    #[test]
    fn test_no_dates_navigates_with_empty_range() {
        let resolver = BookingOptionResolver::default();
        let mut state = BookingSelection {
            dates: sep_7_to_9(),
            ..Default::default()
        };
        let mut nav = RecordingNavigator::new();
        let option = BookingOption::default()
            .with_price(80_i64)
            .with_alternate_label("Weekend deal");

        resolver.resolve(&mut state, &mut nav, "hotel-9", "2 adults", &option).unwrap();

        let (destination, intent) = &nav.calls[0];
        assert_eq!(destination, BOOKING_CONFIRMATION);
        assert_eq!(intent.dates, DateRange::empty());
        assert_eq!(intent.price_override, Some(80.0));
        assert_eq!(intent.alternate_date_label.as_deref(), Some("Weekend deal"));
        assert_eq!(intent.property, "hotel-9");
        assert_eq!(intent.guests, "2 adults");

        // The existing date selection is left alone
        assert_eq!(state.dates, sep_7_to_9());
        assert_eq!(state.alternate_label.as_deref(), Some("Weekend deal"));
    }

    #[test]
    fn test_custom_destination() {
        let resolver = BookingOptionResolver::new(ResolverOptions {
            destination: "Checkout".to_string(),
        });
        let mut state = BookingSelection::default();
        let mut nav = RecordingNavigator::new();
        resolver
            .resolve(&mut state, &mut nav, 1_u64, (), &BookingOption::default())
            .unwrap();
        assert_eq!(nav.calls[0].0, "Checkout");
    }

    #[test]
    fn test_intent_json_shape() {
        let option = BookingOption::default()
            .with_dates(sep_7_to_9())
            .with_price(80.0);
        let intent = option.to_intent("hotel-1", 2);
        let json = serde_json::to_value(&intent).unwrap();

        assert_eq!(json["property"], "hotel-1");
        assert_eq!(json["guests"], 2);
        assert_eq!(json["dates"]["checkIn"], "2026-09-07");
        assert_eq!(json["priceOverride"], 80.0);
        assert!(json["alternateDateLabel"].is_null());
    }
}
