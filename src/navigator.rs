//! Navigation collaborators that receive resolved booking intents

use std::convert::Infallible;
use std::io::Write;

use serde::Serialize;
use tracing::debug;

use crate::booking::BookingIntent;
use crate::error::{Error, Result};

/// Performs the transition to the booking confirmation step
pub trait Navigator<P, G> {
    type Error;

    fn navigate(
        &mut self,
        destination: &str,
        intent: BookingIntent<P, G>,
    ) -> std::result::Result<(), Self::Error>;
}

impl<P, G, N: Navigator<P, G> + ?Sized> Navigator<P, G> for &mut N {
    type Error = N::Error;

    fn navigate(
        &mut self,
        destination: &str,
        intent: BookingIntent<P, G>,
    ) -> std::result::Result<(), Self::Error> {
        (**self).navigate(destination, intent)
    }
}

/// Keeps every navigation it receives, in order
#[derive(Debug, Clone)]
pub struct RecordingNavigator<P, G> {
    pub calls: Vec<(String, BookingIntent<P, G>)>,
}

impl<P, G> RecordingNavigator<P, G> {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    /// The most recent navigation, if any
    pub fn last(&self) -> Option<&(String, BookingIntent<P, G>)> {
        self.calls.last()
    }
}

impl<P, G> Default for RecordingNavigator<P, G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, G> Navigator<P, G> for RecordingNavigator<P, G> {
    type Error = Infallible;

    fn navigate(
        &mut self,
        destination: &str,
        intent: BookingIntent<P, G>,
    ) -> std::result::Result<(), Infallible> {
        self.calls.push((destination.to_string(), intent));
        Ok(())
    }
}

/// Envelope written by [`JsonNavigator`]
#[derive(Serialize)]
struct Navigation<'a, P, G> {
    destination: &'a str,
    params: &'a BookingIntent<P, G>,
}

/// Writes each navigation as a pretty-printed JSON document
///
/// Output shape: `{"destination": "...", "params": { ...intent... }}`
#[derive(Debug)]
pub struct JsonNavigator<W> {
    writer: W,
}

impl<W: Write> JsonNavigator<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<P: Serialize, G: Serialize, W: Write> Navigator<P, G> for JsonNavigator<W> {
    type Error = Error;

    fn navigate(&mut self, destination: &str, intent: BookingIntent<P, G>) -> Result<()> {
        let navigation = Navigation {
            destination,
            params: &intent,
        };
        serde_json::to_writer_pretty(&mut self.writer, &navigation)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        debug!(destination, "wrote navigation payload");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::BookingOption;
    use crate::date::DateRange;

    #[test]
    fn test_recording_navigator() {
        let mut nav = RecordingNavigator::new();
        assert!(nav.last().is_none());

        let intent = BookingOption::default().to_intent("hotel-1", ());
        nav.navigate("BookingConfirmation", intent.clone()).unwrap();

        let (destination, recorded) = nav.last().unwrap();
        assert_eq!(destination, "BookingConfirmation");
        assert_eq!(recorded, &intent);
    }

    #[test]
    fn test_json_navigator_envelope() {
        let mut nav = JsonNavigator::new(Vec::new());
        let intent = BookingOption::default()
            .with_dates(DateRange::from_iso(Some("2026-09-07"), Some("2026-09-09")))
            .with_price("$99")
            .to_intent("hotel-1", 2);
        nav.navigate("BookingConfirmation", intent).unwrap();

        let written = String::from_utf8(nav.into_inner()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(json["destination"], "BookingConfirmation");
        assert_eq!(json["params"]["priceOverride"], 99.0);
        assert_eq!(json["params"]["dates"]["checkOut"], "2026-09-09");
        assert!(written.ends_with('\n'));
    }
}
