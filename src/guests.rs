//! Guest and room selection with a bounded stepper

use std::fmt;

use serde::{Deserialize, Serialize};

/// A field of [`GuestSelection`] that the stepper can change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestField {
    Adults,
    Children,
    Rooms,
}

impl GuestField {
    /// Inclusive (min, max) bounds for this field
    pub fn bounds(self) -> (u32, u32) {
        match self {
            GuestField::Adults => (1, 16),
            GuestField::Children => (0, 10),
            GuestField::Rooms => (1, 8),
        }
    }
}

/// Who is travelling and how many rooms they need
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestSelection {
    pub adults: u32,
    pub children: u32,
    pub rooms: u32,
}

impl Default for GuestSelection {
    fn default() -> Self {
        Self {
            adults: 2,
            children: 0,
            rooms: 1,
        }
    }
}

impl GuestSelection {
    /// Build a selection, clamping every field into its bounds
    pub fn new(adults: u32, children: u32, rooms: u32) -> Self {
        let mut selection = Self {
            adults: clamp(GuestField::Adults, adults),
            children: clamp(GuestField::Children, children),
            rooms: clamp(GuestField::Rooms, rooms),
        };
        selection.rooms = selection.rooms.min(selection.adults);
        selection
    }

    pub fn get(&self, field: GuestField) -> u32 {
        match field {
            GuestField::Adults => self.adults,
            GuestField::Children => self.children,
            GuestField::Rooms => self.rooms,
        }
    }

    /// Step a field up by one. Returns false if it was already at its limit.
    pub fn increment(&mut self, field: GuestField) -> bool {
        let current = self.get(field);
        let (_, max) = field.bounds();
        // Every room needs at least one adult
        let max = match field {
            GuestField::Rooms => max.min(self.adults),
            _ => max,
        };
        if current >= max {
            return false;
        }
        self.set(field, current + 1);
        true
    }

    /// Step a field down by one. Returns false if it was already at its limit.
    pub fn decrement(&mut self, field: GuestField) -> bool {
        let current = self.get(field);
        let (min, _) = field.bounds();
        if current <= min {
            return false;
        }
        self.set(field, current - 1);
        if field == GuestField::Adults {
            self.rooms = self.rooms.min(self.adults);
        }
        true
    }

    pub fn total_guests(&self) -> u32 {
        self.adults + self.children
    }

    /// Human-readable summary: "2 adults · 1 child · 1 room"
    pub fn summary(&self) -> String {
        let mut parts = vec![plural(self.adults, "adult", "adults")];
        if self.children > 0 {
            parts.push(plural(self.children, "child", "children"));
        }
        parts.push(plural(self.rooms, "room", "rooms"));
        parts.join(" · ")
    }

    fn set(&mut self, field: GuestField, value: u32) {
        match field {
            GuestField::Adults => self.adults = value,
            GuestField::Children => self.children = value,
            GuestField::Rooms => self.rooms = value,
        }
    }
}

impl fmt::Display for GuestSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

fn clamp(field: GuestField, value: u32) -> u32 {
    let (min, max) = field.bounds();
    value.clamp(min, max)
}

fn plural(n: u32, one: &str, many: &str) -> String {
    format!("{} {}", n, if n == 1 { one } else { many })
}
