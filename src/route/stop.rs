//! Stop definitions
//!
//! The value object stored at each position of the route: identity, display
//! name, waiting passengers, and the directed edge weights of the leg leaving
//! the stop toward its successor.

use std::fmt;

/// Maximum stored length of a stop name, in bytes.
///
/// Longer names are truncated on a character boundary at construction;
/// truncation is silent and construction never fails.
pub const MAX_NAME_LEN: usize = 63;

/// Identity of a stop.
///
/// Assigned monotonically by the route when a stop is inserted and never
/// reused for the lifetime of the process (only a full [`Route::reset`]
/// restarts the counter). Distinct from the stop's storage position: slot
/// indices are recycled after deletions, identities are not.
///
/// [`Route::reset`]: crate::route::Route::reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(u32);

impl StopId {
    pub(crate) fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw numeric value, as written to route files and shown in listings
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything needed to create a stop, except its identity.
///
/// The route assigns the identity at insertion time. Construction is total:
/// the name is truncated to [`MAX_NAME_LEN`] bytes and negative (or NaN) edge
/// weights clamp to 0.0.
#[derive(Debug, Clone, PartialEq)]
pub struct StopDraft {
    pub name: String,
    pub passengers: u32,
    pub dist_to_next: f64,
    pub time_to_next: f64,
}

impl StopDraft {
    pub fn new(
        name: impl Into<String>,
        passengers: u32,
        dist_to_next: f64,
        time_to_next: f64,
    ) -> Self {
        Self {
            name: truncate_name(name.into()),
            passengers,
            dist_to_next: clamp_weight(dist_to_next),
            time_to_next: clamp_weight(time_to_next),
        }
    }
}

/// A stop on the route
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    /// Stable identity, unique for the process lifetime
    pub id: StopId,

    /// Display name; bounded length, not required unique
    pub name: String,

    /// Passengers currently waiting at this stop
    pub passengers: u32,

    /// Kilometers of the leg from this stop to its successor
    pub dist_to_next: f64,

    /// Minutes of the leg from this stop to its successor
    pub time_to_next: f64,
}

impl Stop {
    pub(crate) fn from_draft(id: StopId, draft: StopDraft) -> Self {
        Self {
            id,
            name: draft.name,
            passengers: draft.passengers,
            dist_to_next: draft.dist_to_next,
            time_to_next: draft.time_to_next,
        }
    }

    /// True when `name` matches this stop's name, ASCII case-insensitively
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID:{}  Name:\"{}\"  Passengers:{}  dist_to_next:{:.2} km  time_to_next:{:.2} min",
            self.id, self.name, self.passengers, self.dist_to_next, self.time_to_next
        )
    }
}

fn truncate_name(mut name: String) -> String {
    if name.len() > MAX_NAME_LEN {
        let mut end = MAX_NAME_LEN;
        while !name.is_char_boundary(end) {
            end -= 1;
        }
        name.truncate(end);
    }
    name
}

fn clamp_weight(weight: f64) -> f64 {
    // NaN also lands on 0.0 here
    weight.max(0.0)
}
