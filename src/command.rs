//! Command definitions
//!
//! The session's operation vocabulary: what the shell asks for and what it
//! gets back. Reports carry owned `Stop` clones — transient snapshots, not
//! handles into the route.

use std::path::PathBuf;

use crate::metrics::Totals;
use crate::persist::LoadReport;
use crate::route::{Stop, StopDraft};

/// One operation requested of a session
#[derive(Debug, Clone)]
pub enum Command {
    /// List every stop in traversal order
    View,

    /// Find a stop by name (case-insensitive)
    Search { name: String },

    /// Append a stop after the tail
    InsertEnd { draft: StopDraft },

    /// Splice a stop after the first stop with the given name;
    /// falls back to the end when no such stop exists
    InsertAfter { after: String, draft: StopDraft },

    /// Insert a stop at a 1-based position (clamped into range)
    InsertAt { draft: StopDraft, position: usize },

    /// Remove the first stop with the given name
    Delete { name: String },

    /// Report the waiting passenger count at a named stop
    Passengers { name: String },

    /// Total distance and time over the whole cycle
    Totals,

    /// Forward distance and time from one named stop to another
    Span { from: String, to: String },

    /// Save the route to a file
    Save { path: PathBuf },

    /// Load the route from a file, discarding current contents
    Load { path: PathBuf },

    /// Replace the route with the built-in sample, identities restarted
    PopulateSample,
}

/// Where an insertion actually placed the new stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Appended after the tail
    End,

    /// Spliced after the requested stop
    AfterStop,

    /// The requested stop was not found; appended after the tail instead
    EndFallback,

    /// Inserted at (or clamped near) the requested position
    Position(usize),
}

/// The successful result of executing a [`Command`]
#[derive(Debug, Clone)]
pub enum Report {
    /// Snapshot of every stop in traversal order
    Route(Vec<Stop>),

    /// The stop a search resolved to
    Stop(Stop),

    /// A stop was inserted
    Inserted { stop: Stop, placement: Placement },

    /// Whether a deletion occurred
    Deleted(bool),

    /// Waiting passengers at the named stop
    Passengers { name: String, count: u32 },

    /// Whole-route totals
    Totals(Totals),

    /// Forward span between two stops
    Span { from: String, to: String, totals: Totals },

    /// Stops written to the file
    Saved { stops: usize, path: PathBuf },

    /// What the load did
    Loaded { report: LoadReport, path: PathBuf },

    /// Sample stops now on the route
    Sample(usize),
}
