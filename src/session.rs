//! Session Module
//!
//! The single owned structure holding a route and its configuration.
//!
//! ## Responsibilities
//! - Own the one route (and thus the identity counter) for the process
//! - Route [`Command`]s to the right core operation
//! - Provide the built-in sample route
//! - Clear the route on close
//!
//! Everything is synchronous and single-threaded: one command runs to
//! completion before the next is looked at.

use std::path::Path;

use crate::command::{Command, Placement, Report};
use crate::config::Config;
use crate::error::{Result, RouteError};
use crate::metrics::{self, Totals};
use crate::persist::{self, LoadReport};
use crate::route::{Route, Stop, StopDraft, StopId};

/// The stops of the built-in sample route, in insertion order
const SAMPLE_STOPS: [(&str, u32, f64, f64); 5] = [
    ("Central Station", 12, 2.5, 6.0),
    ("Market Road", 5, 1.2, 3.0),
    ("Library", 3, 0.9, 2.0),
    ("College", 8, 1.8, 4.0),
    ("Park", 2, 2.0, 5.0),
];

/// An interactive modeling session over one route
pub struct Session {
    /// Session configuration
    config: Config,

    /// The route, exclusively owned for the session's lifetime
    route: Route,
}

impl Session {
    /// Start a session with the given config.
    ///
    /// Populates the sample route first when the config asks for it.
    pub fn new(config: Config) -> Self {
        let mut session = Self {
            config,
            route: Route::new(),
        };
        if session.config.sample_on_start {
            session.populate_sample();
        }
        session
    }

    /// Execute a command
    ///
    /// Routes commands to the direct operation methods below.
    pub fn execute(&mut self, command: Command) -> Result<Report> {
        match command {
            Command::View => Ok(Report::Route(self.snapshot())),
            Command::Search { name } => {
                let stop = self.search(&name)?;
                Ok(Report::Stop(stop))
            }
            Command::InsertEnd { draft } => {
                let stop = self.insert_end(draft);
                Ok(Report::Inserted {
                    stop,
                    placement: Placement::End,
                })
            }
            Command::InsertAfter { after, draft } => {
                let (stop, fell_back) = self.insert_after(&after, draft);
                Ok(Report::Inserted {
                    stop,
                    placement: if fell_back {
                        Placement::EndFallback
                    } else {
                        Placement::AfterStop
                    },
                })
            }
            Command::InsertAt { draft, position } => {
                let stop = self.insert_at(draft, position);
                Ok(Report::Inserted {
                    stop,
                    placement: Placement::Position(position),
                })
            }
            Command::Delete { name } => Ok(Report::Deleted(self.delete(&name))),
            Command::Passengers { name } => {
                let stop = self.search(&name)?;
                Ok(Report::Passengers {
                    name: stop.name,
                    count: stop.passengers,
                })
            }
            Command::Totals => Ok(Report::Totals(self.totals())),
            Command::Span { from, to } => {
                let totals = self.span(&from, &to)?;
                Ok(Report::Span { from, to, totals })
            }
            Command::Save { path } => {
                let stops = self.route.len();
                self.save(&path)?;
                Ok(Report::Saved { stops, path })
            }
            Command::Load { path } => {
                let report = self.load(&path)?;
                Ok(Report::Loaded { report, path })
            }
            Command::PopulateSample => Ok(Report::Sample(self.populate_sample())),
        }
    }

    // =========================================================================
    // Direct Operations
    // =========================================================================

    /// Owned snapshot of every stop in traversal order
    pub fn snapshot(&self) -> Vec<Stop> {
        self.route.iter().cloned().collect()
    }

    /// Resolve a name to a stop snapshot
    pub fn search(&self, name: &str) -> Result<Stop> {
        self.route
            .find_by_name(name)
            .cloned()
            .ok_or_else(|| RouteError::StopNotFound(name.to_string()))
    }

    /// Append a stop after the tail
    pub fn insert_end(&mut self, draft: StopDraft) -> Stop {
        let id = self.route.insert_end(draft);
        self.cloned(id)
    }

    /// Splice a stop after the first stop named `after`, falling back to
    /// the end when no such stop exists. The flag reports the fallback.
    pub fn insert_after(&mut self, after: &str, draft: StopDraft) -> (Stop, bool) {
        let target = self.route.find_by_name(after).map(|stop| stop.id);
        let (id, fell_back) = self.route.insert_after(target, draft);
        tracing::debug!(id = %id, after, fell_back, "stop inserted");
        (self.cloned(id), fell_back)
    }

    /// Insert a stop at a 1-based position, clamped into range
    pub fn insert_at(&mut self, draft: StopDraft, position: usize) -> Stop {
        let id = self.route.insert_at(draft, position);
        tracing::debug!(id = %id, position, "stop inserted");
        self.cloned(id)
    }

    /// Remove the first stop with the given name; false when nothing matched
    pub fn delete(&mut self, name: &str) -> bool {
        let deleted = self.route.delete_by_name(name);
        tracing::debug!(name, deleted, "delete requested");
        deleted
    }

    /// Whole-route totals
    pub fn totals(&self) -> Totals {
        metrics::route_totals(&self.route)
    }

    /// Forward span between two named stops
    pub fn span(&self, from: &str, to: &str) -> Result<Totals> {
        metrics::span_between(&self.route, from, to)
    }

    /// Save the route to `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        persist::save_route(&self.route, path)
    }

    /// Load the route from `path`, discarding current contents (see
    /// [`persist::load_route`] for the destructive-clear semantics)
    pub fn load(&mut self, path: &Path) -> Result<LoadReport> {
        persist::load_route(&mut self.route, path)
    }

    /// Replace the route with the built-in sample.
    ///
    /// The one operation that restarts the identity counter: the sample
    /// always comes up with ids 1 through 5. Returns the stop count.
    pub fn populate_sample(&mut self) -> usize {
        self.route.reset();
        for (name, passengers, dist, time) in SAMPLE_STOPS {
            self.route
                .insert_end(StopDraft::new(name, passengers, dist, time));
        }
        tracing::info!(stops = self.route.len(), "sample route populated");
        self.route.len()
    }

    /// End the session, clearing the route first
    pub fn close(mut self) {
        self.route.clear();
    }

    // =========================================================================
    // Accessors (for testing and the shell)
    // =========================================================================

    /// The underlying route
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// The session configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn cloned(&self, id: StopId) -> Stop {
        self.route
            .find_by_id(id)
            .cloned()
            .expect("freshly inserted stop")
    }
}
