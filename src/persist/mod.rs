//! Persistence Module
//!
//! Saves and loads a route as a row-oriented CSV file.
//!
//! ## Responsibilities
//! - Write the route head-to-tail, one row per stop, header row first
//! - Read a file back permissively: bad rows are skipped, never fatal
//! - Report what a load actually did ([`LoadReport`])
//!
//! ## File Format
//! ```text
//! id,name,passengers,dist_to_next,time_to_next
//! 1,Central Station,12,2.500000,6.000000
//! 2,Market Road,5,1.200000,3.000000
//! ```
//! Floats are written with fixed 6-decimal precision. The id column is
//! advisory: it is written for the reader's benefit and ignored entirely on
//! load, where every stop gets a fresh identity.
//!
//! ## Load is destructive
//! Loading clears the current route as soon as the file opens, *before* any
//! row has been validated. A file that turns out to be headerless or full of
//! bad rows has still discarded the previous route. Only a failure to open
//! the file leaves the route untouched.

mod reader;
mod record;
mod writer;

pub use reader::{load_route, LoadReport};
pub use record::{StopRecord, FIELD_COUNT, HEADER};
pub use writer::save_route;
