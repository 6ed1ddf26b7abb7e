//! Route Module
//!
//! The cyclic route structure and its stops.
//!
//! ## Responsibilities
//! - Own every stop on the route for the route's lifetime
//! - Maintain the single-cycle invariant across insertion and deletion
//! - Assign monotonic identities, never reusing one within a process
//! - Expose head-order traversal for display, metrics, and persistence
//!
//! ## Layout
//! ```text
//! slots:  [ A ] [ B ] [ - ] [ C ]        ( - = vacant, on the free-list)
//!            │     │           │
//! links:     A ──▶ B ──▶ C ──▶ A          (next; prev runs the other way)
//!            ▲
//!          head
//! ```
//! Links are slot indices into the arena, so deletion never leaves a
//! dangling reference: a vacated slot goes on the free-list and is only
//! reachable again once an insertion reuses it with a fresh stop.

mod ring;
mod stop;

pub use ring::{Route, Stops};
pub use stop::{Stop, StopDraft, StopId, MAX_NAME_LEN};
