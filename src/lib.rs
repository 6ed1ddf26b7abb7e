//! # busloop
//!
//! Interactive modeling of a single circular bus route:
//! - Cyclic route structure over an index-linked slot arena
//! - Per-leg distance/time weights, aggregate and pairwise metrics
//! - CSV persistence with permissive row-by-row loading
//! - Numbered-menu shell over any `BufRead`/`Write` pair
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Interaction Shell                         │
//! │                (menu loop, prompts, rendering)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command / Report
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Session                                │
//! │                 (Config + the one Route)                     │
//! └──────┬───────────────┬───────────────────────┬──────────────┘
//!        │               │                       │
//!        ▼               ▼                       ▼
//! ┌─────────────┐ ┌─────────────┐        ┌─────────────┐
//! │    Route    │ │   Metrics   │        │   Persist   │
//! │ (cyclic     │ │ (totals,    │        │ (CSV save/  │
//! │  arena)     │ │  spans)     │        │  load)      │
//! └─────────────┘ └─────────────┘        └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;

pub mod command;
pub mod metrics;
pub mod persist;
pub mod route;
pub mod session;
pub mod shell;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use command::{Command, Placement, Report};
pub use config::Config;
pub use error::{Result, RouteError};
pub use metrics::Totals;
pub use route::{Route, Stop, StopDraft, StopId};
pub use session::Session;
pub use shell::Shell;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of busloop
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
