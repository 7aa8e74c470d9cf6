//! IPTWP PDML signal viewer: crate root, re-exports and module wiring.
//!
//! The crate turns a PDML export of IPTWP traffic into step plots of the
//! process-variable signals carried in the packets. It is split into
//! cohesive modules:
//! - `pdml`: reading and parsing the export file
//! - `extract`: the single-pass signal/timestamp extraction
//! - `selection`: the set of signal names chosen for plotting
//! - `config`: viewer window configuration
//! - `app` / `plot` / `run`: the egui/eframe presentation layer

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod pdml;
pub mod plot;
pub mod run;
pub mod selection;

// Public re-exports for a compact external API
pub use config::ViewerConfig;
pub use error::ViewerError;
pub use extract::{extract, Extraction, SignalSample, SignalSeries};
pub use run::run_viewer;
pub use selection::SelectionSet;
