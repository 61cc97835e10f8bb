//! # Wadm Architecture
//!
//! Wadm is a **UI-agnostic Workspace administration library**. The CLI is a
//! thin client; everything it can do, another front end could do through the
//! same API.
//!
//! Every real tenant mutation happens in one external collaborator: the GAM
//! directory tool. Wadm's job is assembling its invocations, making sense of
//! its comma-separated output, and accounting for what happened.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs + main.rs, binary only)                 │
//! │  - Parses arguments, prints tables/reports/messages         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (display names → primary emails)       │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Argument assembly, output parsing, bulk accounting       │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Tool Layer (gam.rs)                                        │
//! │  - Abstract Gam trait                                       │
//! │  - GamProcess (production), ScriptedGam (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Tabular Pipeline
//!
//! Listing commands produce comma-separated text. The `rowboat` workspace
//! crate owns that pipeline end to end: parse (tolerant of short rows and
//! empty output), render (aligned columns, "no data" notice), and CSV
//! export. Commands return `rowboat::Table`s inside their results; only the
//! CLI decides how they hit the screen.
//!
//! ## Error Policy
//!
//! Per-row failures inside a bulk operation never abort the batch; they are
//! counted and reported ([`bulk`]). Empty or malformed listings degrade to
//! an empty table, not an error. Two things are hard errors: a listing the
//! tool refused to produce, and a CSV export that could not be written.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): unit tests against [`gam::ScriptedGam`],
//!    asserting both the exact tool invocations and the structured results.
//! 2. **API** (`api.rs`): dispatch and name-resolution tests.
//! 3. **CLI** (`tests/`): binary-level tests with a fake tool on disk.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Argument assembly and result accounting per command
//! - [`gam`]: The external directory tool seam
//! - [`bulk`]: Row-by-row bulk processing with per-row diagnostics
//! - [`directory`]: The employee snapshot (name → email resolution)
//! - [`model`]: Core data types (`Employee`, `GroupMembership`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod bulk;
pub mod commands;
pub mod config;
pub mod directory;
pub mod error;
pub mod gam;
pub mod model;
