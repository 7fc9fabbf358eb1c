//! # FocusFrame Architecture
//!
//! FocusFrame is a **UI-agnostic focus session library**. A countdown runs somewhere
//! (a browser, a terminal); when it finishes, the session is recorded here and the
//! running totals are derived from everything recorded so far.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, formats output, owns stdout/stderr     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Boundary `Outcome` (success / message / error)           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, aggregation, no I/O assumptions              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - SessionStore trait                                       │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Reads never fail
//!
//! The session file is treated as best-effort state. A missing or corrupt file
//! loads as an empty collection, and a record whose `duration` is not a whole
//! number counts as zero minutes. Only writes and input validation produce errors.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `SessionRecord`, `RawDuration` and the coercion rule
//! - [`config`]: Configuration stored next to the session file
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
