//! # Core Application Logic
//!
//! This module contains modup's state machine.
//! It knows nothing about any specific UI technology, and it never runs
//! a process itself.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (App)          │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Effect / Task        │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Effect::Spawn(Task)
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │ ── runs tasks against ─▶ │   source   │
//!     │  Adapter   │ ◀── Action::Loaded ───── │ (go tool)  │
//!     │ (ratatui)  │     Action::Updated      │            │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all session state in one place
//! - [`action`]: `Action`, `Effect`, `Task` and the `update()` reducer
//! - [`modules`]: `Module` records and the cursor-carrying `ModuleList`
//! - [`viewport`]: The scroll window over the list
//! - [`spinner`]: Busy indicator frames
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod modules;
pub mod spinner;
pub mod state;
pub mod viewport;
