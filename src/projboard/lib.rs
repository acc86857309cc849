//! # Projboard Architecture
//!
//! Projboard is a **UI-agnostic project board library**: a form that creates
//! projects, and two lists (active and finished) that show them and accept
//! projects dragged from one to the other. The terminal session in `main.rs`
//! is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads board commands, prints lists and alerts            │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Composition root: owns the store, the form, the lists    │
//! │  - Normalizes inputs (id prefixes → ids)                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Components (components/) and Commands (commands/)          │
//! │  - Form, lists, items; drag and drop                        │
//! │  - add / status / list operations returning CmdResult       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (state.rs, validation.rs, model.rs)                   │
//! │  - ProjectState: projects + listeners, snapshot broadcasts  │
//! │  - validate(): field constraints                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Reactivity
//!
//! Nothing polls. Every change to the board goes through
//! [`state::ProjectState`], which pushes an immutable [`state::Snapshot`]
//! to each subscribed list. Lists rebuild themselves from the snapshot.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade and composition root
//! - [`commands`]: Board operations
//! - [`components`]: Form, lists and items
//! - [`drag_drop`]: Drag payloads and the drag source/target traits
//! - [`state`]: The project store and its listeners
//! - [`validation`]: Field validation
//! - [`model`]: Core data types (`Project`, `ProjectId`, `ProjectStatus`)
//! - [`config`]: Form rules loaded from `projboard.json`
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod components;
pub mod config;
pub mod drag_drop;
pub mod error;
pub mod model;
pub mod state;
pub mod validation;
