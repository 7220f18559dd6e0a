//! # Taskz Architecture
//!
//! Taskz is a small interactive task tracker: a read-line loop over an
//! ordered task list that is persisted to a plain text file after every
//! command. The crate is split so that everything below the binary is
//! testable without a terminal or a filesystem.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Reads stdin lines, prints replies, clears the screen     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session Layer (session.rs)                                 │
//! │  - One entry point per input line:                          │
//! │    parse → validate → dispatch → persist → structured reply │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic per command                          │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract TaskStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Indices
//!
//! Commands address tasks by 1-based position in the current list. An
//! index is a position, not an identity: deleting task 2 makes the old
//! task 3 the new task 2. [`tasks::TaskList::check_index`] is the single
//! place user-supplied indices are range-checked, and it runs before
//! every mutation.
//!
//! ## Persistence
//!
//! The task file is rewritten from memory after every input line —
//! successful or not — so it always mirrors the last committed state.
//! The format is one task per line (see [`store::fs::FileStore`]); lines
//! the loader cannot understand are skipped and reported, never fatal.
//!
//! ## Module Overview
//!
//! - [`session`]: per-line engine driving the loop
//! - [`commands`]: business logic for each command
//! - [`parse`]: raw line → typed [`parse::Command`]
//! - [`tasks`]: the ordered task list and its index invariant
//! - [`model`]: task entities (todo, deadline, event)
//! - [`store`]: storage abstraction and implementations
//! - [`config`]: configuration management
//! - [`error`]: error types

pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod parse;
pub mod session;
pub mod store;
pub mod tasks;
