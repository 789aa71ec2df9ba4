//! TUI Chase (workspace facade crate).
//!
//! This package exposes `tui_chase::{core,input,session,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use tui_chase_core as core;
pub use tui_chase_input as input;
pub use tui_chase_session as session;
pub use tui_chase_term as term;
pub use tui_chase_types as types;
