//! Model-View-Intent primitives shared by the dialog's widgets.
//!
//! The navigator list and the error banner keep their state as plain values
//! and only change it through a reducer:
//!
//! ```text
//! key / tick ──→ Intent ──→ Reducer ──→ State ──→ render
//! ```
//!
//! Side effects (forwarding focus hints to pages, committing) stay in the
//! dialog coordinator, which compares states before and after a dispatch.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
