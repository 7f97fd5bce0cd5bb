//! Page-based configuration dialog.
//!
//! [`ConfigDialog`] owns an ordered set of [`ConfigPage`]s, keeps the
//! navigator selection and the visible page in sync, and runs the
//! validate-then-commit sequence when the user confirms.

mod coordinator;
mod page;
mod selector;

pub use coordinator::{ConfigDialog, DialogOutcome};
pub use page::{ConfigPage, PageError};
pub use selector::Selector;
