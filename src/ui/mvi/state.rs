//! Widget state marker trait.

/// Widget state. `Default` is the empty state used by `std::mem::take`
/// during dispatch; `PartialEq` lets the coordinator detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
