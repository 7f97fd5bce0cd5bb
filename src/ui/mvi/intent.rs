//! Intent marker trait.

/// Something that happened to a widget: a key press, a timer tick, or a
/// programmatic navigation request.
pub trait Intent: Send + 'static {}
