//! Transient error line shown above the page body.

mod intent;
mod reducer;
mod state;

pub use intent::BannerIntent;
pub use reducer::BannerReducer;
pub use state::{BannerState, ERROR_DISPLAY};
