mod intent;
mod reducer;
mod state;

pub use intent::NavigatorIntent;
pub use reducer::NavigatorReducer;
pub use state::NavigatorState;
