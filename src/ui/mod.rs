//! Terminal front end for the configuration dialog.

pub mod app;
pub mod banner;
pub mod events;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod navigator;
pub mod render;
pub mod runtime;
pub mod terminal;
pub mod theme;

pub use runtime::run;
