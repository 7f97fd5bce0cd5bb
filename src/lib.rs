pub mod cli;
pub mod config;
pub mod dialog;
pub mod logging;
pub mod pages;
pub mod ui;
