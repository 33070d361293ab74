pub mod browser;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod market;
pub mod mvi;
pub mod search;
pub mod store;
pub mod ui;
