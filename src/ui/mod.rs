//! Terminal rendering surface for the coin list.

pub mod app;
pub mod events;
pub mod footer;
pub mod input;
pub mod layout;
pub mod render;
pub mod row;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
