pub mod catalog;
pub mod model;
pub mod remote;
pub mod tui;

mod tui_shell;
