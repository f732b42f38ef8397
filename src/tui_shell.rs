use anyhow::Result;

mod app;
mod input;
mod modal;
mod nav;
mod views;

// Core TUI types available to submodules via `super::...`.
use app::App;
use input::Input;
use modal::Modal;
use nav::Route;

pub(crate) fn run(start_route: Option<String>) -> Result<()> {
    app::run(start_route)
}
