use anyhow::Result;

/// Run the interactive client, optionally starting on a route like
/// `category/3` or `settings`.
pub fn run(start_route: Option<String>) -> Result<()> {
    crate::tui_shell::run(start_route)
}
