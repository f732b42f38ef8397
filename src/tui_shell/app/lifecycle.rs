use super::*;

impl App {
    pub(super) fn load(start_route: Option<String>) -> Result<Self> {
        let cfg = load_config().context("load config")?;
        let remote = cfg.remote.unwrap_or_else(RemoteConfig::default_local);
        let base_url = remote.base_url.clone();
        let client = CatalogClient::new(remote)?;
        let (tasks, events) = CatalogTasks::new(client);

        let mut app = App {
            store: CatalogStore::new(),
            tasks,
            events,
            route: Route::Home,
            focus: Focus::Sidebar,
            sidebar_selected: 0,
            content_selected: 0,
            modal: None,
            notice: None,
            toggle_in_flight: false,
            base_url,
            quit: false,
        };

        match start_route.as_deref().map(Route::parse) {
            None | Some(Ok(Route::Home)) => app.goto(Route::Home),
            Some(Ok(route)) => app.goto(route),
            Some(Err(err)) => {
                // Soft failure: land on home and say why.
                app.goto(Route::Home);
                app.push_error(err);
            }
        }

        Ok(app)
    }
}
