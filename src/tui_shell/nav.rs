/// The three navigable screens. `category/<id>` carries a decimal id;
/// parse failures are soft (the caller surfaces an error and stays put).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Route {
    Home,
    Category(i64),
    Settings,
}

impl Route {
    pub(super) fn parse(s: &str) -> Result<Route, String> {
        let s = s.trim().trim_matches('/');
        match s {
            "" | "home" => Ok(Route::Home),
            "settings" => Ok(Route::Settings),
            _ => {
                let Some(id) = s.strip_prefix("category/") else {
                    return Err(format!("unknown route {:?}", s));
                };
                match id.parse::<i64>() {
                    Ok(id) => Ok(Route::Category(id)),
                    Err(_) => Err(format!("invalid category id {:?}", id)),
                }
            }
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Route::Home => write!(f, "home"),
            Route::Category(id) => write!(f, "category/{}", id),
            Route::Settings => write!(f, "settings"),
        }
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/nav_tests.rs"]
mod tests;
