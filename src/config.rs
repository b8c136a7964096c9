//! Client configuration: where the puzzle API lives and how wide a grid to ask for.
//!
//! The API host is baked in at build time from `WORD_SEARCH_API_HOST` and can be
//! overridden per browser through local storage (`ws_api_host`). An empty host
//! means same-origin relative requests.

pub const DEFAULT_GRID_WIDTH: u32 = 15;
pub const API_HOST_KEY: &str = "ws_api_host";
pub const GRID_WIDTH_KEY: &str = "ws_grid_width";

const BUILD_API_HOST: Option<&str> = option_env!("WORD_SEARCH_API_HOST");

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_host: String,
    pub grid_width: u32,
}

impl AppConfig {
    /// Stored values win over the build-time host.
    pub fn from_sources(
        stored_host: Option<&str>,
        build_host: Option<&str>,
        stored_width: Option<&str>,
    ) -> Self {
        let api_host = stored_host
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .or(build_host)
            .map(normalize_host)
            .unwrap_or_default();
        let grid_width = stored_width
            .and_then(|w| w.trim().parse::<u32>().ok())
            .filter(|w| *w > 0)
            .unwrap_or(DEFAULT_GRID_WIDTH);
        Self { api_host, grid_width }
    }

    pub fn load() -> Self {
        let mut host = None;
        let mut width = None;
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                host = store.get_item(API_HOST_KEY).ok().flatten();
                width = store.get_item(GRID_WIDTH_KEY).ok().flatten();
            }
        }
        Self::from_sources(host.as_deref(), BUILD_API_HOST, width.as_deref())
    }
}

fn normalize_host(h: &str) -> String {
    h.trim().trim_end_matches('/').to_string()
}
