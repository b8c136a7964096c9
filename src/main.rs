mod api;
mod components;
mod config;
mod coords;
mod error;
mod model;
mod overlay;
mod state;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
