mod app;
mod app_config;
mod contact_form;
mod content;
mod dom;
mod navbar;
mod runtime;
mod sections;
mod splash_screen;
mod theme;
mod timers;

use app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
