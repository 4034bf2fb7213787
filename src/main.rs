mod api;
mod app;
mod components;
mod logging;
mod utils;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    leptos::mount::mount_to_body(App);
}
