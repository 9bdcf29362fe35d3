mod app_router;
mod detail_page;
mod gallery_page;
mod observers;
mod store;

use app_router::Route;
use detail_page::{DetailApp, DetailProps};
use gallery_page::GalleryApp;

const APP_MOUNT_ID: &str = "app";

fn main() {
    console_error_panic_hook::set_once();
    observers::install();

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        gloo::console::error!("document unavailable, nothing to mount");
        return;
    };
    let Some(root) = document.get_element_by_id(APP_MOUNT_ID) else {
        gloo::console::error!("missing mount element", APP_MOUNT_ID);
        return;
    };

    match app_router::current_route() {
        Route::Gallery => {
            yew::Renderer::<GalleryApp>::with_root(root).render();
        }
        Route::Detail { id } => {
            yew::Renderer::<DetailApp>::with_root_and_props(root, DetailProps { id }).render();
        }
    }
}
