#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod dom;
mod form_app;
mod form_config;
mod preview_decode;
mod render;

#[cfg(target_arch = "wasm32")]
fn start() {
    if let Err(err) = form_app::run() {
        gloo::console::error!("ticket form failed to start", err.to_string());
        wasm_bindgen::throw_str(&err.to_string());
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        use gloo::events::EventListener;

        console_error_panic_hook::set_once();
        let document = web_sys::window().and_then(|window| window.document());
        match document {
            Some(document) if document.ready_state() == "loading" => {
                EventListener::once(&document, "DOMContentLoaded", |_event| start()).forget();
            }
            _ => start(),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("ticket form only runs in the browser (wasm32 targets)");
    }
}
