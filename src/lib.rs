pub mod animation;
pub mod components;
pub mod config;
pub mod contact;
pub mod pages;
pub mod routes;
pub mod timer;
pub mod toast;

use components::NavBar;
use config::SiteConfig;
use leptos::*;
use leptos_router::*;
use pages::{ContactPage, HomePage, NotFoundPage};
use routes::{CONTACT, HOME};
use wasm_bindgen::prelude::*;

/// Root component with routing
#[component]
fn Root() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| view! {
            <div class="container error-page">
                <div class="text-zone">
                    <h1>"Something went wrong"</h1>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect_view()
                        }
                    </ul>
                    <a href="/" class="flat-button">"RELOAD"</a>
                </div>
            </div>
        }>
            <RootInner/>
        </ErrorBoundary>
    }
}

/// Provides the site configuration and mounts the routes.
#[component]
fn RootInner() -> impl IntoView {
    match SiteConfig::from_build_env() {
        Ok(config) => provide_context(config),
        // The site still renders; only the contact form is affected.
        Err(e) => log::warn!("contact form disabled: {}", e),
    }

    view! {
        <Router>
            <div class="app">
                <NavBar/>
                <main class="page">
                    <Routes>
                        <Route path=HOME.path view=HomePage/>
                        <Route path=CONTACT.path view=ContactPage/>
                        <Route path="/*" view=NotFoundPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Only fails if a logger is already installed.
    let _ = console_log::init_with_level(level);
    mount_to_body(Root);
}
