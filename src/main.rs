use std::rc::Rc;

use log::info;
use yew::prelude::*;

mod config;
mod content;
mod dom;
mod motion;
mod components {
    pub mod contact;
    pub mod hero;
    pub mod nav;
    pub mod reveal;
    pub mod services;
    pub mod stats;
    pub mod toast;
}
mod pages {
    pub mod landing;
}

use components::nav::Nav;
use components::toast::{ToastAction, ToastList, ToastStack};
use config::PageConfig;
use content::{BRAND, NAV_LINKS, SECTION_IDS};
use pages::landing::Landing;

/// Root of the page. Owns the config and the toast list for the lifetime of
/// the page session.
#[function_component]
fn App() -> Html {
    let config = use_memo(|_| PageConfig::load(), ());
    let toasts = use_reducer(ToastList::default);

    let show_toast = {
        let toasts = toasts.dispatcher();
        Callback::from(move |message: String| toasts.dispatch(ToastAction::Push(message)))
    };

    let dismiss_toast = {
        let toasts = toasts.dispatcher();
        Callback::from(move |id: usize| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<Rc<PageConfig>> context={config}>
            <Nav brand={BRAND} links={NAV_LINKS} sections={SECTION_IDS} />
            <Landing on_toast={show_toast} />
            <ToastStack toasts={toasts.entries.clone()} on_dismiss={dismiss_toast} />
        </ContextProvider<Rc<PageConfig>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let _ = console_log::init_with_level(config::log_level());

    info!("Starting {}", BRAND);
    yew::Renderer::<App>::new().render();
}
