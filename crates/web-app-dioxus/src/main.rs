#![warn(clippy::pedantic)]
#![allow(clippy::too_many_lines)]

use std::sync::{Arc, Mutex};

use dioxus::prelude::*;
use log::error;

use tytan_domain as domain;
use tytan_storage as storage;
use tytan_web_app as web_app;

use component::navbar::Navbar;
use page::{log_workout::LogWorkout, not_found::NotFound};

mod component;
mod page;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
    #[route("/")]
    LogWorkout {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

static DOMAIN_SERVICE: GlobalSignal<
    domain::Service<storage::rest::REST<storage::rest::GlooNetSendRequest>>,
> = Signal::global(|| domain::Service::new(storage::rest::REST::new()));
static WEB_APP_SERVICE: GlobalSignal<web_app::Service<storage::local_storage::LocalStorage>> =
    Signal::global(|| web_app::Service::new(storage::local_storage::LocalStorage));

fn main() {
    init_logging();
    dioxus::launch(App);
}

fn init_logging() {
    let _ = web_app::log::init(Arc::new(Mutex::new(storage::local_storage::LocalStorage)));
}

#[component]
fn App() -> Element {
    std::panic::set_hook(Box::new(|info| {
        error!("{info}");
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("main"))
            .map(|el| {
                el.set_inner_html(&format!("
                    <section class=\"section\">
                        <div class=\"container\">
                            <div class=\"message is-danger\">
                                <div class=\"message-header\">
                                    <p>Something went wrong</p>
                                </div>
                                <div class=\"message-body\">
                                    <div class=\"block\">
                                        An unexpected error occurred and the form cannot be used anymore.
                                    </div>
                                    <div class=\"block\">
                                        <pre>{info}</pre>
                                    </div>
                                    <div class=\"block field is-grouped is-grouped-centered\">
                                        <button class=\"button\" onclick=\"location.reload()\">
                                            <span class=\"icon\">
                                                <i class=\"fa fa-arrow-rotate-right\"></i>
                                            </span>
                                            <span>Reload page</span>
                                        </button>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </section>
                "));
                Some(())
            });
    }));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            class: "container is-max-desktop py-4",
            Router::<Route> {},
        }
    }
}

fn apply_theme(settings: &web_app::Settings) {
    let class = settings.current_theme().class();
    match web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        Some(root) => root.set_class_name(class),
        None => error!("failed to access document to apply theme"),
    }
}
