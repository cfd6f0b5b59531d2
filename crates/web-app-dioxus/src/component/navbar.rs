use dioxus::prelude::*;
use strum::{Display, EnumIter, IntoEnumIterator};

use tytan_domain as domain;
use tytan_web_app as web_app;
use tytan_web_app::SettingsService;

use crate::{
    Route, WEB_APP_SERVICE, apply_theme,
    component::element::{Color, Dialog, ErrorMessage, Icon, Loading},
};

#[derive(Display, EnumIter, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLink {
    #[strum(to_string = "Log workout")]
    LogWorkout,
    #[strum(to_string = "Training program")]
    TrainingProgram,
}

impl NavLink {
    fn href(self) -> &'static str {
        match self {
            NavLink::LogWorkout => "#log",
            NavLink::TrainingProgram => "#program",
        }
    }
}

#[component]
pub fn Navbar() -> Element {
    let mut menu_visible = use_signal(|| false);
    let mut settings_visible = use_signal(|| false);
    let mut navigation = use_signal(domain::Navigation::<NavLink>::default);
    let settings = use_resource(|| async { WEB_APP_SERVICE.read().get_settings().await });

    use_effect(move || {
        if let Some(Ok(settings)) = &*settings.read() {
            apply_theme(settings);
        }
    });

    rsx! {
        nav {
            class: "navbar is-fixed-top is-primary has-shadow has-text-weight-bold",
            div {
                class: "container",
                div {
                    class: "navbar-brand is-flex-grow-1",
                    div { class: "navbar-item is-size-5", "Tytan" }
                    div { class: "mx-auto" }
                    a {
                        aria_expanded: menu_visible(),
                        aria_label: "menu",
                        class: "navbar-burger ml-0",
                        class: if menu_visible() { "is-active" },
                        role: "button",
                        onclick: move |_| { *menu_visible.write() = !menu_visible() },
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                    }
                }
                div {
                    class: "navbar-menu is-flex-grow-0",
                    class: if menu_visible() { "is-active" },
                    div {
                        class: "navbar-end",
                        for link in NavLink::iter() {
                            a {
                                class: "navbar-item nav-link",
                                class: if navigation.read().is_active(&link) { "is-active" },
                                href: link.href(),
                                onclick: move |_| {
                                    navigation.write().activate(link);
                                    *menu_visible.write() = false;
                                },
                                "{link}"
                            }
                        }
                        a {
                            class: "navbar-item",
                            onclick: move |_| {
                                *settings_visible.write() = true;
                                *menu_visible.write() = false;
                            },
                            Icon { name: "gear", px: 5 }
                            "Settings"
                        }
                    }
                }
            }
        }

        if *settings_visible.read() {
            Settings { settings, settings_visible }
        }

        Outlet::<Route> {}
    }
}

#[component]
fn Settings(
    settings: Resource<Result<web_app::Settings, String>>,
    settings_visible: Signal<bool>,
) -> Element {
    match settings.read().clone() {
        Some(Ok(current)) => rsx! {
            Dialog {
                color: Color::Primary,
                title: rsx! { "Settings" },
                close_event: move |_| { *settings_visible.write() = false; },
                p {
                    class: "mb-5",
                    h1 { class: "subtitle", "Theme" }
                    div {
                        class: "field has-addons",
                        for (theme, name, icon) in [
                            (web_app::Theme::Light, "Light", "sun"),
                            (web_app::Theme::Dark, "Dark", "moon"),
                            (web_app::Theme::System, "System", "desktop"),
                        ] {
                            p {
                                class: "control",
                                button {
                                    class: "button",
                                    class: if current.theme == theme { "is-link" },
                                    onclick: move |_| {
                                        let mut settings = settings;
                                        async move {
                                            let result = WEB_APP_SERVICE
                                                .read()
                                                .set_settings(web_app::Settings { theme })
                                                .await;
                                            if result.is_ok() {
                                                settings.restart();
                                            }
                                        }
                                    },
                                    Icon { name: icon, is_small: true }
                                    span { "{name}" }
                                }
                            }
                        }
                    }
                }
            }
        },
        Some(Err(err)) => rsx! {
            ErrorMessage { message: "Failed to get settings: {err}" }
        },
        None => Loading(),
    }
}
