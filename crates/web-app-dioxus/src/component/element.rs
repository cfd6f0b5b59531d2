use dioxus::prelude::*;
use strum::Display;

#[derive(Display, Clone, Copy, PartialEq)]
pub enum Color {
    #[strum(to_string = "primary")]
    Primary,
    #[strum(to_string = "danger")]
    Danger,
}

#[component]
pub fn Loading() -> Element {
    rsx! {
        div {
            class: "is-size-4 has-text-centered",
            i { class: "fas fa-spinner fa-pulse" }
        }
    }
}

#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div {
            class: "message is-danger mx-2",
            div {
                class: "message-body has-text-dark",
                div {
                    class: "title has-text-danger is-size-4",
                    "{message}"
                }
            }
        }
    }
}

#[component]
pub fn Icon(name: String, is_small: Option<bool>, px: Option<u8>) -> Element {
    rsx! {
        span {
            class: "icon",
            class: if is_small.unwrap_or_default() { "is-small" },
            class: if let Some(px) = px { "px-{px}" },
            i { class: "fas fa-{name}" }
        }
    }
}

#[component]
pub fn Title(title: String, id: Option<String>) -> Element {
    rsx! {
        div {
            class: "block has-text-centered",
            h1 {
                id: if let Some(id) = id { id },
                class: "title is-5",
                "{title}"
            }
        }
    }
}

#[component]
pub fn Dialog(
    children: Element,
    title: Option<Element>,
    close_event: EventHandler<MouseEvent>,
    color: Option<Color>,
) -> Element {
    let color = color.unwrap_or(Color::Primary);
    rsx! {
        div {
            class: "modal is-active",
            div {
                class: "modal-background",
                onclick: close_event
            }
            div {
                class: "modal-content",
                div {
                    class: "message is-{color} mx-2",
                    div {
                        class: "message-body has-text-text-bold has-background-scheme-main",
                        if let Some(title) = title {
                            div {
                                class: "title has-text-{color}",
                                {title}
                            }
                        }
                        {children}
                    }
                }
            }
            button {
                aria_label: "close",
                class: "modal-close",
                onclick: close_event,
            }
        }
    }
}

/// Replaces the browser's blocking `confirm` prompt.
#[component]
pub fn ConfirmationDialog(
    question: String,
    confirm_text: String,
    confirm_event: EventHandler<MouseEvent>,
    cancel_event: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        Dialog {
            title: rsx! { span { "{question}" } },
            close_event: move |evt| cancel_event.call(evt),
            color: Color::Danger,
            div {
                class: "field is-grouped is-grouped-centered",
                div {
                    class: "control",
                    onclick: move |evt| cancel_event.call(evt),
                    button {
                        r#type: "button",
                        class: "button is-light is-soft",
                        "No"
                    }
                }
                div {
                    class: "control",
                    onclick: move |evt| confirm_event.call(evt),
                    button {
                        r#type: "button",
                        class: "button is-danger",
                        "{confirm_text}"
                    }
                }
            }
        }
    }
}
