use dioxus::prelude::*;

use tytan_domain as domain;

#[component]
pub fn InputField(
    label: Option<String>,
    r#type: Option<String>,
    inputmode: Option<String>,
    name: String,
    placeholder: String,
    min: Option<String>,
    step: Option<String>,
    value: String,
    class: Option<String>,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "field",
            if let Some(label) = label { label { class: "label", "{label}" } }
            div {
                class: "control",
                input {
                    class: "input",
                    class: if let Some(class) = &class { "{class}" },
                    r#type: if let Some(r#type) = r#type { r#type } else { "text" },
                    inputmode: if let Some(inputmode) = inputmode { inputmode },
                    min: if let Some(min) = min { min },
                    step: if let Some(step) = step { step },
                    name,
                    placeholder,
                    required: true,
                    value: "{value}",
                    oninput: move |evt| oninput.call(evt),
                }
            }
        }
    }
}

/// Select with a disabled placeholder option, which stays selected until an option is chosen.
#[component]
pub fn SelectField(
    label: String,
    name: String,
    placeholder: String,
    options: Vec<domain::DropdownOption>,
    selected: Option<String>,
    onchange: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "field",
            label { class: "label", "{label}" }
            div {
                class: "control",
                div {
                    class: "select is-fullwidth",
                    select {
                        name,
                        required: true,
                        onchange,
                        option {
                            value: "",
                            disabled: true,
                            selected: selected.is_none(),
                            "{placeholder}"
                        }
                        for item in options {
                            option {
                                selected: selected.as_deref() == Some(item.value.as_str()),
                                value: "{item.value}",
                                "{item.text}"
                            }
                        }
                    }
                }
            }
        }
    }
}
