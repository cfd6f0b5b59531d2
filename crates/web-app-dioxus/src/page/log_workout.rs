use std::rc::Rc;

use dioxus::prelude::*;
use log::error;

use tytan_domain as domain;
use tytan_domain::ProgramService;
use tytan_storage as storage;
use tytan_web_app as web_app;

use crate::{
    DOMAIN_SERVICE,
    component::{
        element::{ConfirmationDialog, Icon, Title},
        form::{InputField, SelectField},
    },
};

#[component]
pub fn LogWorkout() -> Element {
    let mut exercise_form = use_signal(|| {
        let programs = storage::embedded::read_programs().unwrap_or_else(|err| {
            error!("failed to read programs: {err}");
            vec![]
        });
        domain::ExerciseForm::new(domain::ProgramSelection::new(programs))
    });
    use_hook(move || {
        match web_app::unload::BeforeUnloadGuard::install(move || {
            exercise_form
                .try_peek()
                .ok()
                .and_then(|form| form.unsaved_changes().before_unload())
        }) {
            Ok(guard) => Some(Rc::new(guard)),
            Err(err) => {
                error!("failed to install unsaved changes guard: {err}");
                None
            }
        }
    });

    let select_program = move |event: FormEvent| {
        let program = domain::ProgramID::parse(&event.value());
        let Some(load) = exercise_form.write().program.select(program) else {
            return;
        };
        spawn(async move {
            let result = DOMAIN_SERVICE
                .read()
                .get_training_days(load.program)
                .await;
            exercise_form.write().program.apply_days(load.days, result);
        });
        spawn(async move {
            let result = DOMAIN_SERVICE
                .read()
                .get_training_weeks(load.program)
                .await;
            exercise_form
                .write()
                .program
                .apply_weeks(load.weeks, result);
        });
    };

    let form = exercise_form.read().clone();
    let program = &form.program;
    let program_options = program
        .programs()
        .iter()
        .map(|p| domain::DropdownOption {
            value: p.id.to_string(),
            text: p.name.clone(),
        })
        .collect::<Vec<_>>();

    rsx! {
        div {
            id: "buttonContainer",
            class: "block has-text-centered",
            class: if form.is_visible() { "is-hidden" },
            button {
                r#type: "button",
                class: "button is-link",
                onclick: move |_| exercise_form.write().show(),
                Icon { name: "dumbbell" }
                span { "Log workout" }
            }
        }
        form {
            id: "exerciseForm",
            method: "post",
            class: if !form.is_visible() { "is-hidden" },
            oninput: move |_| {
                if !exercise_form.peek().unsaved_changes().has_unsaved_changes() {
                    exercise_form.write().mark_changed();
                }
            },
            section {
                id: "program",
                class: "block",
                Title { title: "Training program" }
                SelectField {
                    label: "Program",
                    name: domain::PROGRAM_FIELD,
                    placeholder: domain::PROGRAM_PLACEHOLDER,
                    options: program_options,
                    selected: program.program().map(|p| p.to_string()),
                    onchange: select_program,
                }
                SelectField {
                    label: "Day",
                    name: domain::SESSION_DAY_FIELD,
                    placeholder: program.days().placeholder(),
                    options: program.days().options().to_vec(),
                    selected: program.days().selected().map(str::to_string),
                    onchange: move |event: FormEvent| {
                        exercise_form.write().program.select_day(&event.value());
                    },
                }
                SelectField {
                    label: "Week",
                    name: domain::WEEK_NUMBER_FIELD,
                    placeholder: program.weeks().placeholder(),
                    options: program.weeks().options().to_vec(),
                    selected: program.weeks().selected().map(str::to_string),
                    onchange: move |event: FormEvent| {
                        exercise_form.write().program.select_week(&event.value());
                    },
                }
            }
            section {
                id: "log",
                class: "block",
                Title { title: "Exercises" }
                div {
                    class: "table-container",
                    table {
                        id: "exerciseTable",
                        class: "table is-fullwidth is-hoverable",
                        thead {
                            tr {
                                th { "Exercise" }
                                th { "Load (kg)" }
                                th { "Sets" }
                                th { "Reps" }
                                th { "RIR" }
                                th {}
                            }
                        }
                        tbody {
                            for (index, row) in form.rows().iter().enumerate() {
                                ExerciseRowView {
                                    key: "{row.id()}",
                                    index,
                                    row: row.clone(),
                                    exercise_form,
                                }
                            }
                        }
                    }
                }
                div {
                    class: "field is-grouped is-grouped-centered",
                    div {
                        class: "control",
                        button {
                            id: "addRow",
                            r#type: "button",
                            class: "button is-link is-light",
                            onclick: move |_| {
                                exercise_form.write().add_row();
                            },
                            Icon { name: "plus" }
                            span { "Add exercise" }
                        }
                    }
                    div {
                        class: "control",
                        button {
                            r#type: "submit",
                            class: "button is-primary",
                            Icon { name: "check" }
                            span { "Submit" }
                        }
                    }
                }
            }
        }

        if form.pending_removal().is_some() {
            ConfirmationDialog {
                question: domain::REMOVE_ROW_QUESTION,
                confirm_text: "Yes, delete exercise",
                confirm_event: move |_| {
                    exercise_form.write().confirm_removal();
                },
                cancel_event: move |_| exercise_form.write().cancel_removal(),
            }
        }
    }
}

#[component]
fn ExerciseRowView(
    index: usize,
    row: domain::ExerciseRow,
    exercise_form: Signal<domain::ExerciseForm>,
) -> Element {
    let id = row.id();
    let reps_name = domain::reps_field_name(index);

    rsx! {
        tr {
            td {
                InputField {
                    name: domain::EXERCISE_NAME_FIELD,
                    placeholder: "Exercise",
                    value: row.exercise_name.clone(),
                    oninput: move |event: FormEvent| {
                        exercise_form.write().set_exercise_name(id, &event.value());
                    },
                }
            }
            td {
                InputField {
                    r#type: "number",
                    inputmode: "decimal",
                    step: "any",
                    name: domain::LOAD_FIELD,
                    placeholder: "Load",
                    value: row.load.clone(),
                    oninput: move |event: FormEvent| {
                        exercise_form.write().set_load(id, &event.value());
                    },
                }
            }
            td {
                InputField {
                    r#type: "number",
                    inputmode: "numeric",
                    min: "0",
                    name: domain::SETS_FIELD,
                    placeholder: "Sets",
                    value: row.sets().to_string(),
                    class: "sets",
                    oninput: move |event: FormEvent| {
                        exercise_form.write().set_sets(id, &event.value());
                    },
                }
            }
            td {
                class: "reps-cell",
                for (set_index, reps) in row.reps().iter().enumerate() {
                    InputField {
                        key: "{set_index}",
                        r#type: "number",
                        inputmode: "numeric",
                        min: "0",
                        name: reps_name.clone(),
                        placeholder: domain::reps_label(set_index + 1),
                        value: reps.clone(),
                        oninput: move |event: FormEvent| {
                            exercise_form.write().set_reps(id, set_index, &event.value());
                        },
                    }
                }
            }
            td {
                InputField {
                    r#type: "number",
                    inputmode: "decimal",
                    step: "any",
                    name: domain::RIR_FIELD,
                    placeholder: "RIR",
                    value: row.rir.clone(),
                    oninput: move |event: FormEvent| {
                        exercise_form.write().set_rir(id, &event.value());
                    },
                }
            }
            td {
                button {
                    r#type: "button",
                    class: "button is-danger is-light removeRow",
                    onclick: move |_| {
                        exercise_form.write().request_removal(id);
                    },
                    Icon { name: "trash" }
                }
            }
        }
    }
}
