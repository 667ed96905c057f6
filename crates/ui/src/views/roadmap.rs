use dioxus::prelude::*;
use roadmap_core::SectionKind;
use roadmap_core::model::{Level, ProgressKey};
use services::PromptResponder;

use crate::context::{AppContext, SessionHandle};
use crate::vm::{ChecklistItemVm, RoadmapVm, SectionBodyVm, SectionCardVm, map_roadmap};

// Nothing else holds the lock on first render; a contended lock falls back
// to an empty page until the next mutation refreshes it.
fn snapshot(session: &SessionHandle) -> RoadmapVm {
    session
        .try_lock()
        .map(|guard| map_roadmap(&guard))
        .unwrap_or_default()
}

#[component]
pub fn RoadmapView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_signal(|| snapshot(&ctx.session()));

    let session_for_toggle = ctx.session();
    let on_toggle = use_callback(move |key: ProgressKey| {
        let session = session_for_toggle.clone();
        let mut vm = vm;
        spawn(async move {
            let mut guard = session.lock().await;
            guard.toggle(key).await;
            vm.set(map_roadmap(&guard));
        });
    });

    let session_for_goal = ctx.session();
    let session_for_level = ctx.session();
    let session_for_submit = ctx.session();
    let session_for_clear = ctx.session();
    let responder = ctx.responder();

    let current = vm();
    rsx! {
        div { class: "page roadmap-page",
            header { class: "view-header",
                h2 { class: "view-title", "AI Study Roadmap" }
                p { class: "view-subtitle", "Describe what you want to learn and work through the plan as a checklist." }
            }
            div { class: "view-divider" }

            div { class: "roadmap-form",
                input {
                    class: "roadmap-goal-input",
                    r#type: "text",
                    value: "{current.goal}",
                    placeholder: "Enter your learning goal (e.g. Learn Python for Data Science)",
                    autofocus: true,
                    oninput: move |evt: FormEvent| {
                        let session = session_for_goal.clone();
                        let mut vm = vm;
                        let goal = evt.value();
                        spawn(async move {
                            let mut guard = session.lock().await;
                            guard.set_goal(goal).await;
                            vm.set(map_roadmap(&guard));
                        });
                    },
                }
                select {
                    class: "roadmap-level-select",
                    value: "{current.level}",
                    onchange: move |evt: FormEvent| {
                        let Ok(level) = evt.value().parse::<Level>() else {
                            return;
                        };
                        let session = session_for_level.clone();
                        let mut vm = vm;
                        spawn(async move {
                            let mut guard = session.lock().await;
                            guard.set_level(level);
                            vm.set(map_roadmap(&guard));
                        });
                    },
                    for level in Level::ALL {
                        option {
                            value: "{level}",
                            selected: level == current.level,
                            "{level}"
                        }
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: !current.can_submit,
                    onclick: move |_| {
                        let session = session_for_submit.clone();
                        let responder = responder.clone();
                        let mut vm = vm;
                        spawn(async move {
                            let request = {
                                let mut guard = session.lock().await;
                                let request = guard.begin_generate();
                                vm.set(map_roadmap(&guard));
                                request
                            };
                            let Some(request) = request else {
                                return;
                            };

                            let result = responder.generate(&request.goal, request.level).await;

                            let mut guard = session.lock().await;
                            guard.finish_generate(&request, result).await;
                            vm.set(map_roadmap(&guard));
                        });
                    },
                    "{current.submit_label}"
                }
            }

            if current.show_clear {
                button {
                    class: "btn btn-warning roadmap-clear",
                    r#type: "button",
                    onclick: move |_| {
                        let session = session_for_clear.clone();
                        let mut vm = vm;
                        spawn(async move {
                            let mut guard = session.lock().await;
                            guard.clear().await;
                            vm.set(map_roadmap(&guard));
                        });
                    },
                    "Clear Goal"
                }
            }

            if let Some(message) = current.error.as_ref() {
                div { class: "roadmap-error", "{message}" }
            }

            if current.has_roadmap {
                if current.sections.is_empty() {
                    p { class: "roadmap-empty", "The response had no recognizable sections." }
                } else {
                    div { class: "roadmap-sections",
                        for card in current.sections.iter() {
                            SectionCard { key: "{card.title}", card: card.clone(), on_toggle }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SectionCard(card: SectionCardVm, on_toggle: EventHandler<ProgressKey>) -> Element {
    let class = match card.kind {
        SectionKind::Milestone => "roadmap-card roadmap-card--milestone",
        SectionKind::PlainText | SectionKind::Checklist => "roadmap-card",
    };

    rsx! {
        div { class: "{class}",
            div { class: "roadmap-card-header",
                h4 { class: "roadmap-card-title", "{card.title}" }
                if let Some(tally) = card.tally_label.as_ref() {
                    span { class: "roadmap-card-tally", "{tally}" }
                }
            }
            div { class: "roadmap-card-body",
                match &card.body {
                    SectionBodyVm::Text(text) => rsx! {
                        div { class: "roadmap-card-text", "{text}" }
                    },
                    SectionBodyVm::Checklist(items) => rsx! {
                        for item in items.iter() {
                            ChecklistRow { key: "{item.key}", item: item.clone(), on_toggle }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn ChecklistRow(item: ChecklistItemVm, on_toggle: EventHandler<ProgressKey>) -> Element {
    let key = item.key;
    let text_class = if item.done {
        "checklist-text checklist-text--done"
    } else {
        "checklist-text"
    };

    rsx! {
        label { class: "checklist-row",
            input {
                class: "checklist-checkbox",
                r#type: "checkbox",
                checked: item.done,
                onchange: move |_| on_toggle.call(key),
            }
            span { class: "{text_class}", "{item.text}" }
        }
    }
}
