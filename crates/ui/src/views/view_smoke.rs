use std::sync::Arc;

use dioxus::prelude::*;
use roadmap_core::SectionParser;
use roadmap_core::model::Level;
use services::{PromptResponder, ResponderError, RoadmapSession, SessionPersistence};
use storage::repository::{InMemoryRepository, KeyValueStore};
use tokio::sync::Mutex;

use crate::context::{SessionHandle, UiApp, build_app_context};
use crate::views::RoadmapView;

const ROADMAP: &str = "Goal: Learn Rust\nMilestone: Publish a crate\nTopics: Ownership\nBorrowing";

struct SilentResponder;

#[async_trait::async_trait]
impl PromptResponder for SilentResponder {
    async fn generate(&self, _goal: &str, _level: Level) -> Result<String, ResponderError> {
        Err(ResponderError::Disabled)
    }
}

struct TestApp {
    session: SessionHandle,
}

impl UiApp for TestApp {
    fn session(&self) -> SessionHandle {
        Arc::clone(&self.session)
    }

    fn responder(&self) -> Arc<dyn PromptResponder> {
        Arc::new(SilentResponder)
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn Harness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { RoadmapView {} }
}

async fn render_with(entries: &[(&str, &str)]) -> String {
    let repo = InMemoryRepository::new();
    for (key, value) in entries {
        repo.save(key, value).await.expect("seed store");
    }
    let persistence = SessionPersistence::new(Arc::new(repo));
    let session = RoadmapSession::restore(persistence, SectionParser::default()).await;
    let app = Arc::new(TestApp {
        session: Arc::new(Mutex::new(session)),
    });

    let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { app });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_view_renders_sections_from_restored_session() {
    let html = render_with(&[("eduaid_goal", "learn rust"), ("eduaid_roadmap", ROADMAP)]).await;

    assert!(html.contains("Learn Rust"), "missing goal text in {html}");
    assert!(html.contains("Ownership"), "missing topic in {html}");
    assert!(html.contains("roadmap-card--milestone"), "missing milestone card in {html}");
    assert!(html.contains("Clear Goal"), "missing clear button in {html}");
    assert!(html.contains("0/2 done"), "missing tally in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_view_strikes_through_completed_lines() {
    let html = render_with(&[
        ("eduaid_goal", "learn rust"),
        ("eduaid_roadmap", ROADMAP),
        ("eduaid_progress", r#"{"Topics-1":true}"#),
    ])
    .await;

    assert!(html.contains("checklist-text--done"), "missing done class in {html}");
    assert!(html.contains("1/2 done"), "missing tally in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_view_empty_state_has_only_the_form() {
    let html = render_with(&[]).await;

    assert!(html.contains("Generate"), "missing submit button in {html}");
    assert!(!html.contains("Clear Goal"), "unexpected clear button in {html}");
    assert!(!html.contains("roadmap-card"), "unexpected section card in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_view_reports_unstructured_replies() {
    let html = render_with(&[
        ("eduaid_goal", "learn rust"),
        ("eduaid_roadmap", "Practice every day."),
    ])
    .await;

    assert!(
        html.contains("no recognizable sections"),
        "missing empty notice in {html}"
    );
}
