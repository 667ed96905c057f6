use roadmap_core::model::{Level, ProgressKey, Section};
use roadmap_core::{DisplayPartition, SectionKind};
use services::RoadmapSession;

/// UI-ready checklist line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChecklistItemVm {
    pub key: ProgressKey,
    pub text: String,
    pub done: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SectionBodyVm {
    Text(String),
    Checklist(Vec<ChecklistItemVm>),
}

/// One card on the roadmap page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionCardVm {
    pub title: String,
    pub kind: SectionKind,
    pub body: SectionBodyVm,
    pub tally_label: Option<String>,
}

/// Everything the roadmap page renders, derived from the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoadmapVm {
    pub goal: String,
    pub level: Level,
    pub loading: bool,
    pub submit_label: &'static str,
    pub can_submit: bool,
    pub show_clear: bool,
    pub error: Option<String>,
    pub has_roadmap: bool,
    pub sections: Vec<SectionCardVm>,
}

impl Default for RoadmapVm {
    fn default() -> Self {
        Self {
            goal: String::new(),
            level: Level::default(),
            loading: false,
            submit_label: "Generate",
            can_submit: false,
            show_clear: false,
            error: None,
            has_roadmap: false,
            sections: Vec::new(),
        }
    }
}

#[must_use]
pub fn map_roadmap(session: &RoadmapSession) -> RoadmapVm {
    let sections = session.sections();
    let cards = DisplayPartition::new(&sections)
        .iter()
        .map(|section| map_section_card(section, session))
        .collect();

    let loading = session.is_loading();
    RoadmapVm {
        goal: session.goal().to_string(),
        level: session.level(),
        loading,
        submit_label: if loading { "Generating..." } else { "Generate" },
        can_submit: !loading && !session.goal().trim().is_empty(),
        show_clear: !session.goal().is_empty(),
        error: session.error().map(ToString::to_string),
        has_roadmap: !session.roadmap().is_empty(),
        sections: cards,
    }
}

fn map_section_card(section: &Section, session: &RoadmapSession) -> SectionCardVm {
    let progress = session.progress();
    let kind = section.kind();
    let (body, tally_label) = match kind {
        SectionKind::PlainText => (SectionBodyVm::Text(section.content().to_string()), None),
        SectionKind::Checklist | SectionKind::Milestone => {
            let items = section
                .checklist(progress)
                .into_iter()
                .map(|item| ChecklistItemVm {
                    key: item.key,
                    text: item.text,
                    done: item.done,
                })
                .collect();
            let tally = section.tally(progress);
            (
                SectionBodyVm::Checklist(items),
                Some(format!("{}/{} done", tally.done, tally.total)),
            )
        }
    };

    SectionCardVm {
        title: section.label().to_string(),
        kind,
        body,
        tally_label,
    }
}
