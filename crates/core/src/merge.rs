use std::collections::HashMap;

use crate::model::{Label, Section};
use crate::parser::SectionMatch;

const SPAN_SEPARATOR: &str = "\n\n";

/// Collapse repeated labels into a single section each.
///
/// Sections keep the position of their label's first occurrence. Contents of
/// repeated labels are joined with a blank line in encounter order; empty
/// spans are skipped and labels that end up with no content are dropped.
#[must_use]
pub fn merge_sections(matches: impl IntoIterator<Item = SectionMatch>) -> Vec<Section> {
    let mut order: Vec<(Label, Vec<String>)> = Vec::new();
    let mut slots: HashMap<Label, usize> = HashMap::new();

    for SectionMatch { label, content } in matches {
        let slot = *slots.entry(label).or_insert_with(|| {
            order.push((label, Vec::new()));
            order.len() - 1
        });
        if !content.trim().is_empty() {
            order[slot].1.push(content);
        }
    }

    order
        .into_iter()
        .filter(|(_, spans)| !spans.is_empty())
        .map(|(label, spans)| Section::new(label, spans.join(SPAN_SEPARATOR)))
        .collect()
}

/// Render sections back into `Label:content` text, one section per line
/// start, in the given order.
#[must_use]
pub fn reconstruct(sections: &[Section]) -> String {
    sections
        .iter()
        .map(|section| format!("{}:{}", section.label(), section.content()))
        .collect::<Vec<_>>()
        .join("\n")
}
