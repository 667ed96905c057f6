use crate::model::{Label, ProgressKey, ProgressMap, Section};

/// How a section is presented. Only the presentation differs; milestone
/// lines use the same progress keys as any other checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    PlainText,
    Checklist,
    Milestone,
}

impl SectionKind {
    #[must_use]
    pub fn of(label: Label) -> Self {
        if label.is_plain_text() {
            SectionKind::PlainText
        } else if label.is_milestone() {
            SectionKind::Milestone
        } else {
            SectionKind::Checklist
        }
    }
}

/// A single toggleable line of a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub key: ProgressKey,
    pub text: String,
    pub done: bool,
}

/// Completed vs. total checklist lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub done: usize,
    pub total: usize,
}

impl Tally {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.done == self.total
    }
}

impl Section {
    #[must_use]
    pub fn kind(&self) -> SectionKind {
        SectionKind::of(self.label())
    }

    /// One item per non-blank content line, keyed by the line's unfiltered
    /// index.
    #[must_use]
    pub fn checklist(&self, progress: &ProgressMap) -> Vec<ChecklistItem> {
        self.indexed_lines()
            .map(|(line, text)| {
                let key = ProgressKey::new(self.label(), line);
                ChecklistItem {
                    key,
                    text: text.trim().to_string(),
                    done: progress.get(key),
                }
            })
            .collect()
    }

    #[must_use]
    pub fn tally(&self, progress: &ProgressMap) -> Tally {
        self.indexed_lines().fold(Tally::default(), |tally, (line, _)| Tally {
            done: tally.done + usize::from(progress.get(ProgressKey::new(self.label(), line))),
            total: tally.total + 1,
        })
    }
}

/// Sections split for display: milestones go after everything else, and each
/// group keeps first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayPartition<'a> {
    pub regular: Vec<&'a Section>,
    pub milestones: Vec<&'a Section>,
}

impl<'a> DisplayPartition<'a> {
    #[must_use]
    pub fn new(sections: &'a [Section]) -> Self {
        let (milestones, regular): (Vec<&Section>, Vec<&Section>) = sections
            .iter()
            .partition(|section| section.kind() == SectionKind::Milestone);
        Self {
            regular,
            milestones,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Section> + '_ {
        self.regular.iter().chain(self.milestones.iter()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_non_blank_line_becomes_an_item() {
        let section = Section::new(Label::Exercises, "Write a linked list");
        let items = section.checklist(&ProgressMap::new());

        assert_eq!(
            items,
            vec![ChecklistItem {
                key: ProgressKey::new(Label::Exercises, 0),
                text: "Write a linked list".into(),
                done: false,
            }]
        );
    }

    #[test]
    fn blank_lines_keep_their_index() {
        let section = Section::new(Label::Topics, "Ownership\n\n   \nTraits");
        let keys: Vec<usize> = section
            .checklist(&ProgressMap::new())
            .iter()
            .map(|item| item.key.line())
            .collect();

        assert_eq!(keys, vec![0, 3]);
    }

    #[test]
    fn items_reflect_progress() {
        let section = Section::new(Label::Milestone, "Week 1\nWeek 2");
        let mut progress = ProgressMap::new();
        progress.toggle(ProgressKey::new(Label::Milestone, 1));

        let done: Vec<bool> = section.checklist(&progress).iter().map(|i| i.done).collect();

        assert_eq!(done, vec![false, true]);
        assert_eq!(section.tally(&progress), Tally { done: 1, total: 2 });
        assert!(!section.tally(&progress).is_complete());
    }

    #[test]
    fn progress_of_other_labels_is_ignored() {
        let section = Section::new(Label::Books, "TRPL");
        let mut progress = ProgressMap::new();
        progress.set(ProgressKey::new(Label::Topics, 0), true);

        assert_eq!(section.tally(&progress), Tally { done: 0, total: 1 });
    }

    #[test]
    fn kinds_follow_the_label() {
        assert_eq!(Section::new(Label::Goal, "x").kind(), SectionKind::PlainText);
        assert_eq!(Section::new(Label::Milestone, "x").kind(), SectionKind::Milestone);
        assert_eq!(Section::new(Label::Online, "x").kind(), SectionKind::Checklist);
    }

    #[test]
    fn milestones_are_listed_last() {
        let sections = vec![
            Section::new(Label::Milestone, "M1"),
            Section::new(Label::Goal, "G"),
            Section::new(Label::Topics, "T"),
        ];

        let order: Vec<Label> = DisplayPartition::new(&sections)
            .iter()
            .map(Section::label)
            .collect();

        assert_eq!(order, vec![Label::Goal, Label::Topics, Label::Milestone]);
    }
}
