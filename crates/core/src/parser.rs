use regex::{Captures, Regex};

use crate::error::ParserError;
use crate::merge::merge_sections;
use crate::model::{Label, Section};

/// One `Label:` occurrence and the text that follows it, before merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMatch {
    pub label: Label,
    pub content: String,
}

/// Splits free-form roadmap text into labeled spans.
///
/// `**` and `__` emphasis is removed from the whole text first; boundaries
/// are found in what remains. A label opens a span when it starts a line,
/// optionally indented and preceded by a list or heading marker (`-`, `*`,
/// `+`, `1.`, `1)`, `#`), and is followed by a colon. A line that is only a
/// short qualifier plus a label and a colon (`Online Resources:`) is a
/// heading for that label. A boundary directly after another one on the same
/// line (`Topics: Goal: ...`) also counts. A span runs until the next
/// boundary or the end of the text, so a label word in the middle of a
/// sentence stays part of the current span.
#[derive(Debug, Clone)]
pub struct SectionParser {
    vocabulary: Vec<Label>,
    emphasis: Regex,
    boundary: Regex,
    chained: Regex,
}

impl SectionParser {
    /// Build a parser that recognizes exactly `vocabulary`.
    ///
    /// # Errors
    ///
    /// Returns `ParserError::EmptyVocabulary` if no labels are given, or
    /// `ParserError::Pattern` if the boundary pattern cannot be compiled.
    pub fn new(vocabulary: &[Label]) -> Result<Self, ParserError> {
        let mut vocabulary = vocabulary.to_vec();
        vocabulary.sort_unstable();
        vocabulary.dedup();
        if vocabulary.is_empty() {
            return Err(ParserError::EmptyVocabulary);
        }

        // Longest first so a label never loses to one of its own prefixes.
        let mut alternatives: Vec<&str> = vocabulary.iter().map(|label| label.as_str()).collect();
        alternatives.sort_by(|left, right| right.len().cmp(&left.len()).then(left.cmp(right)));
        let alternation = alternatives
            .iter()
            .map(|label| regex::escape(label))
            .collect::<Vec<_>>()
            .join("|");

        let body = format!(
            r"(?:(?:[-*+]|\d+[.)]|#{{1,6}})[ \t]+)?(?:(?P<label>{alternation})[ \t]*:|(?:[A-Za-z][A-Za-z'-]*[ \t]+){{1,3}}(?P<heading>{alternation})[ \t]*:[ \t\r]*$)"
        );
        let boundary = Regex::new(&format!(r"(?m)^[ \t]*{body}"))?;
        let chained = Regex::new(&format!(r"(?m)\A[ \t]*{body}"))?;
        let emphasis = Regex::new(r"\*\*|__")?;

        Ok(Self {
            vocabulary,
            emphasis,
            boundary,
            chained,
        })
    }

    /// Labels this parser recognizes, in vocabulary order.
    #[must_use]
    pub fn vocabulary(&self) -> &[Label] {
        &self.vocabulary
    }

    /// Every labeled span in `text`, left to right, without merging.
    ///
    /// Content is trimmed and free of `**`/`__` emphasis. A label with
    /// nothing after it yields an empty `content`.
    #[must_use]
    pub fn parse(&self, text: &str) -> Vec<SectionMatch> {
        let text = self.emphasis.replace_all(text, "");
        let boundaries = self.boundaries(&text);

        boundaries
            .iter()
            .enumerate()
            .map(|(idx, &(label, _, content_start))| {
                let content_end = boundaries
                    .get(idx + 1)
                    .map_or(text.len(), |&(_, next_start, _)| next_start);
                SectionMatch {
                    label,
                    content: text[content_start..content_end].trim().to_string(),
                }
            })
            .collect()
    }

    fn boundaries(&self, text: &str) -> Vec<(Label, usize, usize)> {
        let mut found = Vec::new();
        for caps in self.boundary.captures_iter(text) {
            let Some(mut current) = boundary_at(&caps, 0) else {
                continue;
            };
            found.push(current);

            // Content never starts with another boundary.
            while let Some(next) = self
                .chained
                .captures(&text[current.2..])
                .and_then(|caps| boundary_at(&caps, current.2))
            {
                found.push(next);
                current = next;
            }
        }
        found
    }

    /// Parse and merge: one section per label, in first-seen order.
    #[must_use]
    pub fn sections(&self, text: &str) -> Vec<Section> {
        merge_sections(self.parse(text))
    }
}

impl Default for SectionParser {
    /// A parser over the full label vocabulary.
    ///
    /// # Panics
    ///
    /// Panics if the built-in vocabulary fails to compile into a pattern.
    fn default() -> Self {
        Self::new(&Label::ALL).expect("built-in label vocabulary should compile")
    }
}

fn boundary_at(caps: &Captures<'_>, offset: usize) -> Option<(Label, usize, usize)> {
    let whole = caps.get(0)?;
    let label = caps
        .name("label")
        .or_else(|| caps.name("heading"))?
        .as_str()
        .parse::<Label>()
        .ok()?;
    Some((label, offset + whole.start(), offset + whole.end()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser(labels: &[Label]) -> SectionParser {
        SectionParser::new(labels).unwrap()
    }

    #[test]
    fn text_without_labels_yields_nothing() {
        let parser = SectionParser::default();
        assert!(parser.parse("Just study a lot and practice daily.").is_empty());
        assert!(parser.sections("").is_empty());
    }

    #[test]
    fn splits_the_reference_roadmap() {
        let parser = parser(&[Label::Goal, Label::Topics, Label::Exercises]);
        let text = "Goal: Learn Rust\nTopics: Ownership\nBorrowing\nExercises: Write a linked list";

        let sections = parser.sections(text);

        assert_eq!(
            sections,
            vec![
                Section::new(Label::Goal, "Learn Rust"),
                Section::new(Label::Topics, "Ownership\nBorrowing"),
                Section::new(Label::Exercises, "Write a linked list"),
            ]
        );
    }

    #[test]
    fn labels_outside_the_vocabulary_stay_in_content() {
        let parser = parser(&[Label::Goal, Label::Topics]);
        let sections = parser.sections("Goal: Ship it\nResources: The Book\nTopics: Traits");

        assert_eq!(sections[0].content(), "Ship it\nResources: The Book");
        assert_eq!(sections[1].content(), "Traits");
    }

    #[test]
    fn label_words_inside_sentences_do_not_split() {
        let parser = SectionParser::default();
        let text = "Topics: Read the Resources: section of the book\nLifetimes";

        let matches = parser.parse(text);

        assert_eq!(matches.len(), 1);
        assert_eq!(
            matches[0].content,
            "Read the Resources: section of the book\nLifetimes"
        );
    }

    #[test]
    fn accepts_markdown_decorated_labels() {
        let parser = SectionParser::default();
        let text = "## Goal: Learn Go\n* **Topics:** Goroutines\n  - __Exercises__: Build a crawler\n1. Milestone: First PR";

        let labels: Vec<Label> = parser.parse(text).iter().map(|m| m.label).collect();

        assert_eq!(
            labels,
            vec![Label::Goal, Label::Topics, Label::Exercises, Label::Milestone]
        );
    }

    #[test]
    fn strips_emphasis_and_surrounding_whitespace() {
        let parser = SectionParser::default();
        let matches = parser.parse("**Goal:**   Master **async** and __await__  \n\n");

        assert_eq!(matches[0].content, "Master async and await");
    }

    #[test]
    fn label_without_content_yields_empty_match() {
        let parser = SectionParser::default();
        let matches = parser.parse("Topics:\nExercises: Fizzbuzz");

        assert_eq!(matches[0].label, Label::Topics);
        assert_eq!(matches[0].content, "");
        assert_eq!(parser.sections("Topics:\nExercises: Fizzbuzz").len(), 1);
    }

    #[test]
    fn multi_word_labels_match_literally() {
        let parser = SectionParser::default();
        let text = "Important Notes: Take breaks\nContribute to Open Source Projects: ripgrep";

        let matches = parser.parse(text);

        assert_eq!(matches[0].label, Label::ImportantNotes);
        assert_eq!(matches[1].label, Label::ContributeToOpenSource);
        assert_eq!(matches[1].content, "ripgrep");
    }

    #[test]
    fn emphasis_cannot_hide_a_boundary() {
        let parser = SectionParser::default();
        let matches = parser.parse("Topics: Ownership\n**Important** Notes: take breaks");

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].content, "Ownership");
        assert_eq!(matches[1].label, Label::ImportantNotes);
        assert_eq!(matches[1].content, "take breaks");
    }

    #[test]
    fn qualified_heading_line_opens_its_label() {
        let parser = SectionParser::default();
        let text = "Topics: Traits\n**Online Resources:**\n- The Book\n- Rustlings";

        let sections = parser.sections(text);

        assert_eq!(
            sections,
            vec![
                Section::new(Label::Topics, "Traits"),
                Section::new(Label::Resources, "- The Book\n- Rustlings"),
            ]
        );
    }

    #[test]
    fn qualified_label_followed_by_text_is_not_a_heading() {
        let parser = SectionParser::default();
        let matches = parser.parse("Topics: Ownership\nRead the Resources: chapter one");

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].content, "Ownership\nRead the Resources: chapter one");
    }

    #[test]
    fn label_right_after_a_label_opens_a_new_span() {
        let parser = SectionParser::default();
        let matches = parser.parse("Topics: Goal: Learn Rust\nBorrowing");

        let pairs: Vec<(Label, &str)> = matches
            .iter()
            .map(|m| (m.label, m.content.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![(Label::Topics, ""), (Label::Goal, "Learn Rust\nBorrowing")]
        );
    }

    #[test]
    fn empty_vocabulary_is_rejected() {
        assert!(matches!(
            SectionParser::new(&[]),
            Err(ParserError::EmptyVocabulary)
        ));
    }
}
