#![forbid(unsafe_code)]

pub mod checklist;
pub mod error;
pub mod merge;
pub mod model;
pub mod parser;

pub use checklist::{ChecklistItem, DisplayPartition, SectionKind, Tally};
pub use error::ParserError;
pub use merge::{merge_sections, reconstruct};
pub use parser::{SectionMatch, SectionParser};
