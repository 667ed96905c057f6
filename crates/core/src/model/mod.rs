mod label;
mod progress;
mod section;
mod snapshot;

pub use label::{Label, LabelError, Level};
pub use progress::{ProgressKey, ProgressKeyError, ProgressMap};
pub use section::Section;
pub use snapshot::SessionSnapshot;
