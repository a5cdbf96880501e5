pub mod grading;
pub mod review;
pub mod selection;
pub mod substitution;

pub use grading::{grade, score, GradeReport};
pub use review::{item_displays, Disclosure, ItemDisplay};
pub use selection::{SelectionChange, SelectionController};
pub use substitution::{needs_substitution, prepare_alternate_config};
