pub mod hot_spot;
pub mod lifecycle;
pub mod submit_flow;

pub use hot_spot::{Alternate, HotSpot, Mounted};
pub use lifecycle::QuestionLifecycle;
pub use submit_flow::{Correctness, Feedback, SubmitFlow, SubmitOutcome};
