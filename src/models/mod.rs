pub mod attempt;
pub mod item;
pub mod loaders;
pub mod question;
pub mod screen;

pub use attempt::{AttemptPhase, AttemptState, ItemState};
pub use item::HotSpotItem;
pub use loaders::{load_question_config, parse_question_config};
pub use question::{Graphic, QuestionConfig};
pub use screen::{Breakpoints, ScreenSize};
