pub mod question_loader;

pub use question_loader::{load_question_config, parse_question_config};
