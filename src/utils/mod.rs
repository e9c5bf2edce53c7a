pub mod environment;
pub mod logging;
pub mod paths;

pub use environment::default_history_path;
pub use logging::init_logging;
pub use paths::{expand_tilde, format_path_with_tilde, home_dir};
