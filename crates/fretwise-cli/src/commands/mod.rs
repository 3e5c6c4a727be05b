mod config;
mod diagram;
mod play;

pub use config::show_config;
pub use diagram::run_diagram;
pub use play::run_play;
