mod train_config;
mod train_model;
mod train_summary;

pub use train_config::*;
pub use train_model::*;
pub use train_summary::*;
