pub mod config;
pub mod kind;
pub mod model;
pub mod palette;

pub use config::*;
pub use kind::*;
pub use model::*;
pub use palette::*;
