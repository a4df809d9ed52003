//! Sources view app: configuration, logging setup, the effect-executing
//! driver loop and a terminal presentation of the view model.
pub mod config;
pub mod driver;
pub mod input;
pub mod logging;
pub mod render;
