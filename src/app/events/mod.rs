//! LayerIntent- und LayerCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;

pub use command::LayerCommand;
pub use intent::LayerIntent;
