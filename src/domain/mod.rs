pub mod collector;
pub mod monitor;
pub mod plugin;
pub mod status;
