pub mod cli;
pub mod logging;
pub mod runner;
pub mod settings;
pub mod values;
