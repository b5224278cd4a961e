pub mod args;
pub mod commands;
pub mod model;
pub mod utils;
