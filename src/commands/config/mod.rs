//! `admit config` commands - the configuration modal from a terminal

pub mod edit;
mod render;
pub mod show;
