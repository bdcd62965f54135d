pub mod application;
pub mod command;
pub mod configure;
pub mod group;
pub mod version;
