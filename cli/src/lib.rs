pub mod application;
pub mod configure;
pub mod context;
pub mod errors;
pub mod espercommand;
pub mod formatters;
pub mod group;
pub mod helpers;
pub mod validators;
pub mod version;
