pub mod filters;
pub mod messages;
pub mod prompt;
