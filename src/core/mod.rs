pub mod loader;
pub mod pager;
pub mod reports;
pub mod session;
pub mod stats;
