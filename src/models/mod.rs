pub mod city;
pub mod filter;
pub mod trip;

pub use city::City;
pub use filter::Filter;
pub use trip::{Trip, TripTable};
