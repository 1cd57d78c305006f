pub mod factory;
pub mod job;
pub mod roster;
pub mod shift;
pub mod utils;
pub mod volunteer;
