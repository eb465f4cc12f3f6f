pub mod boat;
pub mod cli;
pub mod prelude;
pub mod quantity;
pub mod race;
pub mod tables;
