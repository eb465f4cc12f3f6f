pub mod competition;
pub mod controller;
pub mod event;
pub mod series;
