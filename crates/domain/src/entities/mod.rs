//! Domain entities

mod restaurant;

pub use restaurant::Restaurant;
