//! BDD step modules for daily schedule generation scenarios.

pub mod world;

mod given;
mod then;
mod when;
