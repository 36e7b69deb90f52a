//! Generation pipeline unit tests.

mod support;

mod generation_tests;
mod persistence_tests;
