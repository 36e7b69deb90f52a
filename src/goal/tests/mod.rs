//! Unit tests for the goal context.
