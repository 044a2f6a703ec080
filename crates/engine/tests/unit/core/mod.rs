//! Unit tests for the machine core.
