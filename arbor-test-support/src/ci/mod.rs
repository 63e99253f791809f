//! Helpers that read CI tuning knobs from the environment.

pub mod property_test_profile;
