pub mod property_tests;
pub mod config_tests;
