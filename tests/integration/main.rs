//! Integration tests for malpip-assistant

mod analysis_tests;
mod matching_tests;
mod store_tests;
