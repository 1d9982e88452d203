//! Unit tests for the query-builder public API: naming, parameter
//! accumulation and render determinism.

mod environment_naming_tests;
mod parameter_table_tests;
mod render_determinism_tests;
