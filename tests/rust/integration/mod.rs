//! Integration tests - full statements composed from several clauses,
//! subqueries and collaborator seams, rendered through `build`.

mod batch_create_tests;
mod merge_scenario_tests;
mod provider_integration_tests;
mod subquery_scenario_tests;
