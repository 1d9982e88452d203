//! cypherforge - Cypher query construction
//!
//! This crate provides an AST for Cypher constructs together with a
//! renderer producing query text plus a parameter table:
//! - References and a per-build naming environment
//! - Expressions, functions, predicates and comprehensions
//! - Patterns and statement-level clauses, including subqueries
//! - A build entry point guaranteeing collision-free variable names

pub mod clauses;
pub mod environment;
pub mod errors;
pub mod expression;
pub mod functions;
pub mod params;
pub mod pattern;
pub mod providers;
pub mod references;
pub mod to_cypher;
pub mod utils;

use serde::Serialize;
use serde_json::{Map, Value};

pub use clauses::{concat, Clause};
pub use environment::Environment;
pub use errors::{CypherBuilderError, ErrorKind};
pub use expression::Expression;
pub use params::Parameter;
pub use pattern::Pattern;
pub use references::{NamedVariable, NodeRef, RelationshipRef, Variable, VariableRef};
pub use to_cypher::{RenderContext, ToCypher};

/// The output of one build: final query text and the flattened
/// parameter table. Immutable once produced.
#[derive(Debug, Clone, Serialize)]
pub struct CypherResult {
    pub query: String,
    pub params: Map<String, Value>,
}

/// Render a clause tree into query text and its parameter table.
///
/// One environment and one parameter accumulator exist per call;
/// rendering is a single depth-first pass, so a reference's name is
/// fixed at its first encounter in document order. The prefix is
/// applied to auto-generated parameter keys so an outer caller can
/// concatenate several independent statements without key collisions.
pub fn build(clause: &Clause, parameter_prefix: &str) -> Result<CypherResult, CypherBuilderError> {
    let mut ctx = RenderContext::new(parameter_prefix);
    let query = clause.to_cypher(&mut ctx)?;
    log::debug!("generated Cypher:\n{}", query);
    Ok(CypherResult {
        query,
        params: ctx.params.into_entries(),
    })
}
