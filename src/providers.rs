//! Seams for external collaborators consumed by the builder.
//!
//! The schema-translation layer decides which predicates and metadata
//! apply; the builder only offers the hook points. Providers return
//! expression trees or raw fragments, so any parameters they carry ride
//! through the normal render-time accumulation.

use std::rc::Rc;

use crate::clauses::MatchClause;
use crate::expression::{Expression, RawCypher, RawFragment};
use crate::references::{RelationshipRef, VariableRef};

/// Operations an authorization rule can gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOperation {
    Read,
    Create,
    Update,
    Delete,
}

/// Supplies an optional boolean predicate restricting access to an
/// entity. Parameters belong inside the returned expression as named
/// parameter nodes; they merge into the table when the predicate
/// renders.
pub trait AuthPredicateProvider {
    fn auth_predicate(
        &self,
        entity: &VariableRef,
        operations: &[AuthOperation],
    ) -> Option<Expression>;
}

/// Conjoin the provider's predicate onto a MATCH clause, if any.
pub fn apply_auth_filter(
    clause: MatchClause,
    entity: &VariableRef,
    operations: &[AuthOperation],
    provider: &dyn AuthPredicateProvider,
) -> MatchClause {
    match provider.auth_predicate(entity, operations) {
        Some(predicate) => clause.and_where(predicate),
        None => clause,
    }
}

/// Supplies a raw projection fragment for event/subscription metadata.
/// The names passed in are already resolved by the environment.
pub trait EventMetadataProvider {
    fn event_metadata(&self, relationship_name: &str, variable_name: &str) -> Option<String>;
}

/// Wrap the provider as a deferred projection expression for a `WITH`
/// line. Falls back to projecting the variable itself when the provider
/// has nothing to add.
pub fn event_metadata_projection(
    relationship: &RelationshipRef,
    variable: &VariableRef,
    provider: Rc<dyn EventMetadataProvider>,
) -> Expression {
    let relationship = relationship.clone();
    let variable = variable.clone();
    Expression::Raw(RawCypher::new(move |env| {
        let relationship_name = env.name_for(&relationship.clone().into());
        let variable_name = env.name_for(&variable);
        match provider.event_metadata(&relationship_name, &variable_name) {
            Some(fragment) => Ok(RawFragment::text(fragment)),
            None => Ok(RawFragment::text(variable_name)),
        }
    }))
}
