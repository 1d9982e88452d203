use crate::errors::CypherBuilderError;
use crate::params::Parameter;
use crate::pattern::Pattern;
use crate::references::PropertyRef;
use crate::to_cypher::{RenderContext, ToCypher};

/// `MERGE` with `ON CREATE SET` / `ON MATCH SET` assignment builders.
///
/// Assignments are validated as they are added: two assignments to the
/// same property must agree on the value, otherwise the conflict is
/// surfaced before any rendering happens. Explicit input always wins
/// over generated defaults, so an overlap is an error, never a silent
/// preference.
#[derive(Debug, Clone)]
pub struct MergeClause {
    pattern: Pattern,
    on_create: Vec<(PropertyRef, Parameter)>,
    on_match: Vec<(PropertyRef, Parameter)>,
}

impl MergeClause {
    pub fn new(pattern: Pattern) -> Self {
        MergeClause {
            pattern,
            on_create: Vec::new(),
            on_match: Vec::new(),
        }
    }

    /// Add an assignment scoped to the creation branch.
    pub fn on_create_set(
        mut self,
        property: PropertyRef,
        value: impl Into<Parameter>,
    ) -> Result<Self, CypherBuilderError> {
        Self::push_assignment(&mut self.on_create, property, value.into())?;
        Ok(self)
    }

    /// Add an assignment scoped to the match branch.
    pub fn on_match_set(
        mut self,
        property: PropertyRef,
        value: impl Into<Parameter>,
    ) -> Result<Self, CypherBuilderError> {
        Self::push_assignment(&mut self.on_match, property, value.into())?;
        Ok(self)
    }

    fn push_assignment(
        items: &mut Vec<(PropertyRef, Parameter)>,
        property: PropertyRef,
        value: Parameter,
    ) -> Result<(), CypherBuilderError> {
        for (existing, bound) in items.iter() {
            if existing.owner().id() == property.owner().id() && existing.key() == property.key() {
                if bound.value() == value.value() {
                    // same value twice dedupes
                    return Ok(());
                }
                return Err(CypherBuilderError::ConflictingSetProperty(
                    property.key().to_string(),
                ));
            }
        }
        items.push((property, value));
        Ok(())
    }

    fn render_assignments(
        keyword: &str,
        items: &[(PropertyRef, Parameter)],
        ctx: &mut RenderContext,
    ) -> Result<Option<String>, CypherBuilderError> {
        if items.is_empty() {
            return Ok(None);
        }
        let mut assignments = Vec::with_capacity(items.len());
        for (property, value) in items {
            assignments.push(format!(
                "{} = {}",
                property.to_cypher(ctx)?,
                value.to_cypher(ctx)?
            ));
        }
        Ok(Some(format!("{} {}", keyword, assignments.join(", "))))
    }
}

impl ToCypher for MergeClause {
    fn to_cypher(&self, ctx: &mut RenderContext) -> Result<String, CypherBuilderError> {
        let mut lines = vec![format!("MERGE {}", self.pattern.to_cypher(ctx)?)];
        if let Some(line) = Self::render_assignments("ON CREATE SET", &self.on_create, ctx)? {
            lines.push(line);
        }
        if let Some(line) = Self::render_assignments("ON MATCH SET", &self.on_match, ctx)? {
            lines.push(line);
        }
        Ok(lines.join("\n"))
    }
}
