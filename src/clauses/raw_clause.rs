use crate::errors::CypherBuilderError;
use crate::expression::RawCypher;
use crate::to_cypher::{RenderContext, ToCypher};

/// Clause-level escape hatch: a hand-authored statement line that still
/// participates in naming and parameter collection.
#[derive(Debug, Clone)]
pub struct RawCypherClause {
    raw: RawCypher,
}

impl RawCypherClause {
    pub fn new(raw: RawCypher) -> Self {
        RawCypherClause { raw }
    }

    pub fn constant(text: impl Into<String>) -> Self {
        RawCypherClause {
            raw: RawCypher::constant(text),
        }
    }
}

impl ToCypher for RawCypherClause {
    fn to_cypher(&self, ctx: &mut RenderContext) -> Result<String, CypherBuilderError> {
        let fragment = self.raw.evaluate(&mut ctx.env)?;
        for (key, value) in fragment.params {
            ctx.params.merge_raw(&key, value)?;
        }
        Ok(fragment.cypher)
    }
}
