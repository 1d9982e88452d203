use crate::errors::CypherBuilderError;
use crate::expression::Expression;
use crate::pattern::Pattern;
use crate::to_cypher::{RenderContext, ToCypher};

/// `MATCH` / `OPTIONAL MATCH` over one or more patterns, each clause
/// carrying its own optional `WHERE` predicate.
#[derive(Debug, Clone)]
pub struct MatchClause {
    optional: bool,
    patterns: Vec<Pattern>,
    predicate: Option<Expression>,
}

impl MatchClause {
    pub fn new(pattern: Pattern) -> Self {
        MatchClause {
            optional: false,
            patterns: vec![pattern],
            predicate: None,
        }
    }

    pub fn optional(pattern: Pattern) -> Self {
        MatchClause {
            optional: true,
            patterns: vec![pattern],
            predicate: None,
        }
    }

    /// Construct from a dynamically built pattern list.
    pub fn from_patterns(patterns: Vec<Pattern>) -> Result<Self, CypherBuilderError> {
        if patterns.is_empty() {
            return Err(CypherBuilderError::EmptyMatchClause);
        }
        Ok(MatchClause {
            optional: false,
            patterns,
            predicate: None,
        })
    }

    /// Add a comma-separated pattern to the same clause line.
    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.patterns.push(pattern);
        self
    }

    pub fn where_clause(mut self, predicate: Expression) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// Conjoin a predicate onto the existing `WHERE`, if any.
    pub fn and_where(mut self, predicate: Expression) -> Self {
        self.predicate = Some(match self.predicate {
            Some(existing) => existing.and(predicate),
            None => predicate,
        });
        self
    }
}

impl ToCypher for MatchClause {
    fn to_cypher(&self, ctx: &mut RenderContext) -> Result<String, CypherBuilderError> {
        let keyword = if self.optional {
            "OPTIONAL MATCH"
        } else {
            "MATCH"
        };
        let rendered: Result<Vec<String>, _> =
            self.patterns.iter().map(|p| p.to_cypher(ctx)).collect();
        let mut out = format!("{} {}", keyword, rendered?.join(", "));
        if let Some(predicate) = &self.predicate {
            out.push_str(&format!("\nWHERE {}", predicate.to_cypher(ctx)?));
        }
        Ok(out)
    }
}
