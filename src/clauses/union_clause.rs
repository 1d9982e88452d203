use crate::clauses::Clause;
use crate::errors::CypherBuilderError;
use crate::to_cypher::{RenderContext, ToCypher};

/// Type of UNION operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnionType {
    /// UNION - removes duplicates
    Distinct,
    /// UNION ALL - keeps duplicates
    All,
}

/// Two or more branches joined by `UNION` / `UNION ALL` lines.
#[derive(Debug, Clone)]
pub struct UnionClause {
    branches: Vec<Clause>,
    union_type: UnionType,
}

impl UnionClause {
    pub fn new(branches: Vec<Clause>, union_type: UnionType) -> Result<Self, CypherBuilderError> {
        if branches.len() < 2 {
            return Err(CypherBuilderError::UnionTooFewBranches(branches.len()));
        }
        Ok(UnionClause {
            branches,
            union_type,
        })
    }
}

impl ToCypher for UnionClause {
    fn to_cypher(&self, ctx: &mut RenderContext) -> Result<String, CypherBuilderError> {
        let separator = match self.union_type {
            UnionType::Distinct => "UNION",
            UnionType::All => "UNION ALL",
        };
        let rendered: Result<Vec<String>, _> =
            self.branches.iter().map(|b| b.to_cypher(ctx)).collect();
        Ok(rendered?.join(&format!("\n{}\n", separator)))
    }
}
