//! Statement-level constructs: each clause renders to one or more lines
//! in the fixed grammatical order Cypher dictates.

mod call_clause;
mod create_clause;
mod match_clause;
mod merge_clause;
mod projection;
mod raw_clause;
mod return_clause;
mod union_clause;
mod unwind_clause;
mod with_clause;

pub use call_clause::CallClause;
pub use create_clause::CreateClause;
pub use match_clause::MatchClause;
pub use merge_clause::MergeClause;
pub use projection::{OrderByItem, ProjectionItem, SortOrder};
pub use raw_clause::RawCypherClause;
pub use return_clause::ReturnClause;
pub use union_clause::{UnionClause, UnionType};
pub use unwind_clause::UnwindClause;
pub use with_clause::WithClause;

use crate::errors::CypherBuilderError;
use crate::to_cypher::{RenderContext, ToCypher};

#[derive(Debug, Clone)]
pub enum Clause {
    Match(MatchClause),
    Create(CreateClause),
    Merge(MergeClause),
    Call(CallClause),
    With(WithClause),
    Return(ReturnClause),
    Unwind(UnwindClause),
    Union(UnionClause),
    Raw(RawCypherClause),
    /// Top-to-bottom sequence sharing one environment; built by [`concat`].
    Concat(Vec<Clause>),
}

impl ToCypher for Clause {
    fn to_cypher(&self, ctx: &mut RenderContext) -> Result<String, CypherBuilderError> {
        match self {
            Clause::Match(c) => c.to_cypher(ctx),
            Clause::Create(c) => c.to_cypher(ctx),
            Clause::Merge(c) => c.to_cypher(ctx),
            Clause::Call(c) => c.to_cypher(ctx),
            Clause::With(c) => c.to_cypher(ctx),
            Clause::Return(c) => c.to_cypher(ctx),
            Clause::Unwind(c) => c.to_cypher(ctx),
            Clause::Union(c) => c.to_cypher(ctx),
            Clause::Raw(c) => c.to_cypher(ctx),
            Clause::Concat(clauses) => {
                let rendered: Result<Vec<String>, _> =
                    clauses.iter().map(|c| c.to_cypher(ctx)).collect();
                Ok(rendered?.join("\n"))
            }
        }
    }
}

/// Sequence clauses top-to-bottom under one shared environment.
///
/// Nested `concat` results are flattened at construction, so
/// `concat([concat([a, b]), c])` and `concat([a, concat([b, c])])` are
/// the same tree and render identically.
pub fn concat(clauses: impl IntoIterator<Item = Clause>) -> Clause {
    let mut flat = Vec::new();
    for clause in clauses {
        match clause {
            Clause::Concat(inner) => flat.extend(inner),
            other => flat.push(other),
        }
    }
    Clause::Concat(flat)
}

impl From<MatchClause> for Clause {
    fn from(value: MatchClause) -> Self {
        Clause::Match(value)
    }
}

impl From<CreateClause> for Clause {
    fn from(value: CreateClause) -> Self {
        Clause::Create(value)
    }
}

impl From<MergeClause> for Clause {
    fn from(value: MergeClause) -> Self {
        Clause::Merge(value)
    }
}

impl From<CallClause> for Clause {
    fn from(value: CallClause) -> Self {
        Clause::Call(value)
    }
}

impl From<WithClause> for Clause {
    fn from(value: WithClause) -> Self {
        Clause::With(value)
    }
}

impl From<ReturnClause> for Clause {
    fn from(value: ReturnClause) -> Self {
        Clause::Return(value)
    }
}

impl From<UnwindClause> for Clause {
    fn from(value: UnwindClause) -> Self {
        Clause::Unwind(value)
    }
}

impl From<UnionClause> for Clause {
    fn from(value: UnionClause) -> Self {
        Clause::Union(value)
    }
}

impl From<RawCypherClause> for Clause {
    fn from(value: RawCypherClause) -> Self {
        Clause::Raw(value)
    }
}
