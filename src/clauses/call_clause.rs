use crate::clauses::Clause;
use crate::errors::CypherBuilderError;
use crate::references::VariableRef;
use crate::to_cypher::{RenderContext, ToCypher};

/// A `CALL { ... }` subquery wrapping an inner clause tree.
///
/// Variables from the enclosing statement cross the subquery boundary
/// through the import list: they render as a `WITH` line immediately
/// inside the block, under the exact names they carry outside. An
/// import that was never bound earlier in the statement is a render
/// error.
#[derive(Debug, Clone)]
pub struct CallClause {
    inner: Box<Clause>,
    imports: Vec<VariableRef>,
}

impl CallClause {
    pub fn new(inner: impl Into<Clause>) -> Self {
        CallClause {
            inner: Box::new(inner.into()),
            imports: Vec::new(),
        }
    }

    /// Declare enclosing-scope variables visible inside the subquery.
    pub fn inner_with(mut self, imports: impl IntoIterator<Item = VariableRef>) -> Self {
        self.imports.extend(imports);
        self
    }
}

fn indent(block: &str) -> String {
    block
        .lines()
        .map(|line| format!("    {}", line))
        .collect::<Vec<String>>()
        .join("\n")
}

impl ToCypher for CallClause {
    fn to_cypher(&self, ctx: &mut RenderContext) -> Result<String, CypherBuilderError> {
        let mut block_lines = Vec::new();
        if !self.imports.is_empty() {
            let mut names = Vec::with_capacity(self.imports.len());
            for import in &self.imports {
                let name = ctx.env.lookup(import).ok_or_else(|| {
                    CypherBuilderError::UnregisteredImport(import.hint().to_string())
                })?;
                names.push(name);
            }
            block_lines.push(format!("WITH {}", names.join(", ")));
        }
        // the subquery renders in a child scope sharing the build's
        // allocation table, so imported names stay stable
        let parent_env = ctx.env.clone();
        ctx.env = parent_env.child();
        let inner = self.inner.to_cypher(ctx);
        ctx.env = parent_env;
        block_lines.push(inner?);
        Ok(format!("CALL {{\n{}\n}}", indent(&block_lines.join("\n"))))
    }
}
