use crate::errors::CypherBuilderError;
use crate::expression::Expression;
use crate::references::Variable;
use crate::to_cypher::{RenderContext, ToCypher};

/// `UNWIND expr AS alias`, binding each list element to the alias.
#[derive(Debug, Clone)]
pub struct UnwindClause {
    expression: Expression,
    alias: Variable,
}

impl UnwindClause {
    pub fn new(expression: impl Into<Expression>, alias: Variable) -> Self {
        UnwindClause {
            expression: expression.into(),
            alias,
        }
    }
}

impl ToCypher for UnwindClause {
    fn to_cypher(&self, ctx: &mut RenderContext) -> Result<String, CypherBuilderError> {
        let expression = self.expression.to_cypher(ctx)?;
        let alias = ctx.env.name_for(&self.alias.clone().into());
        Ok(format!("UNWIND {} AS {}", expression, alias))
    }
}
