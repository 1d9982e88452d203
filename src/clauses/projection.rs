//! Projection items shared by WITH and RETURN, plus ORDER BY parts.

use crate::errors::CypherBuilderError;
use crate::expression::Expression;
use crate::params::Parameter;
use crate::references::{
    NamedVariable, NodeRef, PropertyRef, RelationshipRef, Variable, VariableRef,
};
use crate::to_cypher::{RenderContext, ToCypher};

/// One comma-separated projection, optionally aliased with `AS`.
///
/// The alias is itself a reference, so later clauses can project or
/// filter on it under the same rendered name.
#[derive(Debug, Clone)]
pub struct ProjectionItem {
    expression: Option<Expression>,
    alias: Option<VariableRef>,
}

impl ProjectionItem {
    pub fn new(expression: impl Into<Expression>) -> Self {
        ProjectionItem {
            expression: Some(expression.into()),
            alias: None,
        }
    }

    pub fn aliased(expression: impl Into<Expression>, alias: impl Into<VariableRef>) -> Self {
        ProjectionItem {
            expression: Some(expression.into()),
            alias: Some(alias.into()),
        }
    }

    /// The `*` projection.
    pub fn star() -> Self {
        ProjectionItem {
            expression: None,
            alias: None,
        }
    }
}

impl From<Expression> for ProjectionItem {
    fn from(value: Expression) -> Self {
        ProjectionItem::new(value)
    }
}

impl From<PropertyRef> for ProjectionItem {
    fn from(value: PropertyRef) -> Self {
        ProjectionItem::new(value)
    }
}

impl From<NodeRef> for ProjectionItem {
    fn from(value: NodeRef) -> Self {
        ProjectionItem::new(value)
    }
}

impl From<RelationshipRef> for ProjectionItem {
    fn from(value: RelationshipRef) -> Self {
        ProjectionItem::new(value)
    }
}

impl From<Variable> for ProjectionItem {
    fn from(value: Variable) -> Self {
        ProjectionItem::new(value)
    }
}

impl From<NamedVariable> for ProjectionItem {
    fn from(value: NamedVariable) -> Self {
        ProjectionItem::new(value)
    }
}

impl From<VariableRef> for ProjectionItem {
    fn from(value: VariableRef) -> Self {
        ProjectionItem::new(value)
    }
}

impl From<Parameter> for ProjectionItem {
    fn from(value: Parameter) -> Self {
        ProjectionItem::new(value)
    }
}

impl ToCypher for ProjectionItem {
    fn to_cypher(&self, ctx: &mut RenderContext) -> Result<String, CypherBuilderError> {
        let rendered = match &self.expression {
            None => "*".to_string(),
            Some(expr) => expr.to_cypher(ctx)?,
        };
        match &self.alias {
            Some(alias) => Ok(format!("{} AS {}", rendered, ctx.env.name_for(alias))),
            None => Ok(rendered),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl From<SortOrder> for String {
    fn from(value: SortOrder) -> String {
        match value {
            SortOrder::Asc => "ASC".to_string(),
            SortOrder::Desc => "DESC".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OrderByItem {
    expression: Expression,
    order: SortOrder,
}

impl OrderByItem {
    pub fn asc(expression: impl Into<Expression>) -> Self {
        OrderByItem {
            expression: expression.into(),
            order: SortOrder::Asc,
        }
    }

    pub fn desc(expression: impl Into<Expression>) -> Self {
        OrderByItem {
            expression: expression.into(),
            order: SortOrder::Desc,
        }
    }
}

pub(crate) fn render_projections(
    items: &[ProjectionItem],
    ctx: &mut RenderContext,
) -> Result<String, CypherBuilderError> {
    let rendered: Result<Vec<String>, _> = items.iter().map(|i| i.to_cypher(ctx)).collect();
    Ok(rendered?.join(", "))
}

/// Render the ORDER BY / SKIP / LIMIT tail lines shared by WITH and
/// RETURN; empty when none are set.
pub(crate) fn render_pagination(
    order_by: &[OrderByItem],
    skip: Option<i64>,
    limit: Option<i64>,
    ctx: &mut RenderContext,
) -> Result<Vec<String>, CypherBuilderError> {
    let mut lines = Vec::new();
    if !order_by.is_empty() {
        let mut rendered = Vec::with_capacity(order_by.len());
        for item in order_by {
            rendered.push(format!(
                "{} {}",
                item.expression.to_cypher(ctx)?,
                String::from(item.order)
            ));
        }
        lines.push(format!("ORDER BY {}", rendered.join(", ")));
    }
    if let Some(skip) = skip {
        lines.push(format!("SKIP {}", skip));
    }
    if let Some(limit) = limit {
        lines.push(format!("LIMIT {}", limit));
    }
    Ok(lines)
}
