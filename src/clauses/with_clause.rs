use crate::clauses::projection::{render_pagination, render_projections, OrderByItem, ProjectionItem};
use crate::errors::CypherBuilderError;
use crate::expression::Expression;
use crate::to_cypher::{RenderContext, ToCypher};

/// `WITH` projection, optionally `DISTINCT`, with the ORDER BY / SKIP /
/// LIMIT / WHERE tail the openCypher grammar hangs off this clause.
#[derive(Debug, Clone)]
pub struct WithClause {
    items: Vec<ProjectionItem>,
    distinct: bool,
    order_by: Vec<OrderByItem>,
    skip: Option<i64>,
    limit: Option<i64>,
    predicate: Option<Expression>,
}

impl WithClause {
    pub fn new(items: impl IntoIterator<Item = ProjectionItem>) -> Result<Self, CypherBuilderError> {
        let items: Vec<ProjectionItem> = items.into_iter().collect();
        if items.is_empty() {
            return Err(CypherBuilderError::EmptyWithClause);
        }
        Ok(WithClause {
            items,
            distinct: false,
            order_by: Vec::new(),
            skip: None,
            limit: None,
            predicate: None,
        })
    }

    pub fn item(mut self, item: impl Into<ProjectionItem>) -> Self {
        self.items.push(item.into());
        self
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn order_by(mut self, item: OrderByItem) -> Self {
        self.order_by.push(item);
        self
    }

    pub fn skip(mut self, rows: i64) -> Self {
        self.skip = Some(rows);
        self
    }

    pub fn limit(mut self, rows: i64) -> Self {
        self.limit = Some(rows);
        self
    }

    pub fn where_clause(mut self, predicate: Expression) -> Self {
        self.predicate = Some(predicate);
        self
    }
}

impl ToCypher for WithClause {
    fn to_cypher(&self, ctx: &mut RenderContext) -> Result<String, CypherBuilderError> {
        let keyword = if self.distinct { "WITH DISTINCT" } else { "WITH" };
        let mut lines = vec![format!(
            "{} {}",
            keyword,
            render_projections(&self.items, ctx)?
        )];
        lines.extend(render_pagination(&self.order_by, self.skip, self.limit, ctx)?);
        if let Some(predicate) = &self.predicate {
            lines.push(format!("WHERE {}", predicate.to_cypher(ctx)?));
        }
        Ok(lines.join("\n"))
    }
}
