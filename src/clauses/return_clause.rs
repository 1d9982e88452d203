use crate::clauses::projection::{render_pagination, render_projections, OrderByItem, ProjectionItem};
use crate::errors::CypherBuilderError;
use crate::to_cypher::{RenderContext, ToCypher};

/// `RETURN` projection with optional `DISTINCT` and pagination tail.
#[derive(Debug, Clone)]
pub struct ReturnClause {
    items: Vec<ProjectionItem>,
    distinct: bool,
    order_by: Vec<OrderByItem>,
    skip: Option<i64>,
    limit: Option<i64>,
}

impl ReturnClause {
    pub fn new(items: impl IntoIterator<Item = ProjectionItem>) -> Result<Self, CypherBuilderError> {
        let items: Vec<ProjectionItem> = items.into_iter().collect();
        if items.is_empty() {
            return Err(CypherBuilderError::EmptyReturnClause);
        }
        Ok(ReturnClause {
            items,
            distinct: false,
            order_by: Vec::new(),
            skip: None,
            limit: None,
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
}

impl ToCypher for ReturnClause {
    fn to_cypher(&self, ctx: &mut RenderContext) -> Result<String, CypherBuilderError> {
        let keyword = if self.distinct {
            "RETURN DISTINCT"
        } else {
            "RETURN"
        };
        let mut lines = vec![format!(
            "{} {}",
            keyword,
            render_projections(&self.items, ctx)?
        )];
        lines.extend(render_pagination(&self.order_by, self.skip, self.limit, ctx)?);
        Ok(lines.join("\n"))
    }
}
