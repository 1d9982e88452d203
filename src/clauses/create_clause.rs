use crate::errors::CypherBuilderError;
use crate::expression::Expression;
use crate::pattern::Pattern;
use crate::references::PropertyRef;
use crate::to_cypher::{RenderContext, ToCypher};

/// `CREATE` over one or more patterns with optional trailing `SET`
/// assignments.
#[derive(Debug, Clone)]
pub struct CreateClause {
    patterns: Vec<Pattern>,
    set_items: Vec<(PropertyRef, Expression)>,
}

impl CreateClause {
    pub fn new(pattern: Pattern) -> Self {
        CreateClause {
            patterns: vec![pattern],
            set_items: Vec::new(),
        }
    }

    pub fn from_patterns(patterns: Vec<Pattern>) -> Result<Self, CypherBuilderError> {
        if patterns.is_empty() {
            return Err(CypherBuilderError::EmptyCreateClause);
        }
        Ok(CreateClause {
            patterns,
            set_items: Vec::new(),
        })
    }

    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.patterns.push(pattern);
        self
    }

    pub fn set(mut self, property: PropertyRef, value: impl Into<Expression>) -> Self {
        self.set_items.push((property, value.into()));
        self
    }
}

impl ToCypher for CreateClause {
    fn to_cypher(&self, ctx: &mut RenderContext) -> Result<String, CypherBuilderError> {
        let rendered: Result<Vec<String>, _> =
            self.patterns.iter().map(|p| p.to_cypher(ctx)).collect();
        let mut out = format!("CREATE {}", rendered?.join(", "));
        if !self.set_items.is_empty() {
            let mut assignments = Vec::with_capacity(self.set_items.len());
            for (property, value) in &self.set_items {
                assignments.push(format!(
                    "{} = {}",
                    property.to_cypher(ctx)?,
                    value.to_cypher(ctx)?
                ));
            }
            out.push_str(&format!("\nSET {}", assignments.join(", ")));
        }
        Ok(out)
    }
}
