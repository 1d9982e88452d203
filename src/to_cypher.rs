//! Rendering of AST nodes to Cypher text.
//!
//! One [`RenderContext`] is threaded through the whole render pass of a
//! build: the environment assigns variable names at first encounter in
//! document order, and the parameter table accumulates bindings as a
//! side effect of rendering. There is no separate pre-pass.

use serde_json::Value;

use crate::environment::Environment;
use crate::errors::CypherBuilderError;
use crate::expression::{Expression, Operator, OperatorApplication};
use crate::functions::CypherFunction;
use crate::params::{Parameter, ParameterTable};
use crate::pattern::{Direction, NodePattern, Pattern, RelationshipPattern};
use crate::references::{PropertyRef, VariableRef};
use crate::utils::identifier::escape_identifier;

/// Mutable render state for one build invocation.
pub struct RenderContext {
    pub env: Environment,
    pub params: ParameterTable,
}

impl RenderContext {
    pub fn new(parameter_prefix: &str) -> Self {
        RenderContext {
            env: Environment::new(),
            params: ParameterTable::new(parameter_prefix),
        }
    }
}

/// Convert an AST node to a Cypher fragment, accumulating names and
/// parameters in the context.
pub trait ToCypher {
    fn to_cypher(&self, ctx: &mut RenderContext) -> Result<String, CypherBuilderError>;
}

/// Format a value as Cypher literal text (for `Parameter::Literal`).
pub(crate) fn literal_text(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'")),
        Value::Array(items) => {
            let rendered: Vec<String> = items.iter().map(literal_text).collect();
            format!("[{}]", rendered.join(", "))
        }
        Value::Object(map) => {
            let rendered: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", escape_identifier(k), literal_text(v)))
                .collect();
            format!("{{ {} }}", rendered.join(", "))
        }
    }
}

impl ToCypher for Parameter {
    fn to_cypher(&self, ctx: &mut RenderContext) -> Result<String, CypherBuilderError> {
        match self {
            Parameter::Null => Ok("NULL".to_string()),
            Parameter::Literal { value } => Ok(literal_text(value)),
            _ => {
                // key_for only returns None for the inline variants above
                let key = ctx.params.key_for(self).unwrap_or_default();
                Ok(format!("${}", key))
            }
        }
    }
}

impl ToCypher for VariableRef {
    fn to_cypher(&self, ctx: &mut RenderContext) -> Result<String, CypherBuilderError> {
        Ok(ctx.env.name_for(self))
    }
}

impl ToCypher for PropertyRef {
    fn to_cypher(&self, ctx: &mut RenderContext) -> Result<String, CypherBuilderError> {
        let owner = ctx.env.name_for(self.owner());
        Ok(format!("{}.{}", owner, escape_identifier(self.key())))
    }
}

impl ToCypher for Expression {
    fn to_cypher(&self, ctx: &mut RenderContext) -> Result<String, CypherBuilderError> {
        match self {
            Expression::Parameter(p) => p.to_cypher(ctx),
            Expression::Variable(v) => v.to_cypher(ctx),
            Expression::Property(p) => p.to_cypher(ctx),
            Expression::OperatorApplicationExp(app) => render_operator(app, ctx),
            Expression::FunctionCallExp(f) => {
                if f.function == CypherFunction::CountStar {
                    return Ok("count(*)".to_string());
                }
                let args: Result<Vec<String>, _> =
                    f.args.iter().map(|a| a.to_cypher(ctx)).collect();
                Ok(format!("{}({})", f.function.name(), args?.join(", ")))
            }
            Expression::PredicateExp(p) => {
                // the bound variable gets its name before the inner
                // predicate renders, so the inner expression sees a
                // name rather than a placeholder
                let variable = ctx.env.name_for(&p.variable.clone().into());
                let list = p.list.to_cypher(ctx)?;
                let predicate = p.predicate.to_cypher(ctx)?;
                Ok(format!(
                    "{}({} IN {} WHERE {})",
                    p.kind.keyword(),
                    variable,
                    list,
                    predicate
                ))
            }
            Expression::Exists(pattern) => Ok(format!("exists({})", pattern.to_cypher(ctx)?)),
            Expression::ListComprehensionExp(c) => {
                let variable = ctx.env.name_for(&c.variable.clone().into());
                let list = c.list.to_cypher(ctx)?;
                let mut out = format!("[{} IN {}", variable, list);
                if let Some(filter) = &c.filter {
                    out.push_str(&format!(" WHERE {}", filter.to_cypher(ctx)?));
                }
                if let Some(map) = &c.map {
                    out.push_str(&format!(" | {}", map.to_cypher(ctx)?));
                }
                out.push(']');
                Ok(out)
            }
            Expression::PatternComprehensionExp(c) => {
                let pattern = c.pattern.to_cypher(ctx)?;
                let mut out = format!("[{}", pattern);
                if let Some(filter) = &c.filter {
                    out.push_str(&format!(" WHERE {}", filter.to_cypher(ctx)?));
                }
                out.push_str(&format!(" | {}]", c.map.to_cypher(ctx)?));
                Ok(out)
            }
            Expression::List(items) => {
                let rendered: Result<Vec<String>, _> =
                    items.iter().map(|e| e.to_cypher(ctx)).collect();
                Ok(format!("[{}]", rendered?.join(", ")))
            }
            Expression::Raw(raw) => {
                let fragment = raw.evaluate(&mut ctx.env)?;
                for (key, value) in fragment.params {
                    ctx.params.merge_raw(&key, value)?;
                }
                Ok(fragment.cypher)
            }
        }
    }
}

// Every operator application is parenthesized in full; the output never
// relies on Cypher's own precedence table.
fn render_operator(
    app: &OperatorApplication,
    ctx: &mut RenderContext,
) -> Result<String, CypherBuilderError> {
    let rendered: Result<Vec<String>, _> = app.operands.iter().map(|o| o.to_cypher(ctx)).collect();
    let rendered = rendered?;
    let text = app.operator.text();
    match app.operator {
        Operator::Not => Ok(format!("({} {})", text, rendered[0])),
        Operator::IsNull | Operator::IsNotNull => Ok(format!("({} {})", rendered[0], text)),
        Operator::And | Operator::Or => {
            Ok(format!("({})", rendered.join(&format!(" {} ", text))))
        }
        _ => Ok(format!("({} {} {})", rendered[0], text, rendered[1])),
    }
}

fn render_properties(
    properties: &[(String, Parameter)],
    ctx: &mut RenderContext,
) -> Result<String, CypherBuilderError> {
    if properties.is_empty() {
        return Ok(String::new());
    }
    let mut pairs = Vec::with_capacity(properties.len());
    for (key, value) in properties {
        pairs.push(format!(
            "{}: {}",
            escape_identifier(key),
            value.to_cypher(ctx)?
        ));
    }
    Ok(format!(" {{ {} }}", pairs.join(", ")))
}

impl ToCypher for NodePattern {
    fn to_cypher(&self, ctx: &mut RenderContext) -> Result<String, CypherBuilderError> {
        let name = ctx.env.name_for(&self.node.clone().into());
        let labels: String = self
            .node
            .labels()
            .iter()
            .map(|l| format!(":{}", escape_identifier(l)))
            .collect();
        let properties = render_properties(&self.properties, ctx)?;
        Ok(format!("({}{}{})", name, labels, properties))
    }
}

fn render_relationship(
    rel: &RelationshipPattern,
    ctx: &mut RenderContext,
) -> Result<String, CypherBuilderError> {
    let name = ctx.env.name_for(&rel.rel.clone().into());
    let types = if rel.rel.types().is_empty() {
        String::new()
    } else {
        format!(
            ":{}",
            rel.rel
                .types()
                .iter()
                .map(|t| escape_identifier(t))
                .collect::<Vec<String>>()
                .join("|")
        )
    };
    let length = rel
        .variable_length
        .map(|spec| spec.render())
        .unwrap_or_default();
    let properties = render_properties(&rel.properties, ctx)?;
    let inner = format!("[{}{}{}{}]", name, types, length, properties);
    Ok(match rel.direction {
        Direction::Outgoing => format!("-{}->", inner),
        Direction::Incoming => format!("<-{}-", inner),
        Direction::Either => format!("-{}-", inner),
    })
}

impl ToCypher for Pattern {
    fn to_cypher(&self, ctx: &mut RenderContext) -> Result<String, CypherBuilderError> {
        let mut out = self.start.to_cypher(ctx)?;
        for (rel, node) in &self.chain {
            out.push_str(&render_relationship(rel, ctx)?);
            out.push_str(&node.to_cypher(ctx)?);
        }
        Ok(out)
    }
}
