//! Composable computation nodes: comparisons, boolean combinators,
//! math, function calls, quantified predicates, comprehensions and the
//! raw escape hatch.
//!
//! Expressions are pure data until rendered; rendering lives in
//! [`to_cypher`](crate::to_cypher). Boolean nesting is always fully
//! parenthesized so the output never depends on Cypher's own operator
//! precedence.

use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use crate::environment::Environment;
use crate::errors::CypherBuilderError;
use crate::functions::{validate_call, CypherFunction};
use crate::params::Parameter;
use crate::pattern::Pattern;
use crate::references::{
    NamedVariable, NodeRef, PropertyRef, RelationshipRef, Variable, VariableRef,
};

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    // binary
    Equal,            // =
    NotEqual,         // <>
    LessThan,         // <
    GreaterThan,      // >
    LessThanEqual,    // <=
    GreaterThanEqual, // >=
    RegexMatch,       // =~
    In,               // IN [...]
    Addition,         // +
    Subtraction,      // -
    Multiplication,   // *
    Division,         // /
    ModuloDivision,   // %
    // string predicates
    StartsWith, // STARTS WITH
    EndsWith,   // ENDS WITH
    Contains,   // CONTAINS
    // n-ary
    And,
    Or,
    // unary
    Not,
    // postfix
    IsNull,    // e.g. city IS NULL
    IsNotNull, // e.g. city IS NOT NULL
}

impl Operator {
    pub fn text(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::NotEqual => "<>",
            Operator::LessThan => "<",
            Operator::GreaterThan => ">",
            Operator::LessThanEqual => "<=",
            Operator::GreaterThanEqual => ">=",
            Operator::RegexMatch => "=~",
            Operator::In => "IN",
            Operator::Addition => "+",
            Operator::Subtraction => "-",
            Operator::Multiplication => "*",
            Operator::Division => "/",
            Operator::ModuloDivision => "%",
            Operator::StartsWith => "STARTS WITH",
            Operator::EndsWith => "ENDS WITH",
            Operator::Contains => "CONTAINS",
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Not => "NOT",
            Operator::IsNull => "IS NULL",
            Operator::IsNotNull => "IS NOT NULL",
        }
    }
}

/// An operator applied to its operands. `And`/`Or` are n-ary, `Not` is
/// unary, `IsNull`/`IsNotNull` are postfix, everything else is binary;
/// the constructors below enforce the operand counts.
#[derive(Debug, Clone)]
pub struct OperatorApplication {
    pub(crate) operator: Operator,
    pub(crate) operands: Vec<Expression>,
}

#[derive(Debug, Clone)]
pub struct FunctionCall {
    pub(crate) function: CypherFunction,
    pub(crate) args: Vec<Expression>,
}

/// Quantifier over a list: `any(x IN list WHERE predicate)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PredicateKind {
    Any,
    All,
    Single,
    None,
}

impl PredicateKind {
    pub(crate) fn keyword(&self) -> &'static str {
        match self {
            PredicateKind::Any => "any",
            PredicateKind::All => "all",
            PredicateKind::Single => "single",
            PredicateKind::None => "none",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Predicate {
    pub(crate) kind: PredicateKind,
    pub(crate) variable: Variable,
    pub(crate) list: Box<Expression>,
    pub(crate) predicate: Box<Expression>,
}

/// `[x IN list WHERE filter | map]`; filter and map are each optional.
#[derive(Debug, Clone)]
pub struct ListComprehension {
    pub(crate) variable: Variable,
    pub(crate) list: Box<Expression>,
    pub(crate) filter: Option<Box<Expression>>,
    pub(crate) map: Option<Box<Expression>>,
}

impl ListComprehension {
    pub fn new(variable: Variable, list: impl Into<Expression>) -> Self {
        ListComprehension {
            variable,
            list: Box::new(list.into()),
            filter: None,
            map: None,
        }
    }

    pub fn filter(mut self, predicate: Expression) -> Self {
        self.filter = Some(Box::new(predicate));
        self
    }

    pub fn map(mut self, projection: Expression) -> Self {
        self.map = Some(Box::new(projection));
        self
    }
}

/// `[(a)-[r]->(b) WHERE filter | map]`; the map projection is required.
#[derive(Debug, Clone)]
pub struct PatternComprehension {
    pub(crate) pattern: Pattern,
    pub(crate) filter: Option<Box<Expression>>,
    pub(crate) map: Box<Expression>,
}

impl PatternComprehension {
    pub fn new(pattern: Pattern, map: impl Into<Expression>) -> Self {
        PatternComprehension {
            pattern,
            filter: None,
            map: Box::new(map.into()),
        }
    }

    pub fn filter(mut self, predicate: Expression) -> Self {
        self.filter = Some(Box::new(predicate));
        self
    }
}

/// A hand-authored fragment produced by a [`RawCypher`] callback.
#[derive(Debug, Clone)]
pub struct RawFragment {
    pub cypher: String,
    pub params: Vec<(String, Value)>,
}

impl RawFragment {
    pub fn text(cypher: impl Into<String>) -> Self {
        RawFragment {
            cypher: cypher.into(),
            params: Vec::new(),
        }
    }

    pub fn with_params(cypher: impl Into<String>, params: Vec<(String, Value)>) -> Self {
        RawFragment {
            cypher: cypher.into(),
            params,
        }
    }
}

type RawCallback = dyn Fn(&mut Environment) -> Result<RawFragment, CypherBuilderError>;

/// Escape hatch: a callback receiving the live environment at render
/// time, returning fragment text plus optional parameter bindings.
///
/// The callback may resolve any reference's name through the
/// environment; references not yet visited in document order are
/// allocated on first use, so two callbacks naming the same reference
/// always observe the same rendered name.
#[derive(Clone)]
pub struct RawCypher {
    callback: Rc<RawCallback>,
}

impl RawCypher {
    pub fn new(
        callback: impl Fn(&mut Environment) -> Result<RawFragment, CypherBuilderError> + 'static,
    ) -> Self {
        RawCypher {
            callback: Rc::new(callback),
        }
    }

    /// Fixed text that needs no access to the environment.
    pub fn constant(text: impl Into<String>) -> Self {
        let text = text.into();
        RawCypher::new(move |_| Ok(RawFragment::text(text.clone())))
    }

    pub(crate) fn evaluate(
        &self,
        env: &mut Environment,
    ) -> Result<RawFragment, CypherBuilderError> {
        (self.callback)(env)
    }
}

impl fmt::Debug for RawCypher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RawCypher(<callback>)")
    }
}

#[derive(Debug, Clone)]
pub enum Expression {
    Parameter(Parameter),
    Variable(VariableRef),
    Property(PropertyRef),
    OperatorApplicationExp(OperatorApplication),
    FunctionCallExp(FunctionCall),
    PredicateExp(Predicate),
    Exists(Box<Pattern>),
    ListComprehensionExp(ListComprehension),
    PatternComprehensionExp(PatternComprehension),
    List(Vec<Expression>),
    Raw(RawCypher),
}

impl Expression {
    /// Conjoin with another predicate; consecutive `and`s flatten into
    /// one n-ary application so `a.and(b).and(c)` renders `(a AND b AND c)`.
    pub fn and(self, other: impl Into<Expression>) -> Expression {
        self.merge_boolean(Operator::And, other.into())
    }

    pub fn or(self, other: impl Into<Expression>) -> Expression {
        self.merge_boolean(Operator::Or, other.into())
    }

    pub fn not(self) -> Expression {
        Expression::OperatorApplicationExp(OperatorApplication {
            operator: Operator::Not,
            operands: vec![self],
        })
    }

    fn merge_boolean(self, operator: Operator, other: Expression) -> Expression {
        match self {
            Expression::OperatorApplicationExp(OperatorApplication {
                operator: existing,
                mut operands,
            }) if existing == operator => {
                operands.push(other);
                Expression::OperatorApplicationExp(OperatorApplication { operator, operands })
            }
            left => Expression::OperatorApplicationExp(OperatorApplication {
                operator,
                operands: vec![left, other],
            }),
        }
    }
}

fn binary(op: Operator, left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    Expression::OperatorApplicationExp(OperatorApplication {
        operator: op,
        operands: vec![left.into(), right.into()],
    })
}

fn postfix(op: Operator, operand: impl Into<Expression>) -> Expression {
    Expression::OperatorApplicationExp(OperatorApplication {
        operator: op,
        operands: vec![operand.into()],
    })
}

// ===== COMPARISONS =====

pub fn eq(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    binary(Operator::Equal, left, right)
}

pub fn neq(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    binary(Operator::NotEqual, left, right)
}

pub fn gt(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    binary(Operator::GreaterThan, left, right)
}

pub fn gte(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    binary(Operator::GreaterThanEqual, left, right)
}

pub fn lt(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    binary(Operator::LessThan, left, right)
}

pub fn lte(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    binary(Operator::LessThanEqual, left, right)
}

pub fn is_null(operand: impl Into<Expression>) -> Expression {
    postfix(Operator::IsNull, operand)
}

pub fn is_not_null(operand: impl Into<Expression>) -> Expression {
    postfix(Operator::IsNotNull, operand)
}

pub fn in_list(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    binary(Operator::In, left, right)
}

pub fn contains(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    binary(Operator::Contains, left, right)
}

pub fn starts_with(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    binary(Operator::StartsWith, left, right)
}

pub fn ends_with(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    binary(Operator::EndsWith, left, right)
}

pub fn matches(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    binary(Operator::RegexMatch, left, right)
}

// ===== BOOLEAN COMBINATORS =====

pub fn and(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    left.into().and(right)
}

pub fn or(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    left.into().or(right)
}

pub fn not(operand: impl Into<Expression>) -> Expression {
    operand.into().not()
}

// ===== MATH =====

pub fn plus(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    binary(Operator::Addition, left, right)
}

pub fn minus(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    binary(Operator::Subtraction, left, right)
}

pub fn multiply(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    binary(Operator::Multiplication, left, right)
}

pub fn divide(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    binary(Operator::Division, left, right)
}

pub fn modulo(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    binary(Operator::ModuloDivision, left, right)
}

// ===== FUNCTIONS =====

fn call(function: CypherFunction, args: Vec<Expression>) -> Expression {
    Expression::FunctionCallExp(FunctionCall { function, args })
}

pub fn coalesce(args: Vec<Expression>) -> Result<Expression, CypherBuilderError> {
    validate_call("coalesce", args.len())?;
    Ok(call(CypherFunction::Coalesce, args))
}

pub fn point(arg: impl Into<Expression>) -> Expression {
    call(CypherFunction::Point, vec![arg.into()])
}

pub fn distance(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    call(CypherFunction::Distance, vec![left.into(), right.into()])
}

pub fn point_distance(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    call(
        CypherFunction::PointDistance,
        vec![left.into(), right.into()],
    )
}

/// `datetime()`, the current transaction time.
pub fn datetime() -> Expression {
    call(CypherFunction::Datetime, Vec::new())
}

pub fn labels(node: impl Into<Expression>) -> Expression {
    call(CypherFunction::Labels, vec![node.into()])
}

pub fn type_of(relationship: impl Into<Expression>) -> Expression {
    call(CypherFunction::Type, vec![relationship.into()])
}

pub fn count(arg: impl Into<Expression>) -> Expression {
    call(CypherFunction::Count, vec![arg.into()])
}

/// `count(*)`
pub fn count_star() -> Expression {
    call(CypherFunction::CountStar, Vec::new())
}

pub fn min(arg: impl Into<Expression>) -> Expression {
    call(CypherFunction::Min, vec![arg.into()])
}

pub fn max(arg: impl Into<Expression>) -> Expression {
    call(CypherFunction::Max, vec![arg.into()])
}

pub fn avg(arg: impl Into<Expression>) -> Expression {
    call(CypherFunction::Avg, vec![arg.into()])
}

pub fn sum(arg: impl Into<Expression>) -> Expression {
    call(CypherFunction::Sum, vec![arg.into()])
}

pub fn collect(arg: impl Into<Expression>) -> Expression {
    call(CypherFunction::Collect, vec![arg.into()])
}

pub fn size(arg: impl Into<Expression>) -> Expression {
    call(CypherFunction::Size, vec![arg.into()])
}

pub fn head(arg: impl Into<Expression>) -> Expression {
    call(CypherFunction::Head, vec![arg.into()])
}

pub fn last(arg: impl Into<Expression>) -> Expression {
    call(CypherFunction::Last, vec![arg.into()])
}

/// Call a function by name, validated against the catalogue (known
/// names check arity, unknown names only need identifier shape).
pub fn custom_function(
    name: impl Into<String>,
    args: Vec<Expression>,
) -> Result<Expression, CypherBuilderError> {
    let name = name.into();
    validate_call(&name, args.len())?;
    Ok(call(CypherFunction::Custom(name), args))
}

// ===== PREDICATES =====

fn quantifier(
    kind: PredicateKind,
    variable: Variable,
    list: impl Into<Expression>,
    predicate: Expression,
) -> Expression {
    Expression::PredicateExp(Predicate {
        kind,
        variable,
        list: Box::new(list.into()),
        predicate: Box::new(predicate),
    })
}

pub fn any(variable: Variable, list: impl Into<Expression>, predicate: Expression) -> Expression {
    quantifier(PredicateKind::Any, variable, list, predicate)
}

pub fn all(variable: Variable, list: impl Into<Expression>, predicate: Expression) -> Expression {
    quantifier(PredicateKind::All, variable, list, predicate)
}

pub fn single(
    variable: Variable,
    list: impl Into<Expression>,
    predicate: Expression,
) -> Expression {
    quantifier(PredicateKind::Single, variable, list, predicate)
}

pub fn none(variable: Variable, list: impl Into<Expression>, predicate: Expression) -> Expression {
    quantifier(PredicateKind::None, variable, list, predicate)
}

/// Pattern existence predicate: `exists((a)-[:REL]->(b))`.
pub fn exists(pattern: Pattern) -> Expression {
    Expression::Exists(Box::new(pattern))
}

/// Literal list of expressions, rendered `[a, b, c]`.
pub fn list(items: Vec<Expression>) -> Expression {
    Expression::List(items)
}

// ===== CONVERSIONS =====

impl From<Parameter> for Expression {
    fn from(value: Parameter) -> Self {
        Expression::Parameter(value)
    }
}

impl From<VariableRef> for Expression {
    fn from(value: VariableRef) -> Self {
        Expression::Variable(value)
    }
}

impl From<NodeRef> for Expression {
    fn from(value: NodeRef) -> Self {
        Expression::Variable(value.into())
    }
}

impl From<RelationshipRef> for Expression {
    fn from(value: RelationshipRef) -> Self {
        Expression::Variable(value.into())
    }
}

impl From<Variable> for Expression {
    fn from(value: Variable) -> Self {
        Expression::Variable(value.into())
    }
}

impl From<NamedVariable> for Expression {
    fn from(value: NamedVariable) -> Self {
        Expression::Variable(value.into())
    }
}

impl From<PropertyRef> for Expression {
    fn from(value: PropertyRef) -> Self {
        Expression::Property(value)
    }
}

impl From<ListComprehension> for Expression {
    fn from(value: ListComprehension) -> Self {
        Expression::ListComprehensionExp(value)
    }
}

impl From<PatternComprehension> for Expression {
    fn from(value: PatternComprehension) -> Self {
        Expression::PatternComprehensionExp(value)
    }
}

impl From<RawCypher> for Expression {
    fn from(value: RawCypher) -> Self {
        Expression::Raw(value)
    }
}

// scalar operands wrap as anonymous parameters rather than inline text

impl From<&str> for Expression {
    fn from(value: &str) -> Self {
        Expression::Parameter(Parameter::new(value))
    }
}

impl From<String> for Expression {
    fn from(value: String) -> Self {
        Expression::Parameter(Parameter::new(value))
    }
}

impl From<i64> for Expression {
    fn from(value: i64) -> Self {
        Expression::Parameter(Parameter::new(value))
    }
}

impl From<f64> for Expression {
    fn from(value: f64) -> Self {
        Expression::Parameter(Parameter::new(value))
    }
}

impl From<bool> for Expression {
    fn from(value: bool) -> Self {
        Expression::Parameter(Parameter::new(value))
    }
}
