//! Catalogue of Cypher functions known to the builder.
//!
//! Maps function names to arity bounds so variadic constructors can be
//! validated at construction time rather than at render time.

use std::collections::HashMap;

use crate::errors::CypherBuilderError;

/// A Cypher function the expression layer can call.
#[derive(Debug, Clone, PartialEq)]
pub enum CypherFunction {
    Coalesce,
    Point,
    Distance,
    PointDistance,
    Datetime,
    Labels,
    Type,
    Count,
    CountStar,
    Min,
    Max,
    Avg,
    Sum,
    Collect,
    Size,
    Head,
    Last,
    /// Caller-supplied name, validated against identifier shape.
    Custom(String),
}

impl CypherFunction {
    pub fn name(&self) -> &str {
        match self {
            CypherFunction::Coalesce => "coalesce",
            CypherFunction::Point => "point",
            CypherFunction::Distance => "distance",
            CypherFunction::PointDistance => "point.distance",
            CypherFunction::Datetime => "datetime",
            CypherFunction::Labels => "labels",
            CypherFunction::Type => "type",
            CypherFunction::Count | CypherFunction::CountStar => "count",
            CypherFunction::Min => "min",
            CypherFunction::Max => "max",
            CypherFunction::Avg => "avg",
            CypherFunction::Sum => "sum",
            CypherFunction::Collect => "collect",
            CypherFunction::Size => "size",
            CypherFunction::Head => "head",
            CypherFunction::Last => "last",
            CypherFunction::Custom(name) => name,
        }
    }
}

/// Arity bounds and aggregation flag for one catalogued function.
#[derive(Clone)]
pub struct FunctionSignature {
    pub name: &'static str,
    pub min_args: usize,
    /// `None` means unbounded (variadic).
    pub max_args: Option<usize>,
    pub aggregating: bool,
}

// Static signature table
lazy_static::lazy_static! {
    static ref FUNCTION_SIGNATURES: HashMap<&'static str, FunctionSignature> = {
        let mut m = HashMap::new();

        // ===== SCALAR FUNCTIONS =====

        m.insert("coalesce", FunctionSignature {
            name: "coalesce",
            min_args: 1,
            max_args: None,
            aggregating: false,
        });
        m.insert("point", FunctionSignature {
            name: "point",
            min_args: 1,
            max_args: Some(1),
            aggregating: false,
        });
        m.insert("distance", FunctionSignature {
            name: "distance",
            min_args: 2,
            max_args: Some(2),
            aggregating: false,
        });
        m.insert("point.distance", FunctionSignature {
            name: "point.distance",
            min_args: 2,
            max_args: Some(2),
            aggregating: false,
        });
        // datetime() with no args is the current transaction time
        m.insert("datetime", FunctionSignature {
            name: "datetime",
            min_args: 0,
            max_args: Some(1),
            aggregating: false,
        });
        m.insert("labels", FunctionSignature {
            name: "labels",
            min_args: 1,
            max_args: Some(1),
            aggregating: false,
        });
        m.insert("type", FunctionSignature {
            name: "type",
            min_args: 1,
            max_args: Some(1),
            aggregating: false,
        });

        // ===== AGGREGATING FUNCTIONS =====

        m.insert("count", FunctionSignature {
            name: "count",
            min_args: 1,
            max_args: Some(1),
            aggregating: true,
        });
        m.insert("min", FunctionSignature {
            name: "min",
            min_args: 1,
            max_args: Some(1),
            aggregating: true,
        });
        m.insert("max", FunctionSignature {
            name: "max",
            min_args: 1,
            max_args: Some(1),
            aggregating: true,
        });
        m.insert("avg", FunctionSignature {
            name: "avg",
            min_args: 1,
            max_args: Some(1),
            aggregating: true,
        });
        m.insert("sum", FunctionSignature {
            name: "sum",
            min_args: 1,
            max_args: Some(1),
            aggregating: true,
        });
        m.insert("collect", FunctionSignature {
            name: "collect",
            min_args: 1,
            max_args: Some(1),
            aggregating: true,
        });

        // ===== LIST FUNCTIONS =====

        m.insert("size", FunctionSignature {
            name: "size",
            min_args: 1,
            max_args: Some(1),
            aggregating: false,
        });
        m.insert("head", FunctionSignature {
            name: "head",
            min_args: 1,
            max_args: Some(1),
            aggregating: false,
        });
        m.insert("last", FunctionSignature {
            name: "last",
            min_args: 1,
            max_args: Some(1),
            aggregating: false,
        });

        m
    };
}

/// Look up the signature for a catalogued function name.
pub fn signature(name: &str) -> Option<&'static FunctionSignature> {
    FUNCTION_SIGNATURES.get(name.to_lowercase().as_str())
}

pub fn is_known_function(name: &str) -> bool {
    signature(name).is_some()
}

/// All catalogued function names, sorted.
pub fn known_functions() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = FUNCTION_SIGNATURES.keys().copied().collect();
    names.sort_unstable();
    names
}

/// Validate a call against the catalogue. Unknown names only need to
/// look like a function identifier (dotted namespaces allowed).
pub fn validate_call(name: &str, argc: usize) -> Result<(), CypherBuilderError> {
    if let Some(sig) = signature(name) {
        if argc < sig.min_args {
            return Err(CypherBuilderError::FunctionArity(
                name.to_string(),
                argc,
                format!("expected at least {}", sig.min_args),
            ));
        }
        if let Some(max) = sig.max_args {
            if argc > max {
                return Err(CypherBuilderError::FunctionArity(
                    name.to_string(),
                    argc,
                    format!("expected at most {}", max),
                ));
            }
        }
        return Ok(());
    }
    let valid_shape = !name.is_empty()
        && !name.starts_with('.')
        && !name.ends_with('.')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
        && !name.chars().next().is_some_and(|c| c.is_ascii_digit());
    if valid_shape {
        Ok(())
    } else {
        Err(CypherBuilderError::InvalidFunctionName(name.to_string()))
    }
}
