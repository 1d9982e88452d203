use thiserror::Error;

/// Coarse category of a builder error.
///
/// Construction errors are raised while assembling the AST, conflict
/// errors before any rendering begins, render errors only during the
/// render pass itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Construction,
    Conflict,
    Render,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CypherBuilderError {
    #[error("MATCH clause has no patterns (must contain at least one pattern)")]
    EmptyMatchClause,
    #[error("CREATE clause has no patterns (must contain at least one pattern)")]
    EmptyCreateClause,
    #[error("RETURN clause is empty (must specify at least one projection)")]
    EmptyReturnClause,
    #[error("WITH clause is empty (must specify at least one projection)")]
    EmptyWithClause,
    #[error("UNION requires at least two branches (got {0})")]
    UnionTooFewBranches(usize),
    #[error("Function '{0}' called with {1} arguments ({2})")]
    FunctionArity(String, usize, String),
    #[error("Invalid Cypher function name: {0}")]
    InvalidFunctionName(String),
    #[error("Conflicting SET assignments for property '{0}' (explicit values must agree)")]
    ConflictingSetProperty(String),
    #[error("Parameter '{0}' is already bound to a different value (raw fragments must not rebind keys)")]
    ConflictingParameter(String),
    #[error("Variable '{0}' is not registered in the enclosing scope (subquery imports must be bound earlier in the statement)")]
    UnregisteredImport(String),
}

impl CypherBuilderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CypherBuilderError::EmptyMatchClause
            | CypherBuilderError::EmptyCreateClause
            | CypherBuilderError::EmptyReturnClause
            | CypherBuilderError::EmptyWithClause
            | CypherBuilderError::UnionTooFewBranches(_)
            | CypherBuilderError::FunctionArity(_, _, _)
            | CypherBuilderError::InvalidFunctionName(_) => ErrorKind::Construction,
            CypherBuilderError::ConflictingSetProperty(_)
            | CypherBuilderError::ConflictingParameter(_) => ErrorKind::Conflict,
            CypherBuilderError::UnregisteredImport(_) => ErrorKind::Render,
        }
    }
}
