//! Identity handles for nodes, relationships and variables.
//!
//! A reference is an opaque entity awaiting a rendered name. Identity is
//! carried by a [`RefId`] assigned at construction, so two references
//! created from the same hint are still distinct entities, while clones
//! of one reference stay the same entity. Name assignment is held by the
//! [`Environment`](crate::environment::Environment), never on the
//! reference itself.

use uuid::Uuid;

/// Unique identity of a reference within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RefId(Uuid);

impl RefId {
    fn new() -> Self {
        RefId(Uuid::new_v4())
    }
}

/// Handle for a node variable, optionally constrained by static labels.
#[derive(Debug, Clone)]
pub struct NodeRef {
    id: RefId,
    hint: String,
    labels: Vec<String>,
}

impl NodeRef {
    pub fn new() -> Self {
        Self::with_hint("this")
    }

    pub fn with_hint(hint: impl Into<String>) -> Self {
        NodeRef {
            id: RefId::new(),
            hint: hint.into(),
            labels: Vec::new(),
        }
    }

    /// Attach static labels, rendered as `(:A:B)` inside patterns.
    pub fn labeled<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn property(&self, key: impl Into<String>) -> PropertyRef {
        PropertyRef {
            owner: VariableRef::Node(self.clone()),
            key: key.into(),
        }
    }
}

impl Default for NodeRef {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle for a relationship variable, optionally constrained by types.
#[derive(Debug, Clone)]
pub struct RelationshipRef {
    id: RefId,
    hint: String,
    types: Vec<String>,
}

impl RelationshipRef {
    pub fn new() -> Self {
        Self::with_hint("rel")
    }

    pub fn with_hint(hint: impl Into<String>) -> Self {
        RelationshipRef {
            id: RefId::new(),
            hint: hint.into(),
            types: Vec::new(),
        }
    }

    /// Attach relationship types, rendered as `[:A|B]` inside patterns.
    pub fn typed<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn types(&self) -> &[String] {
        &self.types
    }

    pub fn property(&self, key: impl Into<String>) -> PropertyRef {
        PropertyRef {
            owner: VariableRef::Relationship(self.clone()),
            key: key.into(),
        }
    }
}

impl Default for RelationshipRef {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle for a generic variable (UNWIND aliases, comprehension binders,
/// WITH projections).
#[derive(Debug, Clone)]
pub struct Variable {
    id: RefId,
    hint: String,
}

impl Variable {
    pub fn new() -> Self {
        Self::with_hint("var")
    }

    pub fn with_hint(hint: impl Into<String>) -> Self {
        Variable {
            id: RefId::new(),
            hint: hint.into(),
        }
    }

    pub fn property(&self, key: impl Into<String>) -> PropertyRef {
        PropertyRef {
            owner: VariableRef::Variable(self.clone()),
            key: key.into(),
        }
    }
}

impl Default for Variable {
    fn default() -> Self {
        Self::new()
    }
}

/// A variable with a fixed, caller-chosen name.
///
/// Escape hatch for interoperating with hand-written fragments: the name
/// renders verbatim and is reserved in the environment so automatic
/// allocation avoids it.
#[derive(Debug, Clone)]
pub struct NamedVariable {
    id: RefId,
    name: String,
}

impl NamedVariable {
    pub fn new(name: impl Into<String>) -> Self {
        NamedVariable {
            id: RefId::new(),
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn property(&self, key: impl Into<String>) -> PropertyRef {
        PropertyRef {
            owner: VariableRef::Named(self.clone()),
            key: key.into(),
        }
    }
}

/// Any reference the environment can assign a name to.
#[derive(Debug, Clone)]
pub enum VariableRef {
    Node(NodeRef),
    Relationship(RelationshipRef),
    Variable(Variable),
    Named(NamedVariable),
}

impl VariableRef {
    pub fn id(&self) -> RefId {
        match self {
            VariableRef::Node(n) => n.id,
            VariableRef::Relationship(r) => r.id,
            VariableRef::Variable(v) => v.id,
            VariableRef::Named(n) => n.id,
        }
    }

    pub fn hint(&self) -> &str {
        match self {
            VariableRef::Node(n) => &n.hint,
            VariableRef::Relationship(r) => &r.hint,
            VariableRef::Variable(v) => &v.hint,
            VariableRef::Named(n) => &n.name,
        }
    }

    pub fn property(&self, key: impl Into<String>) -> PropertyRef {
        PropertyRef {
            owner: self.clone(),
            key: key.into(),
        }
    }
}

impl From<NodeRef> for VariableRef {
    fn from(value: NodeRef) -> Self {
        VariableRef::Node(value)
    }
}

impl From<RelationshipRef> for VariableRef {
    fn from(value: RelationshipRef) -> Self {
        VariableRef::Relationship(value)
    }
}

impl From<Variable> for VariableRef {
    fn from(value: Variable) -> Self {
        VariableRef::Variable(value)
    }
}

impl From<NamedVariable> for VariableRef {
    fn from(value: NamedVariable) -> Self {
        VariableRef::Named(value)
    }
}

/// Access to one property of a referenced entity, e.g. `this0.title`.
#[derive(Debug, Clone)]
pub struct PropertyRef {
    pub(crate) owner: VariableRef,
    pub(crate) key: String,
}

impl PropertyRef {
    pub fn owner(&self) -> &VariableRef {
        &self.owner
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}
