//! Graph pattern descriptors used inside MATCH, CREATE and MERGE.
//!
//! A pattern is an ordered chain of node and relationship steps,
//! stateless once constructed. Variable names for the referenced
//! entities are resolved at render time by the environment.

use crate::params::Parameter;
use crate::references::{NodeRef, RelationshipRef};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Direction {
    /// `<-[..]-`
    Incoming,
    /// `-[..]->`
    Outgoing,
    /// `-[..]-`
    Either,
}

/// Variable-length path spec like `*1..3`, `*..5`, `*2`, `*`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableLengthSpec {
    pub min_hops: Option<u32>,
    pub max_hops: Option<u32>,
}

impl VariableLengthSpec {
    /// `*2` becomes min=2, max=2
    pub fn fixed(hops: u32) -> Self {
        VariableLengthSpec {
            min_hops: Some(hops),
            max_hops: Some(hops),
        }
    }

    pub fn range(min_hops: Option<u32>, max_hops: Option<u32>) -> Self {
        VariableLengthSpec { min_hops, max_hops }
    }

    /// Unbounded `*`
    pub fn any() -> Self {
        VariableLengthSpec {
            min_hops: None,
            max_hops: None,
        }
    }

    pub(crate) fn render(&self) -> String {
        match (self.min_hops, self.max_hops) {
            (None, None) => "*".to_string(),
            (Some(min), Some(max)) if min == max => format!("*{}", min),
            (min, max) => format!(
                "*{}..{}",
                min.map(|h| h.to_string()).unwrap_or_default(),
                max.map(|h| h.to_string()).unwrap_or_default()
            ),
        }
    }
}

/// One node step: `(this0:Movie { title: $t1 })`.
#[derive(Debug, Clone)]
pub struct NodePattern {
    pub(crate) node: NodeRef,
    pub(crate) properties: Vec<(String, Parameter)>,
}

impl NodePattern {
    pub fn new(node: NodeRef) -> Self {
        NodePattern {
            node,
            properties: Vec::new(),
        }
    }

    /// Add a property-equality constraint rendered as `{key: $param}`.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<Parameter>) -> Self {
        self.properties.push((key.into(), value.into()));
        self
    }

    pub fn properties(mut self, props: Vec<(String, Parameter)>) -> Self {
        self.properties.extend(props);
        self
    }
}

impl From<NodeRef> for NodePattern {
    fn from(node: NodeRef) -> Self {
        NodePattern::new(node)
    }
}

/// One relationship step: `-[rel0:ACTED_IN*1..2 { since: $p }]->`.
#[derive(Debug, Clone)]
pub struct RelationshipPattern {
    pub(crate) rel: RelationshipRef,
    pub(crate) direction: Direction,
    pub(crate) properties: Vec<(String, Parameter)>,
    pub(crate) variable_length: Option<VariableLengthSpec>,
}

impl RelationshipPattern {
    pub fn new(rel: RelationshipRef, direction: Direction) -> Self {
        RelationshipPattern {
            rel,
            direction,
            properties: Vec::new(),
            variable_length: None,
        }
    }

    pub fn outgoing(rel: RelationshipRef) -> Self {
        Self::new(rel, Direction::Outgoing)
    }

    pub fn incoming(rel: RelationshipRef) -> Self {
        Self::new(rel, Direction::Incoming)
    }

    pub fn either(rel: RelationshipRef) -> Self {
        Self::new(rel, Direction::Either)
    }

    pub fn property(mut self, key: impl Into<String>, value: impl Into<Parameter>) -> Self {
        self.properties.push((key.into(), value.into()));
        self
    }

    pub fn variable_length(mut self, spec: VariableLengthSpec) -> Self {
        self.variable_length = Some(spec);
        self
    }
}

/// A full pattern: a start node plus zero or more relationship/node
/// steps, e.g. `(a:Person)-[r:ACTED_IN]->(m:Movie)`.
#[derive(Debug, Clone)]
pub struct Pattern {
    pub(crate) start: NodePattern,
    pub(crate) chain: Vec<(RelationshipPattern, NodePattern)>,
}

impl Pattern {
    pub fn node(start: impl Into<NodePattern>) -> Self {
        Pattern {
            start: start.into(),
            chain: Vec::new(),
        }
    }

    /// Append a relationship step and its target node.
    pub fn related(mut self, rel: RelationshipPattern, to: impl Into<NodePattern>) -> Self {
        self.chain.push((rel, to.into()));
        self
    }
}
