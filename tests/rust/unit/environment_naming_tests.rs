//! Naming guarantees observable through `build`: uniqueness across
//! composed fragments, memoization, and stable names across clause
//! boundaries.

#[cfg(test)]
mod environment_naming_tests {
    use cypherforge::clauses::{concat, MatchClause, RawCypherClause, ReturnClause};
    use cypherforge::expression::{RawCypher, RawFragment};
    use cypherforge::{build, NodeRef, Pattern};

    /// Composing two independently built fragments must rename the
    /// second fragment's colliding references, never the first's.
    #[test]
    fn test_composed_fragments_get_distinct_names() {
        let a = NodeRef::new();
        let b = NodeRef::new();
        let clause = concat([
            MatchClause::new(Pattern::node(a.clone())).into(),
            MatchClause::new(Pattern::node(b.clone())).into(),
            ReturnClause::new([a.into(), b.into()]).unwrap().into(),
        ]);
        let result = build(&clause, "").unwrap();
        assert_eq!(
            result.query,
            "MATCH (this)\nMATCH (this0)\nRETURN this, this0"
        );
    }

    /// The same reference renders to the same name everywhere it
    /// appears, including across clauses joined by concat.
    #[test]
    fn test_reference_name_is_stable_across_clauses() {
        let node = NodeRef::with_hint("movie").labeled(["Movie"]);
        let clause = concat([
            MatchClause::new(Pattern::node(node.clone())).into(),
            ReturnClause::new([node.property("title").into()])
                .unwrap()
                .into(),
        ]);
        let result = build(&clause, "").unwrap();
        assert_eq!(result.query, "MATCH (movie:Movie)\nRETURN movie.title");
    }

    /// Two raw callbacks in one build observe identical assigned names
    /// for the same node instance.
    #[test]
    fn test_raw_callbacks_observe_identical_names() {
        let node = NodeRef::new();
        let n1 = node.clone();
        let n2 = node.clone();
        let clause = concat([
            MatchClause::new(Pattern::node(node)).into(),
            RawCypherClause::new(RawCypher::new(move |env| {
                Ok(RawFragment::text(format!(
                    "SET {}.checked = true",
                    env.name_for(&n1.clone().into())
                )))
            }))
            .into(),
            RawCypherClause::new(RawCypher::new(move |env| {
                Ok(RawFragment::text(format!(
                    "RETURN {}",
                    env.name_for(&n2.clone().into())
                )))
            }))
            .into(),
        ]);
        let result = build(&clause, "").unwrap();
        assert_eq!(
            result.query,
            "MATCH (this)\nSET this.checked = true\nRETURN this"
        );
    }

    /// Fresh builds re-run naming from scratch; a reference reused in a
    /// second build gets its name independently of the first build.
    #[test]
    fn test_environment_is_per_build() {
        let first = NodeRef::new();
        let second = NodeRef::new();
        // first build names both references
        let both = concat([
            MatchClause::new(Pattern::node(first.clone())).into(),
            MatchClause::new(Pattern::node(second.clone())).into(),
        ]);
        let result = build(&both, "").unwrap();
        assert_eq!(result.query, "MATCH (this)\nMATCH (this0)");
        // a second build containing only the second reference starts
        // over: no suffix carries across builds
        let alone: cypherforge::Clause = MatchClause::new(Pattern::node(second)).into();
        let result = build(&alone, "").unwrap();
        assert_eq!(result.query, "MATCH (this)");
    }
}
