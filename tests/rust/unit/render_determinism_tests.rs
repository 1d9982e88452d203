//! Determinism and composition laws of the render pass.

#[cfg(test)]
mod render_determinism_tests {
    use cypherforge::clauses::{concat, MatchClause, RawCypherClause, ReturnClause};
    use cypherforge::expression::{and, eq, or};
    use cypherforge::{build, Clause, NodeRef, Pattern};

    fn simple(hint: &str) -> Clause {
        RawCypherClause::constant(hint.to_uppercase()).into()
    }

    /// concat is associative: only top-level sequence order matters.
    #[test]
    fn test_concat_associativity() {
        let left = concat([concat([simple("a"), simple("b")]), simple("c")]);
        let right = concat([simple("a"), concat([simple("b"), simple("c")])]);
        assert_eq!(
            build(&left, "").unwrap().query,
            build(&right, "").unwrap().query
        );
    }

    /// Building the same tree twice with fresh environments yields
    /// identical text and parameter tables.
    #[test]
    fn test_repeated_builds_are_identical() {
        let _ = env_logger::builder().is_test(true).try_init();
        let node = NodeRef::new().labeled(["Person"]);
        let clause = concat([
            MatchClause::new(Pattern::node(node.clone()))
                .where_clause(eq(node.property("name"), "alice"))
                .into(),
            ReturnClause::new([node.into()]).unwrap().into(),
        ]);
        let first = build(&clause, "q_").unwrap();
        let second = build(&clause, "q_").unwrap();
        assert_eq!(first.query, second.query);
        assert_eq!(first.params, second.params);
    }

    /// Parenthesization preserves the constructed truth structure
    /// regardless of Cypher's own precedence: AND of (a, OR(b, c))
    /// keeps the OR grouped.
    #[test]
    fn test_boolean_parenthesization_preserves_structure() {
        let node = NodeRef::new();
        let a = eq(node.property("a"), 1i64);
        let b = eq(node.property("b"), 2i64);
        let c = eq(node.property("c"), 3i64);
        let clause: Clause = MatchClause::new(Pattern::node(node.clone()))
            .where_clause(and(a, or(b, c)))
            .into();
        let result = build(&clause, "").unwrap();
        assert!(result.query.contains(
            "WHERE ((this.a = $param0) AND ((this.b = $param1) OR (this.c = $param2)))"
        ));

        // the mirrored structure groups differently
        let node = NodeRef::new();
        let a = eq(node.property("a"), 1i64);
        let b = eq(node.property("b"), 2i64);
        let c = eq(node.property("c"), 3i64);
        let clause: Clause = MatchClause::new(Pattern::node(node.clone()))
            .where_clause(or(and(a, b), c))
            .into();
        let result = build(&clause, "").unwrap();
        assert!(result.query.contains(
            "WHERE (((this.a = $param0) AND (this.b = $param1)) OR (this.c = $param2))"
        ));
    }
}
