//! Parameter-table guarantees observable through `build`: every
//! reachable parameter appears exactly once, values unchanged, no
//! dedup by value.

#[cfg(test)]
mod parameter_table_tests {
    use cypherforge::clauses::{concat, MatchClause, ReturnClause};
    use cypherforge::expression::eq;
    use cypherforge::{build, NodeRef, Parameter, Pattern};
    use serde_json::json;

    #[test]
    fn test_reachable_parameters_appear_with_values_unchanged() {
        let node = NodeRef::new();
        let clause = concat([
            MatchClause::new(Pattern::node(node.clone()))
                .where_clause(eq(
                    node.property("meta"),
                    Parameter::named("meta", json!({"tags": ["a", "b"], "depth": 2})),
                ))
                .into(),
            ReturnClause::new([node.into()]).unwrap().into(),
        ]);
        let result = build(&clause, "").unwrap();
        assert_eq!(
            result.params.get("meta"),
            Some(&json!({"tags": ["a", "b"], "depth": 2}))
        );
        assert_eq!(result.params.len(), 1);
    }

    /// Two parameter instances wrapping the same logical value stay
    /// independent bindings.
    #[test]
    fn test_no_dedup_by_value() {
        let node = NodeRef::new();
        let clause: cypherforge::Clause = MatchClause::new(Pattern::node(node.clone()))
            .where_clause(
                eq(node.property("a"), Parameter::new(7i64))
                    .and(eq(node.property("b"), Parameter::new(7i64))),
            )
            .into();
        let result = build(&clause, "").unwrap();
        assert_eq!(result.params.get("param0"), Some(&json!(7)));
        assert_eq!(result.params.get("param1"), Some(&json!(7)));
    }

    /// One parameter instance used in two places binds once.
    #[test]
    fn test_shared_instance_binds_once() {
        let node = NodeRef::new();
        let shared = Parameter::named("limit_year", 1990i64);
        let clause: cypherforge::Clause = MatchClause::new(Pattern::node(node.clone()))
            .where_clause(
                eq(node.property("from"), shared.clone())
                    .and(eq(node.property("to"), shared)),
            )
            .into();
        let result = build(&clause, "").unwrap();
        assert_eq!(result.params.len(), 1);
        assert!(result
            .query
            .contains("((this.from = $limit_year) AND (this.to = $limit_year))"));
    }

    /// Distinct instances requesting the same key get suffixed keys,
    /// both present in the table.
    #[test]
    fn test_named_instance_collision_is_suffixed() {
        let node = NodeRef::new();
        let clause: cypherforge::Clause = MatchClause::new(Pattern::node(node.clone()))
            .where_clause(
                eq(node.property("a"), Parameter::named("x", 1i64))
                    .and(eq(node.property("b"), Parameter::named("x", 2i64))),
            )
            .into();
        let result = build(&clause, "").unwrap();
        assert_eq!(result.params.get("x"), Some(&json!(1)));
        assert_eq!(result.params.get("x0"), Some(&json!(2)));
    }

    /// The build prefix keys auto-generated parameters so two
    /// independent statements can be concatenated by an outer caller.
    #[test]
    fn test_prefix_separates_independent_statements() {
        let make = |hint: &str| -> cypherforge::Clause {
            let node = NodeRef::with_hint(hint);
            MatchClause::new(Pattern::node(node.clone()))
                .where_clause(eq(node.property("year"), 2000i64))
                .into()
        };
        let first = build(&make("a"), "s0_").unwrap();
        let second = build(&make("b"), "s1_").unwrap();
        assert!(first.params.contains_key("s0_param0"));
        assert!(second.params.contains_key("s1_param0"));
        let keys: Vec<&String> = first.params.keys().chain(second.params.keys()).collect();
        assert_eq!(keys.len(), 2);
    }
}
