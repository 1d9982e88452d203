#[cfg(test)]
mod batch_create_tests {
    use cypherforge::clauses::{concat, CreateClause, ReturnClause};
    use cypherforge::pattern::NodePattern;
    use cypherforge::{build, Clause, NodeRef, Parameter, Pattern};
    use serde_json::json;

    /// Build one sub-statement of a batch create. Each call owns fresh
    /// references, the way a translation layer emits one fragment per
    /// input list element.
    fn create_movie(title: &str) -> (Clause, NodeRef) {
        let movie = NodeRef::new().labeled(["Movie"]);
        let clause: Clause = CreateClause::new(Pattern::node(
            NodePattern::new(movie.clone()).property("title", Parameter::new(title)),
        ))
        .into();
        (clause, movie)
    }

    /// Two instances of a repeated sub-statement composed under one
    /// build must not clobber each other's variables or parameters.
    #[test]
    fn test_batch_instances_do_not_collide() {
        let (first, m0) = create_movie("movie1");
        let (second, m1) = create_movie("movie2");
        let clause = concat([
            first,
            second,
            ReturnClause::new([m0.into(), m1.into()]).unwrap().into(),
        ]);
        let result = build(&clause, "").unwrap();
        assert_eq!(
            result.query,
            "CREATE (this:Movie { title: $param0 })\n\
             CREATE (this0:Movie { title: $param1 })\n\
             RETURN this, this0"
        );
        assert_eq!(result.params.get("param0"), Some(&json!("movie1")));
        assert_eq!(result.params.get("param1"), Some(&json!("movie2")));
    }

    /// Host-map conversion feeds pattern properties in entry order.
    #[test]
    fn test_create_from_host_map() {
        use cypherforge::params::to_cypher_params;
        use serde_json::Value;

        let input = match json!({"title": "m", "year": 2000, "deleted": null}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        let movie = NodeRef::new().labeled(["Movie"]);
        let clause: Clause = CreateClause::new(Pattern::node(
            NodePattern::new(movie).properties(to_cypher_params(input)),
        ))
        .into();
        let result = build(&clause, "").unwrap();
        assert_eq!(
            result.query,
            "CREATE (this:Movie { title: $param0, year: $param1, deleted: NULL })"
        );
        assert_eq!(result.params.get("param0"), Some(&json!("m")));
        assert_eq!(result.params.get("param1"), Some(&json!(2000)));
        assert_eq!(result.params.len(), 2);
    }
}
