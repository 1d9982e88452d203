#[cfg(test)]
mod merge_scenario_tests {
    use cypherforge::clauses::{concat, MergeClause, ReturnClause};
    use cypherforge::pattern::NodePattern;
    use cypherforge::{build, Clause, NodeRef, Parameter, Pattern};
    use serde_json::json;

    /// Upsert by title, stamping the year only on creation.
    #[test]
    fn test_merge_with_on_create() {
        let movie = NodeRef::new().labeled(["Movie"]);
        let clause: Clause = MergeClause::new(Pattern::node(
            NodePattern::new(movie.clone()).property("title", Parameter::named("t1", "movie1")),
        ))
        .on_create_set(movie.property("year"), Parameter::named("y1", 2000i64))
        .unwrap()
        .into();
        let result = build(&clause, "").unwrap();
        assert_eq!(
            result.query,
            "MERGE (this:Movie { title: $t1 })\nON CREATE SET this.year = $y1"
        );
        assert_eq!(result.params.get("t1"), Some(&json!("movie1")));
        assert_eq!(result.params.get("y1"), Some(&json!(2000)));
        assert_eq!(result.params.len(), 2);
    }

    /// Merging a relationship between two matched-or-created nodes.
    #[test]
    fn test_merge_relationship_pattern() {
        use cypherforge::pattern::RelationshipPattern;
        use cypherforge::RelationshipRef;

        let person = NodeRef::with_hint("person").labeled(["Person"]);
        let movie = NodeRef::with_hint("movie").labeled(["Movie"]);
        let acted = RelationshipRef::new().typed(["ACTED_IN"]);
        let clause = concat([
            MergeClause::new(
                Pattern::node(person.clone()).related(
                    RelationshipPattern::outgoing(acted.clone())
                        .property("year", Parameter::named("ry", 1999i64)),
                    movie.clone(),
                ),
            )
            .into(),
            ReturnClause::new([person.into(), movie.into()])
                .unwrap()
                .into(),
        ]);
        let result = build(&clause, "").unwrap();
        assert_eq!(
            result.query,
            "MERGE (person:Person)-[rel:ACTED_IN { year: $ry }]->(movie:Movie)\nRETURN person, movie"
        );
        assert_eq!(result.params.get("ry"), Some(&json!(1999)));
    }

    /// Generated defaults overlapping an explicit assignment must fail
    /// as a conflict rather than silently preferring one side.
    #[test]
    fn test_generated_default_overlap_is_conflict() {
        let movie = NodeRef::new().labeled(["Movie"]);
        let merge = MergeClause::new(Pattern::node(
            NodePattern::new(movie.clone()).property("title", Parameter::named("t", "m")),
        ))
        // explicit input value
        .on_create_set(movie.property("createdAt"), Parameter::named("c", "2020"))
        .unwrap()
        // auto-generated timestamp default for the same field
        .on_create_set(movie.property("createdAt"), Parameter::named("now", "2026"));
        let err = merge.unwrap_err();
        assert_eq!(
            err,
            cypherforge::CypherBuilderError::ConflictingSetProperty("createdAt".into())
        );
        assert_eq!(err.kind(), cypherforge::ErrorKind::Conflict);
    }
}
