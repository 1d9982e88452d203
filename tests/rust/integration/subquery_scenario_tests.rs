#[cfg(test)]
mod subquery_scenario_tests {
    use cypherforge::clauses::{
        concat, CallClause, MatchClause, ProjectionItem, ReturnClause, UnionClause, UnionType,
        UnwindClause, WithClause,
    };
    use cypherforge::expression::{collect, count, eq};
    use cypherforge::pattern::RelationshipPattern;
    use cypherforge::{
        build, Clause, NodeRef, Parameter, Pattern, RelationshipRef, Variable,
    };
    use serde_json::json;

    /// Enclosing-scope variables cross the subquery boundary through
    /// the import WITH, keeping their names.
    #[test]
    fn test_call_imports_resolve_to_enclosing_names() {
        let person = NodeRef::new().labeled(["Person"]);
        let movie = NodeRef::with_hint("movie").labeled(["Movie"]);
        let acted = RelationshipRef::new().typed(["ACTED_IN"]);
        let titles = Variable::with_hint("titles");

        let inner = concat([
            MatchClause::new(
                Pattern::node(person.clone())
                    .related(RelationshipPattern::outgoing(acted), movie.clone()),
            )
            .into(),
            ReturnClause::new([ProjectionItem::aliased(
                collect(movie.property("title")),
                titles.clone(),
            )])
            .unwrap()
            .into(),
        ]);

        let clause = concat([
            MatchClause::new(Pattern::node(person.clone())).into(),
            CallClause::new(inner)
                .inner_with([person.clone().into()])
                .into(),
            ReturnClause::new([person.into(), titles.into()])
                .unwrap()
                .into(),
        ]);

        let result = build(&clause, "").unwrap();
        assert_eq!(
            result.query,
            "MATCH (this:Person)\n\
             CALL {\n\
             \x20   WITH this\n\
             \x20   MATCH (this:Person)-[rel:ACTED_IN]->(movie:Movie)\n\
             \x20   RETURN collect(movie.title) AS titles\n\
             }\n\
             RETURN this, titles"
        );
    }

    /// UNWIND binds per-row variables that flow into later clauses.
    #[test]
    fn test_unwind_with_aggregation_pipeline() {
        let row = Variable::with_hint("row");
        let total = Variable::with_hint("total");
        let clause = concat([
            UnwindClause::new(Parameter::named("rows", json!([1, 2, 3])), row.clone()).into(),
            WithClause::new([ProjectionItem::aliased(count(row), total.clone())])
                .unwrap()
                .into(),
            ReturnClause::new([total.into()]).unwrap().into(),
        ]);
        let result = build(&clause, "").unwrap();
        assert_eq!(
            result.query,
            "UNWIND $rows AS row\nWITH count(row) AS total\nRETURN total"
        );
        assert_eq!(result.params.get("rows"), Some(&json!([1, 2, 3])));
    }

    /// Branches of a UNION render under one shared environment, so
    /// their variables stay distinct.
    #[test]
    fn test_union_branches_share_environment() {
        let make_branch = |label: &str| -> Clause {
            let node = NodeRef::new().labeled([label]);
            concat([
                MatchClause::new(Pattern::node(node.clone())).into(),
                ReturnClause::new([ProjectionItem::new(node.property("name"))])
                    .unwrap()
                    .into(),
            ])
        };
        let union: Clause = UnionClause::new(
            vec![make_branch("Person"), make_branch("Company")],
            UnionType::All,
        )
        .unwrap()
        .into();
        let result = build(&union, "").unwrap();
        assert_eq!(
            result.query,
            "MATCH (this:Person)\nRETURN this.name\nUNION ALL\nMATCH (this0:Company)\nRETURN this0.name"
        );
    }

    /// A filter on an imported variable inside the subquery renders
    /// against the enclosing name.
    #[test]
    fn test_subquery_filter_on_imported_variable() {
        let user = NodeRef::with_hint("user").labeled(["User"]);
        let post = NodeRef::with_hint("post").labeled(["Post"]);
        let wrote = RelationshipRef::new().typed(["WROTE"]);

        let inner = concat([
            MatchClause::new(
                Pattern::node(post.clone())
                    .related(RelationshipPattern::incoming(wrote), user.clone()),
            )
            .where_clause(eq(user.property("active"), true))
            .into(),
            ReturnClause::new([post.clone().into()]).unwrap().into(),
        ]);

        let clause = concat([
            MatchClause::new(Pattern::node(user.clone())).into(),
            CallClause::new(inner)
                .inner_with([user.clone().into()])
                .into(),
            ReturnClause::new([post.into()]).unwrap().into(),
        ]);
        let result = build(&clause, "").unwrap();
        assert_eq!(
            result.query,
            "MATCH (user:User)\n\
             CALL {\n\
             \x20   WITH user\n\
             \x20   MATCH (post:Post)<-[rel:WROTE]-(user:User)\n\
             \x20   WHERE (user.active = $param0)\n\
             \x20   RETURN post\n\
             }\n\
             RETURN post"
        );
        assert_eq!(result.params.get("param0"), Some(&json!(true)));
    }
}
