#[cfg(test)]
mod provider_integration_tests {
    use std::rc::Rc;

    use cypherforge::clauses::{concat, MatchClause, ProjectionItem, ReturnClause, WithClause};
    use cypherforge::expression::{eq, Expression};
    use cypherforge::pattern::RelationshipPattern;
    use cypherforge::providers::{
        apply_auth_filter, event_metadata_projection, AuthOperation, AuthPredicateProvider,
        EventMetadataProvider,
    };
    use cypherforge::{
        build, NodeRef, Parameter, Pattern, RelationshipRef, VariableRef,
    };
    use serde_json::json;

    struct RoleGate;

    impl AuthPredicateProvider for RoleGate {
        fn auth_predicate(
            &self,
            entity: &VariableRef,
            operations: &[AuthOperation],
        ) -> Option<Expression> {
            if operations.contains(&AuthOperation::Update) {
                Some(eq(
                    entity.property("ownerId"),
                    Parameter::named("auth_jwt_sub", "user-42"),
                ))
            } else {
                None
            }
        }
    }

    /// The provider's predicate and bindings flow into the built query.
    #[test]
    fn test_auth_predicate_merges_into_build() {
        let post = NodeRef::new().labeled(["Post"]);
        let entity: VariableRef = post.clone().into();
        let matched = apply_auth_filter(
            MatchClause::new(Pattern::node(post.clone()))
                .where_clause(eq(post.property("id"), Parameter::named("id", "p1"))),
            &entity,
            &[AuthOperation::Update],
            &RoleGate,
        );
        let clause = concat([
            matched.into(),
            ReturnClause::new([post.into()]).unwrap().into(),
        ]);
        let result = build(&clause, "").unwrap();
        assert_eq!(
            result.query,
            "MATCH (this:Post)\n\
             WHERE ((this.id = $id) AND (this.ownerId = $auth_jwt_sub))\n\
             RETURN this"
        );
        assert_eq!(result.params.get("auth_jwt_sub"), Some(&json!("user-42")));
        assert_eq!(result.params.get("id"), Some(&json!("p1")));
    }

    struct ConnectEvent;

    impl EventMetadataProvider for ConnectEvent {
        fn event_metadata(&self, relationship_name: &str, variable_name: &str) -> Option<String> {
            Some(format!(
                "{{ event: \"create_relationship\", id: id({}), toID: id({}) }}",
                relationship_name, variable_name
            ))
        }
    }

    /// Event metadata appends to a WITH projection using names already
    /// resolved by the environment.
    #[test]
    fn test_event_metadata_projection_in_with() {
        let user = NodeRef::new().labeled(["User"]);
        let group = NodeRef::with_hint("group").labeled(["Group"]);
        let member = RelationshipRef::new().typed(["MEMBER_OF"]);
        let meta = event_metadata_projection(
            &member,
            &VariableRef::from(group.clone()),
            Rc::new(ConnectEvent),
        );
        let clause = concat([
            MatchClause::new(
                Pattern::node(user.clone())
                    .related(RelationshipPattern::outgoing(member), group.clone()),
            )
            .into(),
            WithClause::new([
                ProjectionItem::new(user),
                ProjectionItem::new(meta),
            ])
            .unwrap()
            .into(),
        ]);
        let result = build(&clause, "").unwrap();
        assert_eq!(
            result.query,
            "MATCH (this:User)-[rel:MEMBER_OF]->(group:Group)\n\
             WITH this, { event: \"create_relationship\", id: id(rel), toID: id(group) }"
        );
    }
}
