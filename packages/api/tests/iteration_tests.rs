//! Iteration tests
//!
//! `iterate_each` visits array elements and object property values in
//! order, skipping nulls, and moves the session's current context onto each
//! element before the visitor runs.

use respcheck::{ValidationError, ValidationSession, ValidationStatus, display_path};
use serde_json::{Value, json};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_properties_in_insertion_order() {
        init_logging();
        let mut session = ValidationSession::from_json(r#"{"x":1,"y":2}"#).expect("json");
        let root = session.root().expect("root");

        let mut seen: Vec<Value> = Vec::new();
        session
            .iterate_each(&root, |session, item| {
                assert_eq!(session.current()?.value(), item.value());
                seen.push(item.value().clone());
                Ok(())
            })
            .expect("iterate");

        assert_eq!(seen, vec![json!(1), json!(2)]);
    }

    #[test]
    fn test_insertion_order_is_not_alphabetical() {
        init_logging();
        let mut session = ValidationSession::from_json(r#"{"zeta":1,"alpha":2,"mid":3}"#)
            .expect("json");
        let root = session.root().expect("root");

        let mut paths = Vec::new();
        session
            .iterate_each(&root, |_, item| {
                paths.push(item.path().to_string());
                Ok(())
            })
            .expect("iterate");

        assert_eq!(paths, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_array_elements_skip_nulls() {
        init_logging();
        let mut session = ValidationSession::from_node(json!({"items": [1, null, 3]}));
        let root = session.root().expect("root");
        let items = session.navigate_into(&root, "items").expect("items");

        let mut paths = Vec::new();
        session
            .iterate_each(&items, |session, item| {
                paths.push(session.current()?.path().to_string());
                assert!(!item.value().is_null());
                Ok(())
            })
            .expect("iterate");

        assert_eq!(paths, vec!["items[0]", "items[2]"]);
    }

    #[test]
    fn test_object_null_values_are_skipped() {
        init_logging();
        let mut session = ValidationSession::from_node(json!({"a": null, "b": {"k": 1}}));
        let root = session.root().expect("root");

        let mut count = 0;
        session
            .iterate_each(&root, |_, _| {
                count += 1;
                Ok(())
            })
            .expect("iterate");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_dotted_property_names_are_kept_verbatim() {
        init_logging();
        let mut session = ValidationSession::from_node(json!({"v1.2": {"status": "ok"}}));
        let root = session.root().expect("root");

        let mut paths = Vec::new();
        session
            .iterate_each(&root, |_, item| {
                paths.push(item.path().to_string());
                Ok(())
            })
            .expect("iterate");
        assert_eq!(paths, vec!["v1.2"]);
        assert_eq!(display_path("v1.2", 1), "2");
    }

    #[test]
    fn test_scalars_have_no_elements() {
        init_logging();
        let mut session = ValidationSession::from_node(json!({"n": 5}));
        let root = session.root().expect("root");
        let n = session.navigate_into(&root, "n").expect("n");

        let mut visited = false;
        session
            .iterate_each(&n, |_, _| {
                visited = true;
                Ok(())
            })
            .expect("iterate");
        assert!(!visited);
    }

    #[test]
    fn test_compare_each_element_against_expected() {
        init_logging();
        let mut session = ValidationSession::from_json(
            r#"{
                "expected": [{"sku": "A", "qty": 2}, {"sku": "B", "qty": 5}],
                "actual":   [{"sku": "B", "qty": 4}, {"sku": "A", "qty": 2}]
            }"#,
        )
        .expect("json");
        let root = session.root().expect("root");
        let expected = session.navigate_into(&root, "expected").expect("expected");

        session
            .iterate_each(&expected, |session, item| {
                let sku: String = session.get(item, "sku")?.unwrap_or_default();
                let root = session.root()?;
                session.navigate_into(&root, &format!("actual[@.sku=={sku}]"))?;
                session
                    .expect::<i64>(item, "qty")?
                    .equals_path(session, "qty")?
                    .validate(session)?;
                Ok(())
            })
            .expect("iterate");

        let validations = session.validations();
        assert_eq!(validations.len(), 2);
        assert_eq!(validations["expected[0].qty"].status, ValidationStatus::Pass);
        assert_eq!(validations["expected[1].qty"].status, ValidationStatus::Fail);
        assert_eq!(
            validations["expected[1].qty"].message,
            "Expected expected[1].qty (5) is not equal to actual[0].qty (4)"
        );
    }

    #[test]
    fn test_nested_iteration_shares_current_context() {
        init_logging();
        let mut session = ValidationSession::from_node(json!({
            "groups": [
                {"members": [{"id": 1}, {"id": 2}]},
                {"members": [{"id": 3}]}
            ]
        }));
        let root = session.root().expect("root");
        let groups = session.navigate_into(&root, "groups").expect("groups");

        let mut after_inner = Vec::new();
        session
            .iterate_each(&groups, |session, group| {
                let members = group.locate("members").expect("members");
                session.iterate_each(&members, |_, _| Ok(()))?;
                after_inner.push(session.current()?.path().to_string());
                Ok(())
            })
            .expect("iterate");

        // The outer element is not restored once the inner loop finishes.
        assert_eq!(
            after_inner,
            vec!["groups[0].members[1]", "groups[1].members[0]"]
        );
    }

    #[test]
    fn test_visitor_error_stops_iteration() {
        init_logging();
        let mut session = ValidationSession::from_node(json!([{"k": 1}, {"j": 2}, {"k": 3}]));
        let root = session.root().expect("root");

        let mut visits = 0;
        let err = session
            .iterate_each(&root, |session, item| {
                visits += 1;
                session.navigate_into(item, "k")?;
                Ok(())
            })
            .unwrap_err();

        assert!(matches!(err, ValidationError::NotFound { .. }));
        assert_eq!(visits, 2);
        assert_eq!(err.to_string(), "No node found at path: [1].k");
    }
}
