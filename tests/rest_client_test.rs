/// Integration tests for the REST adapter against a local stub backend
mod test_utilities;

use approval_hierarchy::prelude::*;
use serde_json::json;
use std::collections::BTreeMap;
use test_utilities::stub_backend::StubBackend;

fn client(backend: &StubBackend) -> RestHierarchyClient {
    RestHierarchyClient::new(RestClientConfig::new(backend.base_url())).unwrap()
}

fn import_scope() -> ContextKey {
    ContextKey::from_pairs(
        HierarchyModule::ImportPayment,
        [("importTypeId", "LC"), ("scopeId", "S 1")],
    )
    .unwrap()
}

#[tokio::test]
async fn test_fetch_hierarchy_sends_context_as_query() {
    let backend = StubBackend::builder()
        .route(
            "GET",
            "/import-payment/hierarchy",
            200,
            json!({
                "approvalTypeId": 17,
                "steps": [
                    { "_id": "s-1", "level": 1, "approverIds": ["u1", "u2"], "status": true },
                    { "id": 42, "level": 3, "approverIds": [], "status": false }
                ]
            }),
        )
        .start();

    let snapshot = client(&backend)
        .fetch_hierarchy(&import_scope())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(snapshot.approval_type_id, "17");
    assert_eq!(snapshot.steps.len(), 2);
    assert_eq!(snapshot.steps[0].backing_id.as_deref(), Some("s-1"));
    assert_eq!(
        snapshot.steps[0].approver_ids,
        vec![ApproverId::new("u1"), ApproverId::new("u2")]
    );
    assert_eq!(snapshot.steps[1].backing_id.as_deref(), Some("42"));
    assert!(!snapshot.steps[1].active);

    let request = &backend.requests()[0];
    assert_eq!(request.method, "GET");
    assert_eq!(request.query(), Some("importTypeId=LC&scopeId=S%201"));
}

#[tokio::test]
async fn test_missing_hierarchy_is_not_an_error() {
    let backend = StubBackend::builder()
        .route("GET", "/jvm/hierarchy", 200, json!({ "steps": [] }))
        .start();
    let key = ContextKey::from_pairs(HierarchyModule::Jvm, [("requesterId", "r1")]).unwrap();

    assert!(client(&backend).fetch_hierarchy(&key).await.unwrap().is_none());

    // unknown route answers 404
    let other = ContextKey::from_pairs(HierarchyModule::CustomDuty, [("companyId", "C1")]).unwrap();
    assert!(client(&backend)
        .fetch_hierarchy(&other)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_fetch_approvers_maps_directory() {
    let backend = StubBackend::builder()
        .route(
            "GET",
            "/custom-duty/approvers",
            200,
            json!({
                "approvers": [
                    { "id": "u1", "username": "alice", "email": "alice@example.com" },
                    { "id": 7, "username": "bob" }
                ]
            }),
        )
        .start();
    let key = ContextKey::from_pairs(HierarchyModule::CustomDuty, [("companyId", "C1")]).unwrap();

    let approvers = client(&backend).fetch_approvers(&key).await.unwrap();

    assert_eq!(approvers.len(), 2);
    assert_eq!(approvers[0].display_name(), "alice");
    assert_eq!(approvers[0].email(), Some("alice@example.com"));
    assert_eq!(approvers[1].identity(), &ApproverId::new("7"));
    assert_eq!(backend.requests()[0].query(), Some("companyId=C1"));
}

#[tokio::test]
async fn test_status_update_puts_single_level() {
    let backend = StubBackend::builder()
        .route("PUT", "/jvm/hierarchy/status", 200, json!({ "ok": true }))
        .start();

    let update = LevelStatusUpdate {
        module: HierarchyModule::Jvm,
        approval_type_id: "at-1".to_string(),
        level: 2,
        status: false,
    };
    client(&backend).update_level_status(&update).await.unwrap();

    let request = &backend.mutations()[0];
    assert_eq!(request.method, "PUT");
    assert_eq!(request.path(), "/jvm/hierarchy/status");
    assert_eq!(request.json(), json!({ "id": "at-1", "level": 2, "status": false }));
}

#[tokio::test]
async fn test_bulk_save_posts_create_and_puts_update() {
    let backend = StubBackend::builder()
        .route("POST", "/jvm/hierarchy", 201, json!({}))
        .route("PUT", "/jvm/hierarchy", 200, json!({}))
        .start();
    let client = client(&backend);

    let mut request = BulkUpdateRequest {
        module: HierarchyModule::Jvm,
        context: BTreeMap::from([("requesterId".to_string(), "r1".to_string())]),
        approval_type_id: None,
        steps: vec![],
    };
    client.save_hierarchy(&request).await.unwrap();

    request.approval_type_id = Some("at-1".to_string());
    client.save_hierarchy(&request).await.unwrap();

    let mutations = backend.mutations();
    assert_eq!(mutations[0].method, "POST");
    assert_eq!(mutations[0].json(), json!({ "requesterId": "r1", "steps": [] }));
    assert_eq!(mutations[1].method, "PUT");
    assert_eq!(
        mutations[1].json(),
        json!({ "requesterId": "r1", "approvalTypeId": "at-1", "steps": [] })
    );
}

#[tokio::test]
async fn test_error_payload_message_is_surfaced() {
    let backend = StubBackend::builder()
        .route(
            "PUT",
            "/jvm/hierarchy/status",
            409,
            json!({ "error": { "message": "Level is locked" } }),
        )
        .start();

    let update = LevelStatusUpdate {
        module: HierarchyModule::Jvm,
        approval_type_id: "at-1".to_string(),
        level: 1,
        status: true,
    };
    let err = client(&backend)
        .update_level_status(&update)
        .await
        .unwrap_err();

    match err.downcast_ref::<HierarchyError>() {
        Some(HierarchyError::Backend { status, message }) => {
            assert_eq!(*status, 409);
            assert_eq!(message.as_deref(), Some("Level is locked"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_bearer_token_and_endpoint_overrides() {
    let backend = StubBackend::builder()
        .route("GET", "/imt/users", 200, json!({ "approvers": [] }))
        .start();

    let endpoints = EndpointCatalog::new().with_override(
        HierarchyModule::ImportPayment,
        ModuleEndpoints {
            directory: "/imt/users".to_string(),
            ..ModuleEndpoints::default_for(HierarchyModule::ImportPayment)
        },
    );
    let client = RestHierarchyClient::new(RestClientConfig {
        bearer_token: Some("secret-token".to_string()),
        endpoints,
        ..RestClientConfig::new(backend.base_url())
    })
    .unwrap();

    client.fetch_approvers(&import_scope()).await.unwrap();

    let request = &backend.requests()[0];
    assert_eq!(request.path(), "/imt/users");
    assert_eq!(request.header("authorization"), Some("Bearer secret-token"));
    assert!(request
        .header("user-agent")
        .unwrap()
        .starts_with("approval-hierarchy/"));
}

#[tokio::test]
async fn test_use_case_round_trip_over_http() {
    let backend = StubBackend::builder()
        .route(
            "GET",
            "/custom-duty/approvers",
            200,
            json!({ "approvers": [{ "id": "u1", "username": "alice" }] }),
        )
        .route(
            "GET",
            "/custom-duty/hierarchy",
            200,
            json!({
                "approvalTypeId": "at-cd",
                "steps": [{ "level": 2, "approverIds": ["u1"], "status": false }]
            }),
        )
        .route("PUT", "/custom-duty/hierarchy", 200, json!({}))
        .start();
    let client = client(&backend);

    let mut use_case = EditHierarchyUseCase::new(
        HierarchyProfile::for_module(HierarchyModule::CustomDuty),
        CachingApproverDirectory::new(client.clone()),
        client,
        AutoConfirm,
        StderrStatusReporter::quiet(),
    )
    .unwrap();
    let key = ContextKey::from_pairs(HierarchyModule::CustomDuty, [("companyId", "C1")]).unwrap();
    use_case.switch_context(key).await.unwrap();

    let model = use_case.read_model();
    assert!(model.configured);
    assert_eq!(model.levels[1].approvers[0].display_name, "alice");
    assert!(!model.levels[1].active);

    use_case.set_approvers(1, vec![ApproverId::new("u1")]).unwrap();
    assert_eq!(use_case.save_all().await.unwrap(), MutationOutcome::Completed);

    let save = &backend.mutations()[0];
    assert_eq!(save.method, "PUT");
    assert_eq!(
        save.json(),
        json!({
            "companyId": "C1",
            "approvalTypeId": "at-cd",
            "steps": [
                { "level": 1, "approverIds": ["u1"], "status": true },
                { "level": 2, "approverIds": ["u1"], "status": false }
            ]
        })
    );
}

#[tokio::test]
async fn test_malformed_step_does_not_hide_configured_hierarchy() {
    let backend = StubBackend::builder()
        .route(
            "GET",
            "/jvm/approvers",
            200,
            json!({ "approvers": [{ "id": "u1", "username": "alice" }] }),
        )
        .route(
            "GET",
            "/jvm/hierarchy",
            200,
            json!({
                "approvalTypeId": "at-jvm",
                "steps": [
                    { "level": 2, "approverId": "u1", "status": false },
                    { "level": "second", "approverId": "u2", "status": true }
                ]
            }),
        )
        .route("PUT", "/jvm/hierarchy/status", 200, json!({}))
        .start();
    let client = client(&backend);

    let mut use_case = EditHierarchyUseCase::new(
        HierarchyProfile::for_module(HierarchyModule::Jvm),
        CachingApproverDirectory::new(client.clone()),
        client,
        AutoConfirm,
        StderrStatusReporter::quiet(),
    )
    .unwrap();
    let key = ContextKey::from_pairs(HierarchyModule::Jvm, [("requesterId", "r1")]).unwrap();
    use_case.switch_context(key).await.unwrap();

    let model = use_case.read_model();
    assert!(model.configured);
    assert_eq!(model.levels.len(), 3);
    assert_eq!(model.levels[1].approvers[0].display_name, "alice");
    assert!(!model.levels[1].active);

    assert_eq!(
        use_case.toggle_active(2).await.unwrap(),
        MutationOutcome::Completed
    );

    let toggle = &backend.mutations()[0];
    assert_eq!(toggle.path(), "/jvm/hierarchy/status");
    assert_eq!(
        toggle.json(),
        json!({ "id": "at-jvm", "level": 2, "status": true })
    );
}
