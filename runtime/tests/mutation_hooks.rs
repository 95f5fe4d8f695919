//! Ticket creation and server-confirmed mutations

use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use ticket_desk_client::{ApiError, ApiRequest, Method};
use ticket_desk_core::{TicketId, UserId};
use ticket_desk_runtime::{CreateTicketHook, HookError, Phase, TicketActions, TicketStore};
use ticket_desk_testing::{MockTransport, fixtures, init_test_tracing};

async fn seeded() -> (Arc<MockTransport>, TicketStore) {
    init_test_tracing();
    let store = TicketStore::default();
    store.set_tickets(fixtures::sample_tickets()).await;
    (Arc::new(MockTransport::new()), store)
}

fn create_hook(transport: &Arc<MockTransport>, store: &TicketStore) -> CreateTicketHook {
    let (tickets, _) = fixtures::services(transport);
    CreateTicketHook::new(tickets, store.clone())
}

fn actions(transport: &Arc<MockTransport>, store: &TicketStore) -> TicketActions {
    let (tickets, _) = fixtures::services(transport);
    TicketActions::new(tickets, store.clone())
}

#[tokio::test]
async fn create_adds_server_ticket_to_store() {
    let (transport, store) = seeded().await;
    transport.respond(
        Method::Post,
        "/tickets",
        json!({"id": 17, "description": "Write docs", "assigneeId": null, "completed": false}),
    );
    let hook = create_hook(&transport, &store);

    let created = hook.create_ticket("  Write docs  ").await;

    assert_eq!(created, Ok(fixtures::ticket(17, "Write docs")));
    assert_eq!(
        transport.calls(),
        vec![
            ApiRequest::new(Method::Post, "/tickets")
                .with_body(Some(json!({"description": "Write docs"})))
        ]
    );
    let ids: Vec<i64> = store.tickets().await.iter().map(|t| t.id.get()).collect();
    assert_eq!(ids, vec![1, 2, 17]);
    assert_eq!(hook.phase(), Phase::Succeeded);
    assert_eq!(hook.error(), None);
}

#[tokio::test]
async fn blank_description_never_reaches_transport() {
    let (transport, store) = seeded().await;
    let hook = create_hook(&transport, &store);

    let result = hook.create_ticket("   ").await;

    assert_eq!(
        result,
        Err(HookError::Validation(
            ticket_desk_core::ValidationError::EmptyDescription
        ))
    );
    assert_eq!(transport.call_count(), 0);
    assert_eq!(hook.error().as_deref(), Some("Description is required"));
    assert_eq!(store.tickets().await, fixtures::sample_tickets());
}

#[tokio::test]
async fn failed_create_keeps_error_until_reset() {
    let (transport, store) = seeded().await;
    transport.fail(
        Method::Post,
        "/tickets",
        ApiError::network("Failed to create ticket"),
    );
    let hook = create_hook(&transport, &store);

    let result = hook.create_ticket("Write docs").await;

    assert_eq!(
        result.map_err(|e| e.message()),
        Err("Failed to create ticket".to_string())
    );
    assert!(!hook.loading());
    assert_eq!(hook.error().as_deref(), Some("Failed to create ticket"));
    assert_eq!(store.tickets().await, fixtures::sample_tickets());

    hook.reset_error();

    assert_eq!(hook.error(), None);
    assert_eq!(hook.phase(), Phase::Idle);
}

#[tokio::test]
async fn create_reports_loading_while_in_flight() {
    let (transport, store) = seeded().await;
    transport.respond_after(
        Method::Post,
        "/tickets",
        Duration::from_millis(30),
        Ok(json!({"id": 3, "description": "Write docs"})),
    );
    let hook = create_hook(&transport, &store);

    let pending = tokio::spawn({
        let hook = hook.clone();
        async move { hook.create_ticket("Write docs").await }
    });
    let mut phases = hook.subscribe();
    let saw_loading = phases.wait_for(Phase::is_loading).await.is_ok();

    assert!(saw_loading);
    hook.reset_error();
    assert!(hook.loading());

    let created = pending.await.map(|r| r.map(|t| t.id));
    assert_eq!(created.ok(), Some(Ok(TicketId::new(3))));
    assert!(!hook.loading());
}

#[tokio::test]
async fn complete_and_uncomplete_patch_store_after_success() {
    let (transport, store) = seeded().await;
    transport
        .respond(Method::Put, "/tickets/1/complete", json!(null))
        .respond(Method::Delete, "/tickets/2/complete", json!(null));
    let actions = actions(&transport, &store);

    assert_eq!(actions.complete(TicketId::new(1)).await, Ok(()));
    assert_eq!(actions.uncomplete(TicketId::new(2)).await, Ok(()));

    let flags: Vec<bool> = store.tickets().await.iter().map(|t| t.completed).collect();
    assert_eq!(flags, vec![true, false]);
}

#[tokio::test]
async fn failed_mutation_leaves_store_untouched() {
    let (transport, store) = seeded().await;
    transport.fail(
        Method::Put,
        "/tickets/1/assign/1",
        ApiError::from_status(404, r#"{"message":"Ticket not found"}"#, "Not Found"),
    );
    let actions = actions(&transport, &store);

    let result = actions.assign(TicketId::new(1), UserId::new(1)).await;

    assert_eq!(
        result.map_err(|e| e.message().to_string()),
        Err("Ticket not found".to_string())
    );
    assert_eq!(store.tickets().await, fixtures::sample_tickets());
}

#[tokio::test]
async fn toggle_follows_stored_flag() {
    let (transport, store) = seeded().await;
    transport
        .respond(Method::Put, "/tickets/1/complete", json!(null))
        .respond(Method::Delete, "/tickets/2/complete", json!(null));
    let actions = actions(&transport, &store);

    assert_eq!(actions.toggle_complete(TicketId::new(1)).await, Ok(true));
    assert_eq!(actions.toggle_complete(TicketId::new(2)).await, Ok(false));

    let paths: Vec<(Method, String)> = transport
        .calls()
        .into_iter()
        .map(|r| (r.method, r.path))
        .collect();
    assert_eq!(
        paths,
        vec![
            (Method::Put, "/tickets/1/complete".to_string()),
            (Method::Delete, "/tickets/2/complete".to_string()),
        ]
    );
}

#[tokio::test]
async fn assign_and_unassign() {
    let (transport, store) = seeded().await;
    transport
        .respond(Method::Put, "/tickets/1/assign/1", json!(null))
        .respond(Method::Put, "/tickets/2/unassign", json!(null));
    let actions = actions(&transport, &store);

    assert_eq!(actions.assign(TicketId::new(1), UserId::new(1)).await, Ok(()));
    assert_eq!(actions.unassign(TicketId::new(2)).await, Ok(()));

    let assignees: Vec<Option<UserId>> =
        store.tickets().await.iter().map(|t| t.assignee_id).collect();
    assert_eq!(assignees, vec![Some(UserId::new(1)), None]);
}
