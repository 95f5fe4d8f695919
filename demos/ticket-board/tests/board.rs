//! Ticket board page behavior over a scripted transport

use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use ticket_board::{BoardView, Resource, TicketBoard};
use ticket_desk_client::{ApiClient, ApiError, Method};
use ticket_desk_core::{AssigneeFilter, StatusFilter, TicketId};
use ticket_desk_testing::{MockTransport, fixtures, init_test_tracing};

fn transport_with_board() -> Arc<MockTransport> {
    init_test_tracing();
    let transport = Arc::new(MockTransport::new());
    transport
        .respond(
            Method::Get,
            "/tickets",
            fixtures::tickets_json(&fixtures::sample_tickets()),
        )
        .respond(
            Method::Get,
            "/users",
            fixtures::users_json(&fixtures::sample_users()),
        );
    transport
}

async fn mounted(transport: &Arc<MockTransport>) -> TicketBoard {
    let board = TicketBoard::mount(ApiClient::new(transport.clone()));
    board.ready().await;
    board
}

fn ids(view: &BoardView) -> Vec<i64> {
    match view {
        BoardView::List(rows) => rows.iter().map(|r| r.ticket.id.get()).collect(),
        _ => Vec::new(),
    }
}

#[tokio::test]
async fn lists_tickets_with_assignees() {
    let transport = transport_with_board();
    let board = mounted(&transport).await;

    let view = board.render().await;

    assert_eq!(
        view.to_string(),
        "#1 Fix login bug [Pending] Unassigned\n\
         #2 Update user profile [Completed] Assigned to Alice"
    );
}

#[tokio::test]
async fn shows_ticket_loading_first() {
    init_test_tracing();
    let transport = Arc::new(MockTransport::new());
    transport
        .respond_after(
            Method::Get,
            "/tickets",
            Duration::from_millis(40),
            Ok(json!([])),
        )
        .respond(Method::Get, "/users", json!([]));

    let board = TicketBoard::mount(ApiClient::new(transport.clone()));

    assert_eq!(board.render().await, BoardView::Loading(Resource::Tickets));
    board.ready().await;
    assert_eq!(board.render().await, BoardView::Empty);
}

#[tokio::test]
async fn filters_combine() {
    let transport = transport_with_board();
    let mut board = mounted(&transport).await;

    board.set_search("USER");
    assert_eq!(ids(&board.render().await), vec![2]);

    board.set_search("");
    board.set_status(StatusFilter::Pending);
    assert_eq!(ids(&board.render().await), vec![1]);

    board.set_assignee(AssigneeFilter::Assigned);
    assert_eq!(board.render().await, BoardView::NoMatches);

    board.set_status(StatusFilter::All);
    assert_eq!(ids(&board.render().await), vec![2]);
}

#[tokio::test]
async fn ticket_error_offers_retry() {
    init_test_tracing();
    let transport = Arc::new(MockTransport::new());
    transport
        .fail(Method::Get, "/tickets", ApiError::network("Network Error"))
        .respond(
            Method::Get,
            "/tickets",
            fixtures::tickets_json(&fixtures::sample_tickets()),
        )
        .respond(
            Method::Get,
            "/users",
            fixtures::users_json(&fixtures::sample_users()),
        );
    let board = mounted(&transport).await;

    assert_eq!(
        board.render().await,
        BoardView::Error {
            resource: Resource::Tickets,
            message: "Network Error".to_string(),
        }
    );

    assert_eq!(board.retry().await, Some(Resource::Tickets));
    assert_eq!(ids(&board.render().await), vec![1, 2]);
    assert_eq!(board.retry().await, None);
}

#[tokio::test]
async fn user_error_is_reported_after_tickets() {
    init_test_tracing();
    let transport = Arc::new(MockTransport::new());
    transport
        .respond(Method::Get, "/tickets", json!([]))
        .fail(Method::Get, "/users", ApiError::network("Failed to fetch users"));
    let board = mounted(&transport).await;

    let view = board.render().await;

    assert_eq!(
        view.to_string(),
        "Error loading users\nFailed to fetch users\n[Try Again]"
    );
}

#[tokio::test]
async fn complete_button_toggles() {
    let transport = transport_with_board();
    transport
        .respond(Method::Put, "/tickets/1/complete", json!(null))
        .respond(Method::Delete, "/tickets/2/complete", json!(null));
    let board = mounted(&transport).await;

    assert_eq!(board.on_complete(TicketId::new(1)).await, Ok(true));
    assert_eq!(board.on_complete(TicketId::new(2)).await, Ok(false));

    let flags: Vec<bool> = board
        .stores()
        .tickets
        .tickets()
        .await
        .iter()
        .map(|t| t.completed)
        .collect();
    assert_eq!(flags, vec![true, false]);
}

#[tokio::test]
async fn edit_and_delete_only_log() {
    let transport = transport_with_board();
    let board = mounted(&transport).await;
    let calls_before = transport.call_count();

    board.on_edit(TicketId::new(1));
    board.on_delete(TicketId::new(1));

    assert_eq!(transport.call_count(), calls_before);
    assert_eq!(ids(&board.render().await), vec![1, 2]);
}

#[tokio::test]
async fn add_ticket_success_closes_form() {
    let transport = transport_with_board();
    transport.respond(
        Method::Post,
        "/tickets",
        json!({"id": 17, "description": "Write docs", "assigneeId": null, "completed": false}),
    );
    let mut board = mounted(&transport).await;

    let form = board.form_mut();
    form.open();
    form.set_description("  Write docs ");
    let created = form.submit().await.map(|t| t.id);

    assert_eq!(created, Ok(TicketId::new(17)));
    assert!(!board.form().is_open());
    assert_eq!(board.form().description(), "");
    assert_eq!(ids(&board.render().await), vec![1, 2, 17]);
}

#[tokio::test]
async fn blank_description_is_rejected_locally() {
    let transport = transport_with_board();
    let mut board = mounted(&transport).await;
    let calls_before = transport.call_count();

    let form = board.form_mut();
    form.open();
    form.set_description("   ");
    let result = form.submit().await;

    assert!(result.is_err());
    assert!(form.is_open());
    assert_eq!(form.error(), Some("Description is required"));
    assert_eq!(transport.call_count(), calls_before);
}

#[tokio::test]
async fn failed_add_keeps_form_open() {
    let transport = transport_with_board();
    transport.fail(
        Method::Post,
        "/tickets",
        ApiError::network("Failed to create ticket"),
    );
    let mut board = mounted(&transport).await;

    let form = board.form_mut();
    form.open();
    form.set_description("Write docs");
    let result = form.submit().await;

    assert!(result.is_err());
    assert!(form.is_open());
    assert_eq!(form.description(), "Write docs");
    assert_eq!(form.error(), Some("Failed to create ticket"));

    assert!(form.close());
    assert!(!form.is_open());
    assert_eq!(form.error(), None);
    assert_eq!(ids(&board.render().await), vec![1, 2]);
}
