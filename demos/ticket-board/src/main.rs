//! Print the ticket board from the command line.
//!
//! ```text
//! ticket-board                      # every ticket
//! ticket-board login --status pending
//! ticket-board --add "Write docs"   # create, then print
//! ```
//!
//! The API location comes from `TICKET_DESK_API_URL`.

use clap::Parser;
use std::sync::Arc;
use ticket_board::{BoardView, TicketBoard};
use ticket_desk_client::{ApiClient, ClientConfig, HttpTransport};
use ticket_desk_core::{AssigneeFilter, StatusFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "ticket-board", version, about = "Show the ticket board")]
struct Cli {
    /// Only show tickets whose description contains this text
    search: Option<String>,

    /// Status filter: "All Status", "Completed" or "Pending"
    #[arg(long, default_value_t = StatusFilter::All)]
    status: StatusFilter,

    /// Assignee filter: "All Assignees", "Assigned" or "Unassigned"
    #[arg(long, default_value_t = AssigneeFilter::All)]
    assignee: AssigneeFilter,

    /// Create a ticket with this description before printing
    #[arg(long, value_name = "DESCRIPTION")]
    add: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    let config = ClientConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Connecting");
    let api = ApiClient::new(Arc::new(HttpTransport::new(config)?));

    let mut board = TicketBoard::mount(api);
    board.ready().await;

    if let Some(description) = cli.add {
        let form = board.form_mut();
        form.open();
        form.set_description(description);
        match form.submit().await {
            Ok(ticket) => println!("Created #{} {}\n", ticket.id, ticket.description),
            Err(error) => eprintln!("Could not create ticket: {error}\n"),
        }
    }

    if let Some(term) = cli.search {
        board.set_search(term);
    }
    board.set_status(cli.status);
    board.set_assignee(cli.assignee);

    let view = board.render().await;
    println!("{view}");

    if matches!(view, BoardView::Error { .. }) {
        std::process::exit(1);
    }
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ticket_board=info,ticket_desk_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}
