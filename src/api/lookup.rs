use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use color_core::{AutocompleteSession, NameCatalog};
use std::sync::Arc;

/// Incremental color-name search over a WebSocket
///
/// Send the search text as a text message after every keystroke. Each
/// message of two or more characters is answered with a JSON array of
/// `{"name", "hex"}` objects; shorter messages get no reply.
#[utoipa::path(
    get,
    path = "/lookup",
    responses(
        (status = 101, description = "Switching to the WebSocket protocol"),
        (status = 400, description = "Not a WebSocket upgrade request"),
    ),
    tag = "Lookup"
)]
pub async fn handle_lookup(
    State(names): State<Arc<NameCatalog>>,
    ws: WebSocketUpgrade,
) -> Response {
    ws.on_upgrade(move |socket| run_session(socket, names))
}

/// Drive one connection. The session lives and dies with this task, so
/// queries are applied strictly in arrival order.
async fn run_session(mut socket: WebSocket, names: Arc<NameCatalog>) {
    let mut session = AutocompleteSession::new();
    tracing::debug!("Lookup session opened");

    while let Some(message) = socket.recv().await {
        let query = match message {
            Ok(Message::Text(text)) => text,
            Ok(Message::Close(_)) => break,
            Ok(_) => continue,
            Err(e) => {
                tracing::debug!(%e, "Lookup socket read failed");
                break;
            }
        };

        let Some(result) = session.submit(&names, &query) else {
            continue;
        };
        tracing::debug!(query = %query, matches = result.len(), "Lookup query");

        let payload = match serde_json::to_string(result) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(%e, "Failed to serialize lookup result");
                continue;
            }
        };

        if let Err(e) = socket.send(Message::Text(payload)).await {
            tracing::debug!(%e, "Lookup socket write failed");
            break;
        }
    }

    tracing::debug!(last_query = session.last_query(), "Lookup session closed");
}
