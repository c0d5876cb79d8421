use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use tokio::sync::RwLock;

pub type ClientId = String;
/// Identifies one particular connection of a client. A reconnect under the
/// same id gets a fresh ticket, so a stale loop cannot evict its successor.
pub type Ticket = u64;

/// Live websocket sessions keyed by client id.
pub struct Lobby {
    sessions: RwLock<HashMap<ClientId, (Ticket, actix_ws::Session)>>,
    count: AtomicU64,
}

impl Default for Lobby {
    fn default() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            count: AtomicU64::new(1),
        }
    }
}

impl Lobby {
    /// Registers a session, replacing any earlier one under the same id.
    pub async fn connect(&self, id: &str, session: actix_ws::Session) -> Ticket {
        let ticket = self.count.fetch_add(1, Ordering::Relaxed);
        self.sessions
            .write()
            .await
            .insert(id.to_string(), (ticket, session))
            .map(|_| log::info!("client {} reconnected", id))
            .unwrap_or_else(|| log::info!("client {} connected", id));
        ticket
    }

    /// Removes the session if it is still the one registered under `ticket`.
    pub async fn disconnect(&self, id: &str, ticket: Ticket) -> bool {
        let mut sessions = self.sessions.write().await;
        match sessions.get(id) {
            Some((current, _)) if *current == ticket => {
                sessions.remove(id);
                log::info!("client {} disconnected", id);
                true
            }
            _ => false,
        }
    }

    /// Sends a text frame to a client. Unknown clients are ignored; a client
    /// whose socket has closed is dropped from the registry.
    pub async fn send(&self, id: &str, text: String) -> anyhow::Result<()> {
        let Some((ticket, mut session)) = self.sessions.read().await.get(id).cloned() else {
            return Ok(());
        };
        match session.text(text).await {
            Ok(()) => Ok(()),
            Err(_) => {
                self.disconnect(id, ticket).await;
                Err(anyhow::anyhow!("client {} is gone", id))
            }
        }
    }

    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Reply to an inbound frame: any well-formed JSON is acknowledged as a
    /// received game state.
    pub fn acknowledge(text: &str) -> String {
        match serde_json::from_str::<serde_json::Value>(text) {
            Ok(_) => serde_json::json!({ "message": "Received game state" }),
            Err(e) => {
                log::warn!("unparseable game state: {}", e);
                serde_json::json!({ "message": "Invalid game state" })
            }
        }
        .to_string()
    }

    /// Registers the client and spawns its read loop.
    pub async fn bridge(
        self: Arc<Self>,
        id: ClientId,
        mut session: actix_ws::Session,
        mut stream: actix_ws::MessageStream,
    ) {
        use futures::StreamExt;
        let ticket = self.connect(&id, session.clone()).await;
        actix_web::rt::spawn(async move {
            'sesh: loop {
                match stream.next().await {
                    Some(Ok(actix_ws::Message::Text(text))) => {
                        if self.send(&id, Self::acknowledge(&text)).await.is_err() {
                            break 'sesh;
                        }
                    }
                    Some(Ok(actix_ws::Message::Ping(bytes))) => {
                        if session.pong(&bytes).await.is_err() {
                            break 'sesh;
                        }
                    }
                    Some(Ok(actix_ws::Message::Close(_))) => break 'sesh,
                    Some(Err(_)) => break 'sesh,
                    None => break 'sesh,
                    _ => continue 'sesh,
                }
            }
            self.disconnect(&id, ticket).await;
            let _ = session.close(None).await;
        });
    }
}
