use super::*;
use crate::agent::AgentRequest;
use crate::oracle::Oracle;
use crate::relay::ClientId;
use crate::relay::Lobby;
use crate::state::GameState;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

/// Keys an agent-specification payload must carry, checked in this order.
pub const REQUIRED_AGENT_FIELDS: [&str; 3] = ["team_id", "strategy", "resources"];

/// Validates a raw agent payload and types it.
///
/// Presence of every required key is checked before any typing, so a
/// missing key is always reported by name.
pub fn parse_agent_request(body: serde_json::Value) -> Result<AgentRequest, Rejection> {
    let object = body.as_object().ok_or(Rejection::NotAnObject)?;
    if let Some(missing) = REQUIRED_AGENT_FIELDS
        .into_iter()
        .find(|key| !object.contains_key(*key))
    {
        return Err(Rejection::MissingField(missing));
    }
    serde_json::from_value(body).map_err(|e| Rejection::Malformed(e.to_string()))
}

pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "message": "AI Territory Game Backend is running" }))
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

pub async fn team_strategy(oracle: web::Data<Oracle>, game: web::Json<GameState>) -> impl Responder {
    let game = game.into_inner();
    log::info!("received team strategy request for team {}", game.team_id);
    if !game.team_id.is_canonical() {
        log::warn!("team {} is neither red nor blue, opposing it with red", game.team_id);
    }
    let plan = oracle.strategy(&game).await;
    log::info!(
        "generated strategy {} with focus on {}, leading with {}",
        plan.strategy,
        plan.focus,
        plan.lead().map_or_else(|| String::from("nothing"), |d| d.to_string())
    );
    HttpResponse::Ok().json(plan)
}

pub async fn agent_specification(
    oracle: web::Data<Oracle>,
    body: web::Json<serde_json::Value>,
) -> Result<HttpResponse, Rejection> {
    let request = parse_agent_request(body.into_inner())
        .inspect_err(|e| log::warn!("rejected agent specification request: {}", e))?;
    log::info!(
        "received agent specification request for team {} holding {} resources",
        request.team_id,
        request.resources.total()
    );
    let spec = oracle.agent(&request).await;
    log::info!("generated agent {} with priority {}", spec.role, spec.priority);
    Ok(HttpResponse::Ok().json(spec))
}

pub async fn enter(
    lobby: web::Data<Lobby>,
    path: web::Path<ClientId>,
    body: web::Payload,
    req: HttpRequest,
) -> impl Responder {
    let id = path.into_inner();
    match actix_ws::handle(&req, body) {
        Ok((response, session, stream)) => {
            lobby.into_inner().bridge(id, session, stream).await;
            response
        }
        Err(e) => {
            log::warn!("websocket handshake failed for client {}: {}", id, e);
            e.error_response()
        }
    }
}
