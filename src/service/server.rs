use super::*;
use crate::config::Config;
use crate::relay::Lobby;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    pub async fn run(config: Config) -> Result<(), std::io::Error> {
        let oracle = web::Data::new(config.oracle());
        let lobby = web::Data::new(Lobby::default());
        let origins = config.origins.clone();
        log::info!(
            "starting backend on {} (fallback only: {})",
            config.bind,
            config.fallback_only
        );
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(cors(&origins))
                .app_data(oracle.clone())
                .app_data(lobby.clone())
                .configure(routes)
        })
        .workers(config.workers)
        .bind(config.bind.as_str())?
        .run()
        .await
    }
}

/// Route table, shared by the server and tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _| Rejection::Malformed(err.to_string()).into()),
    )
    .route("/", web::get().to(index))
    .route("/health", web::get().to(health))
    .route("/ws/{client_id}", web::get().to(enter))
    .service(
        web::scope("/api")
            .route("/team-strategy", web::post().to(team_strategy))
            .route("/agent-specification", web::post().to(agent_specification)),
    );
}

fn cors(origins: &[String]) -> Cors {
    origins
        .iter()
        .fold(Cors::default(), |cors, origin| match origin.as_str() {
            "*" => cors.allow_any_origin(),
            origin => cors.allowed_origin(origin),
        })
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}
