use actix_web::{middleware::Logger, web, App, HttpServer};
use arangors::client::reqwest::ReqwestClient;
use backend::analytics::{EngineConfig, TournamentStatsEngine};
use backend::tournament::{configure_routes, ArangoTournamentRepository, TournamentStatsUseCase};
use log::error;

type Repository = ArangoTournamentRepository<ReqwestClient>;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Load configuration from environment variables
    let config = match backend::config::Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
        }
    };

    let conn = match arangors::Connection::establish_basic_auth(
        &config.database.url,
        &config.database.username,
        &config.database.password,
    )
    .await
    {
        Ok(conn) => conn,
        Err(e) => {
            error!("Failed to connect to ArangoDB: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e.to_string()));
        }
    };

    let db = match conn.db(&config.database.name).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to get ArangoDB database: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::NotFound, e.to_string()));
        }
    };

    let engine = TournamentStatsEngine::with_config(EngineConfig::with_tournament_name(
        config.tournament.name.clone(),
    ));
    let usecase = web::Data::new(TournamentStatsUseCase::with_engine(
        ArangoTournamentRepository::new(db),
        engine,
    ));

    log::info!("Starting server on {}:{}", config.server.host, config.server.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(usecase.clone())
            .configure(configure_routes::<Repository>)
    })
    .workers(config.server.workers)
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
