use crate::error::ApiError;
use crate::tournament::repository::TournamentRepository;
use crate::tournament::usecase::TournamentStatsUseCase;
use actix_web::{web, HttpResponse};

pub async fn tournament_report_handler<R>(
    usecase: web::Data<TournamentStatsUseCase<R>>,
) -> Result<HttpResponse, ApiError>
where
    R: TournamentRepository + 'static,
{
    let report = usecase.tournament_report().await.map_err(|e| {
        log::error!("Error generando estadísticas del torneo: {}", e);
        ApiError::from(e)
    })?;
    Ok(HttpResponse::Ok().json(report))
}

pub async fn player_analytics_handler<R>(
    path: web::Path<String>,
    usecase: web::Data<TournamentStatsUseCase<R>>,
) -> Result<HttpResponse, ApiError>
where
    R: TournamentRepository + 'static,
{
    let player_key = path.into_inner();
    if player_key.trim().is_empty() {
        return Err(ApiError::bad_request("Identificador de jugador vacío"));
    }

    let analytics = usecase.player_analytics(&player_key).await.map_err(|e| {
        log::error!("Error generando analítica del jugador {}: {}", player_key, e);
        ApiError::from(e)
    })?;
    Ok(HttpResponse::Ok().json(analytics))
}

/// Registers the statistics routes. The use case must be registered as app data.
pub fn configure_routes<R>(cfg: &mut web::ServiceConfig)
where
    R: TournamentRepository + 'static,
{
    cfg.service(
        web::scope("/api/estadisticas")
            .route("/torneo", web::get().to(tournament_report_handler::<R>))
            .route(
                "/jugador/{id}/analitica",
                web::get().to(player_analytics_handler::<R>),
            ),
    );
}
