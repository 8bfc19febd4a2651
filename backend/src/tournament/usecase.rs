use crate::analytics::engine::TournamentStatsEngine;
use crate::tournament::ingest::{ingest_countries, ingest_matches, ingest_players, parse_document};
use crate::tournament::repository::TournamentRepository;
use chrono::Utc;
use log::info;
use shared::{PlayerAnalytics, PlayerRecord, Result, SharedError, TournamentReport};

/// Reads the collections, types them and hands them to the engine.
#[derive(Clone)]
pub struct TournamentStatsUseCase<R: TournamentRepository> {
    repo: R,
    engine: TournamentStatsEngine,
}

impl<R: TournamentRepository> TournamentStatsUseCase<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            engine: TournamentStatsEngine::new(),
        }
    }

    pub fn with_engine(repo: R, engine: TournamentStatsEngine) -> Self {
        Self { repo, engine }
    }

    pub async fn tournament_report(&self) -> Result<TournamentReport> {
        info!("Iniciando análisis completo del torneo");

        let matches = ingest_matches(self.repo.finished_matches().await?);
        let players = ingest_players(self.repo.players().await?);
        let countries = ingest_countries(self.repo.countries().await?);
        info!(
            "Documentos cargados: {} partidos, {} jugadores, {} países ({} partidos omitidos)",
            matches.records.len(),
            players.records.len(),
            countries.records.len(),
            matches.skipped_count()
        );

        self.engine.tournament_report(
            &matches.records,
            &players.records,
            &countries.records,
            matches.skipped_count(),
            Utc::now(),
        )
    }

    pub async fn player_analytics(&self, player_key: &str) -> Result<PlayerAnalytics> {
        let document = self
            .repo
            .player_by_key(player_key)
            .await?
            .ok_or_else(|| SharedError::NotFound("Jugador no encontrado".to_string()))?;
        let player: PlayerRecord = parse_document(document)
            .map_err(|reason| SharedError::Validation(reason.to_string()))?;

        let matches = ingest_matches(
            self.repo
                .finished_matches_for_player(&player.nombre, player.team())
                .await?,
        );
        Ok(self.engine.player_analytics(&player, &matches.records))
    }
}
