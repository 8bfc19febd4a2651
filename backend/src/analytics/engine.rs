use std::collections::HashMap;

use chrono::{DateTime, Utc};
use log::info;
use shared::{
    CountryRecord, MatchRecord, PlayerAnalytics, PlayerRecord, Result, SharedError,
    TournamentReport,
};

use crate::analytics::aggregators::{
    best_players, comebacks, discipline, highlights, home_away, injuries, referees, scorers,
    special_matches, stadiums, teams,
};
use crate::analytics::player::PlayerAnalyticsEngine;
use crate::analytics::visualization::{ChartSources, TournamentVisualization};

/// Core tournament statistics engine
#[derive(Clone, Default)]
pub struct TournamentStatsEngine {
    config: EngineConfig,
}

/// Tunables for the report aggregators
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Name reported in the report header
    pub tournament_name: String,
    pub thresholds: SpecialMatchThresholds,
    pub lookback: LookbackWindow,
    /// Number of placeholder referees matches are spread across
    pub referee_pool: usize,
    pub caps: ReportCaps,
    /// Max seconds between a pass and the goal or shot it set up
    pub assist_window_secs: i64,
}

/// Cut-offs for the special match lists
#[derive(Debug, Clone)]
pub struct SpecialMatchThresholds {
    /// Excitement index a match must exceed
    pub excitement: f64,
    /// Boring matches have fewer actions than this...
    pub boring_max_actions: u32,
    /// ...and at most this many goals
    pub boring_max_goals: u32,
    /// Aggression index a match must exceed
    pub aggression: u32,
    /// First minute that counts as a last-minute goal
    pub late_goal_minute: u32,
    /// Minimum goal margin for a blowout
    pub blowout_margin: u32,
}

/// How far back from a goal to look for the set piece that led to it
#[derive(Debug, Clone)]
pub struct LookbackWindow {
    pub actions: usize,
    pub seconds: i64,
}

/// Maximum entries kept in each ranked list
#[derive(Debug, Clone)]
pub struct ReportCaps {
    pub comeback_teams: usize,
    pub scorers: usize,
    pub best_players: usize,
    pub highlighted_matches: usize,
    pub stadiums: usize,
    pub injuries: usize,
    pub referees: usize,
    pub exciting: usize,
    pub boring: usize,
    pub aggressive: usize,
    pub late_winners: usize,
    pub blowouts: usize,
}

impl Default for SpecialMatchThresholds {
    fn default() -> Self {
        Self {
            excitement: 50.0,
            boring_max_actions: 200,
            boring_max_goals: 1,
            aggression: 20,
            late_goal_minute: 85,
            blowout_margin: 3,
        }
    }
}

impl Default for LookbackWindow {
    fn default() -> Self {
        Self {
            actions: 20,
            seconds: 30,
        }
    }
}

impl Default for ReportCaps {
    fn default() -> Self {
        Self {
            comeback_teams: 5,
            scorers: 10,
            best_players: 10,
            highlighted_matches: 5,
            stadiums: 10,
            injuries: 20,
            referees: 10,
            exciting: 10,
            boring: 10,
            aggressive: 10,
            late_winners: 15,
            blowouts: 15,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tournament_name: "Mundial".to_string(),
            thresholds: SpecialMatchThresholds::default(),
            lookback: LookbackWindow::default(),
            referee_pool: 20,
            caps: ReportCaps::default(),
            assist_window_secs: 30,
        }
    }
}

impl EngineConfig {
    pub fn with_tournament_name(name: impl Into<String>) -> Self {
        Self {
            tournament_name: name.into(),
            ..Self::default()
        }
    }
}

/// Roster lookup by player name. A later duplicate name replaces an earlier one.
pub(crate) fn roster_index(players: &[PlayerRecord]) -> HashMap<&str, &PlayerRecord> {
    players.iter().map(|p| (p.nombre.as_str(), p)).collect()
}

impl TournamentStatsEngine {
    /// Creates an engine with the default configuration
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Creates an engine with a custom configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Builds the full tournament report.
    ///
    /// `skipped` is the number of match documents dropped before they got here
    /// and `generated_at` is stamped as-is, so equal inputs give equal reports.
    pub fn tournament_report(
        &self,
        matches: &[MatchRecord],
        players: &[PlayerRecord],
        countries: &[CountryRecord],
        skipped: u32,
        generated_at: DateTime<Utc>,
    ) -> Result<TournamentReport> {
        if matches.is_empty() {
            return Err(SharedError::NotFound(
                "No se encontraron partidos en el historial".to_string(),
            ));
        }
        info!("Analizando {} partidos del torneo", matches.len());

        let config = &self.config;
        let remontadas = comebacks::analyze(matches, config);
        let goleadores = scorers::analyze(matches, players, config);
        let mejores_jugadores = best_players::analyze(matches, players, config);
        let equipos = teams::analyze(matches, countries);
        let disciplina = discipline::analyze(matches);
        let partidos_destacados = highlights::analyze(matches, config);
        let estadios = stadiums::analyze(matches, config);
        let local_visitante = home_away::analyze(matches, config);
        let lesiones = injuries::analyze(matches, config);
        let arbitros = referees::analyze(matches, config);
        let partidos_especiales = special_matches::analyze(matches, config);

        let graficas = TournamentVisualization::new().build(&ChartSources {
            matches,
            home_away: &local_visitante,
            scorers: &goleadores,
            teams: &equipos,
            discipline: &disciplina,
        });

        info!("Estadísticas del torneo generadas");
        Ok(TournamentReport {
            torneo: config.tournament_name.clone(),
            total_partidos: matches.len() as u32,
            total_equipos: countries.len() as u32,
            total_goles: matches.iter().map(MatchRecord::total_goals).sum(),
            remontadas,
            goleadores,
            mejores_jugadores,
            equipos,
            disciplina,
            partidos_destacados,
            estadios,
            local_visitante,
            lesiones,
            arbitros,
            partidos_especiales,
            graficas,
            fecha_generacion: generated_at,
            mensaje: "Estadísticas completas del torneo generadas exitosamente".to_string(),
            registros_omitidos: skipped,
        })
    }

    /// Analytics for one player over the matches they appear in.
    pub fn player_analytics(&self, player: &PlayerRecord, matches: &[MatchRecord]) -> PlayerAnalytics {
        PlayerAnalyticsEngine::new(&self.config).analyze(player, matches)
    }
}
