pub mod models {
    pub mod lenient;
    pub mod match_history;
    pub mod player;
    pub mod country;
}

pub mod dto {
    pub mod charts;
    pub mod tournament;
    pub mod player_analytics;
}

pub mod error;

// Re-export commonly used items
pub use error::{SharedError, Result};

// Re-export models
pub use models::{
    match_history::{
        Action, ActionStats, ActionType, CardDetail, Importance, InjuryEntry, MatchInjuries,
        MatchRecord, MatchVenue, Sector, Side, DRAW,
    },
    player::PlayerRecord,
    country::CountryRecord,
};

// Re-export DTOs
pub use dto::{
    charts::{Chart, ChartDataset, ChartType, ColorSpec, TournamentCharts},
    tournament::{
        AggressiveMatch, AttendanceMark, BestPlayerEntry, BestPlayersSummary, Blowout,
        BlowoutCategory, BoringMatch, ComebackMatch, ComebackSummary, ComebackTeam,
        DisciplineSummary, ExcitingMatch, FeaturedAttributes, GoalTypeBreakdown,
        HighlightedMatch, HighlightsSummary, HomeAwaySummary, InjuredPlayer, InjuriesSummary,
        LateWinner, LineRefereeNote, PlayerCards, RefereeRecord, RefereesSummary, ScorerEntry,
        ScorerSummary, SpecialMatchTotals, SpecialMatchesSummary, StadiumRecord,
        StadiumsSummary, TeamCards, TeamInjuries, TeamRecord, TeamsSummary, TournamentReport,
    },
    player_analytics::{
        AdvancedBlock, DescriptiveBlock, PlayerAnalytics, PredictiveBlock, PressurePrecision,
        SeasonTotals,
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_match_record_creation() {
        let record: MatchRecord = serde_json::from_value(json!({
            "_id": "historial/1",
            "equipo_local": "Brasil",
            "equipo_visitante": "Croacia",
            "goles_local": 1,
            "goles_visitante": 1,
            "ganador": "Empate",
            "asistencia": 45000,
            "ubicacion": {"estadio": "Education City", "ciudad": "Al Rayyan"}
        }))
        .unwrap();

        assert!(record.is_draw());
        assert_eq!(record.winner_side(), None);
        assert_eq!(record.score_line(), "1-1");
        assert_eq!(record.stadium(), "Education City");
    }

    #[test]
    fn test_player_record_creation() {
        let player: PlayerRecord = serde_json::from_value(json!({
            "_id": "jugadores/10",
            "nombre": "Modrić",
            "pais": "Croacia",
            "overall": 88
        }))
        .unwrap();

        assert_eq!(player.team(), "Croacia");
        assert_eq!(player.key(), "jugadores/10");
        assert_eq!(player.overall, 88);
    }
}
