use crate::analytics::engine::{roster_index, EngineConfig};
use crate::analytics::tally::{average, rank_desc, Tally};
use log::info;
use shared::{ActionType, MatchRecord, PlayerRecord, ScorerEntry, ScorerSummary};
use std::collections::BTreeSet;

#[derive(Default)]
struct ScorerTally {
    team: String,
    goals: u32,
    matches: BTreeSet<usize>,
}

/// Goal tallies per player, joined with season totals from the roster.
pub fn analyze(matches: &[MatchRecord], players: &[PlayerRecord], config: &EngineConfig) -> ScorerSummary {
    info!("Analizando goleadores del torneo");

    let mut tally: Tally<ScorerTally> = Tally::new();
    let mut total_goals = 0u32;

    for (position, record) in matches.iter().enumerate() {
        for action in record.acciones.iter().filter(|a| a.is(&ActionType::Goal)) {
            if action.jugador.is_empty() || action.equipo.is_empty() {
                continue;
            }
            let entry = tally.upsert(&action.jugador);
            entry.team = action.equipo.clone();
            entry.goals += 1;
            entry.matches.insert(position);
            total_goals += 1;
        }
    }

    let roster = roster_index(players);
    let mut scorers: Vec<ScorerEntry> = tally
        .into_entries()
        .into_iter()
        .map(|(name, stats)| {
            let played = stats.matches.len() as u32;
            let profile = roster.get(name.as_str());
            ScorerEntry {
                goles_totales: profile.map(|p| p.goles).unwrap_or(0),
                overall: profile.map(|p| p.overall).unwrap_or(0),
                promedio_goles: average(f64::from(stats.goals), played),
                goles_torneo: stats.goals,
                partidos_jugados: played,
                pais: stats.team,
                nombre: name,
            }
        })
        .collect();
    rank_desc(&mut scorers, |s| s.goles_torneo);
    scorers.truncate(config.caps.scorers);

    info!("Total goles del torneo: {}", total_goals);
    ScorerSummary {
        total_goles_torneo: total_goals,
        promedio_goles_partido: average(f64::from(total_goals), matches.len() as u32),
        goleador_maximo: scorers.first().cloned(),
        top_goleadores: scorers,
    }
}
