use crate::analytics::engine::{roster_index, EngineConfig};
use crate::analytics::tally::{rank_desc, Tally};
use log::info;
use shared::{
    ActionType, BestPlayerEntry, BestPlayersSummary, FeaturedAttributes, Importance, MatchRecord,
    PlayerRecord,
};
use std::collections::BTreeSet;

#[derive(Default)]
struct Participation {
    matches: BTreeSet<usize>,
    goals: u32,
    critical_actions: u32,
}

/// Roster players who took part in the tournament, ranked by overall rating.
pub fn analyze(
    matches: &[MatchRecord],
    players: &[PlayerRecord],
    config: &EngineConfig,
) -> BestPlayersSummary {
    info!("Analizando mejores jugadores del torneo");

    let mut participants: Tally<Participation> = Tally::new();
    for (position, record) in matches.iter().enumerate() {
        for action in record.acciones.iter().filter(|a| !a.jugador.is_empty()) {
            let entry = participants.upsert(&action.jugador);
            entry.matches.insert(position);
            if action.is(&ActionType::Goal) {
                entry.goals += 1;
            }
            if action.importancia == Importance::Critical {
                entry.critical_actions += 1;
            }
        }
    }

    let roster = roster_index(players);
    let mut ranked: Vec<BestPlayerEntry> = participants
        .iter()
        .filter_map(|(name, stats)| {
            // players without a rating are not real roster entries
            let profile = roster.get(name).filter(|p| p.overall > 0)?;
            Some(BestPlayerEntry {
                nombre: name.to_string(),
                pais: profile.pais.clone().unwrap_or_else(|| "N/A".to_string()),
                overall: profile.overall,
                goles: stats.goals,
                acciones_criticas: stats.critical_actions,
                rendimiento_promedio: profile.rendimiento,
                partidos_jugados: stats.matches.len() as u32,
                forma_actual: profile.forma_actual,
                atributos_destacados: FeaturedAttributes {
                    precision_tiro: profile.precision_tiro,
                    velocidad: profile.velocidad,
                    fuerza_disparo: profile.fuerza_disparo,
                    regate: profile.regate,
                    vision_juego: profile.vision_juego,
                },
            })
        })
        .collect();
    rank_desc(&mut ranked, |p| p.overall);

    let evaluated = ranked.len() as u32;
    ranked.truncate(config.caps.best_players);
    info!("Total jugadores analizados: {}", evaluated);

    BestPlayersSummary {
        criterio_evaluacion: "Overall, goles y rendimiento en el torneo".to_string(),
        total_jugadores_evaluados: evaluated,
        mejor_jugador_general: ranked.first().cloned(),
        top_jugadores: ranked,
    }
}
