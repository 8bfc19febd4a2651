//! Referee workload.
//!
//! Match histories carry no referee, so each match is assigned one of a fixed
//! pool of placeholder referees by its position in the input. Only the report
//! shape is meaningful until a real referee field exists.

use crate::analytics::engine::EngineConfig;
use crate::analytics::tally::{average, first_max_by_key, rank_desc, Tally};
use log::info;
use shared::{LineRefereeNote, MatchRecord, RefereeRecord, RefereesSummary};

#[derive(Default)]
struct Workload {
    matches: u32,
    yellows: u32,
    reds: u32,
}

/// Placeholder referee for the match at `position`.
pub fn synthetic_referee(position: usize, pool_size: usize) -> String {
    format!("Árbitro_{}", position % pool_size.max(1) + 1)
}

pub fn analyze(matches: &[MatchRecord], config: &EngineConfig) -> RefereesSummary {
    info!("Analizando estadísticas de árbitros");

    let mut workload: Tally<Workload> = Tally::new();
    for (position, record) in matches.iter().enumerate() {
        let referee = synthetic_referee(position, config.referee_pool);
        let entry = workload.upsert(&referee);
        entry.matches += 1;
        entry.yellows += record.yellow_card_tally();
        entry.reds += record.red_card_count();
    }

    let mut referees: Vec<RefereeRecord> = workload
        .into_entries()
        .into_iter()
        .map(|(nombre, w)| RefereeRecord {
            nombre,
            partidos_arbitrados: w.matches,
            amarillas_mostradas: w.yellows,
            rojas_mostradas: w.reds,
            promedio_amarillas: average(f64::from(w.yellows), w.matches),
            promedio_rojas: average(f64::from(w.reds), w.matches),
        })
        .collect();

    let busiest = first_max_by_key(&referees, |r| r.partidos_arbitrados).cloned();
    let most_yellows = first_max_by_key(&referees, |r| r.amarillas_mostradas).cloned();
    let most_reds = first_max_by_key(&referees, |r| r.rojas_mostradas).cloned();
    let total = referees.len() as u32;

    rank_desc(&mut referees, |r| r.partidos_arbitrados);
    referees.truncate(config.caps.referees);

    info!("Total árbitros analizados: {}", total);
    RefereesSummary {
        total_arbitros_principal: total,
        total_arbitros_linea: 0,
        arbitro_mas_partidos: busiest,
        arbitro_mas_amarillas: most_yellows,
        arbitro_mas_rojas: most_reds,
        arbitros_principales: referees,
        estadisticas_arbitros_linea: LineRefereeNote {
            mensaje: "Datos de árbitros de línea no disponibles en el historial actual".to_string(),
        },
    }
}
