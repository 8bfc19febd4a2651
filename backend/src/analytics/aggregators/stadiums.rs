use crate::analytics::engine::EngineConfig;
use crate::analytics::tally::{average, first_max_by_key, rank_desc, Tally};
use log::info;
use shared::{MatchRecord, StadiumRecord, StadiumsSummary};

#[derive(Default)]
struct VenueTally {
    city: String,
    matches: u32,
    goals: u32,
    attendance: u64,
}

/// Per-venue match, goal and attendance totals.
pub fn analyze(matches: &[MatchRecord], config: &EngineConfig) -> StadiumsSummary {
    info!("Analizando estadísticas de estadios");

    let mut venues: Tally<VenueTally> = Tally::new();
    for record in matches {
        let stadium = record.ubicacion.estadio.as_deref().unwrap_or("Desconocido");
        let entry = venues.upsert(stadium);
        entry.city = record
            .ubicacion
            .ciudad
            .clone()
            .unwrap_or_else(|| "Desconocida".to_string());
        entry.matches += 1;
        entry.goals += record.total_goals();
        entry.attendance += record.asistencia;
    }

    let mut stadiums: Vec<StadiumRecord> = venues
        .into_entries()
        .into_iter()
        .map(|(estadio, venue)| StadiumRecord {
            estadio,
            ciudad: venue.city,
            partidos_jugados: venue.matches,
            total_goles: venue.goals,
            promedio_goles: average(f64::from(venue.goals), venue.matches),
            asistencia_total: venue.attendance,
            asistencia_promedio: if venue.matches > 0 {
                venue.attendance / u64::from(venue.matches)
            } else {
                0
            },
        })
        .collect();

    let busiest = first_max_by_key(&stadiums, |s| s.partidos_jugados).cloned();
    let most_goals = first_max_by_key(&stadiums, |s| s.total_goles).cloned();
    let biggest_crowd = first_max_by_key(&stadiums, |s| s.asistencia_total).cloned();
    let total = stadiums.len() as u32;

    rank_desc(&mut stadiums, |s| s.partidos_jugados);
    stadiums.truncate(config.caps.stadiums);

    info!("Total estadios analizados: {}", total);
    StadiumsSummary {
        total_estadios: total,
        estadio_mas_partidos: busiest,
        estadio_mas_goleador: most_goals,
        estadio_mayor_asistencia: biggest_crowd,
        estadios: stadiums,
    }
}
