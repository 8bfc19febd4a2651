use crate::analytics::engine::EngineConfig;
use crate::analytics::tally::{average, first_max_position, rank_desc};
use log::info;
use shared::{HighlightedMatch, HighlightsSummary, MatchRecord};

const MOST_GOALS: &str = "más goles";
const MOST_ATTENDANCE: &str = "más asistencia";

fn describe(record: &MatchRecord) -> HighlightedMatch {
    HighlightedMatch {
        partido_id: record.id.clone(),
        equipo_local: record.equipo_local.clone(),
        equipo_visitante: record.equipo_visitante.clone(),
        goles_local: record.goles_local,
        goles_visitante: record.goles_visitante,
        total_goles: record.total_goals(),
        asistencia: record.asistencia,
        categoria: String::new(),
        descripcion: String::new(),
        estadio: record.stadium().to_string(),
        ciudad: record.city().to_string(),
    }
}

/// Highest-scoring and best-attended matches.
///
/// Tags land on the shared entries, so the top list shows them too. When one
/// match holds both maxima it ends up tagged for attendance.
pub fn analyze(matches: &[MatchRecord], config: &EngineConfig) -> HighlightsSummary {
    info!("Analizando partidos destacados");

    let mut entries: Vec<HighlightedMatch> = matches.iter().map(describe).collect();
    let total_goals: u32 = entries.iter().map(|e| e.total_goles).sum();

    let most_goals = first_max_position(&entries, |e| e.total_goles);
    if let Some(position) = most_goals {
        let entry = &mut entries[position];
        entry.categoria = MOST_GOALS.to_string();
        entry.descripcion = format!("Partido con {} goles", entry.total_goles);
    }
    let most_attended = first_max_position(&entries, |e| e.asistencia);
    if let Some(position) = most_attended {
        let entry = &mut entries[position];
        entry.categoria = MOST_ATTENDANCE.to_string();
        entry.descripcion = format!("Asistencia de {} espectadores", entry.asistencia);
    }

    let partido_mas_goles = most_goals.map(|position| entries[position].clone());
    let partido_mas_asistencia = most_attended.map(|position| entries[position].clone());

    let mut ranked = entries;
    rank_desc(&mut ranked, |e| e.total_goles);
    ranked.truncate(config.caps.highlighted_matches);

    info!("Total partidos: {}", matches.len());
    HighlightsSummary {
        total_partidos: matches.len() as u32,
        promedio_goles_partido: average(f64::from(total_goals), matches.len() as u32),
        partido_mas_goles,
        partido_mas_asistencia,
        partidos_destacados: ranked,
    }
}
