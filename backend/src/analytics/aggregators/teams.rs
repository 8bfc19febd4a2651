use crate::analytics::tally::{first_max_by_key, first_min_by_key, percentage, rank_desc, Tally};
use log::info;
use shared::{CountryRecord, MatchRecord, TeamRecord, TeamsSummary};
use std::collections::HashMap;

fn credit(team: &mut TeamRecord, goals_for: u32, goals_against: u32, winner: &str, is_draw: bool) {
    team.partidos_jugados += 1;
    team.goles_favor += goals_for;
    team.goles_contra += goals_against;
    if winner == team.equipo {
        team.victorias += 1;
    } else if is_draw {
        team.empates += 1;
    } else {
        team.derrotas += 1;
    }
}

/// Win/draw/loss records for every participant.
///
/// A draw is whatever the match header calls a draw; the score is not consulted.
pub fn analyze(matches: &[MatchRecord], countries: &[CountryRecord]) -> TeamsSummary {
    info!("Analizando estadísticas de equipos");

    let mut tally: Tally<TeamRecord> = Tally::new();
    for record in matches {
        let draw = record.is_draw();
        for (team, goals_for, goals_against) in [
            (&record.equipo_local, record.goles_local, record.goles_visitante),
            (&record.equipo_visitante, record.goles_visitante, record.goles_local),
        ] {
            let entry = tally.upsert_with(team, || TeamRecord {
                equipo: team.clone(),
                racha_actual: "N/A".to_string(),
                ..Default::default()
            });
            credit(entry, goals_for, goals_against, &record.ganador, draw);
        }
    }

    let by_name: HashMap<&str, &CountryRecord> =
        countries.iter().map(|c| (c.nombre.as_str(), c)).collect();

    let mut teams: Vec<TeamRecord> = tally
        .into_entries()
        .into_iter()
        .map(|(_, mut team)| {
            team.diferencia_goles = i64::from(team.goles_favor) - i64::from(team.goles_contra);
            team.porcentaje_victorias = percentage(team.victorias, team.partidos_jugados);
            if let Some(country) = by_name.get(team.equipo.as_str()) {
                team.siglas = country.siglas.clone();
                team.ranking = country.rankin;
            }
            team
        })
        .collect();

    let top_scorer = first_max_by_key(&teams, |t| t.goles_favor).cloned();
    let best_defense = first_min_by_key(&teams, |t| t.goles_contra).cloned();
    let most_wins = first_max_by_key(&teams, |t| t.victorias).cloned();
    rank_desc(&mut teams, |t| t.victorias);

    info!("Total equipos analizados: {}", teams.len());
    TeamsSummary {
        total_equipos: teams.len() as u32,
        equipo_mas_goleador: top_scorer,
        mejor_defensa: best_defense,
        equipo_mas_victorias: most_wins,
        equipos: teams,
    }
}
