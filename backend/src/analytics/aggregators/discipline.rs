use crate::analytics::tally::{average, first_max_by_key, Tally};
use log::info;
use shared::{CardDetail, DisciplineSummary, MatchRecord, PlayerCards, TeamCards};

#[derive(Clone, Copy)]
enum Card {
    Yellow,
    Red,
}

fn weighted(yellows: u32, reds: u32) -> u32 {
    yellows + 2 * reds
}

/// Bookings league-wide, per team and per player, from the card detail lists.
pub fn analyze(matches: &[MatchRecord]) -> DisciplineSummary {
    info!("Analizando disciplina del torneo");

    let mut yellows = 0u32;
    let mut reds = 0u32;
    let mut per_team: Tally<TeamCards> = Tally::new();
    let mut per_player: Tally<PlayerCards> = Tally::new();

    let mut book = |detail: &CardDetail, card: Card| {
        if let Some(team) = &detail.equipo {
            let entry = per_team.upsert_with(team, || TeamCards {
                equipo: team.clone(),
                ..Default::default()
            });
            match card {
                Card::Yellow => entry.amarillas += 1,
                Card::Red => entry.rojas += 1,
            }
        }
        if let Some(player) = &detail.jugador {
            let entry = per_player.upsert_with(player, || PlayerCards {
                jugador: player.clone(),
                ..Default::default()
            });
            entry.equipo = detail.equipo.clone();
            match card {
                Card::Yellow => entry.amarillas += 1,
                Card::Red => entry.rojas += 1,
            }
        }
    };

    for record in matches {
        for detail in &record.tarjetas_amarillas_detalle {
            yellows += 1;
            book(detail, Card::Yellow);
        }
        for detail in &record.tarjetas_rojas_detalle {
            reds += 1;
            book(detail, Card::Red);
        }
    }

    let teams: Vec<TeamCards> = per_team.into_entries().into_iter().map(|(_, t)| t).collect();
    let players: Vec<PlayerCards> = per_player.into_entries().into_iter().map(|(_, p)| p).collect();
    let played = matches.len() as u32;

    info!("Total amarillas: {}, Total rojas: {}", yellows, reds);
    DisciplineSummary {
        total_tarjetas_amarillas: yellows,
        total_tarjetas_rojas: reds,
        promedio_amarillas_partido: average(f64::from(yellows), played),
        promedio_rojas_partido: average(f64::from(reds), played),
        equipo_mas_indisciplinado: first_max_by_key(&teams, |t| weighted(t.amarillas, t.rojas)).cloned(),
        jugador_mas_amonestado: first_max_by_key(&players, |p| weighted(p.amarillas, p.rojas)).cloned(),
        tarjetas_por_equipo: teams,
    }
}
