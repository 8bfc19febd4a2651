use crate::analytics::engine::EngineConfig;
use crate::analytics::tally::{average, first_max_by_key, Tally};
use log::info;
use shared::{InjuredPlayer, InjuriesSummary, InjuryEntry, MatchRecord, TeamInjuries};

/// Injuries per side, flattened in encounter order.
pub fn analyze(matches: &[MatchRecord], config: &EngineConfig) -> InjuriesSummary {
    info!("Analizando lesiones del torneo");

    let mut total = 0u32;
    let mut per_team: Tally<u32> = Tally::new();
    let mut injured: Vec<InjuredPlayer> = Vec::new();

    for record in matches {
        let sides = [
            (&record.lesiones.local, &record.equipo_local, &record.equipo_visitante),
            (&record.lesiones.visitante, &record.equipo_visitante, &record.equipo_local),
        ];
        for (entries, team, rival) in sides {
            for entry in entries {
                total += 1;
                *per_team.upsert(team) += 1;
                // opaque entries count but carry no detail
                if let InjuryEntry::Detailed { jugador, minuto } = entry {
                    injured.push(InjuredPlayer {
                        jugador: jugador.clone(),
                        equipo: team.clone(),
                        partido_id: record.id.clone(),
                        minuto: *minuto,
                        rival: rival.clone(),
                    });
                }
            }
        }
    }

    let teams: Vec<TeamInjuries> = per_team
        .into_entries()
        .into_iter()
        .map(|(equipo, lesiones)| TeamInjuries { equipo, lesiones })
        .collect();
    injured.truncate(config.caps.injuries);

    info!("Total lesiones: {}", total);
    InjuriesSummary {
        total_lesiones: total,
        promedio_lesiones_partido: average(f64::from(total), matches.len() as u32),
        equipo_mas_lesiones: first_max_by_key(&teams, |t| t.lesiones).cloned(),
        jugadores_lesionados: injured,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{fixture, injury};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_injuries_flattened_with_rival() {
        let mut m1 = fixture("m1", "Brasil", "Serbia", 2, 0);
        m1.lesiones.local = vec![injury("Neymar", 80), InjuryEntry::Opaque];
        m1.lesiones.visitante = vec![injury("Mitrović", 60)];
        let mut m2 = fixture("m2", "Brasil", "Suiza", 1, 0);
        m2.lesiones.local = vec![injury("Danilo", 30)];

        let summary = analyze(&[m1, m2], &EngineConfig::default());

        assert_eq!(summary.total_lesiones, 4);
        assert_eq!(summary.promedio_lesiones_partido, 2.0);
        assert_eq!(summary.jugadores_lesionados.len(), 3);
        let first = &summary.jugadores_lesionados[0];
        assert_eq!(first.jugador, "Neymar");
        assert_eq!(first.rival, "Serbia");
        assert_eq!(summary.jugadores_lesionados[1].equipo, "Serbia");
        assert_eq!(summary.jugadores_lesionados[1].rival, "Brasil");

        let worst = summary.equipo_mas_lesiones.unwrap();
        assert_eq!(worst.equipo, "Brasil");
        assert_eq!(worst.lesiones, 3);
    }

    #[test]
    fn test_detail_list_keeps_first_twenty() {
        let mut record = fixture("m1", "A", "B", 0, 0);
        record.lesiones.local = (0..25).map(|i| injury(&format!("J{}", i), i)).collect();
        let summary = analyze(&[record], &EngineConfig::default());
        assert_eq!(summary.total_lesiones, 25);
        assert_eq!(summary.jugadores_lesionados.len(), 20);
        assert_eq!(summary.jugadores_lesionados[19].jugador, "J19");
    }
}
