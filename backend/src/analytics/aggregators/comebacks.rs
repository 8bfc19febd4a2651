use crate::analytics::engine::EngineConfig;
use crate::analytics::tally::{rank_desc, Tally};
use log::info;
use shared::{ActionType, ComebackMatch, ComebackSummary, ComebackTeam, MatchRecord, Side};

/// Largest deficit each side faced while replaying the goal sequence.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub(crate) struct DeficitTrace {
    pub home_max_deficit: u32,
    pub away_max_deficit: u32,
}

pub(crate) fn trace_deficits(record: &MatchRecord) -> DeficitTrace {
    let mut home = 0i64;
    let mut away = 0i64;
    let mut trace = DeficitTrace::default();

    for action in record.acciones.iter().filter(|a| a.is(&ActionType::Goal)) {
        match record.side_of(&action.equipo) {
            Some(Side::Home) => home += 1,
            Some(Side::Away) => away += 1,
            None => {}
        }
        let lead = away - home;
        if lead > 0 {
            trace.home_max_deficit = trace.home_max_deficit.max(lead as u32);
        } else if lead < 0 {
            trace.away_max_deficit = trace.away_max_deficit.max((-lead) as u32);
        }
    }
    trace
}

/// Matches won by a side that trailed by two or more goals at some point.
pub fn analyze(matches: &[MatchRecord], config: &EngineConfig) -> ComebackSummary {
    info!("Analizando remontadas en {} partidos", matches.len());

    let mut summary = ComebackSummary::default();
    let mut per_team: Tally<u32> = Tally::new();

    for record in matches {
        let trace = trace_deficits(record);
        let (team, margin) = match record.winner_side() {
            Some(Side::Home) if trace.home_max_deficit >= 2 => {
                (&record.equipo_local, trace.home_max_deficit)
            }
            Some(Side::Away) if trace.away_max_deficit >= 2 => {
                (&record.equipo_visitante, trace.away_max_deficit)
            }
            _ => continue,
        };

        summary.total_remontadas += 1;
        *per_team.upsert(team) += 1;
        if margin == 2 {
            summary.remontadas_2_goles += 1;
        } else {
            summary.remontadas_3_o_mas_goles += 1;
        }

        summary.partidos.push(ComebackMatch {
            partido_id: record.id.clone(),
            equipo_local: record.equipo_local.clone(),
            equipo_visitante: record.equipo_visitante.clone(),
            goles_local: record.goles_local,
            goles_visitante: record.goles_visitante,
            ganador: record.ganador.clone(),
            equipo_remonto: team.clone(),
            diferencia_maxima: margin,
            marcador_inicial: format!("Perdía por {} goles", margin),
            marcador_final: record.score_line(),
            estadio: record.stadium().to_string(),
            ciudad: record.city().to_string(),
        });
    }

    let mut teams: Vec<ComebackTeam> = per_team
        .into_entries()
        .into_iter()
        .map(|(equipo, remontadas)| ComebackTeam { equipo, remontadas })
        .collect();
    rank_desc(&mut teams, |t| t.remontadas);
    teams.truncate(config.caps.comeback_teams);
    summary.equipos_con_mas_remontadas = teams;

    info!("Total remontadas encontradas: {}", summary.total_remontadas);
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{fixture, goal, with_actions};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_two_goal_comeback_is_recorded_for_the_winner() {
        let record = with_actions(
            fixture("m1", "España", "Japón", 1, 2),
            vec![
                goal(11, "Morata", "España"),
                goal(48, "Doan", "Japón"),
                goal(51, "Tanaka", "Japón"),
            ],
        );
        // only a one-goal deficit
        let summary = analyze(&[record], &EngineConfig::default());
        assert_eq!(summary.total_remontadas, 0);

        let record = with_actions(
            fixture("m2", "Japón", "Alemania", 3, 2),
            vec![
                goal(10, "Havertz", "Alemania"),
                goal(20, "Gündogan", "Alemania"),
                goal(60, "Doan", "Japón"),
                goal(75, "Asano", "Japón"),
                goal(88, "Mitoma", "Japón"),
            ],
        );
        let summary = analyze(&[record], &EngineConfig::default());
        assert_eq!(summary.total_remontadas, 1);
        assert_eq!(summary.remontadas_2_goles, 1);
        let comeback = &summary.partidos[0];
        assert_eq!(comeback.equipo_remonto, "Japón");
        assert_eq!(comeback.diferencia_maxima, 2);
        assert_eq!(comeback.marcador_inicial, "Perdía por 2 goles");
        assert_eq!(comeback.marcador_final, "3-2");
        assert_eq!(comeback.estadio, "N/A");
    }

    #[test]
    fn test_three_goal_comeback_bucket() {
        let record = with_actions(
            fixture("m1", "Uruguay", "Ghana", 4, 3),
            vec![
                goal(5, "Ayew", "Ghana"),
                goal(12, "Kudus", "Ghana"),
                goal(30, "Kudus", "Ghana"),
                goal(50, "Suárez", "Uruguay"),
                goal(60, "Núñez", "Uruguay"),
                goal(70, "Núñez", "Uruguay"),
                goal(90, "Valverde", "Uruguay"),
            ],
        );
        let summary = analyze(&[record], &EngineConfig::default());
        assert_eq!(summary.remontadas_3_o_mas_goles, 1);
        assert_eq!(summary.partidos[0].diferencia_maxima, 3);
    }

    #[test]
    fn test_losing_side_with_deficit_is_not_a_comeback() {
        // Away trails 0-2 and only draws
        let record = with_actions(
            fixture("m1", "Chile", "Perú", 2, 2),
            vec![
                goal(5, "Sánchez", "Chile"),
                goal(15, "Vidal", "Chile"),
                goal(70, "Lapadula", "Perú"),
                goal(80, "Cueva", "Perú"),
            ],
        );
        let summary = analyze(&[record], &EngineConfig::default());
        assert_eq!(summary.total_remontadas, 0);
        assert!(summary.equipos_con_mas_remontadas.is_empty());
    }

    #[test]
    fn test_goals_from_unknown_team_are_ignored() {
        let record = with_actions(
            fixture("m1", "Chile", "Perú", 0, 1),
            vec![goal(5, "X", "Narnia"), goal(15, "Y", "Narnia"), goal(80, "Cueva", "Perú")],
        );
        assert_eq!(trace_deficits(&record), DeficitTrace { home_max_deficit: 1, away_max_deficit: 0 });
    }
}
