use crate::analytics::engine::EngineConfig;
use crate::analytics::tally::{rank_desc, rank_desc_f64, round2};
use log::info;
use shared::{
    ActionType, AggressiveMatch, AttendanceMark, Blowout, BlowoutCategory, BoringMatch,
    ExcitingMatch, LateWinner, MatchRecord, Side, SpecialMatchTotals, SpecialMatchesSummary,
};

fn attendance_mark(record: &MatchRecord) -> AttendanceMark {
    AttendanceMark {
        partido_id: record.id.clone(),
        equipo_local: record.equipo_local.clone(),
        equipo_visitante: record.equipo_visitante.clone(),
        marcador: record.score_line(),
        asistencia: record.asistencia,
        estadio: record.stadium().to_string(),
    }
}

pub fn excitement_index(record: &MatchRecord) -> f64 {
    let stats = &record.estadisticas_acciones;
    3.0 * f64::from(stats.acciones_criticas) + 1.5 * f64::from(stats.acciones_altas)
}

pub fn boredom_index(record: &MatchRecord) -> f64 {
    let actions = f64::from(record.estadisticas_acciones.total_acciones);
    let goals = f64::from(record.total_goals());
    (100.0 - 0.2 * actions - 10.0 * goals).max(0.0)
}

pub fn aggression_index(record: &MatchRecord) -> u32 {
    record.estadisticas_acciones.count_of(&ActionType::Foul)
        + 2 * record.yellow_card_tally()
        + 5 * record.red_card_count()
}

/// Goals from the late window that broke a level score for the eventual winner.
pub fn late_winners(record: &MatchRecord, config: &EngineConfig) -> Vec<LateWinner> {
    let mut winners = Vec::new();
    if record.is_draw() {
        return winners;
    }

    let (mut home, mut away) = (0u32, 0u32);
    for action in record.acciones.iter().filter(|a| a.is(&ActionType::Goal)) {
        let level_before = home == away;
        let side = record.side_of(&action.equipo);
        match side {
            Some(Side::Home) => home += 1,
            Some(Side::Away) => away += 1,
            None => {}
        }

        if action.minuto >= config.thresholds.late_goal_minute
            && level_before
            && action.equipo == record.ganador
        {
            let (before_home, before_away) = match side {
                Some(Side::Home) => (home - 1, away),
                Some(Side::Away) => (home, away - 1),
                None => (home, away),
            };
            let scorer = if action.jugador.is_empty() {
                "Desconocido"
            } else {
                action.jugador.as_str()
            };
            winners.push(LateWinner {
                partido_id: record.id.clone(),
                equipo_local: record.equipo_local.clone(),
                equipo_visitante: record.equipo_visitante.clone(),
                equipo_ganador: record.ganador.clone(),
                marcador_final: record.score_line(),
                minuto_gol_decisivo: action.minuto,
                jugador: scorer.to_string(),
                marcador_antes_gol: format!("{}-{}", before_home, before_away),
                descripcion: format!(
                    "{} marcó en el minuto {} para {} cuando iban empatados",
                    scorer, action.minuto, action.equipo
                ),
            });
        }
    }
    winners
}

/// Blowout record when the margin reaches the configured threshold.
pub fn blowout(record: &MatchRecord, config: &EngineConfig) -> Option<Blowout> {
    let margin = record.goles_local.abs_diff(record.goles_visitante);
    if margin < config.thresholds.blowout_margin {
        return None;
    }
    let category = BlowoutCategory::for_margin(margin)?;
    let (winner, loser) = if record.goles_local > record.goles_visitante {
        (&record.equipo_local, &record.equipo_visitante)
    } else {
        (&record.equipo_visitante, &record.equipo_local)
    };
    Some(Blowout {
        partido_id: record.id.clone(),
        equipo_ganador: winner.clone(),
        equipo_perdedor: loser.clone(),
        marcador: record.score_line(),
        diferencia_goles: margin,
        categoria_humillacion: category,
        estadio: record.stadium().to_string(),
    })
}

/// Exciting, boring, aggressive, late-decided and lopsided matches.
pub fn analyze(matches: &[MatchRecord], config: &EngineConfig) -> SpecialMatchesSummary {
    info!("Analizando partidos especiales");

    let thresholds = &config.thresholds;
    let mut exciting = Vec::new();
    let mut boring = Vec::new();
    let mut aggressive = Vec::new();
    let mut late = Vec::new();
    let mut blowouts = Vec::new();
    let mut lowest: Option<AttendanceMark> = None;
    let mut highest: Option<AttendanceMark> = None;

    for record in matches {
        let crowd = record.asistencia;
        if crowd > 0 && lowest.as_ref().map_or(true, |m| crowd < m.asistencia) {
            lowest = Some(attendance_mark(record));
        }
        if crowd > highest.as_ref().map_or(0, |m| m.asistencia) {
            highest = Some(attendance_mark(record));
        }

        let stats = &record.estadisticas_acciones;
        let excitement = excitement_index(record);
        if excitement > thresholds.excitement {
            exciting.push(ExcitingMatch {
                partido_id: record.id.clone(),
                equipo_local: record.equipo_local.clone(),
                equipo_visitante: record.equipo_visitante.clone(),
                marcador: record.score_line(),
                acciones_criticas: stats.acciones_criticas,
                acciones_altas: stats.acciones_altas,
                total_acciones: stats.total_acciones,
                indice_emocion: round2(excitement),
                estadio: record.stadium().to_string(),
            });
        }

        if stats.total_acciones < thresholds.boring_max_actions
            && record.total_goals() <= thresholds.boring_max_goals
        {
            boring.push(BoringMatch {
                partido_id: record.id.clone(),
                equipo_local: record.equipo_local.clone(),
                equipo_visitante: record.equipo_visitante.clone(),
                marcador: record.score_line(),
                total_acciones: stats.total_acciones,
                total_goles: record.total_goals(),
                indice_aburrimiento: round2(boredom_index(record)),
                estadio: record.stadium().to_string(),
            });
        }

        let aggression = aggression_index(record);
        if aggression > thresholds.aggression {
            aggressive.push(AggressiveMatch {
                partido_id: record.id.clone(),
                equipo_local: record.equipo_local.clone(),
                equipo_visitante: record.equipo_visitante.clone(),
                marcador: record.score_line(),
                total_faltas: stats.count_of(&ActionType::Foul),
                tarjetas_amarillas: record.yellow_card_tally(),
                tarjetas_rojas: record.red_card_count(),
                indice_agresividad: aggression,
                estadio: record.stadium().to_string(),
            });
        }

        late.extend(late_winners(record, config));
        blowouts.extend(blowout(record, config));
    }

    rank_desc_f64(&mut exciting, |m| m.indice_emocion);
    rank_desc_f64(&mut boring, |m| m.indice_aburrimiento);
    rank_desc(&mut aggressive, |m| m.indice_agresividad);
    rank_desc(&mut blowouts, |m| m.diferencia_goles);

    let totals = SpecialMatchTotals {
        emocionantes: exciting.len() as u32,
        aburridos: boring.len() as u32,
        agresivos: aggressive.len() as u32,
        ultimo_minuto: late.len() as u32,
        goleadas: blowouts.len() as u32,
    };
    info!(
        "Partidos emocionantes: {}, Goleadas: {}",
        totals.emocionantes, totals.goleadas
    );

    let caps = &config.caps;
    exciting.truncate(caps.exciting);
    boring.truncate(caps.boring);
    aggressive.truncate(caps.aggressive);
    late.truncate(caps.late_winners);
    blowouts.truncate(caps.blowouts);

    SpecialMatchesSummary {
        partidos_emocionantes: exciting,
        partidos_aburridos: boring,
        partidos_agresivos: aggressive,
        goles_ultimo_minuto: late,
        goleadas: blowouts,
        partido_menor_asistencia: lowest,
        partido_mayor_asistencia: highest,
        totales: totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{at_venue, card, fixture, goal, with_actions};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_excitement_threshold_is_strict() {
        let mut record = fixture("m1", "A", "B", 2, 2);
        record.estadisticas_acciones.acciones_criticas = 10;
        record.estadisticas_acciones.acciones_altas = 14;
        // 30 + 21 = 51
        let summary = analyze(&[record.clone()], &EngineConfig::default());
        assert_eq!(summary.partidos_emocionantes.len(), 1);
        assert_eq!(summary.partidos_emocionantes[0].indice_emocion, 51.0);

        record.estadisticas_acciones.acciones_altas = 13;
        assert_eq!(excitement_index(&record), 49.5);
        let summary = analyze(&[record], &EngineConfig::default());
        assert!(summary.partidos_emocionantes.is_empty());
    }

    #[test]
    fn test_boring_match_index() {
        let mut record = fixture("m1", "Túnez", "Dinamarca", 0, 0);
        record.estadisticas_acciones.total_acciones = 150;
        let summary = analyze(&[record.clone()], &EngineConfig::default());
        assert_eq!(summary.partidos_aburridos[0].indice_aburrimiento, 70.0);

        record.goles_local = 2;
        let summary = analyze(&[record], &EngineConfig::default());
        assert!(summary.partidos_aburridos.is_empty());
    }

    #[test]
    fn test_aggression_uses_foul_count_and_cards() {
        let mut record = fixture("m1", "Camerún", "Serbia", 3, 3);
        record.estadisticas_acciones.conteo_por_tipo.insert("Falta".to_string(), 12);
        record.tarjetas_amarillas.insert("Camerún".to_string(), 2);
        record.tarjetas_rojas_detalle = vec![card("X", "Serbia")];
        // 12 + 4 + 5
        assert_eq!(aggression_index(&record), 21);
        let summary = analyze(&[record], &EngineConfig::default());
        assert_eq!(summary.partidos_agresivos[0].total_faltas, 12);
    }

    #[test]
    fn test_late_winner_requires_level_score_and_eventual_winner() {
        let record = with_actions(
            fixture("m1", "Corea del Sur", "Portugal", 2, 1),
            vec![
                goal(5, "Horta", "Portugal"),
                goal(27, "Kim", "Corea del Sur"),
                goal(91, "Hwang", "Corea del Sur"),
            ],
        );
        let winners = late_winners(&record, &EngineConfig::default());
        assert_eq!(winners.len(), 1);
        assert_eq!(winners[0].marcador_antes_gol, "1-1");
        assert_eq!(winners[0].minuto_gol_decisivo, 91);
        assert_eq!(
            winners[0].descripcion,
            "Hwang marcó en el minuto 91 para Corea del Sur cuando iban empatados"
        );

        // late goal by the trailing side is not decisive
        let record = with_actions(
            fixture("m2", "Corea del Sur", "Portugal", 1, 2),
            vec![goal(5, "Horta", "Portugal"), goal(30, "Ronaldo", "Portugal"), goal(90, "Kim", "Corea del Sur")],
        );
        assert!(late_winners(&record, &EngineConfig::default()).is_empty());
    }

    #[test]
    fn test_blowout_categories() {
        let config = EngineConfig::default();
        let blowout_of = |h, a| blowout(&fixture("m", "A", "B", h, a), &config);
        assert!(blowout_of(2, 0).is_none());
        assert_eq!(blowout_of(3, 0).unwrap().categoria_humillacion, BlowoutCategory::ResoundingBlowout);
        assert_eq!(blowout_of(0, 4).unwrap().categoria_humillacion, BlowoutCategory::HistoricBlowout);
        let epic = blowout_of(1, 7).unwrap();
        assert_eq!(epic.categoria_humillacion, BlowoutCategory::EpicHumiliation);
        assert_eq!(epic.equipo_ganador, "B");
        assert_eq!(epic.diferencia_goles, 6);
    }

    #[test]
    fn test_attendance_extremes() {
        let matches = vec![
            at_venue(fixture("m1", "A", "B", 0, 0), "S1", "C1", 0),
            at_venue(fixture("m2", "A", "B", 0, 0), "S2", "C2", 30000),
            at_venue(fixture("m3", "A", "B", 0, 0), "S3", "C3", 20000),
            at_venue(fixture("m4", "A", "B", 0, 0), "S4", "C4", 20000),
            at_venue(fixture("m5", "A", "B", 0, 0), "S5", "C5", 30000),
        ];
        let summary = analyze(&matches, &EngineConfig::default());
        assert_eq!(summary.partido_menor_asistencia.unwrap().partido_id, "m3");
        assert_eq!(summary.partido_mayor_asistencia.unwrap().partido_id, "m2");
    }

    #[test]
    fn test_totals_report_uncapped_counts() {
        let matches: Vec<_> = (0..20).map(|i| fixture(&format!("m{}", i), "A", "B", 5, 0)).collect();
        let summary = analyze(&matches, &EngineConfig::default());
        assert_eq!(summary.totales.goleadas, 20);
        assert_eq!(summary.goleadas.len(), 15);
    }
}
