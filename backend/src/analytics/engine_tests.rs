#[cfg(test)]
mod tournament_engine_tests {
    use crate::analytics::engine::{roster_index, EngineConfig, TournamentStatsEngine};
    use crate::analytics::test_support::{at_venue, fixture, goal, roster_player, with_actions};
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use shared::{CountryRecord, MatchRecord, SharedError};

    fn generated_at() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 12, 18, 18, 0, 0).unwrap()
    }

    fn country(name: &str) -> CountryRecord {
        serde_json::from_value(serde_json::json!({"nombre": name})).unwrap()
    }

    fn three_match_tournament() -> Vec<MatchRecord> {
        let m1 = with_actions(
            fixture("historial/1", "A", "B", 3, 1),
            vec![
                goal(10, "A9", "A"),
                goal(30, "B9", "B"),
                goal(50, "A9", "A"),
                goal(70, "A10", "A"),
            ],
        );
        let m2 = with_actions(
            fixture("historial/2", "B", "A", 3, 2),
            vec![
                goal(5, "A9", "A"),
                goal(15, "A10", "A"),
                goal(50, "B9", "B"),
                goal(60, "B9", "B"),
                goal(89, "B7", "B"),
            ],
        );
        let m3 = at_venue(
            with_actions(
                fixture("historial/3", "A", "C", 4, 4),
                vec![
                    goal(1, "A9", "A"),
                    goal(2, "C9", "C"),
                    goal(3, "A9", "A"),
                    goal(4, "C9", "C"),
                    goal(5, "A9", "A"),
                    goal(6, "C9", "C"),
                    goal(7, "A9", "A"),
                    goal(8, "C9", "C"),
                ],
            ),
            "Lusail",
            "Lusail",
            88_966,
        );
        vec![m1, m2, m3]
    }

    #[test]
    fn test_engine_default_config() {
        let engine = TournamentStatsEngine::new();
        let config = engine.config();
        assert_eq!(config.tournament_name, "Mundial");
        assert_eq!(config.thresholds.blowout_margin, 3);
        assert_eq!(config.thresholds.late_goal_minute, 85);
        assert_eq!(config.lookback.actions, 20);
        assert_eq!(config.lookback.seconds, 30);
        assert_eq!(config.referee_pool, 20);
        assert_eq!(config.caps.late_winners, 15);
        assert_eq!(config.assist_window_secs, 30);
    }

    #[test]
    fn test_engine_with_custom_config() {
        let engine = TournamentStatsEngine::with_config(EngineConfig::with_tournament_name("Copa América"));
        let report = engine
            .tournament_report(&three_match_tournament(), &[], &[], 0, generated_at())
            .unwrap();
        assert_eq!(report.torneo, "Copa América");
    }

    #[test]
    fn test_empty_history_is_not_found() {
        let err = TournamentStatsEngine::new()
            .tournament_report(&[], &[], &[], 2, generated_at())
            .unwrap_err();
        match err {
            SharedError::NotFound(msg) => assert_eq!(msg, "No se encontraron partidos en el historial"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_three_match_comeback_scenario() {
        let countries = vec![country("A"), country("B"), country("C")];
        let players = vec![roster_player("A9", "A", 85), roster_player("B9", "B", 80)];

        let report = TournamentStatsEngine::new()
            .tournament_report(&three_match_tournament(), &players, &countries, 1, generated_at())
            .unwrap();

        assert_eq!(report.total_partidos, 3);
        assert_eq!(report.total_equipos, 3);
        assert_eq!(report.total_goles, 4 + 5 + 8);
        assert_eq!(report.registros_omitidos, 1);
        assert_eq!(report.fecha_generacion, generated_at());
        assert_eq!(report.mensaje, "Estadísticas completas del torneo generadas exitosamente");

        let comebacks = &report.remontadas;
        assert_eq!(comebacks.total_remontadas, 1);
        assert_eq!(comebacks.remontadas_2_goles, 1);
        assert_eq!(comebacks.remontadas_3_o_mas_goles, 0);
        assert_eq!(comebacks.equipos_con_mas_remontadas[0].equipo, "B");
        assert_eq!(comebacks.equipos_con_mas_remontadas[0].remontadas, 1);
        assert_eq!(comebacks.partidos[0].equipo_remonto, comebacks.partidos[0].ganador);

        let home_away = &report.local_visitante;
        assert_eq!(home_away.victorias_local, 2);
        assert_eq!(home_away.victorias_visitante, 0);
        assert_eq!(home_away.empates, 1);

        assert_eq!(report.goleadores.top_goleadores[0].nombre, "A9");
        assert_eq!(report.estadios.estadio_mayor_asistencia.as_ref().unwrap().estadio, "Lusail");
    }

    #[test]
    fn test_report_is_deterministic() {
        let matches = three_match_tournament();
        let engine = TournamentStatsEngine::new();
        let first = engine.tournament_report(&matches, &[], &[], 0, generated_at()).unwrap();
        let second = engine.tournament_report(&matches, &[], &[], 0, generated_at()).unwrap();

        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_charts_attached_to_report() {
        let report = TournamentStatsEngine::new()
            .tournament_report(&three_match_tournament(), &[], &[], 0, generated_at())
            .unwrap();
        let charts = &report.graficas;
        assert_eq!(charts.victorias_local_visitante.datasets[0].data, vec![2.0, 0.0, 1.0]);
        assert_eq!(charts.top_goleadores.titulo, "Top 10 Goleadores del Torneo");
    }

    #[test]
    fn test_roster_index_keeps_last_duplicate() {
        let players = vec![roster_player("Silva", "Brasil", 80), roster_player("Silva", "Portugal", 84)];
        let index = roster_index(&players);
        assert_eq!(index.len(), 1);
        assert_eq!(index["Silva"].overall, 84);
    }

    #[test]
    fn test_player_analytics_delegates() {
        let player = roster_player("B9", "B", 80);
        let analytics = TournamentStatsEngine::new().player_analytics(&player, &three_match_tournament());
        assert_eq!(analytics.nombre, "B9");
        assert_eq!(analytics.descriptivo.totales.partidos_jugados, 2);
        assert_eq!(analytics.descriptivo.totales.acciones_registradas, 3);
    }
}
