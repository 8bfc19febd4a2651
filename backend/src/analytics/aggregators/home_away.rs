use crate::analytics::engine::EngineConfig;
use crate::analytics::tally::{average, percentage};
use log::info;
use shared::{Action, ActionType, GoalTypeBreakdown, HomeAwaySummary, MatchRecord, Side};

/// Set piece that led to a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalOrigin {
    Penalty,
    FreeKick,
    Corner,
    OpenPlay,
}

#[derive(Debug, Default, Clone, Copy)]
struct OriginCounts {
    penalty: u32,
    free_kick: u32,
    corner: u32,
    open_play: u32,
}

impl OriginCounts {
    fn add(&mut self, origin: GoalOrigin) {
        match origin {
            GoalOrigin::Penalty => self.penalty += 1,
            GoalOrigin::FreeKick => self.free_kick += 1,
            GoalOrigin::Corner => self.corner += 1,
            GoalOrigin::OpenPlay => self.open_play += 1,
        }
    }

    fn breakdown(&self, header_goals: u32) -> GoalTypeBreakdown {
        GoalTypeBreakdown {
            goles_penal: self.penalty,
            goles_corner: self.corner,
            goles_tiro_libre: self.free_kick,
            goles_jugada_normal: self.open_play,
            porcentaje_penal: percentage(self.penalty, header_goals),
            porcentaje_corner: percentage(self.corner, header_goals),
            porcentaje_tiro_libre: percentage(self.free_kick, header_goals),
            porcentaje_jugada_normal: percentage(self.open_play, header_goals),
        }
    }
}

fn set_piece(action: &Action) -> Option<GoalOrigin> {
    match action.tipo {
        ActionType::Shot if action.descripcion.to_lowercase().contains("penal") => {
            Some(GoalOrigin::Penalty)
        }
        ActionType::FreeKick => Some(GoalOrigin::FreeKick),
        ActionType::Corner => Some(GoalOrigin::Corner),
        _ => None,
    }
}

/// Classifies the goal at `goal_index` by the nearest set piece among the
/// preceding actions that happened at most the configured number of seconds earlier.
pub fn classify_goal(actions: &[Action], goal_index: usize, config: &EngineConfig) -> GoalOrigin {
    let goal = &actions[goal_index];
    let start = goal_index.saturating_sub(config.lookback.actions);

    actions[start..goal_index]
        .iter()
        .rev()
        .filter(|prev| {
            let gap = goal.clock() - prev.clock();
            (0..=config.lookback.seconds).contains(&gap)
        })
        .find_map(set_piece)
        .unwrap_or(GoalOrigin::OpenPlay)
}

/// Home versus away results and goal origins.
pub fn analyze(matches: &[MatchRecord], config: &EngineConfig) -> HomeAwaySummary {
    info!("Analizando estadísticas local vs visitante");

    let mut summary = HomeAwaySummary {
        total_partidos: matches.len() as u32,
        ..Default::default()
    };
    let mut home_origins = OriginCounts::default();
    let mut away_origins = OriginCounts::default();

    for record in matches {
        summary.goles_local_total += record.goles_local;
        summary.goles_visitante_total += record.goles_visitante;

        for (index, action) in record.acciones.iter().enumerate() {
            if !action.is(&ActionType::Goal) {
                continue;
            }
            match record.side_of(&action.equipo) {
                Some(Side::Home) => home_origins.add(classify_goal(&record.acciones, index, config)),
                Some(Side::Away) => away_origins.add(classify_goal(&record.acciones, index, config)),
                None => {}
            }
        }

        // every match lands in exactly one bucket
        match record.winner_side() {
            Some(Side::Home) => summary.victorias_local += 1,
            Some(Side::Away) => summary.victorias_visitante += 1,
            None => summary.empates += 1,
        }
    }

    let played = summary.total_partidos;
    summary.porcentaje_local = percentage(summary.victorias_local, played);
    summary.porcentaje_visitante = percentage(summary.victorias_visitante, played);
    summary.porcentaje_empate = percentage(summary.empates, played);
    summary.promedio_goles_local = average(f64::from(summary.goles_local_total), played);
    summary.promedio_goles_visitante = average(f64::from(summary.goles_visitante_total), played);
    summary.goles_local_detalle = home_origins.breakdown(summary.goles_local_total);
    summary.goles_visitante_detalle = away_origins.breakdown(summary.goles_visitante_total);

    info!(
        "Local: {}, Visitante: {}, Empates: {}",
        summary.victorias_local, summary.victorias_visitante, summary.empates
    );
    info!(
        "Goles local - Penal: {}, Corner: {}, Tiro Libre: {}, Normal: {}",
        home_origins.penalty, home_origins.corner, home_origins.free_kick, home_origins.open_play
    );
    info!(
        "Goles visitante - Penal: {}, Corner: {}, Tiro Libre: {}, Normal: {}",
        away_origins.penalty, away_origins.corner, away_origins.free_kick, away_origins.open_play
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{action, fixture, goal, with_actions};
    use pretty_assertions::assert_eq;

    fn penalty_shot(minute: u32, second: u32, team: &str) -> Action {
        Action {
            descripcion: "Disparo desde el PENAL".to_string(),
            ..action(minute, second, ActionType::Shot, "Kane", team)
        }
    }

    #[test]
    fn test_goal_origin_lookback() {
        let config = EngineConfig::default();
        let actions = vec![
            action(20, 0, ActionType::Corner, "Rice", "Inglaterra"),
            penalty_shot(20, 10, "Inglaterra"),
            goal(20, "Kane", "Inglaterra"),
        ];
        // goal at 20:00 is 0 s after the corner and the penalty is in the future
        assert_eq!(classify_goal(&actions, 2, &config), GoalOrigin::Corner);

        let actions = vec![
            action(19, 50, ActionType::Corner, "Rice", "Inglaterra"),
            penalty_shot(19, 55, "Inglaterra"),
            Action { segundo: 10, ..goal(20, "Kane", "Inglaterra") },
        ];
        // nearest qualifying action wins
        assert_eq!(classify_goal(&actions, 2, &config), GoalOrigin::Penalty);
    }

    #[test]
    fn test_set_piece_outside_window_is_open_play() {
        let config = EngineConfig::default();
        let actions = vec![
            action(10, 0, ActionType::FreeKick, "Foden", "Inglaterra"),
            action(10, 40, ActionType::Pass, "Foden", "Inglaterra"),
            goal(11, "Kane", "Inglaterra"),
        ];
        assert_eq!(classify_goal(&actions, 2, &config), GoalOrigin::OpenPlay);
    }

    #[test]
    fn test_set_piece_beyond_twenty_actions_is_ignored() {
        let config = EngineConfig::default();
        let mut actions = vec![action(30, 0, ActionType::Corner, "Saka", "Inglaterra")];
        actions.extend((0..20).map(|_| action(30, 1, ActionType::Pass, "Rice", "Inglaterra")));
        actions.push(Action { segundo: 5, ..goal(30, "Kane", "Inglaterra") });
        assert_eq!(classify_goal(&actions, 21, &config), GoalOrigin::OpenPlay);
    }

    #[test]
    fn test_results_and_percentages() {
        let matches = vec![
            with_actions(
                fixture("m1", "Inglaterra", "Gales", 2, 0),
                vec![
                    action(49, 50, ActionType::FreeKick, "Rashford", "Inglaterra"),
                    goal(50, "Rashford", "Inglaterra"),
                    goal(51, "Foden", "Inglaterra"),
                ],
            ),
            fixture("m2", "Irán", "Gales", 0, 2),
            fixture("m3", "EEUU", "Gales", 1, 1),
        ];

        let summary = analyze(&matches, &EngineConfig::default());

        assert_eq!(summary.victorias_local, 1);
        assert_eq!(summary.victorias_visitante, 1);
        assert_eq!(summary.empates, 1);
        assert_eq!(summary.porcentaje_local, 33.33);
        assert_eq!(summary.goles_local_total, 3);
        assert_eq!(summary.promedio_goles_visitante, 1.0);

        let home = &summary.goles_local_detalle;
        assert_eq!(home.goles_tiro_libre, 1);
        assert_eq!(home.goles_jugada_normal, 1);
        // divided by header goals, not classified goals
        assert_eq!(home.porcentaje_tiro_libre, 33.33);
    }

    #[test]
    fn test_empty_input_has_zero_rates() {
        let summary = analyze(&[], &EngineConfig::default());
        assert_eq!(summary.porcentaje_local, 0.0);
        assert_eq!(summary.promedio_goles_local, 0.0);
        assert_eq!(summary.goles_local_detalle.porcentaje_penal, 0.0);
    }
}
