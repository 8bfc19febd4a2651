//! Per-player analytics derived from the player's own match actions.
//!
//! Predictive figures blend a skill rating with the player's historical
//! success rate for the matching action type and fall back to the skill
//! alone when the player never attempted that action.

use std::collections::BTreeMap;

use log::info;
use shared::{
    Action, ActionType, AdvancedBlock, DescriptiveBlock, MatchRecord, PlayerAnalytics,
    PlayerRecord, PredictiveBlock, PressurePrecision, SeasonTotals, Sector,
};

use crate::analytics::engine::EngineConfig;
use crate::analytics::tally::round2;

const PENALTY_SPECIALIST: &str = "Especialista en penales";
const FREE_KICK_SPECIALIST: &str = "Especialista en tiros libres";

/// Label for a roster position id.
pub fn position_label(position_id: Option<i64>) -> &'static str {
    match position_id {
        Some(1) => "Portero",
        Some(2) => "Defensa Central Izquierdo",
        Some(3) => "Defensa Central Derecho",
        Some(4) => "Lateral Izquierdo",
        Some(5) => "Lateral Derecho",
        Some(6) => "Mediocampista Izquierdo",
        Some(7) => "Mediocampista Central",
        Some(8) => "Mediocampista Derecho",
        Some(9) => "Extremo Izquierdo",
        Some(10) => "Delantero Centro",
        _ => "Desconocido",
    }
}

/// Attempts and successes for one kind of action.
#[derive(Debug, Default, Clone, Copy)]
struct Rate {
    attempts: u32,
    successes: u32,
}

impl Rate {
    fn record(&mut self, success: bool) {
        self.attempts += 1;
        if success {
            self.successes += 1;
        }
    }

    fn merge(self, other: Rate) -> Rate {
        Rate {
            attempts: self.attempts + other.attempts,
            successes: self.successes + other.successes,
        }
    }

    /// Success ratio in 0..=1, `None` without attempts.
    fn ratio(&self) -> Option<f64> {
        (self.attempts > 0).then(|| f64::from(self.successes) / f64::from(self.attempts))
    }

    fn percent(&self) -> f64 {
        self.ratio().map(|r| round2(r * 100.0)).unwrap_or(0.0)
    }
}

/// One of the player's actions together with whatever happened next in the match.
struct Involvement<'m> {
    action: &'m Action,
    next: Option<&'m Action>,
}

impl Involvement<'_> {
    fn followed_by(&self, kind: &ActionType, window_secs: i64) -> bool {
        self.next
            .map(|next| next.is(kind) && (next.clock() - self.action.clock()).abs() <= window_secs)
            .unwrap_or(false)
    }
}

/// Everything the three output blocks are computed from.
struct ActionProfile<'m> {
    own: Vec<Involvement<'m>>,
    matches_played: u32,
    team_actions: u32,
    minutes_played: u32,
    assists: u32,
    key_passes: u32,
    saves_against: u32,
}

impl<'m> ActionProfile<'m> {
    fn build(player: &PlayerRecord, matches: &'m [MatchRecord], window_secs: i64) -> Self {
        let team = player.team();
        let mut own = Vec::new();
        let mut matches_played = 0;
        let mut team_actions = 0;

        for record in matches {
            let before = own.len();
            let mut match_team_actions = 0;
            for (idx, action) in record.acciones.iter().enumerate() {
                if action.equipo != team {
                    continue;
                }
                match_team_actions += 1;
                if action.jugador == player.nombre {
                    own.push(Involvement {
                        action,
                        next: record.acciones.get(idx + 1),
                    });
                }
            }
            // matches the player never featured in don't count towards possession
            if own.len() > before {
                matches_played += 1;
                team_actions += match_team_actions;
            }
        }

        let successful_passes = || {
            own.iter()
                .filter(|inv| inv.action.is(&ActionType::Pass) && inv.action.exito)
        };
        let assists = successful_passes()
            .filter(|inv| inv.followed_by(&ActionType::Goal, window_secs))
            .count() as u32;
        let key_passes = successful_passes()
            .filter(|inv| inv.followed_by(&ActionType::Shot, window_secs))
            .count() as u32;
        let saves_against = own
            .iter()
            .filter(|inv| inv.action.is(&ActionType::Shot))
            .filter(|inv| inv.next.map(|n| n.is(&ActionType::Save)).unwrap_or(false))
            .count() as u32;
        let minutes_played = own.iter().map(|inv| inv.action.minuto).max().unwrap_or(0);

        Self {
            own,
            matches_played,
            team_actions,
            minutes_played,
            assists,
            key_passes,
            saves_against,
        }
    }

    fn actions(&self) -> impl Iterator<Item = &'m Action> + '_ {
        self.own.iter().map(|inv| inv.action)
    }

    fn rate_of(&self, kind: &ActionType) -> Rate {
        let mut rate = Rate::default();
        for action in self.actions().filter(|a| a.is(kind)) {
            rate.record(action.exito);
        }
        rate
    }

    fn count_of(&self, kind: &ActionType) -> u32 {
        self.actions().filter(|a| a.is(kind)).count() as u32
    }

    fn any_in(&self, kind: &ActionType, sector: &Sector) -> bool {
        self.actions().any(|a| a.is(kind) && &a.sector == sector)
    }
}

/// Computes the analytics document for a single player.
pub struct PlayerAnalyticsEngine<'c> {
    config: &'c EngineConfig,
}

impl<'c> PlayerAnalyticsEngine<'c> {
    pub fn new(config: &'c EngineConfig) -> Self {
        Self { config }
    }

    pub fn analyze(&self, player: &PlayerRecord, matches: &[MatchRecord]) -> PlayerAnalytics {
        info!("Generando analítica para el jugador {}", player.nombre);

        let profile = ActionProfile::build(player, matches, self.config.assist_window_secs);
        info!(
            "Jugador {}: {} acciones en {} partidos",
            player.nombre,
            profile.own.len(),
            profile.matches_played
        );

        PlayerAnalytics {
            jugador_id: player.key(),
            nombre: player.nombre.clone(),
            pais: player.team().to_string(),
            descriptivo: self.descriptive(player, &profile),
            predictivo: self.predictive(player, &profile),
            avanzado: self.advanced(player, &profile),
        }
    }

    fn descriptive(&self, player: &PlayerRecord, profile: &ActionProfile<'_>) -> DescriptiveBlock {
        let mean = |values: [u32; 3]| round2(values.iter().map(|v| f64::from(*v)).sum::<f64>() / 3.0);

        let mut bonificaciones = Vec::new();
        if player.especialista_penales {
            bonificaciones.push(PENALTY_SPECIALIST.to_string());
        }
        if player.especialista_tiros_libres {
            bonificaciones.push(FREE_KICK_SPECIALIST.to_string());
        }
        for tag in &player.bonificaciones {
            if !bonificaciones.contains(tag) {
                bonificaciones.push(tag.clone());
            }
        }

        DescriptiveBlock {
            posicion: position_label(player.posicion_id).to_string(),
            pie_habil: player.pie_habil.clone(),
            forma_actual: player.forma_actual,
            moral: player.moral,
            promedio_fisico: mean([player.velocidad, player.resistencia, player.fuerza_fisica]),
            promedio_tecnico: mean([player.control_balon, player.regate, player.precision_pase]),
            atributos: skill_map(player),
            bonificaciones,
            totales: SeasonTotals {
                goles: player.goles + player.goles_temp,
                faltas: player.faltas + player.faltas_temp,
                lesiones: player.lesiones,
                asistencias: profile.assists,
                tarjetas_amarillas: player.amarilla + player.amarilla_temp,
                tarjetas_rojas: player.roja + player.roja_temp,
                partidos_jugados: profile.matches_played,
                acciones_registradas: profile.own.len() as u32,
            },
        }
    }

    fn predictive(&self, player: &PlayerRecord, profile: &ActionProfile<'_>) -> PredictiveBlock {
        let skill = |value: u32| f64::from(value);

        let pass_base = (skill(player.precision_pase) + skill(player.vision_juego)) / 200.0 * 100.0;
        let prob_pase_exitoso = match profile.rate_of(&ActionType::Pass).ratio() {
            Some(rate) => pass_base * rate,
            None => pass_base,
        };

        let shots = profile.rate_of(&ActionType::Shot);
        let prob_precision_tiro = if shots.attempts == 0 {
            skill(player.precision_tiro)
        } else {
            let on_target = (f64::from(shots.successes) - f64::from(profile.saves_against)).max(0.0)
                / f64::from(shots.attempts);
            let mut estimate = skill(player.precision_tiro) * on_target;
            if profile.any_in(&ActionType::Shot, &Sector::CloseRangeBox) {
                estimate += 10.0;
            }
            estimate.min(100.0)
        };

        let prob_regate_exitoso = match profile.rate_of(&ActionType::Dribble).ratio() {
            Some(rate) => {
                let mut estimate = skill(player.regate) * rate;
                if profile.any_in(&ActionType::Dribble, &Sector::CentralMidfield) {
                    estimate += 5.0;
                }
                estimate.min(100.0)
            }
            None => skill(player.regate),
        };

        let recovery_base = (skill(player.anticipacion) + skill(player.agresividad)) / 200.0 * 100.0;
        let recoveries = profile
            .rate_of(&ActionType::Tackle)
            .merge(profile.rate_of(&ActionType::Interception));
        let prob_recuperacion = match recoveries.ratio() {
            Some(rate) => recovery_base * rate,
            None => recovery_base,
        };

        let minutes = f64::from(profile.minutes_played);
        let nivel_fatiga = (100.0 - skill(player.resistencia) * (-minutes / 90.0).exp()).clamp(0.0, 100.0);

        let fouls = profile.count_of(&ActionType::Foul);
        let physical = recoveries.attempts + fouls;
        let prob_faltas = if physical == 0 {
            skill(player.agresividad) / 2.0
        } else {
            skill(player.agresividad) / 100.0 * 100.0 * f64::from(fouls) / f64::from(physical)
        };

        let involvement = f64::from(player.goles_temp + profile.assists)
            / f64::from(profile.matches_played.max(1));
        let contribucion_gol = ((skill(player.vision_juego) + skill(player.fuerza_disparo)) / 200.0
            * 100.0
            * involvement)
            .clamp(0.0, 100.0);

        PredictiveBlock {
            prob_pase_exitoso: round2(prob_pase_exitoso),
            prob_precision_tiro: round2(prob_precision_tiro),
            prob_regate_exitoso: round2(prob_regate_exitoso),
            prob_recuperacion: round2(prob_recuperacion),
            nivel_fatiga: round2(nivel_fatiga),
            prob_faltas: round2(prob_faltas),
            contribucion_gol: round2(contribucion_gol),
        }
    }

    fn advanced(&self, player: &PlayerRecord, profile: &ActionProfile<'_>) -> AdvancedBlock {
        let on_ball = profile
            .actions()
            .filter(|a| (a.is(&ActionType::Pass) || a.is(&ActionType::Dribble)) && a.exito)
            .count() as u32;
        let posesion_individual = if profile.team_actions == 0 {
            0.0
        } else {
            round2(f64::from(on_ball) / f64::from(profile.team_actions) * 100.0)
        };

        let mut central = Rate::default();
        let mut defensive = Rate::default();
        let mut offensive = Rate::default();
        for action in profile.actions().filter(|a| {
            a.is(&ActionType::Pass) || a.is(&ActionType::Shot) || a.is(&ActionType::Dribble)
        }) {
            if action.sector == Sector::CentralMidfield {
                central.record(action.exito);
            } else if action.sector.is_defensive() {
                defensive.record(action.exito);
            } else if action.sector.is_offensive() {
                offensive.record(action.exito);
            }
        }

        let duelos_aereos_ganados = profile
            .rate_of(&ActionType::Clearance)
            .ratio()
            .map(|rate| round2(rate * f64::from(player.juego_aereo)))
            .unwrap_or(0.0);

        let created = profile.count_of(&ActionType::Goal) + profile.assists + profile.key_passes;
        let indice_creacion = if profile.minutes_played == 0 {
            0.0
        } else {
            round2(f64::from(created) / (f64::from(profile.minutes_played) / 90.0))
        };

        let recoveries = profile.rate_of(&ActionType::Tackle).successes
            + profile.rate_of(&ActionType::Interception).successes;
        let eficiencia_defensiva = i64::from(recoveries) - i64::from(player.faltas_temp);

        let impacto_resultado = round2(
            profile
                .actions()
                .filter(|a| a.exito)
                .map(|a| a.importancia.weight())
                .sum(),
        );

        AdvancedBlock {
            posesion_individual,
            pases_clave: profile.key_passes,
            precision_bajo_presion: PressurePrecision {
                mediocampo_central: central.percent(),
                zona_defensiva: defensive.percent(),
                zona_ofensiva: offensive.percent(),
            },
            duelos_aereos_ganados,
            indice_creacion,
            eficiencia_defensiva,
            mapa_calor: heat_map(profile),
            impacto_resultado,
            tendencia_forma: form_trend(profile),
        }
    }
}

fn skill_map(player: &PlayerRecord) -> BTreeMap<String, u32> {
    [
        ("precision_tiro", player.precision_tiro),
        ("precision_pase", player.precision_pase),
        ("regate", player.regate),
        ("fuerza_disparo", player.fuerza_disparo),
        ("vision_juego", player.vision_juego),
        ("anticipacion", player.anticipacion),
        ("control_balon", player.control_balon),
        ("juego_aereo", player.juego_aereo),
        ("velocidad", player.velocidad),
        ("resistencia", player.resistencia),
        ("fuerza_fisica", player.fuerza_fisica),
        ("agilidad", player.agilidad),
        ("compostura", player.compostura),
        ("agresividad", player.agresividad),
        ("concentracion", player.concentracion),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value))
    .collect()
}

fn heat_map(profile: &ActionProfile<'_>) -> BTreeMap<String, f64> {
    let mut per_sector: BTreeMap<String, u32> = BTreeMap::new();
    for action in profile.actions() {
        *per_sector.entry(action.sector.as_str().to_string()).or_default() += 1;
    }
    let total = profile.own.len() as f64;
    per_sector
        .into_iter()
        .map(|(sector, count)| (sector, round2(f64::from(count) / total * 100.0)))
        .collect()
}

/// Current form compared with itself, docked 5 when more than 3 of the last
/// 10 actions failed. Never positive.
fn form_trend(profile: &ActionProfile<'_>) -> i64 {
    let recent = profile.own.iter().rev().take(10);
    let failures = recent.filter(|inv| !inv.action.exito).count();
    if failures > 3 {
        -5
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{action, fixture, goal, roster_player, with_actions};
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn analyze(player: &PlayerRecord, matches: &[MatchRecord]) -> PlayerAnalytics {
        PlayerAnalyticsEngine::new(&EngineConfig::default()).analyze(player, matches)
    }

    fn failed(mut a: Action) -> Action {
        a.exito = false;
        a
    }

    #[test_case(20, 1 ; "goal twenty seconds later")]
    #[test_case(30, 1 ; "goal on the window edge")]
    #[test_case(35, 0 ; "goal thirty five seconds later")]
    fn test_assist_window(goal_second: u32, expected: u32) {
        let player = roster_player("Messi", "Argentina", 93);
        let mut scored = goal(10, "Álvarez", "Argentina");
        scored.segundo = goal_second;
        let record = with_actions(
            fixture("m1", "Argentina", "Croacia", 1, 0),
            vec![action(10, 0, ActionType::Pass, "Messi", "Argentina"), scored],
        );

        let analytics = analyze(&player, &[record]);
        assert_eq!(analytics.descriptivo.totales.asistencias, expected);
    }

    #[test]
    fn test_failed_pass_is_not_an_assist() {
        let player = roster_player("Messi", "Argentina", 93);
        let record = with_actions(
            fixture("m1", "Argentina", "Croacia", 1, 0),
            vec![
                failed(action(10, 0, ActionType::Pass, "Messi", "Argentina")),
                goal(10, "Álvarez", "Argentina"),
            ],
        );
        assert_eq!(analyze(&player, &[record]).descriptivo.totales.asistencias, 0);
    }

    #[test]
    fn test_zero_shots_keeps_raw_skill() {
        let mut player = roster_player("Rodri", "España", 89);
        player.precision_tiro = 83;
        let record = with_actions(
            fixture("m1", "España", "Japón", 1, 2),
            vec![action(5, 0, ActionType::Pass, "Rodri", "España")],
        );

        let analytics = analyze(&player, &[record]);
        assert_eq!(analytics.predictivo.prob_precision_tiro, 83.0);
    }

    #[test]
    fn test_shot_precision_scaled_and_close_range_bonus() {
        let mut player = roster_player("Kane", "Inglaterra", 90);
        player.precision_tiro = 80;
        let mut close = action(20, 0, ActionType::Shot, "Kane", "Inglaterra");
        close.sector = Sector::CloseRangeBox;
        let record = with_actions(
            fixture("m1", "Inglaterra", "Francia", 1, 2),
            vec![
                close,
                action(21, 0, ActionType::Save, "Lloris", "Francia"),
                failed(action(60, 0, ActionType::Shot, "Kane", "Inglaterra")),
            ],
        );

        // (1 success - 1 save) / 2 shots leaves only the bonus
        let analytics = analyze(&player, &[record]);
        assert_eq!(analytics.predictivo.prob_precision_tiro, 10.0);
    }

    #[test]
    fn test_fatigue_from_minutes_played() {
        let mut player = roster_player("Pedri", "España", 86);
        player.resistencia = 80;
        let record = with_actions(
            fixture("m1", "España", "Marruecos", 0, 0),
            vec![action(90, 0, ActionType::Pass, "Pedri", "España")],
        );

        let analytics = analyze(&player, &[record]);
        assert_abs_diff_eq!(analytics.predictivo.nivel_fatiga, 70.57, epsilon = 0.01);
    }

    #[test]
    fn test_fatigue_without_actions() {
        let player = roster_player("Pedri", "España", 86);
        let analytics = analyze(&player, &[]);
        assert_eq!(analytics.predictivo.nivel_fatiga, 30.0);
        assert_eq!(analytics.predictivo.prob_faltas, 25.0);
        assert_eq!(analytics.avanzado.indice_creacion, 0.0);
        assert_eq!(analytics.descriptivo.totales.partidos_jugados, 0);
    }

    #[test]
    fn test_form_trend_drops_after_four_recent_failures() {
        let player = roster_player("Vini", "Brasil", 89);
        let mut actions: Vec<Action> = (0..6)
            .map(|m| action(m, 0, ActionType::Dribble, "Vini", "Brasil"))
            .collect();
        actions.extend((6..10).map(|m| failed(action(m, 0, ActionType::Dribble, "Vini", "Brasil"))));
        let record = with_actions(fixture("m1", "Brasil", "Corea", 4, 1), actions.clone());

        assert_eq!(analyze(&player, &[record]).avanzado.tendencia_forma, -5);

        actions.truncate(9);
        let record = with_actions(fixture("m1", "Brasil", "Corea", 4, 1), actions);
        assert_eq!(analyze(&player, &[record]).avanzado.tendencia_forma, 0);
    }

    #[test]
    fn test_descriptive_block() {
        let player: PlayerRecord = serde_json::from_value(serde_json::json!({
            "_id": "jugadores/7",
            "id": 7,
            "nombre": "Bruno",
            "pais": "Portugal",
            "posicion_id": 7,
            "velocidad": 60,
            "resistencia": 90,
            "fuerza_fisica": 75,
            "goles": 10,
            "goles_temp": 2,
            "especialista_penales": true,
            "bonificaciones": ["Capitán"]
        }))
        .unwrap();

        let analytics = analyze(&player, &[]);
        let block = &analytics.descriptivo;
        assert_eq!(analytics.jugador_id, "7");
        assert_eq!(block.posicion, "Mediocampista Central");
        assert_eq!(block.promedio_fisico, 75.0);
        assert_eq!(block.promedio_tecnico, 70.0);
        assert_eq!(block.atributos.len(), 15);
        assert_eq!(block.bonificaciones, vec![PENALTY_SPECIALIST.to_string(), "Capitán".to_string()]);
        assert_eq!(block.totales.goles, 12);
    }

    #[test_case(Some(1), "Portero")]
    #[test_case(Some(10), "Delantero Centro")]
    #[test_case(Some(11), "Desconocido")]
    #[test_case(None, "Desconocido")]
    fn test_position_label(id: Option<i64>, expected: &str) {
        assert_eq!(position_label(id), expected);
    }

    #[test]
    fn test_advanced_block() {
        let mut player = roster_player("Modrić", "Croacia", 88);
        player.juego_aereo = 60;
        player.faltas_temp = 1;
        let mut clearance = action(30, 0, ActionType::Clearance, "Modrić", "Croacia");
        clearance.sector = Sector::DefensiveBox;
        let record = with_actions(
            fixture("m1", "Croacia", "Brasil", 1, 1),
            vec![
                action(10, 0, ActionType::Pass, "Modrić", "Croacia"),
                action(10, 10, ActionType::Shot, "Kramarić", "Croacia"),
                clearance,
                action(40, 0, ActionType::Tackle, "Modrić", "Croacia"),
                action(41, 0, ActionType::Pass, "Neymar", "Brasil"),
            ],
        );

        let analytics = analyze(&player, &[record]);
        let block = &analytics.avanzado;
        assert_eq!(block.pases_clave, 1);
        // one successful pass out of four Croatian actions
        assert_eq!(block.posesion_individual, 25.0);
        assert_eq!(block.duelos_aereos_ganados, 60.0);
        assert_eq!(block.eficiencia_defensiva, 0);
        assert_eq!(block.precision_bajo_presion.mediocampo_central, 100.0);
        assert_eq!(block.precision_bajo_presion.zona_defensiva, 0.0);
        assert_abs_diff_eq!(block.mapa_calor["mediocampo_central"], 66.67, epsilon = 0.001);
        assert_abs_diff_eq!(block.mapa_calor["area_defensiva"], 33.33, epsilon = 0.001);
        // three medium-importance successes
        assert_eq!(block.impacto_resultado, 3.0);
        assert_eq!(block.tendencia_forma, 0);
    }
}
