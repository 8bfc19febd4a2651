use crate::analytics::tally::rank_desc;
use log::info;
use shared::{
    Chart, ChartDataset, ChartType, ColorSpec, DisciplineSummary, GoalTypeBreakdown,
    HomeAwaySummary, MatchRecord, ScorerSummary, TeamCards, TeamRecord, TeamsSummary,
    TournamentCharts,
};
use std::collections::BTreeMap;

const GREEN: &str = "#4CAF50";
const BLUE: &str = "#2196F3";
const AMBER: &str = "#FFC107";
const PINK: &str = "#FF6384";
const YELLOW: &str = "#FFEB3B";
const RED: &str = "#F44336";

const GOAL_ORIGIN_LABELS: [&str; 4] = ["Penal", "Corner", "Tiro Libre", "Jugada Normal"];

fn chart(tipo: ChartType, titulo: &str, labels: Vec<String>, datasets: Vec<ChartDataset>) -> Chart {
    Chart {
        tipo,
        titulo: titulo.to_string(),
        labels,
        datasets,
    }
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn counts(values: impl IntoIterator<Item = u32>) -> Vec<f64> {
    values.into_iter().map(f64::from).collect()
}

fn origin_counts(detail: &GoalTypeBreakdown) -> [u32; 4] {
    [
        detail.goles_penal,
        detail.goles_corner,
        detail.goles_tiro_libre,
        detail.goles_jugada_normal,
    ]
}

/// Input sections the charts are projected from.
pub struct ChartSources<'a> {
    pub matches: &'a [MatchRecord],
    pub home_away: &'a HomeAwaySummary,
    pub scorers: &'a ScorerSummary,
    pub teams: &'a TeamsSummary,
    pub discipline: &'a DisciplineSummary,
}

/// Maps report sections onto chart descriptors.
#[derive(Clone, Default)]
pub struct TournamentVisualization;

impl TournamentVisualization {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, sources: &ChartSources<'_>) -> TournamentCharts {
        info!("Generando datos para gráficas");

        let top_scoring_teams = Self::top_scoring_teams(sources.teams);
        TournamentCharts {
            victorias_local_visitante: self.results_by_side(sources.home_away),
            tipos_goles: self.goal_origins(sources.home_away),
            top_goleadores: self.top_scorers(sources.scorers),
            goles_local_vs_visitante: self.goal_origins_by_side(sources.home_away),
            distribucion_tarjetas: self.card_distribution(sources.discipline),
            equipos_goleadores: self.scoring_teams(&top_scoring_teams),
            balance_goles_equipos: self.goal_balance(&top_scoring_teams),
            porcentajes_resultados: self.result_percentages(sources.home_away),
            estadisticas_promedio: self.per_match_averages(sources),
            goles_por_jornada: self.goals_per_round(sources.matches),
            disciplina_por_equipo: self.cards_per_team(sources.discipline),
        }
    }

    fn results_by_side(&self, home_away: &HomeAwaySummary) -> Chart {
        chart(
            ChartType::Bar,
            "Resultados: Local vs Visitante",
            labels(&["Victoria Local", "Victoria Visitante", "Empate"]),
            vec![ChartDataset::new(
                Some("Cantidad de Partidos"),
                counts([home_away.victorias_local, home_away.victorias_visitante, home_away.empates]),
                ColorSpec::palette(&[GREEN, BLUE, AMBER]),
            )],
        )
    }

    fn goal_origins(&self, home_away: &HomeAwaySummary) -> Chart {
        let home = origin_counts(&home_away.goles_local_detalle);
        let away = origin_counts(&home_away.goles_visitante_detalle);
        let combined = home.iter().zip(away.iter()).map(|(h, a)| h + a);
        chart(
            ChartType::Pie,
            "Distribución de Goles por Tipo",
            labels(&GOAL_ORIGIN_LABELS),
            vec![ChartDataset::new(
                None,
                counts(combined),
                ColorSpec::palette(&[PINK, "#36A2EB", "#FFCE56", "#4BC0C0"]),
            )],
        )
    }

    fn top_scorers(&self, scorers: &ScorerSummary) -> Chart {
        let top = scorers.top_goleadores.iter().take(10);
        chart(
            ChartType::HorizontalBar,
            "Top 10 Goleadores del Torneo",
            top.clone().map(|s| s.nombre.clone()).collect(),
            vec![ChartDataset::new(
                Some("Goles"),
                counts(top.map(|s| s.goles_torneo)),
                ColorSpec::single(PINK),
            )],
        )
    }

    fn goal_origins_by_side(&self, home_away: &HomeAwaySummary) -> Chart {
        chart(
            ChartType::Bar,
            "Comparación de Goles: Local vs Visitante",
            labels(&GOAL_ORIGIN_LABELS),
            vec![
                ChartDataset::new(
                    Some("Local"),
                    counts(origin_counts(&home_away.goles_local_detalle)),
                    ColorSpec::single(GREEN),
                ),
                ChartDataset::new(
                    Some("Visitante"),
                    counts(origin_counts(&home_away.goles_visitante_detalle)),
                    ColorSpec::single(BLUE),
                ),
            ],
        )
    }

    fn card_distribution(&self, discipline: &DisciplineSummary) -> Chart {
        chart(
            ChartType::Pie,
            "Distribución de Tarjetas",
            labels(&["Tarjetas Amarillas", "Tarjetas Rojas"]),
            vec![ChartDataset::new(
                None,
                counts([discipline.total_tarjetas_amarillas, discipline.total_tarjetas_rojas]),
                ColorSpec::palette(&[YELLOW, RED]),
            )],
        )
    }

    fn top_scoring_teams(teams: &TeamsSummary) -> Vec<TeamRecord> {
        let mut ranked = teams.equipos.clone();
        rank_desc(&mut ranked, |t| t.goles_favor);
        ranked.truncate(10);
        ranked
    }

    fn scoring_teams(&self, top: &[TeamRecord]) -> Chart {
        chart(
            ChartType::Bar,
            "Top 10 Equipos Goleadores",
            top.iter().map(|t| t.equipo.clone()).collect(),
            vec![ChartDataset::new(
                Some("Goles a Favor"),
                counts(top.iter().map(|t| t.goles_favor)),
                ColorSpec::single("#8BC34A"),
            )],
        )
    }

    fn goal_balance(&self, top: &[TeamRecord]) -> Chart {
        chart(
            ChartType::Bar,
            "Balance de Goles - Top 10 Equipos",
            top.iter().map(|t| t.equipo.clone()).collect(),
            vec![
                ChartDataset::new(
                    Some("Goles a Favor"),
                    counts(top.iter().map(|t| t.goles_favor)),
                    ColorSpec::single(GREEN),
                ),
                ChartDataset::new(
                    Some("Goles en Contra"),
                    counts(top.iter().map(|t| t.goles_contra)),
                    ColorSpec::single(RED),
                ),
            ],
        )
    }

    fn result_percentages(&self, home_away: &HomeAwaySummary) -> Chart {
        chart(
            ChartType::Doughnut,
            "Porcentaje de Resultados",
            labels(&["Local", "Visitante", "Empate"]),
            vec![ChartDataset::new(
                None,
                vec![
                    home_away.porcentaje_local,
                    home_away.porcentaje_visitante,
                    home_away.porcentaje_empate,
                ],
                ColorSpec::palette(&[GREEN, BLUE, AMBER]),
            )],
        )
    }

    fn per_match_averages(&self, sources: &ChartSources<'_>) -> Chart {
        let dataset = ChartDataset {
            border_color: Some("#36A2EB".to_string()),
            point_background_color: Some("#36A2EB".to_string()),
            ..ChartDataset::new(
                Some("Promedio"),
                vec![
                    sources.home_away.promedio_goles_local,
                    sources.home_away.promedio_goles_visitante,
                    sources.discipline.promedio_amarillas_partido,
                    // scaled so reds are visible next to the other series
                    sources.discipline.promedio_rojas_partido * 5.0,
                    sources.scorers.promedio_goles_partido,
                ],
                ColorSpec::single("rgba(54, 162, 235, 0.2)"),
            )
        };
        chart(
            ChartType::Radar,
            "Estadísticas Promedio por Partido",
            labels(&[
                "Goles Local",
                "Goles Visitante",
                "Tarjetas Amarillas",
                "Tarjetas Rojas (x5)",
                "Total Goles",
            ]),
            vec![dataset],
        )
    }

    fn goals_per_round(&self, matches: &[MatchRecord]) -> Chart {
        let mut per_round: BTreeMap<&str, u32> = BTreeMap::new();
        for record in matches {
            match record.jornada.as_deref() {
                None | Some("N/A") => {}
                Some(round) => *per_round.entry(round).or_default() += record.total_goals(),
            }
        }

        let dataset = ChartDataset {
            border_color: Some(PINK.to_string()),
            fill: Some(true),
            ..ChartDataset::new(
                Some("Total de Goles"),
                counts(per_round.values().copied()),
                ColorSpec::single("rgba(255, 99, 132, 0.2)"),
            )
        };
        chart(
            ChartType::Line,
            "Goles Totales por Jornada",
            per_round.keys().map(|k| k.to_string()).collect(),
            vec![dataset],
        )
    }

    fn cards_per_team(&self, discipline: &DisciplineSummary) -> Chart {
        let mut ranked: Vec<TeamCards> = discipline.tarjetas_por_equipo.clone();
        rank_desc(&mut ranked, |t| t.amarillas + 3 * t.rojas);
        ranked.truncate(10);

        chart(
            ChartType::Bar,
            "Top 10 Equipos con Más Tarjetas",
            ranked.iter().map(|t| t.equipo.clone()).collect(),
            vec![
                ChartDataset::new(
                    Some("Amarillas"),
                    counts(ranked.iter().map(|t| t.amarillas)),
                    ColorSpec::single(YELLOW),
                ),
                ChartDataset::new(
                    Some("Rojas"),
                    counts(ranked.iter().map(|t| t.rojas)),
                    ColorSpec::single(RED),
                ),
            ],
        )
    }
}
