use serde::{Deserialize, Serialize};

/// Chart kinds understood by the dashboard's charting library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartType {
    Bar,
    HorizontalBar,
    Pie,
    Line,
    Radar,
    Doughnut,
}

/// Either one color for the whole series or one color per category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(String),
    Palette(Vec<String>),
}

impl ColorSpec {
    pub fn single(color: &str) -> Self {
        ColorSpec::Single(color.to_string())
    }

    pub fn palette(colors: &[&str]) -> Self {
        ColorSpec::Palette(colors.iter().map(|c| c.to_string()).collect())
    }
}

/// One named series of a chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    pub background_color: ColorSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

impl ChartDataset {
    pub fn new(label: Option<&str>, data: Vec<f64>, background_color: ColorSpec) -> Self {
        Self {
            label: label.map(str::to_string),
            data,
            background_color,
            border_color: None,
            point_background_color: None,
            fill: None,
        }
    }
}

/// Chart-ready descriptor: type, title, category labels and series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub tipo: ChartType,
    pub titulo: String,
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

/// The fixed set of charts attached to every tournament report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentCharts {
    pub victorias_local_visitante: Chart,
    pub tipos_goles: Chart,
    pub top_goleadores: Chart,
    pub goles_local_vs_visitante: Chart,
    pub distribucion_tarjetas: Chart,
    pub equipos_goleadores: Chart,
    pub balance_goles_equipos: Chart,
    pub porcentajes_resultados: Chart,
    pub estadisticas_promedio: Chart,
    pub goles_por_jornada: Chart,
    pub disciplina_por_equipo: Chart,
}
