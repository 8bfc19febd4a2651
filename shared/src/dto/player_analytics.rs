use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Season and tournament totals for one player
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeasonTotals {
    /// Season goals plus in-tournament goals
    pub goles: u32,
    pub faltas: u32,
    pub lesiones: u32,
    pub asistencias: u32,
    pub tarjetas_amarillas: u32,
    pub tarjetas_rojas: u32,
    pub partidos_jugados: u32,
    pub acciones_registradas: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DescriptiveBlock {
    pub posicion: String,
    pub pie_habil: String,
    pub forma_actual: u32,
    pub moral: u32,
    pub promedio_fisico: f64,
    pub promedio_tecnico: f64,
    /// All fifteen rated skills keyed by their stored name
    pub atributos: BTreeMap<String, u32>,
    pub bonificaciones: Vec<String>,
    pub totales: SeasonTotals,
}

/// 0-100 estimates blending skill ratings with the player's own history
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PredictiveBlock {
    pub prob_pase_exitoso: f64,
    pub prob_precision_tiro: f64,
    pub prob_regate_exitoso: f64,
    pub prob_recuperacion: f64,
    pub nivel_fatiga: f64,
    pub prob_faltas: f64,
    pub contribucion_gol: f64,
}

/// Success rates of passes, shots and dribbles per pitch zone
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PressurePrecision {
    pub mediocampo_central: f64,
    pub zona_defensiva: f64,
    pub zona_ofensiva: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AdvancedBlock {
    pub posesion_individual: f64,
    pub pases_clave: u32,
    pub precision_bajo_presion: PressurePrecision,
    pub duelos_aereos_ganados: f64,
    pub indice_creacion: f64,
    pub eficiencia_defensiva: i64,
    /// Share of the player's actions per sector, in percent
    pub mapa_calor: BTreeMap<String, f64>,
    pub impacto_resultado: f64,
    /// Either 0 or -5; never positive
    pub tendencia_forma: i64,
}

/// Analytics document for a single player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerAnalytics {
    pub jugador_id: String,
    pub nombre: String,
    pub pais: String,
    pub descriptivo: DescriptiveBlock,
    pub predictivo: PredictiveBlock,
    pub avanzado: AdvancedBlock,
}
