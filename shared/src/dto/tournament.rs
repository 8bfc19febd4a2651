//! Tournament report documents.
//!
//! Field names follow the Spanish keys the dashboard already consumes.

use crate::dto::charts::TournamentCharts;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Comebacks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComebackMatch {
    pub partido_id: String,
    pub equipo_local: String,
    pub equipo_visitante: String,
    pub goles_local: u32,
    pub goles_visitante: u32,
    pub ganador: String,
    pub equipo_remonto: String,
    pub diferencia_maxima: u32,
    pub marcador_inicial: String,
    pub marcador_final: String,
    pub estadio: String,
    pub ciudad: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComebackTeam {
    pub equipo: String,
    pub remontadas: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComebackSummary {
    pub total_remontadas: u32,
    pub remontadas_2_goles: u32,
    pub remontadas_3_o_mas_goles: u32,
    pub equipos_con_mas_remontadas: Vec<ComebackTeam>,
    pub partidos: Vec<ComebackMatch>,
}

// ---------------------------------------------------------------------------
// Scorers and best players
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorerEntry {
    pub nombre: String,
    pub pais: String,
    /// Season total from the roster
    pub goles_totales: u32,
    pub goles_torneo: u32,
    pub partidos_jugados: u32,
    pub promedio_goles: f64,
    pub overall: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScorerSummary {
    pub total_goles_torneo: u32,
    pub promedio_goles_partido: f64,
    pub top_goleadores: Vec<ScorerEntry>,
    pub goleador_maximo: Option<ScorerEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedAttributes {
    pub precision_tiro: u32,
    pub velocidad: u32,
    pub fuerza_disparo: u32,
    pub regate: u32,
    pub vision_juego: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestPlayerEntry {
    pub nombre: String,
    pub pais: String,
    pub overall: u32,
    pub goles: u32,
    pub acciones_criticas: u32,
    pub rendimiento_promedio: i64,
    pub partidos_jugados: u32,
    pub forma_actual: u32,
    pub atributos_destacados: FeaturedAttributes,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BestPlayersSummary {
    pub criterio_evaluacion: String,
    pub total_jugadores_evaluados: u32,
    pub top_jugadores: Vec<BestPlayerEntry>,
    pub mejor_jugador_general: Option<BestPlayerEntry>,
}

// ---------------------------------------------------------------------------
// Teams and discipline
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TeamRecord {
    pub equipo: String,
    pub partidos_jugados: u32,
    pub victorias: u32,
    pub empates: u32,
    pub derrotas: u32,
    pub goles_favor: u32,
    pub goles_contra: u32,
    pub diferencia_goles: i64,
    pub porcentaje_victorias: f64,
    pub racha_actual: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub siglas: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranking: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TeamsSummary {
    pub total_equipos: u32,
    pub equipo_mas_goleador: Option<TeamRecord>,
    pub mejor_defensa: Option<TeamRecord>,
    pub equipo_mas_victorias: Option<TeamRecord>,
    pub equipos: Vec<TeamRecord>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TeamCards {
    pub equipo: String,
    pub amarillas: u32,
    pub rojas: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlayerCards {
    pub jugador: String,
    pub equipo: Option<String>,
    pub amarillas: u32,
    pub rojas: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DisciplineSummary {
    pub total_tarjetas_amarillas: u32,
    pub total_tarjetas_rojas: u32,
    pub promedio_amarillas_partido: f64,
    pub promedio_rojas_partido: f64,
    pub equipo_mas_indisciplinado: Option<TeamCards>,
    pub jugador_mas_amonestado: Option<PlayerCards>,
    /// Per-team card totals in first-seen order
    pub tarjetas_por_equipo: Vec<TeamCards>,
}

// ---------------------------------------------------------------------------
// Matches, venues, home/away
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightedMatch {
    pub partido_id: String,
    pub equipo_local: String,
    pub equipo_visitante: String,
    pub goles_local: u32,
    pub goles_visitante: u32,
    pub total_goles: u32,
    pub asistencia: u64,
    pub categoria: String,
    pub descripcion: String,
    pub estadio: String,
    pub ciudad: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HighlightsSummary {
    pub total_partidos: u32,
    pub promedio_goles_partido: f64,
    pub partido_mas_goles: Option<HighlightedMatch>,
    pub partido_mas_asistencia: Option<HighlightedMatch>,
    pub partidos_destacados: Vec<HighlightedMatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StadiumRecord {
    pub estadio: String,
    pub ciudad: String,
    pub partidos_jugados: u32,
    pub total_goles: u32,
    pub promedio_goles: f64,
    pub asistencia_total: u64,
    /// Floor of total attendance over matches
    pub asistencia_promedio: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StadiumsSummary {
    pub total_estadios: u32,
    pub estadio_mas_partidos: Option<StadiumRecord>,
    pub estadio_mas_goleador: Option<StadiumRecord>,
    pub estadio_mayor_asistencia: Option<StadiumRecord>,
    pub estadios: Vec<StadiumRecord>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GoalTypeBreakdown {
    pub goles_penal: u32,
    pub goles_corner: u32,
    pub goles_tiro_libre: u32,
    pub goles_jugada_normal: u32,
    pub porcentaje_penal: f64,
    pub porcentaje_corner: f64,
    pub porcentaje_tiro_libre: f64,
    pub porcentaje_jugada_normal: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HomeAwaySummary {
    pub total_partidos: u32,
    pub victorias_local: u32,
    pub victorias_visitante: u32,
    pub empates: u32,
    pub porcentaje_local: f64,
    pub porcentaje_visitante: f64,
    pub porcentaje_empate: f64,
    pub goles_local_total: u32,
    pub goles_visitante_total: u32,
    pub promedio_goles_local: f64,
    pub promedio_goles_visitante: f64,
    pub goles_local_detalle: GoalTypeBreakdown,
    pub goles_visitante_detalle: GoalTypeBreakdown,
}

// ---------------------------------------------------------------------------
// Injuries and referees
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjuredPlayer {
    pub jugador: String,
    pub equipo: String,
    pub partido_id: String,
    pub minuto: Option<u32>,
    pub rival: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamInjuries {
    pub equipo: String,
    pub lesiones: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InjuriesSummary {
    pub total_lesiones: u32,
    pub promedio_lesiones_partido: f64,
    pub equipo_mas_lesiones: Option<TeamInjuries>,
    pub jugadores_lesionados: Vec<InjuredPlayer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefereeRecord {
    pub nombre: String,
    pub partidos_arbitrados: u32,
    pub amarillas_mostradas: u32,
    pub rojas_mostradas: u32,
    pub promedio_amarillas: f64,
    pub promedio_rojas: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineRefereeNote {
    pub mensaje: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RefereesSummary {
    pub total_arbitros_principal: u32,
    pub total_arbitros_linea: u32,
    pub arbitro_mas_partidos: Option<RefereeRecord>,
    pub arbitro_mas_amarillas: Option<RefereeRecord>,
    pub arbitro_mas_rojas: Option<RefereeRecord>,
    pub arbitros_principales: Vec<RefereeRecord>,
    pub estadisticas_arbitros_linea: LineRefereeNote,
}

// ---------------------------------------------------------------------------
// Special matches
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExcitingMatch {
    pub partido_id: String,
    pub equipo_local: String,
    pub equipo_visitante: String,
    pub marcador: String,
    pub acciones_criticas: u32,
    pub acciones_altas: u32,
    pub total_acciones: u32,
    pub indice_emocion: f64,
    pub estadio: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoringMatch {
    pub partido_id: String,
    pub equipo_local: String,
    pub equipo_visitante: String,
    pub marcador: String,
    pub total_acciones: u32,
    pub total_goles: u32,
    pub indice_aburrimiento: f64,
    pub estadio: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggressiveMatch {
    pub partido_id: String,
    pub equipo_local: String,
    pub equipo_visitante: String,
    pub marcador: String,
    pub total_faltas: u32,
    pub tarjetas_amarillas: u32,
    pub tarjetas_rojas: u32,
    pub indice_agresividad: u32,
    pub estadio: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LateWinner {
    pub partido_id: String,
    pub equipo_local: String,
    pub equipo_visitante: String,
    pub equipo_ganador: String,
    pub marcador_final: String,
    pub minuto_gol_decisivo: u32,
    pub jugador: String,
    pub marcador_antes_gol: String,
    pub descripcion: String,
}

/// Severity label attached to a blowout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlowoutCategory {
    /// Margin of five goals or more
    #[serde(rename = "Humillación épica")]
    EpicHumiliation,
    #[serde(rename = "Goleada histórica")]
    HistoricBlowout,
    #[serde(rename = "Goleada contundente")]
    ResoundingBlowout,
}

impl BlowoutCategory {
    /// Category for an absolute goal margin, `None` below three.
    pub fn for_margin(margin: u32) -> Option<Self> {
        match margin {
            0..=2 => None,
            3 => Some(BlowoutCategory::ResoundingBlowout),
            4 => Some(BlowoutCategory::HistoricBlowout),
            _ => Some(BlowoutCategory::EpicHumiliation),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blowout {
    pub partido_id: String,
    pub equipo_ganador: String,
    pub equipo_perdedor: String,
    pub marcador: String,
    pub diferencia_goles: u32,
    pub categoria_humillacion: BlowoutCategory,
    pub estadio: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceMark {
    pub partido_id: String,
    pub equipo_local: String,
    pub equipo_visitante: String,
    pub marcador: String,
    pub asistencia: u64,
    pub estadio: String,
}

/// Sizes of the special-match lists before capping
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpecialMatchTotals {
    pub emocionantes: u32,
    pub aburridos: u32,
    pub agresivos: u32,
    pub ultimo_minuto: u32,
    pub goleadas: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpecialMatchesSummary {
    pub partidos_emocionantes: Vec<ExcitingMatch>,
    pub partidos_aburridos: Vec<BoringMatch>,
    pub partidos_agresivos: Vec<AggressiveMatch>,
    pub goles_ultimo_minuto: Vec<LateWinner>,
    pub goleadas: Vec<Blowout>,
    pub partido_menor_asistencia: Option<AttendanceMark>,
    pub partido_mayor_asistencia: Option<AttendanceMark>,
    pub totales: SpecialMatchTotals,
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Full tournament statistics document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentReport {
    pub torneo: String,
    pub total_partidos: u32,
    pub total_equipos: u32,
    pub total_goles: u32,
    pub remontadas: ComebackSummary,
    pub goleadores: ScorerSummary,
    pub mejores_jugadores: BestPlayersSummary,
    pub equipos: TeamsSummary,
    pub disciplina: DisciplineSummary,
    pub partidos_destacados: HighlightsSummary,
    pub estadios: StadiumsSummary,
    pub local_visitante: HomeAwaySummary,
    pub lesiones: InjuriesSummary,
    pub arbitros: RefereesSummary,
    pub partidos_especiales: SpecialMatchesSummary,
    pub graficas: TournamentCharts,
    pub fecha_generacion: DateTime<Utc>,
    pub mensaje: String,
    /// Match documents dropped at ingest
    pub registros_omitidos: u32,
}
