use crate::models::lenient::{self, document_id, lenient_list, nullable, whole_number};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use validator::Validate;

/// Value of `ganador` when a match ends level.
pub const DRAW: &str = "Empate";

/// Closed vocabulary of in-match events as stored in `historial.acciones[].tipo`.
///
/// Unrecognised labels are kept verbatim in [`ActionType::Other`] so a single
/// odd action never invalidates its match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionType {
    Goal,
    Pass,
    Shot,
    Save,
    YellowCard,
    Cross,
    Offside,
    Substitution,
    KickOff,
    FreeKick,
    Blocked,
    Interception,
    Post,
    Clearance,
    RefereeSignal,
    VarRequest,
    VarReview,
    Tackle,
    Dribble,
    Deflected,
    Corner,
    HalfTime,
    FullTime,
    Foul,
    Other(String),
}

impl ActionType {
    pub fn as_str(&self) -> &str {
        match self {
            ActionType::Goal => "Gol",
            ActionType::Pass => "Pase",
            ActionType::Shot => "Tiro",
            ActionType::Save => "Atajada",
            ActionType::YellowCard => "Tarjeta Amarilla",
            ActionType::Cross => "Centro",
            ActionType::Offside => "Fuera de juego",
            ActionType::Substitution => "Cambio",
            ActionType::KickOff => "Saque de Centro",
            ActionType::FreeKick => "Tiro Libre",
            ActionType::Blocked => "Bloqueado",
            ActionType::Interception => "Intercepción",
            ActionType::Post => "Poste",
            ActionType::Clearance => "Despeje",
            ActionType::RefereeSignal => "Señalización árbitro",
            ActionType::VarRequest => "Solicitud VAR",
            ActionType::VarReview => "Revisión VAR",
            ActionType::Tackle => "Entrada",
            ActionType::Dribble => "Regate",
            ActionType::Deflected => "Desviado",
            ActionType::Corner => "Córner",
            ActionType::HalfTime => "Descanso",
            ActionType::FullTime => "Final",
            ActionType::Foul => "Falta",
            ActionType::Other(raw) => raw,
        }
    }
}

impl From<String> for ActionType {
    fn from(raw: String) -> Self {
        match raw.trim() {
            "Gol" | "Goal" => ActionType::Goal,
            "Pase" | "Pass" => ActionType::Pass,
            "Tiro" | "Shot" => ActionType::Shot,
            "Atajada" | "Save" => ActionType::Save,
            "Tarjeta Amarilla" | "YellowCard" => ActionType::YellowCard,
            "Centro" | "Cross" => ActionType::Cross,
            "Fuera de juego" | "Offside" => ActionType::Offside,
            "Cambio" | "Substitution" => ActionType::Substitution,
            "Saque de Centro" | "Inicio" | "KickOff" => ActionType::KickOff,
            "Tiro Libre" | "FreeKick" => ActionType::FreeKick,
            "Bloqueado" | "Blocked" => ActionType::Blocked,
            "Intercepción" | "Interception" => ActionType::Interception,
            "Poste" | "Post" => ActionType::Post,
            "Despeje" | "Clearance" => ActionType::Clearance,
            "Señalización árbitro" | "RefereeSignal" => ActionType::RefereeSignal,
            "Solicitud VAR" | "VARRequest" => ActionType::VarRequest,
            "Revisión VAR" | "VARReview" => ActionType::VarReview,
            "Entrada" | "Tackle" => ActionType::Tackle,
            "Regate" | "Dribble" => ActionType::Dribble,
            "Desviado" | "Deflected" => ActionType::Deflected,
            "Córner" | "Corner" => ActionType::Corner,
            "Descanso" | "HalfTime" => ActionType::HalfTime,
            "Final" | "FullTime" => ActionType::FullTime,
            "Falta" | "Foul" => ActionType::Foul,
            _ => ActionType::Other(raw),
        }
    }
}

impl From<ActionType> for String {
    fn from(kind: ActionType) -> Self {
        kind.as_str().to_string()
    }
}

impl Default for ActionType {
    fn default() -> Self {
        ActionType::Other(String::new())
    }
}

/// Severity tier attached to every action.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Importance {
    Critical,
    High,
    Medium,
    Low,
    Unknown(String),
}

impl Importance {
    pub fn as_str(&self) -> &str {
        match self {
            Importance::Critical => "critica",
            Importance::High => "alta",
            Importance::Medium => "media",
            Importance::Low => "baja",
            Importance::Unknown(raw) => raw,
        }
    }

    /// Weight used when scoring an action's influence on the result.
    pub fn weight(&self) -> f64 {
        match self {
            Importance::Critical => 2.0,
            Importance::High => 1.5,
            Importance::Medium => 1.0,
            Importance::Low | Importance::Unknown(_) => 0.5,
        }
    }
}

impl From<String> for Importance {
    fn from(raw: String) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "critica" | "crítica" | "critical" => Importance::Critical,
            "alta" | "high" => Importance::High,
            "media" | "medium" => Importance::Medium,
            "baja" | "low" => Importance::Low,
            _ => Importance::Unknown(raw),
        }
    }
}

impl From<Importance> for String {
    fn from(tier: Importance) -> Self {
        tier.as_str().to_string()
    }
}

impl Default for Importance {
    fn default() -> Self {
        Importance::Unknown(String::new())
    }
}

/// Qualitative pitch zone of an action.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sector {
    CentralMidfield,
    CloseRangeBox,
    OffensiveBox,
    OffensiveLeft,
    OffensiveRight,
    DefensiveBox,
    DefensiveLeft,
    DefensiveRight,
    Other(String),
}

impl Sector {
    pub fn as_str(&self) -> &str {
        match self {
            Sector::CentralMidfield => "mediocampo_central",
            Sector::CloseRangeBox => "area_chica",
            Sector::OffensiveBox => "area_ofensiva",
            Sector::OffensiveLeft => "ataque_izquierdo",
            Sector::OffensiveRight => "ataque_derecho",
            Sector::DefensiveBox => "area_defensiva",
            Sector::DefensiveLeft => "defensa_izquierda",
            Sector::DefensiveRight => "defensa_derecha",
            Sector::Other(raw) => raw,
        }
    }

    pub fn is_defensive(&self) -> bool {
        matches!(
            self,
            Sector::DefensiveBox | Sector::DefensiveLeft | Sector::DefensiveRight
        )
    }

    pub fn is_offensive(&self) -> bool {
        matches!(
            self,
            Sector::OffensiveBox | Sector::OffensiveLeft | Sector::OffensiveRight
        )
    }
}

impl From<String> for Sector {
    fn from(raw: String) -> Self {
        let key = raw.trim().to_lowercase().replace([' ', '-'], "_");
        match key.as_str() {
            "mediocampo_central" | "central_midfield" => Sector::CentralMidfield,
            "area_chica" | "área_chica" | "close_range_box" => Sector::CloseRangeBox,
            "area_ofensiva" | "área_ofensiva" | "offensive_box" => Sector::OffensiveBox,
            "ataque_izquierdo" | "offensive_left" => Sector::OffensiveLeft,
            "ataque_derecho" | "offensive_right" => Sector::OffensiveRight,
            "area_defensiva" | "área_defensiva" | "defensive_box" => Sector::DefensiveBox,
            "defensa_izquierda" | "defensive_left" => Sector::DefensiveLeft,
            "defensa_derecha" | "defensive_right" => Sector::DefensiveRight,
            _ => Sector::Other(raw),
        }
    }
}

impl From<Sector> for String {
    fn from(sector: Sector) -> Self {
        sector.as_str().to_string()
    }
}

impl Default for Sector {
    fn default() -> Self {
        Sector::Other(String::new())
    }
}

/// One timestamped event inside a match.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Action {
    #[serde(default)]
    pub clave: Option<String>,
    #[serde(default, deserialize_with = "whole_number")]
    pub minuto: u32,
    #[serde(default, deserialize_with = "whole_number")]
    pub segundo: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub tipo: ActionType,
    #[serde(default, deserialize_with = "nullable")]
    pub jugador: String,
    #[serde(default, deserialize_with = "nullable")]
    pub equipo: String,
    #[serde(default, deserialize_with = "nullable")]
    pub descripcion: String,
    #[serde(default, deserialize_with = "nullable")]
    pub importancia: Importance,
    #[serde(default, deserialize_with = "nullable")]
    pub sector: Sector,
    #[serde(default, deserialize_with = "nullable")]
    pub exito: bool,
}

impl Action {
    /// Match clock in seconds.
    pub fn clock(&self) -> i64 {
        i64::from(self.minuto) * 60 + i64::from(self.segundo)
    }

    pub fn is(&self, kind: &ActionType) -> bool {
        &self.tipo == kind
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchVenue {
    #[serde(default)]
    pub estadio: Option<String>,
    #[serde(default)]
    pub ciudad: Option<String>,
    #[serde(default)]
    pub pais: Option<String>,
}

/// A booking as listed in `tarjetas_*_detalle`.
///
/// Stored entries are not always objects; those still count as a card but
/// carry no player or team.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct CardDetail {
    pub jugador: Option<String>,
    pub equipo: Option<String>,
    pub minuto: Option<u32>,
}

impl From<Value> for CardDetail {
    fn from(value: Value) -> Self {
        Self {
            jugador: lenient::text_field(&value, "jugador"),
            equipo: lenient::text_field(&value, "equipo"),
            minuto: lenient::minute_field(&value, "minuto"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", untagged)]
pub enum InjuryEntry {
    Detailed { jugador: String, minuto: Option<u32> },
    Opaque,
}

impl From<Value> for InjuryEntry {
    fn from(value: Value) -> Self {
        if value.is_object() {
            InjuryEntry::Detailed {
                jugador: lenient::text_field(&value, "jugador")
                    .unwrap_or_else(|| "Desconocido".to_string()),
                minuto: lenient::minute_field(&value, "minuto"),
            }
        } else {
            InjuryEntry::Opaque
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchInjuries {
    #[serde(default, deserialize_with = "nullable")]
    pub local: Vec<InjuryEntry>,
    #[serde(default, deserialize_with = "nullable")]
    pub visitante: Vec<InjuryEntry>,
}

/// Per-match action counters precomputed by the match simulator.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActionStats {
    #[serde(default, deserialize_with = "nullable")]
    pub total_acciones: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub acciones_criticas: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub acciones_altas: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub acciones_medias: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub acciones_bajas: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub conteo_por_tipo: BTreeMap<String, u32>,
}

impl ActionStats {
    pub fn count_of(&self, kind: &ActionType) -> u32 {
        self.conteo_por_tipo.get(kind.as_str()).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

/// A finished match as persisted in the `historial` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MatchRecord {
    #[serde(rename = "_id", default, deserialize_with = "document_id")]
    pub id: String,
    #[validate(length(min = 1))]
    pub equipo_local: String,
    #[validate(length(min = 1))]
    pub equipo_visitante: String,
    #[serde(default, deserialize_with = "nullable")]
    pub goles_local: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub goles_visitante: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub ganador: String,
    #[serde(default, deserialize_with = "nullable")]
    pub asistencia: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub ubicacion: MatchVenue,
    #[serde(default)]
    pub jornada: Option<String>,
    /// Actions that fail to parse are dropped, the match is kept.
    #[serde(default, deserialize_with = "lenient_list")]
    pub acciones: Vec<Action>,
    #[serde(default, deserialize_with = "nullable")]
    pub tarjetas_amarillas: BTreeMap<String, u32>,
    #[serde(default, deserialize_with = "nullable")]
    pub tarjetas_amarillas_detalle: Vec<CardDetail>,
    #[serde(default, deserialize_with = "nullable")]
    pub tarjetas_rojas_detalle: Vec<CardDetail>,
    #[serde(default, deserialize_with = "nullable")]
    pub lesiones: MatchInjuries,
    #[serde(default, deserialize_with = "nullable")]
    pub estadisticas_acciones: ActionStats,
    #[serde(default)]
    pub partido_original_id: Option<String>,
}

impl MatchRecord {
    pub fn total_goals(&self) -> u32 {
        self.goles_local + self.goles_visitante
    }

    pub fn is_draw(&self) -> bool {
        self.ganador == DRAW
    }

    /// Final score as `"local-visitante"`.
    pub fn score_line(&self) -> String {
        format!("{}-{}", self.goles_local, self.goles_visitante)
    }

    pub fn side_of(&self, team: &str) -> Option<Side> {
        if team == self.equipo_local {
            Some(Side::Home)
        } else if team == self.equipo_visitante {
            Some(Side::Away)
        } else {
            None
        }
    }

    /// Side named in `ganador`; `None` for a draw or an unknown name.
    pub fn winner_side(&self) -> Option<Side> {
        self.side_of(&self.ganador)
    }

    /// Yellow cards from the per-team tally field.
    pub fn yellow_card_tally(&self) -> u32 {
        self.tarjetas_amarillas.values().sum()
    }

    pub fn red_card_count(&self) -> u32 {
        self.tarjetas_rojas_detalle.len() as u32
    }

    pub fn stadium(&self) -> &str {
        self.ubicacion.estadio.as_deref().unwrap_or("N/A")
    }

    pub fn city(&self) -> &str {
        self.ubicacion.ciudad.as_deref().unwrap_or("N/A")
    }
}
