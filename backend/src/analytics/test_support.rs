//! Builders for match histories used across the aggregator tests.

use shared::{
    Action, ActionStats, ActionType, CardDetail, Importance, InjuryEntry, MatchRecord, MatchVenue,
    PlayerRecord, Sector, DRAW,
};
use std::collections::BTreeMap;

pub fn fixture(id: &str, home: &str, away: &str, home_goals: u32, away_goals: u32) -> MatchRecord {
    let ganador = if home_goals > away_goals {
        home.to_string()
    } else if away_goals > home_goals {
        away.to_string()
    } else {
        DRAW.to_string()
    };

    MatchRecord {
        id: id.to_string(),
        equipo_local: home.to_string(),
        equipo_visitante: away.to_string(),
        goles_local: home_goals,
        goles_visitante: away_goals,
        ganador,
        asistencia: 0,
        ubicacion: MatchVenue::default(),
        jornada: None,
        acciones: Vec::new(),
        tarjetas_amarillas: BTreeMap::new(),
        tarjetas_amarillas_detalle: Vec::new(),
        tarjetas_rojas_detalle: Vec::new(),
        lesiones: Default::default(),
        estadisticas_acciones: ActionStats::default(),
        partido_original_id: None,
    }
}

pub fn action(minute: u32, second: u32, kind: ActionType, player: &str, team: &str) -> Action {
    Action {
        clave: None,
        minuto: minute,
        segundo: second,
        tipo: kind,
        jugador: player.to_string(),
        equipo: team.to_string(),
        descripcion: String::new(),
        importancia: Importance::Medium,
        sector: Sector::CentralMidfield,
        exito: true,
    }
}

pub fn goal(minute: u32, player: &str, team: &str) -> Action {
    Action {
        importancia: Importance::Critical,
        sector: Sector::OffensiveBox,
        ..action(minute, 0, ActionType::Goal, player, team)
    }
}

pub fn card(player: &str, team: &str) -> CardDetail {
    CardDetail {
        jugador: Some(player.to_string()),
        equipo: Some(team.to_string()),
        minuto: Some(30),
    }
}

pub fn injury(player: &str, minute: u32) -> InjuryEntry {
    InjuryEntry::Detailed {
        jugador: player.to_string(),
        minuto: Some(minute),
    }
}

pub fn at_venue(mut record: MatchRecord, stadium: &str, city: &str, attendance: u64) -> MatchRecord {
    record.ubicacion = MatchVenue {
        estadio: Some(stadium.to_string()),
        ciudad: Some(city.to_string()),
        pais: None,
    };
    record.asistencia = attendance;
    record
}

pub fn with_actions(mut record: MatchRecord, actions: Vec<Action>) -> MatchRecord {
    record.acciones = actions;
    record
}

pub fn roster_player(name: &str, team: &str, overall: u32) -> PlayerRecord {
    serde_json::from_value(serde_json::json!({
        "_id": format!("jugadores/{}", name),
        "nombre": name,
        "pais": team,
        "overall": overall,
    }))
    .unwrap()
}
