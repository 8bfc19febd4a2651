use arangors::{client::ClientExt, AqlQuery, Database};
use async_trait::async_trait;
use serde_json::Value;
use shared::{Result, SharedError};

/// Finished matches: history documents whose fixture is marked finished.
/// The fixture's round is carried over when the history document lacks one.
const FINISHED_MATCHES_QUERY: &str = r#"
    FOR h IN historial
      FOR j IN juegos
        FILTER j._key == h.partido_original_id AND j.estado == "finalizado"
        RETURN MERGE(h, { jornada: h.jornada != null ? h.jornada : j.jornada })
"#;

const FINISHED_MATCHES_FOR_PLAYER_QUERY: &str = r#"
    FOR h IN historial
      FILTER LENGTH(
        FOR a IN h.acciones || []
          FILTER a.jugador == @name AND a.equipo == @team
          LIMIT 1 RETURN 1
      ) > 0
      FOR j IN juegos
        FILTER j._key == h.partido_original_id AND j.estado == "finalizado"
        RETURN MERGE(h, { jornada: h.jornada != null ? h.jornada : j.jornada })
"#;

/// Players with their country name filled in from `paises` when missing.
const PLAYERS_QUERY: &str = r#"
    FOR p IN jugadores
      LET pais = FIRST(FOR c IN paises FILTER c.id == p.pais_id RETURN c.nombre)
      RETURN MERGE(p, { pais: p.pais != null ? p.pais : pais })
"#;

const PLAYER_BY_KEY_QUERY: &str = r#"
    FOR p IN jugadores
      FILTER p._key == @key OR TO_STRING(p.id) == @key
      LIMIT 1
      LET pais = FIRST(FOR c IN paises FILTER c.id == p.pais_id RETURN c.nombre)
      RETURN MERGE(p, { pais: p.pais != null ? p.pais : pais })
"#;

const COUNTRIES_QUERY: &str = "FOR c IN paises RETURN c";

/// Bulk reads the statistics are computed from. Documents are returned raw
/// and typed at the ingest boundary.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TournamentRepository: Send + Sync {
    async fn finished_matches(&self) -> Result<Vec<Value>>;
    async fn players(&self) -> Result<Vec<Value>>;
    async fn countries(&self) -> Result<Vec<Value>>;
    /// Looks a player up by numeric id or document key.
    async fn player_by_key(&self, key: &str) -> Result<Option<Value>>;
    async fn finished_matches_for_player(&self, name: &str, team: &str) -> Result<Vec<Value>>;
}

#[derive(Clone)]
pub struct ArangoTournamentRepository<C: ClientExt> {
    db: Database<C>,
}

impl<C: ClientExt> ArangoTournamentRepository<C> {
    pub fn new(db: Database<C>) -> Self {
        Self { db }
    }

    async fn run(&self, what: &str, aql: AqlQuery<'_>) -> Result<Vec<Value>> {
        match self.db.aql_query::<Value>(aql).await {
            Ok(documents) => {
                log::debug!("Consulta de {} devolvió {} documentos", what, documents.len());
                Ok(documents)
            }
            Err(e) => {
                log::error!("Error consultando {}: {}", what, e);
                Err(SharedError::ServiceUnavailable(e.to_string()))
            }
        }
    }
}

#[async_trait]
impl<C: ClientExt + Send + Sync> TournamentRepository for ArangoTournamentRepository<C> {
    async fn finished_matches(&self) -> Result<Vec<Value>> {
        let aql = AqlQuery::builder().query(FINISHED_MATCHES_QUERY).build();
        self.run("partidos finalizados", aql).await
    }

    async fn players(&self) -> Result<Vec<Value>> {
        let aql = AqlQuery::builder().query(PLAYERS_QUERY).build();
        self.run("jugadores", aql).await
    }

    async fn countries(&self) -> Result<Vec<Value>> {
        let aql = AqlQuery::builder().query(COUNTRIES_QUERY).build();
        self.run("países", aql).await
    }

    async fn player_by_key(&self, key: &str) -> Result<Option<Value>> {
        let aql = AqlQuery::builder()
            .query(PLAYER_BY_KEY_QUERY)
            .bind_var("key", key)
            .build();
        Ok(self.run("jugador", aql).await?.into_iter().next())
    }

    async fn finished_matches_for_player(&self, name: &str, team: &str) -> Result<Vec<Value>> {
        let aql = AqlQuery::builder()
            .query(FINISHED_MATCHES_FOR_PLAYER_QUERY)
            .bind_var("name", name)
            .bind_var("team", team)
            .build();
        self.run("partidos del jugador", aql).await
    }
}
