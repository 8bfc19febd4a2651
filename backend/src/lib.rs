pub mod config;
pub mod error;

pub mod analytics {
    pub mod aggregators;
    pub mod engine;
    pub mod player;
    pub mod tally;
    pub mod visualization;

    #[cfg(test)]
    mod engine_tests;
    #[cfg(test)]
    pub(crate) mod test_support;

    pub use engine::{EngineConfig, TournamentStatsEngine};
    pub use player::PlayerAnalyticsEngine;
    pub use visualization::TournamentVisualization;
}

pub mod tournament {
    pub mod controller;
    pub mod ingest;
    pub mod repository;
    pub mod usecase;

    pub use controller::configure_routes;
    pub use repository::{ArangoTournamentRepository, TournamentRepository};
    pub use usecase::TournamentStatsUseCase;
}


#[cfg(test)]
mod config_tests;
