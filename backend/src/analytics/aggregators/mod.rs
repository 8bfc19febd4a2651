//! One reducer per report section. Each folds the full match list into its
//! summary and never fails on an individual record.

pub mod best_players;
pub mod comebacks;
pub mod discipline;
pub mod highlights;
pub mod home_away;
pub mod injuries;
pub mod referees;
pub mod scorers;
pub mod special_matches;
pub mod stadiums;
pub mod teams;
