pub mod club;
pub mod error;
pub mod league;
pub mod r#match;
pub mod utils;

pub use club::{
    // Player exports
    GoalkeeperSkills, OutfieldSkills, Player, PlayerCollection, PlayerPosition, PlayerPositionType,
    // Team exports
    Team, TeamBuilder, TeamRatingCalculator, TeamRatings, TeamStatistics, VenueStatistics,
};

pub use error::{SeasonError, SeasonResult};

pub use league::{
    League, LeagueTable, LeagueTableRow, Schedule, ScheduleGenerator, ScheduleItem, ScheduleSettings,
    ScheduleTour, StatsAggregator, TourResult,
};

pub use r#match::{MatchOutcome, MatchSimulator, Score, SimulationSettings};

pub use utils::*;
