use crate::r#match::MatchOutcome;
use serde::{Deserialize, Serialize};

pub const POINTS_FOR_WIN: u32 = 3;
pub const POINTS_FOR_DRAW: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchVenue {
    Home,
    Away,
}

/// Counters for matches played at one venue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueStatistics {
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub points: u32,
    pub goals_scored: u32,
    pub goals_conceded: u32,
}

/// Season counters of a team. Totals and venue splits are kept as
/// separate counters and each moves on its own when a result is recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStatistics {
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub points: u32,
    pub goals_scored: u32,
    pub goals_conceded: u32,

    pub home: VenueStatistics,
    pub away: VenueStatistics,

    /// Positive: consecutive home wins, negative: consecutive home losses.
    pub home_streak: i32,
    /// Same as `home_streak` for away matches.
    pub away_streak: i32,
}

impl TeamStatistics {
    /// Applies one played match from this team's point of view.
    pub fn record(&mut self, venue: MatchVenue, goals_scored: u32, goals_conceded: u32) -> MatchOutcome {
        let outcome = MatchOutcome::from_goals(goals_scored, goals_conceded);

        self.played += 1;
        self.goals_scored += goals_scored;
        self.goals_conceded += goals_conceded;

        let venue_stats = match venue {
            MatchVenue::Home => &mut self.home,
            MatchVenue::Away => &mut self.away,
        };

        venue_stats.played += 1;
        venue_stats.goals_scored += goals_scored;
        venue_stats.goals_conceded += goals_conceded;

        match outcome {
            MatchOutcome::Win => {
                self.wins += 1;
                self.points += POINTS_FOR_WIN;
                venue_stats.wins += 1;
                venue_stats.points += POINTS_FOR_WIN;
            }
            MatchOutcome::Draw => {
                self.draws += 1;
                self.points += POINTS_FOR_DRAW;
                venue_stats.draws += 1;
                venue_stats.points += POINTS_FOR_DRAW;
            }
            MatchOutcome::Loss => {
                self.losses += 1;
                venue_stats.losses += 1;
            }
        }

        let streak = match venue {
            MatchVenue::Home => &mut self.home_streak,
            MatchVenue::Away => &mut self.away_streak,
        };

        *streak = next_streak(*streak, outcome);

        outcome
    }

    pub fn goal_difference(&self) -> i64 {
        self.goals_scored as i64 - self.goals_conceded as i64
    }

    /// Points, played and venue splits agree with the win/draw/loss counters.
    pub fn is_consistent(&self) -> bool {
        self.points == POINTS_FOR_WIN * self.wins + POINTS_FOR_DRAW * self.draws
            && self.played == self.wins + self.draws + self.losses
            && self.played == self.home.played + self.away.played
            && self.wins == self.home.wins + self.away.wins
            && self.draws == self.home.draws + self.away.draws
            && self.losses == self.home.losses + self.away.losses
            && self.points == self.home.points + self.away.points
            && self.goals_scored == self.home.goals_scored + self.away.goals_scored
            && self.goals_conceded == self.home.goals_conceded + self.away.goals_conceded
    }
}

/// A win extends a winning run or starts a new one at 1, a loss does the
/// same in the negative direction and a draw resets to 0.
pub fn next_streak(current: i32, outcome: MatchOutcome) -> i32 {
    match outcome {
        MatchOutcome::Win if current >= 0 => current + 1,
        MatchOutcome::Win => 1,
        MatchOutcome::Loss if current <= 0 => current - 1,
        MatchOutcome::Loss => -1,
        MatchOutcome::Draw => 0,
    }
}
