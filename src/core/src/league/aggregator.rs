use crate::club::{MatchVenue, Team};
use crate::error::{SeasonError, SeasonResult};
use crate::league::ScheduleItem;
use log::debug;

/// Applies played fixtures to season statistics.
///
/// Counters are incremented, so applying the same fixture twice counts it
/// twice. Both teams are borrowed mutably for the duration of one call,
/// which keeps any other aggregation off these teams until it returns.
pub struct StatsAggregator;

impl StatsAggregator {
    pub fn apply(item: &ScheduleItem, home: &mut Team, away: &mut Team) -> SeasonResult<()> {
        Self::check_teams(item, home, away)?;

        let score = item.result.ok_or_else(|| {
            SeasonError::precondition(format!("match {} has no result to aggregate", item.id))
        })?;

        let home_outcome = home.statistics.record(MatchVenue::Home, score.home, score.away);
        let away_outcome = away.statistics.record(MatchVenue::Away, score.away, score.home);

        debug!(
            "aggregated {}: {} {:?} (home streak {}), {} {:?} (away streak {})",
            item.id,
            home.name,
            home_outcome,
            home.statistics.home_streak,
            away.name,
            away_outcome,
            away.statistics.away_streak
        );

        Ok(())
    }

    /// Fixture and teams must line up before anything is touched.
    pub fn check_teams(item: &ScheduleItem, home: &Team, away: &Team) -> SeasonResult<()> {
        if item.home_team_id == item.away_team_id {
            return Err(SeasonError::invalid_input(format!(
                "match {} has team {} on both sides",
                item.id, item.home_team_id
            )));
        }

        if home.id != item.home_team_id || away.id != item.away_team_id {
            return Err(SeasonError::invalid_input(format!(
                "match {} is {} vs {}, got teams {} and {}",
                item.id, item.home_team_id, item.away_team_id, home.id, away.id
            )));
        }

        Ok(())
    }
}
