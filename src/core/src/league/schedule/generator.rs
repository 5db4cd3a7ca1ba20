use crate::error::{SeasonError, SeasonResult};
use crate::league::{Schedule, ScheduleItem, ScheduleTour};
use chrono::{Duration, NaiveDate};
use itertools::Itertools;
use log::{debug, info};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashMap;

/// Swap threshold for consecutive home fixtures.
const MAX_HOME_RUN: u32 = 2;

#[derive(Debug, Clone)]
pub struct ScheduleSettings {
    pub season_start: Option<NaiveDate>,
    pub days_between_tours: i64,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        ScheduleSettings {
            season_start: None,
            days_between_tours: 7,
        }
    }
}

/// Double round-robin generator (circle method). The initial shuffle is
/// the only source of variation and comes from the owned `rng`.
pub struct ScheduleGenerator<R: Rng> {
    rng: R,
    settings: ScheduleSettings,
}

impl<R: Rng> ScheduleGenerator<R> {
    pub fn new(rng: R, settings: ScheduleSettings) -> Self {
        ScheduleGenerator { rng, settings }
    }

    pub fn generate(&mut self, team_ids: &[u32]) -> SeasonResult<Schedule> {
        Self::validate(team_ids)?;

        let mut rotation = team_ids.to_vec();
        rotation.shuffle(&mut self.rng);

        let teams_count = rotation.len();
        let rounds = teams_count - 1;

        let mut home_runs = HomeRuns::default();

        let mut first_leg: Vec<Vec<(u32, u32)>> = Vec::with_capacity(rounds);

        for _ in 0..rounds {
            let pairs = (0..teams_count / 2)
                .map(|i| home_runs.balance(rotation[i], rotation[teams_count - 1 - i]))
                .collect();

            first_leg.push(pairs);

            // index 0 stays, last moves to index 1
            rotation[1..].rotate_right(1);
        }

        home_runs.reset();

        let mut second_leg: Vec<Vec<(u32, u32)>> = Vec::with_capacity(rounds);

        for round in first_leg.iter_mut() {
            let mut pairs = Vec::with_capacity(round.len());

            for fixture in round.iter_mut() {
                let (first_home, first_away) = *fixture;
                let (home, away) = home_runs.balance(first_away, first_home);

                // A swap here would repeat the first-leg venue, so the
                // first leg is flipped to keep one home game per side.
                if home == first_home {
                    *fixture = (first_away, first_home);
                }

                pairs.push((home, away));
            }

            second_leg.push(pairs);
        }

        let tours: Vec<ScheduleTour> = first_leg
            .into_iter()
            .chain(second_leg)
            .enumerate()
            .map(|(index, pairs)| self.make_tour(index as u16 + 1, pairs))
            .collect();

        let schedule = Schedule::new(tours);

        let (long_runs, longest) = Self::long_home_runs(&schedule, team_ids);

        debug!(
            "{} of {} teams have more than {} consecutive home fixtures, longest {}",
            long_runs, teams_count, MAX_HOME_RUN, longest
        );

        info!(
            "schedule generated: {} teams, {} tours, {} fixtures",
            teams_count,
            schedule.tours.len(),
            schedule.items().count()
        );

        Ok(schedule)
    }

    /// Balancing is greedy, so longer home runs are expected. Returns how
    /// many teams exceed the threshold and the longest run overall.
    fn long_home_runs(schedule: &Schedule, team_ids: &[u32]) -> (usize, usize) {
        let runs: Vec<usize> = team_ids
            .iter()
            .map(|&id| schedule.longest_home_run(id))
            .collect();

        let long_runs = runs.iter().filter(|&&run| run > MAX_HOME_RUN as usize).count();

        (long_runs, runs.into_iter().max().unwrap_or(0))
    }

    fn validate(team_ids: &[u32]) -> SeasonResult<()> {
        if team_ids.len() < 2 {
            return Err(SeasonError::invalid_input(format!(
                "at least 2 teams are required, got {}",
                team_ids.len()
            )));
        }

        if team_ids.len() % 2 != 0 {
            return Err(SeasonError::invalid_input(format!(
                "fixture pairing is undefined for an odd team count: {}",
                team_ids.len()
            )));
        }

        let duplicates: Vec<&u32> = team_ids.iter().duplicates().collect();
        if !duplicates.is_empty() {
            return Err(SeasonError::invalid_input(format!(
                "duplicate team references: {:?}",
                duplicates
            )));
        }

        Ok(())
    }

    fn make_tour(&self, week: u16, pairs: Vec<(u32, u32)>) -> ScheduleTour {
        let date = self.settings.season_start.and_then(|start| {
            start.checked_add_signed(Duration::days(
                self.settings.days_between_tours * (week as i64 - 1),
            ))
        });

        let items = pairs
            .into_iter()
            .map(|(home, away)| {
                debug!("week {}: {} vs {}", week, home, away);
                ScheduleItem::new(format!("{}-{}-{}", week, home, away), week, date, home, away)
            })
            .collect();

        ScheduleTour::new(week, items)
    }
}

/// Consecutive rounds each team has been the home side.
#[derive(Debug, Default)]
struct HomeRuns {
    runs: HashMap<u32, u32>,
}

impl HomeRuns {
    /// Greedy swap without look-ahead: a side that already hosted twice in
    /// a row travels instead, unless the opponent is in the same position.
    fn balance(&mut self, home: u32, away: u32) -> (u32, u32) {
        let home_run = self.get(home);
        let away_run = self.get(away);

        let (home, away) = if home_run >= MAX_HOME_RUN && away_run < MAX_HOME_RUN {
            (away, home)
        } else {
            (home, away)
        };

        *self.runs.entry(home).or_insert(0) += 1;
        self.runs.insert(away, 0);

        (home, away)
    }

    fn get(&self, team_id: u32) -> u32 {
        self.runs.get(&team_id).copied().unwrap_or(0)
    }

    fn reset(&mut self) {
        self.runs.clear();
    }
}
