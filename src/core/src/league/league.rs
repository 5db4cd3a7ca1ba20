use crate::club::Team;
use crate::error::{SeasonError, SeasonResult};
use crate::league::{LeagueTable, Schedule, ScheduleGenerator, ScheduleTour, TourResult};
use crate::r#match::MatchSimulator;
use crate::utils::Logging;
use itertools::Itertools;
use log::{debug, info};
use rand::Rng;
use rayon::prelude::*;

/// One league season: the participating teams and their fixtures.
///
/// Fixtures are played one tour at a time in week order and one match at
/// a time inside a tour. Streaks and ratings carry over from match to
/// match, so the order is part of the result.
#[derive(Debug)]
pub struct League {
    pub id: u32,
    pub name: String,
    pub teams: Vec<Team>,
    pub schedule: Schedule,
}

impl League {
    pub fn new(id: u32, name: String, teams: Vec<Team>) -> Self {
        League {
            id,
            name,
            teams,
            schedule: Schedule::default(),
        }
    }

    pub fn team(&self, id: u32) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn team_ids(&self) -> Vec<u32> {
        self.teams.iter().map(|t| t.id).collect()
    }

    /// Recomputes every team's ratings from its squad. Teams do not share
    /// state here, so they are rated in parallel.
    pub fn refresh_ratings(&mut self) -> SeasonResult<()> {
        self.teams
            .par_iter_mut()
            .try_for_each(|team| team.refresh_ratings().map(|_| ()))?;

        info!("{}: ratings refreshed for {} teams", self.name, self.teams.len());

        Ok(())
    }

    pub fn generate_schedule<R: Rng>(
        &mut self,
        generator: &mut ScheduleGenerator<R>,
    ) -> SeasonResult<&Schedule> {
        if self.schedule.items().any(|i| i.is_played()) {
            return Err(SeasonError::precondition(format!(
                "{}: schedule already has played matches",
                self.name
            )));
        }

        self.schedule = generator.generate(&self.team_ids())?;

        Ok(&self.schedule)
    }

    /// Plays the earliest tour that still has unplayed fixtures.
    /// Returns `None` once the season is over.
    pub fn play_next_tour<R: Rng>(
        &mut self,
        simulator: &mut MatchSimulator<R>,
    ) -> SeasonResult<Option<TourResult>> {
        if self.schedule.is_empty() {
            return Err(SeasonError::precondition(format!(
                "{}: schedule has not been generated",
                self.name
            )));
        }

        let week = match self.schedule.next_unplayed_week() {
            Some(week) => week,
            None => return Ok(None),
        };

        let tour = self
            .schedule
            .tour_mut(week)
            .ok_or_else(|| SeasonError::precondition(format!("tour {} is missing", week)))?;

        Self::validate_tour(&self.teams, tour)?;

        let teams = &mut self.teams;

        let message = &format!("play tour {}", week);
        Logging::estimate_result(
            || -> SeasonResult<()> {
                for item in tour.items.iter_mut().filter(|i| !i.is_played()) {
                    let (home, away) =
                        Self::teams_pair_mut(teams, item.home_team_id, item.away_team_id)?;

                    simulator.simulate(item, home, away)?;
                }
                Ok(())
            },
            message,
        )?;

        let result = TourResult::new(week, tour.items.clone());

        info!(
            "{}: tour {} played, {} matches, {} goals",
            self.name,
            week,
            result.items.len(),
            result.total_goals()
        );

        Ok(Some(result))
    }

    /// Plays every remaining tour in week order.
    pub fn play_season<R: Rng>(
        &mut self,
        simulator: &mut MatchSimulator<R>,
    ) -> SeasonResult<Vec<TourResult>> {
        let mut results = Vec::with_capacity(self.schedule.tours.len());

        while let Some(result) = self.play_next_tour(simulator)? {
            results.push(result);
        }

        if let Some(leader) = self.table().leader() {
            info!(
                "{}: season finished, {} top with {} points",
                self.name, leader.team_name, leader.points
            );
        }

        Ok(results)
    }

    pub fn table(&self) -> LeagueTable {
        LeagueTable::from_teams(&self.teams)
    }

    /// Every fixture of the tour must resolve before the first one is played.
    fn validate_tour(teams: &[Team], tour: &ScheduleTour) -> SeasonResult<()> {
        for item in &tour.items {
            if item.home_team_id == item.away_team_id {
                return Err(SeasonError::invalid_input(format!(
                    "match {} has team {} on both sides",
                    item.id, item.home_team_id
                )));
            }

            Self::team_index(teams, item.home_team_id)?;
            Self::team_index(teams, item.away_team_id)?;
        }

        let duplicates: Vec<u32> = tour
            .items
            .iter()
            .flat_map(|i| [i.home_team_id, i.away_team_id])
            .duplicates()
            .collect();

        if !duplicates.is_empty() {
            return Err(SeasonError::invalid_input(format!(
                "tour {} lists teams {:?} more than once",
                tour.week, duplicates
            )));
        }

        Ok(())
    }

    fn team_index(teams: &[Team], team_id: u32) -> SeasonResult<usize> {
        teams.iter().position(|t| t.id == team_id).ok_or_else(|| {
            SeasonError::invalid_input(format!("team {} is not part of the league", team_id))
        })
    }

    /// Exclusive access to both sides of a fixture.
    fn teams_pair_mut(
        teams: &mut [Team],
        home_id: u32,
        away_id: u32,
    ) -> SeasonResult<(&mut Team, &mut Team)> {
        let home_index = Self::team_index(teams, home_id)?;
        let away_index = Self::team_index(teams, away_id)?;

        debug!("pairing teams at {} and {}", home_index, away_index);

        if home_index < away_index {
            let (left, right) = teams.split_at_mut(away_index);
            Ok((&mut left[home_index], &mut right[0]))
        } else if home_index > away_index {
            let (left, right) = teams.split_at_mut(home_index);
            Ok((&mut right[0], &mut left[away_index]))
        } else {
            Err(SeasonError::invalid_input(format!(
                "team {} cannot play itself",
                home_id
            )))
        }
    }
}
