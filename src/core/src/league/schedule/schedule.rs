use crate::r#match::Score;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub id: String,
    pub week: u16,
    pub date: Option<NaiveDate>,

    pub home_team_id: u32,
    pub away_team_id: u32,

    pub result: Option<Score>,
}

impl ScheduleItem {
    pub fn new(id: String, week: u16, date: Option<NaiveDate>, home_team_id: u32, away_team_id: u32) -> Self {
        ScheduleItem {
            id,
            week,
            date,
            home_team_id,
            away_team_id,
            result: None,
        }
    }

    pub fn is_played(&self) -> bool {
        self.result.is_some()
    }

    pub fn involves(&self, team_id: u32) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }
}

/// One round of fixtures. Every team of the league appears exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleTour {
    pub week: u16,
    pub items: Vec<ScheduleItem>,
}

impl ScheduleTour {
    pub fn new(week: u16, items: Vec<ScheduleItem>) -> Self {
        ScheduleTour { week, items }
    }

    pub fn is_played(&self) -> bool {
        self.items.iter().all(|i| i.is_played())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub tours: Vec<ScheduleTour>,
}

impl Schedule {
    pub fn new(tours: Vec<ScheduleTour>) -> Self {
        Schedule { tours }
    }

    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = &ScheduleItem> {
        self.tours.iter().flat_map(|t| &t.items)
    }

    pub fn tour(&self, week: u16) -> Option<&ScheduleTour> {
        self.tours.iter().find(|t| t.week == week)
    }

    pub fn tour_mut(&mut self, week: u16) -> Option<&mut ScheduleTour> {
        self.tours.iter_mut().find(|t| t.week == week)
    }

    pub fn item_mut(&mut self, id: &str) -> Option<&mut ScheduleItem> {
        self.tours
            .iter_mut()
            .flat_map(|t| t.items.iter_mut())
            .find(|i| i.id == id)
    }

    /// Earliest week that still has an unplayed fixture.
    pub fn next_unplayed_week(&self) -> Option<u16> {
        self.tours
            .iter()
            .filter(|t| !t.is_played())
            .map(|t| t.week)
            .min()
    }

    pub fn is_finished(&self) -> bool {
        !self.is_empty() && self.tours.iter().all(|t| t.is_played())
    }

    /// Fixtures of one team ordered by week.
    pub fn matches_for_team(&self, team_id: u32) -> Vec<&ScheduleItem> {
        let mut items: Vec<&ScheduleItem> = self.items().filter(|i| i.involves(team_id)).collect();
        items.sort_by_key(|i| i.week);
        items
    }

    /// Longest run of consecutive weeks the team plays at home.
    pub fn longest_home_run(&self, team_id: u32) -> usize {
        let mut longest = 0;
        let mut current = 0;

        for item in self.matches_for_team(team_id) {
            if item.home_team_id == team_id {
                current += 1;
                longest = longest.max(current);
            } else {
                current = 0;
            }
        }

        longest
    }
}
