use crate::club::Team;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueTableRow {
    pub team_id: u32,
    pub team_name: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

impl LeagueTableRow {
    pub fn from_team(team: &Team) -> Self {
        let stats = &team.statistics;

        LeagueTableRow {
            team_id: team.id,
            team_name: team.name.clone(),
            played: stats.played,
            won: stats.wins,
            drawn: stats.draws,
            lost: stats.losses,
            goals_for: stats.goals_scored,
            goals_against: stats.goals_conceded,
            goal_difference: stats.goal_difference(),
            points: stats.points,
        }
    }
}

/// Standings ordered by points, goal difference, goals scored, then name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueTable {
    pub rows: Vec<LeagueTableRow>,
}

impl LeagueTable {
    pub fn from_teams(teams: &[Team]) -> Self {
        let rows = teams
            .iter()
            .map(LeagueTableRow::from_team)
            .sorted_by(Self::compare)
            .collect();

        LeagueTable { rows }
    }

    fn compare(a: &LeagueTableRow, b: &LeagueTableRow) -> Ordering {
        b.points
            .cmp(&a.points)
            .then_with(|| b.goal_difference.cmp(&a.goal_difference))
            .then_with(|| b.goals_for.cmp(&a.goals_for))
            .then_with(|| a.team_name.cmp(&b.team_name))
    }

    pub fn leader(&self) -> Option<&LeagueTableRow> {
        self.rows.first()
    }

    pub fn position(&self, team_id: u32) -> Option<usize> {
        self.rows.iter().position(|r| r.team_id == team_id).map(|p| p + 1)
    }
}
