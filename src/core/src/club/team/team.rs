use crate::club::{PlayerCollection, TeamBuilder, TeamRatingCalculator, TeamStatistics};
use crate::error::SeasonResult;
use log::debug;
use serde::{Deserialize, Serialize};

/// Strength ratings derived from the best available lineup.
/// Recomputed from the squad, never authoritative on their own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRatings {
    pub attack: u8,
    pub midfield: u8,
    pub defense: u8,
    pub goalkeeping: u8,
}

impl TeamRatings {
    pub fn new(attack: u8, midfield: u8, defense: u8) -> Self {
        TeamRatings {
            attack,
            midfield,
            defense,
            goalkeeping: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub league: String,

    #[serde(default)]
    pub ratings: TeamRatings,

    #[serde(default)]
    pub statistics: TeamStatistics,

    #[serde(default)]
    pub players: PlayerCollection,
}

impl Team {
    pub fn new(id: u32, name: String, league: String, players: PlayerCollection) -> Self {
        Team {
            id,
            name,
            league,
            ratings: TeamRatings::default(),
            statistics: TeamStatistics::default(),
            players,
        }
    }

    pub fn builder() -> TeamBuilder {
        TeamBuilder::new()
    }

    /// Recomputes ratings from the current squad and stores them on the team.
    pub fn refresh_ratings(&mut self) -> SeasonResult<TeamRatings> {
        let ratings = TeamRatingCalculator::calculate(self)?;

        debug!(
            "team {} ratings - attack: {}, midfield: {}, defense: {}, goalkeeping: {}",
            self.name, ratings.attack, ratings.midfield, ratings.defense, ratings.goalkeeping
        );

        self.ratings = ratings;

        Ok(ratings)
    }
}

impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{GoalkeeperSkills, OutfieldSkills, Player, PlayerPosition};

    #[test]
    fn test_refresh_ratings_overwrites_stored_ratings() {
        let players = PlayerCollection::new(vec![
            Player::goalkeeper(1, "Keeper", "Italy", GoalkeeperSkills::new(60, 70, 80)),
            Player::new(
                2,
                String::from("Striker"),
                String::from("Italy"),
                PlayerPosition::Attacker(OutfieldSkills::new(90, 40, 20)),
            ),
        ]);

        let mut team = Team::new(1, String::from("Torino"), String::from("Serie A"), players);
        team.ratings = TeamRatings::new(1, 1, 1);

        let ratings = team.refresh_ratings().unwrap();

        assert_eq!(ratings, team.ratings);
        assert_eq!(team.ratings.attack, 45);
        assert_eq!(team.ratings.midfield, 20);
        assert_eq!(team.ratings.defense, 10);
        assert_eq!(team.ratings.goalkeeping, 70);
    }

    #[test]
    fn test_team_deserializes_without_season_state() {
        let json = r#"{
            "id": 4,
            "name": "Hull",
            "league": "Championship",
            "players": [
                { "id": 40, "name": "Keeper", "nationality": "England", "team_id": 4,
                  "position": "Goalkeeper", "diving": 70, "handling": 65, "reflexes": 72 }
            ]
        }"#;

        let team: Team = serde_json::from_str(json).unwrap();

        assert_eq!(team.players.len(), 1);
        assert_eq!(team.statistics, TeamStatistics::default());
        assert_eq!(team.ratings, TeamRatings::default());
    }
}
