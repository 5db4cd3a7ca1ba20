use crate::club::{PlayerCollection, Team, TeamRatings, TeamStatistics};
use crate::error::{SeasonError, SeasonResult};

#[derive(Default)]
pub struct TeamBuilder {
    id: Option<u32>,
    name: Option<String>,
    league: Option<String>,
    players: Option<PlayerCollection>,
}

impl TeamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn league(mut self, league: String) -> Self {
        self.league = Some(league);
        self
    }

    pub fn players(mut self, players: PlayerCollection) -> Self {
        self.players = Some(players);
        self
    }

    pub fn build(self) -> SeasonResult<Team> {
        let id = self.id.ok_or_else(|| SeasonError::invalid_input("id is required"))?;

        let mut players = self.players.unwrap_or_default();
        for player in players.players.iter_mut() {
            player.team_id = Some(id);
        }

        Ok(Team {
            id,
            name: self.name.ok_or_else(|| SeasonError::invalid_input("name is required"))?,
            league: self.league.unwrap_or_default(),
            ratings: TeamRatings::default(),
            statistics: TeamStatistics::default(),
            players,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{GoalkeeperSkills, Player};

    #[test]
    fn test_build_assigns_owning_team_to_players() {
        let team = Team::builder()
            .id(12)
            .name(String::from("Lyon"))
            .league(String::from("Ligue 1"))
            .players(PlayerCollection::new(vec![Player::goalkeeper(
                1,
                "Keeper",
                "France",
                GoalkeeperSkills::new(70, 70, 70),
            )]))
            .build()
            .unwrap();

        assert_eq!(team.id, 12);
        assert_eq!(team.players.players[0].team_id, Some(12));
        assert_eq!(team.statistics, TeamStatistics::default());
    }

    #[test]
    fn test_build_requires_id_and_name() {
        let missing_id = Team::builder().name(String::from("Nice")).build();
        assert!(matches!(missing_id, Err(SeasonError::InvalidInput(_))));

        let missing_name = Team::builder().id(1).build();
        assert!(matches!(missing_name, Err(SeasonError::InvalidInput(_))));
    }
}
