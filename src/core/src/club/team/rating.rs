use crate::club::{Player, PlayerPositionType, Team, TeamRatings};
use crate::error::{SeasonError, SeasonResult};
use log::debug;

const LINEUP_GOALKEEPERS: usize = 1;
const LINEUP_DEFENDERS: usize = 4;
const LINEUP_MIDFIELDERS: usize = 3;
const LINEUP_ATTACKERS: usize = 3;

pub struct TeamRatingCalculator;

impl TeamRatingCalculator {
    /// Best available eleven: one keeper, then up to four defenders,
    /// three midfielders and three attackers, each group ranked by the
    /// skill it plays on. Short groups are not padded.
    pub fn select_lineup(team: &Team) -> Vec<&Player> {
        let mut goalkeepers = team.players.by_position(PlayerPositionType::Goalkeeper);
        let mut defenders = team.players.by_position(PlayerPositionType::Defender);
        let mut midfielders = team.players.by_position(PlayerPositionType::Midfielder);
        let mut attackers = team.players.by_position(PlayerPositionType::Attacker);

        goalkeepers.sort_by_key(|p| {
            std::cmp::Reverse(p.position.goalkeeper_skills().map_or(0, |s| s.total()))
        });
        defenders.sort_by_key(|p| std::cmp::Reverse(p.defense()));
        midfielders.sort_by_key(|p| std::cmp::Reverse(p.midfield()));
        attackers.sort_by_key(|p| std::cmp::Reverse(p.attack()));

        goalkeepers
            .into_iter()
            .take(LINEUP_GOALKEEPERS)
            .chain(defenders.into_iter().take(LINEUP_DEFENDERS))
            .chain(midfielders.into_iter().take(LINEUP_MIDFIELDERS))
            .chain(attackers.into_iter().take(LINEUP_ATTACKERS))
            .collect()
    }

    /// Truncated averages over the selected lineup. The keeper is part of
    /// the divisor and adds nothing to the outfield sums.
    pub fn calculate(team: &Team) -> SeasonResult<TeamRatings> {
        let lineup = Self::select_lineup(team);

        if lineup.is_empty() {
            return Err(SeasonError::invalid_input(format!(
                "team {} ({}) has no players to rate",
                team.id, team.name
            )));
        }

        let size = lineup.len() as u32;

        let attack: u32 = lineup.iter().map(|p| p.attack() as u32).sum();
        let midfield: u32 = lineup.iter().map(|p| p.midfield() as u32).sum();
        let defense: u32 = lineup.iter().map(|p| p.defense() as u32).sum();

        let goalkeeping = lineup
            .iter()
            .find_map(|p| p.position.goalkeeper_skills())
            .map_or(0, |s| s.total() / 3);

        debug!(
            "team {} lineup: {}",
            team.name,
            lineup.iter().map(|p| p.to_string()).collect::<Vec<_>>().join(", ")
        );

        Ok(TeamRatings {
            attack: (attack / size) as u8,
            midfield: (midfield / size) as u8,
            defense: (defense / size) as u8,
            goalkeeping: goalkeeping as u8,
        })
    }
}
