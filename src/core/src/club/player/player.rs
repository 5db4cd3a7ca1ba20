use crate::club::{GoalkeeperSkills, PlayerPosition, PlayerPositionType};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub nationality: String,

    /// Owning team. Free agents have none.
    #[serde(default)]
    pub team_id: Option<u32>,

    #[serde(flatten)]
    pub position: PlayerPosition,
}

impl Player {
    pub fn new(id: u32, name: String, nationality: String, position: PlayerPosition) -> Self {
        Player {
            id,
            name,
            nationality,
            team_id: None,
            position,
        }
    }

    pub fn goalkeeper(id: u32, name: &str, nationality: &str, skills: GoalkeeperSkills) -> Self {
        Player::new(
            id,
            String::from(name),
            String::from(nationality),
            PlayerPosition::Goalkeeper(skills),
        )
    }

    pub fn with_team(mut self, team_id: u32) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn position(&self) -> PlayerPositionType {
        self.position.position_type()
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.position.is_goalkeeper()
    }

    // Goalkeepers carry no outfield skills and contribute zero here.

    pub fn attack(&self) -> u8 {
        self.position.outfield_skills().map_or(0, |s| s.attack)
    }

    pub fn midfield(&self) -> u8 {
        self.position.outfield_skills().map_or(0, |s| s.midfield)
    }

    pub fn defense(&self) -> u8 {
        self.position.outfield_skills().map_or(0, |s| s.defense)
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({})", self.name, self.position().get_short_name())
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
