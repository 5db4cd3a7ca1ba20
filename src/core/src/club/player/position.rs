use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerPositionType {
    Goalkeeper,
    Defender,
    Midfielder,
    Attacker,
}

impl PlayerPositionType {
    pub fn get_short_name(&self) -> &'static str {
        match self {
            PlayerPositionType::Goalkeeper => "GK",
            PlayerPositionType::Defender => "DEF",
            PlayerPositionType::Midfielder => "MID",
            PlayerPositionType::Attacker => "ATT",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfieldSkills {
    pub attack: u8,
    pub midfield: u8,
    pub defense: u8,
}

impl OutfieldSkills {
    pub fn new(attack: u8, midfield: u8, defense: u8) -> Self {
        OutfieldSkills {
            attack,
            midfield,
            defense,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalkeeperSkills {
    pub diving: u8,
    pub handling: u8,
    pub reflexes: u8,
}

impl GoalkeeperSkills {
    pub fn new(diving: u8, handling: u8, reflexes: u8) -> Self {
        GoalkeeperSkills {
            diving,
            handling,
            reflexes,
        }
    }

    /// Sum used to rank keepers against each other.
    pub fn total(&self) -> u16 {
        self.diving as u16 + self.handling as u16 + self.reflexes as u16
    }
}

/// Position tag together with the skills that position carries.
/// Goalkeepers have no outfield skills and outfielders no keeping skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "position")]
pub enum PlayerPosition {
    Goalkeeper(GoalkeeperSkills),
    Defender(OutfieldSkills),
    Midfielder(OutfieldSkills),
    Attacker(OutfieldSkills),
}

impl PlayerPosition {
    pub fn position_type(&self) -> PlayerPositionType {
        match self {
            PlayerPosition::Goalkeeper(_) => PlayerPositionType::Goalkeeper,
            PlayerPosition::Defender(_) => PlayerPositionType::Defender,
            PlayerPosition::Midfielder(_) => PlayerPositionType::Midfielder,
            PlayerPosition::Attacker(_) => PlayerPositionType::Attacker,
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, PlayerPosition::Goalkeeper(_))
    }

    pub fn outfield_skills(&self) -> Option<&OutfieldSkills> {
        match self {
            PlayerPosition::Goalkeeper(_) => None,
            PlayerPosition::Defender(skills)
            | PlayerPosition::Midfielder(skills)
            | PlayerPosition::Attacker(skills) => Some(skills),
        }
    }

    pub fn goalkeeper_skills(&self) -> Option<&GoalkeeperSkills> {
        match self {
            PlayerPosition::Goalkeeper(skills) => Some(skills),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_type_follows_variant() {
        let keeper = PlayerPosition::Goalkeeper(GoalkeeperSkills::new(70, 60, 80));
        let striker = PlayerPosition::Attacker(OutfieldSkills::new(90, 40, 20));

        assert_eq!(keeper.position_type(), PlayerPositionType::Goalkeeper);
        assert_eq!(striker.position_type(), PlayerPositionType::Attacker);
        assert!(keeper.is_goalkeeper());
        assert!(!striker.is_goalkeeper());
    }

    #[test]
    fn test_skills_are_only_available_for_matching_variant() {
        let keeper = PlayerPosition::Goalkeeper(GoalkeeperSkills::new(70, 60, 80));
        let defender = PlayerPosition::Defender(OutfieldSkills::new(20, 45, 88));

        assert!(keeper.outfield_skills().is_none());
        assert_eq!(keeper.goalkeeper_skills().map(|s| s.total()), Some(210));

        assert!(defender.goalkeeper_skills().is_none());
        assert_eq!(defender.outfield_skills().map(|s| s.defense), Some(88));
    }

    #[test]
    fn test_goalkeeper_total_does_not_overflow() {
        let skills = GoalkeeperSkills::new(255, 255, 255);
        assert_eq!(skills.total(), 765);
    }
}
