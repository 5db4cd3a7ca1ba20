use crate::club::{Player, PlayerPositionType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerCollection {
    pub players: Vec<Player>,
}

impl PlayerCollection {
    pub fn new(players: Vec<Player>) -> Self {
        PlayerCollection { players }
    }

    pub fn add(&mut self, player: Player) {
        self.players.push(player);
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn by_position(&self, position: PlayerPositionType) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| p.position() == position)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{GoalkeeperSkills, OutfieldSkills, PlayerPosition};

    fn defender(id: u32, skills: OutfieldSkills) -> Player {
        Player::new(id, format!("Back {}", id), String::from("Spain"), PlayerPosition::Defender(skills))
    }

    #[test]
    fn test_by_position_filters_players() {
        let mut collection = PlayerCollection::default();
        collection.add(Player::goalkeeper(1, "Keeper", "Spain", GoalkeeperSkills::new(60, 60, 60)));
        collection.add(defender(2, OutfieldSkills::new(20, 40, 80)));
        collection.add(defender(3, OutfieldSkills::new(25, 45, 75)));

        assert_eq!(collection.len(), 3);
        assert_eq!(collection.by_position(PlayerPositionType::Defender).len(), 2);
        assert_eq!(collection.by_position(PlayerPositionType::Goalkeeper).len(), 1);
        assert!(collection.by_position(PlayerPositionType::Attacker).is_empty());
    }
}
