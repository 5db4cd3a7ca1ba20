use crate::club::{Team, TeamRatings};
use crate::error::{SeasonError, SeasonResult};
use crate::league::{ScheduleItem, StatsAggregator};
use crate::r#match::Score;
use log::debug;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Constants of the score formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationSettings {
    pub home_advantage: f64,
    pub attack_weight: f64,
    pub midfield_weight: f64,
    pub defense_weight: f64,
    pub noise_mean: f64,
    pub noise_std_dev: f64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        SimulationSettings {
            home_advantage: 1.2,
            attack_weight: 0.4,
            midfield_weight: 0.3,
            defense_weight: 0.3,
            noise_mean: 1.0,
            noise_std_dev: 0.5,
        }
    }
}

impl SimulationSettings {
    /// Every constant must be a finite number, otherwise expected goals
    /// saturate and the season counters overflow.
    pub fn validate(&self) -> SeasonResult<()> {
        let values = [
            ("home_advantage", self.home_advantage),
            ("attack_weight", self.attack_weight),
            ("midfield_weight", self.midfield_weight),
            ("defense_weight", self.defense_weight),
            ("noise_mean", self.noise_mean),
            ("noise_std_dev", self.noise_std_dev),
        ];

        match values.iter().find(|(_, value)| !value.is_finite()) {
            Some((name, value)) => Err(SeasonError::invalid_input(format!(
                "{} must be finite, got {}",
                name, value
            ))),
            None => Ok(()),
        }
    }

    pub fn base_strength(&self, ratings: &TeamRatings) -> f64 {
        ratings.attack as f64 * self.attack_weight
            + ratings.midfield as f64 * self.midfield_weight
            + ratings.defense as f64 * self.defense_weight
    }
}

/// Plays fixtures from team ratings. Owns its random source, so two
/// simulators built from the same seed produce the same scores.
pub struct MatchSimulator<R: Rng> {
    rng: R,
    noise: Normal<f64>,
    settings: SimulationSettings,
}

impl<R: Rng> MatchSimulator<R> {
    pub fn new(rng: R, settings: SimulationSettings) -> SeasonResult<Self> {
        settings.validate()?;

        if settings.noise_std_dev < 0.0 {
            return Err(SeasonError::invalid_input(format!(
                "noise standard deviation must be non-negative, got {}",
                settings.noise_std_dev
            )));
        }

        let noise = Normal::new(settings.noise_mean, settings.noise_std_dev)
            .map_err(|e| SeasonError::invalid_input(format!("noise distribution: {}", e)))?;

        Ok(MatchSimulator {
            rng,
            noise,
            settings,
        })
    }

    /// Draws a score for `home` hosting `away`. Home noise is sampled first.
    pub fn play(&mut self, home: &TeamRatings, away: &TeamRatings) -> Score {
        let base_home = self.settings.base_strength(home) * self.settings.home_advantage;
        let base_away = self.settings.base_strength(away);

        let home_noise = self.noise.sample(&mut self.rng);
        let away_noise = self.noise.sample(&mut self.rng);

        Score::new(goals(base_home * home_noise), goals(base_away * away_noise))
    }

    /// Plays a scheduled fixture, stores the score on it and applies the
    /// result to both teams.
    pub fn simulate(
        &mut self,
        item: &mut ScheduleItem,
        home: &mut Team,
        away: &mut Team,
    ) -> SeasonResult<Score> {
        StatsAggregator::check_teams(item, home, away)?;

        if item.result.is_some() {
            return Err(SeasonError::precondition(format!(
                "match {} has already been played",
                item.id
            )));
        }

        let score = self.play(&home.ratings, &away.ratings);

        item.result = Some(score);

        debug!("week {}: {} {} {}", item.week, home.name, score, away.name);

        StatsAggregator::apply(item, home, away)?;

        Ok(score)
    }
}

fn goals(expected: f64) -> u32 {
    expected.round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{PlayerCollection, TeamStatistics};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn team(id: u32, attack: u8, midfield: u8, defense: u8) -> Team {
        let mut team = Team::new(
            id,
            format!("Team {}", id),
            String::from("Test League"),
            PlayerCollection::default(),
        );
        team.ratings = TeamRatings::new(attack, midfield, defense);
        team
    }

    fn fixed_noise() -> SimulationSettings {
        SimulationSettings {
            noise_std_dev: 0.0,
            ..SimulationSettings::default()
        }
    }

    #[test]
    fn test_base_strength_weights() {
        let settings = SimulationSettings::default();
        let strength = settings.base_strength(&TeamRatings::new(5, 5, 5));
        assert!((strength - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_play_with_fixed_noise_uses_formula() {
        let mut simulator = MatchSimulator::new(StdRng::seed_from_u64(1), fixed_noise()).unwrap();

        let score = simulator.play(&TeamRatings::new(8, 7, 6), &TeamRatings::new(5, 5, 5));

        // (8*0.4 + 7*0.3 + 6*0.3) * 1.2 = 8.52
        assert_eq!(score, Score::new(9, 5));
    }

    #[test]
    fn test_same_seed_gives_same_score() {
        let home = TeamRatings::new(70, 65, 60);
        let away = TeamRatings::new(55, 72, 58);

        let mut first = MatchSimulator::new(StdRng::seed_from_u64(2024), SimulationSettings::default()).unwrap();
        let mut second = MatchSimulator::new(StdRng::seed_from_u64(2024), SimulationSettings::default()).unwrap();

        for _ in 0..20 {
            assert_eq!(first.play(&home, &away), second.play(&home, &away));
        }
    }

    #[test]
    fn test_scores_are_never_negative() {
        let settings = SimulationSettings {
            noise_std_dev: 3.0,
            ..SimulationSettings::default()
        };
        let mut simulator = MatchSimulator::new(StdRng::seed_from_u64(7), settings).unwrap();

        let home = TeamRatings::new(10, 10, 10);
        let away = TeamRatings::new(10, 10, 10);

        // With a wide spread about half the raw samples are negative.
        let mut saw_zero = false;
        for _ in 0..500 {
            let score = simulator.play(&home, &away);
            saw_zero |= score.home == 0 || score.away == 0;
        }

        assert!(saw_zero);
    }

    #[test]
    fn test_invalid_noise_is_rejected() {
        let settings = SimulationSettings {
            noise_std_dev: -0.5,
            ..SimulationSettings::default()
        };

        let result = MatchSimulator::new(StdRng::seed_from_u64(1), settings);

        assert!(matches!(result, Err(SeasonError::InvalidInput(_))));
    }

    #[test]
    fn test_non_finite_settings_are_rejected() {
        let broken = [
            SimulationSettings {
                home_advantage: f64::INFINITY,
                ..SimulationSettings::default()
            },
            SimulationSettings {
                attack_weight: f64::NAN,
                ..SimulationSettings::default()
            },
            SimulationSettings {
                defense_weight: f64::NEG_INFINITY,
                ..SimulationSettings::default()
            },
            SimulationSettings {
                noise_mean: f64::NAN,
                ..SimulationSettings::default()
            },
            SimulationSettings {
                noise_std_dev: f64::INFINITY,
                ..SimulationSettings::default()
            },
        ];

        for settings in broken {
            let result = MatchSimulator::new(StdRng::seed_from_u64(1), settings);

            assert!(matches!(result, Err(SeasonError::InvalidInput(_))), "{:?}", settings);
        }

        assert!(SimulationSettings::default().validate().is_ok());
    }

    #[test]
    fn test_simulate_stores_score_and_updates_teams() {
        let mut simulator = MatchSimulator::new(StdRng::seed_from_u64(1), fixed_noise()).unwrap();

        let mut home = team(1, 8, 7, 6);
        let mut away = team(2, 5, 5, 5);
        let mut item = ScheduleItem::new(String::from("test-1-1"), 1, None, 1, 2);

        let score = simulator.simulate(&mut item, &mut home, &mut away).unwrap();

        assert_eq!(item.result, Some(score));

        assert_eq!(home.statistics.wins, 1);
        assert_eq!(home.statistics.points, 3);
        assert_eq!(home.statistics.home.wins, 1);
        assert_eq!(home.statistics.home_streak, 1);

        assert_eq!(away.statistics.losses, 1);
        assert_eq!(away.statistics.away.losses, 1);
        assert_eq!(away.statistics.away_streak, -1);
    }

    #[test]
    fn test_simulate_twice_is_precondition_error() {
        let mut simulator = MatchSimulator::new(StdRng::seed_from_u64(1), fixed_noise()).unwrap();

        let mut home = team(1, 8, 7, 6);
        let mut away = team(2, 5, 5, 5);
        let mut item = ScheduleItem::new(String::from("test-1-1"), 1, None, 1, 2);

        simulator.simulate(&mut item, &mut home, &mut away).unwrap();
        let home_after_first = home.statistics;

        let result = simulator.simulate(&mut item, &mut home, &mut away);

        assert!(matches!(result, Err(SeasonError::Precondition(_))));
        assert_eq!(home.statistics, home_after_first);
    }

    #[test]
    fn test_simulate_rejects_wrong_teams() {
        let mut simulator = MatchSimulator::new(StdRng::seed_from_u64(1), fixed_noise()).unwrap();

        let mut home = team(1, 8, 7, 6);
        let mut other = team(3, 5, 5, 5);
        let mut item = ScheduleItem::new(String::from("test-1-1"), 1, None, 1, 2);

        let result = simulator.simulate(&mut item, &mut home, &mut other);

        assert!(matches!(result, Err(SeasonError::InvalidInput(_))));
        assert!(item.result.is_none());
        assert_eq!(home.statistics, TeamStatistics::default());
    }
}
