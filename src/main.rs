use color_eyre::eyre::{WrapErr, eyre};
use env_logger::Env;
use league_core::utils::TimeEstimation;
use league_core::{League, MatchSimulator, ScheduleGenerator, ScheduleSettings, SimulationSettings, Team};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::env;
use std::fs;

const DEFAULT_ROSTER: &str = "data/roster.json";

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let roster_path = env::args()
        .nth(1)
        .or_else(|| env::var("ROSTER").ok())
        .unwrap_or_else(|| String::from(DEFAULT_ROSTER));

    let seed = match env::var("SEED") {
        Ok(value) => value
            .parse::<u64>()
            .wrap_err_with(|| format!("SEED must be an unsigned integer, got {}", value))?,
        Err(_) => rand::rng().random(),
    };

    info!("seed: {}", seed);

    let (teams, estimated) = TimeEstimation::estimate(|| load_roster(&roster_path));
    let teams = teams?;

    info!("roster loaded: {} teams, {} ms", teams.len(), estimated);

    let name = teams
        .first()
        .map(|t| t.league.clone())
        .ok_or_else(|| eyre!("roster {} has no teams", roster_path))?;

    let mut league = League::new(1, name, teams);

    league.refresh_ratings()?;

    let mut generator = ScheduleGenerator::new(StdRng::seed_from_u64(seed), ScheduleSettings::default());
    league.generate_schedule(&mut generator)?;

    let mut simulator = MatchSimulator::new(
        StdRng::seed_from_u64(seed.wrapping_add(1)),
        SimulationSettings::default(),
    )?;

    let (results, estimated) = TimeEstimation::estimate(|| league.play_season(&mut simulator));
    let results = results?;

    info!("season played: {} tours, {} ms", results.len(), estimated);

    let table = league.table();

    for (position, row) in table.rows.iter().enumerate() {
        info!(
            "{:>2}. {:<24} {:>2} {:>3}:{:<3} {:>3}",
            position + 1,
            row.team_name,
            row.played,
            row.goals_for,
            row.goals_against,
            row.points
        );
    }

    println!("{}", serde_json::to_string_pretty(&table)?);

    Ok(())
}

fn load_roster(path: &str) -> color_eyre::Result<Vec<Team>> {
    let content = fs::read_to_string(path).wrap_err_with(|| format!("cannot read roster {}", path))?;

    let teams = serde_json::from_str(&content).wrap_err_with(|| format!("cannot parse roster {}", path))?;

    Ok(teams)
}
