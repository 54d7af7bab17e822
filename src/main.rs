//! Estate Gym - headless episode driver.
//!
//! Runs one or more episodes of the real-estate market environment under a
//! baseline policy, logging balances as it goes and printing a closing
//! report. All market logic lives in the member crates; this binary only
//! reads the environment's public state.

mod config;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use agents::{Policy, RandomPolicy, ThresholdPolicy};
use simulation::{EnvConfig, MarketSimulator};
use types::ActionOutcome;

pub use config::{DriverConfig, PolicyKind};

/// Estate Gym - real-estate investment market simulation
#[derive(Parser, Debug)]
#[command(name = "estate-gym")]
#[command(about = "Run a baseline policy against the real-estate market environment")]
#[command(version)]
struct Args {
    /// Steps to run per episode
    #[arg(long, env = "GYM_STEPS")]
    steps: Option<u64>,

    /// Episodes to run back to back
    #[arg(long, env = "GYM_EPISODES")]
    episodes: Option<u32>,

    /// Master random seed
    #[arg(long, env = "GYM_SEED")]
    seed: Option<u64>,

    /// Listings generated per episode
    #[arg(long, env = "GYM_LISTINGS")]
    listings: Option<usize>,

    /// Agent starting balance
    #[arg(long, env = "GYM_INITIAL_CASH")]
    initial_cash: Option<f64>,

    /// Steps between progress log lines
    #[arg(long, env = "GYM_REPORT_INTERVAL")]
    report_interval: Option<u64>,

    /// Decision policy
    #[arg(long, value_enum, env = "GYM_POLICY")]
    policy: Option<PolicyKind>,
}

impl Args {
    fn into_config(self) -> DriverConfig {
        let mut config = DriverConfig::default();
        if let Some(steps) = self.steps {
            config.steps = steps;
        }
        if let Some(episodes) = self.episodes {
            config.episodes = episodes;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(listings) = self.listings {
            config.listings = listings;
        }
        if let Some(cash) = self.initial_cash {
            config.initial_cash = cash;
        }
        if let Some(interval) = self.report_interval {
            config.report_interval = interval.max(1);
        }
        if let Some(policy) = self.policy {
            config.policy = policy;
        }
        config
    }
}

fn build_policy(kind: PolicyKind, seed: u64) -> Box<dyn Policy> {
    match kind {
        PolicyKind::Random => Box::new(RandomPolicy::new(seed)),
        PolicyKind::Threshold => Box::new(ThresholdPolicy::default()),
    }
}

/// Run one episode; returns the total reward collected.
fn run_episode(env: &mut MarketSimulator, policy: &mut dyn Policy, config: &DriverConfig) -> f64 {
    let mut observation = env.reset();
    let mut total_reward = 0.0;

    for step in 0..config.steps {
        let action = policy.decide(&observation);
        let result = env.step(action);
        total_reward += result.reward;
        policy.observe_outcome(&result.outcome);

        match result.outcome {
            ActionOutcome::Terminal => {
                info!(step, "episode ended at inventory end");
                break;
            }
            ActionOutcome::Bought | ActionOutcome::Sold => {
                if let Some(tx) = env.last_transaction() {
                    info!(
                        outcome = %result.outcome,
                        amount = format!("{:.0}", tx.amount),
                        listing = %tx.listing.property_type,
                        neighborhood = tx.listing.neighborhood.as_str(),
                        reward = format!("{:.2}", result.reward),
                        "transaction"
                    );
                }
            }
            _ => {}
        }

        if step % config.report_interval == 0 {
            info!(
                step,
                cash = format!("{:.2}", env.cash()),
                net_worth = format!("{:.2}", env.net_worth()),
                holdings = env.holding_count(),
                waiting = env.wait_counter(),
                "progress"
            );
        }

        observation = result.observation;
    }

    total_reward
}

fn print_report(env: &mut MarketSimulator, config: &DriverConfig, episode: u32, total_reward: f64) {
    let stats = *env.stats();
    let cash = env.cash();
    let portfolio = env.portfolio_value();
    let profit = cash - config.initial_cash;

    eprintln!("╔══════════════════════════════════════════════════════╗");
    eprintln!(
        "║  Episode {:3} complete ({} steps)                    ",
        episode, stats.steps
    );
    eprintln!("╠══════════════════════════════════════════════════════╣");
    eprintln!(
        "║  Cash: {:>14.2}  │  Portfolio: {:>14.2}",
        cash, portfolio
    );
    eprintln!(
        "║  Net worth: {:>14.2}  │  Cash profit: {:>11.2}",
        cash + portfolio,
        profit
    );
    eprintln!(
        "║  Buys: {:4} ({} forced)  │  Sells: {:4}  │  Waits: {:4}",
        stats.buys, stats.forced_buys, stats.sells, stats.waits
    );
    eprintln!(
        "║  Rejected: {:4}  │  Total reward: {:>10.2}",
        stats.rejected(),
        total_reward
    );
    eprintln!(
        "║  Events: {} crisis, {} metro, {} shopping, {} crime, {} neutral",
        stats.crisis_ticks,
        stats.metro_ticks,
        stats.shopping_ticks,
        stats.crime_wave_ticks,
        stats.neutral_ticks
    );
    eprintln!("╚══════════════════════════════════════════════════════╝");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Args::parse().into_config();

    let env_config = EnvConfig::default()
        .with_listing_count(config.listings)
        .with_initial_cash(config.initial_cash);
    let mut env = MarketSimulator::new(env_config, config.seed)?;

    let policy_name = match config.policy {
        PolicyKind::Random => "random",
        PolicyKind::Threshold => "threshold",
    };
    info!(
        policy = policy_name,
        steps = config.steps,
        episodes = config.episodes,
        listings = config.listings,
        seed = config.seed,
        "starting estate gym"
    );

    for episode in 1..=config.episodes {
        // Fresh policy per episode so episodes are independent given the seed.
        let mut policy = build_policy(config.policy, config.seed.wrapping_add(episode as u64));
        let total_reward = run_episode(&mut env, policy.as_mut(), &config);
        print_report(&mut env, &config, episode, total_reward);
    }

    Ok(())
}
