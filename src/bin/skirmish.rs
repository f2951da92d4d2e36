//! Headless Skirmish Runner
//!
//! Generates a random territory map and resolves a batch of attacks under
//! a fixed seed, printing a JSON or text summary. Useful for balance
//! checks and for replaying reported sessions deterministically.

use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use warpath::war::attack::{resolve_attack, AttackResult};
use warpath::war::store::TerritoryStore;
use warpath::war::territory::Territory;

/// Headless Skirmish Runner - batch attack resolution
#[derive(Parser, Debug)]
#[command(name = "skirmish")]
#[command(about = "Run a headless batch of territory attacks")]
struct Args {
    /// Number of territories to generate
    #[arg(long, default_value_t = 6)]
    territories: usize,

    /// Number of attack attempts to resolve
    #[arg(long, default_value_t = 100)]
    attacks: u32,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,
}

/// JSON output structure
#[derive(Serialize)]
struct SkirmishReport {
    seed: u64,
    attacks_attempted: u32,
    conquests: u32,
    repulses: u32,
    rejections: u32,
    dominant_faction: Option<String>,
    territories: Vec<Territory>,
}

const FACTIONS: &[&str] = &["Red", "Blue", "Green", "Yellow", "Black", "White"];

const TERRITORY_NAMES: &[&str] = &[
    "Avalon",
    "Brumark",
    "Caldera",
    "Drakmoor",
    "Eastmarch",
    "Fenwick",
    "Galdor",
    "Highmere",
    "Ironhold",
    "Jarlheim",
];

fn generate_territories(count: usize, rng: &mut ChaCha8Rng) -> Vec<Territory> {
    (0..count)
        .map(|i| {
            let name = if i < TERRITORY_NAMES.len() {
                TERRITORY_NAMES[i].to_string()
            } else {
                format!("{} {}", TERRITORY_NAMES[i % TERRITORY_NAMES.len()], i)
            };
            let color = FACTIONS[rng.gen_range(0..FACTIONS.len())].to_string();
            let troops = rng.gen_range(1..=20);
            Territory::new(name, color, troops)
        })
        .collect()
}

/// The faction color holding every territory, if any single one does.
fn dominant_faction(store: &TerritoryStore) -> Option<String> {
    let mut territories = store.iter();
    let first = territories.next()?.color.clone();
    if territories.all(|t| t.color == first) {
        Some(first)
    } else {
        None
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("warpath=warn")
        .init();

    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    // A skirmish needs at least two territories to have a fight.
    let count = args.territories.max(2);
    let mut store = TerritoryStore::new(generate_territories(count, &mut rng));

    let mut attacks_attempted = 0;
    let mut conquests = 0;
    let mut repulses = 0;
    let mut rejections = 0;

    for _ in 0..args.attacks {
        if dominant_faction(&store).is_some() {
            break;
        }

        attacks_attempted += 1;
        let attacker = rng.gen_range(0..store.len());
        let defender = rng.gen_range(0..store.len());

        if attacker == defender {
            rejections += 1;
            continue;
        }

        let resolved = store
            .get_pair(attacker, defender)
            .and_then(|(attacker, defender)| resolve_attack(attacker, defender, &mut rng));

        match resolved {
            Ok(outcome) => match outcome.result {
                AttackResult::Conquered { .. } => conquests += 1,
                AttackResult::Repelled => repulses += 1,
            },
            Err(_) => rejections += 1,
        }
    }

    let report = SkirmishReport {
        seed,
        attacks_attempted,
        conquests,
        repulses,
        rejections,
        dominant_faction: dominant_faction(&store),
        territories: store.iter().cloned().collect(),
    };

    if args.format == "text" {
        println!("Skirmish complete (seed {})", report.seed);
        println!("Attacks attempted: {}", report.attacks_attempted);
        println!("Conquests: {}", report.conquests);
        println!("Repulses: {}", report.repulses);
        println!("Rejections: {}", report.rejections);
        match &report.dominant_faction {
            Some(color) => println!("Dominant faction: {}", color),
            None => println!("No dominant faction"),
        }
        for (i, territory) in report.territories.iter().enumerate() {
            println!(
                "[{}] {} | Faction: {} | Troops: {}",
                i, territory.name, territory.color, territory.troops
            );
        }
    } else {
        let json = serde_json::to_string_pretty(&report).expect("Failed to serialize report");
        println!("{}", json);
    }
}
