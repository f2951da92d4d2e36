//! Warpath - Entry Point
//!
//! Interactive driver for the conquest engine: registers territories from
//! stdin, runs the attack menu loop, and displays outcomes. All I/O lives
//! here; the engine itself never prints.

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use warpath::core::config::GameConfig;
use warpath::war::attack::{resolve_attack, AttackOutcome, AttackResult};
use warpath::war::store::TerritoryStore;
use warpath::war::territory::{Territory, COLOR_LEN, NAME_LEN};

use std::io::{self, Write};
use std::path::PathBuf;

/// Turn-based territory conquest simulator
#[derive(Parser, Debug)]
#[command(name = "warpath")]
#[command(about = "Turn-based territory conquest simulator")]
struct Args {
    /// Random seed for deterministic battles (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Game configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a JSON battle report to this path on exit
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("warpath=info")
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match GameConfig::load_from_toml(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Could not load config {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };

    let seed = args.seed.or(config.seed).unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    tracing::info!("Warpath starting (seed {})", seed);

    println!("\n=== WARPATH ===");
    println!("Turn-based territory conquest, settled by dice");
    println!();

    let mut store = register_territories(&config)?;
    let mut history: Vec<AttackOutcome> = Vec::new();

    loop {
        display_map(&store);

        println!("\nOptions:");
        println!("  1 - Launch attack");
        println!("  2 - Show map");
        println!("  0 - Quit");

        match read_int("Choose an option: ", 0, 2)? {
            0 => break,
            2 => continue, // map is redrawn at the top of the loop
            _ => {
                if let Some(outcome) = run_attack(&mut store, &mut rng)? {
                    history.push(outcome);
                    debug_assert!(
                        store.check_invariants().is_empty(),
                        "store invariants violated after attack"
                    );
                }
            }
        }
    }

    if let Some(path) = &args.report {
        match serde_json::to_string_pretty(&history) {
            Ok(json) => {
                std::fs::write(path, json)?;
                println!("Battle report written to {}", path.display());
            }
            Err(e) => eprintln!("Could not serialize battle report: {}", e),
        }
    }

    println!(
        "\nGoodbye! {} attack(s) resolved across {} territories.",
        history.len(),
        store.len()
    );
    Ok(())
}

/// Read the roster from stdin: count, then name/color/troops per territory.
fn register_territories(config: &GameConfig) -> io::Result<TerritoryStore> {
    let count = read_int(
        &format!(
            "Number of territories to register (1-{}): ",
            config.max_territories
        ),
        1,
        config.max_territories as u32,
    )? as usize;

    let mut territories = Vec::with_capacity(count);
    for i in 0..count {
        println!("\n--- Territory {} ---", i);
        let name = read_bounded("Name: ", NAME_LEN)?;
        let color = read_bounded("Faction color (e.g. Red, Blue): ", COLOR_LEN)?;
        let troops = read_int("Troops (>= 1): ", 1, config.max_troops)?;
        territories.push(Territory::new(name, color, troops));
    }

    Ok(TerritoryStore::new(territories))
}

/// Read an attacker/defender pair and resolve one attack.
///
/// Returns `Ok(None)` when the attack was rejected; the reason has already
/// been shown to the player.
fn run_attack(
    store: &mut TerritoryStore,
    rng: &mut ChaCha8Rng,
) -> io::Result<Option<AttackOutcome>> {
    let max = (store.len() - 1) as u32;
    let attacker = read_int("Attacker index: ", 0, max)? as usize;
    let defender = read_int("Defender index: ", 0, max)? as usize;

    if attacker == defender {
        println!("Invalid choice: attacker and defender must be different territories.");
        return Ok(None);
    }

    let resolved = store
        .get_pair(attacker, defender)
        .and_then(|(attacker, defender)| resolve_attack(attacker, defender, rng));

    match resolved {
        Ok(outcome) => {
            display_outcome(&outcome);
            Ok(Some(outcome))
        }
        Err(e) => {
            println!("{}", e);
            Ok(None)
        }
    }
}

/// Show the map with indices, names, factions, and troops.
fn display_map(store: &TerritoryStore) {
    println!("\n--- Territory Map ---");
    for (i, territory) in store.iter().enumerate() {
        println!(
            "[{}] {} | Faction: {} | Troops: {}",
            i, territory.name, territory.color, territory.troops
        );
    }
    println!("---------------------");
}

fn display_outcome(outcome: &AttackOutcome) {
    println!(
        "\nDice: attacker {} | defender {}",
        outcome.attacker_roll, outcome.defender_roll
    );

    match &outcome.result {
        AttackResult::Conquered {
            territory,
            troops_moved,
        } => {
            println!("Attacker wins! Territory '{}' has been conquered.", territory);
            println!("{} troops moved into the conquered territory.", troops_moved);
        }
        AttackResult::Repelled => {
            println!("Attack repelled (ties favor the defender). Attacker loses 1 troop.");
        }
    }

    println!("\nPost-attack state:");
    println!(
        "  Attacker: {} | Faction: {} | Troops: {}",
        outcome.attacker.name, outcome.attacker.color, outcome.attacker.troops
    );
    println!(
        "  Defender: {} | Faction: {} | Troops: {}",
        outcome.defender.name, outcome.defender.color, outcome.defender.troops
    );
}

/// Read an integer in `[min, max]`, reprompting until the input is valid.
fn read_int(prompt: &str, min: u32, max: u32) -> io::Result<u32> {
    loop {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed during prompt",
            ));
        }

        match input.trim().parse::<u32>() {
            Ok(value) if value >= min && value <= max => return Ok(value),
            Ok(_) => println!("Value out of range [{} - {}]. Try again.", min, max),
            Err(_) => println!("Invalid input. Enter a whole number."),
        }
    }
}

/// Read a non-empty line, trimmed and truncated to `max_len` characters.
fn read_bounded(prompt: &str, max_len: usize) -> io::Result<String> {
    loop {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed during prompt",
            ));
        }

        let trimmed = input.trim();
        if trimmed.is_empty() {
            println!("Value cannot be empty.");
            continue;
        }

        return Ok(trimmed.chars().take(max_len).collect());
    }
}
