use chrono::Local;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use spindle::{ColorToken, Entry, Hour, geometry};

#[derive(Parser, Debug)]
#[command(name = "spindle", version, about = "One-off wheel spins and schedule inspection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Spin a wheel of the given names once and print the outcome.
    Spin {
        /// Participant names, one slice each.
        #[arg(required = true)]
        names: Vec<String>,

        /// Seed the random source for a reproducible spin.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Rotation the wheel currently rests at, in degrees.
        #[arg(long, default_value_t = 0.0)]
        from: f64,
    },
    /// Print the next local occurrence of the daily rotation hour.
    Next {
        /// Hour of day, 0-23.
        hour: Hour,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Spin { names, seed, from } => spin_once(names, seed, from),
        Commands::Next { hour } => {
            let next = spindle::next_occurrence(Local::now(), hour);
            println!("next {} rotation: {}", hour, next.format("%Y-%m-%d %H:%M:%S %Z"));
            Ok(())
        }
    }
}

fn spin_once(names: Vec<String>, seed: Option<u64>, from: f64) -> anyhow::Result<()> {
    let entries: Vec<Entry> = names
        .into_iter()
        .enumerate()
        .map(|(i, name)| Entry::new(name, ColorToken::from_palette(i)))
        .collect();

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let outcome = spindle::spin(&entries, from, &mut rng)?;
    let winner = &entries[outcome.winner_index];

    println!("winner: {}", winner.name);
    println!(
        "slice:  {} of {} ({:.1}° wide)",
        outcome.winner_index + 1,
        entries.len(),
        geometry::slice_angle(entries.len())
    );
    println!("stop:   {:.2}°", outcome.stop_angle);
    println!("spin:   {:.2}° -> {:.2}°", from, outcome.new_rotation);
    Ok(())
}
