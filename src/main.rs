#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use memory_match::{init_logging, run_game, AiPlayer, CliPlayer};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Console memory-matching game", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play the game interactively on this terminal.
    Play {
        #[arg(
            long,
            value_parser = clap::value_parser!(u8).range(1..=26),
            help = "Number of letter pairs (1-26); prompted for when omitted"
        )]
        letters: Option<u8>,
        #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Let the memory bot play a game and print the transcript.
    Auto {
        #[arg(
            long,
            default_value_t = 8,
            value_parser = clap::value_parser!(u8).range(1..=26),
            help = "Number of letter pairs (1-26)"
        )]
        letters: u8,
        #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (board will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play {
        letters: None,
        seed: None,
    });

    let mut stdout = std::io::stdout();
    match command {
        Commands::Play { letters, seed } => {
            let mut rng = make_rng(seed);
            let mut player = CliPlayer::stdio();
            if let Some(n) = letters {
                player = player.with_letters(usize::from(n));
            }
            run_game(&mut player, &mut stdout, &mut rng)?;
        }
        Commands::Auto { letters, seed } => {
            let mut rng = make_rng(seed);
            let mut player = AiPlayer::new(usize::from(letters));
            let summary = run_game(&mut player, &mut stdout, &mut rng)?;
            println!("Bot finished in {} attempts.", summary.attempts);
        }
    }
    Ok(())
}

