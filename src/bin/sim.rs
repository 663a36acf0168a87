use memory_match::{run_game, AiPlayer};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <letters> <seed>", args[0]);
        std::process::exit(1);
    }
    let letters: usize = args[1].parse()?;
    let seed: u64 = args[2].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut player = AiPlayer::new(letters);
    // The transcript is not part of the report.
    let mut sink = std::io::sink();
    let summary = run_game(&mut player, &mut sink, &mut rng)?;

    let mut result = serde_json::to_value(&summary)?;
    result["seed"] = json!(seed);

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
