use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{init_logging, Actor, AiPlayer, Board, Difficulty, Match};
use serde_json::json;

/// Play one bot-vs-bot match and print the result as JSON.
#[derive(Parser)]
struct Args {
    seed1: u64,
    seed2: u64,
    #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
    bot1: Difficulty,
    #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
    bot2: Difficulty,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let mut rng1 = SmallRng::seed_from_u64(args.seed1);
    let mut rng2 = SmallRng::seed_from_u64(args.seed2);

    let mut b1 = Board::new();
    let mut b2 = Board::new();
    b1.auto_place_ships(&mut rng1).map_err(|e| anyhow::anyhow!(e))?;
    b2.auto_place_ships(&mut rng2).map_err(|e| anyhow::anyhow!(e))?;

    let p1 = AiPlayer::with_difficulty(args.bot1, &mut rng1);
    let p2 = AiPlayer::with_difficulty(args.bot2, &mut rng2);

    let mut game = Match::new(
        Actor::new("player1", b1, Box::new(p1)),
        Actor::new("player2", b2, Box::new(p2)),
    );
    let result = game.run()?;

    let summary = json!({
        "player1": {"difficulty": format!("{:?}", args.bot1), "shots_taken": game.actor(1).board().shot_log().len()},
        "player2": {"difficulty": format!("{:?}", args.bot2), "shots_taken": game.actor(0).board().shot_log().len()},
        "winner": result.winner,
        "moves": result.moves,
    });

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
