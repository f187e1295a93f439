#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{
    init_logging, outcome_message, ui, Actor, AiPlayer, Board, CliPlayer, Difficulty,
    JsonLinesSink, Match, MatchResult, MatchState, Player, ResultSink,
};

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};
#[cfg(feature = "std")]
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Bot tier; asked interactively when omitted.
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,
    /// Who plays; asked interactively when omitted.
    #[arg(long, value_enum)]
    mode: Option<Mode>,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// File that finished matches are appended to, one JSON object per line.
    #[arg(long, default_value = "results.jsonl")]
    results: PathBuf,
    /// Play a single match without asking to play again.
    #[arg(long)]
    no_replay: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg(feature = "std")]
enum Mode {
    /// Human against a bot.
    Human,
    /// Two bots against each other.
    Bots,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let mut sink = JsonLinesSink::new(cli.results.clone());

    loop {
        let difficulty = match cli.difficulty {
            Some(d) => d,
            None => ask_difficulty()?,
        };
        let mode = match cli.mode {
            Some(m) => m,
            None => ask_mode()?,
        };

        let result = play(difficulty, mode, &mut rng)?;
        println!("\n{} won in {} moves!", result.winner, result.moves);
        match sink.record(&result) {
            Ok(()) => println!("Result saved to {}", sink.path().display()),
            Err(e) => eprintln!("Could not save result: {:#}", e),
        }

        if cli.no_replay || !ask_yes_no("Play again? (y/n): ")? {
            println!("Thanks for playing!");
            break;
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn play(difficulty: Difficulty, mode: Mode, rng: &mut SmallRng) -> anyhow::Result<MatchResult> {
    let mut board1 = Board::new();
    let mut board2 = Board::new();
    board1
        .auto_place_ships(rng)
        .map_err(|e| anyhow::anyhow!(e))?;
    board2
        .auto_place_ships(rng)
        .map_err(|e| anyhow::anyhow!(e))?;

    let (name1, player1): (&str, Box<dyn Player>) = match mode {
        Mode::Human => {
            println!("\nYour fleet:\n{}{}", ui::render_board(&board1, true), ui::legend(true));
            ("Player", Box::new(CliPlayer::stdio("Player")) as Box<dyn Player>)
        }
        Mode::Bots => (
            "Bot 1",
            Box::new(AiPlayer::with_difficulty(difficulty, rng)) as Box<dyn Player>,
        ),
    };
    let player2 = Box::new(AiPlayer::with_difficulty(difficulty, rng));

    let mut game = Match::new(
        Actor::new(name1, board1, player1),
        Actor::new("Bot 2", board2, player2),
    );

    loop {
        let finished = matches!(game.tick()?, MatchState::Finished(_));
        if mode == Mode::Bots {
            if let Some(shot) = game.last_shot() {
                println!(
                    "{} fires at {}: {}",
                    game.actor(shot.shooter).name(),
                    shot.cell,
                    outcome_message(shot.outcome)
                );
            }
        }
        if finished {
            break;
        }
    }

    for i in 0..2 {
        let actor = game.actor(i);
        println!("\n{}'s fleet:\n{}", actor.name(), ui::render_board(actor.board(), true));
    }
    match game.state() {
        MatchState::Finished(result) => Ok(result.clone()),
        MatchState::Ongoing => Err(anyhow::anyhow!("match ended without a winner")),
    }
}

#[cfg(feature = "std")]
fn read_answer(prompt: &str) -> anyhow::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        anyhow::bail!("input closed");
    }
    Ok(line.trim().to_string())
}

#[cfg(feature = "std")]
fn ask_difficulty() -> anyhow::Result<Difficulty> {
    loop {
        let answer = read_answer("Choose bot difficulty (1 - Easy, 2 - Medium, 3 - Hard): ")?;
        if let Some(d) = answer.parse().ok().and_then(Difficulty::from_level) {
            return Ok(d);
        }
        println!("Please enter 1, 2 or 3.");
    }
}

#[cfg(feature = "std")]
fn ask_mode() -> anyhow::Result<Mode> {
    loop {
        match read_answer("Choose mode (1 - Human vs Bot, 2 - Bot vs Bot): ")?.as_str() {
            "1" => return Ok(Mode::Human),
            "2" => return Ok(Mode::Bots),
            _ => println!("Please enter 1 or 2."),
        }
    }
}

#[cfg(feature = "std")]
fn ask_yes_no(prompt: &str) -> anyhow::Result<bool> {
    Ok(read_answer(prompt)?.eq_ignore_ascii_case("y"))
}
