//! Interactive console client for JaDoK.
//!
//! Lists the legal actions for whoever has priority each step and
//! applies the chosen one. `zones` and `stats` show the table; `quit`
//! abandons the game.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use jadok::cards::CardSet;
use jadok::core::{GameState, PlayerId};
use jadok::zones::ZoneKind;
use jadok::game::{GameBuilder, JadokGame, PLAYER_COUNT};
use jadok::rules::{GameResult, RulesEngine};

#[derive(Parser, Debug)]
#[command(name = "jadok", about = "JaDoK card game console client", version)]
struct Args {
    /// RNG seed; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// CSV card-set file; the built-in set when omitted.
    #[arg(long)]
    cards: Option<PathBuf>,

    /// Player display names.
    #[arg(long, num_args = 2, default_values = ["Player 0", "Player 1"])]
    names: Vec<String>,

    /// Verbose engine logging (overridden by RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_filter = if args.verbose { "jadok=debug" } else { "jadok=info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with_writer(io::stderr)
        .init();

    let set = match &args.cards {
        Some(path) => CardSet::load(path)?,
        None => CardSet::builtin(),
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    println!("JaDoK Cultured — seed {seed}");

    let (game, mut state) = GameBuilder::new().card_set(set).build(seed);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let result = loop {
        if let Some(result) = game.is_terminal(&state) {
            break Some(result);
        }

        let player = state.public.priority;
        println!();
        println!(
            "Round {} — {} — {} to act",
            state.public.round,
            state.public.phase,
            args.names[player.index()]
        );

        let actions = game.legal_actions(&state, player);
        for (i, action) in actions.iter().enumerate() {
            println!("  [{i}] {}", game.describe_action(&state, action));
        }
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break None;
        };
        let line = line?;
        match line.trim() {
            "" => continue,
            "quit" | "q" => break None,
            "zones" => {
                print_zones(&game, &state, &args.names);
                continue;
            }
            "stats" => {
                print_stats(&game, &state, &args.names);
                continue;
            }
            input => {
                let Ok(index) = input.parse::<usize>() else {
                    println!("enter an action number, 'zones', 'stats' or 'quit'");
                    continue;
                };
                let Some(action) = actions.get(index) else {
                    println!("no such action");
                    continue;
                };
                if let Err(err) = game.apply_action(&mut state, player, action) {
                    println!("rejected: {err}");
                }
            }
        }
    };

    println!();
    match result {
        Some(GameResult::Winner(player)) => {
            println!("{} wins!", args.names[player.index()]);
        }
        Some(GameResult::Draw) => println!("A draw."),
        None => println!("Game abandoned."),
    }
    print_stats(&game, &state, &args.names);

    Ok(())
}

fn print_stats(game: &JadokGame, state: &GameState, names: &[String]) {
    for player in PlayerId::all(PLAYER_COUNT) {
        println!(
            "{}: {} VP | hand {} | deck {} | wall {}",
            names[player.index()],
            game.victory_points(state, player),
            state.public.hand_sizes[player],
            state.deck_size(player),
            state.zones.zone_size(state.zone(player, ZoneKind::Wall)),
        );
    }
}

fn print_zones(game: &JadokGame, state: &GameState, names: &[String]) {
    for player in PlayerId::all(PLAYER_COUNT) {
        println!("{}:", names[player.index()]);
        for kind in [ZoneKind::Battlement, ZoneKind::Field, ZoneKind::Discard] {
            let zone = state.zone(player, kind);
            let cards: Vec<String> = state
                .zones
                .cards_in(zone)
                .iter()
                .map(|&e| {
                    let card = state.card(e);
                    let stats = card
                        .map(|c| format!(" ({} dmg, {} ap)", c.damage_taken, c.action_points))
                        .unwrap_or_default();
                    format!("{}{}", game.card_name(state, e), stats)
                })
                .collect();
            println!("  {kind}: {}", cards.join(", "));
        }
        let wall = state.zone(player, ZoneKind::Wall);
        println!(
            "  wall: {} cards ({} revealed)",
            state.zones.zone_size(wall),
            state.public.known_wall[player].len()
        );
    }
}
