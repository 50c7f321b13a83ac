//! CLI Top 10 example.
//!
//! Usage: `cargo run --example cli_topten [questions.json]`
//!
//! Without a path a small built-in deck is used. Set `TOPTEN_SAVE` to a file
//! path to save after every action and resume from it on the next start.

use std::env;
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use topten::{
    ChallengeResolution, Feedback, FileDeckSource, Game, GameObserver, GameOptions,
    JsonDeckSource, JsonFileStore, Phase, RoundEndReason, SnapshotStore, TurnOutcome,
};

const SAMPLE_DECKS: &str = r#"{"decks":[{"theme":"Geography","questions":[
  {"category":"Most populous cities","top10":["Tokyo","Delhi","Shanghai","São Paulo",
   "Mexico City","Cairo","Mumbai","Beijing","Dhaka","Osaka"]},
  {"category":"Largest countries by area","top10":["Russia","Canada","China",
   "United States","Brazil","Australia","India","Argentina","Kazakhstan","Algeria"]}
]}]}"#;

struct Announcer;

impl GameObserver for Announcer {
    fn on_feedback(&mut self, feedback: Feedback) {
        match feedback {
            Feedback::ChallengeRaised { .. } => println!("{}", colorize("** CHALLENGE! **", "33")),
            Feedback::ChallengeCorrect => println!("{}", colorize("It's on the list!", "32")),
            Feedback::ChallengeIncorrect => println!("{}", colorize("Not on the list!", "31")),
            Feedback::RoundWon { .. } => {}
        }
    }
}

fn main() {
    println!("Top 10 CLI example (type 'q' to quit)");

    let mut store = env::var_os("TOPTEN_SAVE").map(JsonFileStore::new);

    let game = match resume(store.as_ref()) {
        Some(game) => {
            println!("Resumed saved game.");
            game
        }
        None => match new_game() {
            Some(game) => game,
            None => return,
        },
    };
    game.set_observer(Announcer);

    loop {
        if let Some(store) = store.as_mut() {
            if let Err(err) = store.save(&game.snapshot()) {
                println!("Save error: {err}");
            }
        }

        match game.phase() {
            Phase::Setup => break,
            Phase::AwaitingTurnAction => {
                print_table(&game);
                if !turn_action(&game) {
                    break;
                }
            }
            Phase::AwaitingChallengeDecision => {
                if !challenge_decision(&game) {
                    break;
                }
            }
            Phase::AwaitingResolution => match game.resolve() {
                Ok(resolution) => print_resolution(&game, &resolution),
                Err(err) => {
                    println!("Resolve error: {err}");
                    break;
                }
            },
            Phase::RoundEnded => {
                if let Err(err) = game.next_round() {
                    println!("Deal error: {err}");
                    break;
                }
            }
            Phase::GameOver => {
                print_standings(&game);
                if let Some(store) = store.as_mut() {
                    let _ = store.clear();
                }
                break;
            }
        }
    }
}

fn resume(store: Option<&JsonFileStore>) -> Option<Game> {
    let snapshot = store?.load().ok()??;
    if snapshot.phase == Phase::GameOver {
        return None;
    }
    Game::from_snapshot(snapshot).ok()
}

fn new_game() -> Option<Game> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    let loaded = match env::args().nth(1) {
        Some(path) => game.load_decks(&FileDeckSource(path.into())),
        None => game.load_decks(&JsonDeckSource(SAMPLE_DECKS)),
    };
    match loaded {
        Ok(0) => {
            println!("No decks configured.");
            return None;
        }
        Ok(_) => {}
        Err(err) => {
            println!("Could not load questions: {err}");
            return None;
        }
    }

    for (index, theme) in game.deck_themes().iter().enumerate() {
        println!("  [{index}] {theme}");
    }

    loop {
        let deck = prompt_usize("Deck number: ")?;
        let names = prompt_raw("Player names (comma separated): ");
        if names.eq_ignore_ascii_case("q") {
            return None;
        }
        let names: Vec<&str> = names.split(',').collect();
        match game.start_game(&names, deck) {
            Ok(()) => return Some(game),
            Err(err) => println!("Setup error: {err}"),
        }
    }
}

fn turn_action(game: &Game) -> bool {
    let Some(player_id) = game.current_player() else {
        return false;
    };
    let name = player_name(game, player_id);

    loop {
        let input = prompt_line(&format!("{name}, [g]uess or [p]ass: "));
        match input.as_str() {
            "q" | "quit" => return false,
            "p" | "pass" => match game.pass(player_id) {
                Ok(outcome) => {
                    print_outcome(game, outcome);
                    return true;
                }
                Err(err) => println!("Pass error: {err}"),
            },
            "g" | "guess" => {
                let guess = prompt_raw("Your guess: ");
                match game.guess(player_id, &guess) {
                    Ok(()) => return true,
                    Err(err) => println!("Guess error: {err}"),
                }
            }
            _ => println!("Unknown action."),
        }
    }
}

fn challenge_decision(game: &Game) -> bool {
    let guess = game
        .round_state()
        .and_then(|round| round.current_guess)
        .unwrap_or_default();
    println!("\nGuess on the table: {}", colorize(&guess, "1"));

    let challengers = game.eligible_challengers();
    if challengers.is_empty() {
        println!("Nobody can challenge; the guess is accepted.");
        return accept(game);
    }

    let options: Vec<String> = challengers
        .iter()
        .map(|&id| format!("[{id}] {}", player_name(game, id)))
        .collect();
    println!("Challengers: {}", options.join(", "));

    loop {
        let input = prompt_line("Challenger number, or [a]ccept: ");
        match input.as_str() {
            "q" | "quit" => return false,
            "a" | "accept" => return accept(game),
            other => match other.parse::<u8>() {
                Ok(id) => match game.challenge(id) {
                    Ok(()) => return true,
                    Err(err) => println!("Challenge error: {err}"),
                },
                Err(_) => println!("Please enter a player number."),
            },
        }
    }
}

fn accept(game: &Game) -> bool {
    match game.accept() {
        Ok(outcome) => {
            if let Some(rank) = outcome.rank {
                println!("Revealed #{}.", rank + 1);
            }
            print_outcome(game, outcome.turn);
            true
        }
        Err(err) => {
            println!("Accept error: {err}");
            false
        }
    }
}

fn print_resolution(game: &Game, resolution: &ChallengeResolution) {
    let verdict = if resolution.correct {
        colorize("IT'S TOP!", "32")
    } else {
        colorize("NOT TOP!", "31")
    };
    println!("\n\"{}\": {verdict}", resolution.guess);
    for (index, item) in resolution.top10.iter().enumerate() {
        let line = format!("{:>2}. {item}", index + 1);
        if resolution.rank == Some(index) {
            println!("{}", colorize(&line, "1;33"));
        } else {
            println!("{line}");
        }
    }

    let loser = player_name(game, resolution.life_lost_by);
    if resolution.eliminated {
        println!("{loser} loses their last life and is out!");
    } else {
        println!("{loser} loses a life.");
    }
    print_outcome(game, resolution.turn);
}

fn print_outcome(game: &Game, outcome: TurnOutcome) {
    match outcome {
        TurnOutcome::Continue { .. } => {}
        TurnOutcome::RoundEnded(end) => {
            let text = match (end.winner, end.reason) {
                (_, RoundEndReason::ListRevealed) => "The whole list is revealed!".to_string(),
                (Some(winner), _) => format!("{} wins the round!", player_name(game, winner)),
                (None, _) => "Nobody wins this round.".to_string(),
            };
            println!("\n{}", colorize(&text, "36"));
        }
        TurnOutcome::GameOver { winner } => {
            println!(
                "\n{}",
                colorize(&format!("{} wins the game!", player_name(game, winner)), "1;32")
            );
        }
    }
}

fn print_table(game: &Game) {
    let Some(round) = game.round_state() else {
        return;
    };
    println!(
        "\nRound {}: {}",
        game.round_number(),
        colorize(&round.question.category, "1")
    );
    for index in 0..round.question.len() {
        let text = if round.is_revealed(index) {
            round.question.answer(index).unwrap_or_default().to_string()
        } else {
            "???".to_string()
        };
        println!("{:>2}. {text}", index + 1);
    }

    let current = game.current_player();
    for player in game.players() {
        let marker = if Some(player.id) == current { "*" } else { " " };
        let status = if player.is_eliminated() {
            colorize("out", "90")
        } else if round.has_passed(player.id) {
            colorize("passed", "90")
        } else {
            String::new()
        };
        println!(
            "{marker} [{}] {} | lives {} | cards {} {status}",
            player.id,
            player.name,
            player.lives(),
            player.cards()
        );
    }
    println!();
}

fn print_standings(game: &Game) {
    println!("\nFinal standings:");
    for standing in game.final_standings() {
        println!(
            "{}. {} | cards {} | lives {}",
            standing.place, standing.name, standing.cards, standing.lives
        );
    }
}

fn player_name(game: &Game, player_id: u8) -> String {
    game.get_player(player_id)
        .map_or_else(|| format!("Player {player_id}"), |p| p.name)
}

fn prompt_raw(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt_line(prompt: &str) -> String {
    prompt_raw(prompt).to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
