//! Game integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use topten::{
    AcceptRule, ActionError, ChallengeError, Deck, Feedback, Game, GameMode, GameObserver,
    GameOptions, GameSnapshot, JsonDeckSource, LoadError, Phase, Question, RoundEnd,
    RoundEndReason, SetupError, TurnOutcome,
};

const CITIES: [&str; 10] = [
    "Tokyo",
    "Delhi",
    "Shanghai",
    "São Paulo",
    "Mexico City",
    "Cairo",
    "Mumbai",
    "Beijing",
    "Dhaka",
    "Osaka",
];

fn cities() -> Question {
    Question::new(
        "Most populous cities",
        CITIES.iter().map(|s| (*s).to_string()).collect(),
    )
}

fn geography() -> Deck {
    Deck::new("Geography", vec![cities()])
}

fn start(options: GameOptions, names: &[&str]) -> Game {
    let game = Game::new(options, 7);
    game.set_decks(vec![geography()]);
    game.start_game(names, 0).unwrap();
    game
}

#[test]
fn guess_matching_ignores_case_and_accents() {
    let question = cities();
    assert!(question.is_correct("São Paulo"));
    assert!(question.is_correct("sao paulo"));
    assert!(question.is_correct("SAO PAULO"));
    assert!(question.is_correct("  são paulo  "));
    assert_eq!(question.rank_of("SAO PAULO"), Some(3));

    assert!(!question.is_correct("Sao"));
    assert!(!question.is_correct("SaoPaulo"));
    assert!(!question.is_correct("London"));
}

#[test]
fn start_game_errors() {
    let game = Game::new(GameOptions::default().with_max_players(3), 1);

    assert_eq!(
        game.start_game(&["Ana", "Bruno"], 0).unwrap_err(),
        SetupError::NoDecks
    );

    game.set_decks(vec![geography(), Deck::new("Empty", Vec::new())]);

    assert_eq!(
        game.start_game(&["Ana"], 0).unwrap_err(),
        SetupError::TooFewPlayers
    );
    assert_eq!(
        game.start_game(&["Ana", "Bruno", "Carla", "Davi"], 0)
            .unwrap_err(),
        SetupError::TooManyPlayers { max: 3 }
    );
    assert_eq!(
        game.start_game(&["Ana", "  "], 0).unwrap_err(),
        SetupError::EmptyName
    );
    assert_eq!(
        game.start_game(&["Ana", " ANA "], 0).unwrap_err(),
        SetupError::DuplicateName
    );
    assert_eq!(
        game.start_game(&["Ana", "Bruno"], 5).unwrap_err(),
        SetupError::DeckNotFound
    );
    assert_eq!(
        game.start_game(&["Ana", "Bruno"], 1).unwrap_err(),
        SetupError::EmptyDeck
    );

    assert_eq!(game.phase(), Phase::Setup);
    assert!(game.players().is_empty());

    for options in [
        GameOptions::default().with_starting_lives(0),
        GameOptions::default().with_winning_cards(0),
        GameOptions::default().with_max_players(1),
    ] {
        let unplayable = Game::new(options, 1);
        unplayable.set_decks(vec![geography()]);
        assert_eq!(
            unplayable.start_game(&["Ana", "Bruno"], 0).unwrap_err(),
            SetupError::InvalidOptions
        );
        assert_eq!(unplayable.phase(), Phase::Setup);
        assert!(unplayable.players().is_empty());
        assert!(unplayable.round_state().is_none());
    }

    game.start_game(&["Ana", "Bruno"], 0).unwrap();
    assert_eq!(
        game.start_game(&["Ana", "Bruno"], 0).unwrap_err(),
        SetupError::InvalidState
    );
}

#[test]
fn start_game_seats_players() {
    let game = start(GameOptions::default(), &[" Ana ", "Bruno", "Carla"]);

    let players = game.players();
    assert_eq!(players.len(), 3);
    assert_eq!(players[0].name, "Ana");
    for (index, player) in players.iter().enumerate() {
        assert_eq!(player.id as usize, index);
        assert_eq!(player.lives(), 4);
        assert_eq!(player.cards(), 0);
        assert!(!player.is_eliminated());
    }

    assert_eq!(game.phase(), Phase::AwaitingTurnAction);
    assert_eq!(game.round_number(), 1);
    assert_eq!(game.current_player(), Some(0));

    let round = game.round_state().unwrap();
    assert_eq!(round.question.category, "Most populous cities");
    assert!(round.revealed.is_empty());
    assert_eq!(round.players.len(), 3);
    assert!(round.players.iter().all(|p| !p.passed));
}

#[test]
fn turn_action_errors() {
    let game = start(GameOptions::default(), &["Ana", "Bruno"]);

    assert_eq!(
        game.guess(1, "Tokyo").unwrap_err(),
        ActionError::NotYourTurn
    );
    assert_eq!(game.pass(1).unwrap_err(), ActionError::NotYourTurn);
    assert_eq!(
        game.guess(9, "Tokyo").unwrap_err(),
        ActionError::PlayerNotFound
    );
    assert_eq!(game.guess(0, "   ").unwrap_err(), ActionError::EmptyGuess);
    assert_eq!(game.accept().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.resolve().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.next_round().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.challenge(1).unwrap_err(), ChallengeError::InvalidState);

    assert_eq!(game.phase(), Phase::AwaitingTurnAction);
    assert!(game.round_state().unwrap().current_guess.is_none());

    game.guess(0, "Tokyo").unwrap();
    assert_eq!(game.phase(), Phase::AwaitingChallengeDecision);
    assert_eq!(game.pass(0).unwrap_err(), ActionError::InvalidState);
    assert_eq!(
        game.guess(0, "Delhi").unwrap_err(),
        ActionError::InvalidState
    );
}

#[test]
fn accepted_correct_guess_reveals_and_rotates() {
    let game = start(GameOptions::default(), &["Ana", "Bruno", "Carla"]);

    game.guess(0, "  sao paulo ").unwrap();
    let round = game.round_state().unwrap();
    assert_eq!(round.current_guess.as_deref(), Some("sao paulo"));
    assert_eq!(round.guesser, Some(0));

    let outcome = game.accept().unwrap();
    assert!(outcome.correct);
    assert_eq!(outcome.rank, Some(3));
    assert_eq!(outcome.turn, TurnOutcome::Continue { next_player: 1 });

    let round = game.round_state().unwrap();
    assert_eq!(round.revealed, vec![3]);
    assert!(round.current_guess.is_none());
    assert!(game.players().iter().all(|p| p.lives() == 4 && p.cards() == 0));
    assert_eq!(game.phase(), Phase::AwaitingTurnAction);
}

#[test]
fn accepted_wrong_guess_is_unpunished_by_default() {
    let game = start(GameOptions::default(), &["Ana", "Bruno", "Carla"]);

    game.guess(0, "London").unwrap();
    let outcome = game.accept().unwrap();
    assert!(!outcome.correct);
    assert_eq!(outcome.rank, None);
    assert_eq!(outcome.turn, TurnOutcome::Continue { next_player: 1 });

    let round = game.round_state().unwrap();
    assert!(!round.has_passed(0));
    assert!(round.revealed.is_empty());
    assert_eq!(game.get_player(0).unwrap().lives(), 4);
}

#[test]
fn strict_accept_rule_benches_wrong_guesser() {
    let options = GameOptions::default().with_accept_rule(AcceptRule::Strict);
    let game = start(options, &["Ana", "Bruno"]);

    game.guess(0, "London").unwrap();
    let outcome = game.accept().unwrap();

    assert_eq!(
        outcome.turn,
        TurnOutcome::RoundEnded(RoundEnd {
            round: 1,
            winner: Some(1),
            reason: RoundEndReason::LastPlayerStanding,
            next_starter: Some(0),
        })
    );
    assert_eq!(game.get_player(1).unwrap().cards(), 1);
    assert_eq!(game.get_player(0).unwrap().lives(), 4);
}

#[test]
fn failed_challenge_costs_challenger_a_life() {
    let game = start(GameOptions::default(), &["Ana", "Bruno"]);

    game.guess(0, "Tokyo").unwrap();
    assert_eq!(game.eligible_challengers(), vec![1]);
    game.challenge(1).unwrap();
    assert_eq!(game.phase(), Phase::AwaitingResolution);

    let resolution = game.resolve().unwrap();
    assert!(resolution.correct);
    assert_eq!(resolution.rank, Some(0));
    assert_eq!(resolution.life_lost_by, 1);
    assert!(!resolution.eliminated);
    assert_eq!(resolution.top10.len(), 10);
    assert_eq!(resolution.turn, TurnOutcome::Continue { next_player: 0 });

    assert_eq!(game.get_player(1).unwrap().lives(), 3);
    assert_eq!(game.get_player(0).unwrap().cards(), 0);
    let round = game.round_state().unwrap();
    assert!(round.has_passed(1));
    assert!(round.is_revealed(0));

    // The guesser is alone in the round and keeps playing.
    assert_eq!(game.phase(), Phase::AwaitingTurnAction);
    assert_eq!(game.current_player(), Some(0));

    let outcome = game.pass(0).unwrap();
    assert_eq!(
        outcome,
        TurnOutcome::RoundEnded(RoundEnd {
            round: 1,
            winner: Some(0),
            reason: RoundEndReason::LastGuesser,
            next_starter: Some(1),
        })
    );
    assert_eq!(game.get_player(0).unwrap().cards(), 1);
    assert_eq!(game.phase(), Phase::RoundEnded);
    assert_eq!(game.round_number(), 2);
}

#[test]
fn lone_guesser_cannot_be_challenged() {
    let game = start(GameOptions::default(), &["Ana", "Bruno"]);

    game.guess(0, "Tokyo").unwrap();
    game.challenge(1).unwrap();
    game.resolve().unwrap();

    game.guess(0, "Delhi").unwrap();
    assert!(game.eligible_challengers().is_empty());
    assert_eq!(
        game.challenge(1).unwrap_err(),
        ChallengeError::NoEligibleChallenger
    );
    assert_eq!(game.phase(), Phase::AwaitingChallengeDecision);

    let outcome = game.accept().unwrap();
    assert!(outcome.correct);
    assert_eq!(
        outcome.turn,
        TurnOutcome::RoundEnded(RoundEnd {
            round: 1,
            winner: Some(0),
            reason: RoundEndReason::LastPlayerStanding,
            next_starter: Some(1),
        })
    );
}

#[test]
fn caught_wrong_guess_ends_round_for_challenger() {
    let game = start(GameOptions::default(), &["Ana", "Bruno", "Carla"]);

    game.guess(0, "London").unwrap();
    game.challenge(1).unwrap();
    let resolution = game.resolve().unwrap();

    assert!(!resolution.correct);
    assert_eq!(resolution.life_lost_by, 0);
    assert_eq!(
        resolution.turn,
        TurnOutcome::RoundEnded(RoundEnd {
            round: 1,
            winner: Some(1),
            reason: RoundEndReason::ChallengeWon,
            next_starter: Some(1),
        })
    );
    assert_eq!(game.get_player(0).unwrap().lives(), 3);
    assert_eq!(game.get_player(1).unwrap().cards(), 1);
    assert!(game.round_state().unwrap().has_passed(0));
    assert_eq!(game.current_player(), None);

    assert_eq!(game.next_round().unwrap(), 1);
    assert_eq!(game.current_player(), Some(1));
    assert_eq!(game.round_number(), 2);
    let round = game.round_state().unwrap();
    assert_eq!(round.players.len(), 3);
    assert!(round.players.iter().all(|p| !p.passed));
    assert!(round.last_guesser.is_none());
}

#[test]
fn challenge_errors() {
    let options = GameOptions::default().with_starting_lives(1);
    let game = start(options, &["Ana", "Bruno", "Carla", "Davi"]);

    // Bruno loses their only life on a failed challenge.
    game.guess(0, "Tokyo").unwrap();
    game.challenge(1).unwrap();
    let resolution = game.resolve().unwrap();
    assert!(resolution.eliminated);
    assert!(game.get_player(1).unwrap().is_eliminated());
    assert_eq!(resolution.turn, TurnOutcome::Continue { next_player: 2 });

    // Carla passes; Davi guesses.
    assert_eq!(
        game.pass(2).unwrap(),
        TurnOutcome::Continue { next_player: 3 }
    );
    game.guess(3, "Delhi").unwrap();
    assert_eq!(game.eligible_challengers(), vec![0]);

    assert_eq!(
        game.challenge(3).unwrap_err(),
        ChallengeError::SelfChallenge
    );
    assert_eq!(
        game.challenge(9).unwrap_err(),
        ChallengeError::PlayerNotFound
    );
    assert_eq!(
        game.challenge(1).unwrap_err(),
        ChallengeError::ChallengerEliminated
    );
    assert_eq!(
        game.challenge(2).unwrap_err(),
        ChallengeError::ChallengerPassed
    );
    assert_eq!(game.phase(), Phase::AwaitingChallengeDecision);
    assert!(game.round_state().unwrap().challenger.is_none());

    game.challenge(0).unwrap();
    assert_eq!(game.round_state().unwrap().challenger, Some(0));
}

#[test]
fn rotation_skips_passed_players() {
    let game = start(GameOptions::default(), &["Ana", "Bruno", "Carla"]);

    assert_eq!(
        game.pass(0).unwrap(),
        TurnOutcome::Continue { next_player: 1 }
    );
    game.guess(1, "Cairo").unwrap();
    assert_eq!(
        game.accept().unwrap().turn,
        TurnOutcome::Continue { next_player: 2 }
    );
    game.guess(2, "Lima").unwrap();
    assert_eq!(
        game.accept().unwrap().turn,
        TurnOutcome::Continue { next_player: 1 }
    );

    let outcome = game.pass(1).unwrap();
    assert_eq!(
        outcome,
        TurnOutcome::RoundEnded(RoundEnd {
            round: 1,
            winner: Some(2),
            reason: RoundEndReason::LastPlayerStanding,
            next_starter: Some(0),
        })
    );
    assert_eq!(game.get_player(2).unwrap().cards(), 1);

    assert_eq!(game.next_round().unwrap(), 0);
    assert!(game.round_state().unwrap().players.iter().all(|p| !p.passed));
}

#[test]
fn eliminated_players_sit_out_later_rounds() {
    let options = GameOptions::default().with_starting_lives(1);
    let game = start(options, &["Ana", "Bruno", "Carla"]);

    game.guess(0, "London").unwrap();
    game.challenge(1).unwrap();
    let resolution = game.resolve().unwrap();
    assert!(resolution.eliminated);
    assert!(game.get_player(0).unwrap().is_eliminated());
    assert_eq!(game.get_player(0).unwrap().lives(), 0);

    assert_eq!(game.next_round().unwrap(), 1);
    let round = game.round_state().unwrap();
    assert_eq!(round.players.len(), 2);
    assert!(round.has_passed(0));

    let outcome = game.pass(1).unwrap();
    assert_eq!(
        outcome,
        TurnOutcome::RoundEnded(RoundEnd {
            round: 2,
            winner: Some(2),
            reason: RoundEndReason::LastPlayerStanding,
            next_starter: Some(1),
        })
    );
    assert_eq!(game.get_player(0).unwrap().lives(), 0);
}

#[test]
fn last_player_standing_wins() {
    let options = GameOptions::default().with_starting_lives(1);
    let game = start(options, &["Ana", "Bruno"]);

    game.guess(0, "London").unwrap();
    game.challenge(1).unwrap();
    let resolution = game.resolve().unwrap();

    assert_eq!(resolution.turn, TurnOutcome::GameOver { winner: 1 });
    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(game.winner(), Some(1));
    assert_eq!(game.final_standings()[0].player_id, 1);
}

#[test]
fn reaching_winning_cards_ends_game() {
    let options = GameOptions::default().with_winning_cards(1);
    let game = start(options, &["Ana", "Bruno", "Carla"]);

    assert!(!game.check_win_condition(0));

    game.guess(0, "London").unwrap();
    game.challenge(2).unwrap();
    let resolution = game.resolve().unwrap();

    assert_eq!(resolution.turn, TurnOutcome::GameOver { winner: 2 });
    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(game.winner(), Some(2));
    assert_eq!(game.current_player(), None);

    // Play is frozen.
    assert_eq!(game.next_round().unwrap_err(), ActionError::InvalidState);
    assert_eq!(
        game.guess(0, "Tokyo").unwrap_err(),
        ActionError::InvalidState
    );
    assert_eq!(game.get_player(2).unwrap().cards(), 1);
}

#[test]
fn fourth_card_ends_game() {
    let game = start(GameOptions::default(), &["Ana", "Bruno"]);

    for round in 1..=3 {
        assert_eq!(
            game.pass(0).unwrap(),
            TurnOutcome::RoundEnded(RoundEnd {
                round,
                winner: Some(1),
                reason: RoundEndReason::LastPlayerStanding,
                next_starter: Some(0),
            })
        );
        assert_eq!(game.next_round().unwrap(), 0);
    }

    assert_eq!(game.pass(0).unwrap(), TurnOutcome::GameOver { winner: 1 });
    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(game.winner(), Some(1));
    assert_eq!(game.get_player(1).unwrap().cards(), 4);
    assert_eq!(game.get_player(0).unwrap().cards(), 0);
    assert_eq!(game.round_number(), 4);

    let frozen = game.snapshot();
    assert_eq!(game.next_round().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.pass(0).unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.pass(1).unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.accept().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.snapshot(), frozen);
}

#[test]
fn last_guesser_card_can_end_game() {
    let options = GameOptions::default().with_winning_cards(2);
    let game = start(options, &["Ana", "Bruno"]);

    game.guess(0, "Tokyo").unwrap();
    game.challenge(1).unwrap();
    game.resolve().unwrap();
    assert_eq!(
        game.pass(0).unwrap(),
        TurnOutcome::RoundEnded(RoundEnd {
            round: 1,
            winner: Some(0),
            reason: RoundEndReason::LastGuesser,
            next_starter: Some(1),
        })
    );

    assert_eq!(game.next_round().unwrap(), 1);
    game.guess(1, "Tokyo").unwrap();
    assert_eq!(
        game.accept().unwrap().turn,
        TurnOutcome::Continue { next_player: 0 }
    );
    game.guess(0, "Delhi").unwrap();
    game.challenge(1).unwrap();
    assert_eq!(
        game.resolve().unwrap().turn,
        TurnOutcome::Continue { next_player: 0 }
    );

    assert_eq!(game.pass(0).unwrap(), TurnOutcome::GameOver { winner: 0 });
    assert_eq!(game.winner(), Some(0));
    assert_eq!(game.get_player(0).unwrap().cards(), 2);
    assert_eq!(game.get_player(1).unwrap().lives(), 2);
    assert_eq!(game.next_round().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn list_reveal_mode_ends_round_when_list_is_complete() {
    let options = GameOptions::default().with_mode(GameMode::ListReveal);
    let game = start(options, &["Ana", "Bruno"]);

    for (index, item) in CITIES.iter().enumerate() {
        let player = game.current_player().unwrap();
        assert_eq!(player as usize, index % 2);
        game.guess(player, item).unwrap();
        let outcome = game.accept().unwrap();
        assert!(outcome.correct);

        if index + 1 < CITIES.len() {
            assert!(matches!(outcome.turn, TurnOutcome::Continue { .. }));
        } else {
            assert_eq!(
                outcome.turn,
                TurnOutcome::RoundEnded(RoundEnd {
                    round: 1,
                    winner: None,
                    reason: RoundEndReason::ListRevealed,
                    next_starter: Some(0),
                })
            );
        }
    }

    assert!(game.players().iter().all(|p| p.cards() == 0));
}

#[test]
fn standings_break_ties_by_lives_then_seat() {
    let game = start(GameOptions::default(), &["Ana", "Bruno", "Carla"]);

    let ids: Vec<u8> = game.final_standings().iter().map(|s| s.player_id).collect();
    assert_eq!(ids, vec![0, 1, 2]);

    game.guess(0, "Tokyo").unwrap();
    game.challenge(1).unwrap();
    assert_eq!(
        game.resolve().unwrap().turn,
        TurnOutcome::Continue { next_player: 2 }
    );
    game.pass(2).unwrap();

    let standings = game.final_standings();
    let ids: Vec<u8> = standings.iter().map(|s| s.player_id).collect();
    assert_eq!(ids, vec![0, 2, 1]);
    assert_eq!(standings[0].cards, 1);
    assert_eq!(standings[1].lives, 4);
    assert_eq!(standings[2].lives, 3);
    assert_eq!(
        standings.iter().map(|s| s.place).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}

#[test]
fn end_game_freezes_play() {
    let game = start(GameOptions::default(), &["Ana", "Bruno"]);

    assert_eq!(game.end_game(7).unwrap_err(), ActionError::PlayerNotFound);

    let standings = game.end_game(1).unwrap();
    assert_eq!(standings.len(), 2);
    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(game.winner(), Some(1));
    assert_eq!(game.end_game(1).unwrap_err(), ActionError::InvalidState);
}

#[test]
fn reset_keeps_decks() {
    let game = start(GameOptions::default(), &["Ana", "Bruno"]);
    game.guess(0, "Tokyo").unwrap();

    game.reset_game();
    assert_eq!(game.phase(), Phase::Setup);
    assert!(game.players().is_empty());
    assert!(game.round_state().is_none());
    assert_eq!(game.winner(), None);
    assert_eq!(game.deck_themes(), vec!["Geography".to_string()]);

    game.start_game(&["Carla", "Davi", "Eva"], 0).unwrap();
    assert_eq!(game.players()[0].name, "Carla");
    assert_eq!(game.players()[0].id, 0);
    assert_eq!(game.round_number(), 1);
}

#[test]
fn load_decks_reports_failures() {
    let game = Game::new(GameOptions::default(), 3);

    assert!(matches!(
        game.load_decks(&JsonDeckSource("not json")),
        Err(LoadError::Malformed(_))
    ));
    assert_eq!(
        game.start_game(&["Ana", "Bruno"], 0).unwrap_err(),
        SetupError::NoDecks
    );

    assert_eq!(game.load_decks(&JsonDeckSource(r#"{"decks":[]}"#)), Ok(0));
    assert!(game.deck_themes().is_empty());
}

#[derive(Clone, Default)]
struct Recorder {
    feedback: Arc<Mutex<Vec<Feedback>>>,
    states: Arc<AtomicUsize>,
    last_phase: Arc<Mutex<Option<Phase>>>,
}

impl GameObserver for Recorder {
    fn on_state_changed(&mut self, snapshot: &GameSnapshot) {
        self.states.fetch_add(1, Ordering::SeqCst);
        *self.last_phase.lock().unwrap() = Some(snapshot.phase);
    }

    fn on_feedback(&mut self, feedback: Feedback) {
        self.feedback.lock().unwrap().push(feedback);
    }
}

#[test]
fn observer_receives_feedback_and_snapshots() {
    let recorder = Recorder::default();
    let game = Game::new(GameOptions::default(), 5);
    game.set_observer(recorder.clone());
    game.set_decks(vec![geography()]);

    game.start_game(&["Ana", "Bruno", "Carla"], 0).unwrap();
    assert_eq!(recorder.states.load(Ordering::SeqCst), 1);
    assert_eq!(
        *recorder.last_phase.lock().unwrap(),
        Some(Phase::AwaitingTurnAction)
    );

    game.guess(0, "London").unwrap();
    game.challenge(1).unwrap();
    game.resolve().unwrap();

    assert_eq!(
        *recorder.feedback.lock().unwrap(),
        vec![
            Feedback::ChallengeRaised {
                guesser: 0,
                challenger: 1,
            },
            Feedback::ChallengeIncorrect,
            Feedback::RoundWon { player_id: 1 },
        ]
    );
    assert_eq!(recorder.states.load(Ordering::SeqCst), 4);
    assert_eq!(
        *recorder.last_phase.lock().unwrap(),
        Some(Phase::RoundEnded)
    );

    game.clear_observer();
    game.next_round().unwrap();
    assert_eq!(recorder.states.load(Ordering::SeqCst), 4);
}

#[test]
fn direct_win_check_notifies_observer() {
    let game = start(GameOptions::default(), &["Ana", "Bruno"]);

    let mut value = serde_json::to_value(game.snapshot()).unwrap();
    value["players"][1]["cards"] = 4.into();
    let snapshot: GameSnapshot = serde_json::from_value(value).unwrap();
    let restored = Game::from_snapshot(snapshot).unwrap();

    let recorder = Recorder::default();
    restored.set_observer(recorder.clone());

    assert!(!restored.check_win_condition(0));
    assert_eq!(recorder.states.load(Ordering::SeqCst), 0);

    assert!(restored.check_win_condition(1));
    assert_eq!(restored.phase(), Phase::GameOver);
    assert_eq!(restored.winner(), Some(1));
    assert_eq!(recorder.states.load(Ordering::SeqCst), 1);
    assert_eq!(
        *recorder.last_phase.lock().unwrap(),
        Some(Phase::GameOver)
    );

    // Already over: nothing new to report.
    assert!(restored.check_win_condition(1));
    assert_eq!(recorder.states.load(Ordering::SeqCst), 1);
}
