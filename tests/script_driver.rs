use uno_rs::cards::parse_cards;
use uno_rs::deck::Deck;
use uno_rs::game::{Game, GameConfig, Seat};
use uno_rs::script::{run_script, run_script_with};

fn run_seeded(seed: u64, script: &str) -> (uno_rs::script::ScriptSummary, String) {
    let mut out = Vec::new();
    let summary =
        run_script(GameConfig::default().with_seed(seed), script.as_bytes(), &mut out).unwrap();
    (summary, String::from_utf8(out).unwrap())
}

#[test]
fn seeded_scripts_replay_identically() {
    let script = "draw\ndraw\nshow\n";
    let (a, out_a) = run_seeded(21, script);
    let (b, out_b) = run_seeded(21, script);
    assert_eq!(a, b);
    assert_eq!(out_a, out_b);
    assert_eq!(a.commands, 3);
    assert!(out_a.starts_with("top: "));
}

#[test]
fn board_lists_indexed_card_codes() {
    let mut order = parse_cards("r1 g2 b+2 g3 ys y9 r5").unwrap();
    order.reverse();
    let config = GameConfig::default().with_hand_size(3).unwrap();
    let game = Game::from_deck(config, Deck::from_cards(order)).unwrap();
    let mut out = Vec::new();
    let summary = run_script_with(game, "show\n".as_bytes(), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert_eq!(summary.errors, 0);
    assert!(out.contains("top: Red 5 | deck: 0 | computer: 3 cards"));
    assert!(out.contains("hand: 0:r1 1:b+2 2:ys"));
    assert!(out.contains("> Your turn!"));
}

#[test]
fn new_game_command_redeals() {
    let (summary, out) = run_seeded(5, "draw\nnew\n");
    assert_eq!(summary.errors, 0);
    assert_eq!(summary.winner, None);
    assert!(out.trim_end().ends_with("> Your turn!"));
}

#[test]
fn computer_win_is_reported() {
    let mut order = parse_cards("y1 r2 r5 b9").unwrap();
    order.reverse();
    let config = GameConfig::default().with_hand_size(1).unwrap();
    let game = Game::from_deck(config, Deck::from_cards(order)).unwrap();
    let mut out = Vec::new();
    let summary = run_script_with(game, "draw\ndraw\n".as_bytes(), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert_eq!(summary.winner, Some(Seat::Computer));
    assert_eq!(summary.errors, 1);
    assert!(out.contains("computer plays Red 2"));
    assert!(out.contains("Computer wins!"));
    assert!(out.contains("error: cannot draw a card while the game is over (Computer won)"));
}
