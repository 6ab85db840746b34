use uno_rs::cards::{parse_cards, CardError, Color, Value};
use uno_rs::deck::{Deck, DeckError};
use uno_rs::game::{ComputerMove, Game, GameConfig, GameError, Phase, Seat};
use uno_rs::hand::HandError;

/// Deal `player` and `computer` card by card, then `top`, leaving `rest` to draw
/// in the order written.
fn stacked(player: &str, computer: &str, top: &str, rest: &str) -> Game {
    let player = parse_cards(player).unwrap();
    let computer = parse_cards(computer).unwrap();
    let config = GameConfig::default().with_hand_size(player.len()).unwrap();
    let mut order = Vec::new();
    for (p, c) in player.into_iter().zip(computer) {
        order.push(p);
        order.push(c);
    }
    order.extend(parse_cards(top).unwrap());
    order.extend(parse_cards(rest).unwrap());
    order.reverse();
    Game::from_deck(config, Deck::from_cards(order)).unwrap()
}

#[test]
fn matching_color_then_computer_replies() {
    let mut g = stacked("r1 y7", "g5 r3", "r9", "b1");
    g.player_play(0).unwrap();
    assert_eq!(g.top_card().code(), "r1");
    assert_eq!(g.player_hand().len(), 1);
    assert_eq!(g.phase(), Phase::ComputerTurn);
    assert_eq!(g.turn(), Seat::Computer);

    // first legal card in hand order
    let mv = g.computer_turn().unwrap();
    assert_eq!(mv, ComputerMove::Played("r3".parse().unwrap()));
    assert_eq!(g.computer_hand().len(), 1);
    assert_eq!(g.phase(), Phase::AwaitingPlayerMove);
    assert_eq!(g.message(), "Computer played Red 3. Your turn!");
}

#[test]
fn matching_value_across_colors() {
    let mut g = stacked("g9 y7", "g5 r3", "r9", "");
    g.player_play(0).unwrap();
    assert_eq!(g.top_card().code(), "g9");
}

#[test]
fn out_of_turn_actions_leave_state_unchanged() {
    let mut g = stacked("r1 y7", "g5 r3", "r9", "b1");
    let before = (g.player_hand().to_vec(), g.top_card().clone(), g.message().to_string());

    let err = g.computer_turn().unwrap_err();
    assert!(matches!(err, GameError::IllegalState { phase: Phase::AwaitingPlayerMove, .. }));
    let err = g.choose_wild_color(Color::Blue).unwrap_err();
    assert_eq!(err.to_string(), "cannot choose a color while awaiting the player's move");

    assert_eq!(g.phase(), Phase::AwaitingPlayerMove);
    assert_eq!(
        (g.player_hand().to_vec(), g.top_card().clone(), g.message().to_string()),
        before
    );

    g.player_draw().unwrap();
    assert!(matches!(g.player_play(0), Err(GameError::IllegalState { .. })));
    assert!(matches!(g.player_draw(), Err(GameError::IllegalState { .. })));
    assert_eq!(g.player_hand().len(), 3);
}

#[test]
fn illegal_and_out_of_range_plays_are_rejected() {
    let mut g = stacked("y7 g2", "g5 r3", "r9", "b1");
    let err = g.player_play(0).unwrap_err();
    assert_eq!(
        err,
        GameError::IllegalMove { card: "y7".parse().unwrap(), top: "r9".parse().unwrap() }
    );
    let err = g.player_play(5).unwrap_err();
    assert_eq!(err, GameError::Hand(HandError::InvalidIndex { index: 5, len: 2 }));
    assert_eq!(g.player_hand().len(), 2);
    assert_eq!(g.phase(), Phase::AwaitingPlayerMove);
    assert_eq!(g.top_card().code(), "r9");
}

#[test]
fn drawing_ends_the_turn_even_when_playable() {
    let mut g = stacked("r1 y7", "g5 r3", "r9", "r2 b1");
    g.player_draw().unwrap();
    assert_eq!(g.player_hand().last().map(|c| c.code()), Some("r2".to_string()));
    assert_eq!(g.phase(), Phase::ComputerTurn);
    assert_eq!(g.message(), "You drew Red 2. Computer's turn!");
    assert_eq!(g.deck_remaining(), 1);
}

#[test]
fn wild_waits_for_a_color() {
    let mut g = stacked("w r1", "g2 g3", "b5", "y4 y5");
    g.player_play(0).unwrap();
    assert!(g.is_pending_wild_choice());
    assert_eq!(g.phase(), Phase::AwaitingColorChoice);
    assert_eq!(g.turn(), Seat::Player, "turn stays with the player");
    assert_eq!(g.top_card().code(), "b5");
    assert_eq!(g.pending_wild().map(|c| c.value()), Some(Value::Wild));
    assert_eq!(g.message(), "You played a wild card! Choose a color.");

    assert!(matches!(g.player_draw(), Err(GameError::IllegalState { .. })));
    assert!(matches!(g.player_play(0), Err(GameError::IllegalState { .. })));
    assert_eq!(g.choose_wild_color(Color::Wild), Err(GameError::Card(CardError::WildColor)));
    assert!(g.is_pending_wild_choice());

    g.choose_wild_color(Color::Green).unwrap();
    assert!(!g.is_pending_wild_choice());
    assert_eq!(g.top_card().color(), Color::Green);
    assert_eq!(g.top_card().value(), Value::Wild);
    assert_eq!(g.phase(), Phase::ComputerTurn);

    assert_eq!(g.computer_turn().unwrap(), ComputerMove::Played("g2".parse().unwrap()));
}

#[test]
fn computer_names_its_most_common_color() {
    let mut g = stacked("y1 r2 r3", "w+4 b1 b2", "y9", "g1");
    g.player_play(0).unwrap();
    let mv = g.computer_turn().unwrap();
    let ComputerMove::Played(card) = mv else { panic!("computer should play the wild") };
    assert_eq!(card.value(), Value::WildDrawFour);
    assert_eq!(card.color(), Color::Blue);
    assert_eq!(g.top_card().color(), Color::Blue);
}

#[test]
fn player_wins_on_last_card() {
    let mut g = stacked("r1", "g2", "r5", "y4");
    g.player_play(0).unwrap();
    assert_eq!(g.phase(), Phase::GameOver(Seat::Player));
    assert_eq!(g.winner(), Some(Seat::Player));
    assert!(g.is_over());
    assert_eq!(g.message(), "Player wins!");
    assert!(matches!(g.computer_turn(), Err(GameError::IllegalState { .. })));
    assert!(matches!(g.player_draw(), Err(GameError::IllegalState { .. })));
}

#[test]
fn last_card_wild_ends_the_game() {
    let mut g = stacked("w", "g2", "r5", "");
    g.player_play(0).unwrap();
    assert_eq!(g.winner(), Some(Seat::Player));
    assert!(!g.is_pending_wild_choice());
    assert_eq!(g.top_card().color(), Color::Red);
}

#[test]
fn computer_wins_on_last_card() {
    let mut g = stacked("y1", "r2", "r5", "b9");
    g.player_draw().unwrap();
    g.computer_turn().unwrap();
    assert_eq!(g.winner(), Some(Seat::Computer));
    assert_eq!(g.message(), "Computer wins!");
}

#[test]
fn empty_deck_stalls_without_changing_state() {
    let mut g = stacked("y1", "g2", "r5", "");
    assert_eq!(g.deck_remaining(), 0);
    assert!(g.is_stalled());
    assert_eq!(g.player_draw(), Err(GameError::Deck(DeckError::Empty)));
    assert_eq!(g.phase(), Phase::AwaitingPlayerMove);
    assert_eq!(g.player_hand().len(), 1);

    g.start().unwrap();
    assert!(!g.is_stalled());
    assert_eq!(g.deck_remaining(), 89);
}

#[test]
fn computer_draw_on_empty_deck_is_reported() {
    let mut g = stacked("r1 y2", "g2 g3", "r5", "");
    g.player_play(0).unwrap();
    assert!(g.is_stalled());
    assert_eq!(g.computer_turn(), Err(GameError::Deck(DeckError::Empty)));
    assert_eq!(g.phase(), Phase::ComputerTurn);
    assert_eq!(g.computer_hand().len(), 2);
}
