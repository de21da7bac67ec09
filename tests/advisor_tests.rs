use pokerit::advisor::prompt::{format_action_history, format_active_players, RECENT_ACTIONS};
use pokerit::advisor::*;
use pokerit::domain::{parse_cards, Action, ActionKind, Chips, Street};
use pokerit::engine::GameState;

fn table() -> GameState {
    let mut state = GameState::new();
    state.add_player("hero", Chips::whole(200), 2);
    state.add_player("villain", Chips::whole(150), 5);
    state
}

//
// prompt.rs
//
#[test]
fn suggestion_prompt_contains_snapshot() {
    let mut state = table();
    state.deal_player_cards("hero", parse_cards(&["Ah", "Kd"]).unwrap());
    state.deal_community_cards(parse_cards(&["Qs", "Js", "2c"]).unwrap());
    state.record_action("villain", ActionKind::Bet, Some(Chips::whole(20)), Street::Flop);
    state.set_current_bet(Chips::whole(20));
    state.advance_street();

    let prompt = build_suggestion_prompt(&state, "hero");

    assert!(prompt.contains("Current Street: flop"));
    assert!(prompt.contains("Your Position: 2"));
    assert!(prompt.contains("Your Stack: 200"));
    assert!(prompt.contains("Your Cards: Ah Kd"));
    assert!(prompt.contains("Community Cards: Qs Js 2c"));
    assert!(prompt.contains("Current Pot: 20"));
    assert!(prompt.contains("Current Bet to Call: 20"));
    assert!(prompt.contains("villain: bet 20 (flop)"));
    assert!(prompt.contains("villain: Stack=130, Position=5"));
    assert!(prompt.contains("ACTION: [fold/check/call/bet/raise/all_in]"));
}

/// Дробные стеки кэш-столов попадают в промпт как есть.
#[test]
fn suggestion_prompt_shows_fractional_amounts() {
    let mut state = GameState::new();
    state.add_player("hero", Chips(1050), 0);
    state.record_action("hero", ActionKind::Call, Some(Chips(25)), Street::Preflop);

    let prompt = build_suggestion_prompt(&state, "hero");

    assert!(prompt.contains("Your Stack: 10.25"));
    assert!(prompt.contains("Current Pot: 0.25"));
    assert!(prompt.contains("hero: call 0.25 (preflop)"));
}

#[test]
fn suggestion_prompt_for_unknown_hero() {
    let prompt = build_suggestion_prompt(&GameState::new(), "nobody");

    assert!(prompt.contains("Your Position: Unknown"));
    assert!(prompt.contains("Your Cards: Unknown"));
    assert!(prompt.contains("Community Cards: None"));
    assert!(prompt.contains("No actions yet"));
}

#[test]
fn suggestion_prompt_keeps_only_recent_actions() {
    let mut state = table();
    for i in 1..=(RECENT_ACTIONS as u64 + 2) {
        state.record_action("villain", ActionKind::Raise, Some(Chips::whole(i * 100)), Street::Preflop);
    }

    let prompt = build_suggestion_prompt(&state, "hero");

    assert!(!prompt.contains("raise 100 "));
    assert!(!prompt.contains("raise 200 "));
    assert!(prompt.contains("raise 300 (preflop)"));
    assert!(prompt.contains("raise 700 (preflop)"));
}

#[test]
fn history_and_players_formatting() {
    let actions = vec![
        Action::new("A", ActionKind::Fold, None, Street::Preflop),
        Action::new("B", ActionKind::Call, Some(Chips::whole(4)), Street::Turn),
    ];
    assert_eq!(format_action_history(&actions), "A: fold (preflop)\nB: call 4 (turn)");
    assert_eq!(format_action_history(&[]), "No actions yet");

    assert_eq!(format_active_players(&[]), "None");

    let review = build_review_prompt(&actions, "B");
    assert!(review.contains("feedback for B"));
    assert!(review.contains("B: call 4 (turn)"));
    assert!(review.contains("STRENGTHS:"));
}

//
// parse.rs
//
#[test]
fn parse_full_response() {
    let text = "ACTION: raise\nAMOUNT: 60\nCONFIDENCE: 0.8\nREASONING: Top pair, good kicker.";
    let s = parse_suggestion(text).unwrap();

    assert_eq!(s.action, ActionKind::Raise);
    assert_eq!(s.amount, Some(Chips::whole(60)));
    assert!((s.confidence - 0.8).abs() < 1e-9);
    assert_eq!(s.reasoning, "Top pair, good kicker.");
}

#[test]
fn parse_tolerates_noise_and_case() {
    let text = "Sure, here is my advice.\n\naction: [Check]\nAmount: None\nconfidence: 1.7\nreasoning: Pot control.\nVillain range is wide: keep it small.";
    let s = parse_suggestion(text).unwrap();

    assert_eq!(s.action, ActionKind::Check);
    assert_eq!(s.amount, None);
    assert_eq!(s.confidence, 1.0);
    assert_eq!(s.reasoning, "Pot control.\nVillain range is wide: keep it small.");
}

#[test]
fn parse_amount_variants() {
    let s = parse_suggestion("ACTION: bet\nAMOUNT: $1,250.6").unwrap();
    assert_eq!(s.amount, Some(Chips(125060)));
    assert_eq!(s.confidence, 0.0);
    assert_eq!(s.reasoning, "");

    let s = parse_suggestion("ACTION: call\nAMOUNT: 0.75").unwrap();
    assert_eq!(s.amount, Some(Chips(75)));

    let s = parse_suggestion("ACTION: all in\nAMOUNT: n/a").unwrap();
    assert_eq!(s.action, ActionKind::AllIn);
    assert_eq!(s.amount, None);
}

#[test]
fn parse_rejects_malformed() {
    assert!(matches!(parse_suggestion("I would fold here."), Err(AdvisorError::MalformedResponse(_))));
    assert!(matches!(parse_suggestion("ACTION: limp"), Err(AdvisorError::MalformedResponse(_))));
    assert!(matches!(
        parse_suggestion("ACTION: bet\nAMOUNT: lots"),
        Err(AdvisorError::MalformedResponse(_))
    ));
    assert!(matches!(
        parse_suggestion("ACTION: bet\nAMOUNT: -5"),
        Err(AdvisorError::MalformedResponse(_))
    ));
    assert!(matches!(
        parse_suggestion("ACTION: bet\nCONFIDENCE: high"),
        Err(AdvisorError::MalformedResponse(_))
    ));
}

//
// DisabledAdvisor
//
#[tokio::test]
async fn disabled_advisor_reports_disabled() {
    let advisor = DisabledAdvisor;

    let suggestion = advisor.suggest(&table(), "hero").await;
    assert!(matches!(suggestion, Err(AdvisorError::Disabled)));

    let review = advisor.review_hand(&[], "hero").await;
    assert!(matches!(review, Err(AdvisorError::Disabled)));
}
