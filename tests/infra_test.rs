// tests/infra_test.rs

use std::collections::HashMap;

use pokerit::advisor::Suggestion;
use pokerit::domain::{Action, ActionKind, Chips, Street};
use pokerit::engine::GameState;
use pokerit::infra::{
    config::{AppConfig, ConfigError, DEFAULT_BIND_ADDR, DEFAULT_MODEL},
    ids::IdGenerator,
    persistence::{
        ActionRecord, HandMeta, HandStore, InMemoryHandStore, OutcomeRecord, StoreError, SuggestionRecord,
    },
    sessions::SessionRegistry,
};
use pokerit::vision::ScreenRegion;

fn outcome(player: &str, profit_loss: f64) -> OutcomeRecord {
    OutcomeRecord {
        player_name: player.to_string(),
        final_stack: Chips(100),
        profit_loss,
        hand_rank: None,
        timestamp_ms: 1,
    }
}

fn meta() -> HandMeta {
    HandMeta {
        table_name: "t1".into(),
        max_players: 6,
        starting_stack: Chips(600),
        small_blind: Chips(1),
        big_blind: Chips(2),
    }
}

//
// ids.rs
//
#[test]
fn id_generator_counters_are_independent() {
    let ids = IdGenerator::new();

    assert_eq!(ids.next_hand_id(), 1);
    assert_eq!(ids.next_hand_id(), 2);
    assert_eq!(ids.next_action_id(), 1);
    assert_eq!(ids.next_suggestion_id(), 1);
    assert_eq!(ids.next_outcome_id(), 1);
    assert_eq!(ids.next_action_id(), 2);
}

//
// persistence.rs
//
#[test]
fn hand_meta_counts_chips_before_first_action() {
    let mut state = GameState::new();
    state.add_player("A", Chips(100), 0);
    state.add_player("B", Chips(80), 1);
    state.set_blinds(Chips(1), Chips(2));
    state.record_action("A", ActionKind::Bet, Some(Chips(10)), Street::Preflop);

    let meta = HandMeta::from_state(&state, "t1", 2);

    assert_eq!(meta.starting_stack, Chips(180));
    assert_eq!(meta.big_blind, Chips(2));
    assert_eq!(meta.max_players, 2);
    assert_eq!(meta.table_name, "t1");
}

#[test]
fn store_keeps_hand_history_in_order() {
    let mut store = InMemoryHandStore::new();
    let hand_id = store.create_hand(meta());

    let bet = Action::new("A", ActionKind::Bet, Some(Chips(10)), Street::Preflop);
    let call = Action::new("B", ActionKind::Call, Some(Chips(10)), Street::Preflop);
    let a1 = store.record_action(hand_id, ActionRecord::from_action(&bet, Some(0))).unwrap();
    let a2 = store.record_action(hand_id, ActionRecord::from_action(&call, None)).unwrap();

    let suggestion = Suggestion {
        action: ActionKind::Raise,
        amount: Some(Chips(30)),
        confidence: 0.8,
        reasoning: "strong".into(),
    };
    store.record_suggestion(a2, SuggestionRecord::from(&suggestion)).unwrap();
    store.record_outcome(hand_id, outcome("A", 10.0)).unwrap();

    let history = store.hand_history(hand_id).expect("hand exists");
    assert_eq!(history.hand.meta, meta());
    let ids: Vec<u64> = history.actions.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![a1, a2]);
    assert_eq!(history.actions[0].record.position, Some(0));
    assert_eq!(history.actions[1].record.action_type, ActionKind::Call);
    assert_eq!(history.suggestions.len(), 1);
    assert_eq!(history.suggestions[0].action_id, a2);
    assert_eq!(history.outcomes.len(), 1);

    assert!(store.hand_history(hand_id + 1).is_none());
    assert_eq!(store.hand_count(), 1);
}

#[test]
fn store_rejects_unknown_parents() {
    let mut store = InMemoryHandStore::new();
    let action = Action::new("A", ActionKind::Check, None, Street::Flop);

    assert_eq!(
        store.record_action(42, ActionRecord::from_action(&action, None)),
        Err(StoreError::HandNotFound(42))
    );
    assert_eq!(store.record_outcome(42, outcome("A", 0.0)), Err(StoreError::HandNotFound(42)));

    let record = SuggestionRecord {
        suggested_action: ActionKind::Fold,
        suggested_amount: None,
        confidence: 0.1,
        reasoning: String::new(),
        timestamp_ms: 1,
    };
    assert_eq!(store.record_suggestion(7, record), Err(StoreError::ActionNotFound(7)));
}

#[test]
fn player_stats_from_outcomes() {
    let mut store = InMemoryHandStore::new();
    assert_eq!(store.player_stats("A").total_hands, 0);
    assert_eq!(store.player_stats("A").win_rate, 0.0);

    for profit in [30.0, -10.0, 0.0, 20.5] {
        let hand_id = store.create_hand(meta());
        store.record_outcome(hand_id, outcome("A", profit)).unwrap();
        store.record_outcome(hand_id, outcome("B", -profit)).unwrap();
    }

    let a = store.player_stats("A");
    assert_eq!(a.total_hands, 4);
    assert!((a.win_rate - 0.5).abs() < 1e-9);
    assert!((a.avg_profit - 10.125).abs() < 1e-9);

    let b = store.player_stats("B");
    assert!((b.win_rate - 0.25).abs() < 1e-9);
    assert!((b.avg_profit + 10.125).abs() < 1e-9);
}

//
// sessions.rs
//
#[test]
fn session_registry_lifecycle() {
    let mut registry = SessionRegistry::new();
    assert!(registry.is_empty());

    registry.get_or_create("t2").state.add_player("A", Chips(100), 0);
    registry.get_or_create("t1");
    // повторное обращение не создаёт новую сессию
    assert_eq!(registry.get_or_create("t2").state.players().count(), 1);

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.session_ids(), vec!["t1".to_string(), "t2".to_string()]);
    assert!(registry.get("t3").is_none());

    assert!(registry.evict("t2").is_some());
    assert!(registry.evict("t2").is_none());
    assert!(!registry.contains("t2"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn session_finish_hand_resets_tracker_and_links() {
    let mut registry = SessionRegistry::new();
    let session = registry.get_or_create("t1");
    session.state.add_player("A", Chips(100), 0);
    session.state.record_action("A", ActionKind::Bet, Some(Chips(5)), Street::Preflop);
    session.hand_id = Some(3);
    session.last_action_id = Some(9);

    session.finish_hand();

    assert_eq!(session.hand_id, None);
    assert_eq!(session.last_action_id, None);
    assert_eq!(session.state.pot(), Chips::ZERO);
    assert_eq!(session.state.get_player_stack("A"), Some(Chips(95)));
}

//
// config.rs
//
#[test]
fn config_defaults_without_env() {
    let cfg = AppConfig::from_lookup(|_| None).unwrap();

    assert_eq!(cfg.api_key, None);
    assert_eq!(cfg.advisor.model, DEFAULT_MODEL);
    assert_eq!(cfg.advisor.max_tokens, 1000);
    assert!((cfg.advisor.temperature - 0.7).abs() < 1e-6);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(cfg.capture_region, ScreenRegion::new(0, 0, 1920, 1080));
}

#[test]
fn config_reads_overrides() {
    let env: HashMap<&str, &str> = HashMap::from([
        ("CLAUDE_API_KEY", "sk-test"),
        ("AI_MODEL", "claude-test"),
        ("AI_TEMPERATURE", "0.2"),
        ("MAX_TOKENS", "256"),
        ("SCREEN_CAPTURE_REGION", "10, 20, 300, 400"),
        ("BIND_ADDR", "127.0.0.1:9000"),
    ]);
    let cfg = AppConfig::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap();

    assert_eq!(cfg.api_key.as_deref(), Some("sk-test"));
    assert_eq!(cfg.advisor.model, "claude-test");
    assert_eq!(cfg.advisor.max_tokens, 256);
    assert_eq!(cfg.capture_region, ScreenRegion::new(10, 20, 300, 400));
    assert_eq!(cfg.bind_addr, "127.0.0.1:9000");
}

#[test]
fn config_rejects_bad_values() {
    let blank_key = AppConfig::from_lookup(|k| (k == "CLAUDE_API_KEY").then(|| "  ".to_string())).unwrap();
    assert_eq!(blank_key.api_key, None);

    let hot = AppConfig::from_lookup(|k| (k == "AI_TEMPERATURE").then(|| "1.5".to_string()));
    assert!(matches!(hot, Err(ConfigError::InvalidValue { key: "AI_TEMPERATURE", .. })));

    let tokens = AppConfig::from_lookup(|k| (k == "MAX_TOKENS").then(|| "lots".to_string()));
    assert!(matches!(tokens, Err(ConfigError::InvalidValue { key: "MAX_TOKENS", .. })));

    let region = AppConfig::from_lookup(|k| (k == "SCREEN_CAPTURE_REGION").then(|| "1,2,3".to_string()));
    assert!(matches!(region, Err(ConfigError::InvalidValue { key: "SCREEN_CAPTURE_REGION", .. })));
}
