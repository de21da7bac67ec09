// src/bin/poker_dev_cli.rs

use pokerit::advisor::build_suggestion_prompt;
use pokerit::api::{apply_update, build_game_state_view, GameStateUpdate, ObservedAction, SeatPlayerUpdate};
use pokerit::domain::{ActionKind, Card, Chips, Rank, Street, Suit};
use pokerit::engine::GameState;
use pokerit::infra::init_logging;

fn main() {
    init_logging();
    println!("poker_dev_cli: прогоняем тестовые раздачи через трекер…");

    let mut state = GameState::new();
    state.add_player("A", Chips::whole(100), 0);
    state.add_player("B", Chips::whole(100), 1);
    state.add_player("C", Chips::whole(100), 2);
    // кэш-стол 0.25/0.50
    state.set_blinds(Chips(25), Chips(50));

    for scenario in [Scenario::BetCall, Scenario::WithFold, Scenario::ToShowdown] {
        play_hand(&mut state, scenario);
    }

    play_update_frames();

    println!("[CLI] Завершение работы dev-CLI.");
}

/// Сценарий тестовой раздачи.
#[derive(Copy, Clone, Debug)]
enum Scenario {
    BetCall,
    WithFold,
    ToShowdown,
}

fn play_hand(state: &mut GameState, scenario: Scenario) {
    println!();
    println!("================ HAND {:?} =================", scenario);

    state.reset_hand();
    state.deal_player_cards("A", vec![Card::new(Rank::Ace, Suit::Hearts), Card::new(Rank::King, Suit::Spades)]);

    match scenario {
        Scenario::BetCall => {
            state.record_action("A", ActionKind::Bet, Some(Chips::whole(10)), Street::Preflop);
            state.record_action("B", ActionKind::Call, Some(Chips::whole(10)), Street::Preflop);
            state.record_action("C", ActionKind::Call, Some(Chips::whole(10)), Street::Preflop);
            state.advance_street();
        }
        Scenario::WithFold => {
            state.record_action("A", ActionKind::Raise, Some(Chips::whole(6)), Street::Preflop);
            state.record_action("B", ActionKind::Fold, None, Street::Preflop);
            state.set_player_active("B", false);
            state.record_action("C", ActionKind::Call, Some(Chips::whole(6)), Street::Preflop);
        }
        Scenario::ToShowdown => {
            state.record_action("A", ActionKind::Check, None, Street::Preflop);
            for _ in 0..5 {
                let street = state.advance_street();
                println!("[CLI] улица -> {street}");
            }
        }
    }

    debug_print_state(state);
    println!("============ END HAND {:?} ============", scenario);
}

/// То же самое, но через JSON-кадры, как их шлёт расширение.
fn play_update_frames() {
    println!();
    println!("================ UPDATE FRAMES =================");

    let mut state = GameState::new();
    let update = GameStateUpdate {
        players: vec![
            SeatPlayerUpdate { name: "hero".into(), stack: Chips::whole(200), position: 0 },
            SeatPlayerUpdate { name: "villain".into(), stack: Chips::whole(180), position: 1 },
        ],
        community_cards: Some(vec!["Ah".into(), "7d".into(), "2c".into()]),
        actions: vec![ObservedAction {
            player: "villain".into(),
            action_type: "BET".into(),
            amount: Some(Chips::whole(15)),
            street: Some("flop".into()),
        }],
        current_bet: Some(Chips::whole(15)),
        ..GameStateUpdate::default()
    };

    match apply_update(&mut state, update) {
        Ok(applied) => println!("[CLI] записано действий: {}", applied.recorded.len()),
        Err(e) => println!("[CLI] ОШИБКА в apply_update: {e}"),
    }

    let bad = GameStateUpdate {
        community_cards: Some(vec!["Xx".into()]),
        ..GameStateUpdate::default()
    };
    if let Err(e) = apply_update(&mut state, bad) {
        println!("[CLI] ожидаемая ошибка: {e}");
    }

    debug_print_state(&state);
    println!("[CLI] промпт советника для hero:\n{}", build_suggestion_prompt(&state, "hero"));
}

fn debug_print_state(state: &GameState) {
    match serde_json::to_string_pretty(&build_game_state_view(state, None)) {
        Ok(json) => println!("{json}"),
        Err(e) => println!("[CLI] не удалось сериализовать состояние: {e}"),
    }
}
