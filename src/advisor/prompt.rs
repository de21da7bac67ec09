use std::fmt::Write as _;

use crate::domain::action::Action;
use crate::domain::card::Card;
use crate::domain::player::Player;
use crate::engine::GameState;

/// Сколько последних действий попадает в промпт.
pub const RECENT_ACTIONS: usize = 5;

/// Промпт для совета по текущей раздаче.
pub fn build_suggestion_prompt(state: &GameState, hero: &str) -> String {
    let player = state.player(hero);

    let position = player
        .map(|p| p.position.to_string())
        .unwrap_or_else(|| "Unknown".to_string());
    let stack = player
        .map(|p| p.stack.to_string())
        .unwrap_or_else(|| "Unknown".to_string());
    let cards = match player {
        Some(p) if p.has_known_cards() => format_cards(&p.cards),
        _ => "Unknown".to_string(),
    };
    let board = if state.community_cards().is_empty() {
        "None".to_string()
    } else {
        format_cards(state.community_cards())
    };

    format!(
        "You are an expert poker player. Analyze the following situation and suggest the best action:

Current Street: {street}
Your Position: {position}
Your Stack: {stack}
Your Cards: {cards}
Community Cards: {board}
Current Pot: {pot}
Current Bet to Call: {to_call}

Recent Actions:
{recent}

Active Players:
{active}

Please provide your suggestion in the following format:
ACTION: [fold/check/call/bet/raise/all_in]
AMOUNT: [amount if applicable, otherwise 'None']
CONFIDENCE: [0.0-1.0]
REASONING: [your explanation]",
        street = state.street(),
        pot = state.pot(),
        to_call = state.get_current_bet_to_call(),
        recent = format_action_history(state.history().tail(RECENT_ACTIONS)),
        active = format_active_players(&state.get_active_players()),
    )
}

/// Промпт для разбора сыгранной раздачи.
pub fn build_review_prompt(history: &[Action], hero: &str) -> String {
    format!(
        "Analyze this completed poker hand and provide feedback for {hero}:

{actions}

Please provide feedback in the following format:
STRENGTHS: [list of good decisions]
WEAKNESSES: [list of areas for improvement]
SUGGESTIONS: [specific suggestions for improvement]",
        actions = format_action_history(history),
    )
}

/// `игрок: действие [сумма] (улица)` по строке на действие.
pub fn format_action_history(actions: &[Action]) -> String {
    if actions.is_empty() {
        return "No actions yet".to_string();
    }

    let mut out = String::new();
    for (i, a) in actions.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = write!(out, "{}: {}", a.player, a.kind);
        if let Some(amount) = a.amount.filter(|x| !x.is_zero()) {
            let _ = write!(out, " {amount}");
        }
        let _ = write!(out, " ({})", a.street);
    }
    out
}

pub fn format_active_players(players: &[&Player]) -> String {
    if players.is_empty() {
        return "None".to_string();
    }

    players
        .iter()
        .map(|p| format!("{}: Stack={}, Position={}", p.name, p.stack, p.position))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(Card::to_string).collect::<Vec<_>>().join(" ")
}
