use crate::advisor::Suggestion;
use crate::domain::action::Action;
use crate::domain::player::Player;
use crate::domain::HandId;
use crate::engine::GameState;

use super::dto::{GameStateDto, LastActionDto, PlayerDto, SuggestionDto};

/// Сформировать снэпшот состояния для транспорта.
pub fn build_game_state_view(state: &GameState, hand_id: Option<HandId>) -> GameStateDto {
    GameStateDto {
        street: state.street(),
        pot: state.pot(),
        community_cards: state.community_cards().to_vec(),
        current_bet: state.get_current_bet_to_call(),
        players: state.get_active_players().into_iter().map(build_player_view).collect(),
        last_action: state.last_action().map(build_last_action_view),
        hand_id,
    }
}

pub fn build_player_view(player: &Player) -> PlayerDto {
    PlayerDto {
        name: player.name.clone(),
        stack: player.stack,
        position: player.position,
        is_active: player.is_active,
        cards: player.cards.clone(),
    }
}

fn build_last_action_view(action: &Action) -> LastActionDto {
    LastActionDto {
        player: action.player.clone(),
        action: action.kind,
        amount: action.amount,
        street: action.street,
    }
}

pub fn build_suggestion_view(s: &Suggestion) -> SuggestionDto {
    SuggestionDto {
        action: s.action,
        amount: s.amount,
        confidence: s.confidence,
        reasoning: s.reasoning.clone(),
    }
}
