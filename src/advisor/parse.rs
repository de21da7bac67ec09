use crate::advisor::{AdvisorError, Suggestion};
use crate::domain::action::ActionKind;
use crate::domain::chips::Chips;

/// Разобрать ответ модели формата
///
/// ```text
/// ACTION: raise
/// AMOUNT: 60
/// CONFIDENCE: 0.8
/// REASONING: ...
/// ```
///
/// Ключи регистронезависимы, строки вне формата игнорируются.
/// Строки после `REASONING:` без своего ключа дописываются к пояснению.
pub fn parse_suggestion(text: &str) -> Result<Suggestion, AdvisorError> {
    let mut action: Option<ActionKind> = None;
    let mut amount: Option<Chips> = None;
    let mut confidence = 0.0_f64;
    let mut reasoning: Option<String> = None;

    for raw in text.lines() {
        let line = raw.trim();

        let Some((key, value)) = split_key(line) else {
            if let Some(r) = reasoning.as_mut() {
                if !line.is_empty() {
                    r.push('\n');
                    r.push_str(line);
                }
            }
            continue;
        };

        match key.as_str() {
            "ACTION" => {
                let kind = value
                    .trim_matches(|c| c == '[' || c == ']')
                    .parse::<ActionKind>()
                    .map_err(|e| AdvisorError::MalformedResponse(e.to_string()))?;
                action = Some(kind);
            }
            "AMOUNT" => amount = parse_amount(value)?,
            "CONFIDENCE" => {
                let c = value
                    .parse::<f64>()
                    .map_err(|_| AdvisorError::MalformedResponse(format!("confidence {value:?}")))?;
                if !c.is_finite() {
                    return Err(AdvisorError::MalformedResponse(format!("confidence {value:?}")));
                }
                confidence = c.clamp(0.0, 1.0);
            }
            "REASONING" => reasoning = Some(value.to_string()),
            _ => {
                // Известный формат ключа, но не наш – может быть частью пояснения.
                if let Some(r) = reasoning.as_mut() {
                    r.push('\n');
                    r.push_str(line);
                }
            }
        }
    }

    let action = action.ok_or_else(|| AdvisorError::MalformedResponse("нет строки ACTION".into()))?;

    Ok(Suggestion {
        action,
        amount,
        confidence,
        reasoning: reasoning.unwrap_or_default(),
    })
}

/// `KEY: value` -> (KEY в верхнем регистре, value). Ключ – одно слово из букв.
fn split_key(line: &str) -> Option<(String, &str)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphabetic() || c == '_') {
        return None;
    }
    Some((key.to_ascii_uppercase(), value.trim()))
}

/// `None`/пусто – суммы нет. Дробные суммы округляются до сотых фишки.
fn parse_amount(value: &str) -> Result<Option<Chips>, AdvisorError> {
    let v = value.trim_matches(|c| c == '[' || c == ']').trim();
    if v.is_empty() || v.eq_ignore_ascii_case("none") || v.eq_ignore_ascii_case("n/a") {
        return Ok(None);
    }

    let cleaned: String = v.chars().filter(|c| *c != ',' && *c != '$').collect();
    cleaned
        .parse::<f64>()
        .ok()
        .and_then(Chips::from_decimal)
        .map(Some)
        .ok_or_else(|| AdvisorError::MalformedResponse(format!("amount {value:?}")))
}
