//! Parsing helpers for the session command surface.
//!
//! Commands are plain text lines, so multi-word names lean on simple
//! positional rules: a name runs until the first `key=value` pair, and
//! trailing numbers are split off from the right.

use sl_core::CharacterUpdate;

use crate::error::{SessionError, SessionResult};

/// Split leading name words from trailing `key=value` pairs.
///
/// The name ends at the first token containing `=`; every token from
/// there on is treated as a pair, valid or not.
pub(crate) fn split_name_and_pairs(input: &str) -> (String, Vec<&str>) {
    let mut name_words = Vec::new();
    let mut pairs = Vec::new();
    for word in input.split_whitespace() {
        if !pairs.is_empty() || word.contains('=') {
            pairs.push(word);
        } else {
            name_words.push(word);
        }
    }
    (name_words.join(" "), pairs)
}

/// Split a trailing integer off the input, leaving the name in front.
///
/// Returns `None` when there is no trailing integer or no name before
/// it; callers decide whether that is a default or a usage error.
pub(crate) fn split_trailing_int(input: &str) -> Option<(&str, i64)> {
    let (head, tail) = input.rsplit_once(char::is_whitespace)?;
    let n = tail.parse().ok()?;
    let head = head.trim();
    if head.is_empty() {
        return None;
    }
    Some((head, n))
}

/// Parse `key=value` pairs into a typed character update.
///
/// Accepted keys: `health`, `money`, `attr.<name>`, `skill.<name>`,
/// `equip.<item>`. Anything else is rejected before any field is
/// merged.
pub(crate) fn parse_update(pairs: &[&str]) -> SessionResult<CharacterUpdate> {
    let mut update = CharacterUpdate::default();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| SessionError::Usage(format!("expected key=value, got '{pair}'")))?;
        if value.is_empty() {
            return Err(SessionError::Usage(format!("empty value in '{pair}'")));
        }
        match key.split_once('.') {
            None => match key {
                "health" => {
                    update.health = Some(value.parse().map_err(|_| {
                        SessionError::Usage(format!("health must be a number, got '{value}'"))
                    })?);
                }
                "money" => {
                    update.money = Some(value.parse().map_err(|_| {
                        SessionError::Usage(format!("money must be a number, got '{value}'"))
                    })?);
                }
                _ => {
                    return Err(SessionError::Usage(format!(
                        "unknown field '{key}' (use health, money, attr.<name>, \
                         skill.<name>, equip.<item>)"
                    )));
                }
            },
            Some(("attr", name)) if !name.is_empty() => {
                update.attributes.insert(name.to_string(), value.to_string());
            }
            Some(("skill", name)) if !name.is_empty() => {
                update.skills.insert(name.to_string(), value.to_string());
            }
            Some(("equip", item)) if !item.is_empty() => {
                let quantity = value.parse().map_err(|_| {
                    SessionError::Usage(format!(
                        "equip quantity must be a non-negative number, got '{value}'"
                    ))
                })?;
                update.equipment.insert(item.to_string(), quantity);
            }
            Some(_) => {
                return Err(SessionError::Usage(format!(
                    "unknown field '{key}' (use health, money, attr.<name>, \
                     skill.<name>, equip.<item>)"
                )));
            }
        }
    }
    Ok(update)
}
