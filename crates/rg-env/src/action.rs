//! Action translation
//!
//! Callers act either with a small integer index into [`ACTION_KEYS`] or with
//! a string of primitive key symbols executed in order (`"hh>"`). Both decode
//! to a sequence of native key codes.

use rg_core::KeyCode;
use serde_json::Value;
use strum::{Display, EnumIter};

use crate::error::{EnvError, Result};

/// Number of numeric actions
pub const ACTION_COUNT: usize = 10;

/// Primitive key for each numeric action
pub const ACTION_KEYS: [char; ACTION_COUNT] = ['h', 'j', 'k', 'l', 'n', 'b', 'u', 'y', '>', 's'];

/// Human-readable meaning of a primitive key. Introspection only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionMeaning {
    MoveLeft,
    MoveDown,
    MoveUp,
    MoveRight,
    #[strum(serialize = "MOVE_RIGHTDOWN")]
    MoveRightDown,
    #[strum(serialize = "MOVE_LEFTDOWN")]
    MoveLeftDown,
    #[strum(serialize = "MOVE_RIGHTUP")]
    MoveRightUp,
    #[strum(serialize = "MOVE_LEFTUP")]
    MoveLeftUp,
    Downstair,
    Search,
}

impl ActionMeaning {
    pub const fn of_key(key: char) -> Option<ActionMeaning> {
        match key {
            'h' => Some(ActionMeaning::MoveLeft),
            'j' => Some(ActionMeaning::MoveDown),
            'k' => Some(ActionMeaning::MoveUp),
            'l' => Some(ActionMeaning::MoveRight),
            'n' => Some(ActionMeaning::MoveRightDown),
            'b' => Some(ActionMeaning::MoveLeftDown),
            'u' => Some(ActionMeaning::MoveRightUp),
            'y' => Some(ActionMeaning::MoveLeftUp),
            '>' => Some(ActionMeaning::Downstair),
            's' => Some(ActionMeaning::Search),
            _ => None,
        }
    }
}

/// An action as supplied by a caller
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    /// Index into [`ACTION_KEYS`]
    Index(usize),
    /// Primitive keys applied one after another
    Keys(String),
}

impl From<usize> for Action {
    fn from(index: usize) -> Self {
        Action::Index(index)
    }
}

impl From<&str> for Action {
    fn from(keys: &str) -> Self {
        Action::Keys(keys.to_string())
    }
}

impl From<String> for Action {
    fn from(keys: String) -> Self {
        Action::Keys(keys)
    }
}

impl From<char> for Action {
    fn from(key: char) -> Self {
        Action::Keys(key.to_string())
    }
}

impl From<&Action> for Action {
    fn from(action: &Action) -> Self {
        action.clone()
    }
}

/// Untyped actions, e.g. parsed from JSON. Only integers and strings are actions.
impl TryFrom<&Value> for Action {
    type Error = EnvError;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::String(keys) => Ok(Action::Keys(keys.clone())),
            Value::Number(n) => {
                if let Some(index) = n.as_u64() {
                    usize::try_from(index)
                        .map(Action::Index)
                        .map_err(|_| unknown_index(i64::try_from(index).unwrap_or(i64::MAX)))
                } else if let Some(index) = n.as_i64() {
                    Err(unknown_index(index))
                } else {
                    Err(EnvError::InvalidActionType(format!("non-integer number {n}")))
                }
            }
            other => Err(EnvError::InvalidActionType(other.to_string())),
        }
    }
}

fn unknown_index(index: i64) -> EnvError {
    EnvError::UnknownActionIndex {
        index,
        count: ACTION_COUNT,
    }
}

/// Primitive key for a numeric action
pub fn key_for_index(index: usize) -> Option<char> {
    ACTION_KEYS.get(index).copied()
}

/// Native key code of a primitive key
pub const fn key_code(key: char) -> KeyCode {
    key as KeyCode
}

/// Decode an action into the native key codes to apply, in order.
///
/// Symbolic keys are forwarded as-is; the engine decides what an unknown key does.
pub fn decode(action: &Action) -> Result<Vec<KeyCode>> {
    match action {
        Action::Index(index) => key_for_index(*index)
            .map(|key| vec![key_code(key)])
            .ok_or_else(|| unknown_index(i64::try_from(*index).unwrap_or(i64::MAX))),
        Action::Keys(keys) => Ok(keys.chars().map(key_code).collect()),
    }
}

/// Every numeric action's key with its meaning
pub fn action_meanings() -> impl Iterator<Item = (char, ActionMeaning)> {
    ACTION_KEYS
        .into_iter()
        .filter_map(|key| ActionMeaning::of_key(key).map(|meaning| (key, meaning)))
}
