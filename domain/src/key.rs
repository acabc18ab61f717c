use bitflags::bitflags;
use itertools::Itertools;
use once_cell::sync::Lazy;
use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

pub const MAX_FUNCTION_KEY: u8 = 35;

const MODIFIERS_SEPARATOR: char = '+';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyChordParseError {
    #[error("key chord is empty")]
    Empty,
    #[error("unknown key `{0}`")]
    UnknownKey(String),
    #[error("unknown modifier `{0}`")]
    UnknownModifier(String),
    #[error("modifier `{0}` is repeated")]
    RepeatedModifier(String),
}

/// Function key F1..F35
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FunctionKey(u8);

impl FunctionKey {
    pub fn new(number: u8) -> Option<Self> {
        (1..=MAX_FUNCTION_KEY)
            .contains(&number)
            .then(|| FunctionKey(number))
    }

    pub fn number(&self) -> u8 {
        self.0
    }
}

/// Digit key of the main keyboard block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitKey(u8);

impl DigitKey {
    pub fn new(digit: u8) -> Option<Self> {
        (digit <= 9).then(|| DigitKey(digit))
    }

    pub fn digit(&self) -> u8 {
        self.0
    }
}

/// Latin letter key, always stored in upper case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterKey(char);

impl LetterKey {
    pub fn new(letter: char) -> Option<Self> {
        letter
            .is_ascii_alphabetic()
            .then(|| LetterKey(letter.to_ascii_uppercase()))
    }

    pub fn letter(&self) -> char {
        self.0
    }
}

/// Physical key that can be a part of a chord.
/// Keys with a payload are built through `Key::function`, `Key::digit` and `Key::letter`,
/// so every key has a text form that parses back to the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Space,
    Backspace,
    Delete,
    F(FunctionKey),
    Digit(DigitKey),
    Letter(LetterKey),
}

impl Key {
    pub fn function(number: u8) -> Option<Key> {
        FunctionKey::new(number).map(Key::F)
    }

    pub fn digit(digit: u8) -> Option<Key> {
        DigitKey::new(digit).map(Key::Digit)
    }

    pub fn letter(letter: char) -> Option<Key> {
        LetterKey::new(letter).map(Key::Letter)
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Key::Escape => f.write_str("Esc"),
            Key::Enter => f.write_str("Enter"),
            Key::Tab => f.write_str("Tab"),
            Key::Space => f.write_str("Space"),
            Key::Backspace => f.write_str("Backspace"),
            Key::Delete => f.write_str("Delete"),
            Key::F(key) => write!(f, "F{}", key.number()),
            Key::Digit(key) => write!(f, "{}", key.digit()),
            Key::Letter(key) => write!(f, "{}", key.letter()),
        }
    }
}

impl FromStr for Key {
    type Err = KeyChordParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let upper = text.trim().to_ascii_uppercase();
        let key = match upper.as_str() {
            "ESC" | "ESCAPE" => Some(Key::Escape),
            "ENTER" | "RETURN" => Some(Key::Enter),
            "TAB" => Some(Key::Tab),
            "SPACE" => Some(Key::Space),
            "BACKSPACE" => Some(Key::Backspace),
            "DEL" | "DELETE" => Some(Key::Delete),
            _ => {
                let mut chars = upper.chars();
                match (chars.next(), chars.as_str()) {
                    (Some(digit), "") if digit.is_ascii_digit() => Key::digit(digit as u8 - b'0'),
                    (Some(letter), "") => Key::letter(letter),
                    (Some('F'), number) => number.parse::<u8>().ok().and_then(Key::function),
                    _ => None,
                }
            }
        };

        key.ok_or_else(|| KeyChordParseError::UnknownKey(text.to_owned()))
    }
}

bitflags! {
    /// Modifier keys held down together with the chord key. Empty set means a plain key press.
    #[derive(Default)]
    pub struct KeyModifiers: u8 {
        const SHIFT = 0b0001;
        const ALT = 0b0010;
        const CONTROL = 0b0100;
    }
}

impl KeyModifiers {
    /// Every modifier set in the order the key tables list them
    pub fn combinations() -> [KeyModifiers; 8] {
        [
            KeyModifiers::empty(),
            KeyModifiers::CONTROL,
            KeyModifiers::ALT,
            KeyModifiers::SHIFT,
            KeyModifiers::CONTROL | KeyModifiers::ALT,
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
            KeyModifiers::ALT | KeyModifiers::SHIFT,
            KeyModifiers::all(),
        ]
    }

    fn parse_single(text: &str) -> Result<KeyModifiers, KeyChordParseError> {
        match text.trim().to_ascii_uppercase().as_str() {
            "CTRL" | "CONTROL" => Ok(KeyModifiers::CONTROL),
            "ALT" => Ok(KeyModifiers::ALT),
            "SHIFT" => Ok(KeyModifiers::SHIFT),
            _ => Err(KeyChordParseError::UnknownModifier(text.to_owned())),
        }
    }
}

/// Single modifier that changes how an interaction (e.g. quantity or price increment) behaves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionModifier {
    Plain,
    Shift,
    Alt,
    Control,
}

impl InteractionModifier {
    /// Only a single held modifier is recognized, any combination counts as a plain press
    pub fn from_modifiers(modifiers: KeyModifiers) -> Self {
        if modifiers == KeyModifiers::SHIFT {
            InteractionModifier::Shift
        } else if modifiers == KeyModifiers::ALT {
            InteractionModifier::Alt
        } else if modifiers == KeyModifiers::CONTROL {
            InteractionModifier::Control
        } else {
            InteractionModifier::Plain
        }
    }
}

/// Normalized key press: a key together with the full set of held modifiers.
/// Two chords are equal only if both the key and the modifier set match exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub key: Key,
    pub modifiers: KeyModifiers,
}

static AVAILABLE_TASK_KEYS: Lazy<Vec<KeyChord>> = Lazy::new(|| {
    let function_keys = chords_for((1..=12).filter_map(Key::function));
    let digit_keys = chords_for((0..=9).filter_map(Key::digit));
    function_keys.chain(digit_keys).collect()
});

static AVAILABLE_CANCEL_KEYS: Lazy<Vec<KeyChord>> = Lazy::new(|| {
    let escape_keys = chords_for(std::iter::once(Key::Escape));
    AVAILABLE_TASK_KEYS.iter().copied().chain(escape_keys).collect()
});

fn chords_for(
    keys: impl Iterator<Item = Key> + Clone,
) -> impl Iterator<Item = KeyChord> {
    KeyModifiers::combinations()
        .into_iter()
        .cartesian_product(keys)
        .map(|(modifiers, key)| KeyChord::new(key, modifiers))
}

impl KeyChord {
    pub fn new(key: Key, modifiers: KeyModifiers) -> Self {
        KeyChord { key, modifiers }
    }

    pub fn plain(key: Key) -> Self {
        KeyChord::new(key, KeyModifiers::empty())
    }

    /// Chords that can be bound to order tasks
    pub fn available_task_keys() -> &'static [KeyChord] {
        &AVAILABLE_TASK_KEYS
    }

    /// Chords that can be bound to cancel policies: task chords plus every Escape combination
    pub fn available_cancel_keys() -> &'static [KeyChord] {
        &AVAILABLE_CANCEL_KEYS
    }

    pub fn interaction_modifier(&self) -> InteractionModifier {
        InteractionModifier::from_modifiers(self.modifiers)
    }
}

impl Display for KeyChord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            write!(f, "Ctrl{MODIFIERS_SEPARATOR}")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            write!(f, "Alt{MODIFIERS_SEPARATOR}")?;
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            write!(f, "Shift{MODIFIERS_SEPARATOR}")?;
        }
        write!(f, "{}", self.key)
    }
}

impl FromStr for KeyChord {
    type Err = KeyChordParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.trim().is_empty() {
            return Err(KeyChordParseError::Empty);
        }

        let mut parts = text.split(MODIFIERS_SEPARATOR).collect_vec();
        let key = parts
            .pop()
            .ok_or(KeyChordParseError::Empty)?
            .parse::<Key>()?;

        let mut modifiers = KeyModifiers::empty();
        for part in parts {
            let modifier = KeyModifiers::parse_single(part)?;
            if modifiers.contains(modifier) {
                return Err(KeyChordParseError::RepeatedModifier(part.trim().to_owned()));
            }
            modifiers.insert(modifier);
        }

        Ok(KeyChord::new(key, modifiers))
    }
}

struct KeyChordVisitor;

impl<'de> Visitor<'de> for KeyChordVisitor {
    type Value = KeyChord;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "string for KeyChord")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        v.parse().map_err(|_| {
            de::Error::invalid_value(
                de::Unexpected::Str(v),
                &"KeyChord as modifiers and a key separated by '+', e.g. 'Ctrl+Shift+F1'",
            )
        })
    }
}

impl<'de> Deserialize<'de> for KeyChord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(KeyChordVisitor)
    }
}

impl Serialize for KeyChord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
