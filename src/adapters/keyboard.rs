use crate::domain::model::{Digit, InputEvent, Operator};
use std::collections::HashSet;

pub const DEFAULT_RESET_KEYS: [&str; 3] = ["Escape", "c", "C"];
pub const DEFAULT_EQUALS_KEYS: [&str; 2] = ["Enter", "="];

/// Digits, `.` and `+ - * /` always keep their meaning and cannot be rebound.
pub fn is_fixed_key(key: &str) -> bool {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/'),
        _ => false,
    }
}

/// Maps keyboard key names (as a browser or terminal reports them) to input events.
#[derive(Debug, Clone)]
pub struct Keymap {
    reset_keys: HashSet<String>,
    equals_keys: HashSet<String>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::standard()
    }
}

impl Keymap {
    /// Digits, `.`, `+ - * /`, `Enter`/`=` for equals, `Escape`/`c`/`C` for reset.
    pub fn standard() -> Self {
        Self {
            reset_keys: DEFAULT_RESET_KEYS.iter().map(|k| k.to_string()).collect(),
            equals_keys: DEFAULT_EQUALS_KEYS.iter().map(|k| k.to_string()).collect(),
        }
    }

    pub fn with_reset_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reset_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    pub fn with_equals_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.equals_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Unrecognized keys map to `None` and are ignored.
    pub fn map_key(&self, key: &str) -> Option<InputEvent> {
        // 設定檔的鍵已驗證過不會和內建鍵衝突
        if self.reset_keys.contains(key) {
            return Some(InputEvent::Reset);
        }
        if self.equals_keys.contains(key) {
            return Some(InputEvent::Operator(Operator::Equals));
        }

        let mut chars = key.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            tracing::trace!(key, "ignored key");
            return None;
        };

        match c {
            '.' => Some(InputEvent::Decimal),
            '+' | '-' | '*' | '/' => Operator::from_symbol(c).ok().map(InputEvent::Operator),
            _ => match Digit::new(c) {
                Ok(digit) => Some(InputEvent::Digit(digit)),
                Err(_) => {
                    tracing::trace!(key, "ignored key");
                    None
                }
            },
        }
    }

    pub fn map_keys<'k, I>(&self, keys: I) -> Vec<InputEvent>
    where
        I: IntoIterator<Item = &'k str>,
    {
        keys.into_iter().filter_map(|key| self.map_key(key)).collect()
    }
}

/// Splits a line of whitespace-separated key names.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_keys() {
        let keymap = Keymap::standard();
        for c in '0'..='9' {
            let key = c.to_string();
            assert_eq!(
                keymap.map_key(&key),
                Some(InputEvent::Digit(Digit::new(c).unwrap()))
            );
        }
    }

    #[test]
    fn test_decimal_key_uses_decimal_path() {
        assert_eq!(Keymap::standard().map_key("."), Some(InputEvent::Decimal));
    }

    #[test]
    fn test_operator_keys() {
        let keymap = Keymap::standard();
        assert_eq!(keymap.map_key("+"), Some(InputEvent::Operator(Operator::Add)));
        assert_eq!(keymap.map_key("-"), Some(InputEvent::Operator(Operator::Subtract)));
        assert_eq!(keymap.map_key("*"), Some(InputEvent::Operator(Operator::Multiply)));
        assert_eq!(keymap.map_key("/"), Some(InputEvent::Operator(Operator::Divide)));
        assert_eq!(keymap.map_key("="), Some(InputEvent::Operator(Operator::Equals)));
        assert_eq!(keymap.map_key("Enter"), Some(InputEvent::Operator(Operator::Equals)));
    }

    #[test]
    fn test_reset_keys() {
        let keymap = Keymap::standard();
        for key in ["Escape", "c", "C"] {
            assert_eq!(keymap.map_key(key), Some(InputEvent::Reset));
        }
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let keymap = Keymap::standard();
        for key in ["x", "Shift", "%", "", "12"] {
            assert_eq!(keymap.map_key(key), None, "key {:?}", key);
        }
    }

    #[test]
    fn test_custom_bindings() {
        let keymap = Keymap::standard()
            .with_reset_keys(["Delete"])
            .with_equals_keys(vec!["Return".to_string()]);
        assert_eq!(keymap.map_key("Delete"), Some(InputEvent::Reset));
        assert_eq!(keymap.map_key("Return"), Some(InputEvent::Operator(Operator::Equals)));
        assert_eq!(keymap.map_key("Escape"), Some(InputEvent::Reset));
    }

    #[test]
    fn test_map_keys_skips_unknown() {
        let keymap = Keymap::standard();
        let events = keymap.map_keys(tokenize("1 Shift + 2 Enter"));
        assert_eq!(events.len(), 4);
        assert_eq!(events[3], InputEvent::Operator(Operator::Equals));
    }

    #[test]
    fn test_fixed_keys() {
        for key in ["0", "9", ".", "+", "-", "*", "/"] {
            assert!(is_fixed_key(key), "key {:?}", key);
        }
        for key in ["=", "Enter", "Escape", "c", "Delete", "", "12"] {
            assert!(!is_fixed_key(key), "key {:?}", key);
        }
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("  5 +\t3  Enter "), vec!["5", "+", "3", "Enter"]);
        assert!(tokenize("   ").is_empty());
    }
}
