//! On-screen button grid.
//!
//! Buttons are classified the way the page marks them up: plain buttons carry
//! a digit, `operator` buttons carry one of `+ - * / =`, plus one `decimal`
//! button and the clear button.

use crate::domain::model::{Digit, InputEvent, Operator};
use crate::utils::error::{CalcError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonClass {
    Number,
    Operator,
    Decimal,
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub class: ButtonClass,
    event: InputEvent,
}

impl Button {
    pub fn digit(d: Digit) -> Self {
        Self {
            label: d.as_char().to_string(),
            class: ButtonClass::Number,
            event: InputEvent::Digit(d),
        }
    }

    pub fn operator(op: Operator) -> Self {
        Self {
            label: op.symbol().to_string(),
            class: ButtonClass::Operator,
            event: InputEvent::Operator(op),
        }
    }

    pub fn decimal() -> Self {
        Self {
            label: ".".to_string(),
            class: ButtonClass::Decimal,
            event: InputEvent::Decimal,
        }
    }

    pub fn clear() -> Self {
        Self {
            label: "C".to_string(),
            class: ButtonClass::Clear,
            event: InputEvent::Reset,
        }
    }

    pub fn event(&self) -> InputEvent {
        self.event
    }
}

#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<Button>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::standard()
    }
}

impl Keypad {
    /// Four operators, digits 0-9, decimal, clear and equals.
    pub fn standard() -> Self {
        let mut buttons: Vec<Button> = [
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
        ]
        .into_iter()
        .map(Button::operator)
        .collect();

        buttons.extend(
            ('0'..='9')
                .filter_map(|c| Digit::new(c).ok())
                .map(Button::digit),
        );
        buttons.push(Button::decimal());
        buttons.push(Button::clear());
        buttons.push(Button::operator(Operator::Equals));

        Self { buttons }
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn find(&self, label: &str) -> Option<&Button> {
        self.buttons.iter().find(|b| b.label == label)
    }

    pub fn press(&self, label: &str) -> Result<InputEvent> {
        self.find(label)
            .map(Button::event)
            .ok_or_else(|| CalcError::UnknownButton {
                label: label.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout() {
        let keypad = Keypad::standard();
        assert_eq!(keypad.buttons().len(), 17);

        let count = |class: ButtonClass| keypad.buttons().iter().filter(|b| b.class == class).count();
        assert_eq!(count(ButtonClass::Number), 10);
        assert_eq!(count(ButtonClass::Operator), 5);
        assert_eq!(count(ButtonClass::Decimal), 1);
        assert_eq!(count(ButtonClass::Clear), 1);
    }

    #[test]
    fn test_press_resolves_events() {
        let keypad = Keypad::standard();
        assert_eq!(
            keypad.press("7").unwrap(),
            InputEvent::Digit(Digit::new('7').unwrap())
        );
        assert_eq!(keypad.press(".").unwrap(), InputEvent::Decimal);
        assert_eq!(keypad.press("C").unwrap(), InputEvent::Reset);
        assert_eq!(
            keypad.press("=").unwrap(),
            InputEvent::Operator(Operator::Equals)
        );
    }

    #[test]
    fn test_press_unknown_label() {
        match Keypad::standard().press("%") {
            Err(CalcError::UnknownButton { label }) => assert_eq!(label, "%"),
            other => panic!("expected UnknownButton, got {:?}", other),
        }
    }
}
