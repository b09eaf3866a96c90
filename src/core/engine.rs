use crate::domain::model::{Digit, InputEvent, Operator, SessionState, Snapshot};

const INITIAL_DISPLAY: &str = "0";

/// Four-function calculator logic: a display value plus the pending
/// first operand, pending operator and awaiting-next flag.
///
/// Every operation is total. Nothing here can fail.
#[derive(Debug, Clone)]
pub struct CalculatorEngine {
    display: String,
    state: SessionState,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    pub fn new() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            state: SessionState::default(),
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.display.clone(),
            first_operand: self.state.first_operand,
            pending_operator: self.state.pending_operator,
            awaiting_next: self.state.awaiting_next,
        }
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Digit(digit) => self.enter_digit(digit),
            InputEvent::Decimal => self.enter_decimal(),
            InputEvent::Operator(op) => self.apply_operator(op),
            InputEvent::Reset => self.reset(),
        }
    }

    pub fn enter_digit(&mut self, digit: Digit) {
        if self.state.awaiting_next {
            self.display = digit.as_char().to_string();
            self.state.awaiting_next = false;
        } else if self.display == INITIAL_DISPLAY {
            self.display = digit.as_char().to_string();
        } else {
            self.display.push(digit.as_char());
        }
    }

    pub fn enter_decimal(&mut self) {
        if self.state.awaiting_next {
            return;
        }
        if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    pub fn apply_operator(&mut self, op: Operator) {
        let current_value = parse_display(&self.display);

        // 連按兩次運算子: 只換掉待處理的運算子
        if self.state.pending_operator.is_some() && self.state.awaiting_next {
            tracing::trace!(from = ?self.state.pending_operator, to = %op, "operator replaced");
            self.state.pending_operator = Some(op);
            return;
        }

        if is_unset(self.state.first_operand) {
            // 0 entered on purpose is indistinguishable from "nothing entered yet"
            self.state.first_operand = current_value;
        } else {
            // first_operand is only non-zero after an operator has been recorded
            let pending = self.state.pending_operator.unwrap_or(Operator::Equals);
            let result = pending.apply(self.state.first_operand, current_value);
            tracing::debug!(
                first = self.state.first_operand,
                op = %pending,
                second = current_value,
                result,
                "computed"
            );
            self.display = format_number(result);
            self.state.first_operand = result;
        }

        self.state.pending_operator = Some(op);
        self.state.awaiting_next = true;
    }

    pub fn reset(&mut self) {
        self.state = SessionState::default();
        self.display = INITIAL_DISPLAY.to_string();
    }
}

/// Zero, negative zero and NaN all read as "no first operand yet".
fn is_unset(value: f64) -> bool {
    value == 0.0 || value.is_nan()
}

/// The display only ever holds digits and one `.` (or a previous result),
/// so a parse failure means NaN rather than an error.
pub fn parse_display(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        // -0 shows as 0
        "0".to_string()
    } else {
        value.to_string()
    }
}
