//! Calculator - Four-function arithmetic with operator chaining
//!
//! Pressing an operator while one is pending evaluates the pending one first,
//! so `2 + 3 ×` shows `5` before the next operand is typed.

use egui::{vec2, Align, Button, Color32, Layout, RichText, Rounding, Ui};

const ERROR: &str = "Error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }
}

/// One key of the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(char),
    Decimal,
    Clear,
    Sign,
    Percent,
    Op(Operator),
    Equals,
}

impl Key {
    fn label(self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".into(),
            Self::Clear => "AC".into(),
            Self::Sign => "±".into(),
            Self::Percent => "%".into(),
            Self::Op(op) => op.symbol().into(),
            Self::Equals => "=".into(),
        }
    }

    fn colors(self) -> (Color32, Color32) {
        match self {
            Self::Clear | Self::Sign | Self::Percent => {
                (Color32::from_rgb(165, 165, 165), Color32::BLACK)
            }
            Self::Op(_) | Self::Equals => (Color32::from_rgb(255, 159, 10), Color32::WHITE),
            Self::Digit(_) | Self::Decimal => (Color32::from_rgb(51, 51, 51), Color32::WHITE),
        }
    }
}

const KEYPAD: [&[Key]; 5] = [
    &[Key::Clear, Key::Sign, Key::Percent, Key::Op(Operator::Divide)],
    &[Key::Digit('7'), Key::Digit('8'), Key::Digit('9'), Key::Op(Operator::Multiply)],
    &[Key::Digit('4'), Key::Digit('5'), Key::Digit('6'), Key::Op(Operator::Subtract)],
    &[Key::Digit('1'), Key::Digit('2'), Key::Digit('3'), Key::Op(Operator::Add)],
    &[Key::Digit('0'), Key::Decimal, Key::Equals],
];

#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    display: String,
    previous: Option<f64>,
    operator: Option<Operator>,
    waiting_for_operand: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            display: "0".into(),
            previous: None,
            operator: None,
            waiting_for_operand: false,
        }
    }
}

impl Calculator {
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(d) => self.input_digit(d),
            Key::Decimal => self.input_decimal(),
            Key::Clear => self.clear(),
            Key::Sign => self.toggle_sign(),
            Key::Percent => self.percentage(),
            Key::Op(op) => self.perform_operation(op),
            Key::Equals => self.calculate(),
        }
    }

    pub fn input_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            return;
        }
        if self.waiting_for_operand || self.display == "0" || self.display == ERROR {
            self.display = digit.to_string();
            self.waiting_for_operand = false;
        } else {
            self.display.push(digit);
        }
    }

    pub fn input_decimal(&mut self) {
        if self.waiting_for_operand || self.display == ERROR {
            self.display = "0.".into();
            self.waiting_for_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn toggle_sign(&mut self) {
        self.display = format_number(-self.value());
    }

    pub fn percentage(&mut self) {
        self.display = format_number(self.value() / 100.0);
    }

    /// Evaluates any pending operation, then arms `next`
    pub fn perform_operation(&mut self, next: Operator) {
        if !self.waiting_for_operand {
            let input = self.value();
            match (self.previous, self.operator) {
                (Some(previous), Some(op)) => {
                    let result = op.apply(previous, input);
                    self.display = format_number(result);
                    self.previous = Some(result);
                }
                _ => self.previous = Some(input),
            }
        }
        self.operator = Some(next);
        self.waiting_for_operand = true;
    }

    pub fn calculate(&mut self) {
        let (Some(previous), Some(op)) = (self.previous, self.operator) else {
            return;
        };
        self.display = format_number(op.apply(previous, self.value()));
        self.previous = None;
        self.operator = None;
        self.waiting_for_operand = true;
    }

    fn value(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }

    pub fn show(&mut self, ui: &mut Ui) {
        let rect = ui.max_rect();
        ui.painter()
            .rect_filled(rect, Rounding::same(6.0), Color32::from_rgb(28, 28, 30));

        let spacing = 8.0;
        let display_height = 64.0;
        let cell_w = ((rect.width() - spacing * 3.0) / 4.0).max(16.0);
        let cell_h = ((rect.height() - display_height - spacing * 5.0) / 5.0).clamp(16.0, cell_w);

        ui.allocate_ui_with_layout(
            vec2(rect.width(), display_height),
            Layout::right_to_left(Align::Max),
            |ui| {
                let size = if self.display().len() > 9 { 22.0 } else { 40.0 };
                ui.label(
                    RichText::new(self.display())
                        .size(size)
                        .color(Color32::WHITE),
                );
            },
        );

        let mut pressed = None;
        ui.spacing_mut().item_spacing = vec2(spacing, spacing);
        for row in KEYPAD {
            ui.horizontal(|ui| {
                for &key in row {
                    let width = if key == Key::Digit('0') {
                        cell_w * 2.0 + spacing
                    } else {
                        cell_w
                    };
                    let (fill, text) = key.colors();
                    let active = matches!(key, Key::Op(op) if self.waiting_for_operand && self.operator == Some(op));
                    let (fill, text) = if active { (text, fill) } else { (fill, text) };
                    let button = Button::new(RichText::new(key.label()).size(20.0).color(text))
                        .fill(fill)
                        .rounding(Rounding::same(cell_h / 2.0));
                    if ui.add_sized([width, cell_h], button).clicked() {
                        pressed = Some(key);
                    }
                }
            });
        }

        if let Some(key) = pressed {
            self.press(key);
        }
    }
}

fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return ERROR.into();
    }
    if value == 0.0 {
        // no negative zero
        return "0".into();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn keys(calc: &mut Calculator, input: &str) {
        for c in input.chars() {
            let key = match c {
                '0'..='9' => Key::Digit(c),
                '.' => Key::Decimal,
                '+' => Key::Op(Operator::Add),
                '-' => Key::Op(Operator::Subtract),
                '*' => Key::Op(Operator::Multiply),
                '/' => Key::Op(Operator::Divide),
                '=' => Key::Equals,
                '%' => Key::Percent,
                '~' => Key::Sign,
                'C' => Key::Clear,
                other => panic!("no key for {other}"),
            };
            calc.press(key);
        }
    }

    #[test]
    fn chained_operators_evaluate_left_to_right() {
        let mut calc = Calculator::default();
        keys(&mut calc, "2+3*");
        assert_eq!(calc.display(), "5");
        keys(&mut calc, "4=");
        assert_eq!(calc.display(), "20");

        let mut calc = Calculator::default();
        keys(&mut calc, "10-4-1=");
        assert_eq!(calc.display(), "5");
    }

    #[test]
    fn division_yields_fractions_and_errors() {
        let mut calc = Calculator::default();
        keys(&mut calc, "7/2=");
        assert_eq!(calc.display(), "3.5");

        keys(&mut calc, "C9/0=");
        assert_eq!(calc.display(), "Error");
        keys(&mut calc, "4");
        assert_eq!(calc.display(), "4");
    }

    #[test]
    fn repeated_operator_replaces_the_pending_one() {
        let mut calc = Calculator::default();
        keys(&mut calc, "6+*2=");
        assert_eq!(calc.display(), "12");
    }

    #[test]
    fn digit_after_equals_starts_a_new_number() {
        let mut calc = Calculator::default();
        keys(&mut calc, "1+1=");
        assert_eq!(calc.display(), "2");
        keys(&mut calc, "3");
        assert_eq!(calc.display(), "3");
        keys(&mut calc, "=");
        assert_eq!(calc.display(), "3");
    }

    #[test]
    fn leading_zeros_and_decimal_point() {
        let mut calc = Calculator::default();
        keys(&mut calc, "007");
        assert_eq!(calc.display(), "7");

        keys(&mut calc, "C.");
        assert_eq!(calc.display(), "0.");
        keys(&mut calc, "5.2");
        assert_eq!(calc.display(), "0.52");

        keys(&mut calc, "+.");
        assert_eq!(calc.display(), "0.");
    }

    #[test]
    fn sign_and_percent_rewrite_the_display() {
        let mut calc = Calculator::default();
        keys(&mut calc, "~");
        assert_eq!(calc.display(), "0");
        keys(&mut calc, "12~");
        assert_eq!(calc.display(), "-12");
        keys(&mut calc, "C50%");
        assert_eq!(calc.display(), "0.5");
    }

    #[test]
    fn clear_resets_pending_operation() {
        let mut calc = Calculator::default();
        keys(&mut calc, "8*C3=");
        assert_eq!(calc.display(), "3");
        assert_eq!(calc, {
            let mut fresh = Calculator::default();
            fresh.input_digit('3');
            fresh
        });
    }
}
