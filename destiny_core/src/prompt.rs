//! Console prompting and input collection.
//!
//! `Console` wraps any `BufRead`/`Write` pair so the same code drives a real
//! terminal and in-memory buffers in tests. Numeric prompts re-ask until the
//! answer parses and sits inside its bounds; there is no retry limit.

use crate::types::{
    BIRTH_DAY_RANGE, BIRTH_MONTH_RANGE, ENERGY_LEVEL_RANGE, LUCKY_NUMBER_RANGE,
    MYSTIC_CHOICE_RANGE,
};
use crate::{Error, MysticChoice, PredictionInputs, Result};
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;
use std::str::FromStr;

pub const INVALID_TYPE_MESSAGE: &str = "Error: Invalid input type. Please try again.";

/// Optional inclusive bounds for a validated prompt
#[derive(Clone, Debug, PartialEq)]
pub struct Bounds<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T: PartialOrd + Display> Bounds<T> {
    pub fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// Rejects only values strictly below `min` or above `max`.
    pub fn contains(&self, value: &T) -> bool {
        let below_min = self.min.as_ref().is_some_and(|min| value < min);
        let above_max = self.max.as_ref().is_some_and(|max| value > max);
        !(below_min || above_max)
    }

    pub fn is_bounded(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    /// Message shown when a parsed value falls outside the bounds
    pub fn violation_message(&self) -> String {
        format!(
            "Error: Value must be between {} and {}.",
            describe(&self.min),
            describe(&self.max)
        )
    }
}

impl<T> From<RangeInclusive<T>> for Bounds<T> {
    fn from(range: RangeInclusive<T>) -> Self {
        let (min, max) = range.into_inner();
        Self {
            min: Some(min),
            max: Some(max),
        }
    }
}

/// Optional sign followed by one or more ASCII digits
fn is_integer_literal(text: &str) -> bool {
    let digits = text
        .strip_prefix('+')
        .or_else(|| text.strip_prefix('-'))
        .unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn describe<T: Display>(bound: &Option<T>) -> String {
    match bound {
        Some(value) => value.to_string(),
        None => "None".to_string(),
    }
}

/// Line-oriented prompt/answer console
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console and hand back the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a full line
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Print `prompt` without a newline and read one answer.
    ///
    /// Returns `None` once the input is exhausted. The line terminator is
    /// stripped; all other whitespace is kept.
    pub fn read_answer(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Free-text answer, taken as typed
    pub fn ask_text(&mut self, prompt: &str) -> Result<String> {
        self.read_answer(prompt)?
            .ok_or_else(|| Error::InputClosed(prompt.trim().to_string()))
    }

    /// True only when the answer lowercases to exactly `yes`.
    ///
    /// End of input counts as "no".
    pub fn ask_yes(&mut self, prompt: &str) -> Result<bool> {
        Ok(self
            .read_answer(prompt)?
            .is_some_and(|answer| answer.to_lowercase() == "yes"))
    }

    /// Ask until the answer parses as `T` and lies within `bounds`
    pub fn ask_validated<T>(&mut self, prompt: &str, bounds: &Bounds<T>) -> Result<T>
    where
        T: FromStr + PartialOrd + Display,
    {
        loop {
            let answer = self
                .read_answer(prompt)?
                .ok_or_else(|| Error::InputClosed(prompt.trim().to_string()))?;

            let value = match answer.trim().parse::<T>() {
                Ok(value) => value,
                // Whole numbers too wide for `T` still count as numbers and
                // fail the range check, not the type check.
                Err(_) if bounds.is_bounded() && is_integer_literal(answer.trim()) => {
                    tracing::debug!(answer = %answer, "Rejected answer: integer overflow");
                    self.say(&bounds.violation_message())?;
                    continue;
                }
                Err(_) => {
                    tracing::debug!(answer = %answer, "Rejected answer: not a number");
                    self.say(INVALID_TYPE_MESSAGE)?;
                    continue;
                }
            };

            if !bounds.contains(&value) {
                tracing::debug!(%value, "Rejected answer: out of bounds");
                self.say(&bounds.violation_message())?;
                continue;
            }

            return Ok(value);
        }
    }
}

/// Run the ten prompts in order and return the collected inputs
pub fn collect_inputs<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<PredictionInputs> {
    console.say("\n--- Input Collection ---")?;

    let name = console.ask_text("1. Enter your full name: ")?;
    let favorite_color = console.ask_text("2. What is your favorite color? ")?;

    let birth_day: i64 = console.ask_validated(
        "3. What is your birth day (1-31)? ",
        &Bounds::from(BIRTH_DAY_RANGE),
    )?;
    let lucky_number = console.ask_validated(
        "4. Choose a lucky number (1-99): ",
        &Bounds::from(LUCKY_NUMBER_RANGE),
    )?;
    let mystic_choice: i64 = console.ask_validated(
        "5. Enter 1 for Wisdom or 2 for Strength: ",
        &Bounds::from(MYSTIC_CHOICE_RANGE),
    )?;
    let energy_level = console.ask_validated(
        "6. On a scale of 1 to 10, what is your current energy level? ",
        &Bounds::from(ENERGY_LEVEL_RANGE),
    )?;
    let birth_month = console.ask_validated(
        "7. What is your birth month (1-12)? ",
        &Bounds::from(BIRTH_MONTH_RANGE),
    )?;

    let cosmic_factor: f64 = console.ask_validated(
        "8. Enter your cosmic factor (decimal, e.g., 1.25): ",
        &Bounds::unbounded(),
    )?;
    let luck_multiplier: f64 = console.ask_validated(
        "9. Enter a luck multiplier (e.g., 0.8 or 1.5): ",
        &Bounds::unbounded(),
    )?;

    let has_amulet = console
        .ask_text("10. Do you wear a protective amulet (yes/no)? ")?
        .to_lowercase()
        == "yes";

    Ok(PredictionInputs {
        name,
        favorite_color,
        birth_day,
        lucky_number,
        mystic_choice: MysticChoice::try_from(mystic_choice)?,
        energy_level,
        birth_month,
        cosmic_factor,
        luck_multiplier,
        has_amulet,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_validated_retries_on_bad_type() {
        let mut c = console("abc\n5.0\n7\n");
        let value: i64 = c.ask_validated("n? ", &Bounds::from(1..=10)).unwrap();
        assert_eq!(value, 7);

        let out = output_of(c);
        assert_eq!(out.matches(INVALID_TYPE_MESSAGE).count(), 2);
        assert_eq!(out.matches("n? ").count(), 3);
    }

    #[test]
    fn test_validated_retries_on_out_of_range() {
        let mut c = console("0\n32\n-4\n31\n");
        let value: i64 = c.ask_validated("day? ", &Bounds::from(1..=31)).unwrap();
        assert_eq!(value, 31);

        let out = output_of(c);
        assert_eq!(
            out.matches("Error: Value must be between 1 and 31.").count(),
            3
        );
    }

    #[test]
    fn test_validated_trims_whitespace() {
        let mut c = console("  12  \n");
        let value: i64 = c.ask_validated("x? ", &Bounds::from(1..=12)).unwrap();
        assert_eq!(value, 12);
    }

    #[test]
    fn test_unbounded_decimal() {
        let mut c = console("oops\n-1e3\n");
        let value: f64 = c.ask_validated("f? ", &Bounds::unbounded()).unwrap();
        assert_eq!(value, -1000.0);
    }

    #[test]
    fn test_validated_input_closed() {
        let mut c = console("nope\n");
        let result: Result<i64> = c.ask_validated("n? ", &Bounds::from(1..=2));
        assert!(matches!(result, Err(Error::InputClosed(_))));
    }

    #[test]
    fn test_oversized_integer_is_out_of_range() {
        let mut c = console("99999999999999999999\n-99999999999999999999\n4\n");
        let value: i64 = c.ask_validated("day? ", &Bounds::from(1..=31)).unwrap();
        assert_eq!(value, 4);

        let out = output_of(c);
        assert_eq!(
            out.matches("Error: Value must be between 1 and 31.").count(),
            2
        );
        assert!(!out.contains(INVALID_TYPE_MESSAGE));
    }

    #[test]
    fn test_integer_literal_detection() {
        assert!(is_integer_literal("12"));
        assert!(is_integer_literal("-7"));
        assert!(is_integer_literal("+99999999999999999999"));
        assert!(!is_integer_literal("-"));
        assert!(!is_integer_literal("1.5"));
        assert!(!is_integer_literal("1e3"));
        assert!(!is_integer_literal(""));
    }

    #[test]
    fn test_collect_inputs_amulet_eof_is_error() {
        let mut c = console("Ada\nteal\n10\n5\n1\n7\n3\n2.0\n1.0\n");
        match collect_inputs(&mut c) {
            Err(Error::InputClosed(prompt)) => assert!(prompt.starts_with("10.")),
            other => panic!("Expected InputClosed, got {:?}", other),
        }
    }

    #[test]
    fn test_half_open_bounds_message() {
        let bounds = Bounds {
            min: Some(1),
            max: None,
        };
        assert_eq!(
            bounds.violation_message(),
            "Error: Value must be between 1 and None."
        );
        assert!(bounds.contains(&1_000_000));
        assert!(!bounds.contains(&0));
    }

    #[test]
    fn test_ask_yes_rules() {
        assert!(console("YES\n").ask_yes("? ").unwrap());
        assert!(console("yEs\r\n").ask_yes("? ").unwrap());
        assert!(!console("y\n").ask_yes("? ").unwrap());
        assert!(!console(" yes\n").ask_yes("? ").unwrap());
        assert!(!console("").ask_yes("? ").unwrap());
    }

    #[test]
    fn test_text_answer_is_verbatim() {
        let mut c = console("  Jane Doe \n");
        assert_eq!(c.ask_text("name? ").unwrap(), "  Jane Doe ");
    }

    #[test]
    fn test_collect_inputs_in_order() {
        let script = "Ada Lovelace\nviolet\n10\n5\n1\n7\n12\n2.0\n1.0\nyes\n";
        let mut c = console(script);
        let inputs = collect_inputs(&mut c).unwrap();

        assert_eq!(inputs.name, "Ada Lovelace");
        assert_eq!(inputs.favorite_color, "violet");
        assert_eq!(inputs.birth_day, 10);
        assert_eq!(inputs.lucky_number, 5);
        assert_eq!(inputs.mystic_choice, MysticChoice::Wisdom);
        assert_eq!(inputs.energy_level, 7);
        assert_eq!(inputs.birth_month, 12);
        assert_eq!(inputs.cosmic_factor, 2.0);
        assert_eq!(inputs.luck_multiplier, 1.0);
        assert!(inputs.has_amulet);

        let out = output_of(c);
        let first = out.find("1. Enter your full name: ").unwrap();
        let last = out
            .find("10. Do you wear a protective amulet (yes/no)? ")
            .unwrap();
        assert!(out.starts_with("\n--- Input Collection ---\n"));
        assert!(first < last);
    }

    #[test]
    fn test_collect_inputs_reprompts_mystic_choice() {
        let script = "Bo\nred\n1\n1\n3\nx\n2\n5\n6\n1.5\n1.0\nno\n";
        let mut c = console(script);
        let inputs = collect_inputs(&mut c).unwrap();

        assert_eq!(inputs.mystic_choice, MysticChoice::Strength);
        assert!(!inputs.has_amulet);

        let out = output_of(c);
        assert!(out.contains("Error: Value must be between 1 and 2."));
        assert!(out.contains(INVALID_TYPE_MESSAGE));
    }
}
