//! Field validation for user input.
//!
//! A [`Validatable`] bundles one value with the constraints it must satisfy.
//! Text constraints apply only to text values and numeric constraints only to
//! numbers; a constraint that does not apply to the value's kind is skipped.
//!
//! Bounds are not symmetric:
//!
//! | constraint     | applies to | passes when        |
//! |----------------|------------|--------------------|
//! | `required`     | both       | trimmed text != "" |
//! | `min_length`   | text       | `len > min`        |
//! | `max_length`   | text       | `len < max`        |
//! | `min`          | number     | `value >= min`     |
//! | `max`          | number     | `value < max`      |
//!
//! Callers wanting "at least N characters" pass `min_length(N - 1)`.
//!
//! # Examples
//! ```
//! use projboard::validation::{validate, Validatable};
//!
//! assert!(validate(&Validatable::text("Website").required()));
//! assert!(!validate(&Validatable::text("   ").required()));
//! assert!(!validate(&Validatable::text("ab").min_length(2)));
//! assert!(validate(&Validatable::number(1.0).min(1.0).max(6.0)));
//! assert!(!validate(&Validatable::number(6.0).min(1.0).max(6.0)));
//! ```

use std::fmt;

/// The value under validation.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            // f64's Display already drops a trailing ".0" and prints NaN as "NaN"
            FieldValue::Number(n) => write!(f, "{}", n),
        }
    }
}

/// One constraint of a [`Validatable`], as reported by [`failed_checks`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Min(f64),
    Max(f64),
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Required => write!(f, "required"),
            Constraint::MinLength(n) => write!(f, "length > {}", n),
            Constraint::MaxLength(n) => write!(f, "length < {}", n),
            Constraint::Min(n) => write!(f, ">= {}", n),
            Constraint::Max(n) => write!(f, "< {}", n),
        }
    }
}

/// A value plus the optional constraints it is checked against.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: FieldValue,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    pub fn new(value: FieldValue) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::new(FieldValue::Text(value.into()))
    }

    pub fn number(value: f64) -> Self {
        Self::new(FieldValue::Number(value))
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Returns true when every enabled constraint holds.
pub fn validate(input: &Validatable) -> bool {
    failed_checks(input).is_empty()
}

/// Evaluates every applicable constraint and returns the ones that failed,
/// in declaration order. Checks do not short-circuit.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn failed_checks(input: &Validatable) -> Vec<Constraint> {
    let mut failed = Vec::new();

    if input.required && input.value.to_string().trim().is_empty() {
        failed.push(Constraint::Required);
    }

    match &input.value {
        FieldValue::Text(text) => {
            let len = text.chars().count();
            if let Some(min) = input.min_length {
                if len <= min {
                    failed.push(Constraint::MinLength(min));
                }
            }
            if let Some(max) = input.max_length {
                if len >= max {
                    failed.push(Constraint::MaxLength(max));
                }
            }
        }
        FieldValue::Number(value) => {
            if let Some(min) = input.min {
                // written as a negated pass condition so NaN fails
                if !(*value >= min) {
                    failed.push(Constraint::Min(min));
                }
            }
            if let Some(max) = input.max {
                if !(*value < max) {
                    failed.push(Constraint::Max(max));
                }
            }
        }
    }

    failed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_constraints_always_passes() {
        assert!(validate(&Validatable::text("")));
        assert!(validate(&Validatable::number(f64::NAN)));
    }

    #[test]
    fn required_rejects_blank_text() {
        assert!(!validate(&Validatable::text("").required()));
        assert!(!validate(&Validatable::text(" \t\n").required()));
        assert!(validate(&Validatable::text(" x ").required()));
    }

    #[test]
    fn required_accepts_any_number() {
        assert!(validate(&Validatable::number(0.0).required()));
        assert!(validate(&Validatable::number(f64::NAN).required()));
    }

    #[test]
    fn min_length_is_exclusive() {
        let check = |s: &str| validate(&Validatable::text(s).min_length(3));
        assert!(!check("abc"));
        assert!(check("abcd"));
    }

    #[test]
    fn max_length_is_exclusive() {
        let check = |s: &str| validate(&Validatable::text(s).max_length(3));
        assert!(!check("abc"));
        assert!(check("ab"));
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        // 3 chars, 6 bytes
        assert!(validate(&Validatable::text("äöü").max_length(4)));
    }

    #[test]
    fn numeric_min_is_inclusive_and_max_exclusive() {
        let check = |n: f64| validate(&Validatable::number(n).min(1.0).max(6.0));
        assert!(!check(0.0));
        assert!(check(1.0));
        assert!(check(5.0));
        assert!(!check(6.0));
    }

    #[test]
    fn nan_fails_numeric_bounds() {
        assert!(!validate(&Validatable::number(f64::NAN).min(1.0)));
        assert!(!validate(&Validatable::number(f64::NAN).max(6.0)));
    }

    #[test]
    fn kind_mismatched_constraints_are_skipped() {
        assert!(validate(&Validatable::text("x").min(10.0).max(0.0)));
        assert!(validate(&Validatable::number(1.0).min_length(5).max_length(0)));
    }

    #[test]
    fn reports_every_failed_check() {
        let input = Validatable::text("").required().min_length(2);
        assert_eq!(
            failed_checks(&input),
            vec![Constraint::Required, Constraint::MinLength(2)]
        );

        let input = Validatable::number(f64::NAN).required().min(1.0).max(6.0);
        assert_eq!(
            failed_checks(&input),
            vec![Constraint::Min(1.0), Constraint::Max(6.0)]
        );
    }

    #[test]
    fn whole_numbers_display_without_fraction() {
        assert_eq!(FieldValue::Number(3.0).to_string(), "3");
        assert_eq!(FieldValue::Number(2.5).to_string(), "2.5");
    }
}
