use crate::ui::cli::drivers::PromptDriver;
use anyhow::Result;
use inquire::{Confirm, CustomType, CustomUserError, Select, Text, validator::Validation};
use std::fmt::Display;
use std::str::FromStr;

pub struct InquireDriver;

/// Accepts values inside `[min, max]`; either bound may be open.
fn range_validator<T>(
    min: Option<T>,
    max: Option<T>,
) -> impl Fn(&T) -> Result<Validation, CustomUserError> + Clone + 'static
where
    T: PartialOrd + Display + Copy + 'static,
{
    move |x: &T| {
        let ok = min.is_none_or(|lo| *x >= lo) && max.is_none_or(|hi| *x <= hi);
        if ok {
            return Ok(Validation::Valid);
        }
        let msg = match (min, max) {
            (Some(lo), Some(hi)) => format!("Must be between {lo} and {hi}"),
            (Some(lo), None) => format!("Must be ≥ {lo}"),
            (None, Some(hi)) => format!("Must be ≤ {hi}"),
            (None, None) => unreachable!(),
        };
        Ok(Validation::Invalid(msg.into()))
    }
}

fn ask_bounded<T>(title: &str, help: &str, default: T, min: Option<T>, max: Option<T>) -> Result<T>
where
    T: PartialOrd + Display + Copy + Clone + FromStr + ToString + 'static,
{
    let mut q = CustomType::<T>::new(title)
        .with_default(default)
        .with_help_message(help);
    if min.is_some() || max.is_some() {
        q = q.with_validator(range_validator(min, max));
    }
    Ok(q.prompt()?)
}

impl PromptDriver for InquireDriver {
    fn ask_select(
        &self,
        title: &str,
        help: &str,
        options: &[String],
        default: usize,
    ) -> Result<usize> {
        let mut select = Select::new(title, options.to_vec()).with_starting_cursor(default);
        if !help.is_empty() {
            select = select.with_help_message(help);
        }
        Ok(select.raw_prompt()?.index)
    }

    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new(title)
            .with_default(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String> {
        Ok(Text::new(title)
            .with_initial_value(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_u64(
        &self,
        title: &str,
        help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        ask_bounded(title, help, default, min, max)
    }

    fn ask_f64(
        &self,
        title: &str,
        help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        ask_bounded(title, help, default, min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inquire::validator::ErrorMessage;

    fn is_valid<T>(v: &impl Fn(&T) -> Result<Validation, CustomUserError>, x: T) -> bool {
        matches!(v(&x), Ok(Validation::Valid))
    }

    #[test]
    fn range_validator_bounds() {
        let v = range_validator(Some(1u64), Some(4));
        assert!(is_valid(&v, 1));
        assert!(is_valid(&v, 4));
        assert!(!is_valid(&v, 0));
        assert!(!is_valid(&v, 5));

        let v = range_validator(Some(0.0f64), None);
        assert!(is_valid(&v, 1e9));
        assert!(!is_valid(&v, -1e-9));

        let v = range_validator(None, Some(17u64));
        assert!(is_valid(&v, 0));
        match v(&18) {
            Ok(Validation::Invalid(msg)) => {
                assert_eq!(msg, ErrorMessage::Custom("Must be ≤ 17".into()));
            }
            _ => panic!("expected invalid"),
        }
    }
}
