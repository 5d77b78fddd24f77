use crate::ui::cli::drivers::PromptDriver;
use anyhow::{Context, Result, bail};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::str::FromStr;

/// Prompt driver answering from a script instead of a terminal.
///
/// Selections are consumed in order; a queued selection that matches no
/// option of the current prompt is kept for a later one and the default is
/// taken. Field answers are queued per prompt title and an unanswered title
/// takes the default. An empty answer is returned as is by text prompts and
/// means "default" everywhere else.
#[derive(Default)]
pub struct ScriptedDriver {
    selections: RefCell<VecDeque<String>>,
    answers: RefCell<HashMap<String, VecDeque<String>>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedDriver {
    /// Queues a selection, matched case-insensitively against option text.
    pub fn select(self, needle: &str) -> Self {
        self.selections.borrow_mut().push_back(needle.to_lowercase());
        self
    }

    pub fn answer(self, title: &str, value: &str) -> Self {
        self.answers
            .borrow_mut()
            .entry(title.to_string())
            .or_default()
            .push_back(value.to_string());
        self
    }

    /// Titles of every prompt shown so far.
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    fn next_answer(&self, title: &str) -> Option<String> {
        self.asked.borrow_mut().push(title.to_string());
        self.answers
            .borrow_mut()
            .get_mut(title)
            .and_then(VecDeque::pop_front)
            .filter(|a| !a.trim().is_empty())
    }

    fn parse_or<T: FromStr + PartialOrd + Copy + std::fmt::Display>(
        &self,
        title: &str,
        default: T,
        min: Option<T>,
        max: Option<T>,
    ) -> Result<T> {
        let Some(raw) = self.next_answer(title) else {
            return Ok(default);
        };
        let v: T = raw
            .trim()
            .parse()
            .ok()
            .with_context(|| format!("{title}: cannot parse '{raw}'"))?;
        if min.is_some_and(|lo| v < lo) || max.is_some_and(|hi| v > hi) {
            bail!("{title}: {v} out of range");
        }
        Ok(v)
    }
}

impl PromptDriver for ScriptedDriver {
    fn ask_select(
        &self,
        title: &str,
        _help: &str,
        options: &[String],
        default: usize,
    ) -> Result<usize> {
        self.asked.borrow_mut().push(title.to_string());
        let mut queue = self.selections.borrow_mut();
        let Some(needle) = queue.front() else {
            return Ok(default);
        };
        match options
            .iter()
            .position(|o| o.to_lowercase().contains(needle.as_str()))
        {
            Some(i) => {
                queue.pop_front();
                Ok(i)
            }
            None => Ok(default),
        }
    }

    fn ask_bool(&self, title: &str, _help: &str, default: bool) -> Result<bool> {
        match self.next_answer(title).as_deref().map(str::trim) {
            None => Ok(default),
            Some("y" | "yes" | "true") => Ok(true),
            Some("n" | "no" | "false") => Ok(false),
            Some(other) => bail!("{title}: not a yes/no answer '{other}'"),
        }
    }

    fn ask_string(&self, title: &str, _help: &str, default: &str) -> Result<String> {
        self.asked.borrow_mut().push(title.to_string());
        let next = self
            .answers
            .borrow_mut()
            .get_mut(title)
            .and_then(VecDeque::pop_front);
        Ok(next.unwrap_or_else(|| default.to_string()))
    }

    fn ask_u64(
        &self,
        title: &str,
        _help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        self.parse_or(title, default, min, max)
    }

    fn ask_f64(
        &self,
        title: &str,
        _help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        self.parse_or(title, default, min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn unmatched_selection_waits_for_a_later_prompt() {
        let d = ScriptedDriver::default().select("cos");
        assert_eq!(d.ask_select("Scheme", "", &opts(&["forward", "central"]), 1).unwrap(), 1);
        assert_eq!(d.ask_select("Function", "", &opts(&["sin(x)", "cos(x)"]), 0).unwrap(), 1);
        assert_eq!(d.ask_select("Function", "", &opts(&["sin(x)", "cos(x)"]), 0).unwrap(), 0);
    }

    #[test]
    fn answers_are_queued_per_title() {
        let d = ScriptedDriver::default()
            .answer("Step h", "0.1")
            .answer("Path", "a.txt")
            .answer("Path", "");
        assert_eq!(d.ask_f64("Step h", "", 0.2, None, None).unwrap(), 0.1);
        assert_eq!(d.ask_f64("Step h", "", 0.2, None, None).unwrap(), 0.2);
        assert_eq!(d.ask_string("Path", "", "x.csv").unwrap(), "a.txt");
        assert_eq!(d.ask_string("Path", "", "x.csv").unwrap(), "");
        assert_eq!(d.ask_string("Path", "", "x.csv").unwrap(), "x.csv");
        assert_eq!(d.asked().len(), 5);
    }

    #[test]
    fn range_and_parse_errors() {
        let d = ScriptedDriver::default()
            .answer("Precision", "18")
            .answer("Nodes", "many")
            .answer("Balance", "maybe");
        assert!(d.ask_u64("Precision", "", 4, None, Some(17)).is_err());
        assert!(d.ask_u64("Nodes", "", 4, Some(1), None).is_err());
        assert!(d.ask_bool("Balance", "", false).is_err());
    }
}
