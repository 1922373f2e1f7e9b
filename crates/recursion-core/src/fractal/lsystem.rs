//! L-system rewriting.
//!
//! A [`RuleSet`] maps variable symbols to replacement strings. Any symbol
//! without a rule is a constant and is copied through unchanged. Each
//! rewrite replaces every symbol of the current theorem at once.

use crate::error::{RecursionError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, trace};

/// Symbol → replacement table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    rules: BTreeMap<char, String>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`RuleSet::insert`].
    pub fn with_rule(mut self, symbol: char, replacement: impl Into<String>) -> Self {
        self.insert(symbol, replacement);
        self
    }

    pub fn insert(&mut self, symbol: char, replacement: impl Into<String>) {
        self.rules.insert(symbol, replacement.into());
    }

    pub fn replacement(&self, symbol: char) -> Option<&str> {
        self.rules.get(&symbol).map(String::as_str)
    }

    pub fn is_variable(&self, symbol: char) -> bool {
        self.rules.contains_key(&symbol)
    }

    /// One simultaneous rewrite of the whole theorem.
    pub fn rewrite(&self, theorem: &str) -> String {
        let mut next = String::with_capacity(theorem.len() * 2);
        for symbol in theorem.chars() {
            match self.replacement(symbol) {
                Some(replacement) => next.push_str(replacement),
                None => next.push(symbol),
            }
        }
        next
    }

    /// Number of symbols after `iterations` rewrites of `axiom`, without
    /// building the string.
    ///
    /// Keeps one length per symbol and level, each level computed from the
    /// one below.
    pub fn expanded_len(&self, axiom: &str, iterations: usize) -> Result<u128> {
        let alphabet: BTreeSet<char> = axiom
            .chars()
            .chain(self.rules.values().flat_map(|r| r.chars()))
            .chain(self.rules.keys().copied())
            .collect();

        let mut lengths: BTreeMap<char, u128> = alphabet.iter().map(|&s| (s, 1)).collect();
        for level in 1..=iterations {
            let mut next = BTreeMap::new();
            for &symbol in &alphabet {
                let len = match self.replacement(symbol) {
                    Some(replacement) => replacement.chars().try_fold(0u128, |acc, c| {
                        acc.checked_add(lengths.get(&c).copied().unwrap_or(1))
                    }),
                    None => Some(1),
                };
                let len = len.ok_or(RecursionError::Overflow {
                    index: level as u64,
                })?;
                next.insert(symbol, len);
            }
            lengths = next;
        }

        axiom
            .chars()
            .try_fold(0u128, |acc, c| acc.checked_add(lengths.get(&c).copied().unwrap_or(1)))
            .ok_or(RecursionError::Overflow {
                index: iterations as u64,
            })
    }

    /// Algae: `A → AB`, `B → A`. Lengths follow the Fibonacci numbers.
    pub fn algae() -> Self {
        Self::new().with_rule('A', "AB").with_rule('B', "A")
    }

    /// Quadratic Koch curve: `F → F+F-F-F+F`.
    pub fn koch_curve() -> Self {
        Self::new().with_rule('F', "F+F-F-F+F")
    }

    /// Sierpinski arrowhead: `A → B-A-B`, `B → A+B+A`.
    pub fn sierpinski_arrowhead() -> Self {
        Self::new().with_rule('A', "B-A-B").with_rule('B', "A+B+A")
    }

    /// Heighway dragon: `X → X+YF+`, `Y → -FX-Y`.
    pub fn dragon_curve() -> Self {
        Self::new().with_rule('X', "X+YF+").with_rule('Y', "-FX-Y")
    }
}

impl<S: Into<String>> FromIterator<(char, S)> for RuleSet {
    fn from_iter<I: IntoIterator<Item = (char, S)>>(iter: I) -> Self {
        let mut rules = RuleSet::new();
        for (symbol, replacement) in iter {
            rules.insert(symbol, replacement);
        }
        rules
    }
}

/// First place a target substring shows up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Occurrence {
    /// Rewrites applied to the axiom (0 = the axiom itself)
    pub iteration: usize,
    /// Symbol position of the first match in that theorem
    pub index: usize,
}

/// Configuration for L-system expansion
#[derive(Debug, Clone)]
pub struct LSystemConfig {
    /// Longest theorem, in symbols, that expansion may produce
    pub max_len: usize,
}

impl Default for LSystemConfig {
    fn default() -> Self {
        Self { max_len: 1 << 20 }
    }
}

/// A rule set with an expansion limit.
#[derive(Debug, Clone)]
pub struct LSystem {
    rules: RuleSet,
    config: LSystemConfig,
}

impl LSystem {
    pub fn new(rules: RuleSet) -> Self {
        Self::with_config(rules, LSystemConfig::default())
    }

    pub fn with_config(rules: RuleSet, config: LSystemConfig) -> Self {
        Self { rules, config }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Theorem after `iterations` rewrites of `axiom`.
    pub fn expand(&self, axiom: &str, iterations: usize) -> Result<String> {
        validate_axiom(axiom)?;
        let mut theorem = axiom.to_string();
        for iteration in 1..=iterations {
            theorem = self.step(&theorem, iteration)?;
        }
        debug!(iterations, len = theorem.chars().count(), "l-system expand");
        Ok(theorem)
    }

    /// The axiom and every theorem after it, `iterations + 1` strings.
    pub fn history(&self, axiom: &str, iterations: usize) -> Result<Vec<String>> {
        validate_axiom(axiom)?;
        let mut theorems = Vec::with_capacity(iterations + 1);
        theorems.push(axiom.to_string());
        for iteration in 1..=iterations {
            let next = match theorems.last() {
                Some(previous) => self.step(previous, iteration)?,
                None => break,
            };
            theorems.push(next);
        }
        debug!(iterations, "l-system history");
        Ok(theorems)
    }

    /// Earliest theorem within `max_iterations` rewrites that contains
    /// `target`, and where in it the target starts.
    ///
    /// Expansion stops at the first hit, so a match that only appears in a
    /// later theorem can never replace it. A theorem that outgrows
    /// `max_len` before the target shows up is still an error.
    pub fn find(
        &self,
        axiom: &str,
        target: &str,
        max_iterations: usize,
    ) -> Result<Option<Occurrence>> {
        validate_axiom(axiom)?;
        if target.is_empty() {
            return Err(RecursionError::invalid_argument("target must not be empty"));
        }

        let mut first: Option<Occurrence> = None;
        let mut theorem = axiom.to_string();
        for iteration in 0..=max_iterations {
            if iteration > 0 {
                theorem = self.step(&theorem, iteration)?;
            }
            if let Some(byte) = theorem.find(target) {
                first = Some(Occurrence {
                    iteration,
                    index: theorem[..byte].chars().count(),
                });
                break;
            }
        }
        debug!(pattern = target, max_iterations, ?first, "l-system find");
        Ok(first)
    }

    fn step(&self, theorem: &str, iteration: usize) -> Result<String> {
        let next_len: usize = theorem
            .chars()
            .map(|s| self.rules.replacement(s).map_or(1, |r| r.chars().count()))
            .sum();
        if next_len > self.config.max_len {
            return Err(RecursionError::LimitExceeded {
                what: "theorem length",
                value: next_len as u64,
                limit: self.config.max_len as u64,
            });
        }
        trace!(iteration, len = next_len, "rewrite");
        Ok(self.rules.rewrite(theorem))
    }
}

fn validate_axiom(axiom: &str) -> Result<()> {
    if axiom.is_empty() {
        return Err(RecursionError::invalid_argument("axiom must not be empty"));
    }
    Ok(())
}

/// [`LSystem::expand`] with the default configuration.
///
/// ```
/// use recursion_core::{l_system_expand, RuleSet};
/// let rules = RuleSet::new().with_rule('A', "AB").with_rule('B', "A");
/// assert_eq!(l_system_expand("A", &rules, 3).unwrap(), "ABAAB");
/// ```
pub fn l_system_expand(axiom: &str, rules: &RuleSet, iterations: usize) -> Result<String> {
    LSystem::new(rules.clone()).expand(axiom, iterations)
}

/// [`LSystem::history`] with the default configuration.
pub fn l_system_history(axiom: &str, rules: &RuleSet, iterations: usize) -> Result<Vec<String>> {
    LSystem::new(rules.clone()).history(axiom, iterations)
}

/// [`LSystem::find`] with the default configuration.
pub fn l_system_find(
    axiom: &str,
    rules: &RuleSet,
    target: &str,
    max_iterations: usize,
) -> Result<Option<Occurrence>> {
    LSystem::new(rules.clone()).find(axiom, target, max_iterations)
}
