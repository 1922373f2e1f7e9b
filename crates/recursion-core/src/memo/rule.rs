//! Recurrence definitions: base values plus a rule over smaller indices.

use std::collections::BTreeMap;

/// How `f(n)` is built from values at strictly smaller indices.
pub trait Rule {
    /// Offsets `k` such that `f(n)` depends on `f(n - k)`, in the order the
    /// terms are handed to [`Rule::combine`].
    fn offsets(&self) -> &[u64];

    /// Combine the dependent terms into `f(n)`. `None` means the result does
    /// not fit in `u128`.
    fn combine(&self, n: u64, terms: &[u128]) -> Option<u128>;
}

/// Weighted sum `f(n) = c1·f(n-k1) + c2·f(n-k2) + ...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearRule {
    offsets: Vec<u64>,
    coefficients: Vec<u128>,
}

impl LinearRule {
    /// Build from `(offset, coefficient)` pairs.
    pub fn new(terms: impl IntoIterator<Item = (u64, u128)>) -> Self {
        let (offsets, coefficients) = terms.into_iter().unzip();
        Self {
            offsets,
            coefficients,
        }
    }

    /// Plain sum of the given offsets, every coefficient 1.
    pub fn sum_of(offsets: &[u64]) -> Self {
        Self::new(offsets.iter().map(|&k| (k, 1)))
    }

    pub fn coefficients(&self) -> &[u128] {
        &self.coefficients
    }
}

impl Rule for LinearRule {
    fn offsets(&self) -> &[u64] {
        &self.offsets
    }

    fn combine(&self, _n: u64, terms: &[u128]) -> Option<u128> {
        terms
            .iter()
            .zip(&self.coefficients)
            .try_fold(0u128, |acc, (&term, &c)| acc.checked_add(term.checked_mul(c)?))
    }
}

/// `f(n) = n · f(n-1)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FactorialRule;

impl Rule for FactorialRule {
    fn offsets(&self) -> &[u64] {
        &[1]
    }

    fn combine(&self, n: u64, terms: &[u128]) -> Option<u128> {
        u128::from(n).checked_mul(*terms.first()?)
    }
}

/// A rule together with the base values that terminate it.
#[derive(Debug, Clone)]
pub struct Recurrence<R = LinearRule> {
    base: BTreeMap<u64, u128>,
    rule: R,
}

impl<R: Rule> Recurrence<R> {
    pub fn new(base: impl IntoIterator<Item = (u64, u128)>, rule: R) -> Self {
        Self {
            base: base.into_iter().collect(),
            rule,
        }
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Literal base value at `n`, if `n` is in the base set.
    pub fn base_value(&self, n: u64) -> Option<u128> {
        self.base.get(&n).copied()
    }

    pub fn is_base(&self, n: u64) -> bool {
        self.base.contains_key(&n)
    }
}

impl Recurrence<LinearRule> {
    /// 0, 1, 1, 2, 3, 5, 8, ...
    pub fn fibonacci() -> Self {
        Self::new([(0, 0), (1, 1)], LinearRule::sum_of(&[1, 2]))
    }

    /// 2, 1, 3, 4, 7, 11, ...
    pub fn lucas() -> Self {
        Self::new([(0, 2), (1, 1)], LinearRule::sum_of(&[1, 2]))
    }

    /// 0, 0, 1, 1, 2, 4, 7, 13, ...
    pub fn tribonacci() -> Self {
        Self::new([(0, 0), (1, 0), (2, 1)], LinearRule::sum_of(&[1, 2, 3]))
    }

    /// 0, 1, 2, 5, 12, 29, ... (`f(n) = 2·f(n-1) + f(n-2)`)
    pub fn pell() -> Self {
        Self::new([(0, 0), (1, 1)], LinearRule::new([(1, 2), (2, 1)]))
    }
}

impl Recurrence<FactorialRule> {
    pub fn factorial() -> Self {
        Self::new([(0, 1)], FactorialRule)
    }
}
