/// Default upper bound on the number of dice in one expression
pub const MAX_COUNT: usize = 100;
/// Default upper bound on the number of faces of a die
pub const MAX_SIDES: u64 = 100;
/// Hard bound on `Limits::max_count`, whatever the configuration asks for
pub const COUNT_CEILING: usize = 10_000;
/// Hard bound on `Limits::max_sides`, whatever the configuration asks for
pub const SIDES_CEILING: u64 = 1_000_000_000;

/// Bounds applied while parsing an expression.
///
/// Values above [`COUNT_CEILING`] and [`SIDES_CEILING`] are capped to them, so the
/// sum of any roll fits an `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_count: usize,
    pub max_sides: u64,
}

impl Limits {
    /// Largest dice count actually accepted
    pub fn count_bound(&self) -> usize {
        self.max_count.min(COUNT_CEILING)
    }

    /// Largest die sides actually accepted
    pub fn sides_bound(&self) -> u64 {
        self.max_sides.min(SIDES_CEILING)
    }
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_count: MAX_COUNT,
            max_sides: MAX_SIDES,
        }
    }
}

/// A validated `NdS[kK][+M|-M]` expression.
///
/// Only the parser builds one, so `1 <= keep <= count` and `sides >= 2` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Expression {
    count: usize,
    sides: u64,
    keep: usize,
    modifier: i64,
}

impl Expression {
    pub(crate) fn new(count: usize, sides: u64, keep: usize, modifier: i64) -> Self {
        Expression {
            count,
            sides,
            keep,
            modifier,
        }
    }

    /// Number of dice rolled
    pub fn get_count(&self) -> usize {
        self.count
    }

    /// Faces per die
    pub fn get_sides(&self) -> u64 {
        self.sides
    }

    /// Number of highest rolls retained
    pub fn get_keep(&self) -> usize {
        self.keep
    }

    /// Flat value added after keep-selection
    pub fn get_modifier(&self) -> i64 {
        self.modifier
    }

    /// Check if some dice will be dropped
    pub fn drops_dice(&self) -> bool {
        self.keep < self.count
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        if self.drops_dice() {
            write!(f, "k{}", self.keep)?;
        }
        if self.modifier != 0 {
            write!(f, "{:+}", self.modifier)?;
        }
        Ok(())
    }
}
