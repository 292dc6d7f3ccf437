pub mod kind;

use crate::dice;

/// How many times an expression is evaluated and which total wins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Advantage,
    Disadvantage,
}

impl Mode {
    /// Pick rule for two attempts, none for a single evaluation
    pub fn pick(&self) -> Option<Pick> {
        match self {
            Mode::Normal => None,
            Mode::Advantage => Some(Pick::Higher),
            Mode::Disadvantage => Some(Pick::Lower),
        }
    }
}

/// Which of two totals is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    Higher,
    Lower,
}

/// Keep the evaluation outcome type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    Single(kind::Single),
    Paired(kind::Paired),
}

impl Kind {
    /// Total of a single evaluation or final value of a paired one
    pub fn get_total(&self) -> i64 {
        match self {
            Kind::Single(single) => single.get_total(),
            Kind::Paired(paired) => paired.get_final(),
        }
    }
}

/// Keep an evaluated expression with its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Result {
    expression: dice::Expression,
    result: Kind,
}

impl Result {
    pub fn new(expression: dice::Expression, result: Kind) -> Self {
        Result { expression, result }
    }

    pub fn get_expression(&self) -> &dice::Expression {
        &self.expression
    }

    pub fn get_result(&self) -> &Kind {
        &self.result
    }

    pub fn get_total(&self) -> i64 {
        self.result.get_total()
    }

    /// Check and return result as single evaluation
    pub fn as_single(&self) -> Option<&kind::Single> {
        match &self.result {
            Kind::Single(result) => Some(result),
            Kind::Paired(_) => None,
        }
    }

    /// Check and return result as paired evaluation
    pub fn as_paired(&self) -> Option<&kind::Paired> {
        match &self.result {
            Kind::Single(_) => None,
            Kind::Paired(result) => Some(result),
        }
    }
}

/// Interface for drawing bounded integers
pub trait Source {
    /// Draw a value in `low..=high`
    fn next_in_range(&mut self, low: u64, high: u64) -> u64;
}
