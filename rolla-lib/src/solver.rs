use crate::dice;
use crate::error::Result;
use crate::evaluator::Evaluator;
use crate::parser;
use crate::roll;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// Default random dice roller
pub struct RandomSource<'a, T: Rng> {
    pub generator: &'a mut T,
}

impl<T: Rng> roll::Source for RandomSource<'_, T> {
    fn next_in_range(&mut self, low: u64, high: u64) -> u64 {
        self.generator.gen_range(low..=high)
    }
}

/// Represent a solver and holds the query string with its parsed expression
#[derive(Clone, Debug)]
pub struct Solver {
    query: String,
    expression: dice::Expression,
}

impl Solver {
    /// Parse the query against the default limits
    pub fn new(input: &str) -> Result<Self> {
        Self::with_limits(input, &dice::Limits::default())
    }

    /// Parse the query against the provided limits
    pub fn with_limits(input: &str, limits: &dice::Limits) -> Result<Self> {
        Ok(Solver {
            query: input.to_owned(),
            expression: parser::parse_with(input, limits)?,
        })
    }

    /// Solve the expression using a freshly seeded Rng
    pub fn solve(&self, mode: roll::Mode) -> roll::Result {
        self.solve_with(mode, &mut StdRng::from_entropy())
    }

    /// Solve the expression reproducibly from a seed
    pub fn solve_seeded(&self, mode: roll::Mode, seed: u64) -> roll::Result {
        self.solve_with(mode, &mut StdRng::seed_from_u64(seed))
    }

    /// Solve the expression using the provided Rng source
    pub fn solve_with<R: Rng>(&self, mode: roll::Mode, generator: &mut R) -> roll::Result {
        self.solve_with_source(mode, &mut RandomSource { generator })
    }

    /// Solve the expression using the provided source
    pub fn solve_with_source<S: roll::Source>(
        &self,
        mode: roll::Mode,
        source: &mut S,
    ) -> roll::Result {
        roll::Result::new(
            self.expression,
            Evaluator::eval(&self.expression, mode, source),
        )
    }

    pub fn get_expression(&self) -> &dice::Expression {
        &self.expression
    }

    /// Return the query string
    pub fn as_str(&self) -> &str {
        &self.query
    }
}
