use crate::dice;
use crate::roll;
use crate::roll::kind;
use itertools::Itertools;
use std::cmp::Reverse;
use tracing::debug;
use tracing::trace;

/// Represent an evaluator
pub struct Evaluator;

impl Evaluator {
    /// Roll the expression once, keeping the highest dice
    pub fn roll<S: roll::Source>(expression: &dice::Expression, source: &mut S) -> kind::Single {
        let rolls = Self::draw(expression.get_count(), expression.get_sides(), source);
        // ties go to the earlier draw
        let ranked = rolls
            .iter()
            .copied()
            .enumerate()
            .sorted_by_key(|&(index, value)| (Reverse(value), index))
            .collect::<Vec<_>>();
        let (kept, dropped) = ranked.split_at(expression.get_keep());
        let kept = kept.iter().map(|&(_, value)| value).collect();
        let dropped = dropped
            .iter()
            .sorted_by_key(|&&(index, _)| index)
            .map(|&(_, value)| value)
            .collect();
        let single = kind::Single::new(rolls, kept, dropped, expression.get_modifier());
        debug!(
            "{} rolled [{}] for {}",
            expression,
            single.get_rolls().iter().format(", "),
            single.get_total()
        );
        single
    }

    /// Roll the expression twice from the same source and keep the higher total
    pub fn roll_with_advantage<S: roll::Source>(
        expression: &dice::Expression,
        source: &mut S,
    ) -> kind::Paired {
        Self::roll_paired(expression, roll::Pick::Higher, source)
    }

    /// Roll the expression twice from the same source and keep the lower total
    pub fn roll_with_disadvantage<S: roll::Source>(
        expression: &dice::Expression,
        source: &mut S,
    ) -> kind::Paired {
        Self::roll_paired(expression, roll::Pick::Lower, source)
    }

    /// Evaluate the expression according to the mode
    pub fn eval<S: roll::Source>(
        expression: &dice::Expression,
        mode: roll::Mode,
        source: &mut S,
    ) -> roll::Kind {
        match mode.pick() {
            None => roll::Kind::Single(Self::roll(expression, source)),
            Some(pick) => roll::Kind::Paired(Self::roll_paired(expression, pick, source)),
        }
    }

    fn roll_paired<S: roll::Source>(
        expression: &dice::Expression,
        pick: roll::Pick,
        source: &mut S,
    ) -> kind::Paired {
        let first = Self::roll(expression, source);
        let second = Self::roll(expression, source);
        let paired = kind::Paired::new(pick, first, second);
        debug!("{:?} of {} gives {}", pick, expression, paired.get_final());
        paired
    }

    fn draw<S: roll::Source>(amount: usize, sides: u64, source: &mut S) -> Vec<u64> {
        (0..amount)
            .map(|_| {
                let value = source.next_in_range(1, sides);
                trace!("d{} -> {}", sides, value);
                value
            })
            .collect()
    }
}
