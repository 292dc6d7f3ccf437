use itertools::Itertools;
use rolla_lib::dice;
use rolla_lib::roll;
use rolla_lib::roll::kind;
use std::fmt;

/// Human readable report of a solved expression
pub struct Report<'a>(pub &'a roll::Result);

/// Lines describing one evaluation, optionally prefixed by its attempt number
struct Attempt<'a> {
    expression: &'a dice::Expression,
    single: &'a kind::Single,
    number: Option<usize>,
}

impl fmt::Display for Attempt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.number {
            Some(n) => format!("Attempt {n} - "),
            None => String::new(),
        };
        let (count, sides) = (self.expression.get_count(), self.expression.get_sides());
        if self.expression.drops_dice() {
            let dropped = self.single.get_dropped();
            write!(
                f,
                "{prefix}Rolled {count}d{sides} (keeping {}): {}; ",
                self.expression.get_keep(),
                self.single.get_kept().iter().format(", ")
            )?;
            match dropped {
                [lowest] => writeln!(f, "lowest: {lowest}")?,
                _ => writeln!(f, "dropped: {}", dropped.iter().format(", "))?,
            }
        } else {
            writeln!(
                f,
                "{prefix}Rolled {count}d{sides}: {}",
                self.single.get_rolls().iter().format(", ")
            )?;
        }
        match self.single.get_modifier() {
            0 => writeln!(f, "{prefix}Result: {}", self.single.get_total()),
            m if m < 0 => writeln!(
                f,
                "{prefix}Result: {} - {} = {}",
                self.single.get_subtotal(),
                m.unsigned_abs(),
                self.single.get_total()
            ),
            m => writeln!(
                f,
                "{prefix}Result: {} + {} = {}",
                self.single.get_subtotal(),
                m,
                self.single.get_total()
            ),
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expression = self.0.get_expression();
        match self.0.get_result() {
            roll::Kind::Single(single) => write!(
                f,
                "{}",
                Attempt {
                    expression,
                    single,
                    number: None
                }
            ),
            roll::Kind::Paired(paired) => {
                for (index, single) in paired.attempts().into_iter().enumerate() {
                    write!(
                        f,
                        "{}",
                        Attempt {
                            expression,
                            single,
                            number: Some(index + 1)
                        }
                    )?;
                }
                let (name, side) = match paired.get_pick() {
                    roll::Pick::Higher => ("Advantage", "higher"),
                    roll::Pick::Lower => ("Disadvantage", "lower"),
                };
                writeln!(
                    f,
                    "{name} applied: kept {side} of {} and {}",
                    paired.get_first().get_total(),
                    paired.get_second().get_total()
                )?;
                writeln!(f, "Final: {}", paired.get_final())
            }
        }
    }
}
