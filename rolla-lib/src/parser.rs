use crate::dice;
use crate::error::Range;
use crate::error::Result;
use crate::error::Syntax;
use pest::iterators::Pair;
use pest_derive::Parser;
use tracing::debug;

/// Pest parser
#[derive(Parser)]
#[grammar = "rolla.pest"]
pub(crate) struct Parser;

impl Parser {
    fn extract_digits<'i>(pair: Pair<'i, Rule>) -> &'i str {
        pair.into_inner()
            .find(|inner| inner.as_rule() == Rule::digits)
            .map_or("", |digits| digits.as_str())
    }
}

// overflowing digit runs are still well-formed, so they surface as range errors
fn number<T: std::str::FromStr>(digits: &str) -> Option<T> {
    digits.parse::<T>().ok()
}

// lowest and highest possible totals must both be representable
fn totals_fit(keep: usize, sides: u64, modifier: i64) -> bool {
    let lowest = i64::try_from(keep).ok();
    let highest = lowest.zip(i64::try_from(sides).ok()).and_then(|(k, s)| k.checked_mul(s));
    [lowest, highest]
        .into_iter()
        .all(|bound| bound.and_then(|b| b.checked_add(modifier)).is_some())
}

/// Parse an expression against the default limits
pub fn parse(text: &str) -> Result<dice::Expression> {
    parse_with(text, &dice::Limits::default())
}

/// Parse an expression against the provided limits
pub fn parse_with(text: &str, limits: &dice::Limits) -> Result<dice::Expression> {
    let expression = <Parser as pest::Parser<Rule>>::parse(Rule::expression, text)
        .map_err(|error| {
            debug!("`{}` rejected: {}", text, error.variant.message());
            Syntax::Grammar
        })?
        .next()
        .ok_or(Syntax::Grammar)?;

    let (mut count, mut sides, mut keep, mut modifier) = (None, None, None, None);
    for pair in expression.into_inner() {
        match pair.as_rule() {
            Rule::count => count = Some(Parser::extract_digits(pair)),
            Rule::sides => sides = Some(Parser::extract_digits(pair)),
            Rule::keep => keep = Some(Parser::extract_digits(pair)),
            Rule::modifier => modifier = Some(pair.as_str()),
            Rule::malformed => return Err(Syntax::Modifier.into()),
            _ => (),
        }
    }
    let (count, sides) = count.zip(sides).ok_or(Syntax::Grammar)?;

    let count = number::<usize>(count)
        .filter(|count| (1..=limits.count_bound()).contains(count))
        .ok_or(Range::Count)?;
    let sides = number::<u64>(sides)
        .filter(|sides| (2..=limits.sides_bound()).contains(sides))
        .ok_or(Range::Sides)?;
    let keep = match keep {
        Some(keep) => number::<usize>(keep)
            .filter(|keep| (1..=count).contains(keep))
            .ok_or(Range::Keep)?,
        None => count,
    };
    // the sign is part of the match, `+` included
    let modifier = match modifier {
        Some(modifier) => number::<i64>(modifier)
            .filter(|modifier| totals_fit(keep, sides, *modifier))
            .ok_or(Range::Modifier)?,
        None => 0,
    };

    let expression = dice::Expression::new(count, sides, keep, modifier);
    debug!("`{}` parsed as {}", text, expression);
    Ok(expression)
}
