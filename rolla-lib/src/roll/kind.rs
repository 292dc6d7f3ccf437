use crate::roll::Pick;

/// Represents one evaluation of an expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Single {
    /// In draw order
    rolls: Vec<u64>,
    /// Highest first
    kept: Vec<u64>,
    /// In draw order
    dropped: Vec<u64>,
    modifier: i64,
    subtotal: i64,
    total: i64,
}

impl Single {
    pub(crate) fn new(rolls: Vec<u64>, kept: Vec<u64>, dropped: Vec<u64>, modifier: i64) -> Self {
        // exact whenever the source stays within the die sides
        let subtotal = kept
            .iter()
            .map(|&value| i64::try_from(value).unwrap_or(i64::MAX))
            .fold(0i64, i64::saturating_add);
        let total = subtotal.saturating_add(modifier);
        Single {
            rolls,
            kept,
            dropped,
            modifier,
            subtotal,
            total,
        }
    }

    pub fn get_rolls(&self) -> &[u64] {
        &self.rolls
    }

    pub fn get_kept(&self) -> &[u64] {
        &self.kept
    }

    pub fn get_dropped(&self) -> &[u64] {
        &self.dropped
    }

    pub fn get_modifier(&self) -> i64 {
        self.modifier
    }

    /// Sum of the kept dice, before the modifier
    pub fn get_subtotal(&self) -> i64 {
        self.subtotal
    }

    pub fn get_total(&self) -> i64 {
        self.total
    }
}

/// Represents two evaluations of the same expression, for advantage or disadvantage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paired {
    first: Single,
    second: Single,
    pick: Pick,
    total: i64,
}

impl Paired {
    pub(crate) fn new(pick: Pick, first: Single, second: Single) -> Self {
        let total = match pick {
            Pick::Higher => first.get_total().max(second.get_total()),
            Pick::Lower => first.get_total().min(second.get_total()),
        };
        Paired {
            first,
            second,
            pick,
            total,
        }
    }

    pub fn get_first(&self) -> &Single {
        &self.first
    }

    pub fn get_second(&self) -> &Single {
        &self.second
    }

    /// Both attempts in evaluation order
    pub fn attempts(&self) -> [&Single; 2] {
        [&self.first, &self.second]
    }

    pub fn get_pick(&self) -> Pick {
        self.pick
    }

    /// Equal to one of the attempt totals; which one is unspecified on a tie
    pub fn get_final(&self) -> i64 {
        self.total
    }
}
