//! `Stats` literals: compound yields such as `+1 Gold, -2 Production`.
//!
//! Each comma-separated part is a signed amount followed by a stat name.
//! The sign is mandatory so that plain numbers are never mistaken for stats.

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

static STAT_PART_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-])(\d+(?:\.\d+)?) ([A-Za-z]+)$").expect("stat part regex is valid")
});

/// A single yield category.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Stat {
    /// Production.
    Production,
    /// Food.
    Food,
    /// Gold.
    Gold,
    /// Science.
    Science,
    /// Culture.
    Culture,
    /// Happiness.
    Happiness,
    /// Faith.
    Faith,
}

impl Stat {
    /// All stats in display order.
    pub const ALL: [Stat; 7] = [
        Stat::Production,
        Stat::Food,
        Stat::Gold,
        Stat::Science,
        Stat::Culture,
        Stat::Happiness,
        Stat::Faith,
    ];

    /// Returns the stat's display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Stat::Production => "Production",
            Stat::Food => "Food",
            Stat::Gold => "Gold",
            Stat::Science => "Science",
            Stat::Culture => "Culture",
            Stat::Happiness => "Happiness",
            Stat::Faith => "Faith",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for Stat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Stat::ALL
            .into_iter()
            .find(|stat| stat.name() == s)
            .ok_or_else(|| Error::unknown_stat(s))
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A bundle of amounts, one per [`Stat`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Stats {
    values: [f32; 7],
}

impl Stats {
    /// Creates an empty bundle.
    #[must_use]
    pub const fn new() -> Self {
        Self { values: [0.0; 7] }
    }

    /// Builder method to set one stat.
    #[must_use]
    pub fn with(mut self, stat: Stat, amount: f32) -> Self {
        self[stat] = amount;
        self
    }

    /// Returns true if `text` is a well-formed stats literal.
    #[must_use]
    pub fn is_stats(text: &str) -> bool {
        Self::parse(text).is_ok()
    }

    /// Parses a stats literal.
    ///
    /// Repeated stats accumulate: `+1 Gold, +2 Gold` is three gold.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` is empty, if a part does not have the
    /// `<sign><amount> <Stat>` shape, or if a stat name is unknown.
    pub fn parse(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(Error::invalid_stats(text, "empty"));
        }

        let mut stats = Stats::new();
        for part in text.split(',') {
            let part = part.trim();
            let caps = STAT_PART_REGEX
                .captures(part)
                .ok_or_else(|| Error::invalid_stats(text, format!("malformed part `{part}`")))?;

            let amount: f32 = caps[2]
                .parse()
                .map_err(|_| Error::invalid_stats(text, format!("bad amount in `{part}`")))?;
            let stat: Stat = caps[3].parse()?;
            let signed = if &caps[1] == "-" { -amount } else { amount };
            stats[stat] += signed;
        }
        Ok(stats)
    }

    /// Returns the amount for one stat.
    #[must_use]
    pub fn get(&self, stat: Stat) -> f32 {
        self.values[stat.index()]
    }

    /// Returns true if every amount is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(|v| *v == 0.0)
    }

    /// Iterates over the non-zero amounts.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, f32)> + '_ {
        Stat::ALL
            .into_iter()
            .map(|stat| (stat, self.get(stat)))
            .filter(|(_, amount)| *amount != 0.0)
    }
}

impl Index<Stat> for Stats {
    type Output = f32;

    fn index(&self, stat: Stat) -> &f32 {
        &self.values[stat.index()]
    }
}

impl IndexMut<Stat> for Stats {
    fn index_mut(&mut self, stat: Stat) -> &mut f32 {
        &mut self.values[stat.index()]
    }
}

impl Add for Stats {
    type Output = Stats;

    fn add(mut self, rhs: Stats) -> Stats {
        self += rhs;
        self
    }
}

impl AddAssign for Stats {
    fn add_assign(&mut self, rhs: Stats) {
        for (lhs, rhs) in self.values.iter_mut().zip(rhs.values) {
            *lhs += rhs;
        }
    }
}

impl FromStr for Stats {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Stats::parse(s)
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (stat, amount) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            let sign = if amount < 0.0 { '-' } else { '+' };
            write!(f, "{sign}{} {stat}", amount.abs())?;
        }
        Ok(())
    }
}
