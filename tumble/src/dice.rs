use std::str::FromStr;

use anyhow::{bail, Result};
use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};

/// A parsed tabletop dice expression: `count` dice with `sides` faces each,
/// plus a constant `modifier`.
///
/// Parsing follows the usual `NdS+M` notation: `3d6 + 1`, `1d100`, `1d4-1`,
/// `100d2`. Once parsed, a `DiceRoll` is an immutable value; it holds no
/// generator state of its own, so every call to [`DiceRoll::roll`] advances
/// the supplied generator by exactly `count` draws.
///
/// # Example
/// ```
/// # use tumble::{DiceRoll, Xoshiro256PlusPlus};
/// let dice: DiceRoll = "3d6 + 1".parse().unwrap();
/// assert_eq!(dice, DiceRoll::new(3, 6, 1));
///
/// let mut rng = Xoshiro256PlusPlus::new(12345);
/// let total = dice.roll(&mut rng);
/// assert!(dice.min() <= total && total <= dice.max());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceRoll {
    count: i32,
    sides: i32,
    modifier: i32,
}

impl DiceRoll {
    /// Creates a dice expression directly from its three components.
    pub const fn new(count: i32, sides: i32, modifier: i32) -> Self {
        Self {
            count,
            sides,
            modifier,
        }
    }

    /// Rolls the dice: draws `count` values uniformly from `[1, sides]`,
    /// sums them, and adds `modifier`.
    ///
    /// Requires `count >= 1` and `sides >= 1`.
    pub fn roll<R: Rng>(&self, rng: &mut R) -> i32 {
        let die = Uniform::new_inclusive(1, self.sides);

        let mut total = self.modifier;
        for _ in 0..self.count {
            total += die.sample(rng);
        }
        total
    }

    /// Smallest total a roll can produce.
    pub const fn min(&self) -> i32 {
        self.count + self.modifier
    }

    /// Largest total a roll can produce.
    pub const fn max(&self) -> i32 {
        self.count * self.sides + self.modifier
    }
}

impl FromStr for DiceRoll {
    type Err = anyhow::Error;

    /// Parses dice notation matching `^\s*(\d+)d(\d+)(\s*[+-]\s*\d+)?`.
    ///
    /// The modifier's sign comes from the separator character; text after a
    /// complete match is ignored. A count or side count of zero is rejected,
    /// so a successfully parsed expression always satisfies the `count >= 1`
    /// and `sides >= 1` preconditions of [`DiceRoll::roll`].
    fn from_str(s: &str) -> Result<Self> {
        let Some((count, rest)) = s.trim_start().split_once('d') else {
            bail!("no 'd' separator in dice expression {s:?}");
        };

        if count.is_empty() || !count.bytes().all(|b| b.is_ascii_digit()) {
            bail!("invalid die count in dice expression {s:?}");
        }
        let count: i32 = count.parse()?;
        if count == 0 {
            bail!("die count must be at least 1 in dice expression {s:?}");
        }

        let sides_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if sides_end == 0 {
            bail!("missing side count in dice expression {s:?}");
        }
        let sides: i32 = rest[..sides_end].parse()?;
        if sides == 0 {
            bail!("side count must be at least 1 in dice expression {s:?}");
        }

        let mut modifier = 0;
        let tail = rest[sides_end..].trim_start();
        if let Some(digits) = tail.strip_prefix(['+', '-']) {
            let digits = digits.trim_start();
            let mod_end = digits
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(digits.len());
            if mod_end == 0 {
                bail!("missing modifier digits in dice expression {s:?}");
            }

            modifier = digits[..mod_end].parse()?;
            if tail.starts_with('-') {
                modifier = -modifier;
            }
        }

        Ok(Self::new(count, sides, modifier))
    }
}
