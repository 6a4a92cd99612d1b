//! Difficulty presets.

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::GeneratorOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Two forks in a row, two or three prints.
    Basic,
    /// Three forks nested at random, three or four prints.
    Nested,
    /// Four nested forks, four prints and an exit.
    Exits,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Basic, Difficulty::Nested, Difficulty::Exits];

    /// Options for one question; the print count may vary between calls.
    pub fn options<R: Rng>(self, rng: &mut R) -> GeneratorOptions {
        match self {
            Difficulty::Basic => GeneratorOptions {
                nested: false,
                ..GeneratorOptions::new(2, pick(rng, &[2, 3]))
            },
            Difficulty::Nested => GeneratorOptions::new(3, pick(rng, &[3, 4])),
            Difficulty::Exits => GeneratorOptions {
                exit: true,
                ..GeneratorOptions::new(4, 4)
            },
        }
    }
}

fn pick<R: Rng>(rng: &mut R, choices: &[usize]) -> usize {
    choices.choose(rng).copied().unwrap_or_default()
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Basic => "basic",
            Difficulty::Nested => "nested",
            Difficulty::Exits => "exits",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "basic" | "1" => Ok(Difficulty::Basic),
            "nested" | "2" => Ok(Difficulty::Nested),
            "exits" | "3" => Ok(Difficulty::Exits),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn presets() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let basic = Difficulty::Basic.options(&mut rng);
        assert_eq!(basic.forks, 2);
        assert!(!basic.nested);
        assert!([2, 3].contains(&basic.prints));

        let nested = Difficulty::Nested.options(&mut rng);
        assert!(nested.nested);
        assert!([3, 4].contains(&nested.prints));

        let exits = Difficulty::Exits.options(&mut rng);
        assert_eq!((exits.forks, exits.prints), (4, 4));
        assert!(exits.exit);
    }

    #[test]
    fn parse_names_and_numbers() {
        assert_eq!("basic".parse::<Difficulty>(), Ok(Difficulty::Basic));
        assert_eq!("2".parse::<Difficulty>(), Ok(Difficulty::Nested));
        assert_eq!("EXITS".parse::<Difficulty>(), Ok(Difficulty::Exits));
        assert!("hard".parse::<Difficulty>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for d in Difficulty::ALL {
            assert_eq!(d.to_string().parse::<Difficulty>(), Ok(d));
        }
    }
}
