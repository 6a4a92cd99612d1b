//! Random program synthesis.
//!
//! Programs are grown by inserting empty fork placeholders and print
//! placeholders one at a time at uniformly chosen offsets, then naming the
//! prints left to right. Every offset the generator picks keeps the fork
//! tokens intact, so the result always parses.

pub mod difficulty;

pub use difficulty::Difficulty;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::dsl::{EXIT_MARKER, FORK_CHAR};

/// Print names, cycled. `f` and `x` are left out so a print can never be
/// mistaken for a fork or an exit.
pub const PRINT_ALPHABET: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'y', 'z',
];

/// Knobs for one generated program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Fork constructs to insert.
    pub forks: usize,
    /// Print statements to insert.
    pub prints: usize,
    /// Place forks at random offsets (possibly inside each other) rather than
    /// one after another.
    pub nested: bool,
    /// Insert one exit marker.
    pub exit: bool,
    /// Use `f(,)` (with a child argument) instead of `f()`.
    pub else_branch: bool,
    /// Allow two prints to be inserted next to each other.
    pub adjacent_prints: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            forks: 3,
            prints: 4,
            nested: true,
            exit: false,
            else_branch: true,
            adjacent_prints: false,
        }
    }
}

impl GeneratorOptions {
    pub fn new(forks: usize, prints: usize) -> Self {
        Self {
            forks,
            prints,
            ..Self::default()
        }
    }
}

/// A character of the program under construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Glyph {
    Fixed(char),
    /// A print whose character is assigned at the end.
    Pending,
}

/// Seedable program generator.
pub struct Generator<R = ChaCha8Rng> {
    rng: R,
}

impl Generator<ChaCha8Rng> {
    /// Deterministic generator: the same seed yields the same programs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> Generator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Get a mutable reference to the RNG.
    pub fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Synthesize one program.
    pub fn generate(&mut self, options: &GeneratorOptions) -> String {
        let placeholder = if options.else_branch { "f(,)" } else { "f()" };
        let mut code: Vec<Glyph> = Vec::new();

        for _ in 0..options.forks {
            let at = if options.nested {
                self.pick(&fork_offsets(&code, 0))
            } else {
                code.len()
            };
            insert_str(&mut code, at, placeholder);
        }

        if options.exit {
            let min = code.len() / 4;
            let at = self.pick(&fork_offsets(&code, min));
            code.insert(at, Glyph::Fixed(EXIT_MARKER));
        }

        for _ in 0..options.prints {
            let mut offsets = if options.adjacent_prints {
                Vec::new()
            } else {
                print_offsets(&code)
            };
            if offsets.is_empty() {
                offsets = fork_offsets(&code, 0);
            }
            let at = self.pick(&offsets);
            code.insert(at, Glyph::Pending);
        }

        let source = finalize(&code);
        log::debug!("generated {source:?} from {options:?}");
        source
    }

    fn pick(&mut self, offsets: &[usize]) -> usize {
        // Both offset lists always contain the end of the program.
        offsets.choose(&mut self.rng).copied().unwrap_or_default()
    }
}

fn insert_str(code: &mut Vec<Glyph>, at: usize, text: &str) {
    for (k, c) in text.chars().enumerate() {
        code.insert(at + k, Glyph::Fixed(c));
    }
}

/// Offsets at or after `min` that do not split an `f(` token.
fn fork_offsets(code: &[Glyph], min: usize) -> Vec<usize> {
    (min..=code.len())
        .filter(|&i| !splits_fork_token(code, i))
        .collect()
}

/// Fork offsets that are not next to another print placeholder.
fn print_offsets(code: &[Glyph]) -> Vec<usize> {
    (0..=code.len())
        .filter(|&i| !splits_fork_token(code, i))
        .filter(|&i| code.get(i) != Some(&Glyph::Pending))
        .filter(|&i| i == 0 || code.get(i - 1) != Some(&Glyph::Pending))
        .collect()
}

fn splits_fork_token(code: &[Glyph], at: usize) -> bool {
    at > 0
        && code.get(at - 1) == Some(&Glyph::Fixed(FORK_CHAR))
        && code.get(at) == Some(&Glyph::Fixed('('))
}

fn finalize(code: &[Glyph]) -> String {
    let mut next = PRINT_ALPHABET.iter().copied().cycle();
    code.iter()
        .map(|g| match g {
            Glyph::Fixed(c) => *c,
            Glyph::Pending => next.next().unwrap_or('a'),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::Dsl;

    #[test]
    fn zero_everything_is_empty() {
        let mut gen = Generator::seeded(1);
        assert_eq!(gen.generate(&GeneratorOptions::new(0, 0)), "");
    }

    #[test]
    fn prints_only() {
        let mut gen = Generator::seeded(1);
        let src = gen.generate(&GeneratorOptions::new(0, 3));
        assert_eq!(src, "abc");
    }

    #[test]
    fn flat_forks_are_sequential() {
        let mut gen = Generator::seeded(7);
        let opts = GeneratorOptions {
            nested: false,
            ..GeneratorOptions::new(3, 0)
        };
        assert_eq!(gen.generate(&opts), "f(,)f(,)f(,)");
    }

    #[test]
    fn no_else_placeholder() {
        let mut gen = Generator::seeded(7);
        let opts = GeneratorOptions {
            nested: false,
            else_branch: false,
            ..GeneratorOptions::new(2, 0)
        };
        assert_eq!(gen.generate(&opts), "f()f()");
    }

    #[test]
    fn same_seed_same_program() {
        let opts = GeneratorOptions::new(4, 5);
        let a = Generator::seeded(42).generate(&opts);
        let b = Generator::seeded(42).generate(&opts);
        assert_eq!(a, b);
    }

    #[test]
    fn counts_match_options() {
        let mut gen = Generator::seeded(3);
        for _ in 0..50 {
            let src = gen.generate(&GeneratorOptions::new(3, 5));
            let prog = Dsl::parse(&src).unwrap();
            assert_eq!(prog.fork_count(), 3, "{src}");
            assert_eq!(prog.print_count(), 5, "{src}");
        }
    }

    #[test]
    fn prints_are_named_left_to_right() {
        let mut gen = Generator::seeded(11);
        for _ in 0..20 {
            let src = gen.generate(&GeneratorOptions::new(2, 4));
            let prog = Dsl::parse(&src).unwrap();
            assert_eq!(prog.print_chars(), vec!['a', 'b', 'c', 'd'], "{src}");
        }
    }

    #[test]
    fn alphabet_cycles_without_reserved_letters() {
        let mut gen = Generator::seeded(5);
        let src = gen.generate(&GeneratorOptions::new(0, PRINT_ALPHABET.len() + 2));
        assert!(!src.contains(FORK_CHAR));
        assert!(!src.contains(EXIT_MARKER));
        assert!(src.ends_with("ab"));
    }

    #[test]
    fn exit_marker_is_inserted_once() {
        let mut gen = Generator::seeded(9);
        let opts = GeneratorOptions {
            exit: true,
            ..GeneratorOptions::new(4, 4)
        };
        for _ in 0..50 {
            let src = gen.generate(&opts);
            assert_eq!(src.matches(EXIT_MARKER).count(), 1, "{src}");
            assert!(Dsl::parse(&src).is_ok(), "{src}");
        }
    }

    fn has_adjacent_prints(src: &str) -> bool {
        let chars: Vec<char> = src.chars().collect();
        chars
            .windows(2)
            .any(|w| PRINT_ALPHABET.contains(&w[0]) && PRINT_ALPHABET.contains(&w[1]))
    }

    #[test]
    fn prints_are_kept_apart_when_there_is_room() {
        let mut gen = Generator::seeded(1);
        for _ in 0..200 {
            let src = gen.generate(&GeneratorOptions::new(3, 3));
            assert!(!has_adjacent_prints(&src), "{src}");
        }
    }

    #[test]
    fn adjacent_prints_option_allows_neighbours() {
        let mut gen = Generator::seeded(1);
        let opts = GeneratorOptions {
            adjacent_prints: true,
            ..GeneratorOptions::new(2, 5)
        };
        let programs: Vec<String> = (0..50).map(|_| gen.generate(&opts)).collect();
        assert!(programs.iter().any(|src| has_adjacent_prints(src)));
        for src in &programs {
            assert_eq!(Dsl::parse(src).unwrap().print_count(), 5, "{src}");
        }
    }

    #[test]
    fn print_offsets_avoid_pending_neighbours() {
        let code = vec![Glyph::Pending];
        assert!(print_offsets(&code).is_empty());
        assert_eq!(fork_offsets(&code, 0), vec![0, 1]);
    }

    #[test]
    fn fork_token_is_never_split() {
        let mut code = Vec::new();
        insert_str(&mut code, 0, "f(,)");
        assert_eq!(fork_offsets(&code, 0), vec![0, 2, 3, 4]);
    }
}
