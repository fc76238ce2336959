//! Synthetic note content.

use std::net::Ipv4Addr;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use notepad_core::NoteContent;

/// Supplies the content for the next note the client creates.
pub trait NoteContentSource {
    fn next_content(&mut self) -> NoteContent;
}

const BEER_PREFIXES: &[&str] = &[
    "Old", "Midnight", "Hoppy", "Golden", "Black", "Wild", "Smoked", "Iron", "Foggy", "Northern",
    "Red", "Stone",
];

const BEER_STYLES: &[&str] = &[
    "Stout", "Porter", "Lager", "Pilsner", "IPA", "Pale Ale", "Saison", "Dubbel", "Tripel",
    "Hefeweizen", "Bock", "Kolsch",
];

const FIRST_NAMES: &[&str] = &[
    "Ada", "Grace", "Alan", "Edsger", "Barbara", "Donald", "Margaret", "Ken", "Frances", "Dennis",
    "Radia", "John",
];

const LAST_NAMES: &[&str] = &[
    "Lovelace", "Hopper", "Turing", "Dijkstra", "Liskov", "Knuth", "Hamilton", "Thompson", "Allen",
    "Ritchie", "Perlman", "Backus",
];

/// Random content: a beer-style title, an IPv4 address as the context, a
/// full name as the author and a coin flip for visibility.
pub struct FakeNoteContent {
    rng: StdRng,
}

impl FakeNoteContent {
    /// Seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn pick(&mut self, words: &[&'static str]) -> &'static str {
        words.choose(&mut self.rng).copied().unwrap_or_default()
    }

    fn beer_name(&mut self) -> String {
        format!("{} {}", self.pick(BEER_PREFIXES), self.pick(BEER_STYLES))
    }

    fn ipv4_address(&mut self) -> String {
        Ipv4Addr::from(self.rng.gen::<[u8; 4]>()).to_string()
    }

    fn full_name(&mut self) -> String {
        format!("{} {}", self.pick(FIRST_NAMES), self.pick(LAST_NAMES))
    }
}

impl Default for FakeNoteContent {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteContentSource for FakeNoteContent {
    fn next_content(&mut self) -> NoteContent {
        NoteContent {
            title: self.beer_name(),
            context: self.ipv4_address(),
            author: self.full_name(),
            is_public: self.rng.gen(),
        }
    }
}

/// Always yields the same content.
#[derive(Debug, Clone)]
pub struct FixedNoteContent(pub NoteContent);

impl NoteContentSource for FixedNoteContent {
    fn next_content(&mut self) -> NoteContent {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_content_shapes() {
        let mut source = FakeNoteContent::seeded(7);
        for _ in 0..50 {
            let content = source.next_content();

            let (prefix, style) = content.title.split_once(' ').unwrap();
            assert!(BEER_PREFIXES.contains(&prefix));
            assert!(BEER_STYLES.contains(&style));

            assert!(content.context.parse::<Ipv4Addr>().is_ok());

            let (first, last) = content.author.split_once(' ').unwrap();
            assert!(FIRST_NAMES.contains(&first));
            assert!(LAST_NAMES.contains(&last));
        }
    }

    #[test]
    fn test_seeded_sources_repeat() {
        let mut a = FakeNoteContent::seeded(42);
        let mut b = FakeNoteContent::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.next_content(), b.next_content());
        }
    }

    #[test]
    fn test_visibility_flag_varies() {
        let mut source = FakeNoteContent::seeded(1);
        let flags: Vec<bool> = (0..64).map(|_| source.next_content().is_public).collect();
        assert!(flags.contains(&true));
        assert!(flags.contains(&false));
    }

    #[test]
    fn test_fixed_content_repeats() {
        let content = NoteContent {
            title: "Stout".to_string(),
            context: "10.0.0.1".to_string(),
            author: "Ada".to_string(),
            is_public: true,
        };
        let mut source = FixedNoteContent(content.clone());
        assert_eq!(source.next_content(), content);
        assert_eq!(source.next_content(), content);
    }
}
