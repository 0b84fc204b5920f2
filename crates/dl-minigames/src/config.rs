//! Configuration shared by the minigames.

/// Five-letter words used when no dictionary file is supplied.
pub const DEFAULT_DICTIONARY: &[&str] = &[
    "apple", "brick", "chalk", "class", "clock", "debug", "essay", "exams",
    "field", "grade", "graph", "index", "lunch", "marks", "notes", "paper", "pizza", "print",
    "quiet", "queue", "relay", "shelf", "slide", "stack", "study", "table", "tutor",
    "water", "while", "write",
];

/// Words scrambled in the anagram round.
pub const DEFAULT_ANAGRAMS: &[&str] = &[
    "computer", "science", "library", "lecture", "campus", "student", "project", "deadline",
];

/// Configuration for the minigames.
#[derive(Debug, Clone)]
pub struct MinigameConfig {
    /// RNG seed for reproducible games.
    pub seed: u64,
    /// Wins needed to take the matching game.
    pub matching_wins: u32,
    /// Length of the hidden word.
    pub word_length: usize,
    /// Guesses allowed in the word-guess game.
    pub max_guesses: u32,
    /// Words in one anagram round.
    pub anagram_count: usize,
    /// Accepted guesses; the hidden word is drawn from these.
    pub dictionary: Vec<String>,
    /// Pool the anagram round draws from.
    pub anagrams: Vec<String>,
}

impl Default for MinigameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            matching_wins: 3,
            word_length: 5,
            max_guesses: 6,
            anagram_count: 5,
            dictionary: filter_words(DEFAULT_DICTIONARY.iter().copied(), 5),
            anagrams: DEFAULT_ANAGRAMS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl MinigameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the dictionary with the words in a text, one per line.
    ///
    /// Lines are trimmed and lowercased; words of the wrong length are skipped.
    pub fn with_dictionary_text(mut self, text: &str) -> Self {
        self.dictionary = filter_words(text.lines(), self.word_length);
        self
    }
}

fn filter_words<'a>(words: impl Iterator<Item = &'a str>, length: usize) -> Vec<String> {
    words
        .map(|w| w.trim().to_lowercase())
        .filter(|w| w.chars().count() == length && w.chars().all(|c| c.is_ascii_alphabetic()))
        .collect()
}
