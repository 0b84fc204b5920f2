//! Guess a hidden fixed-length word with per-letter feedback.

use std::fmt;

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::{MinigameError, MinigameResult};

/// Feedback for one letter of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterFeedback {
    /// Right letter, right position.
    Exact,
    /// Letter is in the word somewhere else.
    Misplaced,
    /// Letter is not in the word.
    Absent,
}

impl LetterFeedback {
    /// Three-character marker used in the terminal.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Exact => "-O-",
            Self::Misplaced => "-/-",
            Self::Absent => "-X-",
        }
    }
}

impl fmt::Display for LetterFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// Score a guess letter by letter.
///
/// Letters are judged independently: a repeated letter is `Misplaced` every
/// time it appears in the goal, even if the goal holds it only once.
pub fn score_guess(guess: &str, goal: &str) -> Vec<LetterFeedback> {
    let goal_chars: Vec<char> = goal.chars().collect();
    guess
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if goal_chars.get(i) == Some(&c) {
                LetterFeedback::Exact
            } else if goal_chars.contains(&c) {
                LetterFeedback::Misplaced
            } else {
                LetterFeedback::Absent
            }
        })
        .collect()
}

/// Result of one accepted guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    /// Per-letter feedback.
    pub feedback: Vec<LetterFeedback>,
    /// Whether the guess was the goal.
    pub solved: bool,
    /// Guesses still available.
    pub guesses_left: u32,
}

/// A running word-guess game.
#[derive(Debug, Clone)]
pub struct WordGuess {
    goal: String,
    dictionary: Vec<String>,
    guesses_left: u32,
    solved: bool,
}

impl WordGuess {
    /// Start a game with a known goal.
    pub fn new(goal: impl Into<String>, dictionary: Vec<String>, max_guesses: u32) -> Self {
        Self {
            goal: goal.into().to_lowercase(),
            dictionary,
            guesses_left: max_guesses,
            solved: false,
        }
    }

    /// Start a game with a goal drawn from the dictionary.
    pub fn random(
        rng: &mut StdRng,
        dictionary: Vec<String>,
        max_guesses: u32,
    ) -> MinigameResult<Self> {
        if dictionary.is_empty() {
            return Err(MinigameError::NotEnoughWords {
                needed: 1,
                found: 0,
            });
        }
        let goal = dictionary[rng.random_range(0..dictionary.len())].clone();
        Ok(Self::new(goal, dictionary, max_guesses))
    }

    /// Length every guess must have.
    pub fn word_length(&self) -> usize {
        self.goal.chars().count()
    }

    /// The hidden word. Only for reveal after the game ends.
    pub fn goal(&self) -> &str {
        &self.goal
    }

    /// Submit a guess.
    ///
    /// Words of the wrong length or outside the dictionary are rejected and
    /// do not use up a guess.
    pub fn guess(&mut self, word: &str) -> MinigameResult<GuessResult> {
        if self.is_over() {
            return Err(MinigameError::GameOver);
        }

        let word = word.trim().to_lowercase();
        if word.chars().count() != self.word_length() || !self.dictionary.contains(&word) {
            return Err(MinigameError::InvalidWord(word, self.word_length()));
        }

        self.guesses_left -= 1;
        self.solved = word == self.goal;
        Ok(GuessResult {
            feedback: score_guess(&word, &self.goal),
            solved: self.solved,
            guesses_left: self.guesses_left,
        })
    }

    /// Whether the goal was found.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Whether the game accepts no further guesses.
    pub fn is_over(&self) -> bool {
        self.solved || self.guesses_left == 0
    }
}
