//! Unscramble a short run of words. One wrong answer ends the round.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::error::{MinigameError, MinigameResult};

/// Shuffle the letters of a word.
pub fn scramble(word: &str, rng: &mut StdRng) -> String {
    let mut letters: Vec<char> = word.chars().collect();
    letters.shuffle(rng);
    letters.into_iter().collect()
}

/// A round of anagrams drawn from a word pool.
#[derive(Debug, Clone)]
pub struct AnagramRound {
    answers: Vec<String>,
    scrambled: Vec<String>,
    position: usize,
    failed: bool,
}

impl AnagramRound {
    /// Draw `count` distinct words from `pool` and scramble each one.
    pub fn new(rng: &mut StdRng, pool: &[String], count: usize) -> MinigameResult<Self> {
        if pool.len() < count {
            return Err(MinigameError::NotEnoughWords {
                needed: count,
                found: pool.len(),
            });
        }

        let mut answers = pool.to_vec();
        answers.shuffle(rng);
        answers.truncate(count);
        let scrambled = answers.iter().map(|w| scramble(w, rng)).collect();

        Ok(Self {
            answers,
            scrambled,
            position: 0,
            failed: false,
        })
    }

    /// The scrambled word waiting for an answer.
    pub fn current(&self) -> Option<&str> {
        if self.is_over() {
            None
        } else {
            self.scrambled.get(self.position).map(String::as_str)
        }
    }

    /// Answer the current word. Comparison ignores case and surrounding space.
    pub fn answer(&mut self, attempt: &str) -> MinigameResult<bool> {
        let Some(expected) = self.answers.get(self.position) else {
            return Err(MinigameError::GameOver);
        };
        if self.failed {
            return Err(MinigameError::GameOver);
        }

        let correct = attempt.trim().eq_ignore_ascii_case(expected);
        if correct {
            self.position += 1;
        } else {
            self.failed = true;
        }
        Ok(correct)
    }

    /// Words answered correctly so far.
    pub fn solved(&self) -> usize {
        self.position
    }

    /// Number of words in the round.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Whether the round has no words.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Whether every word was answered correctly.
    pub fn is_won(&self) -> bool {
        !self.failed && self.position == self.answers.len()
    }

    /// Whether the round accepts no further answers.
    pub fn is_over(&self) -> bool {
        self.failed || self.position == self.answers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn pool() -> Vec<String> {
        ["computer", "library", "lecture", "campus", "student", "project"]
            .iter()
            .map(|w| w.to_string())
            .collect()
    }

    #[test]
    fn scramble_keeps_letters() {
        let mut rng = StdRng::seed_from_u64(1);
        let mixed = scramble("library", &mut rng);
        let mut a: Vec<char> = mixed.chars().collect();
        let mut b: Vec<char> = "library".chars().collect();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
    }

    #[test]
    fn winning_round() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut round = AnagramRound::new(&mut rng, &pool(), 5).unwrap();
        assert_eq!(round.len(), 5);

        let answers = round.answers.clone();
        for answer in &answers {
            assert!(round.current().is_some());
            assert!(round.answer(&answer.to_uppercase()).unwrap());
        }
        assert!(round.is_won());
        assert!(round.current().is_none());
    }

    #[test]
    fn one_miss_ends_the_round() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut round = AnagramRound::new(&mut rng, &pool(), 5).unwrap();
        let first = round.answers[0].clone();
        assert!(round.answer(&first).unwrap());
        assert!(!round.answer("wrong").unwrap());

        assert!(round.is_over());
        assert!(!round.is_won());
        assert_eq!(round.solved(), 1);
        assert_eq!(round.answer("anything"), Err(MinigameError::GameOver));
    }

    #[test]
    fn pool_too_small() {
        let mut rng = StdRng::seed_from_u64(9);
        let err = AnagramRound::new(&mut rng, &pool()[..2], 5).unwrap_err();
        assert_eq!(
            err,
            MinigameError::NotEnoughWords {
                needed: 5,
                found: 2
            }
        );
    }
}
