//! Rock, paper, scissors played to a fixed number of wins.

use std::fmt;

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::{MinigameError, MinigameResult};

/// One of the three symmetric choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    /// Beats scissors.
    Rock,
    /// Beats rock.
    Paper,
    /// Beats paper.
    Scissors,
}

impl Hand {
    /// All hands, in a fixed order.
    pub const ALL: [Hand; 3] = [Hand::Rock, Hand::Paper, Hand::Scissors];

    /// Parse a hand from player input.
    pub fn parse(s: &str) -> MinigameResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "rock" | "r" => Ok(Self::Rock),
            "paper" | "p" => Ok(Self::Paper),
            "scissors" | "s" => Ok(Self::Scissors),
            other => Err(MinigameError::InvalidHand(other.to_string())),
        }
    }

    /// Pick a hand uniformly at random.
    pub fn random(rng: &mut StdRng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Whether this hand beats the other one.
    pub fn beats(self, other: Hand) -> bool {
        matches!(
            (self, other),
            (Hand::Rock, Hand::Scissors) | (Hand::Paper, Hand::Rock) | (Hand::Scissors, Hand::Paper)
        )
    }

    /// Lowercase display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of one round from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    /// Player took the round.
    Win,
    /// Opponent took the round.
    Loss,
    /// Same hand, nobody scores.
    Tie,
}

/// Decide a single round.
pub fn judge(player: Hand, opponent: Hand) -> RoundResult {
    if player == opponent {
        RoundResult::Tie
    } else if player.beats(opponent) {
        RoundResult::Win
    } else {
        RoundResult::Loss
    }
}

/// A match that ends as soon as either side reaches `wins_needed`.
///
/// Ties are replayed, so a best-of-five match uses `wins_needed = 3`.
#[derive(Debug, Clone)]
pub struct MatchingGame {
    wins_needed: u32,
    player: u32,
    opponent: u32,
}

impl MatchingGame {
    /// Start a match.
    pub fn new(wins_needed: u32) -> Self {
        Self {
            wins_needed: wins_needed.max(1),
            player: 0,
            opponent: 0,
        }
    }

    /// A best-of-five match.
    pub fn best_of_five() -> Self {
        Self::new(3)
    }

    /// Play a round with both hands given.
    pub fn play_round(&mut self, player: Hand, opponent: Hand) -> MinigameResult<RoundResult> {
        if self.is_over() {
            return Err(MinigameError::GameOver);
        }
        let result = judge(player, opponent);
        match result {
            RoundResult::Win => self.player += 1,
            RoundResult::Loss => self.opponent += 1,
            RoundResult::Tie => {}
        }
        Ok(result)
    }

    /// Current score as (player, opponent).
    pub fn score(&self) -> (u32, u32) {
        (self.player, self.opponent)
    }

    /// Whether either side has enough wins.
    pub fn is_over(&self) -> bool {
        self.player >= self.wins_needed || self.opponent >= self.wins_needed
    }

    /// Whether the player won the match.
    pub fn player_won(&self) -> bool {
        self.player >= self.wins_needed
    }
}
