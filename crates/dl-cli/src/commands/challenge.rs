//! Terminal minigames behind the engine's challenge interface.

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, warn};

use dl_fiction::{Challenge, ChallengeOutcome, ChallengeResolver, GateKind};
use dl_minigames::{
    AnagramRound, Hand, LetterFeedback, MatchingGame, MinigameConfig, RoundResult, WordGuess,
};

use super::prompt;

/// Plays challenges on stdin/stdout with a seeded RNG.
pub struct TerminalChallenges {
    config: MinigameConfig,
    rng: StdRng,
}

impl TerminalChallenges {
    pub fn new(config: MinigameConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self { config, rng }
    }

    fn matching(&mut self, item: &str) -> Result<ChallengeOutcome, String> {
        println!(
            "Someone is sitting next to your {item}. They will only hand it over if you beat them at rock, paper, scissors."
        );
        println!("First to {} wins.", self.config.matching_wins);

        let mut game = MatchingGame::new(self.config.matching_wins);
        while !game.is_over() {
            let Some(line) = prompt("rock, paper or scissors? ")? else {
                return Ok(ChallengeOutcome::failed(1));
            };
            let hand = match Hand::parse(&line) {
                Ok(hand) => hand,
                Err(e) => {
                    println!("{}", e.to_string().yellow());
                    continue;
                }
            };
            let opponent = Hand::random(&mut self.rng);
            let result = game.play_round(hand, opponent).map_err(|e| e.to_string())?;
            let (wins, losses) = game.score();
            let verdict = match result {
                RoundResult::Win => "you win the round".green(),
                RoundResult::Loss => "you lose the round".red(),
                RoundResult::Tie => "a tie".normal(),
            };
            println!("They played {opponent}: {verdict}. ({wins}-{losses})");
        }

        if game.player_won() {
            println!("{}", format!("You won the {item}!").green().bold());
            Ok(ChallengeOutcome::granted(1))
        } else {
            println!("{}", "You lost. Better luck next time.".red());
            Ok(ChallengeOutcome::failed(1))
        }
    }

    fn word_puzzle(&mut self, item: &str) -> Result<ChallengeOutcome, String> {
        println!(
            "The teaching assistant will give you the {item} once you prove you are a real student."
        );

        let mut guess = WordGuess::random(
            &mut self.rng,
            self.config.dictionary.clone(),
            self.config.max_guesses,
        )
        .map_err(|e| e.to_string())?;
        println!(
            "Guess the {}-letter word. {} exact, {} wrong place, {} not in the word.",
            guess.word_length(),
            LetterFeedback::Exact.marker(),
            LetterFeedback::Misplaced.marker(),
            LetterFeedback::Absent.marker(),
        );

        while !guess.is_over() {
            let Some(line) = prompt("guess: ")? else {
                return Ok(ChallengeOutcome::failed(1));
            };
            match guess.guess(&line) {
                Ok(result) => {
                    println!("{}", render_feedback(&line, &result.feedback));
                    if !result.solved {
                        println!("{} guesses left.", result.guesses_left);
                    }
                }
                Err(e) => println!("{}", e.to_string().yellow()),
            }
        }

        if !guess.is_solved() {
            println!("{}", format!("Out of guesses. The word was '{}'.", guess.goal()).red());
            return Ok(ChallengeOutcome::failed(1));
        }
        println!("{}", "Correct! One more round.".green());

        let mut round = AnagramRound::new(
            &mut self.rng,
            &self.config.anagrams,
            self.config.anagram_count,
        )
        .map_err(|e| e.to_string())?;
        println!("Unscramble {} words. One mistake and you are out.", round.len());

        while let Some(scrambled) = round.current().map(str::to_string) {
            let Some(line) = prompt(&format!("{scrambled}: "))? else {
                return Ok(ChallengeOutcome::failed(1));
            };
            if !round.answer(&line).map_err(|e| e.to_string())? {
                println!("{}", "Wrong!".red());
            }
        }

        if round.is_won() {
            println!("{}", format!("You earned the {item}!").green().bold());
            Ok(ChallengeOutcome::granted(1))
        } else {
            Ok(ChallengeOutcome::failed(1))
        }
    }
}

impl ChallengeResolver for TerminalChallenges {
    fn resolve(&mut self, challenge: &Challenge) -> ChallengeOutcome {
        debug!(item = %challenge.item, kind = ?challenge.kind, "starting challenge");
        let result = match &challenge.kind {
            GateKind::MatchingGame => self.matching(&challenge.item),
            GateKind::WordPuzzle => self.word_puzzle(&challenge.item),
            GateKind::AccessToken { .. } => Ok(ChallengeOutcome::granted(0)),
        };
        result.unwrap_or_else(|e| {
            warn!(error = %e, "challenge aborted");
            ChallengeOutcome::failed(1)
        })
    }
}

/// One marker per letter, coloured by verdict.
fn render_feedback(word: &str, feedback: &[LetterFeedback]) -> String {
    word.trim()
        .to_uppercase()
        .chars()
        .zip(feedback)
        .map(|(letter, verdict)| {
            let cell = format!("{letter}{}", verdict.marker());
            match verdict {
                LetterFeedback::Exact => cell.green().to_string(),
                LetterFeedback::Misplaced => cell.yellow().to_string(),
                LetterFeedback::Absent => cell.dimmed().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_has_one_cell_per_letter() {
        colored::control::set_override(false);
        let feedback = dl_minigames::word_guess::score_guess("crane", "react");
        let rendered = render_feedback("crane", &feedback);
        assert_eq!(rendered.split(' ').count(), 5);
        assert!(rendered.starts_with('C'));
        assert!(rendered.contains("-/-"));
    }

    #[test]
    fn access_token_gates_are_not_played_here() {
        let mut challenges = TerminalChallenges::new(MinigameConfig::default());
        let outcome = challenges.resolve(&Challenge {
            item: "lucky mug".to_string(),
            kind: GateKind::AccessToken {
                token: "tcard".to_string(),
            },
        });
        assert_eq!(outcome, ChallengeOutcome::granted(0));
    }
}
