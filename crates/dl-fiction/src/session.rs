//! Play session: the turn engine.
//!
//! A [`GameSession`] owns the world, the player, and the event log for the
//! whole game. Each accepted command runs one turn: apply the effect, record
//! the turn, then check the end conditions in a fixed order (submission,
//! time, turns, quit).

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, warn};

use dl_core::{LocationId, World};

use crate::challenge::{AlwaysGrant, Challenge, ChallengeResolver, GateKind};
use crate::clock::{Clock, SystemClock};
use crate::config::SessionConfig;
use crate::error::{FictionError, FictionResult, IllegalAction};
use crate::event_log::EventLog;
use crate::parser::{Classified, Command, MenuAction, classify, normalise, suggest_command};
use crate::player::PlayerState;
use crate::state::{GameState, LossReason};
use crate::undo::{self, PendingUndo, UndoTarget};

/// What the player sees at the start of a turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneView {
    /// Current location.
    pub location: LocationId,
    /// Long text on the first visit, brief text afterwards.
    pub description: String,
    /// Whether this is the first time the location is shown.
    pub first_visit: bool,
    /// Exit commands available here.
    pub exits: Vec<String>,
    /// Items lying here.
    pub items: Vec<String>,
    /// Turns left.
    pub turns_remaining: u32,
    /// Wall-clock time left.
    pub time_remaining: Duration,
    /// Session state.
    pub outcome: GameState,
}

/// Result of one accepted command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnReport {
    /// The command that ran.
    pub command: Command,
    /// Text for the player.
    pub message: String,
    /// Session state after the turn.
    pub state: GameState,
}

/// End-of-session numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    /// Final state.
    pub state: GameState,
    /// Final score.
    pub score: i32,
    /// Turns left.
    pub turns_remaining: u32,
    /// Where the player ended up.
    pub location: LocationId,
    /// Items carried.
    pub inventory: Vec<String>,
    /// Turns recorded in the event log.
    pub turns_logged: usize,
}

/// What a command did, before the end conditions are checked.
struct Effect {
    message: String,
    pending: PendingUndo,
    won: bool,
    quit: bool,
    failure: Option<(String, u32)>,
}

impl Effect {
    fn read_only(message: String) -> Self {
        Self {
            message,
            pending: PendingUndo::Other,
            won: false,
            quit: false,
            failure: None,
        }
    }

    fn changed(message: String, pending: PendingUndo) -> Self {
        Self {
            pending,
            ..Self::read_only(message)
        }
    }
}

/// An interactive fiction session.
pub struct GameSession {
    world: World,
    player: PlayerState,
    log: EventLog,
    config: SessionConfig,
    state: GameState,
    pending: PendingUndo,
    challenges: Box<dyn ChallengeResolver>,
    clock: Box<dyn Clock>,
}

impl GameSession {
    /// Create a new session.
    ///
    /// Fails if the configuration names a location or item the world does
    /// not have.
    pub fn new(world: World, config: SessionConfig) -> FictionResult<Self> {
        world.location(config.start_location)?;
        world.location(config.home_location)?;
        for name in &config.required_items {
            world.item(name)?;
        }
        for gate in &config.gates {
            world.item(&gate.item)?;
            world.location(gate.location)?;
            if let GateKind::AccessToken { token } = &gate.kind {
                world.item(token)?;
            }
        }
        if let Some(refund) = &config.token_refund {
            world.item(&refund.item)?;
            world.item(&refund.token)?;
        }

        for location in world.locations() {
            for exit in location.exits.keys() {
                if MenuAction::parse(exit).is_some() {
                    warn!(location = %location.id, %exit, "exit is shadowed by a menu action");
                }
            }
        }

        let mut player = PlayerState::new(config.start_location, config.turn_budget);
        player.simulation = config.simulation;

        Ok(Self {
            world,
            player,
            log: EventLog::new(),
            config,
            state: GameState::Running,
            pending: PendingUndo::Start,
            challenges: Box::new(AlwaysGrant),
            clock: Box::new(SystemClock::start()),
        })
    }

    /// Use a different challenge resolver.
    pub fn with_resolver(mut self, resolver: impl ChallengeResolver + 'static) -> Self {
        self.challenges = Box::new(resolver);
        self
    }

    /// Use a different clock.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Get the world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the player state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Get the event log.
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Get the configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Current session state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// How the previous command would be undone.
    pub fn pending_undo(&self) -> &PendingUndo {
        &self.pending
    }

    /// Wall-clock time left.
    pub fn time_remaining(&self) -> Duration {
        self.config.time_budget.saturating_sub(self.clock.elapsed())
    }

    /// Describe the current location. Marks it as visited.
    pub fn scene(&mut self) -> FictionResult<SceneView> {
        let location = self.world.location(self.player.location)?;
        let first_visit = self.player.visit(location.id);
        let description = if first_visit {
            location.long_description.clone()
        } else {
            location.brief_description.clone()
        };

        Ok(SceneView {
            location: location.id,
            description,
            first_visit,
            exits: location.exits.keys().cloned().collect(),
            items: location.items.keys().cloned().collect(),
            turns_remaining: self.player.turns_remaining,
            time_remaining: self.time_remaining(),
            outcome: self.state,
        })
    }

    /// Classify input at the current location without running it.
    pub fn classify(&self, input: &str) -> FictionResult<Classified> {
        let location = self.world.location(self.player.location)?;
        Ok(classify(input, location))
    }

    /// Process one line of player input.
    pub fn process(&mut self, input: &str) -> FictionResult<TurnReport> {
        self.ensure_running()?;

        match self.classify(input)? {
            Classified::Menu(MenuAction::Drop) => self.drop_item(None),
            Classified::Menu(action) => self.execute(Command::Menu(action)),
            Classified::Item(name) => self.execute(Command::Take(name)),
            Classified::Exit(name) => self.execute(Command::Go(name)),
            Classified::Invalid(input) => {
                let location = self.world.location(self.player.location)?;
                let suggestion = suggest_command(location, &input);
                Err(FictionError::InvalidCommand { input, suggestion })
            }
        }
    }

    /// Drop a carried item. `None` is a `drop` with no item named yet.
    pub fn drop_item(&mut self, item: Option<&str>) -> FictionResult<TurnReport> {
        self.ensure_running()?;

        match item {
            Some(name) => self.execute(Command::Drop(normalise(name))),
            None if self.player.inventory().is_empty() => {
                Err(IllegalAction::EmptyInventory.into())
            }
            None => Err(IllegalAction::DropWhat.into()),
        }
    }

    /// Run a resolved command as one turn.
    pub fn execute(&mut self, command: Command) -> FictionResult<TurnReport> {
        self.ensure_running()?;

        let started_in = self.player.location;
        let effect = match &command {
            Command::Menu(MenuAction::Undo) => return self.undo(),
            Command::Menu(MenuAction::Drop) => return self.drop_item(None),
            Command::Menu(MenuAction::Look) => self.look()?,
            Command::Menu(MenuAction::Inventory) => Effect::read_only(self.inventory_text()),
            Command::Menu(MenuAction::Score) => {
                Effect::read_only(format!("Current score: {}", self.player.score))
            }
            Command::Menu(MenuAction::Log) => Effect::read_only(self.log.export_text()),
            Command::Menu(MenuAction::Quit) => Effect {
                quit: true,
                ..Effect::read_only("You give up on the assignment.".to_string())
            },
            Command::Menu(MenuAction::Submit) => self.submit()?,
            Command::Drop(item) => self.deposit(item)?,
            Command::Take(item) => self.take(item)?,
            Command::Go(exit) => self.go(exit)?,
        };

        let description = self.world.location(started_in)?.long_description.clone();
        self.log.append(started_in, &description, &command.label());
        debug!(%command, location = %started_in, "command accepted");

        let failure = effect.failure.clone();
        let report = self.finish_turn(command, effect);

        match failure {
            Some((item, turns_cost)) => Err(FictionError::ChallengeFailure { item, turns_cost }),
            None => Ok(report),
        }
    }

    /// End-of-session numbers.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            state: self.state,
            score: self.player.score,
            turns_remaining: self.player.turns_remaining,
            location: self.player.location,
            inventory: self
                .player
                .held_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            turns_logged: self.log.len(),
        }
    }

    fn ensure_running(&self) -> FictionResult<()> {
        if self.state.is_terminal() {
            Err(FictionError::GameOver(self.state))
        } else {
            Ok(())
        }
    }

    /// Check the end conditions and remember how to undo the turn.
    fn finish_turn(&mut self, command: Command, effect: Effect) -> TurnReport {
        let elapsed = self.clock.elapsed();

        self.state = if effect.won {
            GameState::Won
        } else if elapsed >= self.config.time_budget {
            GameState::Lost(LossReason::TimeExhausted)
        } else if self.player.turns_remaining == 0 && self.player.score < self.config.passing_score
        {
            GameState::Lost(LossReason::TurnsExhausted)
        } else if effect.quit {
            GameState::Lost(LossReason::Quit)
        } else {
            GameState::Running
        };

        if self.state.is_terminal() {
            info!(
                state = %self.state,
                score = self.player.score,
                turns = self.player.turns_remaining,
                "session ended"
            );
        } else {
            self.pending = effect.pending;
        }

        TurnReport {
            command,
            message: effect.message,
            state: self.state,
        }
    }

    // -----------------------------------------------------------------------
    // Effects
    // -----------------------------------------------------------------------

    fn look(&self) -> FictionResult<Effect> {
        let location = self.world.location(self.player.location)?;
        Ok(Effect::read_only(location.long_description.clone()))
    }

    fn inventory_text(&self) -> String {
        if self.player.inventory().is_empty() {
            return "Your inventory is empty.".to_string();
        }
        let mut out = "You currently have:".to_string();
        for item in self.player.inventory() {
            out.push_str(&format!("\n  - {}: {}", item.name, item.description));
        }
        out
    }

    fn submit(&self) -> FictionResult<Effect> {
        let home = self.config.home_location;
        let at_home = self.player.location == home;
        let location = self.world.location(home)?;
        let complete = self
            .config
            .required_items
            .iter()
            .all(|name| self.player.holds(name) || location.has_item(name));

        if !(at_home && complete) {
            return Err(IllegalAction::CannotSubmit {
                home,
                required: self.config.required_items.clone(),
            }
            .into());
        }

        Ok(Effect {
            won: true,
            ..Effect::read_only(format!(
                "You've successfully submitted the assignment on time. Congratulations!!\nFinal score: {}",
                self.player.score
            ))
        })
    }

    fn deposit(&mut self, item: &str) -> FictionResult<Effect> {
        if self.player.inventory().is_empty() {
            return Err(IllegalAction::EmptyInventory.into());
        }
        let here = self.player.location;
        let location = self.world.location_mut(here)?;
        let points = self.player.deposit(location, item)?;

        Ok(Effect::changed(
            format!("You dropped the {item}! You got {points} points!"),
            PendingUndo::Deposited {
                item: item.to_string(),
                location: here,
                points,
            },
        ))
    }

    fn go(&mut self, exit: &str) -> FictionResult<Effect> {
        let from = self.player.location;
        let destination = self
            .world
            .location(from)?
            .exit(exit)
            .ok_or_else(|| FictionError::InvalidCommand {
                input: exit.to_string(),
                suggestion: None,
            })?;

        let before = self.player.turns_remaining;
        self.player.location = destination;
        self.player.spend_turns(1);

        Ok(Effect::changed(
            format!("You {exit}."),
            PendingUndo::Moved {
                from,
                exit: exit.to_string(),
                turns_spent: before - self.player.turns_remaining,
            },
        ))
    }

    fn take(&mut self, item: &str) -> FictionResult<Effect> {
        let here = self.player.location;
        if !self.world.location(here)?.has_item(item) {
            return Err(FictionError::InvalidCommand {
                input: item.to_string(),
                suggestion: None,
            });
        }

        let gate = if self.player.simulation {
            None
        } else {
            self.config.gate_for(item, here).cloned()
        };

        let Some(gate) = gate else {
            return self.grant(item, String::new(), None);
        };

        match gate.kind {
            GateKind::AccessToken { token } => {
                if self.player.remove_item(&token).is_some() {
                    let prefix = format!("You hand over your {token}. ");
                    self.grant(item, prefix, Some(token))
                } else {
                    Ok(Self::failed(
                        item,
                        0,
                        format!("You need your {token} to get the {item}."),
                    ))
                }
            }
            kind => {
                let outcome = self.challenges.resolve(&Challenge {
                    item: item.to_string(),
                    kind,
                });
                self.player.spend_turns(outcome.turns_cost);
                debug!(%item, granted = outcome.granted, cost = outcome.turns_cost, "challenge resolved");
                if outcome.granted {
                    self.grant(item, "You won the challenge! ".to_string(), None)
                } else {
                    Ok(Self::failed(
                        item,
                        outcome.turns_cost,
                        format!("You lost the challenge for the {item}. Try again."),
                    ))
                }
            }
        }
    }

    fn grant(
        &mut self,
        item: &str,
        prefix: String,
        token_spent: Option<String>,
    ) -> FictionResult<Effect> {
        let here = self.player.location;
        let location = self.world.location_mut(here)?;
        let points = self.player.pickup(location, item)?;
        let description = self.world.item(item)?.description.clone();

        Ok(Effect::changed(
            format!("{prefix}You picked up the {item}!\n{description}"),
            PendingUndo::PickedUp {
                item: item.to_string(),
                location: here,
                points,
                token_spent,
            },
        ))
    }

    fn failed(item: &str, turns_cost: u32, message: String) -> Effect {
        Effect {
            failure: Some((item.to_string(), turns_cost)),
            ..Effect::read_only(message)
        }
    }

    fn undo(&mut self) -> FictionResult<TurnReport> {
        let message = undo::apply(
            &self.pending,
            UndoTarget {
                world: &mut self.world,
                player: &mut self.player,
                log: &mut self.log,
                refund: self.config.token_refund.as_ref(),
            },
        )?;
        debug!("undo applied");
        Ok(self.finish_turn(
            Command::Menu(MenuAction::Undo),
            Effect::changed(message, PendingUndo::Undone),
        ))
    }
}
