pub mod challenge;
pub mod check;
pub mod play;
pub mod simulate;

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Duration;

use tracing::warn;

use dl_core::{LocationId, World};
use dl_fiction::SessionConfig;

/// The campus shipped with the game.
const BUILTIN_WORLD: &str = include_str!("../../../../worlds/campus.json");

/// Words per line when printing game text.
const WRAP_WIDTH: usize = 25;

/// Session flags as given on the command line.
pub struct SessionOptions<'a> {
    pub world: Option<&'a Path>,
    pub turns: Option<u32>,
    pub minutes: Option<u64>,
    pub passing_score: Option<i32>,
    pub start: Option<u32>,
    pub home: Option<u32>,
    pub required: &'a [String],
}

impl SessionOptions<'_> {
    /// Build the session config, starting from the reference values.
    /// Gates for items the world does not have are left out.
    fn config(&self, world: &World) -> SessionConfig {
        let mut config = SessionConfig::default();
        if let Some(turns) = self.turns {
            config = config.with_turns(turns);
        }
        if let Some(minutes) = self.minutes {
            config = config.with_time_budget(Duration::from_secs(minutes * 60));
        }
        if let Some(score) = self.passing_score {
            config = config.with_passing_score(score);
        }
        if let Some(start) = self.start {
            config = config.with_start(LocationId(start));
        }
        if let Some(home) = self.home {
            config.home_location = LocationId(home);
        }
        if !self.required.is_empty() {
            config.required_items = self
                .required
                .iter()
                .map(|name| name.trim().to_lowercase())
                .collect();
        }

        let (gates, skipped): (Vec<_>, Vec<_>) = config
            .gates
            .clone()
            .into_iter()
            .partition(|gate| world.item(&gate.item).is_ok());
        for gate in &skipped {
            warn!(item = %gate.item, "world has no such item, gate skipped");
        }
        config.with_gates(gates)
    }
}

/// Load a world file, or the built-in campus when no path is given.
fn load_world(path: Option<&Path>) -> Result<World, String> {
    match path {
        Some(path) => {
            World::load(path).map_err(|e| format!("cannot load '{}': {e}", path.display()))
        }
        None => {
            World::from_json_str(BUILTIN_WORLD).map_err(|e| format!("built-in world: {e}"))
        }
    }
}

/// Print a prompt and read one trimmed line. `None` at end of input.
fn prompt(text: &str) -> Result<Option<String>, String> {
    print!("{text}");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Break text into lines of at most [`WRAP_WIDTH`] words. Existing line
/// breaks are kept.
fn wrap_words(text: &str) -> String {
    text.lines()
        .map(|line| {
            line.split_whitespace()
                .collect::<Vec<_>>()
                .chunks(WRAP_WIDTH)
                .map(|chunk| chunk.join(" "))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
