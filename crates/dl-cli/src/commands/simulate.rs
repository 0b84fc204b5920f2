//! Replay a script of commands without challenges.

use std::io::Read;
use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use dl_fiction::{FictionError, FictionResult, GameSession, TurnReport};

use super::{SessionOptions, load_world, wrap_words};

pub fn run(script: &Path, options: &SessionOptions<'_>, json: bool) -> Result<(), String> {
    let world = load_world(options.world)?;
    let text = read_script(script)?;
    let config = options.config(&world).with_simulation(true);
    let mut session = GameSession::new(world, config).map_err(|e| e.to_string())?;

    for line in script_lines(&text) {
        if !json {
            println!("{} {}", ">".dimmed(), line.bold());
        }
        match step(&mut session, line) {
            Ok(report) => {
                if !json && !report.message.is_empty() {
                    println!("{}", wrap_words(&report.message));
                }
            }
            Err(FictionError::GameOver(state)) => {
                if !json {
                    println!("{}", format!("Game already over ({state}).").dimmed());
                }
                break;
            }
            Err(e) if e.is_recoverable() => {
                if !json {
                    println!("{}", wrap_words(&e.to_string()).yellow());
                }
            }
            Err(e) => return Err(e.to_string()),
        }
    }

    let summary = session.summary();
    if json {
        let out = serde_json::to_string_pretty(&summary).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!();
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["State", "Score", "Turns left", "Location", "Inventory", "Logged"]);
    table.add_row(vec![
        summary.state.to_string(),
        summary.score.to_string(),
        summary.turns_remaining.to_string(),
        summary.location.to_string(),
        summary.inventory.join(", "),
        summary.turns_logged.to_string(),
    ]);
    println!("{table}");

    Ok(())
}

fn read_script(path: &Path) -> Result<String, String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| e.to_string())?;
        return Ok(text);
    }
    std::fs::read_to_string(path).map_err(|e| format!("cannot read '{}': {e}", path.display()))
}

/// Non-empty lines that are not `#` comments.
fn script_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

/// `drop <item>` names the item inline; everything else goes through the
/// normal input path.
fn step(session: &mut GameSession, line: &str) -> FictionResult<TurnReport> {
    let line = line.trim().to_lowercase();
    match line.strip_prefix("drop ") {
        Some(item) => session.drop_item(Some(item)),
        None => session.process(&line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_blank_lines_skipped() {
        let lines: Vec<_> = script_lines("# route\n\ngo west\n  look  \n").collect();
        assert_eq!(lines, vec!["go west", "look"]);
    }

    #[test]
    fn inline_drop_names_the_item() {
        let world = load_world(None).unwrap();
        let config = dl_fiction::SessionConfig::default()
            .with_start(dl_core::LocationId(4))
            .with_simulation(true);
        let mut session = GameSession::new(world, config).unwrap();
        step(&mut session, "tcard").unwrap();
        let err = step(&mut session, "Drop TCard").unwrap_err();
        assert!(matches!(
            err,
            FictionError::IllegalAction(dl_fiction::IllegalAction::WrongDropLocation { .. })
        ));
    }
}
