//! Interactive terminal game.

use std::path::Path;

use colored::Colorize;

use dl_fiction::{
    Classified, GameSession, GameState, LossReason, MenuAction, SceneView, TurnReport,
};
use dl_minigames::MinigameConfig;

use super::challenge::TerminalChallenges;
use super::{SessionOptions, load_world, prompt, wrap_words};

pub fn run(options: &SessionOptions<'_>, seed: u64, words: Option<&Path>) -> Result<(), String> {
    let world = load_world(options.world)?;

    let mut minigames = MinigameConfig::default().with_seed(seed);
    if let Some(path) = words {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read '{}': {e}", path.display()))?;
        minigames = minigames.with_dictionary_text(&text);
    }

    let config = options.config(&world);
    let mut session = GameSession::new(world, config)
        .map_err(|e| e.to_string())?
        .with_resolver(TerminalChallenges::new(minigames));

    println!("{}", "Deadline".bold());
    println!(
        "  Get your {} home and submit before the turns or the clock run out.",
        session.config().required_items.join(", ")
    );
    println!(
        "  Menu: {}",
        MenuAction::ALL.map(MenuAction::name).join(", ").dimmed()
    );

    while !session.state().is_terminal() {
        let scene = session.scene().map_err(|e| e.to_string())?;
        print_scene(&scene);

        let Some(line) = prompt("> ")? else {
            break;
        };
        if line.is_empty() {
            continue;
        }

        match turn(&mut session, &line)? {
            Ok(report) => {
                if !report.message.is_empty() {
                    println!("{}", wrap_words(&report.message));
                }
            }
            Err(e) if e.is_recoverable() => println!("{}", wrap_words(&e.to_string()).yellow()),
            Err(e) => return Err(e.to_string()),
        }
    }

    print_ending(&session);
    Ok(())
}

/// Run one line of input. A `drop` with a non-empty inventory asks which
/// item to drop first.
fn turn(
    session: &mut GameSession,
    line: &str,
) -> Result<dl_fiction::FictionResult<TurnReport>, String> {
    let is_drop = matches!(
        session.classify(line),
        Ok(Classified::Menu(MenuAction::Drop))
    );
    if !is_drop || session.player().inventory().is_empty() {
        return Ok(session.process(line));
    }

    let held = session.player().held_names().join(", ");
    let Some(item) = prompt(&format!("Drop what? ({held}) "))? else {
        return Ok(session.drop_item(None));
    };
    Ok(session.drop_item(Some(&item)))
}

fn print_scene(scene: &SceneView) {
    println!();
    println!(
        "{} {}",
        format!("LOCATION {}", scene.location).bold(),
        format!(
            "({} turns, {}:{:02} left)",
            scene.turns_remaining,
            scene.time_remaining.as_secs() / 60,
            scene.time_remaining.as_secs() % 60
        )
        .dimmed()
    );
    println!("{}", wrap_words(&scene.description));
    if !scene.items.is_empty() {
        println!("  You see: {}", scene.items.join(", ").cyan());
    }
    println!("  You can: {}", scene.exits.join(", ").cyan());
}

fn print_ending(session: &GameSession) {
    let score = session.player().score;
    println!();
    match session.state() {
        GameState::Won => println!("{}", "You submitted on time!".green().bold()),
        GameState::Lost(LossReason::TurnsExhausted) => {
            println!("{}", "You ran out of turns. The deadline passed.".red().bold())
        }
        GameState::Lost(LossReason::TimeExhausted) => {
            println!("{}", "You ran out of time. The deadline passed.".red().bold())
        }
        GameState::Lost(LossReason::Quit) => println!("{}", "You gave up.".red()),
        GameState::Running => println!("{}", "Game abandoned.".dimmed()),
    }
    println!("  Final score: {score}");
}
