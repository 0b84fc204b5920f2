//! "Did you mean" hints for rejected input.

use strsim::jaro_winkler;

use dl_core::Location;

use super::command::MenuAction;

/// Minimum similarity score for a suggestion (0.0-1.0).
const SUGGEST_THRESHOLD: f64 = 0.8;

/// Every command accepted at a location, menu actions first.
pub fn valid_commands(location: &Location) -> Vec<String> {
    MenuAction::ALL
        .iter()
        .map(|a| a.name().to_string())
        .chain(location.items.keys().cloned())
        .chain(location.exits.keys().cloned())
        .collect()
}

/// Find the valid command closest to the input, if any is close enough.
pub fn suggest_command(location: &Location, input: &str) -> Option<String> {
    if input.is_empty() {
        return None;
    }

    let mut best: Option<(String, f64)> = None;
    for candidate in valid_commands(location) {
        let score = jaro_winkler(input, &candidate);
        if score >= SUGGEST_THRESHOLD && best.as_ref().is_none_or(|(_, s)| score > *s) {
            best = Some((candidate, score));
        }
    }
    best.map(|(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dl_core::LocationId;

    fn hallway() -> Location {
        Location::new(LocationId(1), "Hall.", "A hallway.")
            .with_exit("go north", LocationId(2))
            .with_exit("go east", LocationId(3))
    }

    #[test]
    fn typo_gets_suggestion() {
        let loc = hallway();
        assert_eq!(suggest_command(&loc, "go nort"), Some("go north".to_string()));
        assert_eq!(suggest_command(&loc, "inventry"), Some("inventory".to_string()));
    }

    #[test]
    fn nonsense_gets_nothing() {
        let loc = hallway();
        assert_eq!(suggest_command(&loc, "xyzzy"), None);
        assert_eq!(suggest_command(&loc, ""), None);
    }

    #[test]
    fn valid_commands_include_everything() {
        let commands = valid_commands(&hallway());
        assert_eq!(commands.len(), MenuAction::ALL.len() + 2);
        assert!(commands.contains(&"go east".to_string()));
    }
}
