/// UserInteraction port for questions and blocking notifications
///
/// Used for the yes/no confirmation before a level toggle and for the
/// alert shown when a mutation fails.
pub trait UserInteraction {
    /// Asks a yes/no question; returns true only on an explicit yes
    fn confirm(&self, prompt: &str) -> bool;

    /// Shows a message the user must see before continuing
    fn alert(&self, message: &str);
}
