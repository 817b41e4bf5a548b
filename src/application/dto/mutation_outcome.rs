/// Result of a user-triggered mutation (level toggle or bulk save)
///
/// Failures the user has already been alerted about are outcomes, not
/// errors: the draft is intact and the user may simply try again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The backend accepted the change and the hierarchy was reloaded
    Completed,
    /// The user answered "no" to the confirmation; nothing was sent
    Declined,
    /// The change was rejected or could not be sent; the user was alerted
    Failed { message: String },
}

impl MutationOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, MutationOutcome::Completed)
    }
}
