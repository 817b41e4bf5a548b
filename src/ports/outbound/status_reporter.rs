/// StatusReporter port for reporting what the tool is doing
///
/// This port abstracts status output (e.g., to stderr) so the application
/// layer can log progress and non-fatal failures without touching the console.
pub trait StatusReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports a non-fatal problem that was recovered from
    fn report_warning(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);

    /// Marks the start of a network round trip (e.g., to show a spinner)
    fn begin_activity(&self, _message: &str) {}

    /// Marks the end of the round trip started by `begin_activity`
    fn end_activity(&self) {}
}
