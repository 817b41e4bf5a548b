/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) are the infrastructure interfaces the
/// application core depends on. Callers drive the use cases directly.
pub mod outbound;
