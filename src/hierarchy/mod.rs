/// Approval hierarchy domain layer
///
/// Pure, synchronous business logic: the level set model, per-module
/// profiles, the merge of persisted records onto the scaffold, and the
/// editor state machine. Nothing in here performs I/O.
pub mod domain;
pub mod policies;
pub mod services;
