/// Application layer - use cases, DTOs, read models and factories
///
/// Orchestrates the hierarchy domain services and reaches the backend,
/// console and filesystem only through outbound ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;
