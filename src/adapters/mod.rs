/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: the REST backend,
/// console status and prompts, formatters and the filesystem.
pub mod outbound;
