use uuid::Uuid;

/// Client-side identifier for an item that has not been persisted yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalId(Uuid);

impl LocalId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Identity of an item that may or may not have been confirmed by the backend.
///
/// Items created client-side start `Pending` with a local id and become
/// `Confirmed` once the server has assigned a durable identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordId {
    Pending(LocalId),
    Confirmed(String),
}

impl RecordId {
    pub fn pending() -> Self {
        RecordId::Pending(LocalId::generate())
    }

    pub fn confirmed(server_id: impl Into<String>) -> Self {
        RecordId::Confirmed(server_id.into())
    }

    /// The server-assigned identifier, if the backend has confirmed this item
    pub fn server_id(&self) -> Option<&str> {
        match self {
            RecordId::Confirmed(id) => Some(id),
            RecordId::Pending(_) => None,
        }
    }
}
