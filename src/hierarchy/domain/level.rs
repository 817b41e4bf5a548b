use super::{ApproverId, ApproverRef, Ordinal, RecordId};

/// One step of an approval chain
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    ordinal: Ordinal,
    approvers: Vec<ApproverRef>,
    active: bool,
    record: RecordId,
}

impl Level {
    /// Placeholder level for an ordinal the backend has no record for
    pub fn scaffold(ordinal: Ordinal) -> Self {
        Self {
            ordinal,
            approvers: Vec::new(),
            active: true,
            record: RecordId::pending(),
        }
    }

    pub fn persisted(
        ordinal: Ordinal,
        record: RecordId,
        approvers: Vec<ApproverRef>,
        active: bool,
    ) -> Self {
        Self {
            ordinal,
            approvers,
            active,
            record,
        }
    }

    pub fn ordinal(&self) -> Ordinal {
        self.ordinal
    }

    pub fn approvers(&self) -> &[ApproverRef] {
        &self.approvers
    }

    pub fn approver_ids(&self) -> Vec<ApproverId> {
        self.approvers
            .iter()
            .map(|approver| approver.identity().clone())
            .collect()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Server identifier of this level, absent for scaffold levels
    pub fn backing_id(&self) -> Option<&str> {
        self.record.server_id()
    }

    pub(crate) fn replace_approvers(&mut self, approvers: Vec<ApproverRef>) {
        self.approvers = approvers;
    }
}
