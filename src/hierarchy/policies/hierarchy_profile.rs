use crate::hierarchy::domain::{HierarchyModule, Ordinal};
use crate::shared::Result;

/// How many approvers a level holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApproverCardinality {
    Single,
    Multi,
}

/// Which levels a bulk save submits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitFilter {
    /// Only levels with at least one approver
    SkipEmptyLevels,
    AllLevels,
}

impl SubmitFilter {
    pub fn includes(&self, approver_count: usize) -> bool {
        match self {
            SubmitFilter::SkipEmptyLevels => approver_count > 0,
            SubmitFilter::AllLevels => true,
        }
    }
}

/// Per-module parameters of the shared hierarchy editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HierarchyProfile {
    module: HierarchyModule,
    level_count: u32,
    cardinality: ApproverCardinality,
    submit_filter: SubmitFilter,
}

impl HierarchyProfile {
    pub fn for_module(module: HierarchyModule) -> Self {
        match module {
            HierarchyModule::Jvm => Self {
                module,
                level_count: 3,
                cardinality: ApproverCardinality::Single,
                submit_filter: SubmitFilter::SkipEmptyLevels,
            },
            HierarchyModule::CustomDuty => Self {
                module,
                level_count: 4,
                cardinality: ApproverCardinality::Multi,
                submit_filter: SubmitFilter::SkipEmptyLevels,
            },
            HierarchyModule::ImportPayment | HierarchyModule::CreditDeviation => Self {
                module,
                level_count: 4,
                cardinality: ApproverCardinality::Multi,
                submit_filter: SubmitFilter::AllLevels,
            },
        }
    }

    pub fn module(&self) -> HierarchyModule {
        self.module
    }

    pub fn level_count(&self) -> u32 {
        self.level_count
    }

    pub fn cardinality(&self) -> ApproverCardinality {
        self.cardinality
    }

    pub fn submit_filter(&self) -> SubmitFilter {
        self.submit_filter
    }

    /// Validates a user-supplied level number for this module
    pub fn ordinal(&self, level: i64) -> Result<Ordinal> {
        Ordinal::new(level, self.level_count)
    }
}
