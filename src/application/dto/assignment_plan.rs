use serde::Deserialize;

/// Approver assignments to apply to a hierarchy before a bulk save.
///
/// Read from YAML or TOML:
///
/// ```yaml
/// levels:
///   - level: 1
///     approvers: [u-100, u-101]
///   - level: 2
///     approvers: []
/// ```
///
/// Levels not mentioned keep their current approvers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssignmentPlan {
    pub levels: Vec<PlannedLevel>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlannedLevel {
    pub level: i64,
    #[serde(default)]
    pub approvers: Vec<String>,
}
