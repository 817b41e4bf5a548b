use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Back-office module that owns an approval hierarchy.
///
/// Each module scopes its hierarchy by a different context key and
/// uses its own backend endpoints; everything else is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HierarchyModule {
    /// Custom duty requests, scoped by company
    CustomDuty,
    /// Import payments (IMT), scoped by import type and scope
    ImportPayment,
    /// Journal vouchers, scoped by requester
    Jvm,
    /// Credit deviations, scoped by channel and region
    CreditDeviation,
}

impl HierarchyModule {
    pub fn all() -> &'static [HierarchyModule] {
        &[
            HierarchyModule::CustomDuty,
            HierarchyModule::ImportPayment,
            HierarchyModule::Jvm,
            HierarchyModule::CreditDeviation,
        ]
    }

    /// Stable identifier used on the command line, in config files and in endpoint paths
    pub fn slug(&self) -> &'static str {
        match self {
            HierarchyModule::CustomDuty => "custom-duty",
            HierarchyModule::ImportPayment => "import-payment",
            HierarchyModule::Jvm => "jvm",
            HierarchyModule::CreditDeviation => "credit-deviation",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            HierarchyModule::CustomDuty => "Custom Duty",
            HierarchyModule::ImportPayment => "Import Payment",
            HierarchyModule::Jvm => "Journal Voucher",
            HierarchyModule::CreditDeviation => "Credit Deviation",
        }
    }

    /// Wire names of the context fields that scope this module's hierarchy, in order
    pub fn context_fields(&self) -> &'static [&'static str] {
        match self {
            HierarchyModule::CustomDuty => &["companyId"],
            HierarchyModule::ImportPayment => &["importTypeId", "scopeId"],
            HierarchyModule::Jvm => &["requesterId"],
            HierarchyModule::CreditDeviation => &["channelId", "regionId"],
        }
    }
}

impl fmt::Display for HierarchyModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for HierarchyModule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "custom-duty" | "customduty" => Ok(HierarchyModule::CustomDuty),
            "import-payment" | "importpayment" | "imt" => Ok(HierarchyModule::ImportPayment),
            "jvm" | "journal-voucher" => Ok(HierarchyModule::Jvm),
            "credit-deviation" | "creditdeviation" => Ok(HierarchyModule::CreditDeviation),
            _ => Err(format!(
                "Invalid module: {}. Please specify one of: custom-duty, import-payment, jvm, credit-deviation",
                s
            )),
        }
    }
}

impl Serialize for HierarchyModule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.slug())
    }
}
