//! Order classification enums

use serde::{Deserialize, Serialize};

// ============================================================================
// Order Method
// ============================================================================

/// 発注方法 - how the order is transmitted to the supplier
///
/// The header's order classification mirrors this value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderMethod {
    #[default]
    Fax,
    JdEdi,
    WgEdi,
    Email,
    Web,
}

impl OrderMethod {
    pub const ALL: [OrderMethod; 5] = [
        OrderMethod::Fax,
        OrderMethod::JdEdi,
        OrderMethod::WgEdi,
        OrderMethod::Email,
        OrderMethod::Web,
    ];

    /// Selector value used by the classification dropdown ("1".."5")
    pub fn code(&self) -> &'static str {
        match self {
            Self::Fax => "1",
            Self::JdEdi => "2",
            Self::WgEdi => "3",
            Self::Email => "4",
            Self::Web => "5",
        }
    }

    /// Display label, e.g. `2:JD(EDI)`
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fax => "1:FAX",
            Self::JdEdi => "2:JD(EDI)",
            Self::WgEdi => "3:WG(EDI)",
            Self::Email => "4:メール",
            Self::Web => "5:WEB",
        }
    }

    /// Resolve a selector value back to a method
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.code() == code.trim())
    }
}

// ============================================================================
// Direct Delivery
// ============================================================================

/// 直送区分 - whether goods ship directly to the end user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DirectDeliveryClass {
    /// 通常
    #[default]
    Normal,
    /// 直送
    Direct,
}

impl DirectDeliveryClass {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "通常",
            Self::Direct => "直送",
        }
    }
}

/// Direct-delivery search option (通常 / 直送 / 全て)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DirectDeliveryFilter {
    Normal,
    Direct,
    /// 全て - imposes no constraint
    #[default]
    All,
}

impl DirectDeliveryFilter {
    /// Parse the radio-button label used by the search form
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "通常" => Some(Self::Normal),
            "直送" => Some(Self::Direct),
            "全て" => Some(Self::All),
            _ => None,
        }
    }

    /// Whether a header with the given class passes this filter
    pub fn accepts(&self, class: DirectDeliveryClass) -> bool {
        match self {
            Self::All => true,
            Self::Normal => class == DirectDeliveryClass::Normal,
            Self::Direct => class == DirectDeliveryClass::Direct,
        }
    }
}
