use serde::{Deserialize, Serialize};

/// Order counts per category. No order entities are modelled client side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTally {
    pub total: u32,
    pub cancelled: u32,
    #[serde(rename = "enRoute", alias = "en_route")]
    pub en_route: u32,
}
