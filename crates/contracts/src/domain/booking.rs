use serde::{Deserialize, Serialize};

/// Payment fields carried by a service booking record.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentTerms {
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub advance_paid: f64,
}
