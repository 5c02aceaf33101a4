use serde::{Deserialize, Serialize};

/// Company fundamentals as returned by the OVERVIEW endpoint.
///
/// Every field is optional on the wire. A throttled call still answers
/// with HTTP 200, carrying only `Note` or `Information`, so a missing
/// `name` is the signal that the provider refused the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyOverview {
    #[serde(rename = "Symbol")]
    pub symbol: Option<String>,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Exchange")]
    pub exchange: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "Industry")]
    pub industry: Option<String>,
    #[serde(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "Sector")]
    pub sector: Option<String>,
    #[serde(rename = "AssetType")]
    pub asset_type: Option<String>,
    #[serde(rename = "Currency")]
    pub currency: Option<String>,

    #[serde(rename = "Error Message", skip_serializing)]
    pub error_message: Option<String>,
    #[serde(rename = "Note", skip_serializing)]
    pub note: Option<String>,
    #[serde(rename = "Information", skip_serializing)]
    pub information: Option<String>,
}

impl CompanyOverview {
    /// True when the provider answered with a throttling notice instead of data.
    pub fn is_throttled(&self) -> bool {
        self.name.is_none() && (self.note.is_some() || self.information.is_some())
    }
}
