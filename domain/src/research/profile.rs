//! Company profile record written by the `company` command.

use crate::extraction::UNKNOWN;
use serde::{Deserialize, Serialize};

/// Facts gathered about one company (persisted as JSON)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub company_name: String,
    pub website: String,
    pub owner: String,
    pub products_services: String,
    /// False when no website could be matched to the exact name
    pub exact_match: bool,
}

impl CompanyProfile {
    /// Profile for a company whose website could not be matched
    pub fn unmatched(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            website: UNKNOWN.to_string(),
            owner: UNKNOWN.to_string(),
            products_services: UNKNOWN.to_string(),
            exact_match: false,
        }
    }

    /// Profile for a company whose website was matched
    pub fn matched(
        company_name: impl Into<String>,
        website: impl Into<String>,
        owner: impl Into<String>,
        products_services: impl Into<String>,
    ) -> Self {
        Self {
            company_name: company_name.into(),
            website: website.into(),
            owner: owner.into(),
            products_services: products_services.into(),
            exact_match: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmatched_profile_is_all_unknown() {
        let profile = CompanyProfile::unmatched("Nowhere Ltd");
        assert_eq!(profile.website, "Unknown");
        assert_eq!(profile.owner, "Unknown");
        assert_eq!(profile.products_services, "Unknown");
        assert!(!profile.exact_match);
    }

    #[test]
    fn test_profile_json_keys() {
        let profile = CompanyProfile::matched("Acme", "acme.com", "Wile E.", "Anvils.");
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["company_name"], "Acme");
        assert_eq!(json["website"], "acme.com");
        assert_eq!(json["owner"], "Wile E.");
        assert_eq!(json["products_services"], "Anvils.");
        assert_eq!(json["exact_match"], true);
    }
}
