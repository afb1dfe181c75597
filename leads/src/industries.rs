use serde::{Deserialize, Serialize};

/// One selectable option in the "business type" dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BusinessType {
    pub value: &'static str,
    pub label: &'static str,
}

const fn bt(value: &'static str, label: &'static str) -> BusinessType {
    BusinessType { value, label }
}

const GENERAL: &[BusinessType] = &[
    bt("professional-services", "Professional Services"),
    bt("ecommerce", "E-commerce"),
    bt("saas", "SaaS / Software"),
    bt("healthcare", "Healthcare"),
    bt("home-services", "Home Services"),
    bt("real-estate", "Real Estate"),
    bt("restaurant", "Restaurant / Hospitality"),
    bt("other", "Other"),
];

const HEALTHCARE: &[BusinessType] = &[
    bt("medical-practice", "Medical Practice"),
    bt("dental", "Dental Office"),
    bt("chiropractic", "Chiropractic"),
    bt("med-spa", "Med Spa"),
    bt("physical-therapy", "Physical Therapy"),
    bt("healthcare", "Other Healthcare"),
    bt("other", "Other"),
];

const HOME_SERVICES: &[BusinessType] = &[
    bt("hvac", "HVAC"),
    bt("plumbing", "Plumbing"),
    bt("roofing", "Roofing"),
    bt("electrical", "Electrical"),
    bt("landscaping", "Landscaping"),
    bt("cleaning", "Cleaning Services"),
    bt("home-services", "Other Home Services"),
    bt("other", "Other"),
];

const RESTAURANT: &[BusinessType] = &[
    bt("full-service", "Full-Service Restaurant"),
    bt("quick-service", "Quick Service / Fast Casual"),
    bt("cafe", "Cafe / Bakery"),
    bt("bar", "Bar / Brewery"),
    bt("catering", "Catering"),
    bt("restaurant", "Other Hospitality"),
    bt("other", "Other"),
];

const REAL_ESTATE: &[BusinessType] = &[
    bt("agent", "Individual Agent"),
    bt("brokerage", "Brokerage"),
    bt("property-management", "Property Management"),
    bt("developer", "Developer / Builder"),
    bt("real-estate", "Other Real Estate"),
    bt("other", "Other"),
];

const AUTOMOTIVE: &[BusinessType] = &[
    bt("auto-repair", "Auto Repair / Garage"),
    bt("dealership", "Dealership"),
    bt("auto-detailing", "Detailing"),
    bt("body-shop", "Collision / Body Shop"),
    bt("other", "Other"),
];

const LEGAL: &[BusinessType] = &[
    bt("personal-injury", "Personal Injury"),
    bt("family-law", "Family Law"),
    bt("criminal-defense", "Criminal Defense"),
    bt("estate-planning", "Estate Planning"),
    bt("professional-services", "Other Legal / Professional"),
    bt("other", "Other"),
];

const ECOMMERCE: &[BusinessType] = &[
    bt("shopify-store", "Shopify Store"),
    bt("marketplace-seller", "Marketplace Seller"),
    bt("dtc-brand", "DTC Brand"),
    bt("ecommerce", "Other E-commerce"),
    bt("other", "Other"),
];

const SAAS: &[BusinessType] = &[
    bt("b2b-saas", "B2B SaaS"),
    bt("b2c-app", "Consumer App"),
    bt("devtools", "Developer Tools"),
    bt("saas", "Other Software"),
    bt("other", "Other"),
];

/// Industry context a landing page is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Industry {
    General,
    Healthcare,
    HomeServices,
    Restaurant,
    RealEstate,
    Automotive,
    Legal,
    Ecommerce,
    Saas,
}

impl Industry {
    pub const ALL: [Industry; 9] = [
        Industry::General,
        Industry::Healthcare,
        Industry::HomeServices,
        Industry::Restaurant,
        Industry::RealEstate,
        Industry::Automotive,
        Industry::Legal,
        Industry::Ecommerce,
        Industry::Saas,
    ];

    /// Options offered in the business type dropdown for this industry.
    pub fn business_types(self) -> &'static [BusinessType] {
        match self {
            Industry::General => GENERAL,
            Industry::Healthcare => HEALTHCARE,
            Industry::HomeServices => HOME_SERVICES,
            Industry::Restaurant => RESTAURANT,
            Industry::RealEstate => REAL_ESTATE,
            Industry::Automotive => AUTOMOTIVE,
            Industry::Legal => LEGAL,
            Industry::Ecommerce => ECOMMERCE,
            Industry::Saas => SAAS,
        }
    }

    /// Service label preselected when a page opens the dialog without a tier.
    pub fn default_service(self) -> &'static str {
        match self {
            Industry::General => crate::dialog::DEFAULT_SERVICE_LABEL,
            Industry::Healthcare => "Healthcare Marketing Consultation",
            Industry::HomeServices => "Home Services Marketing Consultation",
            Industry::Restaurant => "Restaurant Marketing Consultation",
            Industry::RealEstate => "Real Estate Marketing Consultation",
            Industry::Automotive => "Automotive Marketing Consultation",
            Industry::Legal => "Law Firm Marketing Consultation",
            Industry::Ecommerce => "E-commerce Growth Consultation",
            Industry::Saas => "SaaS Growth Consultation",
        }
    }
}

/// Every business type any page can offer, first occurrence wins.
pub fn all_business_types() -> Vec<BusinessType> {
    let mut seen = Vec::<BusinessType>::new();
    for industry in Industry::ALL {
        for business_type in industry.business_types() {
            if !seen.iter().any(|known| known.value == business_type.value) {
                seen.push(*business_type);
            }
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_the_slug() {
        let json = serde_json::to_string(&Industry::HomeServices).unwrap();
        assert_eq!(json, "\"home-services\"");
        let parsed: Industry = serde_json::from_str("\"real-estate\"").unwrap();
        assert_eq!(parsed, Industry::RealEstate);
    }

    #[test]
    fn every_list_offers_other_and_has_unique_values() {
        for industry in Industry::ALL {
            let types = industry.business_types();
            assert!(types.iter().any(|t| t.value == "other"), "{:?}", industry);
            for (i, t) in types.iter().enumerate() {
                assert!(!t.value.is_empty());
                assert!(
                    types[i + 1..].iter().all(|other| other.value != t.value),
                    "duplicate {} in {:?}",
                    t.value,
                    industry
                );
            }
        }
    }

    #[test]
    fn union_is_deduplicated() {
        let all = all_business_types();
        assert_eq!(all.iter().filter(|t| t.value == "other").count(), 1);
        assert!(all.iter().any(|t| t.value == "hvac"));
        assert!(all.iter().any(|t| t.value == "professional-services"));
        // first occurrence wins, so the general label is kept
        let healthcare = all.iter().find(|t| t.value == "healthcare").unwrap();
        assert_eq!(healthcare.label, "Healthcare");
    }

    #[test]
    fn default_services_are_never_blank() {
        for industry in Industry::ALL {
            assert!(!industry.default_service().trim().is_empty());
        }
    }
}
