//! Static layout variant descriptors.
//!
//! Each content category (services, locations) owns six presentational templates.
//! A variant is immutable `'static` data: a key, a display label, and the ordered
//! list of sections the page renders.

use serde::Serialize;

use crate::layout::assignment::VariantKey;

/// A display section a page template can include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageSection {
    Hero,
    SplitHero,
    Overview,
    ProcessSteps,
    BenefitsGrid,
    Timeline,
    ComparisonTable,
    MarketSnapshot,
    PropertyTypes,
    NearbyLocations,
    RelatedServices,
    CalculatorCallout,
    Faq,
    Testimonials,
    CallToAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutVariant {
    pub key: &'static str,
    pub label: &'static str,
    pub sections: &'static [PageSection],
}

impl VariantKey for LayoutVariant {
    fn key(&self) -> &str {
        self.key
    }
}

use PageSection as S;

pub const SERVICE_VARIANTS: &[LayoutVariant] = &[
    LayoutVariant {
        key: "classic",
        label: "Classic",
        sections: &[S::Hero, S::Overview, S::ProcessSteps, S::Faq, S::CallToAction],
    },
    LayoutVariant {
        key: "split",
        label: "Split Hero",
        sections: &[
            S::SplitHero,
            S::BenefitsGrid,
            S::RelatedServices,
            S::Faq,
            S::CallToAction,
        ],
    },
    LayoutVariant {
        key: "timeline",
        label: "Timeline",
        sections: &[S::Hero, S::Timeline, S::Overview, S::Faq, S::CallToAction],
    },
    LayoutVariant {
        key: "comparison",
        label: "Comparison",
        sections: &[
            S::Hero,
            S::ComparisonTable,
            S::BenefitsGrid,
            S::Faq,
            S::CallToAction,
        ],
    },
    LayoutVariant {
        key: "calculator",
        label: "Calculator Led",
        sections: &[
            S::SplitHero,
            S::CalculatorCallout,
            S::ProcessSteps,
            S::Faq,
            S::CallToAction,
        ],
    },
    LayoutVariant {
        key: "story",
        label: "Client Story",
        sections: &[
            S::Hero,
            S::Testimonials,
            S::Overview,
            S::RelatedServices,
            S::CallToAction,
        ],
    },
];

pub const LOCATION_VARIANTS: &[LayoutVariant] = &[
    LayoutVariant {
        key: "market",
        label: "Market Snapshot",
        sections: &[
            S::Hero,
            S::MarketSnapshot,
            S::PropertyTypes,
            S::Faq,
            S::CallToAction,
        ],
    },
    LayoutVariant {
        key: "regional",
        label: "Regional",
        sections: &[
            S::SplitHero,
            S::Overview,
            S::NearbyLocations,
            S::Faq,
            S::CallToAction,
        ],
    },
    LayoutVariant {
        key: "services-first",
        label: "Services First",
        sections: &[
            S::Hero,
            S::RelatedServices,
            S::MarketSnapshot,
            S::Faq,
            S::CallToAction,
        ],
    },
    LayoutVariant {
        key: "guide",
        label: "Local Guide",
        sections: &[S::Hero, S::Overview, S::Timeline, S::Faq, S::CallToAction],
    },
    LayoutVariant {
        key: "investor",
        label: "Investor Focus",
        sections: &[
            S::SplitHero,
            S::PropertyTypes,
            S::CalculatorCallout,
            S::Faq,
            S::CallToAction,
        ],
    },
    LayoutVariant {
        key: "testimonial",
        label: "Testimonial",
        sections: &[
            S::Hero,
            S::Testimonials,
            S::NearbyLocations,
            S::Faq,
            S::CallToAction,
        ],
    },
];

/// Looks up a descriptor by key within one category's variant set.
pub fn find_variant(variants: &'static [LayoutVariant], key: &str) -> Option<&'static LayoutVariant> {
    variants.iter().find(|v| v.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_six_variants_per_category() {
        assert_eq!(SERVICE_VARIANTS.len(), 6);
        assert_eq!(LOCATION_VARIANTS.len(), 6);
    }

    #[test]
    fn test_variant_keys_are_unique() {
        for set in [SERVICE_VARIANTS, LOCATION_VARIANTS] {
            let keys: HashSet<_> = set.iter().map(|v| v.key).collect();
            assert_eq!(keys.len(), set.len());
        }
    }

    #[test]
    fn test_every_variant_ends_with_call_to_action() {
        for v in SERVICE_VARIANTS.iter().chain(LOCATION_VARIANTS) {
            assert_eq!(v.sections.last(), Some(&PageSection::CallToAction), "{}", v.key);
        }
    }

    #[test]
    fn test_find_variant() {
        assert_eq!(find_variant(SERVICE_VARIANTS, "split").unwrap().label, "Split Hero");
        assert!(find_variant(LOCATION_VARIANTS, "split").is_none());
    }
}
