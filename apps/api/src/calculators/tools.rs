use serde::Serialize;

/// One entry in the site's calculator index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ToolDescriptor {
    pub slug: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    pub endpoint: &'static str,
}

pub const TOOLS: &[ToolDescriptor] = &[
    ToolDescriptor {
        slug: "boot-calculator",
        name: "Boot Calculator",
        summary: "Estimate cash, mortgage, and property boot and the tax it may trigger.",
        endpoint: "/api/v1/tools/boot-calculator",
    },
    ToolDescriptor {
        slug: "exchange-cost-estimator",
        name: "Exchange Cost Estimator",
        summary: "Estimate qualified intermediary, escrow, title, and recording costs.",
        endpoint: "/api/v1/tools/exchange-cost-estimator",
    },
    ToolDescriptor {
        slug: "identification-rules",
        name: "Identification Rules Checker",
        summary: "Check identified properties against the three-property, 200%, and 95% rules.",
        endpoint: "/api/v1/tools/identification-rules",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_end_with_slug() {
        for tool in TOOLS {
            assert!(tool.endpoint.ends_with(tool.slug), "{}", tool.slug);
        }
    }
}
