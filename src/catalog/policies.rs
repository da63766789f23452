//! Government schemes, subsidies and credit lines

use serde::Serialize;
use std::sync::OnceLock;

use super::{format_thousands, SelectOption};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyCategory {
    Credit,
    Subsidy,
    Insurance,
    Technology,
    Organic,
}

impl PolicyCategory {
    pub fn slug(&self) -> &'static str {
        match self {
            PolicyCategory::Credit => "credit",
            PolicyCategory::Subsidy => "subsidy",
            PolicyCategory::Insurance => "insurance",
            PolicyCategory::Technology => "technology",
            PolicyCategory::Organic => "organic",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "credit" => Some(PolicyCategory::Credit),
            "subsidy" => Some(PolicyCategory::Subsidy),
            "insurance" => Some(PolicyCategory::Insurance),
            "technology" => Some(PolicyCategory::Technology),
            "organic" => Some(PolicyCategory::Organic),
            _ => None,
        }
    }

    /// Badge text, the slug with its first letter upper-cased
    pub fn label(&self) -> &'static str {
        match self {
            PolicyCategory::Credit => "Credit",
            PolicyCategory::Subsidy => "Subsidy",
            PolicyCategory::Insurance => "Insurance",
            PolicyCategory::Technology => "Technology",
            PolicyCategory::Organic => "Organic",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            PolicyCategory::Credit => "badge-blue",
            PolicyCategory::Subsidy => "badge-green",
            PolicyCategory::Insurance => "badge-purple",
            PolicyCategory::Technology => "badge-orange",
            PolicyCategory::Organic => "badge-emerald",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PolicyStatus {
    Active,
    Upcoming,
    ExpiringSoon,
}

impl PolicyStatus {
    /// Filter value used by the status selector
    pub fn slug(&self) -> &'static str {
        match self {
            PolicyStatus::Active => "active",
            PolicyStatus::Upcoming => "upcoming",
            PolicyStatus::ExpiringSoon => "expiring",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "active" => Some(PolicyStatus::Active),
            "upcoming" => Some(PolicyStatus::Upcoming),
            "expiring" => Some(PolicyStatus::ExpiringSoon),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PolicyStatus::Active => "Active",
            PolicyStatus::Upcoming => "Upcoming",
            PolicyStatus::ExpiringSoon => "Expiring Soon",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            PolicyStatus::Active => "badge-success",
            PolicyStatus::Upcoming => "badge-primary",
            PolicyStatus::ExpiringSoon => "badge-warning",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PolicyStatus::Active => "check-circle",
            PolicyStatus::Upcoming => "calendar",
            PolicyStatus::ExpiringSoon => "alert-circle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyScheme {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: PolicyCategory,
    pub eligibility: Vec<String>,
    pub benefits: Vec<String>,
    /// ISO date
    pub application_deadline: String,
    pub max_amount: String,
    pub status: PolicyStatus,
    pub beneficiaries: u64,
    pub application_link: String,
    pub documents: Vec<String>,
}

impl PolicyScheme {
    pub fn beneficiaries_display(&self) -> String {
        format_thousands(self.beneficiaries)
    }
}

pub const POLICY_CATEGORIES: &[SelectOption] = &[
    SelectOption::new("all", "All Categories"),
    SelectOption::new("credit", "Credit & Loans"),
    SelectOption::new("subsidy", "Subsidies"),
    SelectOption::new("insurance", "Insurance"),
    SelectOption::new("technology", "Technology"),
    SelectOption::new("organic", "Organic Farming"),
];

pub const POLICY_STATUSES: &[SelectOption] = &[
    SelectOption::new("all", "All Status"),
    SelectOption::new("active", "Active"),
    SelectOption::new("upcoming", "Upcoming"),
    SelectOption::new("expiring", "Expiring Soon"),
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

static SCHEMES: OnceLock<Vec<PolicyScheme>> = OnceLock::new();

pub fn policy_catalog() -> &'static [PolicyScheme] {
    SCHEMES.get_or_init(|| {
        vec![
            PolicyScheme {
                id: "1".to_string(),
                name: "PM-KISAN Samman Nidhi".to_string(),
                description: "Direct income support scheme providing ₹6,000 per year to small and marginal farmers.".to_string(),
                category: PolicyCategory::Credit,
                eligibility: strings(&[
                    "Small and marginal farmers with land up to 2 hectares",
                    "Valid Aadhaar card required",
                    "Bank account linked with Aadhaar",
                    "Land ownership documents",
                ]),
                benefits: strings(&[
                    "₹6,000 per year in three installments",
                    "Direct bank transfer",
                    "No processing fee",
                    "Automatic renewal if eligible",
                ]),
                application_deadline: "2024-12-31".to_string(),
                max_amount: "₹6,000 per year".to_string(),
                status: PolicyStatus::Active,
                beneficiaries: 11_000_000,
                application_link: "https://pmkisan.gov.in".to_string(),
                documents: strings(&["Aadhaar Card", "Bank Passbook", "Land Records", "Passport Photo"]),
            },
            PolicyScheme {
                id: "2".to_string(),
                name: "Pradhan Mantri Fasal Bima Yojana".to_string(),
                description: "Crop insurance scheme providing financial support to farmers in case of crop failure.".to_string(),
                category: PolicyCategory::Insurance,
                eligibility: strings(&[
                    "All farmers including sharecroppers and tenant farmers",
                    "Must have insurable interest in the crop",
                    "Land documents or agreement proof",
                    "Valid bank account",
                ]),
                benefits: strings(&[
                    "Premium subsidy up to 90%",
                    "Coverage for all stages of crop cycle",
                    "Quick claim settlement",
                    "Use of technology for accurate assessment",
                ]),
                application_deadline: "2024-06-30".to_string(),
                max_amount: "Up to ₹2,00,000 per hectare".to_string(),
                status: PolicyStatus::Active,
                beneficiaries: 5_500_000,
                application_link: "https://pmfby.gov.in".to_string(),
                documents: strings(&["Aadhaar Card", "Bank Account Details", "Land Records", "Sowing Certificate"]),
            },
            PolicyScheme {
                id: "3".to_string(),
                name: "National Mission for Sustainable Agriculture".to_string(),
                description: "Promotes sustainable farming practices and climate-resilient agriculture.".to_string(),
                category: PolicyCategory::Technology,
                eligibility: strings(&[
                    "Individual farmers and farmer producer organizations",
                    "Minimum 0.25 hectare land holding",
                    "Willingness to adopt sustainable practices",
                    "Valid registration documents",
                ]),
                benefits: strings(&[
                    "Financial assistance for sustainable practices",
                    "Training and capacity building",
                    "Subsidized equipment and inputs",
                    "Technical support",
                ]),
                application_deadline: "2024-09-30".to_string(),
                max_amount: "Up to ₹50,000 per hectare".to_string(),
                status: PolicyStatus::Active,
                beneficiaries: 2_800_000,
                application_link: "https://nmsa.dac.gov.in".to_string(),
                documents: strings(&["Land Records", "Identity Proof", "Bank Account", "Project Proposal"]),
            },
            PolicyScheme {
                id: "4".to_string(),
                name: "Paramparagat Krishi Vikas Yojana".to_string(),
                description: "Promotes organic farming through cluster-based approach and financial assistance.".to_string(),
                category: PolicyCategory::Organic,
                eligibility: strings(&[
                    "Farmers willing to adopt organic farming",
                    "Minimum cluster size of 50 acres",
                    "Group of at least 50 farmers",
                    "Land suitable for organic farming",
                ]),
                benefits: strings(&[
                    "₹50,000 per hectare for 3 years",
                    "Organic certification support",
                    "Marketing assistance",
                    "Training and handholding",
                ]),
                application_deadline: "2024-08-15".to_string(),
                max_amount: "₹50,000 per hectare".to_string(),
                status: PolicyStatus::ExpiringSoon,
                beneficiaries: 890_000,
                application_link: "https://pgsindia-ncof.gov.in".to_string(),
                documents: strings(&["Land Records", "Group Formation Certificate", "Bank Details", "Soil Health Card"]),
            },
            PolicyScheme {
                id: "5".to_string(),
                name: "Agricultural Infrastructure Fund".to_string(),
                description: "Provides medium to long-term debt financing for post-harvest infrastructure.".to_string(),
                category: PolicyCategory::Credit,
                eligibility: strings(&[
                    "Farmers, FPOs, and agri-entrepreneurs",
                    "Viable project proposal",
                    "Minimum project cost of ₹25 lakhs",
                    "Collateral security or guarantee",
                ]),
                benefits: strings(&[
                    "Interest subvention of 3%",
                    "Credit guarantee coverage",
                    "Flexible repayment terms",
                    "Quick approval process",
                ]),
                application_deadline: "2025-03-31".to_string(),
                max_amount: "Up to ₹2 crores".to_string(),
                status: PolicyStatus::Upcoming,
                beneficiaries: 150_000,
                application_link: "https://agriinfra.dac.gov.in".to_string(),
                documents: strings(&["Project Report", "Financial Statements", "Land Documents", "Registration Certificate"]),
            },
        ]
    })
}
