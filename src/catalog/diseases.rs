//! Plant disease diagnoses returned by the disease-detection page

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::High => "badge-destructive",
            Severity::Medium => "badge-warning",
            Severity::Low => "badge-success",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Severity::High | Severity::Medium => "alert-circle",
            Severity::Low => "check-circle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Treatments {
    pub organic: Vec<String>,
    pub chemical: Vec<String>,
}

/// Diagnosis payload, shared by the simulated and the remote classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseDiagnosis {
    pub disease: String,
    /// 0-100
    pub confidence: u8,
    pub severity: Severity,
    pub causes: Vec<String>,
    pub symptoms: Vec<String>,
    pub treatments: Treatments,
    pub prevention: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

static DIAGNOSES: OnceLock<Vec<DiseaseDiagnosis>> = OnceLock::new();

pub fn diagnosis_catalog() -> &'static [DiseaseDiagnosis] {
    DIAGNOSES.get_or_init(|| {
        vec![
            DiseaseDiagnosis {
                disease: "Late Blight".to_string(),
                confidence: 94,
                severity: Severity::High,
                causes: strings(&["High humidity", "Cool temperatures", "Poor air circulation"]),
                symptoms: strings(&[
                    "Dark brown spots on leaves",
                    "White fuzzy growth on leaf undersides",
                    "Rapid leaf death",
                ]),
                treatments: Treatments {
                    organic: strings(&[
                        "Apply copper-based fungicides",
                        "Remove affected leaves immediately",
                        "Improve air circulation around plants",
                        "Use baking soda spray (1 tsp per quart water)",
                    ]),
                    chemical: strings(&[
                        "Apply chlorothalonil fungicide",
                        "Use mancozeb preventive spray",
                        "Apply propiconazole for severe cases",
                    ]),
                },
                prevention: strings(&[
                    "Plant resistant varieties",
                    "Ensure proper spacing between plants",
                    "Water at soil level, not on leaves",
                    "Remove plant debris regularly",
                ]),
            },
            DiseaseDiagnosis {
                disease: "Powdery Mildew".to_string(),
                confidence: 87,
                severity: Severity::Medium,
                causes: strings(&["High humidity", "Poor air circulation", "Overcrowding"]),
                symptoms: strings(&[
                    "White powdery coating on leaves",
                    "Yellowing of leaves",
                    "Stunted growth",
                ]),
                treatments: Treatments {
                    organic: strings(&[
                        "Spray with milk solution (1:10 ratio)",
                        "Apply neem oil weekly",
                        "Use sulfur-based fungicides",
                        "Baking soda spray treatment",
                    ]),
                    chemical: strings(&[
                        "Apply myclobutanil fungicide",
                        "Use tebuconazole spray",
                        "Apply potassium bicarbonate",
                    ]),
                },
                prevention: strings(&[
                    "Ensure good air circulation",
                    "Avoid overhead watering",
                    "Plant in sunny locations",
                    "Remove infected plant material",
                ]),
            },
        ]
    })
}
