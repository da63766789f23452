//! Community directory: nearby farmers, shared equipment and farming groups

use serde::Serialize;
use std::sync::OnceLock;

use super::format_thousands;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Farmer {
    pub id: String,
    pub name: String,
    pub location: String,
    pub distance: String,
    pub crops: Vec<String>,
    pub rating: f32,
    pub experience: String,
    pub verified: bool,
    pub contact: String,
}

impl Farmer {
    /// Avatar initials, e.g. "Rajesh Kumar" -> "RK"
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MachineCondition {
    Excellent,
    Good,
    Fair,
}

impl MachineCondition {
    pub fn label(&self) -> &'static str {
        match self {
            MachineCondition::Excellent => "Excellent",
            MachineCondition::Good => "Good",
            MachineCondition::Fair => "Fair",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            MachineCondition::Excellent => "badge-success",
            MachineCondition::Good => "badge-primary",
            MachineCondition::Fair => "badge-warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Machine {
    pub id: String,
    pub name: String,
    pub machine_type: String,
    pub owner: String,
    pub location: String,
    /// Rupees per day
    pub price_per_day: u32,
    pub availability: String,
    pub condition: MachineCondition,
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub description: String,
    pub members: u32,
    pub category: String,
    pub location: String,
    pub joined: bool,
}

impl Group {
    pub fn members_display(&self) -> String {
        format_thousands(u64::from(self.members))
    }
}

impl Machine {
    /// e.g. "₹2,500/day"
    pub fn price_display(&self) -> String {
        format!("₹{}/day", format_thousands(u64::from(self.price_per_day)))
    }
}

#[allow(clippy::too_many_arguments)]
fn farmer(
    id: &str,
    name: &str,
    location: &str,
    distance: &str,
    crops: &[&str],
    rating: f32,
    experience: &str,
    verified: bool,
    contact: &str,
) -> Farmer {
    Farmer {
        id: id.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        distance: distance.to_string(),
        crops: crops.iter().map(|c| c.to_string()).collect(),
        rating,
        experience: experience.to_string(),
        verified,
        contact: contact.to_string(),
    }
}

static FARMERS: OnceLock<Vec<Farmer>> = OnceLock::new();
static MACHINES: OnceLock<Vec<Machine>> = OnceLock::new();
static GROUPS: OnceLock<Vec<Group>> = OnceLock::new();

pub fn farmer_catalog() -> &'static [Farmer] {
    FARMERS.get_or_init(|| {
        vec![
            farmer("1", "Rajesh Kumar", "Ludhiana, Punjab", "2.5 km", &["Wheat", "Rice", "Sugarcane"], 4.8, "15 years", true, "+91 98765 43210"),
            farmer("2", "Priya Sharma", "Patiala, Punjab", "8.2 km", &["Cotton", "Maize", "Mustard"], 4.6, "12 years", true, "+91 98765 43211"),
            farmer("3", "Arun Singh", "Amritsar, Punjab", "15.1 km", &["Rice", "Potato", "Onion"], 4.7, "20 years", false, "+91 98765 43212"),
        ]
    })
}

pub fn machine_catalog() -> &'static [Machine] {
    MACHINES.get_or_init(|| {
        let machine = |id: &str, name: &str, machine_type: &str, owner: &str, location: &str,
                       price_per_day: u32, availability: &str, condition: MachineCondition,
                       contact: &str| Machine {
            id: id.to_string(),
            name: name.to_string(),
            machine_type: machine_type.to_string(),
            owner: owner.to_string(),
            location: location.to_string(),
            price_per_day,
            availability: availability.to_string(),
            condition,
            contact: contact.to_string(),
        };

        vec![
            machine("1", "John Deere 5050D", "Tractor", "Rajesh Kumar", "Ludhiana, Punjab", 2500, "Available Now", MachineCondition::Excellent, "+91 98765 43210"),
            machine("2", "Mahindra Arjun 605", "Tractor", "Suresh Patel", "Bathinda, Punjab", 2200, "Available from Tomorrow", MachineCondition::Good, "+91 98765 43213"),
            machine("3", "Combine Harvester", "Harvester", "Arun Singh", "Amritsar, Punjab", 8000, "Available Next Week", MachineCondition::Good, "+91 98765 43212"),
        ]
    })
}

pub fn group_catalog() -> &'static [Group] {
    GROUPS.get_or_init(|| {
        let group = |id: &str, name: &str, description: &str, members: u32, category: &str,
                     location: &str, joined: bool| Group {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            members,
            category: category.to_string(),
            location: location.to_string(),
            joined,
        };

        vec![
            group(
                "1",
                "Punjab Wheat Growers",
                "Community for wheat farmers in Punjab region sharing best practices and market insights.",
                1247,
                "Crop Specific",
                "Punjab",
                true,
            ),
            group(
                "2",
                "Organic Farming Network",
                "Dedicated to promoting sustainable and organic farming practices across India.",
                892,
                "Farming Practice",
                "All India",
                false,
            ),
            group(
                "3",
                "Young Farmers Circle",
                "Platform for young and new farmers to learn, connect, and grow together.",
                654,
                "Age Group",
                "North India",
                false,
            ),
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(farmer_catalog()[0].initials(), "RK");
        assert_eq!(farmer_catalog()[2].initials(), "AS");
    }

    #[test]
    fn test_condition_hints() {
        assert_eq!(MachineCondition::Excellent.css_class(), "badge-success");
        assert_eq!(MachineCondition::Fair.css_class(), "badge-warning");
    }

    #[test]
    fn test_display_helpers() {
        assert_eq!(machine_catalog()[2].price_display(), "₹8,000/day");
        assert_eq!(group_catalog()[0].members_display(), "1,247");
    }
}
