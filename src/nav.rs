//! Navigation shell
//!
//! The shell is a pure function of the request path: which nav entry is
//! active (exact path match) and which view is mounted. Its only state is
//! the mobile menu flag, which every navigation resets.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub static NAV_ENTRIES: [NavEntry; 7] = [
    NavEntry { name: "Home", href: "/", icon: "home" },
    NavEntry { name: "AI Chat", href: "/chat", icon: "message-circle" },
    NavEntry { name: "Crop Advisor", href: "/crops", icon: "sprout" },
    NavEntry { name: "Disease Detection", href: "/disease", icon: "camera" },
    NavEntry { name: "Community", href: "/community", icon: "users" },
    NavEntry { name: "Policies", href: "/policies", icon: "file-text" },
    NavEntry { name: "Market Prices", href: "/market", icon: "trending-up" },
];

/// The page mounted for a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum View {
    Home,
    Chat,
    Crops,
    Disease,
    Community,
    Policies,
    Market,
    NotFound,
}

impl View {
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => View::Home,
            "/chat" => View::Chat,
            "/crops" => View::Crops,
            "/disease" => View::Disease,
            "/community" => View::Community,
            "/policies" => View::Policies,
            "/market" => View::Market,
            _ => View::NotFound,
        }
    }

    /// Document title suffix
    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Chat => "AI Farming Assistant",
            View::Crops => "Crop Recommendation System",
            View::Disease => "Disease Detection",
            View::Community => "Farmer Community",
            View::Policies => "Government Policies & Schemes",
            View::Market => "Market Prices",
            View::NotFound => "Page Not Found",
        }
    }
}

/// A nav entry as rendered for one path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    path: String,
    view: View,
    mobile_menu_open: bool,
}

impl Shell {
    pub fn for_path(path: &str) -> Self {
        Self {
            path: path.to_string(),
            view: View::from_path(path),
            mobile_menu_open: false,
        }
    }

    pub fn with_menu(mut self, open: bool) -> Self {
        self.mobile_menu_open = open;
        self
    }

    /// Move to another path; the mobile menu always closes
    pub fn navigate(&mut self, path: &str) {
        self.path = path.to_string();
        self.view = View::from_path(path);
        self.mobile_menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn title(&self) -> &'static str {
        self.view.title()
    }

    pub fn items(&self) -> Vec<NavItem> {
        NAV_ENTRIES
            .iter()
            .map(|entry| NavItem {
                name: entry.name,
                href: entry.href,
                icon: entry.icon,
                active: entry.href == self.path,
            })
            .collect()
    }

    pub fn active_entries(&self) -> Vec<&'static NavEntry> {
        NAV_ENTRIES.iter().filter(|e| e.href == self.path).collect()
    }

    /// Target of the mobile menu button
    pub fn menu_toggle_href(&self) -> String {
        if self.mobile_menu_open {
            self.path.clone()
        } else {
            format!("{}?menu=open", self.path)
        }
    }
}
