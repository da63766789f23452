//! Landing page content

#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
    pub accent: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Benefit {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "message-circle",
        title: "AI Chat Assistant",
        description: "Get instant answers to your farming questions from our intelligent AI assistant.",
        href: "/chat",
        accent: "accent-blue",
    },
    Feature {
        icon: "sprout",
        title: "Crop Recommendations",
        description: "Receive personalized crop suggestions based on your soil, climate, and resources.",
        href: "/crops",
        accent: "accent-green",
    },
    Feature {
        icon: "camera",
        title: "Disease Detection",
        description: "Upload plant photos to identify diseases and get treatment recommendations.",
        href: "/disease",
        accent: "accent-red",
    },
    Feature {
        icon: "users",
        title: "Community Hub",
        description: "Connect with nearby farmers, share equipment, and build farming networks.",
        href: "/community",
        accent: "accent-purple",
    },
    Feature {
        icon: "file-text",
        title: "Government Policies",
        description: "Access relevant schemes, subsidies, and credit lines for farmers.",
        href: "/policies",
        accent: "accent-indigo",
    },
    Feature {
        icon: "trending-up",
        title: "Market Prices",
        description: "Stay updated with current market rates and export opportunities.",
        href: "/market",
        accent: "accent-yellow",
    },
];

pub const BENEFITS: &[Benefit] = &[
    Benefit {
        icon: "bar-chart",
        title: "Increase Productivity",
        description: "AI-powered insights to maximize your farm yield and efficiency.",
    },
    Benefit {
        icon: "shield",
        title: "Reduce Risks",
        description: "Early disease detection and weather-based recommendations.",
    },
    Benefit {
        icon: "globe",
        title: "Market Access",
        description: "Connect directly with buyers and access global markets.",
    },
];

pub const STATS: &[Stat] = &[
    Stat { label: "Active Farmers", value: "10,000+" },
    Stat { label: "Crops Analyzed", value: "500+" },
    Stat { label: "Success Rate", value: "95%" },
    Stat { label: "Countries", value: "25+" },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Smart Farmer Helper increased my crop yield by 40% in just one season. The AI recommendations are incredibly accurate.",
        author: "Rajesh Kumar",
        role: "Rice Farmer, Punjab",
    },
    Testimonial {
        quote: "The disease detection feature saved my tomato crop. Early detection meant I could treat the problem before it spread.",
        author: "Maria Santos",
        role: "Organic Farmer, Maharashtra",
    },
    Testimonial {
        quote: "Connecting with other farmers through the platform helped me access better equipment and share knowledge.",
        author: "David Chen",
        role: "Wheat Farmer, Haryana",
    },
];
