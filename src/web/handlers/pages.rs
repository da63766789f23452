// Page handlers for HTML rendering with Askama

use axum::extract::Query;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use askama::Template;
use axum_htmx::HxRequest;
use serde::Deserialize;

use crate::catalog::home::{Benefit, Feature, Stat, Testimonial, BENEFITS, FEATURES, STATS, TESTIMONIALS};
use crate::catalog::market::{MARKET_CROPS, MARKET_STATES};
use crate::catalog::policies::{POLICY_CATEGORIES, POLICY_STATUSES};
use crate::catalog::{
    export_company_catalog, farmer_catalog, group_catalog, machine_catalog, policy_catalog,
    price_catalog, ExportCompany, Farmer, Group, Machine, MarketPrice, PolicyScheme, SelectOption,
};
use crate::filter::{filter_catalog, Criteria, MarketQuery, PolicyQuery};
use crate::nav::Shell;
use crate::web::render;

// ============================================================================
// Shell
// ============================================================================

#[derive(Debug, Default, Deserialize)]
struct ShellQuery {
    menu: Option<String>,
}

/// Shell for the request path; `?menu=open` opens the mobile menu
pub fn shell_for(uri: &Uri) -> Shell {
    let open = Query::<ShellQuery>::try_from_uri(uri)
        .map(|Query(q)| q.menu.as_deref() == Some("open"))
        .unwrap_or(false);
    Shell::for_path(uri.path()).with_menu(open)
}

// ============================================================================
// Home Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub shell: Shell,
    pub features: &'static [Feature],
    pub benefits: &'static [Benefit],
    pub stats: &'static [Stat],
    pub testimonials: &'static [Testimonial],
}

pub async fn home_page(uri: Uri) -> impl IntoResponse {
    let template = HomeTemplate {
        shell: shell_for(&uri),
        features: FEATURES,
        benefits: BENEFITS,
        stats: STATS,
        testimonials: TESTIMONIALS,
    };
    render(&template)
}

// ============================================================================
// Community
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommunityTab {
    Farmers,
    Machines,
    Groups,
}

impl CommunityTab {
    const ALL: [CommunityTab; 3] = [CommunityTab::Farmers, CommunityTab::Machines, CommunityTab::Groups];

    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some("machines") => CommunityTab::Machines,
            Some("groups") => CommunityTab::Groups,
            _ => CommunityTab::Farmers,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            CommunityTab::Farmers => "farmers",
            CommunityTab::Machines => "machines",
            CommunityTab::Groups => "groups",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CommunityTab::Farmers => "Nearby Farmers",
            CommunityTab::Machines => "Machine Sharing",
            CommunityTab::Groups => "Farming Groups",
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CommunityQuery {
    pub tab: Option<String>,
    /// `list` or `map`, farmers tab only
    pub view: Option<String>,
    pub q: Option<String>,
}

pub struct TabLink {
    pub slug: &'static str,
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

#[derive(Template)]
#[template(path = "fragments/community_results.html")]
pub struct CommunityResultsTemplate {
    pub tab: &'static str,
    pub map_view: bool,
    pub list_href: String,
    pub map_href: String,
    pub farmers: Vec<&'static Farmer>,
    pub machines: Vec<&'static Machine>,
    pub groups: Vec<&'static Group>,
}

impl CommunityResultsTemplate {
    pub fn is_empty(&self) -> bool {
        match self.tab {
            "machines" => self.machines.is_empty(),
            "groups" => self.groups.is_empty(),
            _ => self.farmers.is_empty(),
        }
    }
}

#[derive(Template)]
#[template(path = "pages/community.html")]
pub struct CommunityTemplate {
    pub shell: Shell,
    pub tab: &'static str,
    pub q: String,
    pub tabs: Vec<TabLink>,
    pub results: CommunityResultsTemplate,
}

fn community_href(tab: CommunityTab, view: &str, q: &str) -> String {
    let mut href = format!("/community?tab={}", tab.slug());
    if view == "map" {
        href.push_str("&view=map");
    }
    if !q.trim().is_empty() {
        href.push_str("&q=");
        href.push_str(&urlencoding::encode(q.trim()));
    }
    href
}

pub fn community_results(query: &CommunityQuery) -> CommunityResultsTemplate {
    let tab = CommunityTab::from_param(query.tab.as_deref());
    let q = query.q.clone().unwrap_or_default();
    let map_view = tab == CommunityTab::Farmers && query.view.as_deref() == Some("map");
    let criteria = Criteria::with_query(q.clone());

    let mut results = CommunityResultsTemplate {
        tab: tab.slug(),
        map_view,
        list_href: community_href(tab, "list", &q),
        map_href: community_href(tab, "map", &q),
        farmers: Vec::new(),
        machines: Vec::new(),
        groups: Vec::new(),
    };
    match tab {
        CommunityTab::Farmers => results.farmers = filter_catalog(farmer_catalog(), &criteria),
        CommunityTab::Machines => results.machines = filter_catalog(machine_catalog(), &criteria),
        CommunityTab::Groups => results.groups = filter_catalog(group_catalog(), &criteria),
    }
    tracing::debug!("Community '{}' search '{}' -> empty: {}", tab.slug(), q, results.is_empty());
    results
}

pub async fn community_page(
    HxRequest(hx): HxRequest,
    uri: Uri,
    Query(query): Query<CommunityQuery>,
) -> Response {
    let results = community_results(&query);
    if hx {
        return render(&results).into_response();
    }

    let active = CommunityTab::from_param(query.tab.as_deref());
    let q = query.q.clone().unwrap_or_default();
    let tabs = CommunityTab::ALL
        .iter()
        .map(|tab| TabLink {
            slug: tab.slug(),
            label: tab.label(),
            href: community_href(*tab, "list", &q),
            active: *tab == active,
        })
        .collect();

    let template = CommunityTemplate {
        shell: shell_for(&uri),
        tab: active.slug(),
        q,
        tabs,
        results,
    };
    render(&template).into_response()
}

// ============================================================================
// Policies
// ============================================================================

#[derive(Template)]
#[template(path = "fragments/policy_results.html")]
pub struct PolicyResultsTemplate {
    pub policies: Vec<&'static PolicyScheme>,
}

#[derive(Template)]
#[template(path = "pages/policies.html")]
pub struct PoliciesTemplate {
    pub shell: Shell,
    pub q: String,
    pub category: String,
    pub status: String,
    pub categories: &'static [SelectOption],
    pub statuses: &'static [SelectOption],
    pub results: PolicyResultsTemplate,
}

pub async fn policies_page(
    HxRequest(hx): HxRequest,
    uri: Uri,
    Query(query): Query<PolicyQuery>,
) -> Response {
    let policies = filter_catalog(policy_catalog(), &query.criteria());
    tracing::debug!("Policies filter {:?} -> {} schemes", query, policies.len());
    let results = PolicyResultsTemplate { policies };
    if hx {
        return render(&results).into_response();
    }

    let template = PoliciesTemplate {
        shell: shell_for(&uri),
        q: query.q.clone().unwrap_or_default(),
        category: query.category.clone().unwrap_or_else(|| "all".to_string()),
        status: query.status.clone().unwrap_or_else(|| "all".to_string()),
        categories: POLICY_CATEGORIES,
        statuses: POLICY_STATUSES,
        results,
    };
    render(&template).into_response()
}

// ============================================================================
// Market Prices
// ============================================================================

#[derive(Template)]
#[template(path = "fragments/market_results.html")]
pub struct MarketResultsTemplate {
    pub prices: Vec<&'static MarketPrice>,
    /// Refreshed on every render
    pub updated_at: String,
}

#[derive(Template)]
#[template(path = "pages/market.html")]
pub struct MarketTemplate {
    pub shell: Shell,
    pub q: String,
    pub state: String,
    pub crop: String,
    pub states: &'static [SelectOption],
    pub crops: &'static [SelectOption],
    pub results: MarketResultsTemplate,
    pub exporters: &'static [ExportCompany],
}

pub async fn market_page(
    HxRequest(hx): HxRequest,
    uri: Uri,
    Query(query): Query<MarketQuery>,
) -> Response {
    let prices = filter_catalog(price_catalog(), &query.criteria());
    tracing::debug!("Market filter {:?} -> {} prices", query, prices.len());
    let results = MarketResultsTemplate {
        prices,
        updated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    };
    if hx {
        return render(&results).into_response();
    }

    let template = MarketTemplate {
        shell: shell_for(&uri),
        q: query.q.clone().unwrap_or_default(),
        state: query.state.clone().unwrap_or_else(|| "all".to_string()),
        crop: query.crop.clone().unwrap_or_else(|| "all".to_string()),
        states: MARKET_STATES,
        crops: MARKET_CROPS,
        results,
        exporters: export_company_catalog(),
    };
    render(&template).into_response()
}

// ============================================================================
// Not Found
// ============================================================================

#[derive(Template)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate {
    pub shell: Shell,
}

pub async fn not_found(uri: Uri) -> impl IntoResponse {
    tracing::debug!("No route for {}", uri.path());
    let template = NotFoundTemplate {
        shell: shell_for(&uri),
    };
    (StatusCode::NOT_FOUND, render(&template))
}
