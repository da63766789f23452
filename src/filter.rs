//! Catalog filtering
//!
//! One stable filter shared by every list page: a free-text query matched
//! case-insensitively against a record's designated text fields, plus exact
//! facet selectors where `Facet::Any` means "no filter". Output keeps catalog
//! order; an empty result is returned as-is and the page renders its
//! "no results" state.

use serde::Deserialize;

use crate::catalog::{
    Farmer, Group, Machine, MarketPrice, PolicyCategory, PolicyScheme, PolicyStatus,
};

/// A facet selector: either unrestricted or pinned to one value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Facet<T> {
    #[default]
    Any,
    Only(T),
}

impl<T: PartialEq> Facet<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Facet::Any => true,
            Facet::Only(wanted) => wanted == value,
        }
    }

    /// Parse a selector value; empty and `all` mean no filter.
    ///
    /// Values the parser does not recognise are treated as no filter as well,
    /// the selectors only ever submit known values.
    pub fn parse_with(raw: Option<&str>, parse: impl Fn(&str) -> Option<T>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some("all") => Facet::Any,
            Some(value) => match parse(value) {
                Some(parsed) => Facet::Only(parsed),
                None => {
                    tracing::debug!("Ignoring unknown facet value '{}'", value);
                    Facet::Any
                }
            },
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Facet::Any)
    }
}

impl Facet<String> {
    pub fn parse(raw: Option<&str>) -> Self {
        Self::parse_with(raw, |v| Some(v.to_string()))
    }
}

/// Free-text query plus the record type's facet selectors
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Criteria<F> {
    pub query: String,
    pub facets: F,
}

impl<F: Default> Criteria<F> {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            facets: F::default(),
        }
    }
}

/// A record that can be narrowed by `Criteria`
pub trait Filterable {
    type Facets: Default;

    /// Fields searched by the free-text query
    fn search_fields(&self) -> Vec<&str>;

    fn matches_facets(&self, facets: &Self::Facets) -> bool;
}

/// Stable filter over any sequence of catalog records
pub fn filter_catalog<'a, T, I>(items: I, criteria: &Criteria<T::Facets>) -> Vec<&'a T>
where
    T: Filterable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let needle = criteria.query.trim().to_lowercase();

    items
        .into_iter()
        .filter(|item| {
            let text_match = needle.is_empty()
                || item
                    .search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle));
            text_match && item.matches_facets(&criteria.facets)
        })
        .collect()
}

// ============================================================================
// Community
// ============================================================================

impl Filterable for Farmer {
    type Facets = ();

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.location.as_str()]
    }

    fn matches_facets(&self, _: &()) -> bool {
        true
    }
}

impl Filterable for Machine {
    type Facets = ();

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.machine_type.as_str(), self.owner.as_str(), self.location.as_str()]
    }

    fn matches_facets(&self, _: &()) -> bool {
        true
    }
}

impl Filterable for Group {
    type Facets = ();

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }

    fn matches_facets(&self, _: &()) -> bool {
        true
    }
}

// ============================================================================
// Policies
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PolicyFacets {
    pub category: Facet<PolicyCategory>,
    pub status: Facet<PolicyStatus>,
}

impl Filterable for PolicyScheme {
    type Facets = PolicyFacets;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }

    fn matches_facets(&self, facets: &PolicyFacets) -> bool {
        facets.category.admits(&self.category) && facets.status.admits(&self.status)
    }
}

/// Query string of the policies page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PolicyQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

impl PolicyQuery {
    pub fn criteria(&self) -> Criteria<PolicyFacets> {
        Criteria {
            query: self.q.clone().unwrap_or_default(),
            facets: PolicyFacets {
                category: Facet::parse_with(self.category.as_deref(), PolicyCategory::from_slug),
                status: Facet::parse_with(self.status.as_deref(), PolicyStatus::from_slug),
            },
        }
    }
}

// ============================================================================
// Market prices
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MarketFacets {
    pub state: Facet<String>,
    pub crop: Facet<String>,
}

impl Filterable for MarketPrice {
    type Facets = MarketFacets;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.crop.as_str(), self.market.as_str()]
    }

    fn matches_facets(&self, facets: &MarketFacets) -> bool {
        facets.state.admits(&self.state) && facets.crop.admits(&self.crop)
    }
}

/// Query string of the market page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketQuery {
    pub q: Option<String>,
    pub state: Option<String>,
    pub crop: Option<String>,
}

impl MarketQuery {
    pub fn criteria(&self) -> Criteria<MarketFacets> {
        Criteria {
            query: self.q.clone().unwrap_or_default(),
            facets: MarketFacets {
                state: Facet::parse(self.state.as_deref()),
                crop: Facet::parse(self.crop.as_deref()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{farmer_catalog, group_catalog, machine_catalog, policy_catalog, price_catalog};

    fn ids<T>(items: &[&T], id: impl Fn(&T) -> &str) -> Vec<String> {
        items.iter().map(|item| id(item).to_string()).collect()
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let policies = filter_catalog(policy_catalog(), &Criteria::empty());
        assert_eq!(policies.len(), policy_catalog().len());
        assert!(policies.iter().zip(policy_catalog()).all(|(a, b)| std::ptr::eq(*a, b)));

        let prices = filter_catalog(price_catalog(), &Criteria::empty());
        assert_eq!(prices.len(), price_catalog().len());

        let farmers = filter_catalog(farmer_catalog(), &Criteria::empty());
        assert_eq!(farmers.len(), farmer_catalog().len());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let criteria = Criteria {
            query: "farm".to_string(),
            facets: PolicyFacets {
                category: Facet::Any,
                status: Facet::Only(PolicyStatus::Active),
            },
        };
        let once = filter_catalog(policy_catalog(), &criteria);
        let twice = filter_catalog(once.iter().copied(), &criteria);
        assert_eq!(once, twice);

        let market = MarketQuery { q: Some("a".into()), state: Some("Punjab".into()), crop: None }.criteria();
        let once = filter_catalog(price_catalog(), &market);
        let twice = filter_catalog(once.iter().copied(), &market);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_query_is_case_insensitive_and_trimmed() {
        let hits = filter_catalog(farmer_catalog(), &Criteria::with_query("  PATIALA "));
        assert_eq!(ids(&hits, |f| f.name.as_str()), vec!["Priya Sharma"]);
    }

    #[test]
    fn test_policy_search_matches_description() {
        let hits = filter_catalog(policy_catalog(), &Criteria::with_query("insurance"));
        assert_eq!(ids(&hits, |p| p.id.as_str()), vec!["2"]);
    }

    #[test]
    fn test_policy_category_keeps_catalog_order() {
        let query = PolicyQuery { category: Some("credit".into()), ..Default::default() };
        let hits = filter_catalog(policy_catalog(), &query.criteria());
        assert_eq!(ids(&hits, |p| p.id.as_str()), vec!["1", "5"]);
    }

    #[test]
    fn test_expiring_status_selects_expiring_soon() {
        let query = PolicyQuery { status: Some("expiring".into()), ..Default::default() };
        let hits = filter_catalog(policy_catalog(), &query.criteria());
        assert_eq!(ids(&hits, |p| p.name.as_str()), vec!["Paramparagat Krishi Vikas Yojana"]);
    }

    #[test]
    fn test_all_sentinel_and_unknown_values_do_not_filter() {
        let query = PolicyQuery {
            q: Some(String::new()),
            category: Some("all".into()),
            status: Some("bogus".into()),
        };
        let criteria = query.criteria();
        assert!(criteria.facets.category.is_any());
        assert!(criteria.facets.status.is_any());
        assert_eq!(filter_catalog(policy_catalog(), &criteria).len(), 5);
    }

    #[test]
    fn test_market_facets() {
        let query = MarketQuery { state: Some("Punjab".into()), ..Default::default() };
        let hits = filter_catalog(price_catalog(), &query.criteria());
        assert_eq!(ids(&hits, |p| p.crop.as_str()), vec!["Wheat"]);

        // state is a facet, not a searchable field
        let hits = filter_catalog(price_catalog(), &Criteria::with_query("kar"));
        assert_eq!(ids(&hits, |p| p.market.as_str()), vec!["Karnal"]);
    }

    #[test]
    fn test_facet_equality_is_exact() {
        let query = MarketQuery { crop: Some("wheat".into()), ..Default::default() };
        assert!(filter_catalog(price_catalog(), &query.criteria()).is_empty());
    }

    #[test]
    fn test_no_match_yields_empty() {
        assert!(filter_catalog(machine_catalog(), &Criteria::with_query("drone")).is_empty());
        assert!(filter_catalog(group_catalog(), &Criteria::with_query("zzz")).is_empty());
    }

    #[test]
    fn test_machine_owner_is_searchable() {
        let hits = filter_catalog(machine_catalog(), &Criteria::with_query("suresh"));
        assert_eq!(ids(&hits, |m| m.name.as_str()), vec!["Mahindra Arjun 605"]);
    }
}
