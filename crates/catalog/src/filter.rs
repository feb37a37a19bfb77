//! Pure filter/sort engine over the catalog.

use common::Money;

use crate::{Catalog, Product};

/// Sort order applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Keep catalog order.
    #[default]
    Default,

    /// Cheapest first.
    PriceAsc,

    /// Most expensive first.
    PriceDesc,

    /// Title A→Z, case-folded.
    TitleAsc,

    /// Title Z→A, case-folded.
    TitleDesc,
}

impl SortKey {
    /// Parses a sort key from its form value; unknown values fall back to
    /// [`SortKey::Default`].
    pub fn parse(raw: &str) -> Self {
        match raw {
            "price_asc" => SortKey::PriceAsc,
            "price_desc" => SortKey::PriceDesc,
            "title_asc" => SortKey::TitleAsc,
            "title_desc" => SortKey::TitleDesc,
            _ => SortKey::Default,
        }
    }

    /// Returns the form value for this sort key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::TitleAsc => "title_asc",
            SortKey::TitleDesc => "title_desc",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Transient query criteria for one render of the catalog.
///
/// `None` price bounds mean "no bound"; a bound explicitly set to zero
/// still filters (every price passes a zero minimum, but it is a filter).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against the product title.
    pub query: String,

    /// Inclusive lower price bound.
    pub min_price: Option<Money>,

    /// Inclusive upper price bound.
    pub max_price: Option<Money>,

    /// Sort order, applied last.
    pub sort: SortKey,
}

impl FilterCriteria {
    /// Creates empty criteria matching the whole catalog in catalog order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title search query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Sets the inclusive minimum price.
    pub fn with_min_price(mut self, min: Money) -> Self {
        self.min_price = Some(min);
        self
    }

    /// Sets the inclusive maximum price.
    pub fn with_max_price(mut self, max: Money) -> Self {
        self.max_price = Some(max);
        self
    }

    /// Sets the sort order.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Builds criteria from raw form input.
    ///
    /// Empty, non-numeric, or negative price fields are treated as absent
    /// bounds, not as bounds that exclude everything; an unknown sort
    /// value falls back to catalog order. Fractional values round inward
    /// to whole minor units: a minimum of 99.5 admits nothing cheaper
    /// than 100, a maximum of 99.5 nothing dearer than 99, so the
    /// fractional bound filters exactly the integer prices it would.
    pub fn from_form(query: &str, min_price: &str, max_price: &str, sort: &str) -> Self {
        Self {
            query: query.to_string(),
            min_price: parse_bound(min_price).map(|v| Money::from_minor(v.ceil() as u64)),
            max_price: parse_bound(max_price).map(|v| Money::from_minor(v.floor() as u64)),
            sort: SortKey::parse(sort),
        }
    }
}

fn parse_bound(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Applies `criteria` to the catalog, returning matching products.
///
/// Filters run in a fixed order on a copy of the catalog (query, then
/// price bounds), each preserving relative order; the sort runs last and
/// is stable, so equal keys keep catalog order. An empty result is a
/// normal output.
pub fn apply(catalog: &Catalog, criteria: &FilterCriteria) -> Vec<Product> {
    let mut list: Vec<Product> = catalog.all().to_vec();

    let query = criteria.query.trim().to_lowercase();
    if !query.is_empty() {
        list.retain(|p| p.title.to_lowercase().contains(&query));
    }

    if let Some(min) = criteria.min_price {
        list.retain(|p| p.price >= min);
    }
    if let Some(max) = criteria.max_price {
        list.retain(|p| p.price <= max);
    }

    match criteria.sort {
        SortKey::Default => {}
        SortKey::PriceAsc => list.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => list.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::TitleAsc => list.sort_by(|a, b| title_key(&a.title).cmp(&title_key(&b.title))),
        SortKey::TitleDesc => list.sort_by(|a, b| title_key(&b.title).cmp(&title_key(&a.title))),
    }

    list
}

// Case-folded collation key; approximates locale collation well enough for
// store titles without pulling in a full ICU stack.
fn title_key(title: &str) -> String {
    title.to_lowercase()
}
