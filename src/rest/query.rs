//! Query parameters for list and get operations.
//!
//! [`QueryParams`] is a flat record of every filter, sort, and pagination
//! option the catalog endpoints understand. A field left at its default
//! (zero, empty, `None`) is not sent. Each field maps to exactly one query
//! parameter name through a static table, so adding a filter means adding one
//! field and one table row.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::rest::{QueryParams, SortDirection};
//!
//! let params = QueryParams {
//!     page: 2,
//!     limit: 50,
//!     sort: "name".to_string(),
//!     direction: Some(SortDirection::Asc),
//!     ..Default::default()
//! };
//!
//! assert_eq!(params.encode(), "direction=asc&limit=50&page=2&sort=name");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sort order for list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl SortDirection {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter, sort, and pagination options.
///
/// Numbers are sent only when greater than zero, text only when non-empty,
/// and flags only when `Some`. Lists add one entry per element, in order.
/// Decimal fields are formatted with two fractional digits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    /// `page`
    pub page: u32,
    /// `limit`
    pub limit: u32,
    /// `direction`
    pub direction: Option<SortDirection>,
    /// `sort`
    pub sort: String,
    /// `include`, e.g. `variants`, `images`
    pub include: Vec<String>,
    /// `id`
    pub id: Vec<u64>,
    /// `id:in`
    pub id_in: Vec<u64>,
    /// `id:not_in`
    pub id_not_in: Vec<u64>,
    /// `id:min`
    pub id_min: u64,
    /// `id:max`
    pub id_max: u64,
    /// `id:greater`
    pub id_greater: u64,
    /// `id:less`
    pub id_less: u64,
    /// `name`
    pub name: String,
    /// `sku`
    pub sku: String,
    /// `price`
    pub price: f64,
    /// `price:min`
    pub price_min: f64,
    /// `price:max`
    pub price_max: f64,
    /// `weight`
    pub weight: f64,
    /// `weight:min`
    pub weight_min: f64,
    /// `weight:max`
    pub weight_max: f64,
    /// `condition`
    pub condition: String,
    /// `is_visible`
    pub is_visible: Option<bool>,
    /// `is_featured`
    pub is_featured: Option<bool>,
    /// `categories`
    pub category_id: Vec<u64>,
    /// `brand_id`
    pub brand_id: Vec<u64>,
    /// `keyword`
    pub keyword: String,
    /// `is_active`
    pub is_active: Option<bool>,
    /// `date_created`, passed through verbatim
    pub date_created: String,
    /// `date_modified`, passed through verbatim
    pub date_modified: String,
}

/// One row of the field table: the parameter name and how to render the field.
struct QueryField {
    name: &'static str,
    values: fn(&QueryParams) -> Vec<String>,
}

fn count(n: u64) -> Vec<String> {
    if n > 0 {
        vec![n.to_string()]
    } else {
        Vec::new()
    }
}

fn text(s: &str) -> Vec<String> {
    if s.is_empty() {
        Vec::new()
    } else {
        vec![s.to_string()]
    }
}

fn ids(list: &[u64]) -> Vec<String> {
    list.iter().map(u64::to_string).collect()
}

fn decimal(x: f64) -> Vec<String> {
    if x > 0.0 {
        vec![format!("{x:.2}")]
    } else {
        Vec::new()
    }
}

fn flag(b: Option<bool>) -> Vec<String> {
    b.map(|b| b.to_string()).into_iter().collect()
}

const FIELDS: &[QueryField] = &[
    QueryField { name: "page", values: |q| count(u64::from(q.page)) },
    QueryField { name: "limit", values: |q| count(u64::from(q.limit)) },
    QueryField {
        name: "direction",
        values: |q| q.direction.map(|d| d.as_str().to_string()).into_iter().collect(),
    },
    QueryField { name: "sort", values: |q| text(&q.sort) },
    QueryField { name: "include", values: |q| q.include.clone() },
    QueryField { name: "id", values: |q| ids(&q.id) },
    QueryField { name: "id:in", values: |q| ids(&q.id_in) },
    QueryField { name: "id:not_in", values: |q| ids(&q.id_not_in) },
    QueryField { name: "id:min", values: |q| count(q.id_min) },
    QueryField { name: "id:max", values: |q| count(q.id_max) },
    QueryField { name: "id:greater", values: |q| count(q.id_greater) },
    QueryField { name: "id:less", values: |q| count(q.id_less) },
    QueryField { name: "name", values: |q| text(&q.name) },
    QueryField { name: "sku", values: |q| text(&q.sku) },
    QueryField { name: "price", values: |q| decimal(q.price) },
    QueryField { name: "price:min", values: |q| decimal(q.price_min) },
    QueryField { name: "price:max", values: |q| decimal(q.price_max) },
    QueryField { name: "weight", values: |q| decimal(q.weight) },
    QueryField { name: "weight:min", values: |q| decimal(q.weight_min) },
    QueryField { name: "weight:max", values: |q| decimal(q.weight_max) },
    QueryField { name: "condition", values: |q| text(&q.condition) },
    QueryField { name: "is_visible", values: |q| flag(q.is_visible) },
    QueryField { name: "is_featured", values: |q| flag(q.is_featured) },
    QueryField { name: "categories", values: |q| ids(&q.category_id) },
    QueryField { name: "brand_id", values: |q| ids(&q.brand_id) },
    QueryField { name: "keyword", values: |q| text(&q.keyword) },
    QueryField { name: "is_active", values: |q| flag(q.is_active) },
    QueryField { name: "date_created", values: |q| text(&q.date_created) },
    QueryField { name: "date_modified", values: |q| text(&q.date_modified) },
];

impl QueryParams {
    /// Parameters selecting one page of a collection.
    #[must_use]
    pub fn paged(page: u32, limit: u32) -> Self {
        Self {
            page,
            limit,
            ..Self::default()
        }
    }

    /// Returns the `(name, value)` pairs in field declaration order.
    ///
    /// List fields contribute one pair per element, in element order.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        FIELDS
            .iter()
            .flat_map(|field| {
                (field.values)(self)
                    .into_iter()
                    .map(move |value| (field.name, value))
            })
            .collect()
    }

    /// Returns `true` when no field would be sent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        FIELDS.iter().all(|field| (field.values)(self).is_empty())
    }

    /// Encodes the parameters as `application/x-www-form-urlencoded`.
    ///
    /// Keys are sorted; pairs sharing a key keep their relative order.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut pairs = self.to_pairs();
        pairs.sort_by_key(|(name, _)| *name);
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish()
    }
}
