use chrono::{DateTime, Local};
use scraper::{Html, Selector};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// One entry of the suggestion panel, as returned by `/api/search`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuggestionItem {
    pub name: String,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub products: Vec<SuggestionItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub struct ProductId(pub i64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub subcategory: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub local_image_path: Option<String>,
    pub product_url: Option<String>,
    pub design_group: Option<String>,
    pub color_group: Option<String>,
    pub finish: Option<String>,
    pub surface_type: Option<String>,
    pub price: Option<f64>,
    pub dimensions: Option<String>,
    pub material_code: Option<String>,
    // Rows older than the column come back as null
    #[serde(default, deserialize_with = "null_as_false")]
    pub discontinued: bool,
}

fn null_as_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

impl Product {
    /// Remote image first, then the scraper's local copy. Empty strings count as missing.
    pub fn image_source(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| {
                self.local_image_path
                    .as_deref()
                    .filter(|s| !s.trim().is_empty())
            })
    }

    pub fn filter_value(&self, field: FilterField) -> Option<&str> {
        let value = match field {
            FilterField::Category => Some(self.category.as_str()),
            FilterField::SurfaceType => self.surface_type.as_deref(),
            FilterField::DesignGroup => self.design_group.as_deref(),
            FilterField::ColorGroup => self.color_group.as_deref(),
        };
        value.filter(|v| !v.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ProductPage {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub pages: u64,
    #[serde(default = "first_page")]
    pub current_page: u32,
    #[serde(default)]
    pub has_next: bool,
    #[serde(default)]
    pub has_prev: bool,
}

fn first_page() -> u32 {
    1
}

impl ProductPage {
    /// Slices `products` the way the server paginates: out-of-range pages are empty, not errors.
    pub fn paginate(products: Vec<Product>, page: u32, per_page: u32) -> Self {
        let page = page.max(1);
        let per_page = per_page.max(1) as usize;
        let total = products.len();
        let pages = total.div_ceil(per_page);
        let start = (page as usize - 1).saturating_mul(per_page);

        Self {
            products: products.into_iter().skip(start).take(per_page).collect(),
            total: total as u64,
            pages: pages as u64,
            current_page: page,
            has_next: (page as usize) < pages,
            has_prev: page > 1,
        }
    }
}

/// Distinct non-empty values per select, gathered over the whole catalog.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterOptions {
    seen: HashMap<FilterField, BTreeSet<String>>,
}

impl FilterOptions {
    pub fn from_products(products: &[Product]) -> Self {
        let mut options = Self::default();
        options.absorb(products);
        options
    }

    pub fn absorb(&mut self, products: &[Product]) {
        for product in products {
            for field in FilterField::ALL {
                if let Some(value) = product.filter_value(field) {
                    self.seen
                        .entry(field)
                        .or_default()
                        .insert(value.trim().to_string());
                }
            }
        }
    }

    /// `None` ("All") first, then sorted values, always including `current`.
    pub fn choices(&self, field: FilterField, current: Option<&str>) -> Vec<Option<String>> {
        let mut values = self.seen.get(&field).cloned().unwrap_or_default();
        if let Some(current) = current {
            values.insert(current.to_string());
        }
        std::iter::once(None)
            .chain(values.into_iter().map(Some))
            .collect()
    }
}

/// One page of the filtered listing plus the options for every select.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductListing {
    pub page: ProductPage,
    pub options: FilterOptions,
}

/// The select controls of the filter sidebar, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Category,
    SurfaceType,
    DesignGroup,
    ColorGroup,
}

impl FilterField {
    pub const ALL: [FilterField; 4] = [
        FilterField::Category,
        FilterField::SurfaceType,
        FilterField::DesignGroup,
        FilterField::ColorGroup,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterField::Category => "Category",
            FilterField::SurfaceType => "Surface",
            FilterField::DesignGroup => "Design",
            FilterField::ColorGroup => "Color",
        }
    }

    pub fn query_key(self) -> &'static str {
        match self {
            FilterField::Category => "category",
            FilterField::SurfaceType => "surface_type",
            FilterField::DesignGroup => "design_group",
            FilterField::ColorGroup => "color_group",
        }
    }
}

/// Everything the product listing form submits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilters {
    pub search: Option<String>,
    pub category: Option<String>,
    pub surface_type: Option<String>,
    pub design_group: Option<String>,
    pub color_group: Option<String>,
    pub page: u32,
    pub per_page: u32,
}

impl Default for ProductFilters {
    fn default() -> Self {
        Self {
            search: None,
            category: None,
            surface_type: None,
            design_group: None,
            color_group: None,
            page: 1,
            per_page: 12,
        }
    }
}

impl ProductFilters {
    pub fn get(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::Category => self.category.as_deref(),
            FilterField::SurfaceType => self.surface_type.as_deref(),
            FilterField::DesignGroup => self.design_group.as_deref(),
            FilterField::ColorGroup => self.color_group.as_deref(),
        }
    }

    pub fn set(&mut self, field: FilterField, value: Option<String>) {
        let slot = match field {
            FilterField::Category => &mut self.category,
            FilterField::SurfaceType => &mut self.surface_type,
            FilterField::DesignGroup => &mut self.design_group,
            FilterField::ColorGroup => &mut self.color_group,
        };
        *slot = value.filter(|v| !v.trim().is_empty());
    }

    /// Case-insensitive substring match, as the listing form filters:
    /// search looks at name, description and material code.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let needle = search.to_lowercase();
            let hit = [
                Some(product.name.as_str()),
                product.description.as_deref(),
                product.material_code.as_deref(),
            ]
            .into_iter()
            .flatten()
            .any(|text| text.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        FilterField::ALL.iter().all(|&field| match self.get(field) {
            None => true,
            Some(wanted) => {
                let haystack = match field {
                    FilterField::Category => Some(product.category.as_str()),
                    FilterField::SurfaceType => product.surface_type.as_deref(),
                    FilterField::DesignGroup => product.design_group.as_deref(),
                    FilterField::ColorGroup => product.color_group.as_deref(),
                };
                haystack.is_some_and(|h| h.to_lowercase().contains(&wanted.to_lowercase()))
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminStatus {
    pub running: bool,
    pub fetched_at: DateTime<Local>,
}

impl AdminStatus {
    /// Running when any status badge of the admin page carries the marker.
    /// Text outside badges (flash messages, log descriptions) does not count.
    pub fn from_page(body: &str, running_marker: &str) -> Self {
        Self {
            running: badges_contain(body, running_marker),
            fetched_at: Local::now(),
        }
    }
}

fn badges_contain(body: &str, marker: &str) -> bool {
    if marker.is_empty() {
        return false;
    }
    let Ok(selector) = Selector::parse(".badge") else {
        return false;
    };
    Html::parse_document(body)
        .select(&selector)
        .any(|badge| badge.text().collect::<String>().contains(marker))
}
