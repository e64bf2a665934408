//! Collection route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query};
use serde::Deserialize;
use tracing::instrument;

use atelier_core::catalog::{self, CatalogQuery, Category, Product, SortKey};
use atelier_core::types::ProductId;

use crate::filters;
use crate::middleware::CspNonce;
use crate::routes::query::lenient;
use crate::shell::PageShell;

/// Product card display data.
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub id: u32,
    pub name: &'static str,
    pub image: &'static str,
    pub price: String,
    pub original_price: Option<String>,
    pub discount: u8,
    pub rating: String,
    pub stars: String,
    pub review_count: u32,
    pub subcategory: &'static str,
    pub quick_view_href: String,
}

impl ProductCard {
    fn new(product: &Product, link: &CollectionLink<'_>) -> Self {
        let filled = product.stars();
        Self {
            id: product.id.as_u32(),
            name: product.name,
            image: product.image,
            price: product.price().display(),
            original_price: product
                .is_discounted()
                .then(|| product.original_price().display()),
            discount: product.discount,
            rating: format!("{:.1}", product.rating),
            stars: format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled)),
            review_count: product.review_count,
            subcategory: product.subcategory,
            quick_view_href: link.with_product(product.id.as_u32()).href(),
        }
    }
}

/// Collection card on the index page.
#[derive(Debug, Clone)]
pub struct CategoryCard {
    pub category: Category,
    pub product_count: usize,
}

/// Pill or option with a link and selection state.
#[derive(Debug, Clone)]
pub struct FilterLink {
    pub value: String,
    pub label: String,
    pub selected: bool,
    pub href: String,
}

/// Pagination link.
#[derive(Debug, Clone)]
pub struct PageLink {
    pub number: usize,
    pub current: bool,
    pub href: String,
}

/// Collection listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "collections/index.html")]
pub struct CollectionsIndexTemplate {
    pub shell: PageShell,
    pub categories: Vec<CategoryCard>,
}

/// Collection detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "collections/show.html")]
pub struct CollectionShowTemplate {
    pub shell: PageShell,
    pub category: Category,
    pub subcategory: String,
    pub sort: &'static str,
    pub subcategories: Vec<FilterLink>,
    pub sorts: Vec<FilterLink>,
    pub products: Vec<ProductCard>,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    pub pages: Vec<PageLink>,
    pub previous_href: Option<String>,
    pub next_href: Option<String>,
    pub quick_view: Option<ProductCard>,
    pub close_href: String,
}

/// Collection query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct CollectionQuery {
    #[serde(default)]
    pub sub: String,
    #[serde(default)]
    pub sort: String,
    #[serde(default, deserialize_with = "lenient")]
    pub page: Option<usize>,
    #[serde(default, deserialize_with = "lenient")]
    pub product: Option<u32>,
}

/// Builder for collection URLs that preserves the current filters.
#[derive(Debug, Clone, Copy)]
pub struct CollectionLink<'a> {
    category: &'a str,
    sub: &'a str,
    sort: SortKey,
    page: usize,
    product: Option<u32>,
}

impl<'a> CollectionLink<'a> {
    #[must_use]
    pub const fn new(category: &'a str) -> Self {
        Self {
            category,
            sub: "",
            sort: SortKey::Featured,
            page: 1,
            product: None,
        }
    }

    #[must_use]
    pub const fn with_sub(mut self, sub: &'a str) -> Self {
        self.sub = sub;
        self
    }

    #[must_use]
    pub const fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    #[must_use]
    pub const fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    #[must_use]
    pub const fn with_product(mut self, product: u32) -> Self {
        self.product = Some(product);
        self
    }

    #[must_use]
    pub const fn without_product(mut self) -> Self {
        self.product = None;
        self
    }

    /// Path and query string, omitting default values.
    #[must_use]
    pub fn href(&self) -> String {
        let mut params = Vec::new();
        if !self.sub.is_empty() {
            params.push(format!("sub={}", urlencoding::encode(self.sub)));
        }
        if self.sort != SortKey::Featured {
            params.push(format!("sort={}", self.sort.as_str()));
        }
        if self.page > 1 {
            params.push(format!("page={}", self.page));
        }
        if let Some(id) = self.product {
            params.push(format!("product={id}"));
        }

        let path = format!("/collections/{}", urlencoding::encode(self.category));
        if params.is_empty() {
            path
        } else {
            format!("{path}?{}", params.join("&"))
        }
    }
}

/// Display collection listing page.
#[instrument(skip(nonce))]
pub async fn index(nonce: CspNonce) -> CollectionsIndexTemplate {
    let categories = catalog::categories()
        .into_iter()
        .map(|category| CategoryCard {
            product_count: CatalogQuery::new(&category.key)
                .filter(catalog::products())
                .len(),
            category,
        })
        .collect();

    CollectionsIndexTemplate {
        shell: PageShell::new("Collections", &nonce)
            .describe("Browse every Atelier collection."),
        categories,
    }
}

/// Display a collection with filtered, sorted and paginated products.
///
/// Unknown category keys render a synthesized category with no products.
#[instrument(skip(nonce))]
pub async fn show(
    nonce: CspNonce,
    Path(key): Path<String>,
    Query(query): Query<CollectionQuery>,
) -> CollectionShowTemplate {
    let category = catalog::category(&key);
    let sort = SortKey::parse(&query.sort);
    // "all" is the same as no subcategory filter
    let sub = match query.sub.trim() {
        "all" => "",
        sub => sub,
    };

    let result = CatalogQuery::new(&key)
        .subcategory(Some(sub))
        .sort(sort)
        .page(query.page.unwrap_or(1))
        .run(catalog::products());

    let link = CollectionLink::new(&key)
        .with_sub(sub)
        .with_sort(sort)
        .with_page(result.page);

    let subcategories = if category.subcategories.is_empty() {
        Vec::new()
    } else {
        std::iter::once(("", "All".to_string()))
            .chain(
                category
                    .subcategories
                    .iter()
                    .map(|s| (s.as_str(), title_case(s))),
            )
            .map(|(value, label)| FilterLink {
                value: value.to_string(),
                label,
                selected: value == sub,
                href: CollectionLink::new(&key).with_sub(value).with_sort(sort).href(),
            })
            .collect()
    };

    let sorts = SortKey::ALL
        .iter()
        .map(|option| FilterLink {
            value: option.as_str().to_string(),
            label: option.label().to_string(),
            selected: *option == sort,
            href: CollectionLink::new(&key).with_sub(sub).with_sort(*option).href(),
        })
        .collect();

    let pages = (1..=result.total_pages)
        .map(|number| PageLink {
            number,
            current: number == result.page,
            href: link.with_page(number).href(),
        })
        .collect();

    let quick_view = query
        .product
        .and_then(|id| catalog::find_product(ProductId::new(id)))
        .map(|product| ProductCard::new(product, &link));

    CollectionShowTemplate {
        shell: PageShell::new(category.name.clone(), &nonce)
            .describe(category.description.clone())
            .back_to("/collections"),
        subcategory: sub.to_string(),
        sort: sort.as_str(),
        subcategories,
        sorts,
        products: result
            .items
            .iter()
            .map(|product| ProductCard::new(product, &link))
            .collect(),
        total: result.total,
        page: result.page,
        total_pages: result.total_pages,
        pages,
        previous_href: result
            .has_previous()
            .then(|| link.with_page(result.page - 1).href()),
        next_href: result
            .has_next()
            .then(|| link.with_page(result.page + 1).href()),
        quick_view,
        close_href: link.without_product().href(),
        category,
    }
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_omits_defaults() {
        assert_eq!(CollectionLink::new("women").href(), "/collections/women");
    }

    #[test]
    fn test_link_keeps_filters() {
        let link = CollectionLink::new("women")
            .with_sub("dresses")
            .with_sort(SortKey::PriceLow)
            .with_page(2)
            .with_product(15);
        assert_eq!(
            link.href(),
            "/collections/women?sub=dresses&sort=price-low&page=2&product=15"
        );
        assert_eq!(
            link.without_product().href(),
            "/collections/women?sub=dresses&sort=price-low&page=2"
        );
    }

    #[test]
    fn test_link_encodes_segments() {
        assert_eq!(
            CollectionLink::new("summer linen").href(),
            "/collections/summer%20linen"
        );
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("outerwear"), "Outerwear");
        assert_eq!(title_case(""), "");
    }
}
