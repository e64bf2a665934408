//! Static product catalog and the collection filter/sort/paginate pipeline.
//!
//! The catalog is a fixed list of fifteen products. A collection page runs a
//! [`CatalogQuery`] against it on every request:
//!
//! 1. category predicate (`all`, `new-arrivals`, `sale`, or exact category match)
//! 2. optional subcategory equality filter
//! 3. stable sort by [`SortKey`]
//! 4. pagination
//!
//! ```
//! use atelier_core::catalog::{self, CatalogQuery, SortKey};
//!
//! let page = CatalogQuery::new("women")
//!     .sort(SortKey::PriceLow)
//!     .run(catalog::products());
//! assert!(page.items.windows(2).all(|w| w[0].price_cents <= w[1].price_cents));
//! ```

use serde::Serialize;

use crate::types::{Price, ProductId};

/// Category key that selects the most recent additions.
pub const NEW_ARRIVALS: &str = "new-arrivals";

/// Collection key that matches every product.
pub const ALL_PRODUCTS: &str = "all";

/// Category key that selects discounted products.
pub const SALE: &str = "sale";

/// Number of products the `new-arrivals` collection shows.
pub const NEW_ARRIVALS_COUNT: usize = 5;

/// Products above this discount percentage are on sale.
pub const SALE_DISCOUNT_THRESHOLD: u8 = 18;

/// Products per collection page.
pub const PRODUCTS_PER_PAGE: usize = 12;

/// Banner used for categories that are not in the lookup table.
pub const DEFAULT_BANNER: &str = "/static/images/banners/default.jpg";

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: &'static str,
    pub price_cents: u32,
    pub original_price_cents: u32,
    /// Discount percentage off the original price.
    pub discount: u8,
    pub image: &'static str,
    pub category: &'static str,
    pub subcategory: &'static str,
    pub rating: f32,
    pub review_count: u32,
}

impl Product {
    /// Current selling price.
    #[must_use]
    pub fn price(&self) -> Price {
        Price::from_cents(self.price_cents)
    }

    /// Price before discount.
    #[must_use]
    pub fn original_price(&self) -> Price {
        Price::from_cents(self.original_price_cents)
    }

    /// Whether any discount applies.
    #[must_use]
    pub const fn is_discounted(&self) -> bool {
        self.discount > 0
    }

    /// Whether the product belongs to the `sale` collection.
    #[must_use]
    pub const fn is_on_sale(&self) -> bool {
        self.discount > SALE_DISCOUNT_THRESHOLD
    }

    /// Rating rounded to whole stars, for the star row.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn stars(&self) -> usize {
        self.rating.round().clamp(0.0, 5.0) as usize
    }
}

/// A collection category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub key: String,
    pub name: String,
    pub description: String,
    pub banner: String,
    pub subcategories: Vec<String>,
}

impl Category {
    /// Synthesize a category for a URL segment that has no table entry.
    ///
    /// `summer-linen` becomes "Summer Linen" with a generic description.
    #[must_use]
    pub fn fallback(segment: &str) -> Self {
        let name = title_case(segment);
        Self {
            key: segment.to_string(),
            description: format!("Discover our curated {name} collection."),
            name,
            banner: DEFAULT_BANNER.to_string(),
            subcategories: Vec::new(),
        }
    }
}

/// Static category table row.
struct CategoryRow {
    key: &'static str,
    name: &'static str,
    description: &'static str,
    banner: &'static str,
    subcategories: &'static [&'static str],
}

impl From<&CategoryRow> for Category {
    fn from(row: &CategoryRow) -> Self {
        Self {
            key: row.key.to_string(),
            name: row.name.to_string(),
            description: row.description.to_string(),
            banner: row.banner.to_string(),
            subcategories: row.subcategories.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

static CATEGORIES: &[CategoryRow] = &[
    CategoryRow {
        key: ALL_PRODUCTS,
        name: "All Products",
        description: "Every piece in the collection, from wardrobe staples to the home.",
        banner: DEFAULT_BANNER,
        subcategories: &[],
    },
    CategoryRow {
        key: "women",
        name: "Women",
        description: "Effortless silhouettes in natural fibres, cut to be worn season after season.",
        banner: "/static/images/banners/women.jpg",
        subcategories: &["dresses", "tops", "outerwear"],
    },
    CategoryRow {
        key: "men",
        name: "Men",
        description: "Considered essentials with quiet details and lasting construction.",
        banner: "/static/images/banners/men.jpg",
        subcategories: &["shirts", "outerwear", "trousers"],
    },
    CategoryRow {
        key: "accessories",
        name: "Accessories",
        description: "Leather goods and jewellery that finish every look.",
        banner: "/static/images/banners/accessories.jpg",
        subcategories: &["bags", "jewelry"],
    },
    CategoryRow {
        key: "home",
        name: "Home",
        description: "Handmade pieces that bring warmth and texture to every room.",
        banner: "/static/images/banners/home.jpg",
        subcategories: &["decor", "textiles"],
    },
    CategoryRow {
        key: NEW_ARRIVALS,
        name: "New Arrivals",
        description: "The latest additions to our collection, fresh from the studio.",
        banner: "/static/images/banners/new-arrivals.jpg",
        subcategories: &[],
    },
    CategoryRow {
        key: SALE,
        name: "Sale",
        description: "Limited-time reductions on favourites from every collection.",
        banner: "/static/images/banners/sale.jpg",
        subcategories: &[],
    },
];

#[rustfmt::skip]
static PRODUCTS: &[Product] = &[
    product(1, "Linen Wrap Dress", "/static/images/products/linen-wrap-dress.jpg", 8900, 11900, 25, "women", "dresses", 4.8, 124),
    product(2, "Silk Camisole", "/static/images/products/silk-camisole.jpg", 5400, 5400, 0, "women", "tops", 4.5, 86),
    product(3, "Wool Blend Coat", "/static/images/products/wool-blend-coat.jpg", 18900, 23900, 21, "women", "outerwear", 4.9, 203),
    product(4, "Oxford Shirt", "/static/images/products/oxford-shirt.jpg", 6900, 7900, 13, "men", "shirts", 4.4, 157),
    product(5, "Chore Jacket", "/static/images/products/chore-jacket.jpg", 12900, 15900, 19, "men", "outerwear", 4.7, 98),
    product(6, "Pleated Trousers", "/static/images/products/pleated-trousers.jpg", 7900, 7900, 0, "men", "trousers", 4.2, 64),
    product(7, "Leather Tote", "/static/images/products/leather-tote.jpg", 14900, 19900, 25, "accessories", "bags", 4.9, 311),
    product(8, "Gold Hoop Earrings", "/static/images/products/gold-hoop-earrings.jpg", 3900, 4500, 13, "accessories", "jewelry", 4.6, 142),
    product(9, "Ceramic Vase", "/static/images/products/ceramic-vase.jpg", 4500, 5500, 18, "home", "decor", 4.3, 57),
    product(10, "Linen Throw", "/static/images/products/linen-throw.jpg", 6400, 8000, 20, "home", "textiles", 4.8, 89),
    product(11, "Cashmere Crewneck", "/static/images/products/cashmere-crewneck.jpg", 11900, 11900, 0, "women", "tops", 4.7, 176),
    product(12, "Denim Overshirt", "/static/images/products/denim-overshirt.jpg", 8400, 9900, 15, "men", "shirts", 4.5, 73),
    product(13, "Woven Crossbody", "/static/images/products/woven-crossbody.jpg", 9800, 12900, 24, "accessories", "bags", 4.6, 48),
    product(14, "Stoneware Mug Set", "/static/images/products/stoneware-mug-set.jpg", 3600, 3600, 0, "home", "decor", 4.4, 39),
    product(15, "Satin Slip Dress", "/static/images/products/satin-slip-dress.jpg", 9900, 13900, 29, "women", "dresses", 4.8, 66),
];

#[allow(clippy::too_many_arguments)]
const fn product(
    id: u32,
    name: &'static str,
    image: &'static str,
    price_cents: u32,
    original_price_cents: u32,
    discount: u8,
    category: &'static str,
    subcategory: &'static str,
    rating: f32,
    review_count: u32,
) -> Product {
    Product {
        id: ProductId::new(id),
        name,
        price_cents,
        original_price_cents,
        discount,
        image,
        category,
        subcategory,
        rating,
        review_count,
    }
}

/// The full static product list, in catalog order.
#[must_use]
pub fn products() -> &'static [Product] {
    PRODUCTS
}

/// Find a product by ID.
#[must_use]
pub fn find_product(id: ProductId) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

/// Look up a category by key, synthesizing one for unknown keys.
#[must_use]
pub fn category(key: &str) -> Category {
    CATEGORIES
        .iter()
        .find(|row| row.key == key)
        .map_or_else(|| Category::fallback(key), Category::from)
}

/// All categories in the lookup table, in display order.
#[must_use]
pub fn categories() -> Vec<Category> {
    CATEGORIES.iter().map(Category::from).collect()
}

/// Sort order for a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum SortKey {
    /// Catalog order, unchanged.
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    Rating,
    /// Reverse of catalog order.
    Newest,
}

impl SortKey {
    /// All sort keys in the order the sort menu lists them.
    pub const ALL: [Self; 5] = [
        Self::Featured,
        Self::PriceLow,
        Self::PriceHigh,
        Self::Rating,
        Self::Newest,
    ];

    /// Parse from URL parameter value. Unknown values fall back to `Featured`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "price-low" => Self::PriceLow,
            "price-high" => Self::PriceHigh,
            "rating" => Self::Rating,
            "newest" => Self::Newest,
            _ => Self::Featured,
        }
    }

    /// Convert to URL parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
            Self::Newest => "newest",
        }
    }

    /// Label shown in the sort menu.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::PriceLow => "Price: Low to High",
            Self::PriceHigh => "Price: High to Low",
            Self::Rating => "Top Rated",
            Self::Newest => "Newest",
        }
    }
}

/// One page of a collection query.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage<'a> {
    pub items: Vec<&'a Product>,
    /// Number of products matching the filters, across all pages.
    pub total: usize,
    /// 1-based page number actually served.
    pub page: usize,
    pub total_pages: usize,
}

impl ProductPage<'_> {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// A collection query: category, optional subcategory, sort order and page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery<'q> {
    category: &'q str,
    subcategory: Option<&'q str>,
    sort: SortKey,
    page: usize,
}

impl<'q> CatalogQuery<'q> {
    /// Query the first page of a category in featured order.
    #[must_use]
    pub const fn new(category: &'q str) -> Self {
        Self {
            category,
            subcategory: None,
            sort: SortKey::Featured,
            page: 1,
        }
    }

    /// Restrict to a subcategory. Empty strings and `all` mean no filter.
    #[must_use]
    pub fn subcategory(mut self, subcategory: Option<&'q str>) -> Self {
        self.subcategory = subcategory.filter(|s| !s.is_empty() && *s != "all");
        self
    }

    #[must_use]
    pub const fn sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// 1-based page number; zero is treated as the first page.
    #[must_use]
    pub const fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Apply the category and subcategory predicates, keeping input order.
    #[must_use]
    pub fn filter<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let by_category: Vec<&Product> = match self.category {
            NEW_ARRIVALS => products
                .iter()
                .skip(products.len().saturating_sub(NEW_ARRIVALS_COUNT))
                .collect(),
            ALL_PRODUCTS => products.iter().collect(),
            // Sale ignores every other filter.
            SALE => return products.iter().filter(|p| p.is_on_sale()).collect(),
            key => products.iter().filter(|p| p.category == key).collect(),
        };

        match self.subcategory {
            Some(sub) => by_category
                .into_iter()
                .filter(|p| p.subcategory == sub)
                .collect(),
            None => by_category,
        }
    }

    /// Filter, sort and paginate.
    #[must_use]
    pub fn run<'a>(&self, products: &'a [Product]) -> ProductPage<'a> {
        let mut matched = self.filter(products);
        sort_products(&mut matched, self.sort);
        paginate(matched, self.page, PRODUCTS_PER_PAGE)
    }
}

/// Stable sort in place according to `sort`.
pub fn sort_products(products: &mut [&Product], sort: SortKey) {
    match sort {
        SortKey::Featured => {}
        SortKey::PriceLow => products.sort_by_key(|p| p.price_cents),
        SortKey::PriceHigh => products.sort_by(|a, b| b.price_cents.cmp(&a.price_cents)),
        SortKey::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Newest => products.reverse(),
    }
}

/// Slice `items` into the requested page, clamping to the valid range.
///
/// Page numbers are 1-based; zero maps to the first page and anything past
/// the end maps to the last page. An empty input still has one (empty) page.
#[must_use]
pub fn paginate(items: Vec<&Product>, page: usize, per_page: usize) -> ProductPage<'_> {
    let total = items.len();
    let per_page = per_page.max(1);
    let total_pages = total.div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);
    let items = items
        .into_iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .collect();

    ProductPage {
        items,
        total,
        page,
        total_pages,
    }
}

fn title_case(segment: &str) -> String {
    segment
        .split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const CATEGORY_KEYS: [&str; 8] = [
        ALL_PRODUCTS,
        "women",
        "men",
        "accessories",
        "home",
        NEW_ARRIVALS,
        SALE,
        "unknown",
    ];

    fn ids(items: &[&Product]) -> Vec<u32> {
        items.iter().map(|p| p.id.as_u32()).collect()
    }

    fn is_sorted_by(items: &[&Product], sort: SortKey) -> bool {
        items.windows(2).all(|w| match sort {
            SortKey::PriceLow => w[0].price_cents <= w[1].price_cents,
            SortKey::PriceHigh => w[0].price_cents >= w[1].price_cents,
            SortKey::Rating => w[0].rating >= w[1].rating,
            SortKey::Featured | SortKey::Newest => true,
        })
    }

    #[test]
    fn test_catalog_has_fifteen_unique_products() {
        assert_eq!(products().len(), 15);
        let unique: HashSet<_> = products().iter().map(|p| p.id).collect();
        assert_eq!(unique.len(), 15);
    }

    #[test]
    fn test_every_combination_is_a_sorted_subset_without_duplicates() {
        let all: HashSet<u32> = products().iter().map(|p| p.id.as_u32()).collect();

        for key in CATEGORY_KEYS {
            let mut subs: Vec<Option<String>> = vec![None];
            subs.extend(
                products()
                    .iter()
                    .map(|p| Some(p.subcategory.to_string())),
            );

            for sub in &subs {
                for sort in SortKey::ALL {
                    let matched = {
                        let query = CatalogQuery::new(key)
                            .subcategory(sub.as_deref())
                            .sort(sort);
                        let mut items = query.filter(products());
                        sort_products(&mut items, sort);
                        items
                    };

                    let seen: HashSet<u32> = ids(&matched).into_iter().collect();
                    assert_eq!(seen.len(), matched.len(), "duplicates for {key}/{sub:?}");
                    assert!(seen.is_subset(&all));
                    assert!(
                        is_sorted_by(&matched, sort),
                        "{key}/{sub:?} not sorted by {sort:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_sale_ignores_subcategory_and_sort_membership() {
        let expected: HashSet<u32> = products()
            .iter()
            .filter(|p| p.discount > 18)
            .map(|p| p.id.as_u32())
            .collect();
        assert!(!expected.is_empty());

        for sub in [None, Some("dresses"), Some("bags"), Some("nope")] {
            for sort in SortKey::ALL {
                let items = CatalogQuery::new(SALE)
                    .subcategory(sub)
                    .sort(sort)
                    .filter(products());
                let got: HashSet<u32> = ids(&items).into_iter().collect();
                assert_eq!(got, expected);
            }
        }
    }

    #[test]
    fn test_discount_of_exactly_eighteen_is_not_sale() {
        let vase = find_product(ProductId::new(9)).unwrap();
        assert_eq!(vase.discount, 18);
        assert!(!vase.is_on_sale());
    }

    #[test]
    fn test_new_arrivals_are_last_five_in_order() {
        let items = CatalogQuery::new(NEW_ARRIVALS).filter(products());
        assert_eq!(ids(&items), vec![11, 12, 13, 14, 15]);
    }

    #[test]
    fn test_all_returns_every_product_paginated() {
        let page = CatalogQuery::new(ALL_PRODUCTS).run(products());
        assert_eq!(page.total, 15);
        assert_eq!(page.items.len(), PRODUCTS_PER_PAGE);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_new_arrivals_on_short_list() {
        let short = &products()[..3];
        let items = CatalogQuery::new(NEW_ARRIVALS).filter(short);
        assert_eq!(ids(&items), vec![1, 2, 3]);
    }

    #[test]
    fn test_newest_reverses_filtered_order() {
        let page = CatalogQuery::new("women")
            .sort(SortKey::Newest)
            .run(products());
        assert_eq!(ids(&page.items), vec![15, 11, 3, 2, 1]);
    }

    #[test]
    fn test_featured_keeps_catalog_order() {
        let page = CatalogQuery::new("men").run(products());
        assert_eq!(ids(&page.items), vec![4, 5, 6, 12]);
    }

    #[test]
    fn test_subcategory_filter() {
        let page = CatalogQuery::new("women")
            .subcategory(Some("dresses"))
            .run(products());
        assert_eq!(ids(&page.items), vec![1, 15]);
    }

    #[test]
    fn test_empty_and_all_subcategory_mean_no_filter() {
        let none = CatalogQuery::new("home").run(products());
        let empty = CatalogQuery::new("home").subcategory(Some("")).run(products());
        let all = CatalogQuery::new("home").subcategory(Some("all")).run(products());
        assert_eq!(none, empty);
        assert_eq!(none, all);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let page = CatalogQuery::new("summer-linen").run(products());
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn test_rating_sort_is_stable() {
        let page = CatalogQuery::new("women")
            .sort(SortKey::Rating)
            .run(products());
        // 1 and 15 share 4.8 and keep catalog order.
        assert_eq!(ids(&page.items), vec![3, 1, 15, 11, 2]);
    }

    #[test]
    fn test_pagination_clamps() {
        let all: Vec<&Product> = products().iter().collect();

        let first = paginate(all.clone(), 0, 12);
        assert_eq!(first.page, 1);
        assert_eq!(first.items.len(), 12);
        assert_eq!(first.total_pages, 2);
        assert!(first.has_next());
        assert!(!first.has_previous());

        let last = paginate(all.clone(), 99, 12);
        assert_eq!(last.page, 2);
        assert_eq!(ids(&last.items), vec![13, 14, 15]);
        assert!(last.has_previous());
        assert!(!last.has_next());

        assert_eq!(last.total, 15);
    }

    #[test]
    fn test_sort_key_parse() {
        for sort in SortKey::ALL {
            assert_eq!(SortKey::parse(sort.as_str()), sort);
        }
        assert_eq!(SortKey::parse("bogus"), SortKey::Featured);
    }

    #[test]
    fn test_known_category_lookup() {
        let women = category("women");
        assert_eq!(women.name, "Women");
        assert_eq!(women.subcategories, vec!["dresses", "tops", "outerwear"]);
    }

    #[test]
    fn test_unknown_category_fallback() {
        let cat = category("summer-linen");
        assert_eq!(cat.key, "summer-linen");
        assert_eq!(cat.name, "Summer Linen");
        assert_eq!(cat.description, "Discover our curated Summer Linen collection.");
        assert_eq!(cat.banner, DEFAULT_BANNER);
        assert!(cat.subcategories.is_empty());
    }

    #[test]
    fn test_price_display() {
        let coat = find_product(ProductId::new(3)).unwrap();
        assert_eq!(coat.price().display(), "$189.00");
        assert_eq!(coat.original_price().display(), "$239.00");
        assert_eq!(coat.stars(), 5);
    }
}
