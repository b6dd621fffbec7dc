//! The compiled-in menu.
//!
//! Categories and products are static data: loaded once at startup, never
//! created, mutated, or destroyed at runtime. Product and category IDs are
//! externally assigned slugs that the storefront client also knows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{CategoryId, ProductId};

/// A menu section ("Hambúrgueres", "Bebidas", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// A purchasable menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub category_id: CategoryId,
    pub name: String,
    pub description: String,
    /// Unit price in the deployment currency. Non-negative.
    pub price: Decimal,
    /// Image URI, passed through to clients unvalidated.
    pub image: String,
}

/// Immutable product catalog: ordered categories and their products.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from explicit data. Category and product order is
    /// preserved as given.
    #[must_use]
    pub const fn new(categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            categories,
            products,
        }
    }

    /// The standard Brasa Burgers menu.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(standard_categories(), standard_products())
    }

    /// All categories, in menu order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All products, in menu order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Products belonging to one category, in menu order.
    ///
    /// The iterator borrows only the catalog, so the category ID may be a
    /// temporary.
    pub fn products_in<'a>(
        &'a self,
        category_id: &CategoryId,
    ) -> impl Iterator<Item = &'a Product> + use<'a> {
        let category_id = category_id.clone();
        self.products
            .iter()
            .filter(move |p| p.category_id == category_id)
    }

    /// One-line-per-product summary used to seed the chat assistant's
    /// system prompt: `name: description (R$ price)`.
    #[must_use]
    pub fn menu_summary(&self) -> String {
        let entries: Vec<String> = self
            .products
            .iter()
            .map(|p| format!("{}: {} (R$ {:.2})", p.name, p.description, p.price))
            .collect();
        serde_json::to_string(&entries).unwrap_or_default()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_categories() -> Vec<Category> {
    [
        ("burgers", "Hambúrgueres"),
        ("drinks", "Bebidas"),
        ("sides", "Porções"),
        ("desserts", "Sobremesas"),
    ]
    .into_iter()
    .map(|(id, name)| Category {
        id: CategoryId::new(id),
        name: name.to_owned(),
    })
    .collect()
}

#[allow(clippy::too_many_lines)]
fn standard_products() -> Vec<Product> {
    struct Entry {
        id: &'static str,
        category: &'static str,
        name: &'static str,
        description: &'static str,
        price_cents: i64,
        image: &'static str,
    }

    let entries = [
        Entry {
            id: "b1",
            category: "burgers",
            name: "X-Bacon do Beto",
            description: "Pão brioche, burger 180g, queijo cheddar, muito bacon crocante e maionese da casa.",
            price_cents: 2800,
            image: "https://images.unsplash.com/photo-1594212699903-ec8a3eca50f5?q=80&w=800&auto=format&fit=crop",
        },
        Entry {
            id: "b2",
            category: "burgers",
            name: "X-Tudo Monstro",
            description: "Pão, 2 carnes de 150g, ovo, bacon, calabresa, alface, tomate e cheddar cremoso.",
            price_cents: 3500,
            image: "https://images.unsplash.com/photo-1568901346375-23c9450c58cd?q=80&w=800&auto=format&fit=crop",
        },
        Entry {
            id: "b3",
            category: "burgers",
            name: "Smash Simples",
            description: "Pão, carne prensada 100g e queijo prato. Simples e saboroso.",
            price_cents: 2000,
            image: "https://images.unsplash.com/photo-1551782450-a2132b4ba21d?q=80&w=800&auto=format&fit=crop",
        },
        Entry {
            id: "d1",
            category: "drinks",
            name: "Coca-Cola Lata",
            description: "Lata 350ml geladíssima.",
            price_cents: 600,
            image: "https://images.unsplash.com/photo-1622483767028-3f66f32aef97?q=80&w=800&auto=format&fit=crop",
        },
        Entry {
            id: "d2",
            category: "drinks",
            name: "Suco de Laranja",
            description: "Natural, feito na hora. 500ml.",
            price_cents: 1200,
            image: "https://images.unsplash.com/photo-1620916566398-39f1143ab7be?q=80&w=800&auto=format&fit=crop",
        },
        Entry {
            id: "s1",
            category: "sides",
            name: "Batata Frita Rustica",
            description: "Porção individual com alho e alecrim.",
            price_cents: 1500,
            image: "https://images.unsplash.com/photo-1630384060421-a4323ce66488?q=80&w=800&auto=format&fit=crop",
        },
        Entry {
            id: "s2",
            category: "sides",
            name: "Nuggets Crocantes",
            description: "10 unidades acompanhadas de molho barbecue.",
            price_cents: 1800,
            image: "https://images.unsplash.com/photo-1562967914-608f82629710?q=80&w=800&auto=format&fit=crop",
        },
        Entry {
            id: "de1",
            category: "desserts",
            name: "Pudim de Leite",
            description: "Aquele clássico da vovó, sem furinhos.",
            price_cents: 1000,
            image: "https://images.unsplash.com/photo-1639679647228-569b0d24c08e?q=80&w=800&auto=format&fit=crop",
        },
    ];

    entries
        .into_iter()
        .map(|e| Product {
            id: ProductId::new(e.id),
            category_id: CategoryId::new(e.category),
            name: e.name.to_owned(),
            description: e.description.to_owned(),
            price: Decimal::new(e.price_cents, 2),
            image: e.image.to_owned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_menu_has_all_sections() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.categories().len(), 4);
        assert_eq!(catalog.products().len(), 8);
    }

    #[test]
    fn every_product_belongs_to_a_known_category() {
        let catalog = Catalog::standard();
        for product in catalog.products() {
            assert!(
                catalog
                    .categories()
                    .iter()
                    .any(|c| c.id == product.category_id),
                "product {} references unknown category {}",
                product.id,
                product.category_id
            );
        }
    }

    #[test]
    fn product_lookup_by_id() {
        let catalog = Catalog::standard();
        let burger = catalog
            .product(&ProductId::new("b1"))
            .expect("b1 is on the menu");
        assert_eq!(burger.name, "X-Bacon do Beto");
        assert_eq!(burger.price, Decimal::new(2800, 2));

        assert!(catalog.product(&ProductId::new("nope")).is_none());
    }

    #[test]
    fn products_in_category_preserves_menu_order() {
        let catalog = Catalog::standard();
        let burgers: Vec<&str> = catalog
            .products_in(&CategoryId::new("burgers"))
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(burgers, vec!["b1", "b2", "b3"]);
    }

    #[test]
    fn products_in_iterator_outlives_the_category_id() {
        let catalog = Catalog::standard();
        let drinks = {
            let id = CategoryId::new("drinks");
            catalog.products_in(&id)
        };
        assert_eq!(drinks.count(), 2);
    }

    #[test]
    fn menu_summary_mentions_every_product() {
        let catalog = Catalog::standard();
        let summary = catalog.menu_summary();
        for product in catalog.products() {
            assert!(summary.contains(&product.name));
        }
        assert!(summary.contains("R$ 28.00"));
    }
}
