// Top-products table
use serde::Serialize;

pub const CAPTION: &str = "Top Products - Performance";
pub const HEADERS: [&str; 5] = ["SKU", "Category", "Revenue", "Conv%", "Returns%"];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProductRow {
    pub sku: &'static str,
    pub category: &'static str,
    pub revenue: &'static str,
    pub conversion: f64,
    pub returns: f64,
}

impl ProductRow {
    /// Cell text in column order; rates are printed as-is with a `%` suffix.
    pub fn cells(&self) -> [String; 5] {
        [
            self.sku.to_string(),
            self.category.to_string(),
            self.revenue.to_string(),
            format!("{}%", self.conversion),
            format!("{}%", self.returns),
        ]
    }
}

pub const ROWS: [ProductRow; 4] = [
    ProductRow {
        sku: "HX-200",
        category: "Electronics",
        revenue: "$420k",
        conversion: 4.6,
        returns: 2.1,
    },
    ProductRow {
        sku: "KT-014",
        category: "Kitchen",
        revenue: "$330k",
        conversion: 3.9,
        returns: 1.5,
    },
    ProductRow {
        sku: "HM-882",
        category: "Home",
        revenue: "$305k",
        conversion: 3.5,
        returns: 2.3,
    },
    ProductRow {
        sku: "SP-120",
        category: "Sports",
        revenue: "$280k",
        conversion: 3.2,
        returns: 1.9,
    },
];
