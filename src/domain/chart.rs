// Chart domain models and the literal datasets shown on the page
use serde::Serialize;
use serde_json::{Map, Value};

pub const GRID_STROKE: &str = "#2d2d2d";
pub const GRID_DASH: &str = "3 3";
pub const AXIS_STROKE: &str = "#a3a3a3";
pub const LINE_WIDTH: f64 = 2.0;
pub const PIE_OUTER_RADIUS: f64 = 100.0;

/// One category/period and its value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Datum {
    pub key: &'static str,
    pub value: f64,
}

impl Datum {
    pub const fn new(key: &'static str, value: f64) -> Self {
        Self { key, value }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: ChartKind,
    /// Field name of the category in the source records ("w", "cat", "name", "d").
    pub x_key: &'static str,
    /// Field name of the value in the source records ("rev", "value", "o", "r").
    pub y_key: &'static str,
    pub color: &'static str,
    pub y_unit: Option<&'static str>,
    pub data: &'static [Datum],
}

impl ChartSpec {
    /// The dataset as records keyed by the chart's field names, e.g. `{"w": "W6", "rev": 260.0}`.
    pub fn records(&self) -> Vec<Value> {
        self.data
            .iter()
            .map(|d| {
                let mut record = Map::new();
                record.insert(self.x_key.to_string(), Value::from(d.key));
                record.insert(self.y_key.to_string(), Value::from(d.value));
                Value::Object(record)
            })
            .collect()
    }

    pub fn max_value(&self) -> f64 {
        self.data.iter().map(|d| d.value).fold(0.0, f64::max)
    }

    pub fn total(&self) -> f64 {
        self.data.iter().map(|d| d.value).sum()
    }
}

pub const REVENUE_TREND: ChartSpec = ChartSpec {
    id: "revenue-trend",
    title: "Revenue Trend",
    kind: ChartKind::Line,
    x_key: "w",
    y_key: "rev",
    color: "#60a5fa",
    y_unit: None,
    data: &[
        Datum::new("W1", 120.0),
        Datum::new("W2", 160.0),
        Datum::new("W3", 150.0),
        Datum::new("W4", 210.0),
        Datum::new("W5", 240.0),
        Datum::new("W6", 260.0),
    ],
};

pub const TOP_CATEGORIES: ChartSpec = ChartSpec {
    id: "top-categories",
    title: "Top Categories - Revenue",
    kind: ChartKind::Bar,
    x_key: "cat",
    y_key: "rev",
    color: "#34d399",
    y_unit: None,
    data: &[
        Datum::new("Home", 420.0),
        Datum::new("Electronics", 380.0),
        Datum::new("Kitchen", 300.0),
        Datum::new("Sports", 210.0),
    ],
};

pub const REGION_MIX: ChartSpec = ChartSpec {
    id: "region-mix",
    title: "Region Mix (Pie)",
    kind: ChartKind::Pie,
    x_key: "name",
    y_key: "value",
    color: "#8884d8",
    y_unit: None,
    data: &[
        Datum::new("NA", 46.0),
        Datum::new("EU", 28.0),
        Datum::new("APAC", 18.0),
        Datum::new("LATAM", 8.0),
    ],
};

pub const DAILY_ORDERS: ChartSpec = ChartSpec {
    id: "daily-orders",
    title: "Daily Orders",
    kind: ChartKind::Line,
    x_key: "d",
    y_key: "o",
    color: "#22c55e",
    y_unit: None,
    data: &[
        Datum::new("1", 320.0),
        Datum::new("2", 360.0),
        Datum::new("3", 340.0),
        Datum::new("4", 410.0),
        Datum::new("5", 390.0),
        Datum::new("6", 450.0),
        Datum::new("7", 470.0),
    ],
};

pub const RETURNS_BY_CATEGORY: ChartSpec = ChartSpec {
    id: "returns-by-category",
    title: "Returns by Category",
    kind: ChartKind::Bar,
    x_key: "cat",
    y_key: "r",
    color: "#60a5fa",
    y_unit: Some("%"),
    data: &[
        Datum::new("Home", 2.1),
        Datum::new("Electronics", 3.8),
        Datum::new("Kitchen", 1.7),
        Datum::new("Sports", 2.9),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revenue_sixth_point() {
        let records = REVENUE_TREND.records();
        assert_eq!(records.len(), 6);
        assert_eq!(records[5]["w"], "W6");
        assert_eq!(records[5]["rev"].as_f64(), Some(260.0));
    }

    #[test]
    fn test_records_use_source_field_names() {
        let records = RETURNS_BY_CATEGORY.records();
        let keys: Vec<&str> = records
            .iter()
            .map(|r| r["cat"].as_str().unwrap_or_default())
            .collect();
        assert_eq!(keys, vec!["Home", "Electronics", "Kitchen", "Sports"]);
        assert_eq!(records[1]["r"].as_f64(), Some(3.8));
        assert!(records[0].get("value").is_none());
    }

    #[test]
    fn test_region_mix_sums_to_hundred() {
        assert_eq!(REGION_MIX.total(), 100.0);
        assert_eq!(TOP_CATEGORIES.max_value(), 420.0);
    }
}
