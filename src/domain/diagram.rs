// Hand-placed architecture diagram: nodes, connectors and column headings
use serde::Serialize;

pub const VIEW_BOX: (u32, u32) = (1200, 520);
pub const NODE_RADIUS: u32 = 16;
pub const TITLE_OFFSET: (u32, u32) = (16, 28);
pub const BODY_OFFSET: (u32, u32) = (16, 52);
pub const CAPTION: &str = "Bronze to Silver to Gold layered architecture with event and batch ingestion, governed access, and multiple consumption modes.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub x: u32,
    pub y: u32,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Node {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub title: &'static str,
    pub body: &'static str,
}

impl Node {
    const fn new(x: u32, y: u32, title: &'static str, body: &'static str) -> Self {
        Self {
            x,
            y,
            width: 260,
            height: 90,
            title,
            body,
        }
    }

    pub const fn title_position(&self) -> (u32, u32) {
        (self.x + TITLE_OFFSET.0, self.y + TITLE_OFFSET.1)
    }

    pub const fn body_position(&self) -> (u32, u32) {
        (self.x + BODY_OFFSET.0, self.y + BODY_OFFSET.1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl Edge {
    const fn new(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn marker_id(index: usize) -> String {
        format!("arrow-{}", index)
    }
}

pub const HEADINGS: [Heading; 4] = [
    Heading { x: 20, y: 30, label: "Sources" },
    Heading { x: 320, y: 30, label: "Ingestion" },
    Heading { x: 620, y: 30, label: "Lakehouse" },
    Heading { x: 920, y: 30, label: "Consumption" },
];

pub const NODES: [Node; 7] = [
    Node::new(20, 60, "ERP + Web + IoT", "Transactions, clickstream, sensors"),
    Node::new(320, 60, "Kafka / Kinesis / Glue", "Batch and streaming ingest"),
    Node::new(620, 60, "S3 - Bronze", "Raw zone Parquet"),
    Node::new(620, 180, "Databricks + Spark - Silver", "Clean and conform"),
    Node::new(620, 300, "Redshift + dbt - Gold", "Star schemas and marts"),
    Node::new(920, 60, "Power BI / QuickSight", "Dashboards and KPIs"),
    Node::new(920, 180, "APIs via Lambda", "Model or feature serving"),
];

pub const EDGES: [Edge; 6] = [
    Edge::new(280, 105, 320, 105),
    Edge::new(580, 105, 620, 105),
    Edge::new(750, 150, 750, 180),
    Edge::new(750, 270, 750, 300),
    Edge::new(880, 105, 920, 105),
    Edge::new(880, 330, 920, 210),
];
