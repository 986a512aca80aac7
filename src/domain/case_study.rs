// Case-study page content model
use super::chart::{self, ChartSpec};
use super::diagram::{self, Edge, Heading, Node};
use super::images::{self, ImageSlot};
use super::table::{self, ProductRow};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatTile {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KpiTile {
    pub label: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

/// Top-level blocks of the page, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    Hero,
    Banner,
    Stats,
    OverviewAndStack,
    ArchitectureImage,
    Dashboard,
    EnterpriseDashboard,
    Diagram,
    Footer,
}

impl SectionId {
    pub const ALL: [SectionId; 9] = [
        SectionId::Hero,
        SectionId::Banner,
        SectionId::Stats,
        SectionId::OverviewAndStack,
        SectionId::ArchitectureImage,
        SectionId::Dashboard,
        SectionId::EnterpriseDashboard,
        SectionId::Diagram,
        SectionId::Footer,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Banner => "banner",
            SectionId::Stats => "stats",
            SectionId::OverviewAndStack => "overview-and-stack",
            SectionId::ArchitectureImage => "architecture-image",
            SectionId::Dashboard => "dashboard",
            SectionId::EnterpriseDashboard => "enterprise-dashboard",
            SectionId::Diagram => "diagram",
            SectionId::Footer => "footer",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub title: &'static str,
    pub summary: &'static str,
    pub background: ImageSlot,
}

#[derive(Debug, Clone, Serialize)]
pub struct Overview {
    pub heading: &'static str,
    pub image: ImageSlot,
    pub text: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TechStack {
    pub heading: &'static str,
    pub image: ImageSlot,
    pub badges: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub heading: &'static str,
    pub charts: Vec<ChartSpec>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnterpriseDashboard {
    pub heading: &'static str,
    pub kpis: Vec<KpiTile>,
    pub charts: Vec<ChartSpec>,
    pub table_caption: &'static str,
    pub table_headers: [&'static str; 5],
    pub rows: Vec<ProductRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Diagram {
    pub heading: &'static str,
    pub view_box: (u32, u32),
    pub headings: Vec<Heading>,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub caption: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Footer {
    pub prompt: &'static str,
    pub links: Vec<Link>,
}

/// Everything the page displays.
#[derive(Debug, Clone, Serialize)]
pub struct CaseStudy {
    pub slug: &'static str,
    pub hero: Hero,
    pub banner: ImageSlot,
    pub stats: Vec<StatTile>,
    pub overview: Overview,
    pub tech_stack: TechStack,
    pub architecture_heading: &'static str,
    pub architecture_image: ImageSlot,
    pub dashboard: Dashboard,
    pub enterprise: EnterpriseDashboard,
    pub diagram: Diagram,
    pub footer: Footer,
}

static TECH_BADGES: [&str; 15] = [
    "AWS S3",
    "AWS Glue",
    "AWS Kinesis",
    "AWS Lambda",
    "Redshift",
    "Databricks",
    "Apache Spark",
    "dbt",
    "Airflow",
    "Terraform",
    "GitHub Actions",
    "Power BI",
    "QuickSight",
    "Python",
    "SQL",
];

impl CaseStudy {
    pub fn data_lakehouse() -> Self {
        Self {
            slug: "data-lakehouse",
            hero: Hero {
                title: "Cloud Native Data Lakehouse for Enterprise Insights",
                summary: "Unified enterprise data from sales, marketing, and supply chain into a single Lakehouse built with AWS, Databricks, and dbt. Powers real time insights and predictive analytics.",
                background: images::SERVER,
            },
            banner: images::ANALYTICS,
            stats: vec![
                StatTile { value: "200M+", label: "Records Unified" },
                StatTile { value: "70%", label: "Latency Reduction" },
                StatTile { value: "92%", label: "Forecast Accuracy" },
                StatTile { value: "6 to 1", label: "Silos Consolidated" },
            ],
            overview: Overview {
                heading: "Overview",
                image: images::BIG_DATA,
                text: "Multi zone Lakehouse with S3 Bronze for raw, Databricks Spark Silver for cleansed, and Redshift Gold modeled with dbt. Airflow and Terraform automate orchestration and infra. Power BI and QuickSight deliver self service analytics.",
            },
            tech_stack: TechStack {
                heading: "Tech Stack",
                image: images::CLOUD,
                badges: &TECH_BADGES,
            },
            architecture_heading: "Architecture",
            architecture_image: images::ARCHITECTURE,
            dashboard: Dashboard {
                heading: "Interactive Dashboard",
                charts: vec![chart::REVENUE_TREND, chart::TOP_CATEGORIES, chart::REGION_MIX],
            },
            enterprise: EnterpriseDashboard {
                heading: "Enterprise Analytics Dashboard",
                kpis: vec![
                    KpiTile { label: "Revenue (MTD)", value: "$2.6M", delta: "+12% vs last month" },
                    KpiTile { label: "Conversion", value: "3.8%", delta: "+0.4 pp" },
                    KpiTile { label: "Avg Delivery Time", value: "2.3 days", delta: "-18%" },
                    KpiTile { label: "Stock outs", value: "1.2%", delta: "-0.6 pp" },
                ],
                charts: vec![chart::DAILY_ORDERS, chart::RETURNS_BY_CATEGORY],
                table_caption: table::CAPTION,
                table_headers: table::HEADERS,
                rows: table::ROWS.to_vec(),
            },
            diagram: Diagram {
                heading: "Architecture Diagram - Concept",
                view_box: diagram::VIEW_BOX,
                headings: diagram::HEADINGS.to_vec(),
                nodes: diagram::NODES.to_vec(),
                edges: diagram::EDGES.to_vec(),
                caption: diagram::CAPTION,
            },
            footer: Footer {
                prompt: "Want the full project walkthrough?",
                links: vec![
                    Link { label: "Request access", href: "#" },
                    Link { label: "Download case study PDF", href: "#" },
                ],
            },
        }
    }

    /// Images in render order.
    pub fn images(&self) -> [&ImageSlot; 5] {
        [
            &self.hero.background,
            &self.banner,
            &self.overview.image,
            &self.tech_stack.image,
            &self.architecture_image,
        ]
    }

    /// Charts in render order.
    pub fn charts(&self) -> impl Iterator<Item = &ChartSpec> {
        self.dashboard.charts.iter().chain(self.enterprise.charts.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charts_follow_page_order() {
        let study = CaseStudy::data_lakehouse();
        let ids: Vec<&str> = study.charts().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec!["revenue-trend", "top-categories", "region-mix", "daily-orders", "returns-by-category"]
        );
    }

    #[test]
    fn test_images_follow_page_order() {
        let study = CaseStudy::data_lakehouse();
        let files: Vec<&str> = study.images().iter().map(|s| s.file).collect();
        assert_eq!(
            files,
            vec!["server.jpg", "analytics.jpg", "bigdata.jpg", "cloud.jpg", "architecture.jpg"]
        );
    }

    #[test]
    fn test_tiles_and_badges() {
        let study = CaseStudy::data_lakehouse();
        assert_eq!(study.stats.len(), 4);
        assert_eq!(study.enterprise.kpis[2].value, "2.3 days");
        assert_eq!(study.tech_stack.badges.len(), 15);
        assert_eq!(study.tech_stack.badges.last(), Some(&"SQL"));
    }

    #[test]
    fn test_section_ids_are_kebab_case() {
        assert_eq!(SectionId::OverviewAndStack.as_str(), "overview-and-stack");
        assert_eq!(
            serde_json::to_value(SectionId::EnterpriseDashboard).ok(),
            Some(serde_json::json!("enterprise-dashboard"))
        );
    }
}
