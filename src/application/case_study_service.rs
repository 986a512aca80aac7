// Case-study service - Use case for rendering the page
use crate::application::chart_renderer::ChartRenderer;
use crate::application::stylesheet::STYLESHEET;
use crate::domain::case_study::{CaseStudy, SectionId};
use crate::domain::chart::ChartSpec;
use crate::domain::diagram::{Edge, NODE_RADIUS};
use crate::domain::images::{ImageResolver, ImageSlot};
use crate::domain::motion::{self, KEYFRAMES};
use maud::{html, Markup, PreEscaped};
use serde::Serialize;
use std::sync::Arc;

pub const DOCUMENT_CLOSE: &str = "</main></body></html>";

#[derive(Debug, Serialize)]
pub struct ResolvedImage {
    pub file: &'static str,
    pub src: String,
    pub alt: &'static str,
}

/// Page content as served by the JSON API, with image URLs already resolved.
#[derive(Debug, Serialize)]
pub struct ContentSnapshot<'a> {
    pub image_mode: &'static str,
    pub images: Vec<ResolvedImage>,
    #[serde(flatten)]
    pub content: &'a CaseStudy,
}

#[derive(Clone)]
pub struct CaseStudyService {
    case_study: Arc<CaseStudy>,
    images: ImageResolver,
    charts: Arc<dyn ChartRenderer>,
}

impl CaseStudyService {
    pub fn new(charts: Arc<dyn ChartRenderer>, images: ImageResolver) -> Self {
        Self {
            case_study: Arc::new(CaseStudy::data_lakehouse()),
            images,
            charts,
        }
    }

    pub fn chart(&self, id: &str) -> Option<&ChartSpec> {
        self.case_study.charts().find(|c| c.id == id)
    }

    pub fn image_src(&self, slot: &ImageSlot) -> String {
        self.images.resolve(slot)
    }

    pub fn content_snapshot(&self) -> ContentSnapshot<'_> {
        let images = self
            .case_study
            .images()
            .into_iter()
            .map(|slot| ResolvedImage {
                file: slot.file,
                src: self.image_src(slot),
                alt: slot.alt,
            })
            .collect();

        ContentSnapshot {
            image_mode: if self.images.uses_local() { "local" } else { "remote" },
            images,
            content: &self.case_study,
        }
    }

    /// Everything up to and including the opening `<main>` tag.
    pub fn document_open(&self) -> String {
        let head = html! {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (self.case_study.hero.title) }
                style { (PreEscaped(STYLESHEET)) (PreEscaped(KEYFRAMES)) }
            }
        };
        // maud closes every element, so the streaming shell is assembled around the head.
        format!(
            "<!DOCTYPE html><html lang=\"en\">{}<body><main data-case-study=\"{}\">",
            head.into_string(),
            self.case_study.slug
        )
    }

    pub fn render_sections(&self) -> Vec<(SectionId, Markup)> {
        SectionId::ALL
            .iter()
            .map(|id| (*id, self.render_section(*id)))
            .collect()
    }

    pub fn render_page(&self) -> Markup {
        let sections = self.render_sections();
        tracing::info!(
            sections = sections.len(),
            local_images = self.images.uses_local(),
            "Rendering case study {}",
            self.case_study.slug
        );

        let mut document = self.document_open();
        for (_, section) in sections {
            document.push_str(&section.into_string());
        }
        document.push_str(DOCUMENT_CLOSE);
        PreEscaped(document)
    }

    pub fn render_section(&self, id: SectionId) -> Markup {
        tracing::debug!("Rendering section {}", id.as_str());
        match id {
            SectionId::Hero => self.hero(),
            SectionId::Banner => self.banner(),
            SectionId::Stats => self.stats(),
            SectionId::OverviewAndStack => self.overview_and_stack(),
            SectionId::ArchitectureImage => self.architecture_image(),
            SectionId::Dashboard => self.dashboard(),
            SectionId::EnterpriseDashboard => self.enterprise_dashboard(),
            SectionId::Diagram => self.diagram(),
            SectionId::Footer => self.footer(),
        }
    }

    fn hero(&self) -> Markup {
        let hero = &self.case_study.hero;
        html! {
            header.wrap.hero data-section=(SectionId::Hero.as_str()) {
                div.hero-backdrop style=(motion::HERO_BACKGROUND.style()) {
                    img src=(self.image_src(&hero.background)) alt=(hero.background.alt);
                }
                h1 style=(motion::HERO_TITLE.style()) { (hero.title) }
                p style=(motion::HERO_SUMMARY.style()) { (hero.summary) }
            }
        }
    }

    fn banner(&self) -> Markup {
        let banner = &self.case_study.banner;
        html! {
            section.wrap data-section=(SectionId::Banner.as_str()) {
                div.banner.short {
                    img src=(self.image_src(banner)) alt=(banner.alt);
                }
            }
        }
    }

    fn stats(&self) -> Markup {
        html! {
            section.wrap.section.grid.grid-quad data-section=(SectionId::Stats.as_str()) {
                @for stat in &self.case_study.stats {
                    div.card {
                        div.tile-value { (stat.value) }
                        div.tile-label { (stat.label) }
                    }
                }
            }
        }
    }

    fn overview_and_stack(&self) -> Markup {
        let overview = &self.case_study.overview;
        let stack = &self.case_study.tech_stack;
        html! {
            section.wrap.section.grid.grid-pair data-section=(SectionId::OverviewAndStack.as_str()) {
                div.card {
                    h2 { (overview.heading) }
                    img src=(self.image_src(&overview.image)) alt=(overview.image.alt);
                    p { (overview.text) }
                }
                div.card {
                    h2 { (stack.heading) }
                    img src=(self.image_src(&stack.image)) alt=(stack.image.alt);
                    div.badges {
                        @for badge in stack.badges {
                            span.badge { (badge) }
                        }
                    }
                }
            }
        }
    }

    fn architecture_image(&self) -> Markup {
        let image = &self.case_study.architecture_image;
        html! {
            section.wrap.section data-section=(SectionId::ArchitectureImage.as_str()) {
                h2 { (self.case_study.architecture_heading) }
                div.banner.tall {
                    img src=(self.image_src(image)) alt=(image.alt);
                }
            }
        }
    }

    fn chart_card(&self, chart: &ChartSpec) -> Markup {
        html! {
            div.card.chart-card data-chart=(chart.id) {
                h3 { (chart.title) }
                div.chart-frame { (self.charts.render(chart)) }
            }
        }
    }

    fn dashboard(&self) -> Markup {
        let dashboard = &self.case_study.dashboard;
        html! {
            section.wrap.section-wide data-section=(SectionId::Dashboard.as_str()) {
                h2 { (dashboard.heading) }
                div.grid.grid-pair {
                    @for chart in dashboard.charts.iter().take(2) {
                        (self.chart_card(chart))
                    }
                }
                @for chart in dashboard.charts.iter().skip(2) {
                    div.spaced { (self.chart_card(chart)) }
                }
            }
        }
    }

    fn enterprise_dashboard(&self) -> Markup {
        let enterprise = &self.case_study.enterprise;
        html! {
            section.wrap.section-wide data-section=(SectionId::EnterpriseDashboard.as_str()) {
                h2 { (enterprise.heading) }
                div.grid.grid-quad {
                    @for kpi in &enterprise.kpis {
                        div.card {
                            div.tile-label { (kpi.label) }
                            div.tile-value { (kpi.value) }
                            div.tile-delta { (kpi.delta) }
                        }
                    }
                }
                div.grid.grid-pair.spaced {
                    @for chart in &enterprise.charts {
                        (self.chart_card(chart))
                    }
                }
                div.card.table-card.spaced {
                    div.table-caption { (enterprise.table_caption) }
                    div.table-scroll {
                        table {
                            thead {
                                tr {
                                    @for header in enterprise.table_headers {
                                        th { (header) }
                                    }
                                }
                            }
                            tbody {
                                @for row in &enterprise.rows {
                                    tr data-sku=(row.sku) {
                                        @for cell in row.cells() {
                                            td { (cell) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    fn diagram(&self) -> Markup {
        let diagram = &self.case_study.diagram;
        let (width, height) = diagram.view_box;
        html! {
            section.wrap.section-wide data-section=(SectionId::Diagram.as_str()) {
                h2 { (diagram.heading) }
                div.card.diagram {
                    svg xmlns="http://www.w3.org/2000/svg" viewBox=(format!("0 0 {} {}", width, height)) {
                        @for heading in &diagram.headings {
                            text class="diagram-heading" x=(heading.x) y=(heading.y) { (heading.label) }
                        }
                        @for node in &diagram.nodes {
                            @let (title_x, title_y) = node.title_position();
                            @let (body_x, body_y) = node.body_position();
                            g {
                                rect class="diagram-node" x=(node.x) y=(node.y) width=(node.width) height=(node.height) rx=(NODE_RADIUS) ry=(NODE_RADIUS) {}
                                text class="diagram-title" x=(title_x) y=(title_y) { (node.title) }
                                text class="diagram-body" x=(body_x) y=(body_y) { (node.body) }
                            }
                        }
                        @for (i, edge) in diagram.edges.iter().enumerate() {
                            @let marker_id = Edge::marker_id(i);
                            g {
                                defs {
                                    marker id=(marker_id) markerWidth="10" markerHeight="10" refX="6" refY="3" orient="auto" markerUnits="strokeWidth" {
                                        path class="arrow-head" d="M0,0 L0,6 L6,3 z" {}
                                    }
                                }
                                line class="connector" x1=(edge.x1) y1=(edge.y1) x2=(edge.x2) y2=(edge.y2) stroke-width="2" marker-end=(format!("url(#{})", marker_id)) {}
                            }
                        }
                    }
                }
                p.caption { (diagram.caption) }
            }
        }
    }

    fn footer(&self) -> Markup {
        let footer = &self.case_study.footer;
        html! {
            footer.wrap data-section=(SectionId::Footer.as_str()) {
                (footer.prompt) " "
                @for (i, link) in footer.links.iter().enumerate() {
                    @if i > 0 { " · " }
                    a href=(link.href) { (link.label) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingCharts {
        seen: Mutex<Vec<ChartSpec>>,
    }

    impl ChartRenderer for RecordingCharts {
        fn render(&self, chart: &ChartSpec) -> Markup {
            self.seen.lock().unwrap().push(*chart);
            html! { div.chart-stub { (chart.id) } }
        }
    }

    fn service(use_local: bool) -> (Arc<RecordingCharts>, CaseStudyService) {
        let recorder = Arc::new(RecordingCharts::default());
        let service = CaseStudyService::new(recorder.clone(), ImageResolver::new(use_local));
        (recorder, service)
    }

    #[test]
    fn test_charts_receive_literal_datasets() {
        let (recorder, service) = service(false);
        service.render_page();

        let seen = recorder.seen.lock().unwrap();
        let ids: Vec<&str> = seen.iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec!["revenue-trend", "top-categories", "region-mix", "daily-orders", "returns-by-category"]
        );

        let revenue = &seen[0];
        assert_eq!(revenue.data.len(), 6);
        assert_eq!((revenue.data[5].key, revenue.data[5].value), ("W6", 260.0));
        assert_eq!(revenue.records()[5]["w"], "W6");

        let pie = &seen[2];
        let slices: Vec<(&str, f64)> = pie.data.iter().map(|d| (d.key, d.value)).collect();
        assert_eq!(slices, vec![("NA", 46.0), ("EU", 28.0), ("APAC", 18.0), ("LATAM", 8.0)]);

        let returns = &seen[4];
        assert_eq!(returns.y_unit, Some("%"));
        assert_eq!(returns.color, "#60a5fa");
    }

    #[test]
    fn test_page_contains_literal_text() {
        let (_, service) = service(false);
        let page = service.render_page().into_string();
        let content = CaseStudy::data_lakehouse();

        let mut texts = vec![
            content.hero.title,
            content.hero.summary,
            content.overview.heading,
            content.overview.text,
            content.tech_stack.heading,
            content.architecture_heading,
            content.dashboard.heading,
            content.enterprise.heading,
            content.enterprise.table_caption,
            content.diagram.heading,
            content.diagram.caption,
            content.footer.prompt,
        ];
        texts.extend(content.stats.iter().flat_map(|s| [s.value, s.label]));
        texts.extend(content.enterprise.kpis.iter().flat_map(|k| [k.label, k.value, k.delta]));
        texts.extend(content.tech_stack.badges.iter().copied());
        texts.extend(content.charts().map(|c| c.title));
        texts.extend(content.enterprise.table_headers);
        texts.extend(content.diagram.headings.iter().map(|h| h.label));
        texts.extend(content.diagram.nodes.iter().flat_map(|n| [n.title, n.body]));
        texts.extend(content.footer.links.iter().map(|l| l.label));

        for text in texts {
            let escaped = html! { (text) }.into_string();
            assert!(page.contains(&escaped), "missing {:?}", text);
        }
        for row in &content.enterprise.rows {
            for cell in row.cells() {
                assert!(page.contains(&format!("<td>{}</td>", cell)), "missing cell {:?}", cell);
            }
        }
        for literal in ["70%", "92%", "Forecast Accuracy", "Conversion", "3.8%", "+0.4 pp"] {
            assert!(page.contains(literal), "missing {:?}", literal);
        }
        assert!(page.starts_with("<!DOCTYPE html><html lang=\"en\"><head>"));
        assert!(page.ends_with(DOCUMENT_CLOSE));
    }

    #[test]
    fn test_table_row_cells() {
        let (_, service) = service(false);
        let page = service.render_section(SectionId::EnterpriseDashboard).into_string();
        assert!(page.contains(
            "<tr data-sku=\"HX-200\"><td>HX-200</td><td>Electronics</td><td>$420k</td><td>4.6%</td><td>2.1%</td></tr>"
        ));
        assert!(page.contains("<th>Conv%</th>"));
    }

    #[test]
    fn test_hero_image_remote_fallback() {
        let (_, service) = service(false);
        let hero = service.render_section(SectionId::Hero).into_string();
        assert!(hero.contains(
            "src=\"https://images.unsplash.com/photo-1581092921461-eab62e97a780?q=80&amp;w=1600&amp;auto=format&amp;fit=crop\""
        ));
    }

    #[test]
    fn test_all_images_local_when_flag_set() {
        let (_, service) = service(true);
        let page = service.render_page().into_string();
        for file in ["server.jpg", "analytics.jpg", "bigdata.jpg", "cloud.jpg", "architecture.jpg"] {
            assert!(page.contains(&format!("src=\"/images/{}\"", file)));
        }
        assert!(!page.contains("images.unsplash.com"));
    }

    #[test]
    fn test_diagram_nodes_and_connectors() {
        let (_, service) = service(false);
        let svg = service.render_section(SectionId::Diagram).into_string();

        assert_eq!(svg.matches("<rect class=\"diagram-node\"").count(), 7);
        assert_eq!(svg.matches("<line class=\"connector\"").count(), 6);
        assert!(svg.contains(
            "<rect class=\"diagram-node\" x=\"620\" y=\"180\" width=\"260\" height=\"90\" rx=\"16\" ry=\"16\"></rect>"
        ));
        assert!(svg.contains(
            "<line class=\"connector\" x1=\"880\" y1=\"330\" x2=\"920\" y2=\"210\" stroke-width=\"2\" marker-end=\"url(#arrow-5)\"></line>"
        ));
        assert!(svg.contains("<text class=\"diagram-title\" x=\"636\" y=\"328\">Redshift + dbt - Gold</text>"));
        assert!(svg.contains("viewBox=\"0 0 1200 520\""));
    }

    #[test]
    fn test_sections_in_page_order() {
        let (_, service) = service(false);
        let ids: Vec<SectionId> = service.render_sections().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, SectionId::ALL.to_vec());
    }

    #[test]
    fn test_content_snapshot_resolves_images() {
        let (_, service) = service(true);
        let snapshot = serde_json::to_value(service.content_snapshot()).unwrap();
        assert_eq!(snapshot["image_mode"], "local");
        assert_eq!(snapshot["images"][0]["src"], "/images/server.jpg");
        assert_eq!(snapshot["slug"], "data-lakehouse");
        assert_eq!(snapshot["enterprise"]["rows"][0]["sku"], "HX-200");
    }

    #[test]
    fn test_chart_lookup() {
        let (_, service) = service(false);
        assert_eq!(service.chart("daily-orders").map(|c| c.data.len()), Some(7));
        assert!(service.chart("missing").is_none());
    }
}
