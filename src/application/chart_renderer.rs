// Chart primitive trait - turns a literal chart spec into markup
use crate::domain::chart::ChartSpec;
use maud::Markup;

pub trait ChartRenderer: Send + Sync {
    /// Draw one chart. Called once per chart, in page order.
    fn render(&self, chart: &ChartSpec) -> Markup;
}
