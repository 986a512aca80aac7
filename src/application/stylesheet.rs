// Page stylesheet (dark neutral palette)

pub const STYLESHEET: &str = "\
*, *::before, *::after { box-sizing: border-box; }
body { margin: 0; min-height: 100vh; background: #0a0a0a; color: #fafafa; font-family: ui-sans-serif, system-ui, sans-serif; line-height: 1.5; }
.wrap { max-width: 72rem; margin: 0 auto; padding: 0 1.5rem; }
.hero { position: relative; padding-top: 2.5rem; padding-bottom: 1.5rem; }
.hero-backdrop { position: absolute; inset: 0; overflow: hidden; border-radius: 1.5rem; opacity: 0.3; }
.hero-backdrop img { width: 100%; height: 100%; object-fit: cover; }
.hero h1 { position: relative; margin: 0; font-size: 2.25rem; font-weight: 700; letter-spacing: -0.025em; }
.hero p { position: relative; margin: 0.75rem 0 0; max-width: 48rem; color: #d4d4d4; }
.banner { margin-top: 1.5rem; border-radius: 1.5rem; overflow: hidden; border: 1px solid #262626; box-shadow: 0 20px 25px -5px rgb(0 0 0 / 0.4); }
.banner img { display: block; width: 100%; object-fit: cover; }
.banner.short img { height: 20rem; }
.banner.tall img { height: 24rem; }
.grid { display: grid; gap: 1rem; }
.grid-pair { gap: 1.5rem; }
@media (min-width: 768px) { .grid-quad { grid-template-columns: repeat(4, 1fr); } }
@media (min-width: 1024px) { .grid-pair { grid-template-columns: repeat(2, 1fr); } }
.section { margin-top: 2.5rem; }
.section-wide { margin-top: 3rem; }
.section h2, .section-wide h2 { margin: 0 0 1rem; font-size: 1.5rem; font-weight: 600; }
.card { border: 1px solid #262626; background: rgb(23 23 23 / 0.4); border-radius: 1rem; padding: 1.25rem; }
.card h2 { margin: 0; }
.card img { display: block; max-width: 100%; margin-top: 0.75rem; border-radius: 0.75rem; border: 1px solid #262626; }
.card p { margin: 1rem 0 0; color: #d4d4d4; }
.tile-value { font-size: 1.875rem; font-weight: 600; }
.tile-label { margin-top: 0.25rem; font-size: 0.875rem; color: #a3a3a3; }
.tile-delta { margin-top: 0.25rem; font-size: 0.75rem; color: #a3a3a3; }
.badges { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-top: 1rem; }
.badge { padding: 0.25rem 0.75rem; border-radius: 9999px; border: 1px solid #404040; font-size: 0.875rem; color: #e5e5e5; }
.chart-card h3 { margin: 0 0 0.5rem; font-weight: 600; }
.chart-frame { height: 16rem; }
.chart-frame svg { width: 100%; height: 100%; }
.spaced { margin-top: 1.5rem; }
.table-card { padding: 0; overflow: hidden; }
.table-caption { padding: 0.75rem 1rem; border-bottom: 1px solid #262626; font-weight: 600; }
.table-scroll { overflow: auto; }
table { width: 100%; border-collapse: collapse; font-size: 0.875rem; }
thead { background: rgb(23 23 23 / 0.6); text-align: left; }
th, td { padding: 0.5rem 1rem; }
tbody tr { border-top: 1px solid #262626; }
.diagram svg { width: 100%; height: auto; }
.diagram-heading { fill: #a3a3a3; font-size: 14px; }
.diagram-node { fill: transparent; stroke: #525252; }
.diagram-title { fill: #f5f5f5; font-size: 14px; font-weight: 600; }
.diagram-body { fill: #a3a3a3; font-size: 12px; }
.connector { stroke: #737373; }
.arrow-head { fill: #737373; }
.caption { margin-top: 0.75rem; font-size: 0.875rem; color: #a3a3a3; }
footer { padding-top: 3rem; padding-bottom: 3rem; font-size: 0.875rem; color: #a3a3a3; }
footer a { color: inherit; text-decoration: underline; }
.chart-axis text, .chart-legend text, .chart-label { fill: #a3a3a3; font-size: 12px; }
";
