// Entrance animations, expressed as CSS keyframes

/// A fade (and optional upward slide) played once when the page loads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub offset_y: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl Entrance {
    pub const fn fade(duration_s: f64) -> Self {
        Self {
            offset_y: 0.0,
            delay_s: 0.0,
            duration_s,
        }
    }

    pub const fn rise(offset_y: f64, delay_s: f64, duration_s: f64) -> Self {
        Self {
            offset_y,
            delay_s,
            duration_s,
        }
    }

    fn keyframes_name(&self) -> &'static str {
        if self.offset_y == 0.0 { "fade-in" } else { "rise-in" }
    }

    /// Inline `style` value for the animated element.
    pub fn style(&self) -> String {
        format!(
            "animation: {} {}s ease-out {}s both; --rise-from: {}px",
            self.keyframes_name(),
            self.duration_s,
            self.delay_s,
            self.offset_y
        )
    }
}

pub const HERO_BACKGROUND: Entrance = Entrance::fade(1.0);
pub const HERO_TITLE: Entrance = Entrance::rise(10.0, 0.0, 0.5);
pub const HERO_SUMMARY: Entrance = Entrance::rise(10.0, 0.1, 0.5);

pub const KEYFRAMES: &str = "\
@keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }
@keyframes rise-in { from { opacity: 0; transform: translateY(var(--rise-from)); } to { opacity: 1; transform: translateY(0); } }
@media (prefers-reduced-motion: reduce) { [style*=\"animation\"] { animation: none !important; } }
";
