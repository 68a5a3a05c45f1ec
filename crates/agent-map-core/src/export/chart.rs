use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::{Error, Result};
use crate::grid::{Segment, Totals};

/// Largest angle covered by one straight edge when approximating an arc
const ARC_STEP_DEGREES: f64 = 2.0;

const TITLE: &str = "FOCUS SEGMENTATION";
const TITLE_HEIGHT: i32 = 36;

/// One wedge of the totals pie. Angles are in degrees, counter-clockwise
/// from the positive x axis.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub segment: Segment,
    pub value: u32,
    pub fraction: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl PieSlice {
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    /// Whole-number percentage, e.g. `"23%"`
    pub fn percent_label(&self) -> String {
        format!("{:.0}%", self.fraction * 100.0)
    }
}

/// Proportional view of the totals, one slice per segment
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    slices: Vec<PieSlice>,
    total: u32,
}

impl PieChart {
    /// First slice starts at twelve o'clock
    pub const START_ANGLE: f64 = 90.0;

    /// `None` while every total is zero
    pub fn from_totals(totals: &Totals) -> Option<Self> {
        let total = totals.sum();
        if total == 0 {
            return None;
        }

        let mut angle = Self::START_ANGLE;
        let slices = totals
            .iter()
            .map(|(segment, value)| {
                let fraction = f64::from(value) / f64::from(total);
                let start_angle = angle;
                angle += fraction * 360.0;
                PieSlice {
                    segment,
                    value,
                    fraction,
                    start_angle,
                    end_angle: angle,
                }
            })
            .collect();

        Some(Self { slices, total })
    }

    pub fn slices(&self) -> &[PieSlice] {
        &self.slices
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Render the chart as an SVG document of `width` x `height` pixels
    pub fn render_svg(&self, width: u32, height: u32) -> Result<String> {
        let (Ok(pixel_width), Ok(pixel_height)) = (i32::try_from(width), i32::try_from(height))
        else {
            return Err(Error::Chart(format!("canvas {width}x{height} is too large")));
        };
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
            root.fill(&WHITE).map_err(chart_error)?;

            let title_style = ("sans-serif", 20)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(HPos::Center, VPos::Center));
            root.draw(&Text::new(TITLE, (pixel_width / 2, TITLE_HEIGHT / 2), title_style))
                .map_err(chart_error)?;

            let plot_height = (pixel_height - TITLE_HEIGHT).max(1);
            let center = (f64::from(width) / 2.0, f64::from(TITLE_HEIGHT + plot_height / 2));
            let radius = f64::from(pixel_width.min(plot_height)) * 0.35;
            let label_style = ("sans-serif", 13)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(HPos::Center, VPos::Center));

            for (index, slice) in self.slices.iter().enumerate() {
                if slice.value == 0 {
                    continue;
                }
                let color = Palette99::pick(index);
                root.draw(&Polygon::new(wedge_points(center, radius, slice), color.filled()))
                    .map_err(chart_error)?;

                let mid = slice.mid_angle();
                root.draw(&Text::new(
                    slice.segment.name(),
                    polar(center, radius * 1.2, mid),
                    label_style.clone(),
                ))
                .map_err(chart_error)?;
                root.draw(&Text::new(
                    slice.percent_label(),
                    polar(center, radius * 0.6, mid),
                    label_style.clone(),
                ))
                .map_err(chart_error)?;
            }

            root.present().map_err(chart_error)?;
        }
        Ok(svg)
    }
}

fn chart_error<E: std::fmt::Display>(e: E) -> Error {
    Error::Chart(e.to_string())
}

/// Pixel position at `radius` and `angle` degrees; screen y grows downwards
fn polar(center: (f64, f64), radius: f64, angle: f64) -> (i32, i32) {
    let rad = angle.to_radians();
    (
        (center.0 + radius * rad.cos()).round() as i32,
        (center.1 - radius * rad.sin()).round() as i32,
    )
}

/// Closed outline of a wedge: the center followed by points along the arc
fn wedge_points(center: (f64, f64), radius: f64, slice: &PieSlice) -> Vec<(i32, i32)> {
    let sweep = slice.end_angle - slice.start_angle;
    let steps = (sweep / ARC_STEP_DEGREES).ceil().max(1.0) as usize;

    let mut points = Vec::with_capacity(steps + 2);
    points.push(polar(center, 0.0, 0.0));
    for step in 0..=steps {
        let angle = slice.start_angle + sweep * step as f64 / steps as f64;
        points.push(polar(center, radius, angle));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Level, ScoreGrid};

    fn sample_totals() -> Totals {
        let mut grid = ScoreGrid::new();
        grid.set_cell(Level::Interest, Segment::Hdb, 1);
        grid.set_cell(Level::Interest, Segment::Landed, 3);
        grid.compute_totals()
    }

    #[test]
    fn test_no_chart_for_zero_totals() {
        assert!(PieChart::from_totals(&Totals::new()).is_none());
    }

    #[test]
    fn test_slices_cover_full_circle() {
        let chart = PieChart::from_totals(&sample_totals()).unwrap();
        assert_eq!(chart.total(), 4);
        assert_eq!(chart.slices().len(), 8);

        let hdb = &chart.slices()[0];
        assert_eq!(hdb.segment, Segment::Hdb);
        assert_eq!(hdb.start_angle, PieChart::START_ANGLE);
        assert!((hdb.end_angle - 180.0).abs() < 1e-9);
        assert_eq!(hdb.percent_label(), "25%");

        let landed = &chart.slices()[2];
        assert_eq!(landed.percent_label(), "75%");
        let last = chart.slices().last().unwrap();
        assert!((last.end_angle - (PieChart::START_ANGLE + 360.0)).abs() < 1e-9);
    }

    #[test]
    fn test_wedge_starts_at_center() {
        let chart = PieChart::from_totals(&sample_totals()).unwrap();
        let points = wedge_points((100.0, 100.0), 50.0, &chart.slices()[0]);
        assert_eq!(points[0], (100, 100));
        // 90 degrees is straight up on screen
        assert_eq!(points[1], (100, 50));
        // 180 degrees is to the left
        assert_eq!(*points.last().unwrap(), (50, 100));
    }

    #[test]
    fn test_render_svg() {
        let chart = PieChart::from_totals(&sample_totals()).unwrap();
        let svg = chart.render_svg(400, 400).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("FOCUS SEGMENTATION"));
        assert!(svg.contains("Landed"));
        assert!(svg.contains("75%"));
        assert!(!svg.contains("Referral"));
    }

    #[test]
    fn test_render_svg_rejects_oversized_canvas() {
        let chart = PieChart::from_totals(&sample_totals()).unwrap();
        let too_wide = u32::try_from(i32::MAX).unwrap() + 1;
        assert!(matches!(chart.render_svg(too_wide, 400), Err(Error::Chart(_))));
        assert!(matches!(chart.render_svg(400, u32::MAX), Err(Error::Chart(_))));
    }
}
