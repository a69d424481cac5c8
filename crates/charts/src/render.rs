//! Drawing pipeline
//!
//! Each draw routine is a function of (mapped points or values, surface,
//! style) whose only effect is issuing primitives against the surface.
//! Drawing an empty series renders nothing; the donut guard is the one
//! failure mode that surfaces as an error.

use crate::error::{ChartError, ChartResult};
use crate::model::{Color, DonutDatum, FillStyle, LegendEntry};
use crate::project::Point;
use crate::surface::{GradientStop, LinearGradient, Surface, TextAlign};
use std::f64::consts::{FRAC_PI_2, PI};

const TAU: f64 = 2.0 * PI;

/// Radial offset of donut slice labels beyond the outer radius.
const DONUT_LABEL_OFFSET: f64 = 15.0;

/// Margin between the donut's outer radius and the surface edge.
const DONUT_MARGIN: f64 = 20.0;

/// Connect consecutive mapped points with straight segments.
pub fn draw_line(surface: &mut dyn Surface, points: &[Point], stroke: Color, line_width: f64) {
    if points.is_empty() {
        return;
    }

    surface.begin_path();
    surface.set_stroke(&stroke.to_css());
    surface.set_line_width(line_width);
    surface.set_round_caps();

    for (index, point) in points.iter().enumerate() {
        if index == 0 {
            surface.move_to(point.x, point.y);
        } else {
            surface.line_to(point.x, point.y);
        }
    }

    surface.stroke();
}

/// Fill the region between the mapped points and the surface's bottom edge.
///
/// Transitions are smoothed with a quadratic curve whose control x is the
/// midpoint of each consecutive pair and whose control y is the previous
/// point's y. This asymmetric rule reproduces the reference geometry exactly.
pub fn draw_area(surface: &mut dyn Surface, points: &[Point], fill: &FillStyle) {
    if points.is_empty() {
        return;
    }

    let (width, height) = surface.size();

    surface.begin_path();
    surface.move_to(0.0, height);

    for (index, point) in points.iter().enumerate() {
        if index == 0 {
            surface.line_to(point.x, point.y);
        } else {
            let prev = points[index - 1];
            let cp_x = (prev.x + point.x) / 2.0;
            surface.quadratic_curve_to(cp_x, prev.y, point.x, point.y);
        }
    }

    surface.line_to(width, height);
    surface.close_path();
    set_fill_style(surface, fill, 0.0, height);
    surface.fill();
}

/// Draw a marker disc plus a larger translucent glow disc per point.
pub fn draw_points(surface: &mut dyn Surface, points: &[Point], color: Color, radius: f64) {
    for point in points {
        surface.begin_path();
        surface.arc(point.x, point.y, radius, 0.0, TAU, false);
        surface.set_fill(&color.to_css());
        surface.fill();

        // glow halo at quarter alpha
        surface.begin_path();
        surface.arc(point.x, point.y, radius * 2.0, 0.0, TAU, false);
        surface.set_fill(&color.with_alpha(64).to_css());
        surface.fill();
    }
}

/// Draw one bar per value, partitioning the width into equal slots.
///
/// Each slot holds a bar of 0.8x the slot width with a 0.2x gutter; bar
/// height is proportional to value/100. Bars get a vertical gradient from
/// the opaque color down to half alpha, with the rounded value printed above.
pub fn draw_bars(surface: &mut dyn Surface, values: &[f64], color: Color) {
    if values.is_empty() {
        return;
    }

    let (width, height) = surface.size();
    let slot = width / values.len() as f64;
    let bar_width = slot * 0.8;
    let gutter = slot * 0.2;

    for (index, &value) in values.iter().enumerate() {
        let x = index as f64 * (bar_width + gutter) + gutter / 2.0;
        let bar_height = (value / 100.0) * height;
        let y = height - bar_height;

        surface.set_fill_gradient(LinearGradient::vertical(
            y,
            height,
            vec![
                GradientStop {
                    offset: 0.0,
                    color: color.to_css(),
                },
                GradientStop {
                    offset: 1.0,
                    color: color.with_alpha(128).to_css(),
                },
            ],
        ));
        surface.fill_rect(x, y, bar_width, bar_height);

        surface.set_fill(&Color::WHITE.to_css());
        surface.set_font("10px Inter, sans-serif");
        surface.set_text_align(TextAlign::Center);
        surface.fill_text(
            &format!("{}", value.round() as i64),
            x + bar_width / 2.0,
            y - 5.0,
        );
    }
}

/// Start/end angles for each donut slice, clockwise from -90 degrees.
///
/// Fails with [`ChartError::EmptyDataset`] when there is nothing to slice
/// or the total is not positive.
pub fn donut_angles(data: &[DonutDatum]) -> ChartResult<Vec<(f64, f64)>> {
    let total: f64 = data.iter().map(|d| d.value).sum();
    if data.is_empty() || total <= 0.0 {
        return Err(ChartError::EmptyDataset);
    }

    let mut angles = Vec::with_capacity(data.len());
    let mut current = -FRAC_PI_2;
    for datum in data {
        let sweep = (datum.value / total) * TAU;
        angles.push((current, current + sweep));
        current += sweep;
    }
    Ok(angles)
}

/// Draw nested ring slices proportional to each datum's share of the total,
/// with slice labels offset past the outer radius and the total centered.
pub fn draw_donut(
    surface: &mut dyn Surface,
    data: &[DonutDatum],
    palette: &[Color],
) -> ChartResult<()> {
    let angles = donut_angles(data)?;
    let total: f64 = data.iter().map(|d| d.value).sum();

    let (width, height) = surface.size();
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = (width.min(height) / 2.0 - DONUT_MARGIN).max(0.0);
    let inner_radius = radius * 0.6;

    for (index, (datum, &(start, end))) in data.iter().zip(&angles).enumerate() {
        let color = palette
            .get(index % palette.len().max(1))
            .copied()
            .unwrap_or_default();

        surface.begin_path();
        surface.arc(center_x, center_y, radius, start, end, false);
        surface.arc(center_x, center_y, inner_radius, end, start, true);
        surface.close_path();
        surface.set_fill(&color.to_css());
        surface.fill();

        let label_angle = (start + end) / 2.0;
        let label_x = center_x + label_angle.cos() * (radius + DONUT_LABEL_OFFSET);
        let label_y = center_y + label_angle.sin() * (radius + DONUT_LABEL_OFFSET);
        surface.set_fill(&Color::WHITE.to_css());
        surface.set_font("12px Inter, sans-serif");
        surface.set_text_align(TextAlign::Center);
        surface.fill_text(&datum.label, label_x, label_y);
    }

    surface.set_fill(&Color::WHITE.to_css());
    surface.set_font("bold 16px Inter, sans-serif");
    surface.set_text_align(TextAlign::Center);
    surface.fill_text("Total", center_x, center_y - 5.0);
    surface.set_font("14px Inter, sans-serif");
    surface.fill_text(&format_value(total), center_x, center_y + 15.0);

    Ok(())
}

/// Draw legend dots and labels along the top-left edge.
pub fn draw_legend(surface: &mut dyn Surface, entries: &[LegendEntry]) {
    let legend_y = 20.0;
    let mut legend_x = 20.0;

    surface.set_font("12px Inter, sans-serif");
    surface.set_text_align(TextAlign::Left);

    for entry in entries {
        surface.begin_path();
        surface.arc(legend_x, legend_y, 4.0, 0.0, TAU, false);
        surface.set_fill(&entry.color.to_css());
        surface.fill();

        surface.set_fill(&Color::WHITE.to_css());
        surface.fill_text(&entry.label, legend_x + 12.0, legend_y + 4.0);

        legend_x += surface.measure_text(&entry.label) + 30.0;
    }
}

fn set_fill_style(surface: &mut dyn Surface, fill: &FillStyle, y0: f64, y1: f64) {
    match fill {
        FillStyle::Solid(color) => surface.set_fill(&color.to_css()),
        FillStyle::Vertical { top, bottom } => {
            surface.set_fill_gradient(LinearGradient::vertical(
                y0,
                y1,
                vec![
                    GradientStop {
                        offset: 0.0,
                        color: top.to_css(),
                    },
                    GradientStop {
                        offset: 1.0,
                        color: bottom.to_css(),
                    },
                ],
            ));
        }
    }
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{project, ValueDomain};
    use crate::surface::{RecordingSurface, SurfaceOp};

    fn mapped(values: &[f64], surface: &RecordingSurface) -> Vec<Point> {
        let (w, h) = surface.size();
        project(values, w, h, ValueDomain::PERCENT)
    }

    #[test]
    fn test_draw_line_empty_is_noop() {
        let mut surface = RecordingSurface::new(400.0, 200.0);
        draw_line(&mut surface, &[], Color::PRIMARY, 2.0);
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn test_draw_line_segments() {
        let mut surface = RecordingSurface::new(400.0, 200.0);
        let points = mapped(&[0.0, 50.0, 100.0], &surface);
        draw_line(&mut surface, &points, Color::PRIMARY, 3.0);

        assert_eq!(surface.count_ops(|op| matches!(op, SurfaceOp::MoveTo { .. })), 1);
        assert_eq!(surface.count_ops(|op| matches!(op, SurfaceOp::LineTo { .. })), 2);
        assert_eq!(surface.count_ops(|op| matches!(op, SurfaceOp::Stroke)), 1);
        assert!(surface
            .ops()
            .contains(&SurfaceOp::SetLineWidth { width: 3.0 }));
        assert!(surface.ops().contains(&SurfaceOp::SetRoundCaps));
    }

    #[test]
    fn test_draw_area_empty_is_noop() {
        let mut surface = RecordingSurface::new(400.0, 200.0);
        draw_area(&mut surface, &[], &FillStyle::Solid(Color::PRIMARY));
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn test_draw_area_smoothing_uses_midpoint_x_and_previous_y() {
        let mut surface = RecordingSurface::new(400.0, 200.0);
        let points = mapped(&[0.0, 100.0, 50.0], &surface);
        draw_area(&mut surface, &points, &FillStyle::Solid(Color::PRIMARY));

        let curves: Vec<_> = surface
            .ops()
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::QuadraticCurveTo { cx, cy, x, y } => Some((*cx, *cy, *x, *y)),
                _ => None,
            })
            .collect();

        // one curve per consecutive pair after the first point
        assert_eq!(curves.len(), 2);
        let (cx, cy, x, y) = curves[0];
        assert_eq!(cx, (points[0].x + points[1].x) / 2.0);
        assert_eq!(cy, points[0].y);
        assert_eq!((x, y), (points[1].x, points[1].y));
        let (cx, cy, _, _) = curves[1];
        assert_eq!(cx, (points[1].x + points[2].x) / 2.0);
        assert_eq!(cy, points[1].y);
    }

    #[test]
    fn test_draw_area_closes_at_bottom_edge() {
        let mut surface = RecordingSurface::new(400.0, 200.0);
        let points = mapped(&[20.0, 80.0], &surface);
        draw_area(&mut surface, &points, &FillStyle::Solid(Color::PRIMARY));

        let ops = surface.ops();
        assert_eq!(ops[0], SurfaceOp::BeginPath);
        assert_eq!(ops[1], SurfaceOp::MoveTo { x: 0.0, y: 200.0 });
        assert!(ops.contains(&SurfaceOp::LineTo { x: 400.0, y: 200.0 }));
        assert!(ops.contains(&SurfaceOp::ClosePath));
        assert_eq!(surface.count_ops(|op| matches!(op, SurfaceOp::Fill)), 1);
    }

    #[test]
    fn test_draw_area_gradient_fill_spans_height() {
        let mut surface = RecordingSurface::new(400.0, 200.0);
        let points = mapped(&[20.0, 80.0], &surface);
        let fill = FillStyle::Vertical {
            top: Color::PRIMARY.with_alpha(204),
            bottom: Color::PRIMARY.with_alpha(25),
        };
        draw_area(&mut surface, &points, &fill);

        let gradient = surface
            .ops()
            .iter()
            .find_map(|op| match op {
                SurfaceOp::SetFillGradient { gradient } => Some(gradient.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(gradient.y0, 0.0);
        assert_eq!(gradient.y1, 200.0);
        assert_eq!(gradient.stops.len(), 2);
    }

    #[test]
    fn test_draw_points_marker_and_glow() {
        let mut surface = RecordingSurface::new(400.0, 200.0);
        let points = mapped(&[30.0, 70.0], &surface);
        draw_points(&mut surface, &points, Color::PRIMARY, 4.0);

        let radii: Vec<f64> = surface
            .ops()
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::Arc { radius, .. } => Some(*radius),
                _ => None,
            })
            .collect();
        assert_eq!(radii, vec![4.0, 8.0, 4.0, 8.0]);
        assert_eq!(surface.count_ops(|op| matches!(op, SurfaceOp::Fill)), 4);
    }

    #[test]
    fn test_draw_bars_slot_partition() {
        let mut surface = RecordingSurface::new(400.0, 200.0);
        draw_bars(&mut surface, &[25.0, 50.0, 75.0, 100.0], Color::PRIMARY);

        let rects: Vec<_> = surface
            .ops()
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::FillRect {
                    x,
                    y,
                    width,
                    height,
                } => Some((*x, *y, *width, *height)),
                _ => None,
            })
            .collect();
        assert_eq!(rects.len(), 4);

        let slot = 400.0 / 4.0;
        for (index, &(x, y, width, height)) in rects.iter().enumerate() {
            assert!((width - slot * 0.8).abs() < 1e-9);
            assert!((x - (index as f64 * slot + slot * 0.1)).abs() < 1e-9);
            assert!((y + height - 200.0).abs() < 1e-9);
        }

        // full-scale value fills the whole height
        assert!((rects[3].3 - 200.0).abs() < 1e-9);
        // value labels are printed above each bar
        assert_eq!(
            surface.count_ops(|op| matches!(op, SurfaceOp::FillText { .. })),
            4
        );
    }

    #[test]
    fn test_draw_bars_empty_is_noop() {
        let mut surface = RecordingSurface::new(400.0, 200.0);
        draw_bars(&mut surface, &[], Color::PRIMARY);
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn test_donut_angles_proportions() {
        let data = vec![
            DonutDatum::new("Desktop", 45.0),
            DonutDatum::new("Mobile", 35.0),
            DonutDatum::new("Tablet", 20.0),
        ];
        let angles = donut_angles(&data).unwrap();

        let sweeps: Vec<f64> = angles.iter().map(|(start, end)| end - start).collect();
        assert!((sweeps[0] - 162.0_f64.to_radians()).abs() < 1e-6);
        assert!((sweeps[1] - 126.0_f64.to_radians()).abs() < 1e-6);
        assert!((sweeps[2] - 72.0_f64.to_radians()).abs() < 1e-6);

        let total: f64 = sweeps.iter().sum();
        assert!((total - TAU).abs() < 1e-6);

        assert_eq!(angles[0].0, -FRAC_PI_2);
    }

    #[test]
    fn test_donut_angles_empty_dataset() {
        assert_eq!(donut_angles(&[]), Err(ChartError::EmptyDataset));

        let zeros = vec![DonutDatum::new("a", 0.0), DonutDatum::new("b", 0.0)];
        assert_eq!(donut_angles(&zeros), Err(ChartError::EmptyDataset));
    }

    #[test]
    fn test_draw_donut_slices_and_center_text() {
        let mut surface = RecordingSurface::new(300.0, 300.0);
        let data = vec![
            DonutDatum::new("Desktop", 45.0),
            DonutDatum::new("Mobile", 35.0),
            DonutDatum::new("Tablet", 20.0),
        ];
        draw_donut(&mut surface, &data, &[Color::PRIMARY, Color::SECONDARY, Color::ACCENT])
            .unwrap();

        // outer + inner arc per slice
        assert_eq!(surface.count_ops(|op| matches!(op, SurfaceOp::Arc { .. })), 6);
        // inner arcs run anticlockwise at 0.6x the outer radius
        let inner: Vec<_> = surface
            .ops()
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::Arc {
                    radius,
                    anticlockwise: true,
                    ..
                } => Some(*radius),
                _ => None,
            })
            .collect();
        assert_eq!(inner.len(), 3);
        assert!((inner[0] - (300.0 / 2.0 - 20.0) * 0.6).abs() < 1e-9);

        let texts: Vec<String> = surface
            .ops()
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::FillText { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["Desktop", "Mobile", "Tablet", "Total", "100"]);
    }

    #[test]
    fn test_draw_donut_zero_total_renders_nothing() {
        let mut surface = RecordingSurface::new(300.0, 300.0);
        let data = vec![DonutDatum::new("a", 0.0)];
        let result = draw_donut(&mut surface, &data, &[Color::PRIMARY]);
        assert_eq!(result, Err(ChartError::EmptyDataset));
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn test_draw_legend_advances_by_text_width() {
        let mut surface = RecordingSurface::new(400.0, 200.0);
        let entries = vec![
            LegendEntry::new("Revenue", Color::PRIMARY),
            LegendEntry::new("Users", Color::SECONDARY),
        ];
        let first_width = surface.measure_text("Revenue");
        draw_legend(&mut surface, &entries);

        let dots: Vec<f64> = surface
            .ops()
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::Arc { x, .. } => Some(*x),
                _ => None,
            })
            .collect();
        assert_eq!(dots.len(), 2);
        assert_eq!(dots[0], 20.0);
        assert_eq!(dots[1], 20.0 + first_width + 30.0);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(100.0), "100");
        assert_eq!(format_value(33.25), "33.2");
    }
}
