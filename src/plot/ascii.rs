//! ASCII/Unicode plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Each series is drawn as a connected line with its own glyph; earlier
//! series win on cell collisions.

use crate::domain::{SweepRecord, Trajectory};

/// Number of post-burn-in time points shown in a single-run plot.
const RUN_WINDOW: usize = 2_500;

/// One named line on a chart.
pub struct Series<'a> {
    pub label: &'a str,
    pub glyph: char,
    pub points: Vec<(f64, f64)>,
}

/// Render the post-burn-in window of a single run: environment, prediction,
/// and state against time.
pub fn render_run_plot(sim: &Trajectory, burn_in: usize, width: usize, height: usize) -> String {
    let start = burn_in.min(sim.len());
    let end = sim.len().min(start + RUN_WINDOW);

    let slice_points = |vals: &[f64]| -> Vec<(f64, f64)> {
        (start..end).map(|t| (t as f64, vals[t])).collect()
    };

    let series = [
        Series { label: "e (environment)", glyph: 'e', points: slice_points(&sim.e) },
        Series { label: "ehat = M (prediction)", glyph: '^', points: slice_points(&sim.ehat) },
        Series { label: "x (state)", glyph: 'x', points: slice_points(&sim.x) },
    ];

    render_chart("t", &series, width, height)
}

/// Render the three sweep charts: score, tracking RMSE, and
/// volatility/rigidity together, each against `ln(tau)`.
pub fn render_sweep_plots(records: &[SweepRecord], width: usize, height: usize) -> String {
    let pick = |f: fn(&SweepRecord) -> f64| -> Vec<(f64, f64)> {
        records.iter().map(|r| (r.tau.ln(), f(r))).collect()
    };

    let score = [Series {
        label: "resilience_score",
        glyph: 's',
        points: pick(|r| r.metrics.resilience_score),
    }];
    let rmse = [Series {
        label: "track_rmse",
        glyph: 'r',
        points: pick(|r| r.metrics.track_rmse),
    }];
    let chaos_rigidity = [
        Series {
            label: "volatility (std dx)",
            glyph: 'v',
            points: pick(|r| r.metrics.volatility),
        },
        Series {
            label: "rigidity (1/mean|dx|)",
            glyph: 'g',
            points: pick(|r| r.metrics.rigidity),
        },
    ];

    let mut out = String::new();
    out.push_str(&render_chart("ln(tau)", &score, width, height));
    out.push('\n');
    out.push_str(&render_chart("ln(tau)", &rmse, width, height));
    out.push('\n');
    out.push_str(&render_chart("ln(tau)", &chaos_rigidity, width, height));
    out
}

/// Render one fixed-grid chart with a range header and a legend line.
pub fn render_chart(x_label: &str, series: &[Series<'_>], width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (x_min, x_max) = x_range(series).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = y_range(series).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];
    for s in series {
        draw_series(&mut grid, &s.points, x_min, x_max, y_min, y_max, s.glyph);
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: {x_label}=[{x_min:.3}, {x_max:.3}] | y=[{y_min:.2}, {y_max:.2}]\n"
    ));
    let legend: Vec<String> = series.iter().map(|s| format!("{}={}", s.glyph, s.label)).collect();
    out.push_str(&format!("Series: {}\n", legend.join(" ")));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn x_range(series: &[Series<'_>]) -> Option<(f64, f64)> {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    for s in series {
        for &(x, _) in &s.points {
            min_x = min_x.min(x);
            max_x = max_x.max(x);
        }
    }
    if min_x.is_finite() && max_x.is_finite() && max_x > min_x {
        Some((min_x, max_x))
    } else {
        None
    }
}

fn y_range(series: &[Series<'_>]) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for s in series {
        for &(_, y) in &s.points {
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
    }
    if min_y.is_finite() && max_y.is_finite() && max_y > min_y {
        Some((min_y, max_y))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_series(
    grid: &mut [Vec<char>],
    points: &[(f64, f64)],
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    glyph: char,
) {
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in points {
        let cx = map_x(x, x_min, x_max, width);
        let cy = map_y(y, y_min, y_max, height);
        if let Some((x0, y0)) = prev {
            draw_line(grid, x0, y0, cx, cy, glyph);
        } else if grid[cy][cx] == ' ' {
            grid[cy][cx] = glyph;
        }
        prev = Some((cx, cy));
    }
}

/// Integer line drawing (Bresenham-ish). Only blank cells are written, so
/// earlier series keep their glyphs where lines cross.
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::simulate;
    use crate::domain::Params;

    #[test]
    fn chart_golden_snapshot_small() {
        let series = [Series {
            label: "demo",
            glyph: '*',
            points: vec![(0.0, 0.0), (1.0, 10.0)],
        }];
        let txt = render_chart("t", &series, 10, 5);
        let expected = concat!(
            "Plot: t=[0.000, 1.000] | y=[-0.50, 10.50]\n",
            "Series: *=demo\n",
            "        **\n",
            "      **  \n",
            "    **    \n",
            "  **      \n",
            "**        \n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn run_plot_covers_window_and_lists_all_series() {
        let p = Params {
            steps: 400,
            burn_in: 40,
            ..Params::default()
        };
        let sim = simulate(12.0, &p).unwrap();
        let txt = render_run_plot(&sim, p.burn_in, 60, 15);
        assert!(txt.starts_with("Plot: t=[40.000, 400.000]"));
        assert!(txt.contains("e (environment)"));
        assert!(txt.contains("ehat = M (prediction)"));
        assert!(txt.contains("x (state)"));
        assert_eq!(txt.lines().count(), 17);
    }

    #[test]
    fn sweep_plots_render_three_charts() {
        use crate::domain::{Metrics, SweepRecord};
        let records: Vec<SweepRecord> = (1..=10)
            .map(|i| SweepRecord {
                tau: i as f64,
                metrics: Metrics {
                    track_rmse: 1.0 / i as f64,
                    volatility: 0.1 * i as f64,
                    rigidity: 1.0,
                    resilience_score: i as f64,
                },
            })
            .collect();
        let txt = render_sweep_plots(&records, 40, 10);
        assert_eq!(txt.matches("Plot: ln(tau)=").count(), 3);
        assert!(txt.contains("s=resilience_score"));
        assert!(txt.contains("v=volatility (std dx)"));
        assert!(txt.contains("g=rigidity (1/mean|dx|)"));
    }
}
