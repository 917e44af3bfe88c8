//! Rendering for speed distributions.  The statistical types in
//! [pmf](../pmf/index.html) know nothing about plotting; finished
//! distributions are handed in here along with a [Figure](struct.Figure.html)
//! describing the output file.
use crate::pmf::{Cdf, Pmf};
use plotters::prelude::*;

static PALETTE: [RGBColor; 3] = [BLUE, GREEN, RED];

/// Output settings for a rendered figure: file path, caption, axis
/// descriptions and pixel dimensions.
///
/// Build figures step by step in the same manner as other builders in this
/// crate:
///
/// ```rust
/// use relay::prelude::*;
/// let fig = Figure::new("observed_speeds.png")
///     .title("PMF of running speed")
///     .x_desc("speed (mph)")
///     .y_desc("probability");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    path: String,
    title: String,
    x_desc: String,
    y_desc: String,
    width: u32,
    height: u32,
}

impl Figure {
    /// A blank 640x480 figure writing to `path`.
    pub fn new(path: &str) -> Self {
        Figure {
            path: path.to_string(),
            title: String::new(),
            x_desc: String::new(),
            y_desc: String::new(),
            width: 640,
            height: 480,
        }
    }

    /// Caption drawn above the chart.
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Label for the x axis.
    pub fn x_desc(mut self, desc: &str) -> Self {
        self.x_desc = desc.to_string();
        self
    }

    /// Label for the y axis.
    pub fn y_desc(mut self, desc: &str) -> Self {
        self.y_desc = desc.to_string();
        self
    }

    /// Pixel dimensions of the output file.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Plot named distributions as overlaid translucent bars.
pub fn pmfs(series: &[(&str, &Pmf)], fig: &Figure) -> Result<(), Box<dyn std::error::Error>> {
    let mut all: Vec<(f64, f64)> = Vec::new();
    for (_, pmf) in series {
        all.append(&mut pmf.items().to_vec());
    }
    let xmin = all.iter().map(|xi| xi.0).fold(f64::INFINITY, f64::min);
    let xmax = all.iter().map(|xi| xi.0).fold(0.0, f64::max);
    let ymax = all.iter().map(|xi| xi.1).fold(0.0, f64::max);

    // bar width from the tightest spacing in the union of supports
    let mut xs: Vec<f64> = all.iter().map(|xi| xi.0).collect();
    xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
    xs.dedup();
    let mut gap = (xmax - xmin).max(1.0);
    for pair in xs.windows(2) {
        gap = gap.min(pair[1] - pair[0]);
    }
    let width = gap * 0.8;

    let root = BitMapBackend::new(&fig.path, (fig.width, fig.height)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.margin(10, 10, 10, 10);
    // construct a chart context
    let mut chart = ChartBuilder::on(&root)
        .caption(fig.title.as_str(), ("sans-serif", 20).into_font())
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((xmin - gap)..(xmax + gap), 0.0..(ymax * 1.05))?;

    chart
        .configure_mesh()
        .x_labels(5)
        .y_labels(5)
        .y_label_formatter(&|x| format!("{:.2}", x))
        .x_label_formatter(&|x| format!("{:.2}", x))
        .x_desc(fig.x_desc.as_str())
        .y_desc(fig.y_desc.as_str())
        .draw()?;

    for (i, (name, pmf)) in series.iter().enumerate() {
        let color = &PALETTE[i % PALETTE.len()];
        chart
            .draw_series(pmf.items().iter().map(|(val, prob)| {
                Rectangle::new(
                    [(val - width / 2.0, 0.0), (val + width / 2.0, *prob)],
                    color.mix(0.4).filled(),
                )
            }))?
            .label(*name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.filled())
        .draw()?;
    log::info!("Wrote {}.", fig.path);
    Ok(())
}

/// Plot named cumulative distributions as step curves.
pub fn cdfs(series: &[(&str, &Cdf)], fig: &Figure) -> Result<(), Box<dyn std::error::Error>> {
    let mut all: Vec<(f64, f64)> = Vec::new();
    for (_, cdf) in series {
        all.append(&mut cdf.points().to_vec());
    }
    let xmin = all.iter().map(|xi| xi.0).fold(f64::INFINITY, f64::min);
    let xmax = all.iter().map(|xi| xi.0).fold(0.0, f64::max);

    let root = BitMapBackend::new(&fig.path, (fig.width, fig.height)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.margin(10, 10, 10, 10);
    // construct a chart context
    let mut chart = ChartBuilder::on(&root)
        .caption(fig.title.as_str(), ("sans-serif", 20).into_font())
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(xmin..xmax, 0.0..1.05)?;

    chart
        .configure_mesh()
        .x_labels(5)
        .y_labels(5)
        .y_label_formatter(&|x| format!("{:.2}", x))
        .x_label_formatter(&|x| format!("{:.2}", x))
        .x_desc(fig.x_desc.as_str())
        .y_desc(fig.y_desc.as_str())
        .draw()?;

    for (i, (name, cdf)) in series.iter().enumerate() {
        let color = &PALETTE[i % PALETTE.len()];
        chart
            .draw_series(LineSeries::new(steps(*cdf), color))?
            .label(*name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.filled())
        .draw()?;
    log::info!("Wrote {}.", fig.path);
    Ok(())
}

/// Expand cdf points into the corners of a step function.
fn steps(cdf: &Cdf) -> Vec<(f64, f64)> {
    let points = cdf.points();
    let mut out = Vec::with_capacity(points.len() * 2);
    let mut prev = 0.0;
    for (val, cum) in points {
        out.push((*val, prev));
        out.push((*val, *cum));
        prev = *cum;
    }
    out
}
