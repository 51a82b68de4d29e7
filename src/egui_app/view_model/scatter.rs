//! Series and bounds for the feature scatter plot.

use egui::Color32;

use crate::service::ScatterDataset;

/// Colours cycled across labels.
pub const SERIES_PALETTE: [Color32; 8] = [
    Color32::from_rgb(0xFF, 0x57, 0x33),
    Color32::from_rgb(0x33, 0xFF, 0x57),
    Color32::from_rgb(0x57, 0x33, 0xFF),
    Color32::from_rgb(0xFF, 0xD7, 0x00),
    Color32::from_rgb(0xFF, 0x33, 0xA8),
    Color32::from_rgb(0x33, 0xFF, 0xF5),
    Color32::from_rgb(0xA8, 0x33, 0xFF),
    Color32::from_rgb(0xFF, 0x8C, 0x33),
];

/// Points sharing one label.
#[derive(Clone, Debug, PartialEq)]
pub struct ScatterSeries {
    pub label: String,
    pub color: Color32,
    pub points: Vec<[f64; 2]>,
}

/// Axis-aligned data extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl PlotBounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Render-ready scatter plot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScatterView {
    pub series: Vec<ScatterSeries>,
    pub bounds: Option<PlotBounds>,
}

impl ScatterView {
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|series| series.points.is_empty())
    }
}

pub fn series_color(index: usize) -> Color32 {
    SERIES_PALETTE[index % SERIES_PALETTE.len()]
}

/// Group points by label in the order of the dataset's label list.
pub fn scatter_view(dataset: &ScatterDataset) -> ScatterView {
    let series = dataset
        .labels
        .iter()
        .enumerate()
        .map(|(index, label)| ScatterSeries {
            label: label.clone(),
            color: series_color(index),
            points: dataset
                .data
                .iter()
                .filter(|point| &point.label == label)
                .map(|point| [point.x, point.y])
                .collect(),
        })
        .collect();
    ScatterView {
        series,
        bounds: bounds_for(dataset),
    }
}

fn bounds_for(dataset: &ScatterDataset) -> Option<PlotBounds> {
    let mut points = dataset
        .data
        .iter()
        .filter(|point| point.x.is_finite() && point.y.is_finite());
    let first = points.next()?;
    let mut bounds = PlotBounds {
        min_x: first.x,
        max_x: first.x,
        min_y: first.y,
        max_y: first.y,
    };
    for point in points {
        bounds.min_x = bounds.min_x.min(point.x);
        bounds.max_x = bounds.max_x.max(point.x);
        bounds.min_y = bounds.min_y.min(point.y);
        bounds.max_y = bounds.max_y.max(point.y);
    }
    // A single point or a line still needs an area to draw in.
    if bounds.width() <= f64::EPSILON {
        bounds.min_x -= 1.0;
        bounds.max_x += 1.0;
    }
    if bounds.height() <= f64::EPSILON {
        bounds.min_y -= 1.0;
        bounds.max_y += 1.0;
    }
    Some(bounds)
}
