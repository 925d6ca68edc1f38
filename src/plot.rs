//! Geometry for drawing a Newton run
//!
//! Nothing here draws; [`PlotData`] holds the sampled curve, the tangent
//! segments of every iterate and the final marker, ready for whatever
//! front-end renders them.
use ndarray::Array1;

use crate::function::Function;

/// Number of points the curve is sampled at.
pub const SAMPLES: usize = 500;

/// Extra room left and right of the plotted iterates.
const MARGIN: f64 = 0.05;

/// The plotted range always covers at least `[-2, 2]`.
const MIN_EXTENT: f64 = 2.0;

/// Tangent drawn at one iterate
#[derive(Clone, Debug, PartialEq)]
pub struct Tangent {
    /// Position of the iterate in the trace
    pub index: usize,
    /// The iterate
    pub x: f64,
    /// Function value at the iterate
    pub fx: f64,
    /// Where the tangent crosses the x axis
    pub intercept: f64,
    /// Position in a colour map, from `0.0` for the first iterate to `1.0` for the last
    pub shade: f64,
}

/// Everything needed to draw the function and the path of a Newton run
#[derive(Clone, Debug)]
pub struct PlotData {
    /// Sample positions
    pub xs: Array1<f64>,
    /// Function values at the sample positions
    pub ys: Array1<f64>,
    /// Tangents at all iterates with a non-zero derivative
    pub tangents: Vec<Tangent>,
    /// Last iterate and its function value
    pub root: (f64, f64),
}

/// Horizontal range that shows every finite iterate.
pub fn x_range(trace: &[f64]) -> (f64, f64) {
    let (lo, hi) = trace
        .iter()
        .filter(|x| x.is_finite())
        .fold((-MIN_EXTENT, MIN_EXTENT), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        });
    (lo - MARGIN, hi + MARGIN)
}

impl PlotData {
    /// Samples `function` and builds the tangents along `trace`.
    ///
    /// An empty trace yields no tangents and a NaN marker.
    pub fn new(function: &dyn Function, trace: &[f64]) -> PlotData {
        let (lo, hi) = x_range(trace);
        let xs = Array1::linspace(lo, hi, SAMPLES);
        let ys = xs.mapv(|x| function.evaluate(x));

        let last_index = trace.len().saturating_sub(1).max(1) as f64;
        let tangents = trace
            .iter()
            .enumerate()
            .filter_map(|(index, &x)| {
                let fx = function.evaluate(x);
                let dfx = function.derivative(x);
                if dfx == 0.0 {
                    return None;
                }
                Some(Tangent {
                    index,
                    x,
                    fx,
                    intercept: x - fx / dfx,
                    shade: index as f64 / last_index,
                })
            })
            .collect();

        let root = match trace.last() {
            Some(&x) => (x, function.evaluate(x)),
            None => (f64::NAN, f64::NAN),
        };

        PlotData {
            xs,
            ys,
            tangents,
            root,
        }
    }
}
