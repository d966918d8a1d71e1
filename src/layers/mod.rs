pub mod conv2d;
pub mod pooling;

use std::str::FromStr;

use crate::{dims::Dimensions, Error, Result};

pub use conv2d::Conv2D;
pub use pooling::Pooling2D;

pub trait Layer: std::fmt::Debug + Send + Sync {
    fn name(&self) -> &str;
    fn output_dims(&self, input: Dimensions) -> Result<Dimensions>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Convolution,
    Pooling,
}

impl LayerKind {
    pub fn hyperparameter_count(self) -> usize {
        match self {
            LayerKind::Convolution => 4,
            LayerKind::Pooling => 2,
        }
    }

    pub fn hyperparameter_help(self) -> &'static str {
        match self {
            LayerKind::Convolution => "kernels kernel_size stride padding",
            LayerKind::Pooling => "extent stride",
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            LayerKind::Convolution => "Conv",
            LayerKind::Pooling => "Pool",
        }
    }
}

impl FromStr for LayerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "conv" | "convolution" => Ok(LayerKind::Convolution),
            "pool" | "pooling" => Ok(LayerKind::Pooling),
            _ => Err(Error::UnsupportedLayer(s.trim().to_string())),
        }
    }
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// Output dimensions of a single layer of `kind` applied to `input`.
///
/// `input` must hold `w h d`; `hyperparameters` must hold `k f s p` for
/// convolution or `f s` for pooling. No feasibility check is made on the
/// result, so oversized kernels give zero or negative extents.
pub fn compute_output_dimensions(
    kind: LayerKind,
    input: &[i64],
    hyperparameters: &[i64],
) -> Result<Dimensions> {
    let input = Dimensions::from_slice(input)?;

    let layer: Box<dyn Layer> = match kind {
        LayerKind::Convolution => Box::new(Conv2D::from_slice("conv", hyperparameters)?),
        LayerKind::Pooling => Box::new(Pooling2D::from_slice("pool", hyperparameters)?),
    };

    let output = layer.output_dims(input)?;
    tracing::debug!(%kind, %input, %output, "computed output dimensions");
    Ok(output)
}

/// `trunc((size - window + 2 * padding) / stride + 1)`, evaluated exactly in
/// integers as `(numerator + stride) / stride`.
pub(crate) fn output_extent(size: i64, window: i64, stride: i64, padding: i64) -> Result<i64> {
    if stride == 0 {
        return Err(Error::ZeroStride);
    }

    let numerator = padding
        .checked_mul(2)
        .and_then(|pad| size.checked_sub(window)?.checked_add(pad))
        .ok_or(Error::Overflow("output extent"))?;

    numerator
        .checked_add(stride)
        .and_then(|n| n.checked_div(stride))
        .ok_or(Error::Overflow("output extent"))
}
