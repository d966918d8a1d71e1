use std::fmt;

use crate::{Error, Result};

/// Spatial size of a layer volume: width, height and depth (channels).
///
/// Values are signed because degenerate hyperparameters can legitimately
/// produce zero or negative output extents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: i64,
    pub height: i64,
    pub depth: i64,
}

impl Dimensions {
    pub fn new(width: i64, height: i64, depth: i64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    pub fn from_slice(values: &[i64]) -> Result<Self> {
        match *values {
            [width, height, depth] => Ok(Self::new(width, height, depth)),
            _ => Err(Error::ArityMismatch {
                what: "input dimensions",
                expected: 3,
                actual: values.len(),
            }),
        }
    }

    pub fn to_array(self) -> [i64; 3] {
        [self.width, self.height, self.depth]
    }
}

impl From<[i64; 3]> for Dimensions {
    fn from([width, height, depth]: [i64; 3]) -> Self {
        Self::new(width, height, depth)
    }
}

impl From<Dimensions> for [i64; 3] {
    fn from(dims: Dimensions) -> Self {
        dims.to_array()
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.width, self.height, self.depth)
    }
}

/// Convolution hyperparameters in prompt order: `k f s p`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConvHyperparameters {
    pub kernels: i64,
    pub kernel_size: i64,
    pub stride: i64,
    pub padding: i64,
}

impl ConvHyperparameters {
    pub fn from_slice(values: &[i64]) -> Result<Self> {
        match *values {
            [kernels, kernel_size, stride, padding] => Ok(Self {
                kernels,
                kernel_size,
                stride,
                padding,
            }),
            _ => Err(Error::ArityMismatch {
                what: "convolution hyperparameters",
                expected: 4,
                actual: values.len(),
            }),
        }
    }
}

/// Pooling hyperparameters in prompt order: `f s`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolHyperparameters {
    pub extent: i64,
    pub stride: i64,
}

impl PoolHyperparameters {
    pub fn from_slice(values: &[i64]) -> Result<Self> {
        match *values {
            [extent, stride] => Ok(Self { extent, stride }),
            _ => Err(Error::ArityMismatch {
                what: "pooling hyperparameters",
                expected: 2,
                actual: values.len(),
            }),
        }
    }
}

/// Parses whitespace-separated integers, as typed at the shell prompts.
pub fn parse_values(line: &str) -> Result<Vec<i64>> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| Error::InvalidNumber(token.to_string()))
        })
        .collect()
}
