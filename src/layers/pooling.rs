use crate::{
    dims::{Dimensions, PoolHyperparameters},
    Result,
};

use super::output_extent;

/// Unpadded pooling window; channel count passes through unchanged.
#[derive(Debug, Clone)]
pub struct Pooling2D {
    name: String,
    params: PoolHyperparameters,
}

impl Pooling2D {
    pub fn new(name: String, params: PoolHyperparameters) -> Self {
        Self { name, params }
    }

    pub fn from_slice(name: &str, hyperparameters: &[i64]) -> Result<Self> {
        let params = PoolHyperparameters::from_slice(hyperparameters)?;
        Ok(Self::new(name.to_string(), params))
    }

    fn compute_output_size(&self, height: i64, width: i64) -> Result<(i64, i64)> {
        let PoolHyperparameters { extent, stride } = self.params;

        let out_height = output_extent(height, extent, stride, 0)?;
        let out_width = output_extent(width, extent, stride, 0)?;

        Ok((out_height, out_width))
    }
}

impl super::Layer for Pooling2D {
    fn name(&self) -> &str {
        &self.name
    }

    fn output_dims(&self, input: Dimensions) -> Result<Dimensions> {
        let (out_height, out_width) = self.compute_output_size(input.height, input.width)?;
        Ok(Dimensions::new(out_width, out_height, input.depth))
    }
}

#[cfg(test)]
mod tests {
    use super::super::Layer;
    use super::*;
    use crate::Error;

    #[test]
    fn test_pooling_2x2() {
        let layer = Pooling2D::from_slice("test_pool", &[2, 2]).unwrap();
        let output = layer.output_dims(Dimensions::new(32, 32, 16)).unwrap();

        assert_eq!(output, Dimensions::new(16, 16, 16));
    }

    #[test]
    fn test_pooling_zero_stride() {
        let layer = Pooling2D::from_slice("test_pool", &[2, 0]).unwrap();
        let result = layer.output_dims(Dimensions::new(8, 8, 1));

        assert!(matches!(result, Err(Error::ZeroStride)));
    }
}
