use crate::{
    dims::{ConvHyperparameters, Dimensions},
    Result,
};

use super::output_extent;

/// Square convolution with a shared stride and symmetric zero padding on
/// both spatial axes.
#[derive(Debug, Clone)]
pub struct Conv2D {
    name: String,
    params: ConvHyperparameters,
}

impl Conv2D {
    pub fn new(name: String, params: ConvHyperparameters) -> Self {
        Self { name, params }
    }

    pub fn from_slice(name: &str, hyperparameters: &[i64]) -> Result<Self> {
        let params = ConvHyperparameters::from_slice(hyperparameters)?;
        Ok(Self::new(name.to_string(), params))
    }

    fn compute_output_size(&self, height: i64, width: i64) -> Result<(i64, i64)> {
        let ConvHyperparameters {
            kernel_size,
            stride,
            padding,
            ..
        } = self.params;

        let out_height = output_extent(height, kernel_size, stride, padding)?;
        let out_width = output_extent(width, kernel_size, stride, padding)?;

        Ok((out_height, out_width))
    }
}

impl super::Layer for Conv2D {
    fn name(&self) -> &str {
        &self.name
    }

    // Input depth is discarded: every kernel produces one output channel.
    fn output_dims(&self, input: Dimensions) -> Result<Dimensions> {
        let (out_height, out_width) = self.compute_output_size(input.height, input.width)?;
        Ok(Dimensions::new(out_width, out_height, self.params.kernels))
    }
}
