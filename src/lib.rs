//! # Layer Dims
//!
//! Computes the output width, height and depth of a single convolution or
//! pooling layer from its input volume and hyperparameters.
//!
//! ## Example
//!
//! ```rust
//! use layer_dims::{compute_output_dimensions, Dimensions, LayerKind};
//!
//! let output = compute_output_dimensions(LayerKind::Convolution, &[32, 32, 3], &[16, 5, 1, 2])?;
//! assert_eq!(output, Dimensions::new(32, 32, 16));
//! # Ok::<(), layer_dims::Error>(())
//! ```

pub mod dims;
pub mod error;
pub mod layers;
pub mod shell;

pub use dims::Dimensions;
pub use error::{Error, Result};
pub use layers::{compute_output_dimensions, LayerKind};
pub use shell::Shell;
