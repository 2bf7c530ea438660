//! Quote card rendering for DilSe Quotes.
//!
//! This crate provides:
//! - A minimal [`Canvas`] drawing surface and a raster implementation
//! - Card layout: greedy word wrap, alignment anchors, palette colours
//! - JPEG/PNG encoding, gallery save and the share temp file
//!
//! # Example
//!
//! ```rust,no_run
//! use dilse_card::{render_card, Background, CardSpec, RasterCanvas, TextAlign};
//! use std::path::Path;
//!
//! let mut canvas = RasterCanvas::from_font_file(Path::new("NotoSans-Regular.ttf"))?;
//! let spec = CardSpec::new("Love all, trust a few, do wrong to none.", "Shakespeare")
//!     .with_background(Background::Gradient(0))
//!     .with_align(TextAlign::Center);
//! render_card(&spec, &mut canvas);
//!
//! let path = dilse_card::save_to_gallery(canvas.image(), Path::new("out"), 95)?;
//! # Ok::<(), dilse_card::CardError>(())
//! ```

#![warn(missing_docs)]

mod canvas;
mod error;
mod export;
pub mod layout;
mod palette;
mod raster;
mod render;

pub use canvas::{Canvas, Color, TextAlign};
pub use error::{CardError, Result};
pub use export::{
    encode, save_to_gallery, write_share_file, ExportFormat, DEFAULT_JPEG_QUALITY, GALLERY_DIR,
    SHARE_FILE,
};
pub use palette::{Background, GRADIENTS};
pub use raster::{load_font, paint_linear_gradient, RasterCanvas};
pub use render::{render_card, CardLayout, CardSpec, TextColors, DEFAULT_FONT_SIZE};
