//! Placeholder android launcher icons.
//!
//! Renders a square and a round icon for every mipmap density and writes
//! them into an android resource directory:
//!
//! ```no_run
//! # fn main() -> anyhow::Result<()> {
//! mipmap::Generator::new("app/src/main/res").run(|entry| println!("Generated {}", entry))?;
//! # Ok(())
//! # }
//! ```

mod density;
mod generate;
pub mod raster;

pub use crate::density::Density;
pub use crate::generate::{
    Generated, Generator, DEFAULT_RES, IC_LAUNCHER, IC_LAUNCHER_ROUND,
};
pub use crate::raster::{Color, ROUND_INSET};
