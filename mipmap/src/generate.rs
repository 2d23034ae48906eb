use crate::raster::{self, Color, ROUND_INSET};
use crate::Density;
use anyhow::{Context, Result};
use image::{ImageFormat, RgbaImage};
use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_RES: &str = "app/src/main/res";
pub const IC_LAUNCHER: &str = "ic_launcher.png";
pub const IC_LAUNCHER_ROUND: &str = "ic_launcher_round.png";

#[derive(Clone, Debug)]
pub struct Generator {
    res: PathBuf,
    color: Color,
    inset: u32,
    densities: Vec<Density>,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(DEFAULT_RES)
    }
}

impl Generator {
    pub fn new<P: AsRef<Path>>(res: P) -> Self {
        Self {
            res: res.as_ref().to_path_buf(),
            color: Color::default(),
            inset: ROUND_INSET,
            densities: Density::ALL.to_vec(),
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn inset(mut self, inset: u32) -> Self {
        self.inset = inset;
        self
    }

    /// Restricts generation to `densities`, keeping the order given.
    pub fn densities(mut self, densities: &[Density]) -> Self {
        self.densities = densities.to_vec();
        self
    }

    pub fn res(&self) -> &Path {
        &self.res
    }

    /// Writes both launcher icons for every density, calling `progress`
    /// after each density is complete.
    ///
    /// Directories are created as needed and existing icons are overwritten.
    /// The first failure aborts the run; icons written so far stay on disk.
    pub fn run<F: FnMut(&Generated)>(&self, mut progress: F) -> Result<Vec<Generated>> {
        let mut generated = Vec::with_capacity(self.densities.len());
        for &density in &self.densities {
            let entry = self.generate(density)?;
            tracing::info!("generated {}", entry);
            progress(&entry);
            generated.push(entry);
        }
        Ok(generated)
    }

    fn generate(&self, density: Density) -> Result<Generated> {
        let dir = self.res.join(density.label());
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
        let size = density.size();

        let square = dir.join(IC_LAUNCHER);
        write_png(&raster::square(size, self.color), &square)?;

        let round = dir.join(IC_LAUNCHER_ROUND);
        write_png(&raster::round(size, self.color, self.inset), &round)?;

        Ok(Generated {
            density,
            dir,
            square,
            round,
        })
    }
}

fn write_png(img: &RgbaImage, path: &Path) -> Result<()> {
    tracing::debug!("writing {}", path.display());
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Icons written for a single density.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Generated {
    pub density: Density,
    pub dir: PathBuf,
    pub square: PathBuf,
    pub round: PathBuf,
}

impl fmt::Display for Generated {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let size = self.density.size();
        write!(f, "{}: {}x{}", self.density, size, size)
    }
}
