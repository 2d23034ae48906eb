use anyhow::Result;
use image::{Rgba, RgbaImage};
use std::fmt;
use std::str::FromStr;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Margin between the round icon's circle and the image border.
pub const ROUND_INSET: u32 = 2;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Color(pub [u8; 4]);

impl Color {
    pub const LAUNCHER_BLUE: Color = Color([33, 150, 243, 255]);

    pub fn rgba(self) -> Rgba<u8> {
        Rgba(self.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::LAUNCHER_BLUE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [r, g, b, a] = self.0;
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)?;
        if a != 255 {
            write!(f, "{:02x}", a)?;
        }
        Ok(())
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    /// Parses `#rrggbb` or `#rrggbbaa`, the leading `#` being optional.
    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        anyhow::ensure!(
            (hex.len() == 6 || hex.len() == 8) && hex.is_ascii(),
            "expected color as #rrggbb or #rrggbbaa, got `{}`",
            s
        );
        let mut rgba = [255; 4];
        for (i, channel) in rgba.iter_mut().enumerate().take(hex.len() / 2) {
            *channel = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
                .map_err(|err| anyhow::anyhow!("invalid color `{}`: {}", s, err))?;
        }
        Ok(Self(rgba))
    }
}

impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Square icon filled edge to edge with `color`.
pub fn square(size: u32, color: Color) -> RgbaImage {
    RgbaImage::from_pixel(size, size, color.rgba())
}

/// Round icon: a filled circle on a transparent background.
///
/// The circle is inscribed in the box `[inset, inset]..=[size - inset, size - inset]`.
/// A pixel is painted when its centre lies inside the circle, so the result
/// only depends on `size`, `color` and `inset`.
pub fn round(size: u32, color: Color, inset: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, TRANSPARENT);
    if inset.saturating_mul(2) >= size {
        return img;
    }
    let lo = inset as f64;
    let hi = (size - inset + 1) as f64;
    let center = (lo + hi) / 2.0;
    let radius = (hi - lo) / 2.0;
    let fill = color.rgba();
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let dx = (x as f64 + 0.5 - center) / radius;
        let dy = (y as f64 + 0.5 - center) / radius;
        if dx * dx + dy * dy <= 1.0 {
            *pixel = fill;
        }
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_is_solid() {
        let img = square(48, Color::LAUNCHER_BLUE);
        assert_eq!(img.dimensions(), (48, 48));
        assert!(img.pixels().all(|p| *p == Rgba([33, 150, 243, 255])));
    }

    #[test]
    fn round_mdpi() {
        let img = round(48, Color::LAUNCHER_BLUE, ROUND_INSET);
        assert_eq!(img.dimensions(), (48, 48));
        for (x, y) in [(0, 0), (47, 0), (0, 47), (47, 47), (1, 24), (24, 1)] {
            assert_eq!(*img.get_pixel(x, y), TRANSPARENT, "({}, {})", x, y);
        }
        for (x, y) in [(24, 24), (24, 4), (4, 24), (44, 24), (24, 44)] {
            assert_eq!(*img.get_pixel(x, y), Color::LAUNCHER_BLUE.rgba(), "({}, {})", x, y);
        }
    }

    #[test]
    fn round_is_symmetric() {
        let img = round(72, Color::LAUNCHER_BLUE, ROUND_INSET);
        // painted span is 2..=70, so pixel x mirrors onto 72 - x
        for y in 1..72 {
            for x in 1..72 {
                assert_eq!(img.get_pixel(x, y), img.get_pixel(72 - x, y));
                assert_eq!(img.get_pixel(x, y), img.get_pixel(x, 72 - y));
            }
        }
    }

    #[test]
    fn round_outside_circle_is_transparent() {
        let size = 96;
        let img = round(size, Color::LAUNCHER_BLUE, ROUND_INSET);
        let center = (2.0 + (size - 1) as f64) / 2.0;
        let radius = ((size - 1) as f64 - 2.0) / 2.0;
        for (x, y, pixel) in img.enumerate_pixels() {
            let dx = x as f64 + 0.5 - center;
            let dy = y as f64 + 0.5 - center;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist > radius + 1.0 {
                assert_eq!(pixel[3], 0, "({}, {})", x, y);
            }
            if dist < radius - 1.0 {
                assert_eq!(*pixel, Color::LAUNCHER_BLUE.rgba(), "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn round_without_room_is_empty() {
        let img = round(4, Color::LAUNCHER_BLUE, ROUND_INSET);
        assert!(img.pixels().all(|p| *p == TRANSPARENT));
        let img = round(4, Color::LAUNCHER_BLUE, u32::MAX);
        assert!(img.pixels().all(|p| *p == TRANSPARENT));
    }

    #[test]
    fn parse_color() -> Result<()> {
        assert_eq!("#2196f3".parse::<Color>()?, Color::LAUNCHER_BLUE);
        assert_eq!("2196F380".parse::<Color>()?, Color([33, 150, 243, 128]));
        assert!("#2196f".parse::<Color>().is_err());
        assert!("#zz96f3".parse::<Color>().is_err());
        assert_eq!(Color::LAUNCHER_BLUE.to_string(), "#2196f3");
        Ok(())
    }
}
