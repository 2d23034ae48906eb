use anyhow::Result;
use std::fmt;
use std::str::FromStr;

/// Screen density buckets android selects launcher icons from.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum Density {
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl Density {
    pub const ALL: [Density; 5] = [
        Self::Mdpi,
        Self::Hdpi,
        Self::Xhdpi,
        Self::Xxhdpi,
        Self::Xxxhdpi,
    ];

    /// Qualifier without the `mipmap-` prefix.
    pub fn name(self) -> &'static str {
        match self {
            Self::Mdpi => "mdpi",
            Self::Hdpi => "hdpi",
            Self::Xhdpi => "xhdpi",
            Self::Xxhdpi => "xxhdpi",
            Self::Xxxhdpi => "xxxhdpi",
        }
    }

    /// Resource directory name, e.g. `mipmap-hdpi`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Mdpi => "mipmap-mdpi",
            Self::Hdpi => "mipmap-hdpi",
            Self::Xhdpi => "mipmap-xhdpi",
            Self::Xxhdpi => "mipmap-xxhdpi",
            Self::Xxxhdpi => "mipmap-xxxhdpi",
        }
    }

    /// Launcher icon edge length in pixels.
    pub fn size(self) -> u32 {
        match self {
            Self::Mdpi => 48,
            Self::Hdpi => 72,
            Self::Xhdpi => 96,
            Self::Xxhdpi => 144,
            Self::Xxxhdpi => 192,
        }
    }

    pub fn dpi(self) -> u16 {
        match self {
            Self::Mdpi => 160,
            Self::Hdpi => 240,
            Self::Xhdpi => 320,
            Self::Xxhdpi => 480,
            Self::Xxxhdpi => 640,
        }
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Density {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_ascii_lowercase();
        let name = lower.strip_prefix("mipmap-").unwrap_or(&lower);
        Self::ALL
            .into_iter()
            .find(|density| density.name() == name)
            .ok_or_else(|| anyhow::anyhow!("unknown density `{}`", s))
    }
}

impl<'de> serde::Deserialize<'de> for Density {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table() {
        let table: Vec<_> = Density::ALL
            .iter()
            .map(|d| (d.label(), d.size()))
            .collect();
        assert_eq!(
            table,
            [
                ("mipmap-mdpi", 48),
                ("mipmap-hdpi", 72),
                ("mipmap-xhdpi", 96),
                ("mipmap-xxhdpi", 144),
                ("mipmap-xxxhdpi", 192),
            ]
        );
    }

    #[test]
    fn size_scales_with_dpi() {
        for density in Density::ALL {
            assert_eq!(density.size() * 160, 48 * density.dpi() as u32);
        }
    }

    #[test]
    fn parse() -> Result<()> {
        assert_eq!("xhdpi".parse::<Density>()?, Density::Xhdpi);
        assert_eq!("mipmap-XXXHDPI".parse::<Density>()?, Density::Xxxhdpi);
        assert!("ldpi".parse::<Density>().is_err());
        assert!("mipmap-".parse::<Density>().is_err());
        Ok(())
    }
}
