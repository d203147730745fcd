// src/geo/dms.rs
// Degree-minute-second notation, e.g. 39°40'22.7"N.
// Minute and second marks may be ASCII (' ") or typographic (′ ″ ’ ”).

use std::sync::LazyLock;

use regex::Regex;

/// One DMS token: degrees, minutes, seconds, hemisphere.
pub const DMS_TOKEN: &str = r#"\d{1,3}\s*°\s*\d{1,2}\s*['′’]\s*\d{1,2}(?:\.\d+)?\s*["″”]\s*"#;

static DMS_PARTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*(\d{1,3})\s*°\s*(\d{1,2})\s*['′’]\s*(\d{1,2}(?:\.\d+)?)\s*["″”]\s*([NSEW])\s*$"#)
        .expect("DMS regex should compile")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hemisphere {
    N,
    S,
    E,
    W,
}

impl Hemisphere {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'N' => Some(Hemisphere::N),
            'S' => Some(Hemisphere::S),
            'E' => Some(Hemisphere::E),
            'W' => Some(Hemisphere::W),
            _ => None,
        }
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, Hemisphere::S | Hemisphere::W)
    }

    pub fn is_latitude(&self) -> bool {
        matches!(self, Hemisphere::N | Hemisphere::S)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DmsCoordinate {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: f64,
    pub hemisphere: Hemisphere,
}

impl DmsCoordinate {
    /// `None` for anything that is not a single well-formed token
    /// (minutes and seconds must both be below 60).
    pub fn parse(s: &str) -> Option<Self> {
        let caps = DMS_PARTS.captures(s)?;
        let degrees: u32 = caps[1].parse().ok()?;
        let minutes: u32 = caps[2].parse().ok()?;
        let seconds: f64 = caps[3].parse().ok()?;
        let hemisphere = Hemisphere::from_char(caps[4].chars().next()?)?;

        if minutes >= 60 || !(0.0..60.0).contains(&seconds) {
            return None;
        }
        Some(Self { degrees, minutes, seconds, hemisphere })
    }

    pub fn to_decimal(&self) -> f64 {
        let value = self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0;
        if self.hemisphere.is_negative() { -value } else { value }
    }
}

/// Convert `39°40'22.7"N` to signed decimal degrees.
pub fn dms_to_decimal(s: &str) -> Option<f64> {
    DmsCoordinate::parse(s).map(|d| d.to_decimal())
}
