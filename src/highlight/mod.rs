//! Highlight filters such as `P8+` or `A4-9`.
//!
//! A filter names one world attribute and an inclusive range. The renderer
//! draws matching worlds with the `highlight_worlds` layer.

use crate::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// `<field><N>`, `<field><N>+`, `<field><N>-` or `<field><N1>-<N2>`.
static PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i)(st|ix|s|a|h|p|g|l|t)([+-]?\d+)(?:(\+)|(-)([+-]?\d+)?)?$")
        .expect("highlight grammar is a valid regex")
});

/// Starport classes from worst to best.
const STARPORT_RANKS: [char; 6] = ['X', 'E', 'D', 'C', 'B', 'A'];

/// World attribute a highlight filter selects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightField {
    Starport,
    Size,
    Atmosphere,
    Hydrographics,
    Population,
    Government,
    Law,
    TechLevel,
    Importance,
}

impl HighlightField {
    pub fn from_alias(alias: &str) -> Option<Self> {
        let field = match alias.to_ascii_lowercase().as_str() {
            "st" => Self::Starport,
            "s" => Self::Size,
            "a" => Self::Atmosphere,
            "h" => Self::Hydrographics,
            "p" => Self::Population,
            "g" => Self::Government,
            "l" => Self::Law,
            "t" => Self::TechLevel,
            "ix" => Self::Importance,
            _ => return None,
        };
        Some(field)
    }

    /// Canonical alias, as written back by `Display`.
    pub fn alias(&self) -> &'static str {
        match self {
            Self::Starport => "St",
            Self::Size => "S",
            Self::Atmosphere => "A",
            Self::Hydrographics => "H",
            Self::Population => "P",
            Self::Government => "G",
            Self::Law => "L",
            Self::TechLevel => "T",
            Self::Importance => "Ix",
        }
    }

    /// Numeric value of this field for `world`, `None` when it has none.
    pub fn value_of<W: WorldAttributes + ?Sized>(&self, world: &W) -> Option<i32> {
        match self {
            Self::Starport => starport_rank(world.starport()),
            Self::Size => Some(world.size()),
            Self::Atmosphere => Some(world.atmosphere()),
            Self::Hydrographics => Some(world.hydrographics()),
            Self::Population => Some(world.population()),
            Self::Government => Some(world.government()),
            Self::Law => Some(world.law()),
            Self::TechLevel => Some(world.tech_level()),
            Self::Importance => Some(world.importance()),
        }
    }
}

/// Rank of a starport class; `X` is 0 and `A` is 5.
pub fn starport_rank(class: char) -> Option<i32> {
    let class = class.to_ascii_uppercase();
    STARPORT_RANKS
        .iter()
        .position(|&c| c == class)
        .map(|rank| rank as i32)
}

/// Read access to the world attributes a highlight can select.
///
/// Importance is computed by the world data layer and only read here.
pub trait WorldAttributes {
    fn starport(&self) -> char;
    fn size(&self) -> i32;
    fn atmosphere(&self) -> i32;
    fn hydrographics(&self) -> i32;
    fn population(&self) -> i32;
    fn government(&self) -> i32;
    fn law(&self) -> i32;
    fn tech_level(&self) -> i32;
    fn importance(&self) -> i32;
}

/// Plain attribute record, mostly useful for tools and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorldProfile {
    pub starport: char,
    pub size: i32,
    pub atmosphere: i32,
    pub hydrographics: i32,
    pub population: i32,
    pub government: i32,
    pub law: i32,
    pub tech_level: i32,
    pub importance: i32,
}

impl WorldProfile {
    /// Read a UWP string such as `A788899-C`. Importance is left at zero.
    pub fn from_uwp(uwp: &str) -> Result<Self> {
        let invalid = || Error::InvalidUwp(uwp.to_string());
        let chars: Vec<char> = uwp.trim().chars().collect();
        if chars.len() != 9 || chars[7] != '-' {
            return Err(invalid());
        }
        let starport = chars[0].to_ascii_uppercase();
        if starport_rank(starport).is_none() {
            return Err(invalid());
        }
        let digit = |i: usize| ehex_value(chars[i]).ok_or_else(invalid);
        Ok(Self {
            starport,
            size: digit(1)?,
            atmosphere: digit(2)?,
            hydrographics: digit(3)?,
            population: digit(4)?,
            government: digit(5)?,
            law: digit(6)?,
            tech_level: digit(8)?,
            importance: 0,
        })
    }

    pub fn with_importance(self, importance: i32) -> Self {
        Self { importance, ..self }
    }
}

/// Extended hex digit: `0-9`, then `A-Z` skipping `I` and `O`.
fn ehex_value(c: char) -> Option<i32> {
    let c = c.to_ascii_uppercase();
    match c {
        '0'..='9' => Some(c as i32 - '0' as i32),
        'I' | 'O' => None,
        'A'..='H' => Some(c as i32 - 'A' as i32 + 10),
        'J'..='N' => Some(c as i32 - 'J' as i32 + 18),
        'P'..='Z' => Some(c as i32 - 'P' as i32 + 23),
        _ => None,
    }
}

impl WorldAttributes for WorldProfile {
    fn starport(&self) -> char {
        self.starport
    }
    fn size(&self) -> i32 {
        self.size
    }
    fn atmosphere(&self) -> i32 {
        self.atmosphere
    }
    fn hydrographics(&self) -> i32 {
        self.hydrographics
    }
    fn population(&self) -> i32 {
        self.population
    }
    fn government(&self) -> i32 {
        self.government
    }
    fn law(&self) -> i32 {
        self.law
    }
    fn tech_level(&self) -> i32 {
        self.tech_level
    }
    fn importance(&self) -> i32 {
        self.importance
    }
}

/// Parsed highlight filter. At least one bound is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HighlightPattern {
    field: HighlightField,
    min: Option<i32>,
    max: Option<i32>,
}

impl HighlightPattern {
    /// `None` when both bounds are absent.
    pub fn new(field: HighlightField, min: Option<i32>, max: Option<i32>) -> Option<Self> {
        if min.is_none() && max.is_none() {
            return None;
        }
        Some(Self { field, min, max })
    }

    pub fn field(&self) -> HighlightField {
        self.field
    }

    pub fn min(&self) -> Option<i32> {
        self.min
    }

    pub fn max(&self) -> Option<i32> {
        self.max
    }

    /// Parse filter text.
    ///
    /// Empty or blank text means no highlighting and gives `Ok(None)`;
    /// anything else that does not fit the grammar is an error.
    pub fn parse(text: &str) -> Result<Option<Self>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        let invalid = || Error::InvalidHighlight(text.to_string());
        let caps = PATTERN.captures(text).ok_or_else(invalid)?;

        let field = caps
            .get(1)
            .and_then(|m| HighlightField::from_alias(m.as_str()))
            .ok_or_else(invalid)?;
        let number = |i: usize| -> Result<Option<i32>> {
            caps.get(i)
                .map(|m| m.as_str().parse::<i32>().map_err(|_| invalid()))
                .transpose()
        };
        let first = number(2)?.ok_or_else(invalid)?;
        let open_above = caps.get(3).is_some();
        let dash = caps.get(4).is_some();
        let second = number(5)?;

        let (min, max) = match (open_above, dash, second) {
            (true, _, _) => (Some(first), None),
            (false, true, Some(upper)) => (Some(first), Some(upper)),
            (false, true, None) => (None, Some(first)),
            (false, false, _) => (Some(first), Some(first)),
        };
        Self::new(field, min, max).map(Some).ok_or_else(invalid)
    }

    /// Lenient form for request handling: a bad filter disables highlighting.
    pub fn from_query(text: &str) -> Option<Self> {
        match Self::parse(text) {
            Ok(pattern) => pattern,
            Err(err) => {
                log::warn!("ignoring highlight filter: {}", err);
                None
            }
        }
    }

    pub fn matches<W: WorldAttributes + ?Sized>(&self, world: &W) -> bool {
        let Some(value) = self.field.value_of(world) else {
            return false;
        };
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

impl FromStr for HighlightPattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)?.ok_or_else(|| Error::InvalidHighlight(s.to_string()))
    }
}

impl fmt::Display for HighlightPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alias = self.field.alias();
        match (self.min, self.max) {
            (Some(min), Some(max)) if min == max => write!(f, "{alias}{min}"),
            (Some(min), Some(max)) => write!(f, "{alias}{min}-{max}"),
            (Some(min), None) => write!(f, "{alias}{min}+"),
            (None, Some(max)) => write!(f, "{alias}{max}-"),
            (None, None) => f.write_str(alias),
        }
    }
}
