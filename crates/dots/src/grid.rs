use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const MIN_SIZE: u32 = 1;
pub const MAX_SIZE: u32 = 100;
pub const DEFAULT_SIZE: u32 = 4;

/// The lattice dimensions: `size` × `size` dots with coordinates in `[0, size)`.
///
/// Only constructible through [`GridSpec::new`] or [`FromStr`], so the rest of the
/// crate may assume `1 <= size <= 100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct GridSpec {
    size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridSizeError {
    #[error("Size must be an integer between 1 and 100 (inclusive), got {0}.")]
    OutOfRange(i64),
    #[error("Size must be an integer between 1 and 100 (inclusive), got {0:?}.")]
    NotANumber(String),
}

impl GridSpec {
    pub fn new(size: u32) -> Result<Self, GridSizeError> {
        if (MIN_SIZE..=MAX_SIZE).contains(&size) {
            Ok(Self { size })
        } else {
            Err(GridSizeError::OutOfRange(size.into()))
        }
    }

    pub fn size(self) -> u32 {
        self.size
    }

    /// Whether a lattice coordinate lies inside `[0, size)`.
    pub fn contains(self, c: i32) -> bool {
        c >= 0 && (c as i64) < self.size as i64
    }

    /// All lattice points, x-major.
    pub fn points(self) -> impl Iterator<Item = (i32, i32)> {
        let n = self.size as i32;
        (0..n).flat_map(move |x| (0..n).map(move |y| (x, y)))
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self { size: DEFAULT_SIZE }
    }
}

impl FromStr for GridSpec {
    type Err = GridSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| GridSizeError::NotANumber(s.to_string()))?;
        u32::try_from(value)
            .map_err(|_| GridSizeError::OutOfRange(value))
            .and_then(Self::new)
    }
}

impl TryFrom<u32> for GridSpec {
    type Error = GridSizeError;

    fn try_from(size: u32) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<GridSpec> for u32 {
    fn from(grid: GridSpec) -> Self {
        grid.size
    }
}

impl fmt::Display for GridSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.size)
    }
}
