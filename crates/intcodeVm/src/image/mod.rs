use std::{fmt, str::FromStr};

use crate::errors::image::ImageError;

/// A loaded Intcode program: a mutable, linearly-addressed array of signed
/// integers, parsed once from a comma-separated literal.
///
/// The length is fixed after construction; every read and write is bounds
/// checked against `[0, len)`. `Clone` is a full deep copy, so callers
/// exploring many initialization values can clone the base image per attempt
/// and mutations in one run never leak into another.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ProgramImage {
    cells: Vec<i64>,
}

impl ProgramImage {
    /// Parses a comma-separated program literal into an image.
    ///
    /// Surrounding whitespace (typically a trailing newline) is ignored.
    /// Fails with [`ImageError::MalformedLiteral`] on the first token that is
    /// not a valid signed integer; no partial image is returned.
    pub fn parse(text: &str) -> Result<Self, ImageError> {
        let cells = text
            .trim()
            .split(',')
            .map(|token| {
                token
                    .parse::<i64>()
                    .map_err(|_| ImageError::MalformedLiteral(token.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { cells })
    }

    /// Number of cells in the image.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Full view of the image contents, for final-state inspection.
    #[must_use]
    pub fn cells(&self) -> &[i64] {
        &self.cells
    }

    /// Reads the value at `address`.
    ///
    /// Addresses are taken as `i64` because they are produced by program
    /// values; anything outside `[0, len)` (including negatives) fails with
    /// [`ImageError::OutOfBounds`].
    pub fn read(&self, address: i64) -> Result<i64, ImageError> {
        self.index(address).map(|i| self.cells[i])
    }

    /// Overwrites the value at `address` in place.
    ///
    /// This is also the construction-time patch mechanism: callers may seed
    /// run parameters (commonly addresses 1 and 2) before the first run.
    pub fn write(&mut self, address: i64, value: i64) -> Result<(), ImageError> {
        let index = self.index(address)?;
        self.cells[index] = value;
        Ok(())
    }

    /// Returns `count` contiguous values starting at `start`.
    ///
    /// Used by the decoder to fetch the parameter words of an instruction.
    /// Fails with [`ImageError::OutOfBounds`] if the range exceeds the image.
    pub fn slice(&self, start: usize, count: usize) -> Result<&[i64], ImageError> {
        match start.checked_add(count) {
            Some(end) if end <= self.cells.len() => Ok(&self.cells[start..end]),
            _ => Err(ImageError::OutOfBounds {
                address: start.saturating_add(count).saturating_sub(1) as i64,
                len: self.cells.len(),
            }),
        }
    }

    /// Bounds check mapping a program-level address to a vector index.
    fn index(&self, address: i64) -> Result<usize, ImageError> {
        usize::try_from(address)
            .ok()
            .filter(|&i| i < self.cells.len())
            .ok_or(ImageError::OutOfBounds {
                address,
                len: self.cells.len(),
            })
    }
}

impl FromStr for ProgramImage {
    type Err = ImageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Renders the image back to its comma-separated literal form.
impl fmt::Display for ProgramImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cells = self.cells.iter();
        if let Some(first) = cells.next() {
            write!(f, "{first}")?;
        }
        for cell in cells {
            write!(f, ",{cell}")?;
        }
        Ok(())
    }
}
