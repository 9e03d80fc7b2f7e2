use crate::{
    errors::{image::ImageError, vm::VirtualMachineError},
    image::ProgramImage,
};

/// Addressing mode of a single instruction parameter.
///
/// Decoded from the instruction word divided by 100, one decimal digit per
/// parameter, least significant first. Digits beyond those encoded default
/// to position mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParameterMode {
    /// The parameter is an address; the value stored there is used.
    Position,
    /// The parameter itself is the value.
    Immediate,
}

impl ParameterMode {
    /// Maps a mode digit to its addressing mode.
    ///
    /// Any digit other than 0 or 1 is a fatal decode error; `index` and
    /// `address` locate the offending parameter for the error report.
    pub(crate) const fn from_digit(
        digit: i64,
        index: usize,
        address: usize,
    ) -> Result<Self, VirtualMachineError> {
        match digit {
            0 => Ok(Self::Position),
            1 => Ok(Self::Immediate),
            _ => Err(VirtualMachineError::UnknownParameterMode {
                digit,
                index,
                address,
            }),
        }
    }
}

/// One decoded instruction parameter: the raw word plus its addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Parameter {
    pub raw: i64,
    pub mode: ParameterMode,
}

impl Parameter {
    /// Decodes the `index`-th parameter of the instruction at `address`,
    /// extracting its mode digit from the packed `mode_digits` value.
    pub(crate) fn decode(
        raw: i64,
        mode_digits: i64,
        index: usize,
        address: usize,
    ) -> Result<Self, VirtualMachineError> {
        let digit = (mode_digits / 10_i64.pow(index as u32)) % 10;
        let mode = ParameterMode::from_digit(digit, index, address)?;
        Ok(Self { raw, mode })
    }

    /// Resolves the parameter through its mode: position mode reads the image
    /// at the raw word, immediate mode uses the raw word directly.
    pub fn value(&self, image: &ProgramImage) -> Result<i64, ImageError> {
        match self.mode {
            ParameterMode::Position => image.read(self.raw),
            ParameterMode::Immediate => Ok(self.raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_digits_are_read_right_to_left() {
        // Word 1002 encodes modes 0,1,0 for parameters 0,1,2.
        let mode_digits = 1002 / 100;
        let p0 = Parameter::decode(4, mode_digits, 0, 0).unwrap();
        let p1 = Parameter::decode(3, mode_digits, 1, 0).unwrap();
        let p2 = Parameter::decode(4, mode_digits, 2, 0).unwrap();
        assert_eq!(p0.mode, ParameterMode::Position);
        assert_eq!(p1.mode, ParameterMode::Immediate);
        assert_eq!(p2.mode, ParameterMode::Position);
    }

    #[test]
    fn test_missing_digits_default_to_position() {
        let parameter = Parameter::decode(7, 0, 2, 0).unwrap();
        assert_eq!(parameter.mode, ParameterMode::Position);
    }

    #[test]
    fn test_unknown_mode_digit_is_fatal() {
        let err = Parameter::decode(7, 2, 0, 5).unwrap_err();
        assert_eq!(
            err,
            VirtualMachineError::UnknownParameterMode {
                digit: 2,
                index: 0,
                address: 5,
            }
        );
    }

    #[test]
    fn test_value_resolution_per_mode() {
        let image = ProgramImage::parse("10,20,30").unwrap();
        let position = Parameter {
            raw: 2,
            mode: ParameterMode::Position,
        };
        let immediate = Parameter {
            raw: 2,
            mode: ParameterMode::Immediate,
        };
        assert_eq!(position.value(&image).unwrap(), 30);
        assert_eq!(immediate.value(&image).unwrap(), 2);
    }

    #[test]
    fn test_position_mode_is_bounds_checked() {
        let image = ProgramImage::parse("10,20,30").unwrap();
        let parameter = Parameter {
            raw: 9,
            mode: ParameterMode::Position,
        };
        assert!(parameter.value(&image).is_err());
    }
}
