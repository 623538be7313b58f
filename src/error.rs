//! Error types for lanevec operations.
//!
//! Lane-vector arithmetic never fails at runtime: unsupported combinations do
//! not compile and the unchecked memory paths (`load`, `store`) put the burden
//! on the caller. The errors here are only produced by the checked loading
//! helpers such as [`SimdVector::try_from_slice`] and
//! [`SimdVector::try_load_aligned`].
//!
//! [`SimdVector::try_from_slice`]: crate::simd::SimdVector::try_from_slice
//! [`SimdVector::try_load_aligned`]: crate::simd::SimdVector::try_load_aligned

use std::fmt;

/// Errors that can occur when loading lane vectors from caller memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaneError {
    /// The source slice does not hold exactly one vector's worth of lanes.
    LengthError {
        /// The number of lanes the vector type holds.
        expected: usize,
        /// The length of the slice that was provided.
        actual: usize,
    },
    /// The source pointer does not meet the vector type's alignment.
    AlignmentError {
        /// Address of the first element.
        address: usize,
        /// Alignment required by the vector type, in bytes.
        required_alignment: usize,
    },
}

impl fmt::Display for LaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaneError::LengthError { expected, actual } => write!(
                f,
                "Invalid slice length: expected {} lanes, got {}",
                expected, actual
            ),
            LaneError::AlignmentError {
                address,
                required_alignment,
            } => write!(
                f,
                "Misaligned pointer: address {:#x} is not aligned to {} bytes",
                address, required_alignment
            ),
        }
    }
}

impl std::error::Error for LaneError {}

/// Result type alias for lanevec operations.
pub type Result<T> = std::result::Result<T, LaneError>;

/// Creates a length error.
pub fn length_error(expected: usize, actual: usize) -> LaneError {
    LaneError::LengthError { expected, actual }
}

/// Creates an alignment error.
pub fn alignment_error<T>(ptr: *const T, required_alignment: usize) -> LaneError {
    LaneError::AlignmentError {
        address: ptr as usize,
        required_alignment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_error_display() {
        let error = length_error(16, 15);
        let display = format!("{}", error);
        assert!(display.contains("Invalid slice length"));
        assert!(display.contains("expected 16 lanes"));
        assert!(display.contains("got 15"));
    }

    #[test]
    fn test_alignment_error_display() {
        let error = alignment_error(0x1004 as *const f32, 16);
        let display = format!("{}", error);
        assert!(display.contains("Misaligned pointer"));
        assert!(display.contains("0x1004"));
        assert!(display.contains("16 bytes"));
    }

    #[test]
    fn test_error_equality() {
        let error1 = length_error(4, 3);
        let error2 = length_error(4, 3);
        let error3 = length_error(4, 5);

        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = alignment_error(0x1 as *const u8, 16);

        let _: &dyn std::error::Error = &error;

        assert!(std::error::Error::source(&error).is_none());
    }
}
