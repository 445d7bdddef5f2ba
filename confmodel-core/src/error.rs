//! Error types for the confmodel core library.
//!
//! Only input validation fails. A degree sequence that cannot be realised
//! within the retry budget is reported as an empty adjacency list instead.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error produced when a generator or sampler rejects its inputs.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// The degree sequence has an odd number of stubs, so no graph exists.
    #[error("sum of degrees ({sum}) must be even")]
    OddDegreeSum {
        /// Total number of stubs in the rejected sequence.
        sum: usize,
    },
    /// The power-law exponent does not define a finite-mean distribution.
    #[error("power-law exponent must be greater than 2 (got {gamma})")]
    InvalidExponent {
        /// The rejected exponent.
        gamma: f64,
    },
    /// The minimum degree must be at least one.
    #[error("minimum degree must be at least 1 (got {k_min})")]
    InvalidMinDegree {
        /// The rejected minimum degree.
        k_min: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The degree sequence has an odd number of stubs.
        OddDegreeSum => OddDegreeSum { .. } => "GRAPH_ODD_DEGREE_SUM",
        /// The power-law exponent was not greater than two.
        InvalidExponent => InvalidExponent { .. } => "GRAPH_INVALID_EXPONENT",
        /// The minimum degree was zero.
        InvalidMinDegree => InvalidMinDegree { .. } => "GRAPH_INVALID_MIN_DEGREE",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;

/// Rejects exponents that are not strictly greater than two, including NaN.
pub(crate) fn ensure_exponent(gamma: f64) -> Result<()> {
    if gamma > 2.0 {
        Ok(())
    } else {
        Err(GraphError::InvalidExponent { gamma })
    }
}

pub(crate) fn ensure_min_degree(k_min: usize) -> Result<()> {
    if k_min >= 1 {
        Ok(())
    } else {
        Err(GraphError::InvalidMinDegree { k_min })
    }
}
