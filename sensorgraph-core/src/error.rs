//! Error types for the sensorgraph core library.
//!
//! Input validation failures and pipeline invariant violations surface through
//! [`SensorGraphError`], which carries a stable machine-readable code.

use std::fmt;

use thiserror::Error;

use crate::{
    coloring::{ColoringError, ColoringErrorCode},
    ordering::{OrderingError, OrderingErrorCode},
};

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
            #[must_use]
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
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced while configuring or running the analysis pipeline.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SensorGraphError {
    /// The sensor count must be at least one.
    #[error("vertex count must be at least 1 (got {got})")]
    InvalidVertexCount {
        /// The vertex count supplied by the caller.
        got: usize,
    },
    /// The adjacency radius was negative or not finite.
    #[error("adjacency radius must be a finite non-negative number (got {got})")]
    InvalidRadius {
        /// The radius supplied by the caller.
        got: f64,
    },
    /// The target average degree was negative or not finite.
    #[error("average degree must be a finite non-negative number (got {got})")]
    InvalidAverageDegree {
        /// The average degree supplied by the caller.
        got: f64,
    },
    /// A point carried a NaN or infinite coordinate.
    #[error("point {vertex} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Index of the offending point.
        vertex: usize,
    },
    /// The smallest-last ordering detected a broken invariant.
    #[error("smallest-last ordering failed: {source}")]
    Ordering {
        /// Underlying ordering failure.
        #[from]
        source: OrderingError,
    },
    /// The greedy colourer detected a broken invariant.
    #[error("greedy colouring failed: {source}")]
    Coloring {
        /// Underlying colouring failure.
        #[from]
        source: ColoringError,
    },
}

define_error_codes! {
    /// Stable codes describing [`SensorGraphError`] variants.
    enum SensorGraphErrorCode for SensorGraphError {
        /// The sensor count must be at least one.
        InvalidVertexCount => InvalidVertexCount { .. } => "SENSORGRAPH_INVALID_VERTEX_COUNT",
        /// The adjacency radius was negative or not finite.
        InvalidRadius => InvalidRadius { .. } => "SENSORGRAPH_INVALID_RADIUS",
        /// The target average degree was negative or not finite.
        InvalidAverageDegree => InvalidAverageDegree { .. } => "SENSORGRAPH_INVALID_AVERAGE_DEGREE",
        /// A point carried a NaN or infinite coordinate.
        NonFiniteCoordinate => NonFiniteCoordinate { .. } => "SENSORGRAPH_NON_FINITE_COORDINATE",
        /// The smallest-last ordering detected a broken invariant.
        OrderingFailure => Ordering { .. } => "SENSORGRAPH_ORDERING_FAILURE",
        /// The greedy colourer detected a broken invariant.
        ColoringFailure => Coloring { .. } => "SENSORGRAPH_COLORING_FAILURE",
    }
}

impl SensorGraphError {
    /// Retrieve the inner [`OrderingErrorCode`] when the failure came from the ordering stage.
    #[must_use]
    pub const fn ordering_code(&self) -> Option<OrderingErrorCode> {
        match self {
            Self::Ordering { source } => Some(source.code()),
            _ => None,
        }
    }

    /// Retrieve the inner [`ColoringErrorCode`] when the failure came from the colouring stage.
    #[must_use]
    pub const fn coloring_code(&self) -> Option<ColoringErrorCode> {
        match self {
            Self::Coloring { source } => Some(source.code()),
            _ => None,
        }
    }

    /// Returns `true` when the error reports a violated internal invariant
    /// rather than rejected input.
    #[must_use]
    pub const fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::Ordering { .. } | Self::Coloring { .. })
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, SensorGraphError>;
