// Copyright 2025 the Chronoline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Required markup is missing from a container.
///
/// The container is skipped; other containers are unaffected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    /// No `.timeline__wrap` below the container.
    #[error(".timeline__wrap could not be found as a descendant of {container}")]
    MissingWrap {
        /// Container description (`#id` or the class list).
        container: String,
    },
    /// No `.timeline__items` below the wrap.
    #[error(".timeline__items could not be found as a descendant of .timeline__wrap in {container}")]
    MissingItems {
        /// Container description (`#id` or the class list).
        container: String,
    },
}

/// Why a carousel delegate could not be attached.
///
/// Never fatal: the timeline keeps its native horizontal layout.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    /// No `.timeline__wrap` to host the carousel.
    #[error("no .timeline__wrap to attach the carousel to")]
    MissingContainer,
    /// No strategy produced a carousel library.
    #[error("carousel library not found after trying {tried} strategies")]
    Unavailable {
        /// Number of strategies attempted.
        tried: usize,
    },
    /// The library refused to construct an instance.
    #[error("carousel construction failed: {0}")]
    Construction(String),
}

/// Kind of structural problem reported to
/// [`Collaborators::notify_error`](crate::Collaborators::notify_error).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required element is missing.
    MissingElement,
}

impl ErrorKind {
    /// Stable identifier, as used by error displays.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MissingElement => "missing-element",
        }
    }
}

impl StructureError {
    /// The reported error kind.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingWrap { .. } | Self::MissingItems { .. } => ErrorKind::MissingElement,
        }
    }
}
