//! Typed errors and the error reporter carried by the driver.
//!
//! Mirrors `gaerror.h`'s error-kind taxonomy, but as an owned, silenceable
//! reporter rather than a process-wide global: each `Evolve` owns one.

use std::fmt;

/// The kind of condition that produced a [`GaError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaErrorKind {
    SameLengthRequired,
    SameBehaviorRequired,
    BadParentLength,
    BadResizeBehavior,
    OpUndef,
    ReadError,
    WriteError,
    BadProbValue,
    ObjectTypeMismatch,
    RefsRemain,
    NoIndividuals,
    BadPopSize,
    NoSexualMating,
    BadSharingCutoff,
    NegFitness,
    BinStrTooLong,
    BadAlleleIndex,
}

impl fmt::Display for GaErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GaErrorKind::SameLengthRequired => "parents/children must have the same length",
            GaErrorKind::SameBehaviorRequired => "parents/children must share a resize behavior",
            GaErrorKind::BadParentLength => "parent length is invalid for this operator",
            GaErrorKind::BadResizeBehavior => "resize behavior is invalid",
            GaErrorKind::OpUndef => "operator is undefined for this genome",
            GaErrorKind::ReadError => "error reading genome contents",
            GaErrorKind::WriteError => "error writing genome contents",
            GaErrorKind::BadProbValue => "probability must be in [0, 1]",
            GaErrorKind::ObjectTypeMismatch => "genome type mismatch",
            GaErrorKind::RefsRemain => "shared handle still has other owners",
            GaErrorKind::NoIndividuals => "population has no individuals",
            GaErrorKind::BadPopSize => "population size must be positive",
            GaErrorKind::NoSexualMating => "operator requires two distinct parents",
            GaErrorKind::BadSharingCutoff => "sharing cutoff is invalid",
            GaErrorKind::NegFitness => "fitness scaling requires non-negative scores",
            GaErrorKind::BinStrTooLong => "bit string exceeds its capacity",
            GaErrorKind::BadAlleleIndex => "allele index is out of range",
        };
        f.write_str(s)
    }
}

/// An error raised by a core operation: a kind plus the call site that raised it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaError {
    pub kind: GaErrorKind,
    pub class: &'static str,
    pub function: &'static str,
    pub message: String,
}

impl GaError {
    pub fn new(kind: GaErrorKind, class: &'static str, function: &'static str, message: impl Into<String>) -> Self {
        GaError { kind, class, function, message: message.into() }
    }
}

impl fmt::Display for GaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}: {} ({})", self.class, self.function, self.message, self.kind)
    }
}

impl std::error::Error for GaError {}

pub type GaResult<T> = Result<T, GaError>;

/// Owned by the driver. Records the last error seen and can be silenced or
/// redirected, replacing `gaerror.h`'s process-global `gaErrMsg` with a value
/// that does not leak across independent GA instances.
#[derive(Debug, Default)]
pub struct ErrorReporter {
    silent: bool,
    last: Option<GaError>,
}

impl ErrorReporter {
    pub fn new() -> Self {
        ErrorReporter { silent: false, last: None }
    }

    pub fn silence(&mut self, silent: bool) {
        self.silent = silent;
    }

    pub fn is_silent(&self) -> bool {
        self.silent
    }

    /// Records the error, logs it unless silenced, and returns it unchanged
    /// so call sites can propagate it with `?` after reporting.
    pub fn report(&mut self, err: GaError) -> GaError {
        if !self.silent {
            log::warn!("{err}");
        }
        self.last = Some(err.clone());
        err
    }

    pub fn last_error(&self) -> Option<&GaError> {
        self.last.as_ref()
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}
