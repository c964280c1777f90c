//! exceptions/types.rs
//! Base exception, its kinds, and conversions from std errors.

use std::fmt;
use std::io;
use std::ops::AddAssign;

use thiserror::Error;

use crate::exceptions::message::MessageBuf;
use crate::exceptions::tracer::{stack_tracer, trace_with, StackTracer};

/// Result alias used by every fallible operation in this crate.
pub type ExcResult<T> = Result<T, Exception>;

/// Specific arithmetic failures under the math umbrella.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MathFault {
    #[default]
    General,
    /// Attempt to normalize a null vector.
    NullVec,
    /// Attempt to normalize a point at infinity.
    InfPoint,
    /// Attempt to normalize a null quaternion.
    NullQuat,
    /// Attempt to invert a singular matrix.
    SingMatrix,
    /// Attempt to remove zero scaling from a matrix.
    ZeroScale,
    /// Attempt to normalize an integer vector.
    IntVecNormalize,
}

impl MathFault {
    pub const ALL: [MathFault; 7] = [
        MathFault::General,
        MathFault::NullVec,
        MathFault::InfPoint,
        MathFault::NullQuat,
        MathFault::SingMatrix,
        MathFault::ZeroScale,
        MathFault::IntVecNormalize,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            MathFault::General         => "MathExc",
            MathFault::NullVec         => "NullVecExc",
            MathFault::InfPoint        => "InfPointExc",
            MathFault::NullQuat        => "NullQuatExc",
            MathFault::SingMatrix      => "SingMatrixExc",
            MathFault::ZeroScale       => "ZeroScaleExc",
            MathFault::IntVecNormalize => "IntVecNormalizeExc",
        }
    }
}

/// Failure category of an `Exception`.
///
/// Callers discriminate failures by matching on this tag, e.g. telling
/// malformed input (`Input`) apart from a bad call (`Arg`).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExcKind {
    /// Plain base exception with no more specific category.
    #[default]
    Base,
    /// Invalid arguments to a function call.
    Arg,
    /// A function was called in a context where the call makes no sense.
    Logic,
    /// Invalid input data, e.g. from a file.
    Input,
    /// An input or output operation failed.
    Io,
    /// Arithmetic failure.
    Math(MathFault),
    /// Failure reported by the OS through an error number.
    Errno(i32),
    /// The requested operation is not implemented.
    NoImpl,
    /// A required reference was absent.
    Null,
    /// An object had an inappropriate type.
    Type,
}

impl ExcKind {
    /// Traditional class name of this kind.
    pub const fn name(self) -> &'static str {
        match self {
            ExcKind::Base     => "BaseExc",
            ExcKind::Arg      => "ArgExc",
            ExcKind::Logic    => "LogicExc",
            ExcKind::Input    => "InputExc",
            ExcKind::Io       => "IoExc",
            ExcKind::Math(f)  => f.name(),
            ExcKind::Errno(_) => "ErrnoExc",
            ExcKind::NoImpl   => "NoImplExc",
            ExcKind::Null     => "NullExc",
            ExcKind::Type     => "TypeExc",
        }
    }

    pub const fn is_math(self) -> bool {
        matches!(self, ExcKind::Math(_))
    }

    pub const fn errno(self) -> Option<i32> {
        match self {
            ExcKind::Errno(code) => Some(code),
            _ => None,
        }
    }
}

impl fmt::Display for ExcKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExcKind::Errno(code) => write!(f, "{} ({})", self.name(), code),
            _ => f.write_str(self.name()),
        }
    }
}

/// The base exception: a kind, a human readable message and the stack trace
/// captured when it was constructed.
///
/// `Default` and `Clone` never run the stack tracer; every other constructor
/// does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Exception {
    kind: ExcKind,
    message: String,
    stack_trace: String,
}

impl Exception {
    /// Construct with the process-wide stack tracer, if one is installed.
    pub fn new(kind: ExcKind, text: impl Into<String>) -> Self {
        Self::with_tracer(kind, text, stack_tracer())
    }

    /// Construct with an explicitly supplied tracer instead of the
    /// process-wide one. `None` yields an empty stack trace.
    pub fn with_tracer(kind: ExcKind, text: impl Into<String>, tracer: Option<StackTracer>) -> Self {
        Self {
            kind,
            message: text.into(),
            stack_trace: trace_with(tracer),
        }
    }

    /// Construct from a stream-built message; `buf` is left empty.
    pub fn from_buf(kind: ExcKind, buf: &mut MessageBuf) -> Self {
        Self::new(kind, buf.take())
    }

    pub fn base(text: impl Into<String>) -> Self {
        Self::new(ExcKind::Base, text)
    }

    pub fn arg(text: impl Into<String>) -> Self {
        Self::new(ExcKind::Arg, text)
    }

    pub fn logic(text: impl Into<String>) -> Self {
        Self::new(ExcKind::Logic, text)
    }

    pub fn input(text: impl Into<String>) -> Self {
        Self::new(ExcKind::Input, text)
    }

    pub fn io(text: impl Into<String>) -> Self {
        Self::new(ExcKind::Io, text)
    }

    pub fn math(text: impl Into<String>) -> Self {
        Self::new(ExcKind::Math(MathFault::General), text)
    }

    pub fn math_fault(fault: MathFault, text: impl Into<String>) -> Self {
        Self::new(ExcKind::Math(fault), text)
    }

    pub fn errno(code: i32, text: impl Into<String>) -> Self {
        Self::new(ExcKind::Errno(code), text)
    }

    pub fn no_impl(text: impl Into<String>) -> Self {
        Self::new(ExcKind::NoImpl, text)
    }

    pub fn null(text: impl Into<String>) -> Self {
        Self::new(ExcKind::Null, text)
    }

    pub fn type_mismatch(text: impl Into<String>) -> Self {
        Self::new(ExcKind::Type, text)
    }

    pub fn kind(&self) -> ExcKind {
        self.kind
    }

    pub fn is(&self, kind: ExcKind) -> bool {
        self.kind == kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Empty unless a stack tracer was active at construction.
    pub fn stack_trace(&self) -> &str {
        &self.stack_trace
    }

    // ------------------------------------------------------------------
    // Message editing; all forms return `&mut Self` for chaining.
    // ------------------------------------------------------------------

    pub fn assign(&mut self, text: &str) -> &mut Self {
        self.message.clear();
        self.message.push_str(text);
        self
    }

    pub fn append(&mut self, text: &str) -> &mut Self {
        self.message.push_str(text);
        self
    }

    /// Replace the message with the buffer's text and clear the buffer.
    pub fn assign_buf(&mut self, buf: &mut MessageBuf) -> &mut Self {
        self.message = buf.take();
        self
    }

    /// Append the buffer's text and clear the buffer.
    pub fn append_buf(&mut self, buf: &mut MessageBuf) -> &mut Self {
        self.message.push_str(buf.as_str());
        buf.clear();
        self
    }
}

impl AddAssign<&str> for Exception {
    fn add_assign(&mut self, rhs: &str) {
        self.append(rhs);
    }
}

impl AddAssign<&mut MessageBuf> for Exception {
    fn add_assign(&mut self, rhs: &mut MessageBuf) {
        self.append_buf(rhs);
    }
}

/// Allow `?` on std::io::Error.
///
/// A short read is malformed input; anything carrying an OS error number
/// keeps it.
impl From<io::Error> for Exception {
    fn from(e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            return Exception::input(format!("Early end of file: {}", e));
        }
        match e.raw_os_error() {
            Some(code) => Exception::errno(code, e.to_string()),
            None => Exception::io(e.to_string()),
        }
    }
}
