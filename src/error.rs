use std::error;
use std::fmt;
use std::num;
use std::result;

use crate::reader::Position;

/// A type alias for `Result<T, eatwatch_csv::Error>`.
pub type Result<T> = result::Result<T, Error>;

/// An error that can occur when reading a field strictly.
///
/// The lenient reads (`read_string`, `read_float`, `read_bool`) never return
/// this type. Only the `try_read_*` methods and `deserialize` do.
#[derive(Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    pos: Option<Position>,
    field: Option<u64>,
}

/// The specific type of an error.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorKind {
    /// The current row has no more fields, no row has been started yet or
    /// all rows have been read.
    MissingField,
    /// The field exists but is empty where a value was required.
    EmptyField,
    /// The field is not valid UTF-8.
    Utf8 {
        /// The index into the field up to which valid UTF-8 was verified.
        valid_up_to: usize,
    },
    /// The field could not be parsed as a float.
    ParseFloat(num::ParseFloatError),
    /// The field could not be parsed as an integer.
    ParseInt(num::ParseIntError),
    /// The field is neither a truthy nor a falsy token.
    ParseBool {
        /// The offending token, lossily decoded.
        token: String,
    },
    /// A catch-all error raised while deserializing a row.
    Deserialize(String),
}

impl Error {
    /// Create an error with no position information.
    pub(crate) fn new(kind: ErrorKind) -> Error {
        Error { kind, pos: None, field: None }
    }

    /// Create an error located at the given position and field index.
    pub(crate) fn at(kind: ErrorKind, pos: Position, field: u64) -> Error {
        Error { kind, pos: Some(pos), field: Some(field) }
    }

    /// Return the specific type of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Unwrap this error into its underlying type.
    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }

    /// The position of the reader when this error occurred, if available.
    pub fn position(&self) -> Option<&Position> {
        self.pos.as_ref()
    }

    /// The zero based index of the field within its row, if available.
    pub fn field(&self) -> Option<u64> {
        self.field
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self.kind {
            ErrorKind::ParseFloat(ref err) => Some(err),
            ErrorKind::ParseInt(ref err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.pos, self.field) {
            (Some(pos), Some(field)) => write!(
                f,
                "CSV error: row {} (byte {}, line {}, field {}): {}",
                pos.row(),
                pos.byte(),
                pos.line(),
                field,
                self.kind
            ),
            _ => write!(f, "CSV error: {}", self.kind),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ErrorKind::MissingField => write!(f, "no field left in row"),
            ErrorKind::EmptyField => write!(f, "field is empty"),
            ErrorKind::Utf8 { valid_up_to } => write!(
                f,
                "invalid utf-8: invalid UTF-8 in field near byte index {}",
                valid_up_to
            ),
            ErrorKind::ParseFloat(ref err) => {
                write!(f, "invalid float: {}", err)
            }
            ErrorKind::ParseInt(ref err) => {
                write!(f, "invalid integer: {}", err)
            }
            ErrorKind::ParseBool { ref token } => {
                write!(f, "invalid boolean: {:?}", token)
            }
            ErrorKind::Deserialize(ref msg) => write!(f, "{}", msg),
        }
    }
}
