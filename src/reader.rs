use std::borrow::Cow;
use std::fmt;

use bstr::ByteSlice;
use eatwatch_csv_core::{FieldEnd, Scan, Scanner, ScannerBuilder, Terminator};
use tracing::{debug, trace};

use crate::error::{Error, ErrorKind, Result};
use crate::field;

/// Builds a CSV reader with various configuration knobs.
///
/// This builder can be used to tweak the field delimiter, row terminator and
/// more. Once a CSV `Reader` is built, its configuration cannot be changed.
#[derive(Debug)]
pub struct ReaderBuilder {
    builder: ScannerBuilder,
    quote: u8,
    trim: bool,
    skip_blank_lines: bool,
}

impl Default for ReaderBuilder {
    fn default() -> ReaderBuilder {
        ReaderBuilder {
            builder: ScannerBuilder::new(),
            quote: b'"',
            trim: false,
            skip_blank_lines: true,
        }
    }
}

impl ReaderBuilder {
    /// Create a new builder for configuring CSV parsing.
    ///
    /// To convert a builder into a reader, call one of the methods starting
    /// with `from_`.
    ///
    /// # Example
    ///
    /// ```
    /// use eatwatch_csv::ReaderBuilder;
    ///
    /// let mut rdr = ReaderBuilder::new()
    ///     .delimiter(b';')
    ///     .from_string("2008-05-17;172.5\n");
    /// assert!(rdr.next_row());
    /// assert_eq!(rdr.read_string(), "2008-05-17");
    /// assert_eq!(rdr.read_float(), 172.5);
    /// ```
    pub fn new() -> ReaderBuilder {
        ReaderBuilder::default()
    }

    /// Build a CSV reader from this configuration that reads the given
    /// bytes.
    ///
    /// The reader takes ownership of the whole buffer. No I/O is performed.
    pub fn from_bytes<B: Into<Vec<u8>>>(&self, bytes: B) -> Reader {
        Reader::new(self, bytes.into())
    }

    /// Build a CSV reader from this configuration that reads the given
    /// string.
    pub fn from_string<S: Into<String>>(&self, s: S) -> Reader {
        self.from_bytes(s.into().into_bytes())
    }

    /// The field delimiter to use when parsing CSV.
    ///
    /// The default is `b','`.
    pub fn delimiter(&mut self, delimiter: u8) -> &mut ReaderBuilder {
        self.builder.delimiter(delimiter);
        self
    }

    /// The row terminator to use when parsing CSV.
    ///
    /// A row terminator can be any single byte. The default is a special
    /// value, `Terminator::CRLF`, which treats any occurrence of `\r`, `\n`
    /// or `\r\n` as a single row terminator. In particular, a `\r` before a
    /// `\n` never ends up in a field.
    pub fn terminator(&mut self, term: Terminator) -> &mut ReaderBuilder {
        self.builder.terminator(term);
        self
    }

    /// Enable or disable quoted fields.
    ///
    /// This is disabled by default, so quote bytes are ordinary field data.
    /// When enabled, a field that starts with the quote byte may contain
    /// delimiters and terminators, and `""` inside it reads as `"`.
    pub fn quoting(&mut self, yes: bool) -> &mut ReaderBuilder {
        self.builder.quoting(yes);
        self
    }

    /// The quote byte to use when quoting is enabled.
    ///
    /// The default is `b'"'`.
    pub fn quote(&mut self, quote: u8) -> &mut ReaderBuilder {
        self.builder.quote(quote);
        self.quote = quote;
        self
    }

    /// Whether to trim whitespace around string fields.
    ///
    /// Float and boolean fields are always trimmed before parsing. This
    /// option only changes what `read_string` and `read_bytes` return. It is
    /// disabled by default.
    pub fn trim(&mut self, yes: bool) -> &mut ReaderBuilder {
        self.trim = yes;
        self
    }

    /// Whether `next_row` skips empty lines.
    ///
    /// This is enabled by default. When disabled, an empty line is a row
    /// with a single empty field.
    pub fn skip_blank_lines(&mut self, yes: bool) -> &mut ReaderBuilder {
        self.skip_blank_lines = yes;
        self
    }
}

/// A position in CSV data.
///
/// A position is used to report errors in CSV data. All positions include the
/// byte offset, line number and row index at which the reader's cursor sits.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Position {
    byte: u64,
    line: u64,
    row: u64,
}

impl Default for Position {
    fn default() -> Position {
        Position::new()
    }
}

impl Position {
    /// Returns a new position at the start of the buffer: byte `0`, line `1`
    /// and row `0`.
    pub fn new() -> Position {
        Position { byte: 0, line: 1, row: 0 }
    }

    /// The byte offset, starting at `0`.
    pub fn byte(&self) -> u64 {
        self.byte
    }

    /// The line number, starting at `1`. Lines are counted by occurrences
    /// of `\n`.
    pub fn line(&self) -> u64 {
        self.line
    }

    /// The row index, starting at `1` for the first row. This is `0` before
    /// `next_row` has succeeded once.
    pub fn row(&self) -> u64 {
        self.row
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum RowState {
    BeforeFirstRow,
    /// `exhausted` is set once a field read stops at a terminator or at the
    /// end of the buffer.
    InRow { exhausted: bool },
    Done,
}

/// A forward only CSV reader over an in-memory buffer.
///
/// The caller drives the traversal: `next_row` moves to the next row, then
/// the typed read methods pull fields out of it in column order. Every read
/// consumes exactly one field, so a field can never be read twice.
///
/// The plain reads never fail. A missing field, a malformed number or a
/// non-truthy token comes back as a default value:
///
/// | method        | missing | unparsable |
/// |---------------|---------|------------|
/// | `read_string` | `""`    | lossy UTF-8 (U+FFFD) |
/// | `read_float`  | `0.0`   | `0.0`      |
/// | `read_bool`   | `false` | `false`    |
///
/// Callers that need validation use the `try_read_*` methods, which report
/// the same situations as errors.
///
/// # Example
///
/// ```
/// let mut rdr = eatwatch_csv::Reader::from_string("x,y\nz\n");
///
/// assert!(rdr.next_row());
/// assert_eq!(rdr.read_string(), "x");
/// assert_eq!(rdr.read_string(), "y");
///
/// assert!(rdr.next_row());
/// assert_eq!(rdr.read_string(), "z");
/// // Short rows read as defaults.
/// assert_eq!(rdr.read_string(), "");
///
/// assert!(!rdr.next_row());
/// ```
#[derive(Clone)]
pub struct Reader {
    buf: Vec<u8>,
    scanner: Scanner,
    quote: u8,
    trim: bool,
    skip_blank_lines: bool,
    state: RowState,
    pos: Position,
    /// The index of the next field in the current row.
    field: u64,
}

impl fmt::Debug for Reader {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Reader")
            .field("buf", &self.buf.as_bstr())
            .field("scanner", &self.scanner)
            .field("trim", &self.trim)
            .field("skip_blank_lines", &self.skip_blank_lines)
            .field("state", &self.state)
            .field("pos", &self.pos)
            .field("field", &self.field)
            .finish()
    }
}

impl Reader {
    fn new(builder: &ReaderBuilder, buf: Vec<u8>) -> Reader {
        Reader {
            buf,
            scanner: builder.builder.build(),
            quote: builder.quote,
            trim: builder.trim,
            skip_blank_lines: builder.skip_blank_lines,
            state: RowState::BeforeFirstRow,
            pos: Position::new(),
            field: 0,
        }
    }

    /// Create a reader over the given bytes with a default configuration.
    pub fn from_bytes<B: Into<Vec<u8>>>(bytes: B) -> Reader {
        ReaderBuilder::new().from_bytes(bytes)
    }

    /// Create a reader over the given string with a default configuration.
    pub fn from_string<S: Into<String>>(s: S) -> Reader {
        ReaderBuilder::new().from_string(s)
    }

    /// Advance to the next row.
    ///
    /// Any fields of the current row that were not read are skipped, along
    /// with the row's terminator and, by default, any blank lines. Returns
    /// `true` if the cursor now sits on the first field of a new row, and
    /// `false` once the buffer is exhausted. After `false` is returned once,
    /// it is returned forever.
    pub fn next_row(&mut self) -> bool {
        if self.state == RowState::Done || self.at_eof() {
            self.state = RowState::Done;
            return false;
        }
        if let RowState::InRow { .. } = self.state {
            let rest = self.scanner.skip_row(self.remaining());
            self.bump(rest);
            let term = self.scanner.terminator_len(self.remaining());
            self.bump(term);
        }
        if self.skip_blank_lines {
            loop {
                let term = self.scanner.terminator_len(self.remaining());
                if term == 0 {
                    break;
                }
                self.bump(term);
            }
        }
        if self.at_eof() {
            trace!(byte = self.pos.byte, "no rows left");
            self.state = RowState::Done;
            return false;
        }
        self.state = RowState::InRow { exhausted: false };
        self.pos.row += 1;
        self.field = 0;
        trace!(
            row = self.pos.row,
            byte = self.pos.byte,
            line = self.pos.line,
            "advanced to row"
        );
        true
    }

    /// Returns true if the current row has another field to read.
    ///
    /// A trailing delimiter counts as one more, empty, field.
    pub fn has_field(&self) -> bool {
        self.state == RowState::InRow { exhausted: false }
    }

    /// Returns true once `next_row` has reported the end of the data.
    pub fn is_done(&self) -> bool {
        self.state == RowState::Done
    }

    /// The current position of the reader's cursor.
    pub fn position(&self) -> &Position {
        &self.pos
    }

    /// Read the next field as a string.
    ///
    /// Fields are decoded as UTF-8, with invalid sequences replaced by
    /// U+FFFD. If the row has no more fields, this returns an empty string.
    pub fn read_string(&mut self) -> String {
        match self.read_bytes() {
            Some(bytes) => bytes.to_str_lossy().into_owned(),
            None => String::new(),
        }
    }

    /// Read the next field as an `f32`.
    ///
    /// Surrounding whitespace is ignored. If the field is missing, empty or
    /// not a number, this returns `0.0`.
    pub fn read_float(&mut self) -> f32 {
        match self.try_read_float() {
            Ok(n) => n,
            Err(err) => {
                self.coerced("float", err.kind());
                0.0
            }
        }
    }

    /// Read the next field as a boolean.
    ///
    /// The field is `true` if, after trimming whitespace, it matches one of
    /// `1`, `true`, `yes`, `y` or `t`, ignoring ASCII case. Anything else,
    /// including a missing or empty field, is `false`.
    pub fn read_bool(&mut self) -> bool {
        let parsed = match self.read_bytes() {
            Some(bytes) => field::parse_bool(&bytes),
            None => return false,
        };
        match parsed {
            Ok(yes) => yes,
            Err(kind) => {
                self.coerced("boolean", &kind);
                false
            }
        }
    }

    /// Read the next field as a string, failing if the row has no more
    /// fields or the field is not valid UTF-8.
    pub fn try_read_string(&mut self) -> Result<String> {
        let (start, scan) = self.next_field().ok_or_else(|| self.missing())?;
        let bytes = self.field_bytes(start, &scan).into_owned();
        String::from_utf8(bytes).map_err(|err| {
            self.error(ErrorKind::Utf8 {
                valid_up_to: err.utf8_error().valid_up_to(),
            })
        })
    }

    /// Read the next field as an `f32`, failing if the field is missing,
    /// empty or not a number.
    pub fn try_read_float(&mut self) -> Result<f32> {
        let (start, scan) = self.next_field().ok_or_else(|| self.missing())?;
        let bytes = self.field_bytes(start, &scan);
        field::parse_float(&bytes).map_err(|kind| self.error(kind))
    }

    /// Read the next field as a boolean, failing unless it is a known token.
    ///
    /// `1`, `true`, `yes`, `y` and `t` read as `true`; `0`, `false`, `no`,
    /// `n` and `f` read as `false`. Case and surrounding whitespace are
    /// ignored. Anything else, including an empty field, is an error.
    pub fn try_read_bool(&mut self) -> Result<bool> {
        let (start, scan) = self.next_field().ok_or_else(|| self.missing())?;
        let bytes = self.field_bytes(start, &scan);
        field::parse_bool(&bytes).map_err(|kind| self.error(kind))
    }

    /// Read the next field as bytes.
    ///
    /// Quotes are removed when quoting is enabled and whitespace is trimmed
    /// when trimming is enabled. Otherwise, the bytes are borrowed straight
    /// from the buffer. Returns `None` if the row has no more fields.
    pub fn read_bytes(&mut self) -> Option<Cow<[u8]>> {
        let (start, scan) = self.next_field()?;
        Some(self.field_bytes(start, &scan))
    }

    /// Consume the next field without decoding it.
    ///
    /// Returns false if the row had no more fields.
    pub fn skip_field(&mut self) -> bool {
        self.next_field().is_some()
    }

    /// Deserialize the remaining fields of the current row into `D`.
    ///
    /// Fields are matched by position: a struct takes one field per member
    /// in declaration order, and a tuple one field per element. `Option`
    /// members are `None` when their field is empty or missing. Booleans use
    /// the same tokens as `try_read_bool`.
    ///
    /// # Example
    ///
    /// ```
    /// # fn example() -> eatwatch_csv::Result<()> {
    /// let mut rdr = eatwatch_csv::Reader::from_string("2008-05-17,172.5,yes\n");
    /// assert!(rdr.next_row());
    ///
    /// let (day, weight, flag): (String, f32, bool) = rdr.deserialize()?;
    /// assert_eq!(day, "2008-05-17");
    /// assert_eq!(weight, 172.5);
    /// assert!(flag);
    /// # Ok(())
    /// # }
    /// # example().unwrap();
    /// ```
    #[cfg(feature = "serde")]
    pub fn deserialize<D>(&mut self) -> Result<D>
    where
        D: serde::de::DeserializeOwned,
    {
        crate::deserializer::deserialize_row(self)
    }

    /// Create an error for the most recently read field.
    pub(crate) fn error(&self, kind: ErrorKind) -> Error {
        Error::at(kind, self.pos.clone(), self.field.saturating_sub(1))
    }

    /// Create an error for a field that was expected but is absent.
    pub(crate) fn missing(&self) -> Error {
        Error::at(ErrorKind::MissingField, self.pos.clone(), self.field)
    }

    /// Consume the next field and return where it starts along with its
    /// scan, or `None` if the row has no more fields.
    fn next_field(&mut self) -> Option<(usize, Scan)> {
        if !self.has_field() {
            return None;
        }
        let start = self.pos.byte as usize;
        let scan = self.scanner.scan_field(&self.buf[start..]);
        self.bump(scan.consumed);
        self.field += 1;
        if scan.end != FieldEnd::Delimiter {
            self.state = RowState::InRow { exhausted: true };
        }
        Some((start, scan))
    }

    fn field_bytes(&self, start: usize, scan: &Scan) -> Cow<[u8]> {
        let raw = &self.buf[start..start + scan.len];
        let bytes = if scan.quoted {
            Cow::Owned(field::unescape(raw, self.quote))
        } else {
            Cow::Borrowed(raw)
        };
        if self.trim {
            field::trim(bytes)
        } else {
            bytes
        }
    }

    fn coerced(&self, ty: &str, kind: &ErrorKind) {
        match *kind {
            ErrorKind::MissingField | ErrorKind::EmptyField => {}
            _ => debug!(
                row = self.pos.row,
                field = self.field.saturating_sub(1),
                "coercing {} field to default: {}",
                ty,
                kind
            ),
        }
    }

    fn remaining(&self) -> &[u8] {
        &self.buf[self.pos.byte as usize..]
    }

    fn at_eof(&self) -> bool {
        self.pos.byte as usize >= self.buf.len()
    }

    fn bump(&mut self, n: usize) {
        let start = self.pos.byte as usize;
        let end = start + n;
        debug_assert!(end <= self.buf.len());
        let lines = self.buf[start..end].iter().filter(|&&b| b == b'\n').count();
        self.pos.line += lines as u64;
        self.pos.byte = end as u64;
    }
}

#[cfg(test)]
mod tests {
    use eatwatch_csv_core::Terminator;

    use crate::error::ErrorKind;

    use super::{Reader, ReaderBuilder};

    macro_rules! reads_to {
        ($name:ident, $data:expr, $expected:expr) => {
            reads_to!($name, $data, $expected, |builder| builder);
        };
        ($name:ident, $data:expr, $expected:expr, $config:expr) => {
            #[test]
            fn $name() {
                let mut builder = ReaderBuilder::new();
                $config(&mut builder);
                let mut rdr = builder.from_bytes($data);
                let got = read_all(&mut rdr);
                let expected: Vec<Vec<&str>> = $expected;
                assert_eq!(expected, got);
            }
        };
    }

    fn read_all(rdr: &mut Reader) -> Vec<Vec<String>> {
        let mut rows = vec![];
        while rdr.next_row() {
            let mut row = vec![];
            while rdr.has_field() {
                row.push(rdr.read_string());
            }
            rows.push(row);
        }
        rows
    }

    reads_to!(empty, "", vec![]);
    reads_to!(only_terminators, "\n\r\n\r", vec![]);
    reads_to!(one_row, "a,b,c\n", vec![vec!["a", "b", "c"]]);
    reads_to!(no_trailing_terminator, "a,b", vec![vec!["a", "b"]]);
    reads_to!(trailing_comma, "a,b,\n", vec![vec!["a", "b", ""]]);
    reads_to!(
        crlf_stripped,
        "a,b\r\nc,d\r\n",
        vec![vec!["a", "b"], vec!["c", "d"]]
    );
    reads_to!(lone_cr, "a\rb\r", vec![vec!["a"], vec!["b"]]);
    reads_to!(
        blank_lines_skipped,
        "\na\n\n\nb\n\n",
        vec![vec!["a"], vec!["b"]]
    );
    reads_to!(
        blank_lines_kept,
        "a\n\nb\n",
        vec![vec!["a"], vec![""], vec!["b"]],
        |b: &mut ReaderBuilder| {
            b.skip_blank_lines(false);
        }
    );
    reads_to!(
        custom_terminator,
        "a,b;c;",
        vec![vec!["a", "b"], vec!["c"]],
        |b: &mut ReaderBuilder| {
            b.terminator(Terminator::Any(b';'));
        }
    );
    reads_to!(
        lf_terminator_keeps_cr,
        "a\r\nb\n",
        vec![vec!["a\r"], vec!["b"]],
        |b: &mut ReaderBuilder| {
            b.terminator(Terminator::Any(b'\n'));
        }
    );
    reads_to!(
        quotes_are_data_by_default,
        "\"a,b\"\n",
        vec![vec!["\"a", "b\""]]
    );
    reads_to!(
        quoted_fields,
        "\"a,b\",\"say \"\"hi\"\"\",\"x\ny\"\nz\n",
        vec![vec!["a,b", "say \"hi\"", "x\ny"], vec!["z"]],
        |b: &mut ReaderBuilder| {
            b.quoting(true);
        }
    );
    reads_to!(
        trimmed,
        " a ,\tb\n",
        vec![vec!["a", "b"]],
        |b: &mut ReaderBuilder| {
            b.trim(true);
        }
    );
    reads_to!(untrimmed, " a ,b\n", vec![vec![" a ", "b"]]);

    #[test]
    fn reads_before_first_row_are_defaults() {
        let mut rdr = Reader::from_string("1,yes\n");
        assert!(!rdr.has_field());
        assert_eq!("", rdr.read_string());
        assert_eq!(0.0, rdr.read_float());
        assert!(!rdr.read_bool());
        assert_eq!(0, rdr.position().byte());

        assert!(rdr.next_row());
        assert_eq!(1.0, rdr.read_float());
        assert!(rdr.read_bool());
    }

    #[test]
    fn done_is_sticky() {
        let mut rdr = Reader::from_string("a\n");
        assert!(rdr.next_row());
        assert!(!rdr.next_row());
        assert!(rdr.is_done());
        assert!(!rdr.next_row());
        assert_eq!("", rdr.read_string());
        assert_eq!(2, rdr.position().byte());
    }

    #[test]
    fn next_row_skips_unread_fields() {
        let mut rdr = Reader::from_string("a,b,c\nd,e\n");
        assert!(rdr.next_row());
        assert_eq!("a", rdr.read_string());
        assert!(rdr.next_row());
        assert_eq!("d", rdr.read_string());
        assert_eq!("e", rdr.read_string());
        assert!(!rdr.next_row());
    }

    #[test]
    fn next_row_skips_quoted_terminators() {
        let mut rdr = ReaderBuilder::new()
            .quoting(true)
            .from_string("a,\"b\nc\"\nd\n");
        assert!(rdr.next_row());
        assert_eq!("a", rdr.read_string());
        assert!(rdr.next_row());
        assert_eq!("d", rdr.read_string());
    }

    #[test]
    fn positions() {
        let mut rdr = Reader::from_string("a,b\r\nc\n\nd");
        assert_eq!((0, 1, 0), at(&rdr));

        assert!(rdr.next_row());
        assert_eq!((0, 1, 1), at(&rdr));
        rdr.skip_field();
        assert_eq!((2, 1, 1), at(&rdr));
        rdr.skip_field();
        assert_eq!((3, 1, 1), at(&rdr));

        assert!(rdr.next_row());
        assert_eq!((5, 2, 2), at(&rdr));

        assert!(rdr.next_row());
        assert_eq!((8, 4, 3), at(&rdr));
        assert_eq!("d", rdr.read_string());
        assert_eq!((9, 4, 3), at(&rdr));
    }

    fn at(rdr: &Reader) -> (u64, u64, u64) {
        let pos = rdr.position();
        (pos.byte(), pos.line(), pos.row())
    }

    #[test]
    fn skip_field_reports_presence() {
        let mut rdr = Reader::from_string("a\n");
        assert!(rdr.next_row());
        assert!(rdr.skip_field());
        assert!(!rdr.skip_field());
    }

    #[test]
    fn read_bytes_borrows_unquoted_fields() {
        use std::borrow::Cow;

        let mut rdr = Reader::from_bytes(&b"ab,\xFF\n"[..]);
        assert!(rdr.next_row());
        match rdr.read_bytes() {
            Some(Cow::Borrowed(b)) => assert_eq!(b"ab", b),
            got => panic!("expected borrowed field, got {:?}", got),
        }
        assert_eq!(Some(&b"\xFF"[..]), rdr.read_bytes().as_deref());
        assert_eq!(None, rdr.read_bytes());
    }

    #[test]
    fn lenient_string_replaces_invalid_utf8() {
        let mut rdr = Reader::from_bytes(&b"caf\xE9,ok\n"[..]);
        assert!(rdr.next_row());
        assert_eq!("caf\u{FFFD}", rdr.read_string());
        assert_eq!("ok", rdr.read_string());
    }

    #[test]
    fn strict_string_rejects_invalid_utf8() {
        let mut rdr = Reader::from_bytes(&b"ok,caf\xE9\n"[..]);
        assert!(rdr.next_row());
        assert_eq!("ok", rdr.try_read_string().unwrap());
        let err = rdr.try_read_string().unwrap_err();
        assert_eq!(&ErrorKind::Utf8 { valid_up_to: 3 }, err.kind());
        assert_eq!(Some(1), err.field());
        assert_eq!(1, err.position().unwrap().row());
    }

    #[test]
    fn strict_reads_report_missing_fields() {
        let mut rdr = Reader::from_string("1\n");
        let err = rdr.try_read_float().unwrap_err();
        assert_eq!(&ErrorKind::MissingField, err.kind());

        assert!(rdr.next_row());
        assert_eq!(1.0, rdr.try_read_float().unwrap());
        let err = rdr.try_read_bool().unwrap_err();
        assert_eq!(&ErrorKind::MissingField, err.kind());
        assert_eq!(Some(1), err.field());
    }

    #[test]
    fn strict_reads_report_bad_values() {
        let mut rdr = Reader::from_string("abc,,maybe,no\n");
        assert!(rdr.next_row());
        match rdr.try_read_float().unwrap_err().into_kind() {
            ErrorKind::ParseFloat(_) => {}
            kind => panic!("expected float error, got {:?}", kind),
        }
        assert_eq!(
            &ErrorKind::EmptyField,
            rdr.try_read_bool().unwrap_err().kind()
        );
        assert_eq!(
            &ErrorKind::ParseBool { token: "maybe".to_string() },
            rdr.try_read_bool().unwrap_err().kind()
        );
        assert!(!rdr.try_read_bool().unwrap());
    }

    #[test]
    fn error_display_includes_position() {
        let mut rdr = Reader::from_string("a\nb,x\n");
        assert!(rdr.next_row());
        assert!(rdr.next_row());
        rdr.skip_field();
        let err = rdr.try_read_float().unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("CSV error: row 2 (byte 5, line 2, field 1)"));
        assert!(msg.contains("invalid float"));
    }
}
