use memchr::{memchr, memchr2, memchr3};

/// A record terminator.
///
/// Use this to specify the row terminator while scanning CSV. The default is
/// CRLF, which treats `\r`, `\n` or `\r\n` as a single row terminator.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Terminator {
    /// Scans `\r`, `\n` or `\r\n` as a single row terminator.
    CRLF,
    /// Scans the byte given as a row terminator.
    Any(u8),
}

impl Terminator {
    /// Returns true if this is the CRLF terminator.
    pub fn is_crlf(&self) -> bool {
        match *self {
            Terminator::CRLF => true,
            Terminator::Any(_) => false,
        }
    }
}

impl Default for Terminator {
    fn default() -> Terminator {
        Terminator::CRLF
    }
}

impl PartialEq<u8> for Terminator {
    #[inline]
    fn eq(&self, &other: &u8) -> bool {
        match *self {
            Terminator::CRLF => other == b'\r' || other == b'\n',
            Terminator::Any(b) => other == b,
        }
    }
}

/// What stopped a field scan.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldEnd {
    /// The field was followed by a delimiter. Another field follows in the
    /// same row, even if it is empty.
    Delimiter,
    /// The field was followed by a row terminator. The terminator itself is
    /// not consumed.
    Terminator,
    /// The input ran out.
    Eof,
}

/// The result of scanning a single field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Scan {
    /// The length of the raw field, including any quotes.
    pub len: usize,
    /// The number of bytes to advance past this field. This includes a
    /// trailing delimiter but never a row terminator.
    pub consumed: usize,
    /// What ended the field.
    pub end: FieldEnd,
    /// Whether the field started with a quote. Only possible when quoting
    /// is enabled.
    pub quoted: bool,
}

/// Builds a CSV scanner with various configuration knobs.
///
/// Once a `Scanner` is built, its configuration cannot be changed.
#[derive(Debug, Default)]
pub struct ScannerBuilder {
    scanner: Scanner,
}

impl ScannerBuilder {
    /// Create a new builder.
    pub fn new() -> ScannerBuilder {
        ScannerBuilder::default()
    }

    /// Build a scanner from this configuration.
    pub fn build(&self) -> Scanner {
        self.scanner.clone()
    }

    /// The field delimiter to use when scanning CSV.
    ///
    /// The default is `b','`.
    pub fn delimiter(&mut self, delimiter: u8) -> &mut ScannerBuilder {
        self.scanner.delimiter = delimiter;
        self
    }

    /// The row terminator to use when scanning CSV.
    ///
    /// The default is `Terminator::CRLF`.
    pub fn terminator(&mut self, term: Terminator) -> &mut ScannerBuilder {
        self.scanner.term = term;
        self
    }

    /// Enable or disable quoted fields.
    ///
    /// This is disabled by default, in which case the quote byte is plain
    /// field data. When enabled, a field that starts with the quote byte
    /// runs to the matching closing quote and may contain delimiters and
    /// terminators. A doubled quote inside a quoted field is an escaped
    /// quote.
    pub fn quoting(&mut self, yes: bool) -> &mut ScannerBuilder {
        self.scanner.quoting = yes;
        self
    }

    /// The quote byte to use when quoting is enabled.
    ///
    /// The default is `b'"'`.
    pub fn quote(&mut self, quote: u8) -> &mut ScannerBuilder {
        self.scanner.quote = quote;
        self
    }
}

/// A forward only CSV field scanner.
///
/// Every method takes a slice that begins where the caller's cursor is and
/// returns byte counts relative to that slice. The scanner keeps no state
/// between calls, so a single scanner can be shared freely.
///
/// Note that this scanner is somewhat encoding agnostic. The source data
/// needs to be at least ASCII compatible, since delimiters, terminators and
/// quotes are single bytes.
#[derive(Clone, Debug)]
pub struct Scanner {
    delimiter: u8,
    term: Terminator,
    quoting: bool,
    quote: u8,
}

impl Default for Scanner {
    fn default() -> Scanner {
        Scanner {
            delimiter: b',',
            term: Terminator::default(),
            quoting: false,
            quote: b'"',
        }
    }
}

impl Scanner {
    /// Create a new scanner with a default configuration.
    pub fn new() -> Scanner {
        ScannerBuilder::new().build()
    }

    /// The field delimiter.
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// The row terminator.
    pub fn terminator(&self) -> Terminator {
        self.term
    }

    /// The quote byte, if quoting is enabled.
    pub fn quote(&self) -> Option<u8> {
        if self.quoting {
            Some(self.quote)
        } else {
            None
        }
    }

    /// Returns true if `b` terminates a row.
    #[inline]
    pub fn is_terminator(&self, b: u8) -> bool {
        self.term == b
    }

    /// Scan a single field at the start of `input`.
    ///
    /// The scan stops at the first delimiter, row terminator or the end of
    /// `input`, whichever comes first. A delimiter is consumed, a terminator
    /// is not. Scanning an empty slice yields an empty field ended by
    /// `FieldEnd::Eof`.
    pub fn scan_field(&self, input: &[u8]) -> Scan {
        if self.quoting && input.first() == Some(&self.quote) {
            self.scan_quoted(input)
        } else {
            self.scan_unquoted(input)
        }
    }

    /// Returns the number of bytes before the next row terminator in
    /// `input`, or `input.len()` if there is none.
    ///
    /// When quoting is enabled, terminators inside quoted fields are
    /// skipped.
    pub fn skip_row(&self, input: &[u8]) -> usize {
        if !self.quoting {
            return self.find_terminator(input).unwrap_or(input.len());
        }
        let mut n = 0;
        loop {
            let scan = self.scan_field(&input[n..]);
            n += scan.consumed;
            if scan.end != FieldEnd::Delimiter {
                return n;
            }
        }
    }

    /// Returns the length of the row terminator at the start of `input`.
    ///
    /// This is `0` if `input` does not start with a terminator. With
    /// `Terminator::CRLF`, a `\r\n` pair is a single terminator of length
    /// `2`.
    pub fn terminator_len(&self, input: &[u8]) -> usize {
        match self.term {
            Terminator::CRLF => match input {
                [b'\r', b'\n', ..] => 2,
                [b'\r', ..] | [b'\n', ..] => 1,
                _ => 0,
            },
            Terminator::Any(b) => match input.first() {
                Some(&c) if c == b => 1,
                _ => 0,
            },
        }
    }

    fn scan_unquoted(&self, input: &[u8]) -> Scan {
        let i = match self.find_boundary(input) {
            None => {
                return Scan {
                    len: input.len(),
                    consumed: input.len(),
                    end: FieldEnd::Eof,
                    quoted: false,
                };
            }
            Some(i) => i,
        };
        if input[i] == self.delimiter {
            Scan { len: i, consumed: i + 1, end: FieldEnd::Delimiter, quoted: false }
        } else {
            Scan { len: i, consumed: i, end: FieldEnd::Terminator, quoted: false }
        }
    }

    fn scan_quoted(&self, input: &[u8]) -> Scan {
        // Skip the opening quote.
        let mut i = 1;
        loop {
            let q = match memchr(self.quote, &input[i..]) {
                // An unclosed quote swallows the rest of the input.
                None => {
                    return Scan {
                        len: input.len(),
                        consumed: input.len(),
                        end: FieldEnd::Eof,
                        quoted: true,
                    };
                }
                Some(j) => i + j,
            };
            if input.get(q + 1) == Some(&self.quote) {
                i = q + 2;
                continue;
            }
            // Anything between the closing quote and the next boundary is
            // kept as field data.
            let rest = q + 1;
            let tail = self.scan_unquoted(&input[rest..]);
            return Scan {
                len: rest + tail.len,
                consumed: rest + tail.consumed,
                end: tail.end,
                quoted: true,
            };
        }
    }

    #[inline]
    fn find_boundary(&self, input: &[u8]) -> Option<usize> {
        match self.term {
            Terminator::CRLF => memchr3(self.delimiter, b'\r', b'\n', input),
            Terminator::Any(b) => memchr2(self.delimiter, b, input),
        }
    }

    #[inline]
    fn find_terminator(&self, input: &[u8]) -> Option<usize> {
        match self.term {
            Terminator::CRLF => memchr2(b'\r', b'\n', input),
            Terminator::Any(b) => memchr(b, input),
        }
    }
}
