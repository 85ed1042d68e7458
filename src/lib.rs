/*!
A forward only reader for delimited text held entirely in memory.

A [`Reader`] walks a buffer one row at a time. Within a row, fields are
pulled off in order with typed reads: [`Reader::read_string`],
[`Reader::read_float`] and [`Reader::read_bool`]. These never fail. A
missing or malformed field reads as an empty string, `0.0` or `false`.
When a caller needs to tell a bad value from a real one, the
`try_read_*` methods return a [`Result`] instead.

```
use eatwatch_csv::Reader;

let mut rdr = Reader::from_string("2008-05-17,172.5,1\n2008-05-18,,no\n");

assert!(rdr.next_row());
assert_eq!(rdr.read_string(), "2008-05-17");
assert_eq!(rdr.read_float(), 172.5);
assert!(rdr.read_bool());

assert!(rdr.next_row());
assert_eq!(rdr.read_string(), "2008-05-18");
assert_eq!(rdr.read_float(), 0.0);
assert!(!rdr.read_bool());

assert!(!rdr.next_row());
```

With the `serde` feature (on by default), the rest of a row can be
deserialized by position with [`Reader::deserialize`].
*/

#![deny(missing_docs)]

pub use eatwatch_csv_core::Terminator;

pub use crate::error::{Error, ErrorKind, Result};
pub use crate::field::{FALSY, TRUTHY};
pub use crate::reader::{Position, Reader, ReaderBuilder};

#[cfg(feature = "serde")]
mod deserializer;
mod error;
mod field;
mod reader;
