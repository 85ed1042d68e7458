/*!
`eatwatch-csv-core` provides the byte level scanning used by the
`eatwatch-csv` reader.

A [`Scanner`](struct.Scanner.html) never allocates and never copies field
data. Given a slice that starts at a field boundary, it reports how long the
field is, how many bytes to consume to get past it and what ended it. The
caller owns the buffer and the cursor.

# Example

```
use eatwatch_csv_core::{FieldEnd, Scanner};

let scanner = Scanner::new();
let input = b"61.4,1\r\n";

let scan = scanner.scan_field(input);
assert_eq!(&input[..scan.len], b"61.4");
assert_eq!(scan.end, FieldEnd::Delimiter);

let rest = &input[scan.consumed..];
let scan = scanner.scan_field(rest);
assert_eq!(&rest[..scan.len], b"1");
assert_eq!(scan.end, FieldEnd::Terminator);
assert_eq!(scanner.terminator_len(&rest[scan.consumed..]), 2);
```
*/

#![deny(missing_docs)]
#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub use crate::scanner::{FieldEnd, Scan, Scanner, ScannerBuilder, Terminator};

mod scanner;
