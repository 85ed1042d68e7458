use std::fmt;

use serde::de::{
    self, DeserializeOwned, DeserializeSeed, Deserializer, EnumAccess,
    SeqAccess, VariantAccess, Visitor,
};

use crate::error::{Error, ErrorKind, Result};
use crate::field;
use crate::reader::Reader;

/// Deserialize the remaining fields of the reader's current row.
pub fn deserialize_row<D: DeserializeOwned>(rdr: &mut Reader) -> Result<D> {
    let mut de = DeRow { rdr, peeked: None };
    D::deserialize(&mut de)
}

impl de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Error {
        Error::new(ErrorKind::Deserialize(msg.to_string()))
    }
}

struct DeRow<'r> {
    rdr: &'r mut Reader,
    /// A field that was read to decide between `None` and `Some` but has
    /// not been handed to a visitor yet.
    peeked: Option<Vec<u8>>,
}

impl<'r> DeRow<'r> {
    /// Extracts the next field from the underlying row.
    fn next_field(&mut self) -> Result<Vec<u8>> {
        if let Some(field) = self.peeked.take() {
            return Ok(field);
        }
        match self.rdr.read_bytes().map(|bytes| bytes.into_owned()) {
            Some(field) => Ok(field),
            None => Err(self.rdr.missing()),
        }
    }

    fn has_field(&self) -> bool {
        self.peeked.is_some() || self.rdr.has_field()
    }

    fn next_str(&mut self) -> Result<String> {
        let bytes = self.next_field()?;
        String::from_utf8(bytes).map_err(|err| {
            self.error(ErrorKind::Utf8 {
                valid_up_to: err.utf8_error().valid_up_to(),
            })
        })
    }

    /// Returns an error corresponding to the most recently extracted field.
    fn error(&self, kind: ErrorKind) -> Error {
        self.rdr.error(kind)
    }
}

macro_rules! deserialize_int {
    ($method:ident, $visit:ident) => {
        fn $method<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
            let s = self.next_str()?;
            let n = s
                .trim()
                .parse()
                .map_err(|err| self.error(ErrorKind::ParseInt(err)))?;
            visitor.$visit(n)
        }
    };
}

macro_rules! deserialize_float {
    ($method:ident, $visit:ident) => {
        fn $method<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
            let s = self.next_str()?;
            let s = s.trim();
            if s.is_empty() {
                return Err(self.error(ErrorKind::EmptyField));
            }
            let n = s
                .parse()
                .map_err(|err| self.error(ErrorKind::ParseFloat(err)))?;
            visitor.$visit(n)
        }
    };
}

impl<'a, 'de, 'r> Deserializer<'de> for &'a mut DeRow<'r> {
    type Error = Error;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        let x = self.next_str()?;
        if x == "true" {
            visitor.visit_bool(true)
        } else if x == "false" {
            visitor.visit_bool(false)
        } else if let Some(n) = try_positive_integer(&x) {
            visitor.visit_u64(n)
        } else if let Some(n) = try_negative_integer(&x) {
            visitor.visit_i64(n)
        } else if let Some(n) = try_float(&x) {
            visitor.visit_f64(n)
        } else {
            visitor.visit_string(x)
        }
    }

    fn deserialize_bool<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        let bytes = self.next_field()?;
        let yes = field::parse_bool(&bytes).map_err(|kind| self.error(kind))?;
        visitor.visit_bool(yes)
    }

    deserialize_int!(deserialize_u8, visit_u8);
    deserialize_int!(deserialize_u16, visit_u16);
    deserialize_int!(deserialize_u32, visit_u32);
    deserialize_int!(deserialize_u64, visit_u64);
    deserialize_int!(deserialize_i8, visit_i8);
    deserialize_int!(deserialize_i16, visit_i16);
    deserialize_int!(deserialize_i32, visit_i32);
    deserialize_int!(deserialize_i64, visit_i64);
    deserialize_float!(deserialize_f32, visit_f32);
    deserialize_float!(deserialize_f64, visit_f64);

    fn deserialize_char<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        let s = self.next_str()?;
        let mut it = s.chars();
        match (it.next(), it.next()) {
            (Some(c), None) => visitor.visit_char(c),
            _ => Err(self.error(ErrorKind::Deserialize(format!(
                "expected single character but got {} characters in '{}'",
                s.chars().count(),
                s
            )))),
        }
    }

    fn deserialize_str<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_string(self.next_str()?)
    }

    fn deserialize_string<V: Visitor<'de>>(
        self,
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_string(self.next_str()?)
    }

    fn deserialize_bytes<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_byte_buf(self.next_field()?)
    }

    fn deserialize_byte_buf<V: Visitor<'de>>(
        self,
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_byte_buf(self.next_field()?)
    }

    fn deserialize_option<V: Visitor<'de>>(
        self,
        visitor: V,
    ) -> Result<V::Value> {
        if !self.has_field() {
            return visitor.visit_none();
        }
        let field = self.next_field()?;
        if bstr::ByteSlice::trim(&field[..]).is_empty() {
            visitor.visit_none()
        } else {
            self.peeked = Some(field);
            visitor.visit_some(self)
        }
    }

    fn deserialize_unit<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        self.next_field()?;
        visitor.visit_unit()
    }

    fn deserialize_unit_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value> {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_seq(Fields { de: self, remaining: None })
    }

    fn deserialize_tuple<V: Visitor<'de>>(
        self,
        len: usize,
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_seq(Fields { de: self, remaining: Some(len) })
    }

    fn deserialize_tuple_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        len: usize,
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_seq(Fields { de: self, remaining: Some(len) })
    }

    fn deserialize_map<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        Err(self.error(ErrorKind::Deserialize(
            "rows have no header, so they cannot be deserialized into a map"
                .to_string(),
        )))
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_seq(Fields { de: self, remaining: Some(fields.len()) })
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_enum(self)
    }

    fn deserialize_identifier<V: Visitor<'de>>(
        self,
        visitor: V,
    ) -> Result<V::Value> {
        self.deserialize_str(visitor)
    }

    fn deserialize_ignored_any<V: Visitor<'de>>(
        self,
        visitor: V,
    ) -> Result<V::Value> {
        self.next_field()?;
        visitor.visit_unit()
    }
}

/// Hands out the fields of a row as sequence elements.
///
/// A sequence with a known length (tuples, structs) always asks for every
/// element, so a short row yields `None` for optional fields and an error
/// for required ones. An open sequence stops at the end of the row.
struct Fields<'a, 'r> {
    de: &'a mut DeRow<'r>,
    remaining: Option<usize>,
}

impl<'a, 'de, 'r> SeqAccess<'de> for Fields<'a, 'r> {
    type Error = Error;

    fn next_element_seed<T: DeserializeSeed<'de>>(
        &mut self,
        seed: T,
    ) -> Result<Option<T::Value>> {
        match self.remaining {
            Some(0) => return Ok(None),
            Some(ref mut n) => *n -= 1,
            None if !self.de.has_field() => return Ok(None),
            None => {}
        }
        seed.deserialize(&mut *self.de).map(Some)
    }

    fn size_hint(&self) -> Option<usize> {
        self.remaining
    }
}

impl<'a, 'de, 'r> EnumAccess<'de> for &'a mut DeRow<'r> {
    type Error = Error;
    type Variant = Self;

    fn variant_seed<V: DeserializeSeed<'de>>(
        self,
        seed: V,
    ) -> Result<(V::Value, Self)> {
        let variant = seed.deserialize(&mut *self)?;
        Ok((variant, self))
    }
}

impl<'a, 'de, 'r> VariantAccess<'de> for &'a mut DeRow<'r> {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        Ok(())
    }

    fn newtype_variant_seed<T: DeserializeSeed<'de>>(
        self,
        seed: T,
    ) -> Result<T::Value> {
        seed.deserialize(self)
    }

    fn tuple_variant<V: Visitor<'de>>(
        self,
        len: usize,
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_seq(Fields { de: self, remaining: Some(len) })
    }

    fn struct_variant<V: Visitor<'de>>(
        self,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_seq(Fields { de: self, remaining: Some(fields.len()) })
    }
}

fn try_positive_integer(s: &str) -> Option<u64> {
    if !s.bytes().all(|b| b'0' <= b && b <= b'9') {
        return None;
    }
    s.parse().ok()
}

fn try_negative_integer(s: &str) -> Option<i64> {
    if !s.starts_with('-') || !s[1..].bytes().all(|b| b'0' <= b && b <= b'9') {
        return None;
    }
    s.parse().ok()
}

fn try_float(s: &str) -> Option<f64> {
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use crate::error::ErrorKind;
    use crate::reader::Reader;

    fn row(data: &str) -> Reader {
        let mut rdr = Reader::from_string(data);
        assert!(rdr.next_row());
        rdr
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Entry {
        day: String,
        weight: Option<f32>,
        flag: bool,
        note: Option<String>,
    }

    #[test]
    fn struct_by_position() {
        let got: Entry = row("2008-05-17,172.5,yes,ran 5k\n")
            .deserialize()
            .unwrap();
        assert_eq!(
            Entry {
                day: "2008-05-17".to_string(),
                weight: Some(172.5),
                flag: true,
                note: Some("ran 5k".to_string()),
            },
            got
        );
    }

    #[test]
    fn empty_and_missing_options() {
        let got: Entry = row("2008-05-18,,0\n").deserialize().unwrap();
        assert_eq!(
            Entry {
                day: "2008-05-18".to_string(),
                weight: None,
                flag: false,
                note: None,
            },
            got
        );
    }

    #[test]
    fn tuple_and_trailing_fields() {
        let mut rdr = row("42,true,z,z\n");
        let got: (i32, bool) = rdr.deserialize().unwrap();
        assert_eq!((42, true), got);
        assert_eq!("z", rdr.read_string());
    }

    #[test]
    fn vec_takes_rest_of_row() {
        let got: Vec<f64> = row("1,2.5,-3\n").deserialize().unwrap();
        assert_eq!(vec![1.0, 2.5, -3.0], got);
    }

    #[test]
    fn short_row_is_error() {
        let err = row("42\n").deserialize::<(i32, bool)>().unwrap_err();
        assert_eq!(&ErrorKind::MissingField, err.kind());
        assert_eq!(Some(1), err.field());
    }

    #[test]
    fn bad_bool_is_error() {
        let err = row("maybe\n").deserialize::<(bool,)>().unwrap_err();
        assert_eq!(
            &ErrorKind::ParseBool { token: "maybe".to_string() },
            err.kind()
        );
    }

    #[test]
    fn bad_int_is_error() {
        let err = row("4x\n").deserialize::<(u8,)>().unwrap_err();
        match *err.kind() {
            ErrorKind::ParseInt(_) => {}
            ref kind => panic!("expected int error, got {:?}", kind),
        }
        assert_eq!(Some(0), err.field());
    }

    #[derive(Debug, Deserialize, PartialEq)]
    enum Flag {
        Checked,
        Unchecked,
    }

    #[test]
    fn unit_enum_by_name() {
        let got: (Flag, Flag) = row("Checked,Unchecked\n").deserialize().unwrap();
        assert_eq!((Flag::Checked, Flag::Unchecked), got);
    }

    #[test]
    fn unknown_variant_is_error() {
        let err = row("Sideways\n").deserialize::<(Flag,)>().unwrap_err();
        match *err.kind() {
            ErrorKind::Deserialize(ref msg) => assert!(msg.contains("Sideways")),
            ref kind => panic!("expected deserialize error, got {:?}", kind),
        }
    }

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(untagged)]
    enum Value {
        Bool(bool),
        Int(u64),
        Float(f64),
        Text(String),
    }

    #[test]
    fn any_infers_types() {
        let got: Vec<Value> = row("true,7,1.5,abc\n").deserialize().unwrap();
        assert_eq!(
            vec![
                Value::Bool(true),
                Value::Int(7),
                Value::Float(1.5),
                Value::Text("abc".to_string()),
            ],
            got
        );
    }

    #[test]
    fn map_is_rejected() {
        use std::collections::HashMap;

        let err = row("a,b\n").deserialize::<HashMap<String, String>>();
        assert!(err.is_err());
    }
}
