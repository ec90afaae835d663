use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use crate::error::Error;
use crate::tag::Tag;
use crate::varint::{append_var, parse_var};

/// Appends a single group/field element, optionally preceded by its tag
/// byte. `with_type` mirrors the original encoder's `withType` flag: message
/// bodies that are homogeneous (e.g. a list of `G1` elements) omit the tag
/// on every element and only record it once for the whole list.
pub fn append_element<T: CanonicalSerialize>(
    buf: &mut Vec<u8>,
    tag: Tag,
    with_type: bool,
    value: &T,
) -> Result<(), Error> {
    if with_type {
        buf.push(tag as u8);
    }
    let mut scratch = Vec::with_capacity(value.serialized_size());
    value.serialize(&mut scratch)?;
    append_var(buf, scratch.len())?;
    buf.extend_from_slice(&scratch);
    Ok(())
}

/// Parses a single element starting at `offset`, returning `(value,
/// bytes_consumed)`. When `with_type` is set, the tag byte is checked
/// against `expected` and a mismatch is reported rather than silently
/// accepted.
pub fn parse_element<T: CanonicalDeserialize>(
    buf: &[u8],
    offset: usize,
    expected: Tag,
    with_type: bool,
) -> Result<(T, usize), Error> {
    let mut pos = offset;
    if with_type {
        let found = *buf.get(pos).ok_or(Error::Truncated)?;
        let tag = Tag::try_from(found)?;
        if tag != expected {
            return Err(Error::UnexpectedTag {
                expected,
                found,
            });
        }
        pos += 1;
    }
    let (len, consumed) = parse_var(buf, pos)?;
    pos += consumed;
    let bytes = buf.get(pos..pos + len).ok_or(Error::Truncated)?;
    let value = T::deserialize(bytes)?;
    pos += len;
    Ok((value, pos - offset))
}

/// Appends a homogeneous list: one tag byte (if `with_type`), a count
/// varint, then each element's length-prefixed body with no per-element
/// tag.
pub fn append_list<T: CanonicalSerialize>(
    buf: &mut Vec<u8>,
    tag: Tag,
    with_type: bool,
    values: &[T],
) -> Result<(), Error> {
    if with_type {
        buf.push(tag as u8);
    }
    append_var(buf, values.len())?;
    for value in values {
        let mut scratch = Vec::with_capacity(value.serialized_size());
        value.serialize(&mut scratch)?;
        append_var(buf, scratch.len())?;
        buf.extend_from_slice(&scratch);
    }
    Ok(())
}

pub fn parse_list<T: CanonicalDeserialize>(
    buf: &[u8],
    offset: usize,
    expected: Tag,
    with_type: bool,
) -> Result<(Vec<T>, usize), Error> {
    let mut pos = offset;
    if with_type {
        let found = *buf.get(pos).ok_or(Error::Truncated)?;
        let tag = Tag::try_from(found)?;
        if tag != expected {
            return Err(Error::UnexpectedTag {
                expected,
                found,
            });
        }
        pos += 1;
    }
    let (count, consumed) = parse_var(buf, pos)?;
    pos += consumed;
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        let (len, consumed) = parse_var(buf, pos)?;
        pos += consumed;
        let bytes = buf.get(pos..pos + len).ok_or(Error::Truncated)?;
        values.push(T::deserialize(bytes)?);
        pos += len;
    }
    Ok((values, pos - offset))
}

/// Appends a list of UTF-8 strings (attribute names / associated data
/// fields): tag byte, count, then each string length-prefixed in bytes.
pub fn append_str_list(buf: &mut Vec<u8>, with_type: bool, values: &[String]) -> Result<(), Error> {
    if with_type {
        buf.push(Tag::StrList as u8);
    }
    append_var(buf, values.len())?;
    for value in values {
        let bytes = value.as_bytes();
        append_var(buf, bytes.len())?;
        buf.extend_from_slice(bytes);
    }
    Ok(())
}

pub fn parse_str_list(buf: &[u8], offset: usize, with_type: bool) -> Result<(Vec<String>, usize), Error> {
    let mut pos = offset;
    if with_type {
        let found = *buf.get(pos).ok_or(Error::Truncated)?;
        let tag = Tag::try_from(found)?;
        if tag != Tag::StrList {
            return Err(Error::UnexpectedTag {
                expected: Tag::StrList,
                found,
            });
        }
        pos += 1;
    }
    let (count, consumed) = parse_var(buf, pos)?;
    pos += consumed;
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        let (len, consumed) = parse_var(buf, pos)?;
        pos += consumed;
        let bytes = buf.get(pos..pos + len).ok_or(Error::Truncated)?;
        values.push(core::str::from_utf8(bytes)?.to_owned());
        pos += len;
    }
    Ok((values, pos - offset))
}
