use crate::error::Error;

/// Wire tag byte, spec §4.1/§6. Unknown tags are rejected, never silently
/// skipped.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum Tag {
    G1 = 0,
    G2 = 1,
    Fr = 2,
    G1List = 3,
    G2List = 4,
    FrList = 5,
    StrList = 6,
}

impl TryFrom<u8> for Tag {
    type Error = Error;

    fn try_from(byte: u8) -> Result<Self, Error> {
        match byte {
            0 => Ok(Tag::G1),
            1 => Ok(Tag::G2),
            2 => Ok(Tag::Fr),
            3 => Ok(Tag::G1List),
            4 => Ok(Tag::G2List),
            5 => Ok(Tag::FrList),
            6 => Ok(Tag::StrList),
            other => Err(Error::UnknownTag(other)),
        }
    }
}
