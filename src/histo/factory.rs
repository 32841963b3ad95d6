//! Reconstruction of concrete monitoring objects from wire type tags.
//!
//! The tag set is closed: four shape prefixes times five element widths.
//! Anything else is a fatal [`DecodeError::UnknownType`], and since object
//! boundaries cannot be recovered without knowing the structure behind the
//! tag, the whole package read aborts with it.

use crate::array::ElementType;
use crate::core::errors::DecodeError;
use crate::histo::{Graph1, Histo1, Histo2, MonObject, TimedGraph1};

/// Build an empty instance of the concrete variant named by `data_type`.
///
/// The instance carries no layout yet; the caller decodes the config record
/// into it, which establishes names, axes and buffer sizes.
pub fn create(data_type: &str) -> Result<MonObject, DecodeError> {
    let unknown = || DecodeError::UnknownType(data_type.to_owned());
    if data_type.len() != 3 || !data_type.is_ascii() {
        return Err(unknown());
    }
    let letter = data_type.chars().nth(2).ok_or_else(unknown)?;
    let element = ElementType::from_letter(letter).ok_or_else(unknown)?;
    match &data_type[..2] {
        "H1" => Ok(Histo1::new(element, "", "", 0, 0.0, 1.0).into()),
        "H2" => Ok(Histo2::new(element, "", "", 0, 0.0, 1.0, 0, 0.0, 1.0).into()),
        "g1" => Ok(Graph1::new(element, "", "", 0, 0.0, 1.0, 0.0, 1.0).into()),
        "TG" => Ok(TimedGraph1::new(element, "", "", 0, 0.0, 1.0).into()),
        _ => Err(unknown()),
    }
}
