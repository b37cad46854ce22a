//! Font level metadata: the XLFD name fields and BDF properties

use std::fmt::{self, Display};

/// The names of the fields of an [XLFD] font name, in the order they appear.
///
/// Each of these is also emitted as a BDF property.
///
/// [XLFD]: https://www.x.org/releases/X11R7.6/doc/xorg-docs/specs/XLFD/xlfd.html
pub const XLFD_FIELDS: [&str; 14] = [
    "FOUNDRY",
    "FAMILY_NAME",
    "WEIGHT_NAME",
    "SLANT",
    "SETWIDTH_NAME",
    "ADD_STYLE_NAME",
    "PIXEL_SIZE",
    "POINT_SIZE",
    "RESOLUTION_X",
    "RESOLUTION_Y",
    "SPACING",
    "AVERAGE_WIDTH",
    "CHARSET_REGISTRY",
    "CHARSET_ENCODING",
];

/// The family name used when none is provided.
pub const DEFAULT_FAMILY: &str = "Robotron1715";

/// The value of a single property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Str(String),
    Int(i32),
}

/// A named property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: &'static str,
    pub value: PropertyValue,
}

/// The ordered set of properties describing a font.
///
/// Properties are kept in insertion order, which is also the order in which
/// they are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontMetadata {
    properties: Vec<Property>,
}

impl PropertyValue {
    /// The value as it appears in a BDF property line.
    ///
    /// Strings are double quoted, integers are bare.
    pub fn bdf_repr(&self) -> BdfValue<'_> {
        BdfValue(self)
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            PropertyValue::Int(val) => Some(*val),
            PropertyValue::Str(_) => None,
        }
    }
}

/// Formats a [`PropertyValue`] for a `NAME value` property line.
pub struct BdfValue<'a>(&'a PropertyValue);

impl Display for BdfValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            PropertyValue::Str(s) => write!(f, "\"{s}\""),
            PropertyValue::Int(val) => write!(f, "{val}"),
        }
    }
}

/// Unquoted, as used in the XLFD name.
impl Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Str(s) => f.write_str(s),
            PropertyValue::Int(val) => write!(f, "{val}"),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(src: &str) -> Self {
        PropertyValue::Str(src.to_owned())
    }
}

impl From<i32> for PropertyValue {
    fn from(src: i32) -> Self {
        PropertyValue::Int(src)
    }
}

impl FontMetadata {
    /// The metadata of a medium, upright, character cell font with 16 pixel
    /// glyphs at 72 dpi, in the given family.
    pub fn new(family: &str) -> Self {
        let mut this = FontMetadata {
            properties: Vec::with_capacity(XLFD_FIELDS.len() + 4),
        };
        this.push("FOUNDRY", "")
            .push("FAMILY_NAME", family)
            .push("WEIGHT_NAME", "Medium")
            .push("SLANT", "R")
            .push("SETWIDTH_NAME", "Normal")
            .push("ADD_STYLE_NAME", "")
            .push("PIXEL_SIZE", 16)
            .push("POINT_SIZE", 160)
            .push("RESOLUTION_X", 72)
            .push("RESOLUTION_Y", 72)
            .push("SPACING", "C")
            .push("AVERAGE_WIDTH", 80)
            .push("CHARSET_REGISTRY", "ISO10646")
            .push("CHARSET_ENCODING", "1")
            .push("MIN_SPACE", 8)
            .push("FONT_ASCENT", 12)
            .push("FONT_DESCENT", 4)
            .push("DEFAULT_CHAR", 0);
        this
    }

    fn push(&mut self, name: &'static str, value: impl Into<PropertyValue>) -> &mut Self {
        debug_assert!(self.get(name).is_none(), "duplicate property {name}");
        self.properties.push(Property {
            name,
            value: value.into(),
        });
        self
    }

    /// The value of the property with this name, if it exists.
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.properties
            .iter()
            .find(|prop| prop.name == name)
            .map(|prop| &prop.value)
    }

    /// The integer value of the property with this name.
    ///
    /// Returns `None` if the property is missing or is a string.
    pub fn get_int(&self, name: &str) -> Option<i32> {
        self.get(name).and_then(PropertyValue::as_int)
    }

    /// Iterate over all properties, in order.
    pub fn iter(&self) -> impl Iterator<Item = &Property> + '_ {
        self.properties.iter()
    }

    /// The number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// The X Logical Font Description name of the font.
    ///
    /// This is a leading `-` followed by the value of every field in
    /// [`XLFD_FIELDS`], joined with `-`. Missing fields are left empty.
    pub fn xlfd_name(&self) -> String {
        let mut name = String::new();
        for field in XLFD_FIELDS {
            name.push('-');
            if let Some(value) = self.get(field) {
                name.push_str(&value.to_string());
            }
        }
        name
    }
}

impl Default for FontMetadata {
    fn default() -> Self {
        FontMetadata::new(DEFAULT_FAMILY)
    }
}
