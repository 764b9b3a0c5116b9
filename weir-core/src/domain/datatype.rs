//! Primitive datatype catalog
//!
//! The static list of primitive datatypes the editor offers when a user
//! defines an event property or a value restriction.

use serde::{Deserialize, Serialize};

/// Mode a property form is operating in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatatypeMode {
    /// Defining a plain event property
    Property,

    /// Defining a value restriction; additionally offers the generic
    /// Number type
    Restriction,
}

/// A primitive datatype offered for selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimitiveDatatype {
    /// Display name shown in the form
    pub title: String,

    /// Short description of the value space
    pub description: String,

    /// Type URI identifying the datatype
    pub id: String,
}

impl PrimitiveDatatype {
    fn new(title: &str, description: &str, id: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            id: id.to_string(),
        }
    }
}

/// The primitive datatypes available in the given mode.
///
/// The list and its order are fixed per mode; restriction mode appends the
/// generic Number type after the six base types.
pub fn primitive_datatypes(mode: DatatypeMode) -> Vec<PrimitiveDatatype> {
    let mut datatypes = vec![
        PrimitiveDatatype::new(
            "String",
            "A textual datatype, e.g., 'machine1'",
            "http://www.w3.org/2001/XMLSchema#string",
        ),
        PrimitiveDatatype::new(
            "Boolean",
            "A true/false value",
            "http://www.w3.org/2001/XMLSchema#boolean",
        ),
        PrimitiveDatatype::new(
            "Integer",
            "A whole-numerical datatype, e.g., '1'",
            "http://www.w3.org/2001/XMLSchema#integer",
        ),
        PrimitiveDatatype::new(
            "Long",
            "A whole numerical datatype, e.g., '2332313993'",
            "http://www.w3.org/2001/XMLSchema#long",
        ),
        PrimitiveDatatype::new(
            "Double",
            "A floating-point number, e.g., '1.25'",
            "http://www.w3.org/2001/XMLSchema#double",
        ),
        PrimitiveDatatype::new(
            "Float",
            "A floating-point number, e.g., '1.25'",
            "http://www.w3.org/2001/XMLSchema#float",
        ),
    ];

    if mode == DatatypeMode::Restriction {
        datatypes.push(PrimitiveDatatype::new(
            "Number",
            "Any numerical value",
            "http://schema.org/Number",
        ));
    }

    datatypes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_mode_catalog() {
        let datatypes = primitive_datatypes(DatatypeMode::Property);

        assert_eq!(datatypes.len(), 6);
        assert_eq!(datatypes[0].title, "String");
        assert_eq!(datatypes[5].title, "Float");
        assert!(
            datatypes
                .iter()
                .all(|datatype| datatype.id.starts_with("http://www.w3.org/2001/XMLSchema#"))
        );
    }

    #[test]
    fn test_restriction_mode_appends_number() {
        let datatypes = primitive_datatypes(DatatypeMode::Restriction);

        assert_eq!(datatypes.len(), 7);
        let number = datatypes.last().unwrap();
        assert_eq!(number.title, "Number");
        assert_eq!(number.description, "Any numerical value");
        assert_eq!(number.id, "http://schema.org/Number");
    }

    #[test]
    fn test_base_types_identical_across_modes() {
        let property = primitive_datatypes(DatatypeMode::Property);
        let restriction = primitive_datatypes(DatatypeMode::Restriction);

        assert_eq!(property[..], restriction[..6]);
    }
}
