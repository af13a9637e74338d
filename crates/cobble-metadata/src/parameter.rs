//! Parameter metadata
//!
//! Describes one formal input slot of an instruction: its type tag,
//! display text, optionality, and whether it is user-facing or supplied
//! only by generated code. Parameters serialize losslessly into a
//! [`cobble_serialization::Element`] so tooling can cache and reload
//! instruction definitions.

use std::fmt;

use cobble_serialization::Element;

/// Semantic type tag of an instruction parameter.
///
/// The tags are a closed contract shared with the editor UI and the code
/// generator; extension-defined tags flow through the [`Custom`] escape
/// case. [`from_tag`]/[`tag`] round-trip every tag, including unknown
/// ones.
///
/// [`Custom`]: ParameterType::Custom
/// [`from_tag`]: ParameterType::from_tag
/// [`tag`]: ParameterType::tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParameterType {
    /// Reference to a single picked object
    Object,
    /// Reference to an already-picked object instance
    ObjectPtr,
    /// Reference to a list of picked objects
    ObjectList,
    /// Reference to a list of objects, without narrowing the picking
    ObjectListWithoutPicking,
    /// Reference to a behavior attached to an object
    Behavior,
    /// A plain number
    Number,
    /// A string
    String,
    /// A numeric formula, edited with the expression editor
    Expression,
    /// An assignment operator (`=`, `+`, `-`, ...)
    Operator,
    /// A comparison operator (`=`, `<`, `>`, ...)
    RelationalOperator,
    /// Extension-defined tag, carried verbatim
    Custom(String),
}

impl ParameterType {
    /// Build a type from its tag string. Unknown tags become [`ParameterType::Custom`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "object" => ParameterType::Object,
            "objectPtr" => ParameterType::ObjectPtr,
            "objectList" => ParameterType::ObjectList,
            "objectListWithoutPicking" => ParameterType::ObjectListWithoutPicking,
            "behavior" => ParameterType::Behavior,
            "number" => ParameterType::Number,
            "string" => ParameterType::String,
            "expression" => ParameterType::Expression,
            "operator" => ParameterType::Operator,
            "relationalOperator" => ParameterType::RelationalOperator,
            other => ParameterType::Custom(other.to_string()),
        }
    }

    /// The tag string of this type, the exact inverse of [`ParameterType::from_tag`]
    pub fn tag(&self) -> &str {
        match self {
            ParameterType::Object => "object",
            ParameterType::ObjectPtr => "objectPtr",
            ParameterType::ObjectList => "objectList",
            ParameterType::ObjectListWithoutPicking => "objectListWithoutPicking",
            ParameterType::Behavior => "behavior",
            ParameterType::Number => "number",
            ParameterType::String => "string",
            ParameterType::Expression => "expression",
            ParameterType::Operator => "operator",
            ParameterType::RelationalOperator => "relationalOperator",
            ParameterType::Custom(tag) => tag,
        }
    }

    /// Whether this tag is an object reference
    pub fn is_object(&self) -> bool {
        matches!(
            self,
            ParameterType::Object
                | ParameterType::ObjectPtr
                | ParameterType::ObjectList
                | ParameterType::ObjectListWithoutPicking
        )
    }

    /// Whether this tag is a behavior reference
    pub fn is_behavior(&self) -> bool {
        matches!(self, ParameterType::Behavior)
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl From<&str> for ParameterType {
    fn from(tag: &str) -> Self {
        ParameterType::from_tag(tag)
    }
}

/// Metadata for one formal parameter of an instruction
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterMetadata {
    /// Semantic type tag
    pub ty: ParameterType,
    /// For object/behavior parameters, the (namespace-qualified) type
    /// constraint; for other parameters, a free-form hint
    pub supplementary_information: String,
    /// Whether the parameter may be omitted at call sites
    pub optional: bool,
    /// Short display text shown next to the parameter editor
    pub description: String,
    /// Longer display text shown as contextual help
    pub long_description: String,
    /// Whether the parameter is supplied only by generated code, never
    /// entered in the UI
    pub code_only: bool,
    /// String-encoded default value
    pub default_value: String,
    /// Optional stable identifier
    pub name: String,
}

impl ParameterMetadata {
    /// Create a user-facing parameter. `code_only` is always `false`.
    pub fn new(ty: impl Into<ParameterType>, description: &str, optional: bool) -> Self {
        Self {
            ty: ty.into(),
            supplementary_information: String::new(),
            optional,
            description: description.to_string(),
            long_description: String::new(),
            code_only: false,
            default_value: String::new(),
            name: String::new(),
        }
    }

    /// Create a parameter supplied only by generated code. `code_only` is
    /// always `true` and there is no UI description.
    pub fn code_only(ty: impl Into<ParameterType>, supplementary_information: &str) -> Self {
        Self {
            ty: ty.into(),
            supplementary_information: supplementary_information.to_string(),
            optional: false,
            description: String::new(),
            long_description: String::new(),
            code_only: true,
            default_value: String::new(),
            name: String::new(),
        }
    }

    /// Set the contextual help text
    pub fn set_long_description(mut self, long_description: &str) -> Self {
        self.long_description = long_description.to_string();
        self
    }

    /// Set the string-encoded default value
    pub fn set_default_value(mut self, default_value: &str) -> Self {
        self.default_value = default_value.to_string();
        self
    }

    /// Set the stable identifier
    pub fn set_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Write every field as a named attribute. Empty and false values are
    /// written too: the representation is total, not diff-based.
    pub fn serialize_to(&self, element: &mut Element) {
        element.set_attribute("type", self.ty.tag());
        element.set_attribute(
            "supplementaryInformation",
            self.supplementary_information.as_str(),
        );
        element.set_attribute("optional", self.optional);
        element.set_attribute("description", self.description.as_str());
        element.set_attribute("longDescription", self.long_description.as_str());
        element.set_attribute("codeOnly", self.code_only);
        element.set_attribute("defaultValue", self.default_value.as_str());
        element.set_attribute("name", self.name.as_str());
    }

    /// Exact inverse of [`ParameterMetadata::serialize_to`]. Missing
    /// attributes degrade to empty strings and `false`.
    pub fn unserialize_from(element: &Element) -> Self {
        Self {
            ty: ParameterType::from_tag(&element.get_string_attribute("type")),
            supplementary_information: element.get_string_attribute("supplementaryInformation"),
            optional: element.get_bool_attribute("optional"),
            description: element.get_string_attribute("description"),
            long_description: element.get_string_attribute("longDescription"),
            code_only: element.get_bool_attribute("codeOnly"),
            default_value: element.get_string_attribute("defaultValue"),
            name: element.get_string_attribute("name"),
        }
    }
}
