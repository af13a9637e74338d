//! Instruction metadata
//!
//! An [`InstructionMetadata`] describes one action or condition of the
//! block editor: display strings, an ordered parameter list, and
//! behavioral flags. Extensions build one during registration through
//! the fluent operations below, then the registry shares it read-only
//! with the editor UI and the code generator.
//!
//! The display sentence is a natural-language template carrying
//! positional `_PARAM<N>_` tokens; the renderer substitutes the live
//! parameter widgets for them. [`param_token`] is the single point where
//! that token format is defined.

use cobble_serialization::Element;

use crate::parameter::{ParameterMetadata, ParameterType};
use crate::translation::Translator;

/// Positional placeholder referencing the parameter at `index` inside a
/// sentence. The token format is a contract with the sentence renderer.
pub fn param_token(index: usize) -> String {
    format!("_PARAM{index}_")
}

/// Markers understood by the standard-operator sentence templates.
const SUBJECT_MARKER: &str = "<subject>";
const OPERATOR_MARKER: &str = "<operator>";
const VALUE_MARKER: &str = "<value>";

/// Registry entry describing one instruction (action or condition)
#[derive(Debug, Clone, PartialEq)]
pub struct InstructionMetadata {
    /// Registration name, unique within the owning extension
    pub name: String,
    /// Short display name
    pub fullname: String,
    /// Display description
    pub description: String,
    /// Natural-language sentence template with `_PARAM<N>_` tokens
    pub sentence: String,
    /// Display group in the editor's instruction list
    pub group: String,
    /// Icon shown in the editor
    pub icon_filename: String,
    /// Small icon shown in event sheets
    pub small_icon_filename: String,
    /// Path to the help page for this instruction
    pub help_path: String,
    /// Prefix qualifying object/behavior type constraints of parameters
    pub extension_namespace: String,
    /// Whether sub-instructions can be nested under this one
    pub can_have_sub_instructions: bool,
    /// Hidden from the editor's instruction list
    pub hidden: bool,
    /// Reserved for the owning extension, not offered to projects
    pub is_private: bool,
    /// The instruction targets an object (parameter 0 is the object)
    pub is_object_instruction: bool,
    /// The instruction targets a behavior (parameter 0 is the object)
    pub is_behavior_instruction: bool,
    /// Advancedness ranking used by the UI to sort and filter (default 5)
    pub usage_complexity: u32,
    /// Ordered formal parameters; sentence tokens reference them by index
    pub parameters: Vec<ParameterMetadata>,
    /// Type manipulated by the standard operator helpers, when used
    pub manipulated_type: Option<ParameterType>,
}

impl Default for InstructionMetadata {
    /// Hidden placeholder used when a metadata lookup fails. The sentence
    /// is not routed through the translation collaborator: placeholders
    /// must stay cheap to build in bulk and usable before localization
    /// data is loaded.
    fn default() -> Self {
        Self {
            name: String::new(),
            fullname: String::new(),
            description: String::new(),
            sentence: "Unknown or unsupported instruction".to_string(),
            group: String::new(),
            icon_filename: String::new(),
            small_icon_filename: String::new(),
            help_path: String::new(),
            extension_namespace: String::new(),
            can_have_sub_instructions: false,
            hidden: true,
            is_private: false,
            is_object_instruction: false,
            is_behavior_instruction: false,
            usage_complexity: 5,
            parameters: Vec::new(),
            manipulated_type: None,
        }
    }
}

impl InstructionMetadata {
    /// Create a visible instruction. Display text is passed in already
    /// resolved; construction never touches the translation collaborator.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        extension_namespace: &str,
        name: &str,
        fullname: &str,
        description: &str,
        sentence: &str,
        group: &str,
        icon: &str,
        small_icon: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            fullname: fullname.to_string(),
            description: description.to_string(),
            sentence: sentence.to_string(),
            group: group.to_string(),
            icon_filename: icon.to_string(),
            small_icon_filename: small_icon.to_string(),
            extension_namespace: extension_namespace.to_string(),
            hidden: false,
            ..Self::default()
        }
    }

    // ========================================================================
    // Parameter-adding operations
    // ========================================================================

    /// Append a user-facing parameter.
    ///
    /// For object/behavior types, a non-empty `object_type` constraint is
    /// qualified with the extension namespace so type references stay
    /// unique across independently authored extensions; an empty one
    /// stays empty. For every other type `object_type` is carried
    /// verbatim as a free-form hint.
    pub fn add_parameter(
        mut self,
        ty: impl Into<ParameterType>,
        description: &str,
        object_type: &str,
        optional: bool,
    ) -> Self {
        let ty = ty.into();
        let mut parameter = ParameterMetadata::new(ty.clone(), description, optional);
        parameter.supplementary_information = if ty.is_object() || ty.is_behavior() {
            if object_type.is_empty() {
                String::new()
            } else {
                format!("{}{}", self.extension_namespace, object_type)
            }
        } else {
            object_type.to_string()
        };
        self.parameters.push(parameter);
        self
    }

    /// Append a parameter supplied only by generated code. The
    /// supplementary information references internal artifacts, never
    /// user-facing types, so it is carried verbatim.
    pub fn add_code_only_parameter(
        mut self,
        ty: impl Into<ParameterType>,
        supplementary_information: &str,
    ) -> Self {
        self.parameters
            .push(ParameterMetadata::code_only(ty, supplementary_information));
        self
    }

    /// Set the contextual help text of the most recently added parameter.
    /// No-op on an instruction without parameters.
    pub fn set_parameter_long_description(mut self, long_description: &str) -> Self {
        if let Some(parameter) = self.parameters.last_mut() {
            parameter.long_description = long_description.to_string();
        }
        self
    }

    /// Set the default value of the most recently added parameter.
    /// No-op on an instruction without parameters.
    pub fn set_parameter_default_value(mut self, default_value: &str) -> Self {
        if let Some(parameter) = self.parameters.last_mut() {
            parameter.default_value = default_value.to_string();
        }
        self
    }

    // ========================================================================
    // Flags and display
    // ========================================================================

    /// Hide the instruction from the editor's instruction list
    pub fn set_hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Reserve the instruction for the owning extension
    pub fn set_private(mut self) -> Self {
        self.is_private = true;
        self
    }

    /// Allow sub-instructions to be nested under this instruction
    pub fn set_can_have_sub_instructions(mut self) -> Self {
        self.can_have_sub_instructions = true;
        self
    }

    /// Set the help page path
    pub fn set_help_path(mut self, help_path: &str) -> Self {
        self.help_path = help_path.to_string();
        self
    }

    /// Set the display group
    pub fn set_group(mut self, group: &str) -> Self {
        self.group = group.to_string();
        self
    }

    /// Mark the instruction as targeting an object; parameter 0 is then
    /// the implicit subject of the standard operator sentences
    pub fn mark_as_object_instruction(mut self) -> Self {
        self.is_object_instruction = true;
        self
    }

    /// Mark the instruction as targeting a behavior; parameter 0 is then
    /// the implicit subject of the standard operator sentences
    pub fn mark_as_behavior_instruction(mut self) -> Self {
        self.is_behavior_instruction = true;
        self
    }

    /// Rank the instruction as beginner-friendly
    pub fn mark_as_simple(mut self) -> Self {
        self.usage_complexity = 2;
        self
    }

    /// Rank the instruction as advanced
    pub fn mark_as_advanced(mut self) -> Self {
        self.usage_complexity = 7;
        self
    }

    /// Rank the instruction as expert-level
    pub fn mark_as_complex(mut self) -> Self {
        self.usage_complexity = 9;
        self
    }

    /// Record the type manipulated by the standard operator helpers
    pub fn set_manipulated_type(mut self, ty: impl Into<ParameterType>) -> Self {
        self.manipulated_type = Some(ty.into());
        self
    }

    // ========================================================================
    // Standard operator parameters
    // ========================================================================

    /// Extend an assignment-style instruction ("change something") with
    /// the standard operator and value parameters, and rewrite the
    /// sentence so the previous sentence becomes the subject of the new
    /// one. Repeated calls nest: each call wraps whatever sentence the
    /// instruction currently has.
    pub fn use_standard_operator_parameters(
        self,
        ty: impl Into<ParameterType>,
        translator: &dyn Translator,
    ) -> Self {
        self.apply_operator_template(
            ty.into(),
            ParameterType::Operator,
            "Modification's sign",
            "Value",
            "Change <subject> of _PARAM0_: <operator> <value>",
            "Change <subject>: <operator> <value>",
            translator,
        )
    }

    /// Extend a comparison-style instruction with the standard relational
    /// operator and value parameters, rewriting the sentence the same way
    /// as [`InstructionMetadata::use_standard_operator_parameters`].
    pub fn use_standard_relational_operator_parameters(
        self,
        ty: impl Into<ParameterType>,
        translator: &dyn Translator,
    ) -> Self {
        self.apply_operator_template(
            ty.into(),
            ParameterType::RelationalOperator,
            "Sign of the test",
            "Value to compare",
            "<subject> of _PARAM0_ <operator> <value>",
            "<subject> <operator> <value>",
            translator,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn apply_operator_template(
        mut self,
        manipulated: ParameterType,
        operator_type: ParameterType,
        operator_description: &str,
        value_description: &str,
        object_template: &str,
        free_template: &str,
        translator: &dyn Translator,
    ) -> Self {
        self.manipulated_type = Some(manipulated.clone());

        // The value parameter picks an editor, not a semantic type:
        // numbers get the expression editor, everything else its own.
        let value_type = if manipulated == ParameterType::Number {
            ParameterType::Expression
        } else {
            manipulated
        };
        self = self
            .add_parameter(operator_type, &translator.translate(operator_description), "", false)
            .add_parameter(value_type, &translator.translate(value_description), "", false);

        let operator_index = self.parameters.len() - 2;
        let value_index = self.parameters.len() - 1;

        let template = if self.is_object_instruction || self.is_behavior_instruction {
            // The object template references _PARAM0_ as the implicit
            // subject; that parameter must have been added beforehand.
            debug_assert!(
                operator_index >= 1,
                "object/behavior instruction has no parameter 0 to use as subject"
            );
            translator.translate(object_template)
        } else {
            translator.translate(free_template)
        };

        self.sentence = template
            .replace(SUBJECT_MARKER, &self.sentence)
            .replace(OPERATOR_MARKER, &param_token(operator_index))
            .replace(VALUE_MARKER, &param_token(value_index));
        self
    }

    // ========================================================================
    // Serialization
    // ========================================================================

    /// Write every field as named attributes, with the parameter list as
    /// ordered children under a `parameters` child. Total and lossless.
    pub fn serialize_to(&self, element: &mut Element) {
        element.set_attribute("name", self.name.as_str());
        element.set_attribute("fullname", self.fullname.as_str());
        element.set_attribute("description", self.description.as_str());
        element.set_attribute("sentence", self.sentence.as_str());
        element.set_attribute("group", self.group.as_str());
        element.set_attribute("iconFilename", self.icon_filename.as_str());
        element.set_attribute("smallIconFilename", self.small_icon_filename.as_str());
        element.set_attribute("helpPath", self.help_path.as_str());
        element.set_attribute("extensionNamespace", self.extension_namespace.as_str());
        element.set_attribute("canHaveSubInstructions", self.can_have_sub_instructions);
        element.set_attribute("hidden", self.hidden);
        element.set_attribute("isPrivate", self.is_private);
        element.set_attribute("isObjectInstruction", self.is_object_instruction);
        element.set_attribute("isBehaviorInstruction", self.is_behavior_instruction);
        element.set_attribute("usageComplexity", self.usage_complexity);
        if let Some(manipulated) = &self.manipulated_type {
            element.set_attribute("manipulatedType", manipulated.tag());
        }

        let parameters_element = element.add_child("parameters");
        for parameter in &self.parameters {
            parameter.serialize_to(parameters_element.add_child("parameter"));
        }
    }

    /// Exact inverse of [`InstructionMetadata::serialize_to`]. Missing
    /// attributes degrade to empty strings, `false`, and `0`.
    pub fn unserialize_from(element: &Element) -> Self {
        Self {
            name: element.get_string_attribute("name"),
            fullname: element.get_string_attribute("fullname"),
            description: element.get_string_attribute("description"),
            sentence: element.get_string_attribute("sentence"),
            group: element.get_string_attribute("group"),
            icon_filename: element.get_string_attribute("iconFilename"),
            small_icon_filename: element.get_string_attribute("smallIconFilename"),
            help_path: element.get_string_attribute("helpPath"),
            extension_namespace: element.get_string_attribute("extensionNamespace"),
            can_have_sub_instructions: element.get_bool_attribute("canHaveSubInstructions"),
            hidden: element.get_bool_attribute("hidden"),
            is_private: element.get_bool_attribute("isPrivate"),
            is_object_instruction: element.get_bool_attribute("isObjectInstruction"),
            is_behavior_instruction: element.get_bool_attribute("isBehaviorInstruction"),
            usage_complexity: element
                .get_int_attribute("usageComplexity")
                .try_into()
                .unwrap_or(0),
            manipulated_type: element
                .has_attribute("manipulatedType")
                .then(|| ParameterType::from_tag(&element.get_string_attribute("manipulatedType"))),
            parameters: element
                .child("parameters")
                .map(|parameters| {
                    parameters
                        .children_named("parameter")
                        .map(ParameterMetadata::unserialize_from)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}
