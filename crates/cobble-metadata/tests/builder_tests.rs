use cobble_metadata::{InstructionMetadata, NoTranslation, ParameterType, Translator};
use cobble_serialization::Element;

// Helper building an object action the way an extension registers one
fn object_action(sentence: &str) -> InstructionMetadata {
    InstructionMetadata::new(
        "Platform::",
        "SetSpeed",
        "Speed",
        "Change the speed of the object.",
        sentence,
        "Movement",
        "res/speed.png",
        "res/speed16.png",
    )
    .mark_as_object_instruction()
    .add_parameter(ParameterType::Object, "Object", "Character", false)
}

// Dictionary translator standing in for the localization subsystem
struct French;

impl Translator for French {
    fn translate(&self, source: &str) -> String {
        match source {
            "Modification's sign" => "Signe de la modification".to_string(),
            "Value" => "Valeur".to_string(),
            "Change <subject>: <operator> <value>" => {
                "Changer <subject> : <operator> <value>".to_string()
            }
            other => other.to_string(),
        }
    }
}

// ============================================================================
// Standard operator parameters
// ============================================================================

#[test]
fn test_operator_parameters_on_object_instruction() {
    let action =
        object_action("the speed").use_standard_operator_parameters("number", &NoTranslation);

    assert_eq!(
        action.sentence,
        "Change the speed of _PARAM0_: _PARAM1_ _PARAM2_"
    );
    assert!(!action.sentence.contains("<subject>"));
    assert!(!action.sentence.contains("<operator>"));
    assert!(!action.sentence.contains("<value>"));

    assert_eq!(action.parameters.len(), 3);
    assert_eq!(action.parameters[1].ty, ParameterType::Operator);
    assert_eq!(action.parameters[1].description, "Modification's sign");
    assert_eq!(action.parameters[2].ty, ParameterType::Expression);
    assert_eq!(action.parameters[2].description, "Value");
    assert_eq!(action.manipulated_type, Some(ParameterType::Number));
}

#[test]
fn test_operator_parameters_on_free_instruction() {
    let action = InstructionMetadata::new(
        "Audio::",
        "SetVolume",
        "Volume",
        "Change the global volume.",
        "the global volume",
        "Sounds",
        "",
        "",
    )
    .use_standard_operator_parameters("number", &NoTranslation);

    assert_eq!(action.sentence, "Change the global volume: _PARAM0_ _PARAM1_");
    assert_eq!(action.parameters.len(), 2);
}

#[test]
fn test_value_parameter_editor_follows_manipulated_type() {
    let on_number = InstructionMetadata::default()
        .use_standard_operator_parameters(ParameterType::Number, &NoTranslation);
    assert_eq!(on_number.parameters[1].ty, ParameterType::Expression);

    let on_string = InstructionMetadata::default()
        .use_standard_operator_parameters(ParameterType::String, &NoTranslation);
    assert_eq!(on_string.parameters[1].ty, ParameterType::String);
    assert_eq!(on_string.manipulated_type, Some(ParameterType::String));
}

#[test]
fn test_repeated_calls_nest_sentences() {
    let action = object_action("the speed")
        .use_standard_operator_parameters("number", &NoTranslation)
        .use_standard_operator_parameters("number", &NoTranslation);

    // The first rewritten sentence becomes the subject of the second one,
    // and the second pair of parameters lands at indices 3 and 4.
    assert_eq!(
        action.sentence,
        "Change Change the speed of _PARAM0_: _PARAM1_ _PARAM2_ of _PARAM0_: _PARAM3_ _PARAM4_"
    );
    assert_eq!(action.parameters.len(), 5);
}

#[test]
fn test_translator_reaches_templates_but_not_subject() {
    let action = InstructionMetadata::new(
        "Audio::",
        "SetVolume",
        "Volume",
        "Change the global volume.",
        "the global volume",
        "Sounds",
        "",
        "",
    )
    .use_standard_operator_parameters("number", &French);

    assert_eq!(
        action.sentence,
        "Changer the global volume : _PARAM0_ _PARAM1_"
    );
    assert_eq!(action.parameters[0].description, "Signe de la modification");
    assert_eq!(action.parameters[1].description, "Valeur");
}

// ============================================================================
// Relational operator parameters
// ============================================================================

#[test]
fn test_relational_parameters_on_object_instruction() {
    let condition = object_action("the speed")
        .use_standard_relational_operator_parameters("number", &NoTranslation);

    assert_eq!(condition.sentence, "the speed of _PARAM0_ _PARAM1_ _PARAM2_");
    assert_eq!(condition.parameters[1].ty, ParameterType::RelationalOperator);
    assert_eq!(condition.parameters[1].description, "Sign of the test");
    assert_eq!(condition.parameters[2].description, "Value to compare");
}

#[test]
fn test_relational_parameters_on_free_instruction() {
    let condition = InstructionMetadata::default()
        .use_standard_relational_operator_parameters("string", &NoTranslation);

    assert_eq!(
        condition.sentence,
        "Unknown or unsupported instruction _PARAM0_ _PARAM1_"
    );
    assert_eq!(condition.parameters[1].ty, ParameterType::String);
}

// ============================================================================
// Registration-style chains
// ============================================================================

#[test]
fn test_registration_chain() {
    let action = InstructionMetadata::new(
        "Physics::",
        "ApplyForce",
        "Apply a force",
        "Apply a force to an object.",
        "Apply to _PARAM0_ a force of _PARAM2_",
        "Forces",
        "res/force.png",
        "res/force16.png",
    )
    .mark_as_object_instruction()
    .mark_as_advanced()
    .set_help_path("/physics/forces")
    .add_parameter(ParameterType::Object, "Object", "PhysicsObject", false)
    .add_code_only_parameter("physicsWorld", "shared world state")
    .add_parameter(ParameterType::Expression, "Force (in Newtons)", "", false)
    .set_parameter_long_description("Positive values push to the right.")
    .set_parameter_default_value("10");

    assert_eq!(action.usage_complexity, 7);
    assert_eq!(action.parameters.len(), 3);
    assert_eq!(
        action.parameters[0].supplementary_information,
        "Physics::PhysicsObject"
    );
    assert!(action.parameters[1].code_only);
    assert_eq!(
        action.parameters[2].long_description,
        "Positive values push to the right."
    );
    assert_eq!(action.parameters[2].default_value, "10");
}

#[test]
fn test_string_tags_qualify_like_enum_variants() {
    let action = InstructionMetadata::new("MyExt::", "Op", "Op", "", "", "", "", "")
        .add_parameter("object", "Object", "Sprite", false)
        .add_parameter("number", "Amount", "5", false);

    assert_eq!(
        action.parameters[0].supplementary_information,
        "MyExt::Sprite"
    );
    assert_eq!(action.parameters[1].supplementary_information, "5");
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_instruction_round_trip() {
    let action = object_action("the speed")
        .set_private()
        .set_can_have_sub_instructions()
        .mark_as_complex()
        .use_standard_operator_parameters("number", &NoTranslation);

    let mut element = Element::new();
    action.serialize_to(&mut element);

    assert_eq!(InstructionMetadata::unserialize_from(&element), action);
}

#[test]
fn test_instruction_round_trip_through_json() {
    let action = object_action("the speed")
        .use_standard_relational_operator_parameters("string", &NoTranslation);

    let mut element = Element::new();
    action.serialize_to(&mut element);
    let json = element.to_json_string().unwrap();
    let reloaded = Element::from_json_string(&json).unwrap();

    let decoded = InstructionMetadata::unserialize_from(&reloaded);
    assert_eq!(decoded, action);
    // Parameter order is positional and must survive persistence.
    assert_eq!(decoded.parameters[0].ty, ParameterType::Object);
    assert_eq!(decoded.parameters[1].ty, ParameterType::RelationalOperator);
    assert_eq!(decoded.parameters[2].ty, ParameterType::String);
}

#[test]
fn test_unserialize_from_empty_tree_degrades_to_defaults() {
    let decoded = InstructionMetadata::unserialize_from(&Element::new());

    assert!(!decoded.hidden);
    assert_eq!(decoded.usage_complexity, 0);
    assert!(decoded.sentence.is_empty());
    assert!(decoded.parameters.is_empty());
    assert!(decoded.manipulated_type.is_none());
}
