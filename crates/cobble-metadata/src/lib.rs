//! Cobble Instruction Metadata
//!
//! This crate describes the actions and conditions of the Cobble block
//! editor: their display strings, formal parameters, and behavioral
//! flags. An [`InstructionMetadata`] is a registry entry consumed by the
//! editor UI and the code generator; it never executes anything itself.
//!
//! # Example
//!
//! ```rust,ignore
//! use cobble_metadata::{InstructionMetadata, NoTranslation, ParameterType};
//!
//! let action = InstructionMetadata::new(
//!     "Physics::",
//!     "SetLinearDamping",
//!     "Linear damping",
//!     "Change the linear damping of an object.",
//!     "the linear damping",
//!     "Movement",
//!     "res/physics.png",
//!     "res/physics16.png",
//! )
//! .mark_as_object_instruction()
//! .add_parameter(ParameterType::Object, "Object", "PhysicsObject", false)
//! .use_standard_operator_parameters(ParameterType::Number, &NoTranslation);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod instruction;
pub mod parameter;
pub mod translation;

pub use instruction::{param_token, InstructionMetadata};
pub use parameter::{ParameterMetadata, ParameterType};
pub use translation::{NoTranslation, Translator};
