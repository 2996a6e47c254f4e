//! Generator descriptors and their behaviors

use crate::codegen::{self, TypeDeclaration};
use crate::{GenerateResult, SchemaValue, ScriptGenerator};

/// Output language of a built-in generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Go structs with `json` tags
    Go,
    /// TypeScript interfaces
    TypeScript,
}

impl Target {
    /// All built-in targets
    pub const ALL: [Target; 2] = [Target::Go, Target::TypeScript];

    /// Registry name of the generator for this target
    pub fn generator_name(self) -> &'static str {
        match self {
            Target::Go => "go-struct",
            Target::TypeScript => "ts-interface",
        }
    }

    /// Human-readable description of the generator for this target
    pub fn description(self) -> &'static str {
        match self {
            Target::Go => "Generates Go structs with JSON tags from example JSON",
            Target::TypeScript => "Generates TypeScript interfaces from example JSON",
        }
    }

    /// Name given to the root declaration
    pub fn root_name(self) -> &'static str {
        match self {
            Target::Go => codegen::go::DEFAULT_ROOT_NAME,
            Target::TypeScript => codegen::typescript::DEFAULT_ROOT_NAME,
        }
    }

    /// Render a declaration tree in this target's syntax
    pub fn render(self, root: &TypeDeclaration) -> String {
        match self {
            Target::Go => codegen::generate_go(root),
            Target::TypeScript => codegen::generate_typescript(root),
        }
    }
}

/// In-process generator built on [`codegen::emit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinGenerator {
    pub target: Target,
}

impl BuiltinGenerator {
    /// Create a generator for a target
    pub fn new(target: Target) -> Self {
        Self { target }
    }

    /// Decode `input`, emit the declaration tree and render it.
    pub fn generate(&self, input: &str) -> GenerateResult<String> {
        let value = SchemaValue::parse(input)?;
        let root = codegen::emit(self.target.root_name(), &value)?;

        for name in codegen::duplicate_names(&root) {
            tracing::warn!(declaration = name, "multiple declarations share one name");
        }

        Ok(self.target.render(&root))
    }
}

/// How a registered generator produces code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorBehavior {
    /// Structural emission in this process
    Builtin(BuiltinGenerator),
    /// An external script fed through stdin
    Script(ScriptGenerator),
}

/// A named generator as stored in the [`Registry`](crate::Registry)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorDescriptor {
    /// Unique registry key
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// What runs when the generator is invoked
    pub behavior: GeneratorBehavior,
}

impl GeneratorDescriptor {
    /// Descriptor for a built-in target under its default name
    pub fn builtin(target: Target) -> Self {
        Self {
            name: target.generator_name().to_string(),
            description: target.description().to_string(),
            behavior: GeneratorBehavior::Builtin(BuiltinGenerator::new(target)),
        }
    }

    /// Descriptor for an external script
    pub fn script(
        name: impl Into<String>,
        description: impl Into<String>,
        script: ScriptGenerator,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            behavior: GeneratorBehavior::Script(script),
        }
    }

    /// Whether this generator runs in-process
    pub fn is_builtin(&self) -> bool {
        matches!(self.behavior, GeneratorBehavior::Builtin(_))
    }

    /// Run the generator on raw input text
    pub fn generate(&self, input: &str) -> GenerateResult<String> {
        match &self.behavior {
            GeneratorBehavior::Builtin(builtin) => builtin.generate(input),
            GeneratorBehavior::Script(script) => script.generate(input),
        }
    }
}
