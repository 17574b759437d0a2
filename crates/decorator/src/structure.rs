//! Flattening a decorator stack into one structural mapping.
//!
//! The innermost component supplies the base mapping, then every layer, from the
//! inside out, writes the results of its own operations on top. An outer layer
//! therefore overwrites any same-named field of an inner one, while the field keeps
//! the position where it first appeared.
//!
//! How the base mapping is obtained and how colliding objects are combined is set by
//! [`StructureConfig`].

use crate::component::{Component, Structure};
use crate::decorated::{Decorated, Decoration};
use crate::error::{DecoratorError, Result};
use serde::{Serialize, Serializer};
use serde_json::Value;
use tracing::debug;

/// Where the innermost component's base mapping comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BaseAccessor {
    /// [`Component::attributes`].
    #[default]
    Attributes,
    /// A named operation, invoked without arguments, that returns an object.
    Operation(String),
}

/// How an own-operation result is written over an existing field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergeStrategy {
    #[default]
    Overwrite,
    /// Objects on both sides are merged key by key, recursively; anything else overwrites.
    Deep,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructureConfig {
    base: BaseAccessor,
    merge: MergeStrategy,
}

impl StructureConfig {
    pub fn builder() -> StructureConfigBuilder {
        StructureConfigBuilder::default()
    }

    pub fn base(&self) -> &BaseAccessor {
        &self.base
    }

    pub fn merge(&self) -> MergeStrategy {
        self.merge
    }
}

#[derive(Debug, Default)]
pub struct StructureConfigBuilder {
    base: BaseAccessor,
    merge: MergeStrategy,
}

impl StructureConfigBuilder {
    #[must_use]
    pub fn base(mut self, base: BaseAccessor) -> Self {
        self.base = base;
        self
    }

    /// Shorthand for [`BaseAccessor::Operation`].
    #[must_use]
    pub fn base_operation(self, operation: impl Into<String>) -> Self {
        self.base(BaseAccessor::Operation(operation.into()))
    }

    #[must_use]
    pub fn merge(mut self, merge: MergeStrategy) -> Self {
        self.merge = merge;
        self
    }

    pub fn build(self) -> StructureConfig {
        StructureConfig { base: self.base, merge: self.merge }
    }
}

/// Flattens `component` with the default configuration.
pub fn to_structure(component: &dyn Component) -> Result<Structure> {
    to_structure_with(component, &StructureConfig::default())
}

/// Flattens `component` and everything it wraps.
///
/// A plain component yields its base mapping. Fails with
/// [`DecoratorError::Configuration`] when the innermost component can't provide one.
pub fn to_structure_with(component: &dyn Component, config: &StructureConfig) -> Result<Structure> {
    let Some(inner) = component.component() else {
        return base_structure(component, config);
    };

    let mut structure = to_structure_with(inner, config)?;
    let operations = component.own_operations();
    debug!(?operations, "merge own operations of layer");

    for operation in operations {
        let value = component.invoke(operation, &[])?;
        merge_field(&mut structure, operation.to_owned(), value, config.merge);
    }

    Ok(structure)
}

fn base_structure(component: &dyn Component, config: &StructureConfig) -> Result<Structure> {
    match &config.base {
        BaseAccessor::Attributes => component.attributes().ok_or_else(|| {
            DecoratorError::configuration("the innermost component exposes neither attributes nor a wrapped component")
        }),
        BaseAccessor::Operation(operation) => {
            if !component.supports(operation) {
                return Err(DecoratorError::configuration(format!(
                    "the innermost component doesn't support the structural operation `{operation}`"
                )));
            }
            match component.invoke(operation, &[])? {
                Value::Object(structure) => Ok(structure),
                other => Err(DecoratorError::configuration(format!(
                    "structural operation `{operation}` must return an object, got `{other}`"
                ))),
            }
        }
    }
}

fn merge_field(structure: &mut Structure, key: String, value: Value, strategy: MergeStrategy) {
    match (strategy, value) {
        (MergeStrategy::Deep, Value::Object(incoming)) => match structure.get_mut(&key) {
            Some(Value::Object(existing)) => {
                for (nested_key, nested_value) in incoming {
                    merge_field(existing, nested_key, nested_value, strategy);
                }
            }
            _ => {
                structure.insert(key, Value::Object(incoming));
            }
        },
        (_, value) => {
            structure.insert(key, value);
        }
    }
}

impl<D: Decoration> Serialize for Decorated<D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let structure = self.to_structure().map_err(serde::ser::Error::custom)?;
        structure.serialize(serializer)
    }
}
