//! The capability contract every wrapped value is seen through.
//!
//! The engine never looks at a component's concrete type. It only asks the
//! questions on [`Component`]: can you run this operation, run it, give me your
//! attributes, and do you wrap something yourself.

use crate::error::{DecoratorError, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// The flat, ordered mapping a stack is flattened into.
pub type Structure = Map<String, Value>;

/// A value that can be decorated.
///
/// Only [`invoke`](Component::invoke) and [`supports`](Component::supports) are
/// mandatory. The remaining methods are optional capabilities with empty defaults.
pub trait Component: Send + Sync {
    /// Runs the named operation with the given arguments.
    fn invoke(&self, operation: &str, args: &[Value]) -> Result<Value>;

    /// Whether [`invoke`](Component::invoke) knows the named operation.
    fn supports(&self, operation: &str) -> bool;

    /// The component's own attributes, used as the base of a flattened stack.
    fn attributes(&self) -> Option<Structure> {
        None
    }

    /// The component this value wraps, if it is itself a decorator.
    fn component(&self) -> Option<&dyn Component> {
        None
    }

    /// Names of the operations declared on this value's own type, in declaration order.
    fn own_operations(&self) -> Vec<&'static str> {
        Vec::new()
    }
}

impl<T: Component + ?Sized> Component for Box<T> {
    #[inline]
    fn invoke(&self, operation: &str, args: &[Value]) -> Result<Value> {
        (**self).invoke(operation, args)
    }

    #[inline]
    fn supports(&self, operation: &str) -> bool {
        (**self).supports(operation)
    }

    fn attributes(&self) -> Option<Structure> {
        (**self).attributes()
    }

    fn component(&self) -> Option<&dyn Component> {
        (**self).component()
    }

    fn own_operations(&self) -> Vec<&'static str> {
        (**self).own_operations()
    }
}

/// Walks the wrapping chain down to the innermost component.
pub fn root_component(component: &dyn Component) -> &dyn Component {
    let mut current = component;
    while let Some(inner) = current.component() {
        current = inner;
    }
    current
}

/// Number of decorator layers above the root component.
pub fn depth(component: &dyn Component) -> usize {
    let mut depth = 0;
    let mut current = component;
    while let Some(inner) = current.component() {
        depth += 1;
        current = inner;
    }
    depth
}

/// A plain component made of attributes.
///
/// Every attribute doubles as an operation of the same name that takes no arguments.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    attributes: Structure,
}

impl Record {
    pub fn new(attributes: Structure) -> Self {
        Self { attributes }
    }

    /// Builds a record from any value that serializes to an object.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let value = serde_json::to_value(value)
            .map_err(|e| DecoratorError::configuration(format!("record can't be serialized: {e}")))?;
        match value {
            Value::Object(attributes) => Ok(Self::new(attributes)),
            other => Err(DecoratorError::configuration(format!("record must serialize to an object, got `{other}`"))),
        }
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }
}

impl From<Structure> for Record {
    fn from(attributes: Structure) -> Self {
        Self::new(attributes)
    }
}

impl Component for Record {
    fn invoke(&self, operation: &str, args: &[Value]) -> Result<Value> {
        let value = self.attributes.get(operation).ok_or_else(|| DecoratorError::capability_not_found(operation))?;
        if !args.is_empty() {
            return Err(DecoratorError::invalid_arguments(operation, 0, args.len()));
        }
        Ok(value.clone())
    }

    fn supports(&self, operation: &str) -> bool {
        self.attributes.contains_key(operation)
    }

    fn attributes(&self) -> Option<Structure> {
        Some(self.attributes.clone())
    }
}
