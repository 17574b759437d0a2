//! Decorator instances and the dispatch fallback protocol.
//!
//! A [`Decorated`] pairs a wrapped [`Component`] with a [`Decoration`]: a typed
//! options value whose type declares a table of own operations. Dispatch on a
//! decorated value resolves in this order:
//!
//! 1. an option accessor of this instance,
//! 2. an own operation of the decoration type,
//! 3. the wrapped component, which may itself be decorated.
//!
//! A name found nowhere is reported as [`DecoratorError::CapabilityNotFound`]
//! for the stack as a whole.
//!
//! # Example
//!
//! ```
//! use micro_decorator::{Decorated, Decoration, Decorator, Operation, Record, Result, Value};
//! use serde::Serialize;
//!
//! #[derive(Clone, Serialize)]
//! struct Greeting;
//!
//! impl Greeting {
//!     fn greet(this: &Decorated<Self>, _args: &[Value]) -> Result<Value> {
//!         let name = this.get("name")?;
//!         Ok(format!("hello {}", name.as_str().unwrap_or_default()).into())
//!     }
//! }
//!
//! impl Decoration for Greeting {
//!     const OPERATIONS: &'static [Operation<Self>] = &[Operation::new("greet", Self::greet)];
//! }
//!
//! let decorated = Greeting.decorate(Record::default().with("name", "world"));
//! assert_eq!(decorated.get("greet").unwrap(), "hello world");
//! assert_eq!(decorated.get("name").unwrap(), "world");
//! ```

use crate::component::{self, Component, Structure};
use crate::decorator::DecoratorComposer;
use crate::error::{DecoratorError, Result};
use crate::structure::{self, StructureConfig};
use once_cell::sync::OnceCell;
use serde::Serialize;
use serde_json::Value;
use std::any::type_name;
use std::fmt;
use tracing::{debug, trace};

/// The body of an own operation.
pub type OperationFn<D> = fn(&Decorated<D>, &[Value]) -> Result<Value>;

/// One entry of a decoration's own-operation table.
pub struct Operation<D> {
    name: &'static str,
    call: OperationFn<D>,
}

impl<D> Operation<D> {
    pub const fn new(name: &'static str, call: OperationFn<D>) -> Self {
        Self { name, call }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<D> Clone for Operation<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Operation<D> {}

impl<D> fmt::Debug for Operation<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation").field("name", &self.name).finish_non_exhaustive()
    }
}

/// The type-level half of a decorator.
///
/// The implementing type is the decorator's options: each serialized field becomes a
/// read-only accessor on every [`Decorated`] built from it. `OPERATIONS` lists the
/// operations the type adds or overrides, in the order they are merged when flattening.
pub trait Decoration: Clone + Serialize + Send + Sync + 'static {
    const OPERATIONS: &'static [Operation<Self>];

    fn operation(name: &str) -> Option<&'static Operation<Self>> {
        Self::OPERATIONS.iter().find(|operation| operation.name == name)
    }

    /// Stacks `next` on top of this decoration.
    fn and_then<D2>(self, next: D2) -> DecoratorComposer<Self, D2> {
        DecoratorComposer::new(self, next)
    }
}

/// A component wrapped by a decoration.
pub struct Decorated<D> {
    component: Box<dyn Component>,
    options: D,
    option_view: OnceCell<Structure>,
}

impl<D: Decoration> Decorated<D> {
    /// Wraps `component`. The component is not inspected until first use.
    pub fn new<C: Component + 'static>(component: C, options: D) -> Self {
        Self { component: Box::new(component), options, option_view: OnceCell::new() }
    }

    pub fn options(&self) -> &D {
        &self.options
    }

    /// The captured value of the named option, if this instance has one.
    pub fn option(&self, name: &str) -> Result<Option<Value>> {
        Ok(self.option_view()?.get(name).cloned())
    }

    /// Option lookup used by dispatch: options that can't be serialized expose no accessors,
    /// so own operations and forwarding keep working.
    fn option_value(&self, name: &str) -> Option<Value> {
        match self.option(name) {
            Ok(value) => value,
            Err(e) => {
                debug!(decoration = type_name::<D>(), cause = %e, "options have no accessor view");
                None
            }
        }
    }

    fn option_view(&self) -> Result<&Structure> {
        self.option_view.get_or_try_init(|| -> Result<Structure> {
            match serde_json::to_value(&self.options)? {
                Value::Object(view) => Ok(view),
                _ => Ok(Structure::new()),
            }
        })
    }

    /// The directly wrapped component.
    pub fn inner(&self) -> &dyn Component {
        self.component.as_ref()
    }

    pub fn root_component(&self) -> &dyn Component {
        component::root_component(self.inner())
    }

    pub fn depth(&self) -> usize {
        component::depth(self)
    }

    /// Calls an operation with no arguments through this decorator's own dispatch.
    pub fn get(&self, operation: &str) -> Result<Value> {
        self.invoke(operation, &[])
    }

    /// Calls the next layer down, skipping this decorator's own operations.
    ///
    /// Own operations use this to augment the behavior they override.
    pub fn super_call(&self, operation: &str, args: &[Value]) -> Result<Value> {
        // a wrapped decorator resolves the name itself, only the root is asked up front
        if self.component.component().is_none() && !self.component.supports(operation) {
            return Err(DecoratorError::capability_not_found(operation));
        }
        trace!(operation, decoration = type_name::<D>(), "forward to decorated component");
        self.component.invoke(operation, args)
    }

    /// The wrapped component's `to_param`, so a decorated value keeps its identifying parameter.
    pub fn to_param(&self) -> Result<Value> {
        self.super_call("to_param", &[])
    }

    pub fn to_structure(&self) -> Result<Structure> {
        structure::to_structure(self)
    }

    pub fn to_structure_with(&self, config: &StructureConfig) -> Result<Structure> {
        structure::to_structure_with(self, config)
    }
}

impl<D: Decoration> Component for Decorated<D> {
    fn invoke(&self, operation: &str, args: &[Value]) -> Result<Value> {
        if let Some(value) = self.option_value(operation) {
            if !args.is_empty() {
                return Err(DecoratorError::invalid_arguments(operation, 0, args.len()));
            }
            return Ok(value);
        }

        if let Some(own) = D::operation(operation) {
            return (own.call)(self, args);
        }

        self.super_call(operation, args)
    }

    fn supports(&self, operation: &str) -> bool {
        D::operation(operation).is_some()
            || self.option_value(operation).is_some()
            || self.component.supports(operation)
    }

    fn component(&self) -> Option<&dyn Component> {
        Some(self.component.as_ref())
    }

    fn own_operations(&self) -> Vec<&'static str> {
        D::OPERATIONS.iter().map(Operation::name).collect()
    }
}

impl<D: fmt::Debug> fmt::Debug for Decorated<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decorated").field("options", &self.options).finish_non_exhaustive()
    }
}
