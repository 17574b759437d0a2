//! A micro decorator engine
//!
//! This crate wraps arbitrary components in decorators that add or override
//! operations, forward everything else to the wrapped component, stack over each
//! other to any depth, and flatten the whole stack into one structural mapping
//! ready for serialization.
//!
//! # Example
//!
//! ```
//! use micro_decorator::{Decorated, Decoration, Decorator, DecoratorExt, Operation, Record, Result, Value};
//! use serde::Serialize;
//!
//! #[derive(Clone, Serialize)]
//! struct FullName {
//!     separator: &'static str,
//! }
//!
//! impl FullName {
//!     fn full_name(this: &Decorated<Self>, _args: &[Value]) -> Result<Value> {
//!         let first_name = this.get("first_name")?;
//!         let last_name = this.get("last_name")?;
//!         let (first_name, last_name) = (first_name.as_str().unwrap_or_default(), last_name.as_str().unwrap_or_default());
//!         Ok(format!("{first_name}{}{last_name}", this.options().separator).into())
//!     }
//! }
//!
//! impl Decoration for FullName {
//!     const OPERATIONS: &'static [Operation<Self>] = &[Operation::new("full_name", Self::full_name)];
//! }
//!
//! let user = Record::default().with("first_name", "John").with("last_name", "Hayes-Reed");
//! let decorated = FullName { separator: " " }.decorate(user);
//!
//! assert_eq!(decorated.get("full_name")?, "John Hayes-Reed");
//! // not declared on the decorator, forwarded to the user
//! assert_eq!(decorated.get("last_name")?, "Hayes-Reed");
//! // options are read-only accessors
//! assert_eq!(decorated.get("separator")?, " ");
//!
//! assert_eq!(
//!     serde_json::to_string(&decorated).unwrap(),
//!     r#"{"first_name":"John","last_name":"Hayes-Reed","full_name":"John Hayes-Reed"}"#
//! );
//!
//! let users = vec![Record::default().with("first_name", "Jane").with("last_name", "Doe")];
//! assert_eq!(FullName { separator: "_" }.decorate_each(users)[0].get("full_name")?, "Jane_Doe");
//! # Ok::<(), micro_decorator::DecoratorError>(())
//! ```
//!
//! # Architecture
//!
//! - [`Component`]: the capability contract of anything that can be wrapped
//! - [`Decoration`]: a decorator type, its options and its own-operation table
//! - [`Decorated`]: a decorator instance, dispatching own operations first and
//!   forwarding the rest
//! - [`decorator`]: construction, single or batch, and pre-composed stacks
//! - [`structure`]: flattening a stack into a [`Structure`]

mod component;
mod decorated;
mod error;

pub mod decorator;
pub mod structure;

#[cfg(test)]
mod fixtures;

pub use component::depth;
pub use component::root_component;
pub use component::Component;
pub use component::Record;
pub use component::Structure;
pub use decorated::Decorated;
pub use decorated::Decoration;
pub use decorated::Operation;
pub use decorated::OperationFn;
pub use decorator::Decorator;
pub use decorator::DecoratorComposer;
pub use decorator::DecoratorExt;
pub use error::DecoratorError;
pub use error::Result;
pub use serde_json::Value;
pub use structure::to_structure;
pub use structure::to_structure_with;
pub use structure::BaseAccessor;
pub use structure::MergeStrategy;
pub use structure::StructureConfig;
