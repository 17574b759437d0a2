use crate::component::{Component, Record};
use crate::decorated::{Decorated, Decoration, Operation};
use crate::error::Result;
use mockall::mock;
use serde::Serialize;
use serde_json::{json, Value};

mock! {
    pub Leaf {}

    impl Component for Leaf {
        fn invoke(&self, operation: &str, args: &[Value]) -> Result<Value>;
        fn supports(&self, operation: &str) -> bool;
    }
}

pub fn person() -> Record {
    Record::from_serialize(&json!({
        "example_method": "This is an example",
        "first_name": "John",
        "last_name": "Hayes-Reed",
    }))
    .unwrap()
}

fn text(value: &Value) -> &str {
    value.as_str().unwrap_or_default()
}

#[derive(Debug, Clone, Serialize)]
pub struct FullName {
    pub test_var: i64,
}

impl FullName {
    fn example_method(this: &Decorated<Self>, args: &[Value]) -> Result<Value> {
        let example = this.super_call("example_method", args)?;
        Ok(format!("{} within an example", text(&example)).into())
    }

    fn full_name(this: &Decorated<Self>, _args: &[Value]) -> Result<Value> {
        let first_name = this.get("first_name")?;
        let last_name = this.get("last_name")?;
        Ok(format!("{} {}", text(&first_name), text(&last_name)).into())
    }
}

impl Decoration for FullName {
    const OPERATIONS: &'static [Operation<Self>] = &[
        Operation::new("example_method", Self::example_method),
        Operation::new("full_name", Self::full_name),
    ];
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReverseName;

impl ReverseName {
    fn full_name_reverse(this: &Decorated<Self>, _args: &[Value]) -> Result<Value> {
        let first_name = this.get("first_name")?;
        let last_name = this.get("last_name")?;
        Ok(format!("{} {}", text(&last_name), text(&first_name)).into())
    }
}

impl Decoration for ReverseName {
    const OPERATIONS: &'static [Operation<Self>] = &[Operation::new("full_name_reverse", Self::full_name_reverse)];
}
