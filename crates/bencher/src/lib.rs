use micro_decorator::{Component, Decorated, Decoration, Decorator, Operation, Record, Result, Value};
use serde::Serialize;

#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    group: TestGroup,
    depth: usize,
}

impl TestCase {
    pub fn new(name: &'static str, group: TestGroup, depth: usize) -> Self {
        Self { name, group, depth }
    }

    pub fn shallow(name: &'static str, depth: usize) -> Self {
        Self::new(name, TestGroup::Shallow, depth)
    }

    pub fn deep(name: &'static str, depth: usize) -> Self {
        Self::new(name, TestGroup::Deep, depth)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn group(&self) -> TestGroup {
        self.group
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// A stack of `depth` [`Layer`] decorators over [`leaf`].
    pub fn stack(&self) -> Box<dyn Component> {
        let root: Box<dyn Component> = Box::new(leaf());
        (0..self.depth).fold(root, |component, level| -> Box<dyn Component> {
            Box::new(Layer { level }.decorate(component))
        })
    }
}

#[derive(Clone, Copy, Debug)]
pub enum TestGroup {
    Shallow,
    Deep,
}

impl TestGroup {
    pub fn name(&self) -> &'static str {
        match self {
            TestGroup::Shallow => "shallow",
            TestGroup::Deep => "deep",
        }
    }
}

pub fn leaf() -> Record {
    Record::default().with("id", 1).with("first_name", "John").with("last_name", "Hayes-Reed")
}

/// A decoration that overrides `id` and adds one field of its own.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Layer {
    level: usize,
}

impl Layer {
    fn id(this: &Decorated<Self>, args: &[Value]) -> Result<Value> {
        let id = this.super_call("id", args)?;
        Ok(Value::from(id.as_u64().unwrap_or_default() + 1))
    }

    fn tag(this: &Decorated<Self>, _args: &[Value]) -> Result<Value> {
        Ok(Value::from(format!("layer-{}", this.options().level)))
    }
}

impl Decoration for Layer {
    const OPERATIONS: &'static [Operation<Self>] = &[Operation::new("id", Self::id), Operation::new("tag", Self::tag)];
}
