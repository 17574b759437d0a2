use crate::decorator::Decorator;

/// Two decorators applied in order: `decorator_1` wraps first and becomes the inner layer.
#[derive(Debug, Clone, Copy)]
pub struct DecoratorComposer<D1, D2> {
    decorator_1: D1,
    decorator_2: D2,
}

impl<D1, D2> DecoratorComposer<D1, D2> {
    pub fn new(decorator_1: D1, decorator_2: D2) -> Self {
        Self { decorator_1, decorator_2 }
    }

    /// Stacks one more decorator on top of this composition.
    pub fn and_then<D3>(self, decorator: D3) -> DecoratorComposer<Self, D3> {
        DecoratorComposer::new(self, decorator)
    }
}

impl<In, D1, D2> Decorator<In> for DecoratorComposer<D1, D2>
where
    D1: Decorator<In>,
    D2: Decorator<D1::Out>,
{
    type Out = D2::Out;

    fn decorate(&self, raw: In) -> Self::Out {
        let output_1 = self.decorator_1.decorate(raw);
        self.decorator_2.decorate(output_1)
    }
}

#[cfg(test)]
mod tests {
    use crate::component::Component;
    use crate::decorated::Decoration;
    use crate::decorator::{Decorator, DecoratorExt};
    use crate::fixtures::{person, FullName, ReverseName};
    use serde_json::json;

    #[test]
    fn first_decorator_is_the_inner_layer() {
        let stacked = FullName { test_var: 3 }.and_then(ReverseName).decorate(person());

        assert_eq!(stacked.depth(), 2);
        assert_eq!(stacked.own_operations(), vec!["full_name_reverse"]);
        assert_eq!(stacked.inner().own_operations(), vec!["example_method", "full_name"]);
        assert_eq!(stacked.get("full_name").unwrap(), json!("John Hayes-Reed"));
        assert_eq!(stacked.get("full_name_reverse").unwrap(), json!("Hayes-Reed John"));
    }

    #[test]
    fn composition_extends_with_and_then() {
        let stacked = FullName { test_var: 3 }.and_then(ReverseName).and_then(ReverseName).decorate(person());

        assert_eq!(stacked.depth(), 3);
        assert_eq!(stacked.get("test_var").unwrap(), json!(3));
    }

    #[test]
    fn composition_decorates_each() {
        let stacks = FullName { test_var: 3 }.and_then(ReverseName).decorate_each([person(), person()]);

        assert_eq!(stacks.len(), 2);
        assert!(stacks.iter().all(|stacked| stacked.depth() == 2));
    }
}
