//! Construction entry points.
//!
//! Every [`Decoration`] is a [`Decorator`] of any [`Component`]: decorating one
//! component yields one [`Decorated`]; [`DecoratorExt::decorate_each`] decorates a
//! whole collection with the same options, keeping the source order.

mod decorator_composer;

use crate::component::Component;
use crate::decorated::{Decorated, Decoration};

pub use decorator_composer::DecoratorComposer;

pub trait Decorator<In> {
    type Out;

    fn decorate(&self, raw: In) -> Self::Out;
}

pub trait DecoratorExt<In>: Decorator<In> {
    /// Decorates every element of `raws`, in iteration order.
    fn decorate_each<I>(&self, raws: I) -> Vec<Self::Out>
    where
        I: IntoIterator<Item = In>,
    {
        raws.into_iter().map(|raw| self.decorate(raw)).collect()
    }
}

impl<T: Decorator<In> + ?Sized, In> DecoratorExt<In> for T {}

impl<C, D> Decorator<C> for D
where
    C: Component + 'static,
    D: Decoration,
{
    type Out = Decorated<D>;

    fn decorate(&self, raw: C) -> Self::Out {
        Decorated::new(raw, self.clone())
    }
}

#[cfg(test)]
mod tests {
    use crate::component::{Component, Record};
    use crate::decorated::Decorated;
    use crate::decorator::{Decorator, DecoratorExt};
    use crate::fixtures::{person, FullName};
    use serde_json::json;

    #[test]
    fn single_component_gives_single_decorator() {
        let decorated: Decorated<FullName> = FullName { test_var: 9 }.decorate(person());

        assert_eq!(decorated.get("full_name").unwrap(), json!("John Hayes-Reed"));
    }

    #[test]
    fn collection_gives_ordered_decorators_with_shared_options() {
        let people = vec![person(), Record::default().with("first_name", "Jane").with("last_name", "Doe")];

        let decorated = FullName { test_var: 9 }.decorate_each(people);

        assert_eq!(decorated.len(), 2);
        assert_eq!(decorated[0].get("full_name").unwrap(), json!("John Hayes-Reed"));
        assert_eq!(decorated[1].get("full_name").unwrap(), json!("Jane Doe"));
        assert!(decorated.iter().all(|d| d.get("test_var").unwrap() == json!(9)));
    }

    #[test]
    fn boxed_components_can_be_mixed() {
        let components: Vec<Box<dyn Component>> =
            vec![Box::new(person()), Box::new(FullName { test_var: 1 }.decorate(person()))];

        let decorated = FullName { test_var: 2 }.decorate_each(components);

        assert_eq!(decorated[0].depth(), 1);
        assert_eq!(decorated[1].depth(), 2);
        assert_eq!(decorated[1].get("test_var").unwrap(), json!(2));
    }

    #[test]
    fn empty_collection_gives_no_decorators() {
        let decorated = FullName { test_var: 2 }.decorate_each(Vec::<Record>::new());

        assert!(decorated.is_empty());
    }
}
