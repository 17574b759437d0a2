use micro_decorator::{Component, Decorated, Decoration, Decorator, DecoratorExt, Operation, Record, Result, Value};
use serde::Serialize;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Clone, Serialize)]
struct FullName {
    title: &'static str,
}

impl FullName {
    fn full_name(this: &Decorated<Self>, _args: &[Value]) -> Result<Value> {
        let first_name = this.get("first_name")?;
        let last_name = this.get("last_name")?;
        Ok(format!(
            "{} {} {}",
            this.options().title,
            first_name.as_str().unwrap_or_default(),
            last_name.as_str().unwrap_or_default()
        )
        .into())
    }
}

impl Decoration for FullName {
    const OPERATIONS: &'static [Operation<Self>] = &[Operation::new("full_name", Self::full_name)];
}

#[derive(Debug, Clone, Copy, Serialize)]
struct Initials;

impl Initials {
    fn initials(this: &Decorated<Self>, _args: &[Value]) -> Result<Value> {
        let initial = |name: Value| name.as_str().and_then(|name| name.chars().next()).unwrap_or('?');
        Ok(format!("{}.{}.", initial(this.get("first_name")?), initial(this.get("last_name")?)).into())
    }
}

impl Decoration for Initials {
    const OPERATIONS: &'static [Operation<Self>] = &[Operation::new("initials", Self::initials)];
}

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::TRACE).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let people = vec![
        Record::default().with("first_name", "John").with("last_name", "Hayes-Reed"),
        Record::default().with("first_name", "Ada").with("last_name", "Lovelace"),
    ];

    let stacks = FullName { title: "Dr." }.and_then(Initials).decorate_each(people);

    for stacked in &stacks {
        match serde_json::to_string(stacked) {
            Ok(json) => info!(depth = stacked.depth(), %json, "flattened stack"),
            Err(e) => error!(cause = %e, "failed to flatten stack"),
        }

        match stacked.invoke("nickname", &[]) {
            Ok(nickname) => info!(%nickname, "nickname"),
            Err(e) => info!(cause = %e, supported = stacked.supports("nickname"), "no nickname"),
        }
    }
}
