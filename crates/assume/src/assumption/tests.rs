use std::sync::atomic::{AtomicUsize, Ordering};

use assume_registry::{Class, Host, Value};
use pretty_assertions::assert_eq;

use super::*;
use crate::Memo;

struct Widget {
	class: Class,
	memo: Memo,
	label: &'static str,
}

impl Widget {
	fn new(class: Class) -> Self {
		Self {
			class,
			memo: Memo::new(),
			label: "widget",
		}
	}
}

impl Host for Widget {
	fn class(&self) -> Class {
		self.class.clone()
	}
}

impl Assumable for Widget {
	fn memo(&self) -> &Memo {
		&self.memo
	}
}

fn text(value: Option<Value>) -> Option<String> {
	value.and_then(|v| v.as_str().map(str::to_string))
}

#[test]
fn test_block_is_used_over_class_default() {
	let registry = DefaultAssumption::new();
	let class = Class::root("Widget");
	registry.register(&class, Behavior::nullary(|| Some(Value::from("default"))));

	let host = Widget::new(class);
	let explicit = Assumption::new("resource").with_block(Behavior::nullary(|| Some(Value::from("explicit"))));
	assert_eq!(text(explicit.fetch_in(&host, &registry).unwrap()).as_deref(), Some("explicit"));
}

#[test]
fn test_default_resolved_for_actual_class() {
	let registry = DefaultAssumption::new();
	let base = Class::root("Widget");
	let sub = base.extend("FancyWidget");
	registry.register(&base, Behavior::new(|cx| cx.name().map(|n| Value::from(format!("{n}{n}")))));

	let host = Widget::new(sub);
	let value = Assumption::new("twice").fetch_in(&host, &registry).unwrap();
	assert_eq!(text(value).as_deref(), Some("twicetwice"));
}

#[test]
fn test_behavior_sees_host() {
	let registry = DefaultAssumption::new();
	let class = Class::root("Widget");
	registry.register(&class, Behavior::new(|cx| cx.host::<Widget>().map(|w| Value::from(w.label))));

	let host = Widget::new(class);
	assert_eq!(text(Assumption::new("label").fetch_in(&host, &registry).unwrap()).as_deref(), Some("widget"));
}

#[test]
fn test_result_is_memoized_per_instance() {
	static CALLS: AtomicUsize = AtomicUsize::new(0);

	let registry = DefaultAssumption::new();
	let class = Class::root("Widget");
	registry.register(
		&class,
		Behavior::nullary(|| Some(Value::new(CALLS.fetch_add(1, Ordering::SeqCst)))),
	);

	let accessor = Assumption::new("counter");
	let first = Widget::new(class.clone());
	let a = accessor.fetch_in(&first, &registry).unwrap().unwrap();
	let b = accessor.fetch_in(&first, &registry).unwrap().unwrap();
	assert!(a.ptr_eq(&b));

	let second = Widget::new(class);
	let c = accessor.fetch_in(&second, &registry).unwrap().unwrap();
	assert!(!a.ptr_eq(&c));
	assert_eq!(CALLS.load(Ordering::SeqCst), 2);
}

#[test]
fn test_absence_is_memoized() {
	let registry = DefaultAssumption::new();
	let host = Widget::new(Class::root("Widget"));
	let accessor = Assumption::new("missing");

	assert!(accessor.fetch_in(&host, &registry).unwrap().is_none());
	assert!(host.memo.contains("missing"));

	registry.set_fallback(Behavior::nullary(|| Some(Value::from("late"))));
	assert!(accessor.fetch_in(&host, &registry).unwrap().is_none());
}

#[test]
fn test_resolution_error_is_not_memoized() {
	let registry = DefaultAssumption::new();
	let class = Class::root("Widget");
	registry.register(&class, "custom");

	let host = Widget::new(class.clone());
	let accessor = Assumption::new("thing");
	assert!(matches!(accessor.fetch_in(&host, &registry), Err(ResolveError::UnknownProvider { .. })));
	assert!(host.memo.is_empty());

	registry.register(&class, Behavior::nullary(|| Some(Value::from("fixed"))));
	assert_eq!(text(accessor.fetch_in(&host, &registry).unwrap()).as_deref(), Some("fixed"));
}
