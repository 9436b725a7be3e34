//! The class to default table.
//!
//! [`DefaultAssumption`] maps class identities to [`Strategy`]s and resolves
//! a class to the [`Behavior`] that applies to it by walking the inheritance
//! chain one superclass at a time.
//!
//! # Snapshots
//!
//! The table, the fallback and the namespace each live behind an
//! [`ArcSwap`]. Readers load a snapshot and never block; [`register`] copies
//! the table and swaps the copy in. Registration is expected to happen while
//! the host application configures itself, before accessors are used.
//!
//! [`register`]: DefaultAssumption::register

use std::sync::Arc;

use arc_swap::ArcSwap;
use rustc_hash::FxHashMap as HashMap;

use crate::provider::Base;
use crate::{Behavior, Class, ClassResolver, NAMESPACE, Provider, Result, Settings, Strategy};


/// What to resolve: a class, or a strategy name with no class context.
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
	Class(&'a Class),
	Symbol(&'a str),
}

impl<'a> From<&'a Class> for Target<'a> {
	fn from(class: &'a Class) -> Self {
		Target::Class(class)
	}
}

impl<'a> From<&'a str> for Target<'a> {
	fn from(symbol: &'a str) -> Self {
		Target::Symbol(symbol)
	}
}

/// Registry of per-class defaults with a fallback for unregistered chains.
///
/// The registry is total: every class resolves to something, because a
/// chain with no registration resolves to the fallback strategy. The
/// fallback is normalized again on every such miss and never written back
/// into the table, so changing it takes effect for all unregistered
/// classes immediately.
pub struct DefaultAssumption {
	entries: ArcSwap<HashMap<Box<str>, Strategy>>,
	fallback: ArcSwap<Strategy>,
	namespace: ArcSwap<String>,
}

impl Default for DefaultAssumption {
	fn default() -> Self {
		Self::new()
	}
}

impl DefaultAssumption {
	/// Creates an empty registry with an absent fallback.
	pub fn new() -> Self {
		Self::with_namespace(NAMESPACE)
	}

	/// Creates an empty registry that looks providers up under `namespace`.
	pub fn with_namespace(namespace: impl Into<String>) -> Self {
		Self {
			entries: ArcSwap::from_pointee(HashMap::default()),
			fallback: ArcSwap::from_pointee(Strategy::Absent),
			namespace: ArcSwap::from_pointee(namespace.into()),
		}
	}

	/// Stores `given` as the default for `class`, replacing any previous entry.
	///
	/// Named strategies are stored unresolved. A name with no matching
	/// provider is logged here but only fails when resolved.
	pub fn register(&self, class: &Class, given: impl Into<Strategy>) {
		let strategy = given.into();

		if let Some(name) = strategy.name()
			&& let Err(error) = ClassResolver::new(name, &self.namespace()).find()
		{
			tracing::warn!(
				domain = "assume",
				class = class.name(),
				strategy = name,
				%error,
				"registered strategy will fail to resolve",
			);
		}

		tracing::debug!(domain = "assume", class = class.name(), strategy = %strategy, "registering default");

		let key: Box<str> = class.name().into();
		self.entries.rcu(|entries| {
			let mut next = HashMap::clone(entries);
			next.insert(key.clone(), strategy.clone());
			next
		});
	}

	/// Returns the explicit registration for `class` itself, ignoring ancestors.
	pub fn entry(&self, class: &Class) -> Option<Strategy> {
		self.entries.load().get(class.name()).cloned()
	}

	pub fn is_registered(&self, class: &Class) -> bool {
		self.entries.load().contains_key(class.name())
	}

	pub fn len(&self) -> usize {
		self.entries.load().len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.load().is_empty()
	}

	/// The strategy used when a chain has no registration.
	pub fn fallback(&self) -> Strategy {
		Strategy::clone(&self.fallback.load())
	}

	pub fn set_fallback(&self, given: impl Into<Strategy>) {
		let strategy = given.into();
		tracing::debug!(domain = "assume", strategy = %strategy, "setting fallback default");
		self.fallback.store(Arc::new(strategy));
	}

	/// Namespace named strategies are resolved under.
	pub fn namespace(&self) -> Arc<String> {
		self.namespace.load_full()
	}

	pub fn set_namespace(&self, namespace: impl Into<String>) {
		self.namespace.store(Arc::new(namespace.into()));
	}

	/// Applies loaded settings: the fallback always, the namespace if given.
	pub fn configure(&self, settings: &Settings) {
		self.set_fallback(settings.strategy());
		if let Some(namespace) = &settings.namespace {
			self.set_namespace(namespace.as_str());
		}
	}

	/// Drops every registration and restores the fallback and namespace.
	pub fn reset(&self) {
		self.entries.store(Arc::new(HashMap::default()));
		self.fallback.store(Arc::new(Strategy::Absent));
		self.namespace.store(Arc::new(NAMESPACE.to_string()));
	}

	/// Turns a strategy into a behavior.
	///
	/// Behaviors are returned as-is, names go through the [`ClassResolver`]
	/// and absence becomes the [`Base`] provider's behavior.
	///
	/// # Errors
	///
	/// Returns [`ResolveError::UnknownProvider`](crate::ResolveError::UnknownProvider)
	/// for a name with no provider under the namespace, and
	/// [`ResolveError::AmbiguousProvider`](crate::ResolveError::AmbiguousProvider)
	/// when several providers claim it.
	pub fn normalize(&self, given: &Strategy) -> Result<Behavior> {
		match given {
			Strategy::Behavior(behavior) => Ok(behavior.clone()),
			Strategy::Named(name) => {
				let namespace = self.namespace();
				Ok(ClassResolver::new(name, &namespace).instance()?.block())
			}
			Strategy::Absent => Ok(Base.block()),
		}
	}

	/// Resolves the behavior that applies to a class or strategy name.
	///
	/// A name is normalized directly. A class is looked up, then each
	/// superclass in turn; the first explicit registration wins. A chain
	/// with no registration resolves to the fallback.
	pub fn resolve<'a>(&self, target: impl Into<Target<'a>>) -> Result<Behavior> {
		let class = match target.into() {
			Target::Symbol(symbol) => return self.normalize(&Strategy::named(symbol)),
			Target::Class(class) => class,
		};

		let hit = {
			let entries = self.entries.load();
			class
				.ancestors()
				.find_map(|c| entries.get(c.name()).map(|s| (c, s.clone())))
		};

		match hit {
			Some((owner, strategy)) => {
				tracing::trace!(domain = "assume", class = class.name(), owner = owner.name(), "resolved default");
				self.normalize(&strategy)
			}
			None => {
				tracing::trace!(domain = "assume", class = class.name(), "no default registered; using fallback");
				self.normalize(&self.fallback())
			}
		}
	}
}
