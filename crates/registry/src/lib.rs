//! Per-class default resolution for assumed accessors.
//!
//! An assumed accessor is a named accessor that, when its declaration does
//! not carry an explicit implementation, falls back to a default behavior
//! configured for the host's class. This crate owns the part that decides
//! which default applies:
//!
//! - [`Class`] - class identities forming a single-inheritance forest
//! - [`Behavior`] - normalized callables producing an optional [`Value`]
//! - [`Strategy`] - the unnormalized forms a default may be given in
//! - [`Provider`] - named behavior sources discovered through [`provider!`]
//! - [`ClassResolver`] - strategy name to provider lookup by naming convention
//! - [`DefaultAssumption`] - the class to default table with inheritance walk-up
//! - [`Settings`] - TOML configuration for the process-wide fallback
//!
//! # Resolution Order
//!
//! 1. Explicit registration for the class itself
//! 2. Explicit registration for the nearest ancestor
//! 3. The registry's fallback strategy (absent unless configured)
//!
//! Named strategies are looked up when resolved, not when registered.

use std::sync::OnceLock;

pub mod behavior;
pub mod class;
pub mod error;
pub mod host;
pub mod provider;
pub mod registry;
pub mod resolver;
pub mod settings;
pub mod strategy;
pub mod value;

pub use behavior::{Arity, Behavior};
pub use class::{Ancestors, Class};
pub use error::{ConfigError, ResolveError, Result};
pub use host::{Host, Invocation, Lookup};
pub use provider::{Base, Provider, ProviderReg, ProviderStatic, Record};
pub use registry::{DefaultAssumption, Target};
pub use resolver::ClassResolver;
pub use settings::Settings;
pub use strategy::Strategy;
pub use value::Value;

#[doc(hidden)]
pub use inventory;
#[doc(hidden)]
pub use paste;

/// Namespace the built-in providers are declared under.
pub const NAMESPACE: &str = "assume::defaults";

static DEFAULTS: OnceLock<DefaultAssumption> = OnceLock::new();

/// Returns the process-wide registry, creating it on first access.
pub fn defaults() -> &'static DefaultAssumption {
	DEFAULTS.get_or_init(DefaultAssumption::new)
}
