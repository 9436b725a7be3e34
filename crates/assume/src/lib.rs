//! Memoized accessors that fall back to per-class defaults.
//!
//! A host type implements [`Assumable`] and declares accessors with
//! [`assume!`]. An accessor declared with a behavior uses it; one declared
//! without resolves the default registered for the host's class (or the
//! nearest ancestor) in the process-wide [`defaults`] registry. Either way
//! the result is computed on first access and memoized on the instance.
//!
//! ```ignore
//! static CONTROLLER: LazyLock<Class> = LazyLock::new(|| Class::root("WidgetsController"));
//!
//! struct WidgetsController {
//!     memo: Memo,
//! }
//!
//! impl Host for WidgetsController {
//!     fn class(&self) -> Class {
//!         CONTROLLER.clone()
//!     }
//! }
//!
//! impl Assumable for WidgetsController {
//!     fn memo(&self) -> &Memo {
//!         &self.memo
//!     }
//! }
//!
//! impl WidgetsController {
//!     assume!(pub fn widget);
//!     assume!(pub fn title = Behavior::nullary(|| Some(Value::from("Widgets"))));
//! }
//!
//! default_assumption(&CONTROLLER, "record");
//! ```

pub mod assumption;
pub mod memo;

#[cfg(test)]
#[allow(unused_imports, reason = "serial_test is only needed by the integration tests")]
use serial_test as _;

pub use assume_registry::{
	Arity, Base, Behavior, Class, ClassResolver, ConfigError, DefaultAssumption, Host, Invocation, Lookup, NAMESPACE, Provider,
	Record, ResolveError, Settings, Strategy, Target, Value, defaults, provider,
};
pub use assumption::Assumption;
pub use memo::Memo;

/// A [`Host`] that can memoize assumed accessor results.
pub trait Assumable: Host {
	fn memo(&self) -> &Memo;
}

/// Registers the default for `class` in the process-wide registry.
pub fn default_assumption(class: &Class, given: impl Into<Strategy>) {
	defaults().register(class, given);
}

/// Declares an assumed accessor method inside an `impl` block of an
/// [`Assumable`] type.
///
/// The method returns `Result<Option<Value>, ResolveError>`. With `= expr`
/// the expression must evaluate to a [`Behavior`] used instead of the
/// class default.
#[macro_export]
macro_rules! assume {
	($(#[$attr:meta])* $vis:vis fn $name:ident) => {
		$(#[$attr])*
		$vis fn $name(&self) -> ::core::result::Result<::core::option::Option<$crate::Value>, $crate::ResolveError> {
			$crate::Assumption::new(stringify!($name)).fetch(self)
		}
	};
	($(#[$attr:meta])* $vis:vis fn $name:ident = $block:expr) => {
		$(#[$attr])*
		$vis fn $name(&self) -> ::core::result::Result<::core::option::Option<$crate::Value>, $crate::ResolveError> {
			$crate::Assumption::new(stringify!($name)).with_block($block).fetch(self)
		}
	};
}
