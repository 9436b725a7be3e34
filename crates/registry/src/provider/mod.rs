//! Named behavior sources, registered statically via `inventory`.
//!
//! Each `provider!` invocation creates a [`ProviderStatic`] and submits it
//! via `inventory::submit!`. The [`ClassResolver`](crate::ClassResolver)
//! finds providers by qualified type name; nothing else needs to know a
//! provider exists.

mod base;
mod record;

pub use base::Base;
pub use record::{ID_PARAM, Record};

use crate::Behavior;

/// A source of default behavior.
///
/// Providers are constructed with no arguments each time they are resolved,
/// so they may carry per-resolution state but never shared state.
pub trait Provider: Send + Sync {
	fn block(&self) -> Behavior;
}

/// Static provider registration entry collected via `inventory`.
pub struct ProviderStatic {
	/// Namespace the type is declared under, e.g. [`NAMESPACE`](crate::NAMESPACE).
	pub namespace: &'static str,
	/// Type name in `UpperCamelCase`.
	pub name: &'static str,
	/// Crate that defined this provider.
	pub crate_name: &'static str,
	/// Constructs a fresh provider instance.
	pub construct: fn() -> Box<dyn Provider>,
}

impl ProviderStatic {
	/// Fully qualified type name, `namespace::Name`.
	pub fn type_name(&self) -> String {
		format!("{}::{}", self.namespace, self.name)
	}

	pub fn matches(&self, namespace: &str, name: &str) -> bool {
		self.namespace == namespace && self.name == name
	}
}

/// Wrapper for `inventory::collect!`.
pub struct ProviderReg(pub &'static ProviderStatic);

inventory::collect!(ProviderReg);

/// Iterates every provider linked into the binary.
pub fn all() -> impl Iterator<Item = &'static ProviderStatic> {
	inventory::iter::<ProviderReg>.into_iter().map(|r| r.0)
}

/// Declares a provider type discoverable by name.
///
/// The type must implement [`Provider`] and [`Default`]. Without a
/// namespace it is declared under [`NAMESPACE`](crate::NAMESPACE):
///
/// ```ignore
/// #[derive(Default)]
/// pub struct MyCustomDefault;
///
/// impl Provider for MyCustomDefault {
///     fn block(&self) -> Behavior {
///         Behavior::new(|cx| cx.name().map(Value::from))
///     }
/// }
///
/// provider!(MyCustomDefault);
/// provider!(MyCustomDefault in "my_app::defaults");
/// ```
#[macro_export]
macro_rules! provider {
	($ty:ident) => {
		$crate::provider!($ty in $crate::NAMESPACE);
	};
	($ty:ident in $ns:expr) => {
		$crate::paste::paste! {
			#[doc(hidden)]
			#[allow(non_upper_case_globals)]
			static [<PROVIDER_ $ty>]: $crate::provider::ProviderStatic = $crate::provider::ProviderStatic {
				namespace: $ns,
				name: stringify!($ty),
				crate_name: env!("CARGO_PKG_NAME"),
				construct: || -> ::std::boxed::Box<dyn $crate::provider::Provider> {
					::std::boxed::Box::new(<$ty as ::core::default::Default>::default())
				},
			};

			$crate::inventory::submit! { $crate::provider::ProviderReg(&[<PROVIDER_ $ty>]) }
		}
	};
}
