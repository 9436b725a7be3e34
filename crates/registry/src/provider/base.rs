use super::Provider;
use crate::Behavior;

/// The "no default" provider, used whenever no default was configured.
#[derive(Debug, Default)]
pub struct Base;

impl Provider for Base {
	fn block(&self) -> Behavior {
		Behavior::absent()
	}
}

crate::provider!(Base);
