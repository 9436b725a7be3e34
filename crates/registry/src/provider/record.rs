//! Loads a record named after the accessor.

use heck::ToUpperCamelCase;

use super::Provider;
use crate::Behavior;

/// Request parameter carrying the record identifier.
pub const ID_PARAM: &str = "id";

/// Treats the accessor name as a model name and loads the record whose
/// identifier is the `id` request parameter.
///
/// An accessor named `line_item` on a host whose lookup has `id = "7"`
/// resolves to `lookup.find("LineItem", "7")`. Without a name, a lookup
/// facility or an `id` parameter the result is absent.
#[derive(Debug, Default)]
pub struct Record;

impl Provider for Record {
	fn block(&self) -> Behavior {
		Behavior::new(|cx| {
			let model = cx.name()?.to_upper_camel_case();
			let lookup = cx.lookup()?;
			let id = lookup.param(ID_PARAM)?;
			tracing::trace!(domain = "assume", model = %model, id, "loading record");
			lookup.find(&model, id)
		})
	}
}

crate::provider!(Record);
