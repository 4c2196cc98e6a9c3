use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised while building or syncing the legend.
#[derive(Error, Debug)]
pub enum LegendError {
	/// A group was looked up in a `groups` list it is not part of.
	/// Signals a caller bug; the legend never falls back to offset 0.
	#[error("Group not found among configured groups: {name}")]
	GroupNotFound {
		/// Name of the group that was looked up.
		name: String,
	},

	/// The DOM around the chart canvas is not the structure `start` builds.
	#[error("Legend layout missing: {0}")]
	LayoutMissing(&'static str),

	/// A DOM call threw.
	#[error("DOM error: {0}")]
	Dom(String),

	/// JSON configuration failed to parse.
	#[error("Invalid legend configuration: {0}")]
	Config(#[from] serde_json::Error),
}

impl From<JsValue> for LegendError {
	fn from(value: JsValue) -> Self {
		let message = value
			.as_string()
			.or_else(|| {
				js_sys::Reflect::get(&value, &JsValue::from_str("message"))
					.ok()
					.and_then(|m| m.as_string())
			})
			.unwrap_or_else(|| format!("{value:?}"));
		LegendError::Dom(message)
	}
}

/// Result alias for legend operations.
pub type Result<T> = std::result::Result<T, LegendError>;
