//! Application metadata model

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Static application metadata
///
/// Uses `Cow<'static, str>` so the process-wide record can be a `const`
/// while decoded copies (on the client side) own their strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    pub version: Cow<'static, str>,
    pub author: Cow<'static, str>,
    pub license: Cow<'static, str>,
    pub status: Cow<'static, str>,
}
