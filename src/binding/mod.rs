//! Binding Well-Formed Names to their textual CPE forms.
//!
//! Two bindings are provided:
//!
//! - [`bind_to_uri`]: the legacy CPE v2.2 URI (`cpe:/a:vendor:product...`),
//!   with percent-encoding and the extended attributes packed into `edition`.
//! - [`bind_to_fs`]: the CPE v2.3 formatted string
//!   (`cpe:2.3:a:vendor:product:...`), eleven slots with backslash quoting.
//!
//! Binding is pure: it reads the name, never mutates it, and holds no state,
//! so independent names can be bound from any number of threads.
//!
//! ```
//! use cpe_tools::binding::{bind, CpeFormat};
//! use cpe_tools::model::{LogicalValue, WellFormedName};
//!
//! let wfn = WellFormedName::builder()
//!     .part("o")
//!     .vendor("linux")
//!     .product("linux_kernel")
//!     .version("2\\.6\\.0")
//!     .update(LogicalValue::Na)
//!     .build();
//!
//! assert_eq!(bind(&wfn, CpeFormat::Uri).unwrap(), "cpe:/o:linux:linux_kernel:2.6.0:-");
//! assert_eq!(
//!     bind(&wfn, CpeFormat::FormattedString).unwrap(),
//!     "cpe:2.3:o:linux:linux_kernel:2.6.0:-:*:*:*:*:*:*"
//! );
//! ```

mod encoding;
mod fs;
mod uri;

pub use encoding::{pct_encode, transform_for_fs, transform_for_uri};
pub use fs::{bind_to_fs, bind_value_for_fs, FS_PREFIX};
pub use uri::{bind_to_uri, bind_value_for_uri, pack_edition, trim_trailing_colons, URI_PREFIX};

use crate::error::Result;
use crate::model::WellFormedName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Textual CPE binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CpeFormat {
    /// CPE v2.2 URI
    Uri,
    /// CPE v2.3 formatted string
    #[serde(rename = "fs")]
    FormattedString,
}

impl fmt::Display for CpeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uri => write!(f, "uri"),
            Self::FormattedString => write!(f, "fs"),
        }
    }
}

/// Bind a WFN in the requested format
pub fn bind(wfn: &WellFormedName, format: CpeFormat) -> Result<String> {
    match format {
        CpeFormat::Uri => bind_to_uri(wfn),
        CpeFormat::FormattedString => bind_to_fs(wfn),
    }
}

impl WellFormedName {
    /// Bind this name to a CPE v2.2 URI
    pub fn to_uri(&self) -> Result<String> {
        bind_to_uri(self)
    }

    /// Bind this name to a CPE v2.3 formatted string
    pub fn to_formatted_string(&self) -> Result<String> {
        bind_to_fs(self)
    }
}
