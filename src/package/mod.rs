//! Package descriptor and install-time metadata handling

mod descriptor;
mod metadata;

pub use descriptor::*;
pub use metadata::InstallReport;
