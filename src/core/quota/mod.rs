//! Disk quota polling core.
//!
//! The quota tool is run on a timer, its output parsed into
//! [`QuotaRecord`]s and folded into the observable [`DiskQuota`] state.

mod model;
mod parser;
mod poller;
mod record;
mod runtime;
mod state;
mod status;

pub use model::{QuotaListModel, RowChange};
pub use parser::{parse_line, parse_output};
pub use poller::{run_tool, QuotaPoller};
pub use record::QuotaRecord;
pub use runtime::PollerRuntime;
pub use state::{Change, DiskQuota, PollHealth, Property, QuotaSnapshot, QuotaState};
pub use status::{icon_name_for, overall_percent, IconTier, OverallStatus};
