//! Interactive catalog (`nexevent browse`)

use iocraft::prelude::*;
use tracing::info;

use crate::error::{NexEventError, Result};
use crate::repository::{ConfiguredSource, EventSource};
use crate::tui::EventCatalog;

/// Launch the catalog TUI against `source`.
pub async fn cmd_browse(source: ConfiguredSource) -> Result<()> {
    info!(source = %source.describe(), "starting catalog");
    element!(EventCatalog(source: Some(source)))
        .fullscreen()
        .await
        .map_err(|e| NexEventError::Tui(e.to_string()))
}
