//! Teleport actions
//!
//! The matcher only picks a destination; a [`Teleporter`] carries it out.

use crate::error::GoResult;
use tracing::info;

/// Performs the jump to a chosen aetheryte
pub trait Teleporter {
    fn teleport(&mut self, id: u32, sub_id: u8) -> GoResult<()>;
}

/// Teleporter that only records requests in the log
///
/// Used when no game client is attached.
#[derive(Debug, Default)]
pub struct LogTeleporter {
    requests: Vec<(u32, u8)>,
}

impl LogTeleporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every (id, sub_id) requested so far
    pub fn requests(&self) -> &[(u32, u8)] {
        &self.requests
    }
}

impl Teleporter for LogTeleporter {
    fn teleport(&mut self, id: u32, sub_id: u8) -> GoResult<()> {
        info!("✨ Teleport requested: aetheryte {} (sub {})", id, sub_id);
        self.requests.push((id, sub_id));
        Ok(())
    }
}
