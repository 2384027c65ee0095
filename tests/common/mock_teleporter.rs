//! Mock teleporter for testing

use aethergo::error::{GoError, GoResult};
use aethergo::teleport::Teleporter;
use std::sync::{Arc, Mutex};

/// Teleporter that records requests and can be told to fail
#[derive(Debug, Clone, Default)]
pub struct MockTeleporter {
    pub requests: Arc<Mutex<Vec<(u32, u8)>>>,
    pub should_fail: Arc<Mutex<bool>>,
}

impl MockTeleporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let teleporter = Self::default();
        *teleporter.should_fail.lock().unwrap() = true;
        teleporter
    }

    pub fn get_requests(&self) -> Vec<(u32, u8)> {
        self.requests.lock().unwrap().clone()
    }
}

impl Teleporter for MockTeleporter {
    fn teleport(&mut self, id: u32, sub_id: u8) -> GoResult<()> {
        if *self.should_fail.lock().unwrap() {
            return Err(GoError::Teleport("Mock teleport failure".to_string()));
        }
        self.requests.lock().unwrap().push((id, sub_id));
        Ok(())
    }
}
