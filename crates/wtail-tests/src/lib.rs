//! Shared fixtures for the integration tests.
//!
//! The production code never writes records (the log is append-only
//! from its point of view), so the builder lives here: it assembles a
//! raw 384-byte block field by field at the offsets from
//! `wtail_wire::layout`, exactly as the system writer would.

use wtail_wire::layout::{
    ADDR_LEN, ADDR_OFFSET, DEVICE_OFFSET, EXIT_CODE_OFFSET, EXIT_TERMINATION_OFFSET,
    HOST_OFFSET, KIND_OFFSET, LINE_ID_OFFSET, PID_OFFSET, SESSION_OFFSET, TV_SEC_OFFSET,
    TV_USEC_OFFSET, USER_OFFSET,
};
use wtail_wire::RECORD_SIZE;

/// Builder for one raw on-disk record block.
///
/// Starts as all zeroes (a valid Empty record) and writes each field
/// at its layout offset. Text fields shorter than their slot keep the
/// zero padding, like the real writer leaves it.
pub struct RecordFixture {
    block: [u8; RECORD_SIZE],
}

impl Default for RecordFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordFixture {
    #[must_use]
    pub fn new() -> Self {
        Self {
            block: [0u8; RECORD_SIZE],
        }
    }

    #[must_use]
    pub fn kind(mut self, code: i16) -> Self {
        self.block[KIND_OFFSET..KIND_OFFSET + 2].copy_from_slice(&code.to_le_bytes());
        self
    }

    #[must_use]
    pub fn pid(mut self, pid: i32) -> Self {
        self.block[PID_OFFSET..PID_OFFSET + 4].copy_from_slice(&pid.to_le_bytes());
        self
    }

    #[must_use]
    pub fn device(self, device: &[u8]) -> Self {
        self.text(DEVICE_OFFSET, device)
    }

    #[must_use]
    pub fn line_id(self, id: &[u8]) -> Self {
        self.text(LINE_ID_OFFSET, id)
    }

    #[must_use]
    pub fn user(self, user: &[u8]) -> Self {
        self.text(USER_OFFSET, user)
    }

    #[must_use]
    pub fn host(self, host: &[u8]) -> Self {
        self.text(HOST_OFFSET, host)
    }

    #[must_use]
    pub fn exit(mut self, termination: i16, exit: i16) -> Self {
        self.block[EXIT_TERMINATION_OFFSET..EXIT_TERMINATION_OFFSET + 2]
            .copy_from_slice(&termination.to_le_bytes());
        self.block[EXIT_CODE_OFFSET..EXIT_CODE_OFFSET + 2].copy_from_slice(&exit.to_le_bytes());
        self
    }

    #[must_use]
    pub fn session(mut self, session: i32) -> Self {
        self.block[SESSION_OFFSET..SESSION_OFFSET + 4].copy_from_slice(&session.to_le_bytes());
        self
    }

    #[must_use]
    pub fn time(mut self, sec: i32, usec: i32) -> Self {
        self.block[TV_SEC_OFFSET..TV_SEC_OFFSET + 4].copy_from_slice(&sec.to_le_bytes());
        self.block[TV_USEC_OFFSET..TV_USEC_OFFSET + 4].copy_from_slice(&usec.to_le_bytes());
        self
    }

    #[must_use]
    pub fn addr(mut self, raw: [u8; ADDR_LEN]) -> Self {
        self.block[ADDR_OFFSET..ADDR_OFFSET + ADDR_LEN].copy_from_slice(&raw);
        self
    }

    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.block.to_vec()
    }

    fn text(mut self, offset: usize, value: &[u8]) -> Self {
        self.block[offset..offset + value.len()].copy_from_slice(value);
        self
    }
}
