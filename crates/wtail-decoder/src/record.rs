use chrono::DateTime;
use wtail_types::{AccountingRecord, ExitStatus, RecordKind};
use wtail_wire::fields::{
    check_block_len, read_addr, read_i16_le, read_i32_le, read_text, read_timeval,
};
use wtail_wire::layout::{
    ADDR_OFFSET, DEVICE_LEN, DEVICE_OFFSET, EXIT_CODE_OFFSET, EXIT_TERMINATION_OFFSET,
    HOST_LEN, HOST_OFFSET, KIND_OFFSET, LINE_ID_LEN, LINE_ID_OFFSET, PID_OFFSET,
    SESSION_OFFSET, TV_SEC_OFFSET, TV_USEC_OFFSET, USER_LEN, USER_OFFSET,
};
use wtail_wire::WireError;

/// Decode one raw record block into an [`AccountingRecord`].
///
/// The parse is total for well-formed input: any content of a full
/// block decodes to a record — unknown kind codes, binary garbage in
/// text fields, and out-of-range timestamps are all representable.
/// Only the block size can fail it.
///
/// # Errors
///
/// Returns [`WireError::UnexpectedEof`] if `block` is not exactly
/// [`RECORD_SIZE`](wtail_wire::RECORD_SIZE) bytes.
pub fn decode_record(block: &[u8]) -> Result<AccountingRecord, WireError> {
    check_block_len(block)?;

    let (sec, nsec) = read_timeval(
        read_i32_le(block, TV_SEC_OFFSET),
        read_i32_le(block, TV_USEC_OFFSET),
    );
    // read_timeval keeps nsec in range, so this cannot be None.
    let time = DateTime::from_timestamp(sec, nsec).unwrap_or(DateTime::UNIX_EPOCH);

    Ok(AccountingRecord {
        kind: RecordKind::from_code(read_i16_le(block, KIND_OFFSET)),
        pid: read_i32_le(block, PID_OFFSET),
        device: read_text(block, DEVICE_OFFSET, DEVICE_LEN),
        line_id: read_text(block, LINE_ID_OFFSET, LINE_ID_LEN),
        user: read_text(block, USER_OFFSET, USER_LEN),
        host: read_text(block, HOST_OFFSET, HOST_LEN),
        exit: ExitStatus {
            termination: read_i16_le(block, EXIT_TERMINATION_OFFSET),
            exit: read_i16_le(block, EXIT_CODE_OFFSET),
        },
        session: read_i32_le(block, SESSION_OFFSET),
        time,
        addr: read_addr(block, ADDR_OFFSET),
    })
}
