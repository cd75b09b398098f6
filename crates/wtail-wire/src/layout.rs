//! Offset/length table for the 384-byte record layout.
//!
//! All multi-byte integers are little-endian. The two padding regions
//! (alignment after the kind field, trailing reserved bytes) are
//! ignored on read.
//!
//! ```text
//! ┌────────┬───────────┬───────────────────────────────────────┐
//! │ Offset │ Size      │ Field                                 │
//! ├────────┼───────────┼───────────────────────────────────────┤
//! │ 0      │ 2         │ kind (i16)                            │
//! │ 2      │ 2         │ alignment padding (ignored)           │
//! │ 4      │ 4         │ pid (i32)                             │
//! │ 8      │ 32        │ device, NUL-padded                    │
//! │ 40     │ 4         │ line id, NUL-padded                   │
//! │ 44     │ 32        │ user, NUL-padded                      │
//! │ 76     │ 256       │ host, NUL-padded                      │
//! │ 332    │ 2         │ exit termination (i16)                │
//! │ 334    │ 2         │ exit code (i16)                       │
//! │ 336    │ 4         │ session (i32)                         │
//! │ 340    │ 4         │ tv_sec (i32)                          │
//! │ 344    │ 4         │ tv_usec (i32)                         │
//! │ 348    │ 16        │ address (IPv6-capable)                │
//! │ 364    │ 20        │ reserved (ignored)                    │
//! └────────┴───────────┴───────────────────────────────────────┘
//! ```

/// Size of one record on disk. There is no header, footer, or
/// delimiter — the file is a bare sequence of these blocks.
pub const RECORD_SIZE: usize = 384;

pub const KIND_OFFSET: usize = 0;
pub const PID_OFFSET: usize = 4;
pub const DEVICE_OFFSET: usize = 8;
pub const DEVICE_LEN: usize = 32;
pub const LINE_ID_OFFSET: usize = 40;
pub const LINE_ID_LEN: usize = 4;
pub const USER_OFFSET: usize = 44;
pub const USER_LEN: usize = 32;
pub const HOST_OFFSET: usize = 76;
pub const HOST_LEN: usize = 256;
pub const EXIT_TERMINATION_OFFSET: usize = 332;
pub const EXIT_CODE_OFFSET: usize = 334;
pub const SESSION_OFFSET: usize = 336;
pub const TV_SEC_OFFSET: usize = 340;
pub const TV_USEC_OFFSET: usize = 344;
pub const ADDR_OFFSET: usize = 348;
pub const ADDR_LEN: usize = 16;
pub const RESERVED_OFFSET: usize = 364;
pub const RESERVED_LEN: usize = 20;

// The table must tile the whole record.
const _: () = assert!(RESERVED_OFFSET + RESERVED_LEN == RECORD_SIZE);
const _: () = assert!(ADDR_OFFSET + ADDR_LEN == RESERVED_OFFSET);
const _: () = assert!(HOST_OFFSET + HOST_LEN == EXIT_TERMINATION_OFFSET);
