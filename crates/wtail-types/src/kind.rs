use serde::{Serialize, Serializer};

/// Accounting record type codes.
///
/// Each variant maps to the signed 16-bit code stored in the first two
/// bytes of a record on disk (`man utmp`). Codes this version doesn't
/// recognize are captured by `Unknown(i16)` — the log format carries no
/// validity flag, so an out-of-range code is data, not corruption, and
/// is preserved rather than rejected.
///
/// ```text
/// ┌──────┬──────────────┬────────────────────────────────────┐
/// │ Code │ Variant      │ Description                        │
/// ├──────┼──────────────┼────────────────────────────────────┤
/// │ 0    │ Empty        │ Record slot is unused              │
/// │ 1    │ RunLevel     │ Runlevel change                    │
/// │ 2    │ BootTime     │ System boot                        │
/// │ 3    │ NewTime      │ Clock changed (new value)          │
/// │ 4    │ OldTime      │ Clock changed (old value)          │
/// │ 5    │ InitProcess  │ Process spawned by init            │
/// │ 6    │ LoginProcess │ Session leader for a login         │
/// │ 7    │ UserProcess  │ Normal user login                  │
/// │ 8    │ DeadProcess  │ Terminated process / logout        │
/// │ 9    │ Accounting   │ Accounting marker                  │
/// └──────┴──────────────┴────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    Empty,
    RunLevel,
    BootTime,
    NewTime,
    OldTime,
    InitProcess,
    LoginProcess,
    UserProcess,
    DeadProcess,
    Accounting,
    /// Catch-all for codes this version doesn't recognize. The raw
    /// value is preserved so it survives rendering without loss.
    Unknown(i16),
}

impl RecordKind {
    /// Return the on-disk code for this record kind.
    ///
    /// For `Unknown(code)`, returns the captured value as-is.
    #[must_use]
    pub fn code(self) -> i16 {
        match self {
            Self::Empty => 0,
            Self::RunLevel => 1,
            Self::BootTime => 2,
            Self::NewTime => 3,
            Self::OldTime => 4,
            Self::InitProcess => 5,
            Self::LoginProcess => 6,
            Self::UserProcess => 7,
            Self::DeadProcess => 8,
            Self::Accounting => 9,
            Self::Unknown(code) => code,
        }
    }

    /// Parse an on-disk code into a [`RecordKind`].
    ///
    /// Known values map to their named variant. Anything else becomes
    /// `Unknown(code)` — never an error.
    #[must_use]
    pub fn from_code(code: i16) -> Self {
        match code {
            0 => Self::Empty,
            1 => Self::RunLevel,
            2 => Self::BootTime,
            3 => Self::NewTime,
            4 => Self::OldTime,
            5 => Self::InitProcess,
            6 => Self::LoginProcess,
            7 => Self::UserProcess,
            8 => Self::DeadProcess,
            9 => Self::Accounting,
            other => Self::Unknown(other),
        }
    }
}

impl Serialize for RecordKind {
    /// Rendered as the bare numeric code, matching the on-disk value.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i16(self.code())
    }
}
