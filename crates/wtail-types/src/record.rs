use std::net::{IpAddr, Ipv4Addr};

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::kind::RecordKind;

/// Time layout used by every rendering: `2023-11-14 22:13:20`.
pub const TIME_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Termination status of a dead process.
///
/// Always present in a record; only meaningful when the record kind is
/// [`RecordKind::DeadProcess`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ExitStatus {
    /// Process termination signal.
    pub termination: i16,
    /// Process exit code.
    pub exit: i16,
}

/// One decoded login-accounting record.
///
/// Field order matters: the JSON rendering emits fields in declaration
/// order, and downstream consumers rely on the shape
/// `type, pid, device, id, user, host, exit_status, session, time, addr`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AccountingRecord {
    /// Record type code.
    #[serde(rename = "type")]
    pub kind: RecordKind,

    /// Process id of the login process.
    pub pid: i32,

    /// Terminal line name, e.g. `pts/3`.
    pub device: String,

    /// Inittab id.
    #[serde(rename = "id")]
    pub line_id: String,

    /// Login name.
    pub user: String,

    /// Remote hostname, or the kernel version for run-level records.
    pub host: String,

    /// Exit status of a dead process.
    #[serde(rename = "exit_status")]
    pub exit: ExitStatus,

    /// Session id.
    pub session: i32,

    /// Time the entry was made.
    #[serde(serialize_with = "serialize_time")]
    pub time: DateTime<Utc>,

    /// Remote address, already normalized to its family.
    pub addr: IpAddr,
}

impl Default for AccountingRecord {
    fn default() -> Self {
        Self {
            kind: RecordKind::Empty,
            pid: 0,
            device: String::new(),
            line_id: String::new(),
            user: String::new(),
            host: String::new(),
            exit: ExitStatus::default(),
            session: 0,
            time: DateTime::<Utc>::UNIX_EPOCH,
            addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        }
    }
}

fn serialize_time<S: Serializer>(
    time: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&time.format(TIME_LAYOUT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_field_order_and_names() {
        let record = AccountingRecord {
            kind: RecordKind::UserProcess,
            pid: 4242,
            device: "pts/1".into(),
            line_id: "ts/1".into(),
            user: "root".into(),
            host: "example.org".into(),
            exit: ExitStatus::default(),
            session: 7,
            time: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            addr: IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            "{\"type\":7,\"pid\":4242,\"device\":\"pts/1\",\"id\":\"ts/1\",\
             \"user\":\"root\",\"host\":\"example.org\",\
             \"exit_status\":{\"termination\":0,\"exit\":0},\"session\":7,\
             \"time\":\"2023-11-14 22:13:20\",\"addr\":\"10.0.0.1\"}"
        );
    }

    #[test]
    fn ipv6_addr_renders_as_string() {
        let record = AccountingRecord {
            addr: "2001:db8::1".parse().unwrap(),
            ..AccountingRecord::default()
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"addr\":\"2001:db8::1\""));
    }
}
