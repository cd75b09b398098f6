use wtail_types::AccountingRecord;

use crate::error::FormatError;

/// JSON line rendering — one object per record.
///
/// Field shape (order fixed by the `AccountingRecord` declaration):
///
/// ```text
/// {"type":7,"pid":1234,"device":"pts/0","id":"ts/0","user":"alice",
///  "host":"example.org","exit_status":{"termination":0,"exit":0},
///  "session":1,"time":"2023-11-14 22:13:20","addr":"10.0.0.1"}
/// ```
pub struct JsonRenderer;

impl JsonRenderer {
    /// Render one record as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Json`] if serialization fails.
    pub fn render(record: &AccountingRecord) -> Result<String, FormatError> {
        Ok(serde_json::to_string(record)?)
    }
}

#[cfg(test)]
mod tests {
    use std::net::IpAddr;

    use chrono::DateTime;
    use wtail_types::{ExitStatus, RecordKind};

    use super::*;

    #[test]
    fn renders_expected_shape() {
        let record = AccountingRecord {
            kind: RecordKind::DeadProcess,
            pid: 99,
            device: "tty1".into(),
            line_id: "1".into(),
            user: "bob".into(),
            host: "".into(),
            exit: ExitStatus {
                termination: 15,
                exit: 1,
            },
            session: 3,
            time: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            addr: "192.168.1.1".parse::<IpAddr>().unwrap(),
        };

        let line = JsonRenderer::render(&record).unwrap();
        assert_eq!(
            line,
            "{\"type\":8,\"pid\":99,\"device\":\"tty1\",\"id\":\"1\",\
             \"user\":\"bob\",\"host\":\"\",\
             \"exit_status\":{\"termination\":15,\"exit\":1},\"session\":3,\
             \"time\":\"2023-11-14 22:13:20\",\"addr\":\"192.168.1.1\"}"
        );
    }
}
