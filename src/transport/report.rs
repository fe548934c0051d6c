use serde::Deserialize;

use super::id::TransportId;
use super::{TransportError, decode_success};
use crate::domain::{MsgId, ReceivedReport};

#[derive(Debug, Clone, Deserialize)]
struct ReceivedJsonEntry {
    msg_id: TransportId,
    #[serde(default)]
    android_received: Option<u64>,
    #[serde(default)]
    ios_apns_sent: Option<u64>,
    #[serde(default)]
    ios_apns_received: Option<u64>,
    #[serde(default)]
    ios_msg_received: Option<u64>,
    #[serde(default)]
    wp_mpns_sent: Option<u64>,
}

/// Value of the `msg_ids` query parameter.
pub fn encode_msg_ids(msg_ids: &[MsgId]) -> String {
    msg_ids
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

pub fn decode_received_json_response(json: &str) -> Result<Vec<ReceivedReport>, TransportError> {
    let parsed: Vec<ReceivedJsonEntry> = decode_success(json)?;
    parsed
        .into_iter()
        .map(|entry| {
            Ok(ReceivedReport {
                msg_id: entry.msg_id.into_msg_id()?,
                android_received: entry.android_received,
                ios_apns_sent: entry.ios_apns_sent,
                ios_apns_received: entry.ios_apns_received,
                ios_msg_received: entry.ios_msg_received,
                wp_mpns_sent: entry.wp_mpns_sent,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_msg_ids_joins_with_commas() {
        assert_eq!(
            encode_msg_ids(&[MsgId::new(1613113584), MsgId::new(2)]),
            "1613113584,2"
        );
    }

    #[test]
    fn decode_received_report() {
        let json = r#"
        [
          {
            "android_received": 62,
            "ios_apns_sent": 11,
            "ios_apns_received": null,
            "ios_msg_received": null,
            "wp_mpns_sent": null,
            "msg_id": 1613113584
          },
          { "msg_id": "1613113585" }
        ]
        "#;

        let parsed = decode_received_json_response(json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].msg_id, MsgId::new(1613113584));
        assert_eq!(parsed[0].android_received, Some(62));
        assert_eq!(parsed[0].ios_apns_sent, Some(11));
        assert_eq!(parsed[0].ios_apns_received, None);
        assert_eq!(parsed[1].msg_id, MsgId::new(1613113585));
        assert_eq!(parsed[1].android_received, None);
    }

    #[test]
    fn decode_single_entry_report() {
        let parsed =
            decode_received_json_response(r#"[{"msg_id":1613113584,"android_received":62}]"#)
                .unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].msg_id, MsgId::new(1613113584));
        assert_eq!(parsed[0].android_received, Some(62));
    }

    #[test]
    fn decode_empty_report() {
        assert!(decode_received_json_response("[]").unwrap().is_empty());
    }

    #[test]
    fn decode_report_rejects_error_envelope_and_object_body() {
        let err = decode_received_json_response(
            r#"{"error":{"code":1011,"message":"cannot find msg_id"}}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            TransportError::ErrorEnvelope {
                code: Some(1011),
                ..
            }
        ));

        let err = decode_received_json_response(r#"{"msg_id":1}"#).unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }
}
