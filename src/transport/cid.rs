use serde::Deserialize;

use super::{TransportError, decode_success};
use crate::domain::CidList;

#[derive(Debug, Clone, Deserialize)]
struct CidJsonResponse {
    cidlist: Vec<String>,
}

pub fn decode_cid_json_response(json: &str) -> Result<CidList, TransportError> {
    let parsed: CidJsonResponse = decode_success(json)?;
    Ok(CidList {
        cids: parsed.cidlist,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_cid_list() {
        let parsed = decode_cid_json_response(
            r#"{"cidlist":["8103a4c628a0b98974ec1949-711261d4-5f17-4d2f-a855-5e5a8909b26e","b"]}"#,
        )
        .unwrap();
        assert_eq!(parsed.cids.len(), 2);
        assert_eq!(parsed.cids[1], "b");
    }

    #[test]
    fn decode_requires_cidlist() {
        assert!(matches!(
            decode_cid_json_response("{}"),
            Err(TransportError::Json(_))
        ));
    }
}
