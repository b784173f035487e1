//! Random jokes from JokeAPI. No key required.

use serde::Deserialize;

use super::{fetch_json, ApiOutcome, Provider, Transport};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Joke {
    Single {
        joke: String,
    },
    #[serde(rename = "twopart")]
    TwoPart {
        setup: String,
        delivery: String,
    },
}

pub fn fetch(transport: &dyn Transport, base: &str) -> ApiOutcome<Joke> {
    match fetch_json::<Joke>(
        transport,
        Provider::Joke,
        base,
        &["joke", "Any"],
        &[("blacklistFlags", "nsfw,religious")],
    ) {
        Some(joke) => ApiOutcome::Success(joke),
        None => ApiOutcome::UpstreamFailure,
    }
}

#[cfg(test)]
mod tests {
    use super::super::transport::stub::StubTransport;
    use super::*;

    const BASE: &str = "https://jokes.test";

    #[test]
    fn test_single() {
        let stub = StubTransport::new().respond(
            200,
            r#"{"error":false,"category":"Programming","type":"single","joke":"X","id":1}"#,
        );

        assert_eq!(
            fetch(&stub, BASE),
            ApiOutcome::Success(Joke::Single { joke: "X".to_string() })
        );
        assert_eq!(
            stub.calls().borrow().as_slice(),
            ["https://jokes.test/joke/Any?blacklistFlags=nsfw%2Creligious"]
        );
    }

    #[test]
    fn test_twopart() {
        let stub = StubTransport::new()
            .respond(200, r#"{"type":"twopart","setup":"A","delivery":"B"}"#);

        assert_eq!(
            fetch(&stub, BASE),
            ApiOutcome::Success(Joke::TwoPart {
                setup: "A".to_string(),
                delivery: "B".to_string(),
            })
        );
    }

    #[test]
    fn test_error_payload() {
        let stub = StubTransport::new()
            .respond(200, r#"{"error":true,"internalError":false,"code":106,"message":"No matching joke found"}"#);
        assert_eq!(fetch(&stub, BASE), ApiOutcome::UpstreamFailure);
    }

    #[test]
    fn test_server_error() {
        let stub = StubTransport::new().respond(500, "");
        assert_eq!(fetch(&stub, BASE), ApiOutcome::UpstreamFailure);
    }
}
