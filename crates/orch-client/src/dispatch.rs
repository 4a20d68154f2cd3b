//! Command dispatch.
//!
//! A dispatch is four steps:
//!
//! 1. **Lookup** - the command must be in the [`CommandIndex`]
//! 2. **Validate** - the argument count must match one registered shape
//! 3. **Request** - `GET {base}/api/{command}/{args...}` through a [`Transport`]
//! 4. **Classify** - decode JSON on success, map other statuses to errors
//!
//! Steps 1 and 2 fail before anything touches the network.

use orch_endpoints::CommandIndex;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::transport::{HttpResponse, Transport};

/// Validate a call and build its request path, e.g. `relocate/a/1/b/2`.
///
/// # Errors
///
/// Returns [`ClientError::UnknownCommand`] if the command is not in the
/// index, or [`ClientError::ArgumentCountMismatch`] if no registered shape
/// takes `args.len()` arguments.
pub fn build_path(index: &CommandIndex, command: &str, args: &[String]) -> Result<String, ClientError> {
    if !index.contains(command) {
        return Err(ClientError::UnknownCommand {
            command: command.to_string(),
        });
    }

    if !index.accepts(command, args.len()) {
        return Err(ClientError::ArgumentCountMismatch {
            command: command.to_string(),
            given: args.len(),
            expected: index.arities(command),
            usages: index.usage_hints(command),
        });
    }

    let mut segments = Vec::with_capacity(args.len() + 1);
    segments.push(command);
    segments.extend(args.iter().map(String::as_str));
    Ok(segments.join("/"))
}

/// Validate, send and classify one command invocation.
///
/// # Errors
///
/// Returns an error if validation fails, the transport fails, or the
/// response is classified as an error by [`classify`].
pub fn dispatch<T>(
    index: &CommandIndex,
    transport: &T,
    config: &ClientConfig,
    command: &str,
    args: &[String],
) -> Result<Value, ClientError>
where
    T: Transport + ?Sized,
{
    let path = build_path(index, command, args)?;
    let url = config.endpoint_url(&path);

    debug!(url = %url, "calling endpoint");
    let response = transport
        .get(&url, config.credentials())
        .map_err(|source| ClientError::Transport {
            command: command.to_string(),
            url: url.clone(),
            source,
        })?;

    classify(command, &url, config.base_url(), response)
}

/// Turn an HTTP response into a JSON value or a classified error.
///
/// | status      | outcome                                           |
/// |-------------|---------------------------------------------------|
/// | `< 300`     | decoded JSON, or [`ClientError::UndecodableResponse`] |
/// | `300..400`  | [`ClientError::Redirection`]                      |
/// | `400..500`  | [`ClientError::ClientRequest`]                    |
/// | `>= 500`    | [`ClientError::ServerSide`]                       |
///
/// # Errors
///
/// Returns an error for every outcome except a decodable success body.
pub fn classify(command: &str, url: &str, base_url: &str, response: HttpResponse) -> Result<Value, ClientError> {
    let HttpResponse { status, body } = response;
    let command = command.to_string();
    let url = url.to_string();

    match status {
        0..=299 => serde_json::from_str(&body).map_err(|source| {
            warn!(command = %command, status, "response is not valid JSON");
            ClientError::UndecodableResponse {
                command,
                url,
                status,
                body,
                source,
            }
        }),
        300..=399 => {
            warn!(command = %command, status, "unexpected redirect");
            Err(ClientError::Redirection {
                command,
                url,
                status,
                body,
                base_url: base_url.to_string(),
            })
        }
        400..=499 => {
            warn!(command = %command, status, "request rejected");
            Err(ClientError::ClientRequest {
                command,
                url,
                status,
                body,
            })
        }
        _ => {
            warn!(command = %command, status, "server error");
            Err(ClientError::ServerSide {
                command,
                url,
                status,
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use proptest::prelude::*;
    use test_case::test_case;

    fn sample_index() -> CommandIndex {
        CommandIndex::compile("clusters/:hint\nrelocate/:from-host/:from-port/:to-host/:to-port\n")
    }

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn builds_single_argument_path() {
        let path = build_path(&sample_index(), "clusters", &strings(&["x"])).expect("valid call");
        assert_eq!(path, "clusters/x");
    }

    #[test]
    fn builds_multi_argument_path() {
        let path = build_path(&sample_index(), "relocate", &strings(&["a", "1", "b", "2"]))
            .expect("valid call");
        assert_eq!(path, "relocate/a/1/b/2");
    }

    #[test]
    fn zero_argument_path_is_command_alone() {
        let index = CommandIndex::compile("clusters\n");
        assert_eq!(build_path(&index, "clusters", &[]).expect("valid call"), "clusters");
    }

    #[test]
    fn unknown_command_rejected() {
        let err = build_path(&sample_index(), "nope", &[]).expect_err("unknown");
        assert_eq!(err.kind(), ErrorKind::UnknownCommand);
    }

    #[test]
    fn wrong_arity_rejected_with_usage() {
        let err = build_path(&sample_index(), "relocate", &strings(&["a"])).expect_err("bad arity");
        match err {
            ClientError::ArgumentCountMismatch {
                given,
                expected,
                usages,
                ..
            } => {
                assert_eq!(given, 1);
                assert_eq!(expected, vec![4]);
                assert_eq!(usages, vec!["['from-host', 'from-port', 'to-host', 'to-port']"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test_case(200, ErrorKind::ServerSide ; "ok with bad body")]
    #[test_case(302, ErrorKind::Redirection ; "found")]
    #[test_case(399, ErrorKind::Redirection ; "upper redirect bound")]
    #[test_case(400, ErrorKind::ClientRequest ; "bad request")]
    #[test_case(404, ErrorKind::ClientRequest ; "not found")]
    #[test_case(499, ErrorKind::ClientRequest ; "upper client bound")]
    #[test_case(500, ErrorKind::ServerSide ; "internal error")]
    #[test_case(503, ErrorKind::ServerSide ; "unavailable")]
    fn classify_error_statuses(status: u16, kind: ErrorKind) {
        let err = classify("clusters", "http://h/api/clusters", "http://h/api/", HttpResponse::new(status, "not json"))
            .expect_err("should be an error");
        assert_eq!(err.kind(), kind);
        assert_eq!(err.status(), Some(status));
        assert_eq!(err.body(), Some("not json"));
        assert_eq!(err.command(), Some("clusters"));
        assert_eq!(err.url(), Some("http://h/api/clusters"));
    }

    #[test_case(200 ; "ok")]
    #[test_case(201 ; "created")]
    #[test_case(299 ; "upper success bound")]
    fn classify_success_decodes_json(status: u16) {
        let value = classify("clusters", "http://h/api/clusters", "http://h/api/", HttpResponse::new(status, r#"{"ok":true}"#))
            .expect("success");
        assert_eq!(value, serde_json::json!({ "ok": true }));
    }

    #[test]
    fn classify_decodes_json_arrays() {
        let value = classify("clusters", "http://h/api/clusters", "http://h/api/", HttpResponse::new(200, r#"["a","b"]"#))
            .expect("success");
        assert_eq!(value, serde_json::json!(["a", "b"]));
    }

    proptest! {
        #[test]
        fn path_has_one_segment_per_argument(args in prop::collection::vec("[a-z0-9.-]{1,10}", 4)) {
            let path = build_path(&sample_index(), "relocate", &args).expect("valid call");
            let segments: Vec<&str> = path.split('/').collect();
            prop_assert_eq!(segments.len(), 5);
            prop_assert_eq!(segments[0], "relocate");
            let expected: Vec<&str> = args.iter().map(String::as_str).collect();
            prop_assert_eq!(&segments[1..], expected.as_slice());
        }

        #[test]
        fn unregistered_arity_is_rejected(count in 0usize..10) {
            prop_assume!(count != 4);
            let args = vec!["x".to_string(); count];
            let err = build_path(&sample_index(), "relocate", &args).expect_err("bad arity");
            prop_assert_eq!(err.kind(), ErrorKind::ArgumentCountMismatch);
        }
    }
}
