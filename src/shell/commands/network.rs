use serde_json::json;
use snafu::{OptionExt, ensure};
use tracing::debug;

use crate::filesystem::FileSystem;
use crate::shell::error::{CommandError, NoUrlSnafu, UnsupportedProtocolSnafu};
use crate::shell::output::{CommandOutput, Transition};

const SUPPORTED_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Answers with a canned payload. No request ever leaves the process.
pub fn curl(fs: &FileSystem, args: &[&str]) -> Result<Transition, CommandError> {
    let url = args.first().copied().context(NoUrlSnafu)?;
    ensure!(
        SUPPORTED_SCHEMES
            .iter()
            .any(|scheme| url.starts_with(scheme)),
        UnsupportedProtocolSnafu { url }
    );

    let body = if url.contains("api") || url.contains("json") {
        json_payload(url)
    } else {
        html_payload(url)
    };
    debug!("Simulated response for {} ({} bytes)", url, body.len());

    Ok(Transition::unchanged(fs, CommandOutput::success(body)))
}

fn json_payload(url: &str) -> String {
    let payload = json!({
        "status": "success",
        "url": url,
        "data": {
            "id": 1,
            "title": "Simulated response",
            "message": "This response was generated locally, no request was sent."
        }
    });
    serde_json::to_string_pretty(&payload).unwrap_or_else(|_| payload.to_string())
}

fn html_payload(url: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
<html>\n\
<head>\n  <title>Simulated Page</title>\n</head>\n\
<body>\n  <h1>Simulated response</h1>\n  <p>Content of {url}</p>\n</body>\n\
</html>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::Seed;
    use rstest::*;

    #[fixture]
    fn fs() -> FileSystem {
        Seed::default().build().expect("default seed should build")
    }

    #[rstest]
    #[case("http://api.example.com")]
    #[case("https://example.com/data.json")]
    fn api_urls_get_json(fs: FileSystem, #[case] url: &str) {
        let output = curl(&fs, &[url]).expect("curl should succeed").output;
        assert!(!output.error);

        let parsed: serde_json::Value =
            serde_json::from_str(&output.output).expect("payload should be JSON");
        assert_eq!(parsed["url"], url);
        assert_eq!(parsed["data"]["id"], 1);
        assert!(output.output.contains("\"id\": 1"));
    }

    #[rstest]
    fn other_urls_get_html(fs: FileSystem) {
        let output = curl(&fs, &["https://example.com"])
            .expect("curl should succeed")
            .output;
        assert!(output.output.starts_with("<!DOCTYPE html>"));
        assert!(output.output.contains("https://example.com"));
    }

    #[rstest]
    fn missing_url_is_reported(fs: FileSystem) {
        assert_eq!(
            curl(&fs, &[]).expect_err("curl should fail").to_string(),
            "curl: no URL specified"
        );
    }

    #[rstest]
    #[case("ftp://x")]
    #[case("example.com")]
    #[case("HTTP//broken")]
    fn unsupported_schemes_are_rejected(fs: FileSystem, #[case] url: &str) {
        let error = curl(&fs, &[url]).expect_err("curl should fail");
        assert!(error.to_string().contains("Protocol not supported"));
        assert_eq!(error, CommandError::UnsupportedProtocol { url: url.into() });
    }

    #[rstest]
    fn curl_never_touches_the_tree(fs: FileSystem) {
        let transition = curl(&fs, &["http://api.example.com"]).expect("curl should succeed");
        assert_eq!(transition.state, fs);
    }
}
