use anyhow::Result;
use burrow_core::analyze;
use burrow_http::PageClient;
use clap::Parser;
use std::time::Duration;

mod logging;
mod report;

/// Fetch a page and print its most deeply nested text.
#[derive(Debug, Parser)]
#[command(name = "burrow", version, about)]
struct Cli {
    /// Address of the document to analyze.
    url: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 15)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // clap exits with a usage message before we get here if the URL is
    // missing, so no network access happens in that case.
    let cli = Cli::parse();

    logging::init()?;

    let client = PageClient::new()?.with_timeout(Duration::from_secs(cli.timeout));
    println!("{}", run(&client, &cli.url).await);
    Ok(())
}

/// Drive the fetch/analyze pipeline and produce the single output line.
///
/// The analyzer only ever sees lines from a successful fetch; any fetch
/// failure short-circuits to the fixed connection-error diagnostic.
async fn run(client: &PageClient, url: &str) -> String {
    match client.fetch_lines(url).await {
        Ok(lines) => report::render(analyze(&lines)),
        Err(err) => {
            tracing::warn!(%url, error = %err, "fetch failed");
            report::URL_CONNECTION_ERROR.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn end_to_end_reports_the_deepest_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                "<html>\n  <body>\n    <p>hi there</p>\n  </body>\n</html>",
            ))
            .mount(&server)
            .await;

        let client = PageClient::new().unwrap();
        assert_eq!(run(&client, &server.uri()).await, "hi there");
    }

    #[tokio::test]
    async fn malformed_document_reports_the_fixed_diagnostic() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>\n<body>"))
            .mount(&server)
            .await;

        let client = PageClient::new().unwrap();
        assert_eq!(run(&client, &server.uri()).await, report::MALFORMED_HTML);
    }

    #[tokio::test]
    async fn non_success_status_reports_a_connection_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = PageClient::new().unwrap();
        // The fetch fails, so the analyzer never runs; the body of the 404
        // is irrelevant.
        assert_eq!(
            run(&client, &server.uri()).await,
            report::URL_CONNECTION_ERROR
        );
    }

    #[tokio::test]
    async fn unreachable_server_reports_a_connection_error() {
        let client = PageClient::new()
            .unwrap()
            .with_timeout(Duration::from_secs(2));
        assert_eq!(
            run(&client, "http://127.0.0.1:1/").await,
            report::URL_CONNECTION_ERROR
        );
    }
}
