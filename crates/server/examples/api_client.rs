//! Examples for using the textproc server API
//!
//! Start the server first: `cargo run -p textproc-server`.

use reqwest::Client;

const SERVER_URL: &str = "http://localhost:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = Client::new();

    // Example 1: Normalize a form-encoded body
    println!("1. Normalize Text:");
    let resp = client
        .post(format!("{SERVER_URL}/process"))
        .form(&[("text", "  The quick\tbrown\n\nfox  ")])
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {:?}", resp.text().await?);
    println!();

    // Example 2: Missing field
    println!("2. Missing Text:");
    let resp = client
        .post(format!("{SERVER_URL}/process"))
        .form(&[("other", "value")])
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {:?}", resp.text().await?);
    println!();

    // Example 3: Wrong method
    println!("3. GET Request:");
    let resp = client
        .get(format!("{SERVER_URL}/process?text=hello"))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {:?}", resp.text().await?);

    Ok(())
}
