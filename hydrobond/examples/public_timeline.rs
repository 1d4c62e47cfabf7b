//! Print the newest posts of a hydrobond server's public timeline.
//!
//! Run with:
//! ```bash
//! HYDROBOND_API_URL=https://example.com/api \
//! HYDROBOND_OAUTH_URL=https://example.com/oauth \
//! HYDROBOND_ACCESS_TOKEN=... \
//! cargo run -p hydrobond --features desktop-shims --example public_timeline -- 10
//! ```
//!
//! Without `HYDROBOND_ACCESS_TOKEN` set, the authorization URL for
//! `HYDROBOND_CLIENT_ID` is printed instead.

use core_runtime::logging::{init_logging, LogLevel, LoggingConfig};
use hydrobond::{AuthorizationOptions, ClientConfig, Hydrobond, TimelineQuery};
use std::env;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_logging(LoggingConfig::default().with_level(LogLevel::Debug))?;

    let count = match env::args().nth(1) {
        Some(count) => count.parse()?,
        None => 5,
    };

    let config = ClientConfig::builder()
        .api_base_url(env::var("HYDROBOND_API_URL")?)
        .oauth_base_url(env::var("HYDROBOND_OAUTH_URL")?)
        .build()?;

    let mut options = AuthorizationOptions::default();
    options.access_token = env::var("HYDROBOND_ACCESS_TOKEN").ok();
    options.client_id = env::var("HYDROBOND_CLIENT_ID").ok();

    let client = Hydrobond::from_config(config, options);

    if client.authorization().access_token().is_empty() {
        println!("Authorize at: {}", client.authorize_url()?);
        return Ok(());
    }

    let posts = client.get_timeline(&TimelineQuery::new(count)).await?;

    for post in posts {
        println!(
            "#{} @{} ({}): {} [{} file(s)]",
            post.id,
            post.user.screen_name,
            post.created_at.to_rfc3339(),
            post.text,
            post.files.len()
        );
    }

    Ok(())
}
