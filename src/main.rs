mod api;
mod token;

use crate::api::{ApiClient, ApiError};

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // The token must be readable before anything goes over the network.
    let token = token::load_token().map_err(ApiError::TokenFile)?;

    let client = ApiClient::new(token);
    let collections = client.list_collections().await?;

    print!("{}", collections.render_report());
    Ok(())
}
