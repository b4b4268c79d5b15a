use std::io;

use smsaero::{Auth, SmsAeroClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let email = std::env::var("SMSAERO_EMAIL").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSAERO_EMAIL environment variable is required",
        )
    })?;
    let api_key = std::env::var("SMSAERO_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSAERO_API_KEY environment variable is required",
        )
    })?;

    let client = SmsAeroClient::new(Auth::new(email, api_key)?);

    let auth = client.auth().await?;
    println!("auth: {}", auth.message.as_deref().unwrap_or("ok"));

    let balance = client.balance().await?;
    println!("balance: {}", balance.data.balance);

    Ok(())
}
