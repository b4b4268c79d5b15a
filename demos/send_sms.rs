use std::io;

use smsaero::{Auth, MessageText, RawPhoneNumber, Sms, SmsAeroClient, SmsChannel};

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
    let phone_raw = std::env::var("SMSAERO_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSAERO_PHONE environment variable is required",
        )
    })?;
    let message = std::env::var("SMSAERO_MESSAGE")
        .unwrap_or_else(|_| "Hello from the smsaero example.".to_owned());

    let client = SmsAeroClient::new(Auth::new(email, api_key)?);
    let sms = Sms::to_single_number(
        RawPhoneNumber::new(phone_raw)?,
        MessageText::new(message)?,
        SmsChannel::Direct,
        None,
    );

    let result = client.send(&sms).await?;
    println!(
        "id: {}, status: {} ({}), cost: {}",
        result.data.id, result.data.status, result.data.extend_status, result.data.cost
    );

    Ok(())
}
