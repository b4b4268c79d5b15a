//! Typed Rust client for the SMS Aero v2 HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer
//! for wire-format quirks (the `{success, data, message}` envelope, tolerant
//! decimal costs, index-keyed maps), and a small client layer orchestrating
//! requests over HTTP Basic auth.
//!
//! ```rust,no_run
//! use smsaero::{Auth, MessageText, RawPhoneNumber, Sms, SmsAeroClient, SmsChannel};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smsaero::SmsAeroError> {
//!     let client = SmsAeroClient::new(Auth::new("user@example.com", "api-key")?);
//!     let sms = Sms::to_single_number(
//!         RawPhoneNumber::new("79990000000")?,
//!         MessageText::new("hello")?,
//!         SmsChannel::Direct,
//!         None,
//!     );
//!     let result = client.send(&sms).await?;
//!     println!("queued as {}", result.data.id);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Auth, SmsAeroClient, SmsAeroClientBuilder, SmsAeroError};
pub use domain::{
    ApiKey, BalanceResult, Email, Envelope, FlashCallCode, FlashCallStatus, MessageText,
    PhoneNumber, RawPhoneNumber, Recipients, SendingId, Sign, Sms, SmsChannel, SmsMessageResult,
    UnixTimestamp, ValidationError, ViberChannel, ViberNumberStatus, ViberSend, ViberStatus,
};
