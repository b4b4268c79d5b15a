//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{
    ApiKey, BalanceResult, Email, Envelope, FlashCallCode, FlashCallStatus, RawPhoneNumber,
    Recipients, SendingId, Sms, SmsMessageResult, ValidationError, ViberNumberStatus, ViberSend,
    ViberStatus,
};
use crate::transport;
use crate::transport::DecodeError;

const DEFAULT_BASE_URL: &str = "https://gate.smsaero.ru";

const AUTH_PATH: &str = "/v2/auth";
const SMS_TESTSEND_PATH: &str = "/v2/sms/testsend";
const SMS_SEND_PATH: &str = "/v2/sms/send";
const BALANCE_PATH: &str = "/v2/balance";
const FLASHCALL_SEND_PATH: &str = "/v2/flashcall/send";
const VIBER_SEND_PATH: &str = "/v2/viber/send";
const VIBER_STATISTIC_PATH: &str = "/v2/viber/statistic";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        auth: &'a Auth,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        auth: &'a Auth,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .basic_auth(auth.email.as_str(), Some(auth.api_key.as_str()))
                .form(&params)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// HTTP Basic credentials attached to every SMS Aero request.
pub struct Auth {
    email: Email,
    api_key: ApiKey,
}

impl Auth {
    /// Create validated credentials (account email + API key).
    pub fn new(
        email: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            email: Email::new(email)?,
            api_key: ApiKey::new(api_key)?,
        })
    }

    /// The email used as the HTTP Basic username.
    pub fn email(&self) -> &Email {
        &self.email
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmsAeroClient`].
///
/// Exactly three kinds are surfaced:
/// - [`SmsAeroError::InvalidInput`] is raised locally before any network call,
/// - [`SmsAeroError::BadResponse`] means the call completed but the body did
///   not match the expected envelope/data shape,
/// - [`SmsAeroError::Transport`] covers network failures and application-level
///   failures (`success: false`), which carry the remote message.
pub enum SmsAeroError {
    /// A domain constructor or a call-time cardinality check rejected the input.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// Response body could not be parsed as the expected envelope/data shape.
    #[error("bad response: {0}")]
    BadResponse(#[source] Box<dyn StdError + Send + Sync>),

    /// Network-level failure, or the gateway reported `success: false`.
    #[error("transport error: HTTP {status:?} {message:?}")]
    Transport {
        status: Option<u16>,
        message: Option<String>,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
}

#[derive(Debug, Clone)]
/// Builder for [`SmsAeroClient`].
///
/// Use this when you need to customize the gateway base URL, timeout, or
/// user-agent.
pub struct SmsAeroClientBuilder {
    auth: Auth,
    base_url: Url,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SmsAeroClientBuilder {
    /// Create a builder with the default gateway and no timeout/user-agent override.
    pub fn new(auth: Auth) -> Self {
        Self {
            auth,
            base_url: default_base_url(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the gateway base URL. Versioned paths (`/v2/...`) are joined
    /// onto it.
    pub fn base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`SmsAeroClient`].
    pub fn build(self) -> Result<SmsAeroClient, SmsAeroError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder.build().map_err(|err| SmsAeroError::Transport {
            status: None,
            message: None,
            source: Some(Box::new(err)),
        })?;

        Ok(SmsAeroClient {
            auth: self.auth,
            base_url: self.base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level SMS Aero client.
///
/// One method per gateway capability; each orchestrates request validation,
/// form encoding, the HTTP call, and envelope decoding. The default gateway is
/// `https://gate.smsaero.ru` and every request carries HTTP Basic credentials.
///
/// The client holds no per-call mutable state; clones share one transport and
/// may be used concurrently.
pub struct SmsAeroClient {
    auth: Auth,
    base_url: Url,
    http: Arc<dyn HttpTransport>,
}

impl SmsAeroClient {
    /// Create a client for the default gateway.
    ///
    /// For more customization, use [`SmsAeroClient::builder`].
    pub fn new(auth: Auth) -> Self {
        Self {
            auth,
            base_url: default_base_url(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(auth: Auth) -> SmsAeroClientBuilder {
        SmsAeroClientBuilder::new(auth)
    }

    /// Verify the credentials against `/v2/auth`.
    ///
    /// A successful response carries no data, only the remote confirmation
    /// message.
    pub async fn auth(&self) -> Result<Envelope<()>, SmsAeroError> {
        let response = self.call(AUTH_PATH, Vec::new()).await?;
        classify(
            response.status,
            transport::decode_envelope::<transport::NoData>(response.status, &response.body),
        )
    }

    /// Send an SMS to its single recipient without actual delivery
    /// (`/v2/sms/testsend`).
    ///
    /// Errors with [`SmsAeroError::InvalidInput`] before any network call if
    /// the request addresses multiple numbers.
    pub async fn test_send(&self, sms: &Sms) -> Result<Envelope<SmsMessageResult>, SmsAeroError> {
        require_single(sms.recipients(), "test_send")?;
        let response = self
            .call(SMS_TESTSEND_PATH, transport::encode_sms_form(sms))
            .await?;
        classify(
            response.status,
            transport::decode_sms_message_response(response.status, &response.body),
        )
    }

    /// Send an SMS to its single recipient (`/v2/sms/send`).
    ///
    /// Errors with [`SmsAeroError::InvalidInput`] before any network call if
    /// the request addresses multiple numbers.
    pub async fn send(&self, sms: &Sms) -> Result<Envelope<SmsMessageResult>, SmsAeroError> {
        require_single(sms.recipients(), "send")?;
        let response = self
            .call(SMS_SEND_PATH, transport::encode_sms_form(sms))
            .await?;
        classify(
            response.status,
            transport::decode_sms_message_response(response.status, &response.body),
        )
    }

    /// Send an SMS to a list of recipients (`/v2/sms/send`).
    ///
    /// Same physical endpoint as [`send`](Self::send); the gateway switches to
    /// a per-recipient result array based on the request cardinality. Errors
    /// with [`SmsAeroError::InvalidInput`] before any network call if the
    /// request addresses a single number.
    pub async fn bulk_send(
        &self,
        sms: &Sms,
    ) -> Result<Envelope<Vec<SmsMessageResult>>, SmsAeroError> {
        require_multiple(sms.recipients(), "bulk_send")?;
        let response = self
            .call(SMS_SEND_PATH, transport::encode_sms_form(sms))
            .await?;
        classify(
            response.status,
            transport::decode_sms_message_list_response(response.status, &response.body),
        )
    }

    /// Query the account balance (`/v2/balance`).
    pub async fn balance(&self) -> Result<Envelope<BalanceResult>, SmsAeroError> {
        let response = self.call(BALANCE_PATH, Vec::new()).await?;
        classify(
            response.status,
            transport::decode_balance_response(response.status, &response.body),
        )
    }

    /// Deliver a verification code via a flash call (`/v2/flashcall/send`).
    pub async fn flash_call(
        &self,
        phone: &RawPhoneNumber,
        code: &FlashCallCode,
    ) -> Result<Envelope<FlashCallStatus>, SmsAeroError> {
        let response = self
            .call(
                FLASHCALL_SEND_PATH,
                transport::encode_flash_call_form(phone, code),
            )
            .await?;
        classify(
            response.status,
            transport::decode_flash_call_response(response.status, &response.body),
        )
    }

    /// Send a Viber message to one or many recipients (`/v2/viber/send`).
    pub async fn viber_send(
        &self,
        request: &ViberSend,
    ) -> Result<Envelope<ViberStatus>, SmsAeroError> {
        let response = self
            .call(VIBER_SEND_PATH, transport::encode_viber_send_form(request))
            .await?;
        classify(
            response.status,
            transport::decode_viber_send_response(response.status, &response.body),
        )
    }

    /// Fetch per-recipient delivery records for a Viber dispatch
    /// (`/v2/viber/statistic`).
    pub async fn viber_statistic(
        &self,
        sending_id: SendingId,
    ) -> Result<Envelope<Vec<ViberNumberStatus>>, SmsAeroError> {
        let response = self
            .call(
                VIBER_STATISTIC_PATH,
                transport::encode_viber_statistic_form(sending_id),
            )
            .await?;
        classify(
            response.status,
            transport::decode_viber_statistic_response(response.status, &response.body),
        )
    }

    async fn call(
        &self,
        path: &str,
        params: Vec<(String, String)>,
    ) -> Result<HttpResponse, SmsAeroError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|err| SmsAeroError::Transport {
                status: None,
                message: None,
                source: Some(Box::new(err)),
            })?;

        self.http
            .post_form(url.as_str(), &self.auth, params)
            .await
            .map_err(|err| SmsAeroError::Transport {
                status: None,
                message: None,
                source: Some(err),
            })
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid")
}

fn require_single(
    recipients: &Recipients,
    operation: &'static str,
) -> Result<(), ValidationError> {
    if recipients.is_single() {
        Ok(())
    } else {
        Err(ValidationError::SingleRecipientRequired { operation })
    }
}

fn require_multiple(
    recipients: &Recipients,
    operation: &'static str,
) -> Result<(), ValidationError> {
    if recipients.is_multiple() {
        Ok(())
    } else {
        Err(ValidationError::MultipleRecipientsRequired { operation })
    }
}

/// Split decode failures into the error taxonomy: application failure
/// (`success: false`) and non-2xx statuses are transport errors; everything
/// else means the 2xx body violated the contract.
fn classify<T>(
    http_status: u16,
    result: Result<Envelope<T>, DecodeError>,
) -> Result<Envelope<T>, SmsAeroError> {
    match result {
        Ok(envelope) => Ok(envelope),
        Err(DecodeError::Api { status, message }) => Err(SmsAeroError::Transport {
            status: Some(status),
            message,
            source: None,
        }),
        Err(err) if !(200..=299).contains(&http_status) => Err(SmsAeroError::Transport {
            status: Some(http_status),
            message: None,
            source: Some(Box::new(err)),
        }),
        Err(err) => Err(SmsAeroError::BadResponse(Box::new(err))),
    }
}
