use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Account email used as the HTTP Basic username.
///
/// Invariant: non-empty after trimming.
pub struct Email(String);

impl Email {
    /// Create a validated [`Email`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "email" });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated email.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// API key used as the HTTP Basic password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct ApiKey(String);

impl ApiKey {
    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: "api_key" });
        }
        Ok(Self(value))
    }

    /// Borrow the key as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated phone number as sent to SMS Aero (`number`).
///
/// Invariant: non-empty after trimming. This type does not normalize; if you
/// want E.164 normalization, parse into [`PhoneNumber`] and convert it into
/// [`RawPhoneNumber`].
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// Form field name used by SMS Aero for a single recipient (`number`).
    pub const FIELD: &'static str = "number";

    /// Form field name used by SMS Aero for bulk recipients (`numbers[]`).
    pub const BULK_FIELD: &'static str = "numbers[]";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to SMS Aero.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    /// Convert an already-parsed phone number to a normalized raw value (E.164).
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality, ordering, and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty {
                field: RawPhoneNumber::FIELD,
            });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message text (`text`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Form field name used by SMS Aero (`text`).
    pub const FIELD: &'static str = "text";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender sign (`sign`).
///
/// Invariant: non-empty after trimming. The value must be approved for your
/// SMS Aero account.
pub struct Sign(String);

impl Sign {
    /// Form field name used by SMS Aero (`sign`).
    pub const FIELD: &'static str = "sign";

    /// Create a validated [`Sign`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sign.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Verification code delivered by a flash call (`code`).
///
/// Invariant: non-empty after trimming.
pub struct FlashCallCode(String);

impl FlashCallCode {
    /// Form field name used by SMS Aero (`code`).
    pub const FIELD: &'static str = "code";

    /// Create a validated [`FlashCallCode`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Viber sending id (`sendingId`) returned by `viber/send` and accepted by
/// `viber/statistic`.
pub struct SendingId(u64);

impl SendingId {
    /// Form field name used by SMS Aero (`sendingId`).
    pub const FIELD: &'static str = "sendingId";

    /// Construct a sending id from its integer representation.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying id.
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unix timestamp in seconds, as returned in `dateCreate`/`dateSend` and
/// `timeCreate`/`timeUpdate` fields.
pub struct UnixTimestamp(i64);

impl UnixTimestamp {
    /// Create a timestamp value (no range validation is performed).
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the underlying timestamp in seconds.
    pub fn value(self) -> i64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// SMS delivery channel (`channel`).
pub enum SmsChannel {
    /// Direct channel with a custom sign.
    Direct,
    /// Channel for service notifications.
    Service,
    /// Digital channel (cheapest, delivery not guaranteed).
    Digital,
    /// Transactional channel.
    Type,
    /// International delivery.
    International,
}

impl SmsChannel {
    /// Form field name used by SMS Aero (`channel`).
    pub const FIELD: &'static str = "channel";

    /// Wire value as sent to and returned by SMS Aero.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Direct => "DIRECT",
            Self::Service => "SERVICE",
            Self::Digital => "DIGITAL",
            Self::Type => "TYPE",
            Self::International => "INTERNATIONAL",
        }
    }

    /// Map a wire value back to a channel, if known.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "DIRECT" => Some(Self::Direct),
            "SERVICE" => Some(Self::Service),
            "DIGITAL" => Some(Self::Digital),
            "TYPE" => Some(Self::Type),
            "INTERNATIONAL" => Some(Self::International),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Viber delivery channel (`channel`).
pub enum ViberChannel {
    /// Official (branded) channel.
    Official,
    /// Informational channel.
    Info,
}

impl ViberChannel {
    /// Form field name used by SMS Aero (`channel`).
    pub const FIELD: &'static str = "channel";

    /// Wire value as sent to and returned by SMS Aero.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Official => "OFFICIAL",
            Self::Info => "INFO",
        }
    }

    /// Map a wire value back to a channel, if known.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "OFFICIAL" => Some(Self::Official),
            "INFO" => Some(Self::Info),
            _ => None,
        }
    }
}
