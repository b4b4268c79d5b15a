use crate::domain::validation::ValidationError;
use crate::domain::value::{
    MessageText, RawPhoneNumber, SendingId, Sign, SmsChannel, ViberChannel,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Recipient set of a send request.
///
/// The two variants are deliberately distinct: `sms/send` accepts either a
/// single `number` or a `numbers[]` list, and the facade operations require
/// one specific cardinality each.
pub enum Recipients {
    Single(RawPhoneNumber),
    Multiple(Vec<RawPhoneNumber>),
}

impl Recipients {
    pub(crate) fn multiple(numbers: Vec<RawPhoneNumber>) -> Result<Self, ValidationError> {
        if numbers.is_empty() {
            return Err(ValidationError::Empty {
                field: RawPhoneNumber::BULK_FIELD,
            });
        }
        Ok(Self::Multiple(numbers))
    }

    /// `true` for [`Recipients::Single`].
    pub fn is_single(&self) -> bool {
        matches!(self, Self::Single(_))
    }

    /// `true` for [`Recipients::Multiple`].
    pub fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// An SMS message addressed to one number or to a list of numbers.
pub struct Sms {
    recipients: Recipients,
    text: MessageText,
    channel: SmsChannel,
    sign: Option<Sign>,
}

impl Sms {
    /// Build a message addressed to exactly one number.
    ///
    /// Accepted by [`send`](crate::SmsAeroClient::send) and
    /// [`test_send`](crate::SmsAeroClient::test_send).
    pub fn to_single_number(
        number: RawPhoneNumber,
        text: MessageText,
        channel: SmsChannel,
        sign: Option<Sign>,
    ) -> Self {
        Self {
            recipients: Recipients::Single(number),
            text,
            channel,
            sign,
        }
    }

    /// Build a message addressed to a non-empty list of numbers.
    ///
    /// Accepted by [`bulk_send`](crate::SmsAeroClient::bulk_send).
    pub fn to_multiple_numbers(
        numbers: Vec<RawPhoneNumber>,
        text: MessageText,
        channel: SmsChannel,
        sign: Option<Sign>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            recipients: Recipients::multiple(numbers)?,
            text,
            channel,
            sign,
        })
    }

    pub fn recipients(&self) -> &Recipients {
        &self.recipients
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn channel(&self) -> SmsChannel {
        self.channel
    }

    pub fn sign(&self) -> Option<&Sign> {
        self.sign.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A Viber message with SMS fallback text.
///
/// Unlike SMS, both cardinalities go to the same `viber/send` endpoint.
pub struct ViberSend {
    recipients: Recipients,
    sign: Sign,
    channel: ViberChannel,
    text: MessageText,
    sending_id: Option<SendingId>,
}

impl ViberSend {
    /// Build a message addressed to exactly one number.
    pub fn to_single_number(
        number: RawPhoneNumber,
        sign: Sign,
        channel: ViberChannel,
        text: MessageText,
    ) -> Self {
        Self {
            recipients: Recipients::Single(number),
            sign,
            channel,
            text,
            sending_id: None,
        }
    }

    /// Build a message addressed to a non-empty list of numbers.
    pub fn to_multiple_numbers(
        numbers: Vec<RawPhoneNumber>,
        sign: Sign,
        channel: ViberChannel,
        text: MessageText,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            recipients: Recipients::multiple(numbers)?,
            sign,
            channel,
            text,
            sending_id: None,
        })
    }

    /// Attach a sending id to resend an earlier dispatch.
    pub fn with_sending_id(mut self, sending_id: SendingId) -> Self {
        self.sending_id = Some(sending_id);
        self
    }

    pub fn recipients(&self) -> &Recipients {
        &self.recipients
    }

    pub fn sign(&self) -> &Sign {
        &self.sign
    }

    pub fn channel(&self) -> ViberChannel {
        self.channel
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn sending_id(&self) -> Option<SendingId> {
        self.sending_id
    }
}
