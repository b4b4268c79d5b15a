use serde::Deserialize;

use super::envelope::{ArrayOf, DecodeError, ObjectOf, decode_envelope};
use super::money::DecimalField;
use crate::domain::{
    Envelope, MessageText, RawPhoneNumber, Recipients, Sign, Sms, SmsChannel, SmsMessageResult,
    UnixTimestamp,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SmsMessageWire {
    id: u64,
    from: String,
    number: String,
    text: String,
    status: i32,
    extend_status: String,
    channel: String,
    cost: DecimalField,
    date_create: i64,
    date_send: i64,
}

impl SmsMessageWire {
    fn into_domain(self) -> Result<SmsMessageResult, DecodeError> {
        let channel = SmsChannel::from_wire(&self.channel)
            .ok_or(DecodeError::UnknownChannel {
                value: self.channel,
            })?;
        Ok(SmsMessageResult {
            id: self.id,
            from: self.from,
            number: self.number,
            text: self.text,
            status: self.status,
            extend_status: self.extend_status,
            channel,
            cost: self.cost.into_decimal(),
            date_create: UnixTimestamp::new(self.date_create),
            date_send: UnixTimestamp::new(self.date_send),
        })
    }
}

pub fn encode_sms_form(request: &Sms) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();

    match request.recipients() {
        Recipients::Single(number) => {
            params.push((RawPhoneNumber::FIELD.to_owned(), number.raw().to_owned()));
        }
        Recipients::Multiple(numbers) => {
            for number in numbers {
                params.push((RawPhoneNumber::BULK_FIELD.to_owned(), number.raw().to_owned()));
            }
        }
    }

    params.push((
        MessageText::FIELD.to_owned(),
        request.text().as_str().to_owned(),
    ));
    if let Some(sign) = request.sign() {
        params.push((Sign::FIELD.to_owned(), sign.as_str().to_owned()));
    }
    params.push((
        SmsChannel::FIELD.to_owned(),
        request.channel().as_str().to_owned(),
    ));

    params
}

pub fn decode_sms_message_response(
    status: u16,
    body: &str,
) -> Result<Envelope<SmsMessageResult>, DecodeError> {
    decode_envelope::<ObjectOf<SmsMessageWire>>(status, body)?.try_map(SmsMessageWire::into_domain)
}

pub fn decode_sms_message_list_response(
    status: u16,
    body: &str,
) -> Result<Envelope<Vec<SmsMessageResult>>, DecodeError> {
    decode_envelope::<ArrayOf<SmsMessageWire>>(status, body)?.try_map(|items| {
        items
            .into_iter()
            .map(SmsMessageWire::into_domain)
            .collect::<Result<Vec<_>, _>>()
    })
}
