use serde::Deserialize;

use super::envelope::{DecodeError, IndexedMapOf, ObjectOf, decode_envelope};
use super::money::DecimalField;
use crate::domain::{
    Envelope, MessageText, RawPhoneNumber, Recipients, SendingId, Sign, UnixTimestamp,
    ViberChannel, ViberNumberStatus, ViberSend, ViberStatus,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ViberStatusWire {
    id: u64,
    date_create: i64,
    date_send: i64,
    count: u64,
    sign: String,
    channel: String,
    text: String,
    cost: DecimalField,
    status: i32,
    extend_status: String,
    count_send: u64,
    count_delivered: u64,
    count_write: u64,
    count_undelivered: u64,
    count_error: u64,
}

impl ViberStatusWire {
    fn into_domain(self) -> Result<ViberStatus, DecodeError> {
        let channel = ViberChannel::from_wire(&self.channel)
            .ok_or(DecodeError::UnknownChannel {
                value: self.channel,
            })?;
        Ok(ViberStatus {
            id: SendingId::new(self.id),
            date_create: UnixTimestamp::new(self.date_create),
            date_send: UnixTimestamp::new(self.date_send),
            count: self.count,
            sign: self.sign,
            channel,
            text: self.text,
            cost: self.cost.into_decimal(),
            status: self.status,
            extend_status: self.extend_status,
            count_send: self.count_send,
            count_delivered: self.count_delivered,
            count_write: self.count_write,
            count_undelivered: self.count_undelivered,
            count_error: self.count_error,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ViberNumberStatusWire {
    number: String,
    status: i32,
    extend_status: String,
    date_send: i64,
}

impl ViberNumberStatusWire {
    fn into_domain(self) -> ViberNumberStatus {
        ViberNumberStatus {
            number: self.number,
            status: self.status,
            extend_status: self.extend_status,
            date_send: UnixTimestamp::new(self.date_send),
        }
    }
}

pub fn encode_viber_send_form(request: &ViberSend) -> Vec<(String, String)> {
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

    params.push((Sign::FIELD.to_owned(), request.sign().as_str().to_owned()));
    params.push((
        ViberChannel::FIELD.to_owned(),
        request.channel().as_str().to_owned(),
    ));
    params.push((
        MessageText::FIELD.to_owned(),
        request.text().as_str().to_owned(),
    ));
    if let Some(sending_id) = request.sending_id() {
        params.push((SendingId::FIELD.to_owned(), sending_id.value().to_string()));
    }

    params
}

pub fn encode_viber_statistic_form(sending_id: SendingId) -> Vec<(String, String)> {
    vec![(SendingId::FIELD.to_owned(), sending_id.value().to_string())]
}

pub fn decode_viber_send_response(
    status: u16,
    body: &str,
) -> Result<Envelope<ViberStatus>, DecodeError> {
    decode_envelope::<ObjectOf<ViberStatusWire>>(status, body)?.try_map(ViberStatusWire::into_domain)
}

pub fn decode_viber_statistic_response(
    status: u16,
    body: &str,
) -> Result<Envelope<Vec<ViberNumberStatus>>, DecodeError> {
    Ok(
        decode_envelope::<IndexedMapOf<ViberNumberStatusWire>>(status, body)?.map(|records| {
            records
                .into_iter()
                .map(ViberNumberStatusWire::into_domain)
                .collect()
        }),
    )
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    const SEND_SUCCESS: &str = r#"
    {
        "success": true,
        "data": {
            "id": 1,
            "dateCreate": 1511153253,
            "dateSend": 1511153253,
            "count": 3,
            "sign": "Hello!",
            "channel": "OFFICIAL",
            "text": "your text",
            "cost": 2.25,
            "status": 1,
            "extendStatus": "moderation",
            "countSend": 0,
            "countDelivered": 0,
            "countWrite": 0,
            "countUndelivered": 0,
            "countError": 0
        },
        "message": null
    }
    "#;

    const STATISTIC_SUCCESS: &str = r#"
    {
        "success": true,
        "data": {
            "0": {
                "number": "79990000000",
                "status": 0,
                "extendStatus": "send",
                "dateSend": 1511153341
            },
            "1": {
                "number": "79990000001",
                "status": 2,
                "extendStatus": "write",
                "dateSend": 1511153341
            },
            "2": {
                "number": "79990000003",
                "status": 2,
                "extendStatus": "write",
                "dateSend": 1511153341
            },
            "links": {
                "self": "/v2/viber/statistic?sendingId=1&page=1"
            }
        },
        "message": null
    }
    "#;

    fn single_request() -> ViberSend {
        ViberSend::to_single_number(
            RawPhoneNumber::new("79990000000").unwrap(),
            Sign::new("Hello!").unwrap(),
            ViberChannel::Official,
            MessageText::new("your text").unwrap(),
        )
    }

    #[test]
    fn encode_single_number_form_params() {
        let params = encode_viber_send_form(&single_request());
        assert_eq!(
            params,
            vec![
                ("number".to_owned(), "79990000000".to_owned()),
                ("sign".to_owned(), "Hello!".to_owned()),
                ("channel".to_owned(), "OFFICIAL".to_owned()),
                ("text".to_owned(), "your text".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_multiple_numbers_with_sending_id() {
        let request = ViberSend::to_multiple_numbers(
            vec![
                RawPhoneNumber::new("79990000000").unwrap(),
                RawPhoneNumber::new("79990000001").unwrap(),
            ],
            Sign::new("Hello!").unwrap(),
            ViberChannel::Info,
            MessageText::new("your text").unwrap(),
        )
        .unwrap()
        .with_sending_id(SendingId::new(7));

        let params = encode_viber_send_form(&request);
        assert_eq!(
            params,
            vec![
                ("numbers[]".to_owned(), "79990000000".to_owned()),
                ("numbers[]".to_owned(), "79990000001".to_owned()),
                ("sign".to_owned(), "Hello!".to_owned()),
                ("channel".to_owned(), "INFO".to_owned()),
                ("text".to_owned(), "your text".to_owned()),
                ("sendingId".to_owned(), "7".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_statistic_form_params() {
        let params = encode_viber_statistic_form(SendingId::new(1));
        assert_eq!(params, vec![("sendingId".to_owned(), "1".to_owned())]);
    }

    #[test]
    fn decode_send_round_trips_fixture_values() {
        let envelope = decode_viber_send_response(200, SEND_SUCCESS).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.message, None);

        let status = &envelope.data;
        assert_eq!(status.id, SendingId::new(1));
        assert_eq!(status.date_create, UnixTimestamp::new(1511153253));
        assert_eq!(status.date_send, UnixTimestamp::new(1511153253));
        assert_eq!(status.count, 3);
        assert_eq!(status.sign, "Hello!");
        assert_eq!(status.channel, ViberChannel::Official);
        assert_eq!(status.text, "your text");
        assert_eq!(status.cost, "2.25".parse::<Decimal>().unwrap());
        assert_eq!(status.status, 1);
        assert_eq!(status.extend_status, "moderation");
        assert_eq!(status.count_send, 0);
        assert_eq!(status.count_delivered, 0);
        assert_eq!(status.count_write, 0);
        assert_eq!(status.count_undelivered, 0);
        assert_eq!(status.count_error, 0);
    }

    #[test]
    fn decode_statistic_skips_links_and_orders_by_index() {
        let envelope = decode_viber_statistic_response(200, STATISTIC_SUCCESS).unwrap();
        assert_eq!(envelope.data.len(), 3);

        assert_eq!(envelope.data[0].number, "79990000000");
        assert_eq!(envelope.data[0].status, 0);
        assert_eq!(envelope.data[0].extend_status, "send");
        assert_eq!(envelope.data[0].date_send, UnixTimestamp::new(1511153341));

        assert_eq!(envelope.data[1].number, "79990000001");
        assert_eq!(envelope.data[1].status, 2);
        assert_eq!(envelope.data[1].extend_status, "write");

        assert_eq!(envelope.data[2].number, "79990000003");
    }

    #[test]
    fn decode_send_rejects_unknown_channel_value() {
        let body = SEND_SUCCESS.replace("\"OFFICIAL\"", "\"UNOFFICIAL\"");
        let err = decode_viber_send_response(200, &body).unwrap_err();
        match err {
            DecodeError::UnknownChannel { value } => assert_eq!(value, "UNOFFICIAL"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
