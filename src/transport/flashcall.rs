use serde::Deserialize;

use super::envelope::{DecodeError, ObjectOf, decode_envelope};
use super::money::DecimalField;
use crate::domain::{Envelope, FlashCallCode, FlashCallStatus, RawPhoneNumber, UnixTimestamp};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FlashCallWire {
    id: u64,
    status: i32,
    code: String,
    phone: String,
    cost: DecimalField,
    time_create: i64,
    time_update: i64,
}

pub fn encode_flash_call_form(phone: &RawPhoneNumber, code: &FlashCallCode) -> Vec<(String, String)> {
    vec![
        ("phone".to_owned(), phone.raw().to_owned()),
        (FlashCallCode::FIELD.to_owned(), code.as_str().to_owned()),
    ]
}

pub fn decode_flash_call_response(
    status: u16,
    body: &str,
) -> Result<Envelope<FlashCallStatus>, DecodeError> {
    Ok(
        decode_envelope::<ObjectOf<FlashCallWire>>(status, body)?.map(|wire| FlashCallStatus {
            id: wire.id,
            status: wire.status,
            code: wire.code,
            phone: wire.phone,
            cost: wire.cost.into_decimal(),
            time_create: UnixTimestamp::new(wire.time_create),
            time_update: UnixTimestamp::new(wire.time_update),
        }),
    )
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    const SUCCESS: &str = r#"
    {
        "success": true,
        "data": {
            "id": 1,
            "status": 0,
            "code": "1234",
            "phone": "79990000000",
            "cost": "0.59",
            "timeCreate": 1646926190,
            "timeUpdate": 1646926190
        },
        "message": null
    }
    "#;

    #[test]
    fn encode_flash_call_form_params() {
        let phone = RawPhoneNumber::new("79990000000").unwrap();
        let code = FlashCallCode::new("1234").unwrap();
        let params = encode_flash_call_form(&phone, &code);

        assert_eq!(
            params,
            vec![
                ("phone".to_owned(), "79990000000".to_owned()),
                ("code".to_owned(), "1234".to_owned()),
            ]
        );
    }

    #[test]
    fn decode_flash_call_round_trips_fixture_values() {
        let envelope = decode_flash_call_response(200, SUCCESS).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.message, None);

        let result = &envelope.data;
        assert_eq!(result.id, 1);
        assert_eq!(result.status, 0);
        assert_eq!(result.code, "1234");
        assert_eq!(result.phone, "79990000000");
        assert_eq!(result.cost, "0.59".parse::<Decimal>().unwrap());
        assert_eq!(result.time_create, UnixTimestamp::new(1646926190));
        assert_eq!(result.time_update, UnixTimestamp::new(1646926190));
    }

    #[test]
    fn string_and_number_costs_decode_to_the_same_value() {
        let with_number_cost = SUCCESS.replace("\"0.59\"", "0.59");
        let from_string = decode_flash_call_response(200, SUCCESS).unwrap();
        let from_number = decode_flash_call_response(200, &with_number_cost).unwrap();
        assert_eq!(from_string.data.cost, from_number.data.cost);
    }
}
