//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{Recipients, Sms, ViberSend};
pub use response::{
    BalanceResult, Envelope, FlashCallStatus, SmsMessageResult, ViberNumberStatus, ViberStatus,
};
pub use validation::ValidationError;
pub use value::{
    ApiKey, Email, FlashCallCode, MessageText, PhoneNumber, RawPhoneNumber, SendingId, Sign,
    SmsChannel, UnixTimestamp, ViberChannel,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_rejects_empty() {
        assert!(matches!(
            Email::new("   "),
            Err(ValidationError::Empty { field: "email" })
        ));
    }

    #[test]
    fn api_key_rejects_empty() {
        assert!(matches!(
            ApiKey::new(""),
            Err(ValidationError::Empty { field: "api_key" })
        ));
    }

    #[test]
    fn phone_number_parses_with_region_and_trims() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::RU), " 79251234567 ").unwrap();
        assert_eq!(pn.raw(), "79251234567");
    }

    #[test]
    fn raw_phone_number_from_phone_number_uses_e164() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::RU), "79251234567").unwrap();
        let raw: RawPhoneNumber = pn.into();
        assert_eq!(raw.raw(), "+79251234567");
    }

    #[test]
    fn sms_to_multiple_numbers_requires_non_empty_list() {
        let text = MessageText::new("hi").unwrap();
        let err = Sms::to_multiple_numbers(Vec::new(), text, SmsChannel::Direct, None).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Empty {
                field: RawPhoneNumber::BULK_FIELD
            }
        ));
    }

    #[test]
    fn viber_to_multiple_numbers_requires_non_empty_list() {
        let err = ViberSend::to_multiple_numbers(
            Vec::new(),
            Sign::new("Hello!").unwrap(),
            ViberChannel::Official,
            MessageText::new("hi").unwrap(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Empty {
                field: RawPhoneNumber::BULK_FIELD
            }
        ));
    }

    #[test]
    fn recipients_report_their_cardinality() {
        let single = Sms::to_single_number(
            RawPhoneNumber::new("79990000000").unwrap(),
            MessageText::new("hi").unwrap(),
            SmsChannel::Direct,
            None,
        );
        assert!(single.recipients().is_single());
        assert!(!single.recipients().is_multiple());

        let multiple = Sms::to_multiple_numbers(
            vec![RawPhoneNumber::new("79990000000").unwrap()],
            MessageText::new("hi").unwrap(),
            SmsChannel::Direct,
            None,
        )
        .unwrap();
        assert!(multiple.recipients().is_multiple());
    }

    #[test]
    fn channel_wire_values_round_trip() {
        for channel in [
            SmsChannel::Direct,
            SmsChannel::Service,
            SmsChannel::Digital,
            SmsChannel::Type,
            SmsChannel::International,
        ] {
            assert_eq!(SmsChannel::from_wire(channel.as_str()), Some(channel));
        }
        assert_eq!(SmsChannel::from_wire("VIBER"), None);

        for channel in [ViberChannel::Official, ViberChannel::Info] {
            assert_eq!(ViberChannel::from_wire(channel.as_str()), Some(channel));
        }
        assert_eq!(ViberChannel::from_wire("DIRECT"), None);
    }

    #[test]
    fn viber_send_carries_optional_sending_id() {
        let request = ViberSend::to_single_number(
            RawPhoneNumber::new("79990000000").unwrap(),
            Sign::new("Hello!").unwrap(),
            ViberChannel::Official,
            MessageText::new("your text").unwrap(),
        );
        assert_eq!(request.sending_id(), None);

        let request = request.with_sending_id(SendingId::new(42));
        assert_eq!(request.sending_id(), Some(SendingId::new(42)));
    }
}
