//! Transport layer: form encoding and wire-format decoding per endpoint.

mod balance;
mod envelope;
mod flashcall;
mod money;
mod sms;
mod viber;

pub use balance::decode_balance_response;
pub use envelope::{DecodeError, NoData, decode_envelope};
pub use flashcall::{decode_flash_call_response, encode_flash_call_form};
pub use sms::{decode_sms_message_list_response, decode_sms_message_response, encode_sms_form};
pub use viber::{
    decode_viber_send_response, decode_viber_statistic_response, encode_viber_send_form,
    encode_viber_statistic_form,
};
