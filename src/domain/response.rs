use rust_decimal::Decimal;

use crate::domain::value::{SendingId, SmsChannel, UnixTimestamp, ViberChannel};

#[derive(Debug, Clone, PartialEq, Eq)]
/// The uniform `{success, data, message}` wrapper returned by every endpoint.
///
/// A returned envelope always has `success == true`; a `success == false`
/// body is surfaced as an error before an envelope is produced.
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub(crate) fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            success: self.success,
            data: f(self.data),
            message: self.message,
        }
    }

    pub(crate) fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<Envelope<U>, E> {
        Ok(Envelope {
            success: self.success,
            data: f(self.data)?,
            message: self.message,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Accepted SMS message as returned by `sms/send` and `sms/testsend`.
pub struct SmsMessageResult {
    pub id: u64,
    pub from: String,
    pub number: String,
    pub text: String,
    pub status: i32,
    pub extend_status: String,
    pub channel: SmsChannel,
    pub cost: Decimal,
    pub date_create: UnixTimestamp,
    pub date_send: UnixTimestamp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Account balance as returned by `balance`.
pub struct BalanceResult {
    pub balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Accepted flash call as returned by `flashcall/send`.
pub struct FlashCallStatus {
    pub id: u64,
    pub status: i32,
    pub code: String,
    pub phone: String,
    pub cost: Decimal,
    pub time_create: UnixTimestamp,
    pub time_update: UnixTimestamp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Accepted Viber dispatch as returned by `viber/send`.
pub struct ViberStatus {
    pub id: SendingId,
    pub date_create: UnixTimestamp,
    pub date_send: UnixTimestamp,
    pub count: u64,
    pub sign: String,
    pub channel: ViberChannel,
    pub text: String,
    pub cost: Decimal,
    pub status: i32,
    pub extend_status: String,
    pub count_send: u64,
    pub count_delivered: u64,
    pub count_write: u64,
    pub count_undelivered: u64,
    pub count_error: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Per-recipient delivery record as returned by `viber/statistic`.
pub struct ViberNumberStatus {
    pub number: String,
    pub status: i32,
    pub extend_status: String,
    pub date_send: UnixTimestamp,
}
