use serde::Deserialize;

use super::envelope::{DecodeError, ObjectOf, decode_envelope};
use super::money::DecimalField;
use crate::domain::{BalanceResult, Envelope};

#[derive(Debug, Clone, Deserialize)]
struct BalanceWire {
    balance: DecimalField,
}

pub fn decode_balance_response(
    status: u16,
    body: &str,
) -> Result<Envelope<BalanceResult>, DecodeError> {
    Ok(
        decode_envelope::<ObjectOf<BalanceWire>>(status, body)?.map(|wire| BalanceResult {
            balance: wire.balance.into_decimal(),
        }),
    )
}
