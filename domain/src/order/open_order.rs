use crate::order::snapshot::{Amount, ClientOrderId, OrderSide, Price};
use serde::{Deserialize, Serialize};

/// Live order tracked for the displayed instrument until it is filled or cancelled.
/// Callers keep these in submission order, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenOrder {
    pub client_order_id: ClientOrderId,
    pub side: OrderSide,
    /// Absent for orders without a limit price, e.g. market orders
    pub price: Option<Price>,
    pub amount: Amount,
}

impl OpenOrder {
    pub fn new(
        client_order_id: ClientOrderId,
        side: OrderSide,
        price: Option<Price>,
        amount: Amount,
    ) -> Self {
        Self {
            client_order_id,
            side,
            price,
            amount,
        }
    }
}
