use crate::order::snapshot::{Amount, OrderSide, OrderType, Price};
use dyn_clone::{clone_trait_object, DynClone};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt::Debug;

/// Order template bound to a key chord. The key binding engine never looks inside a template:
/// it stores it, clones it on lookup and persists it with the rest of the binding table.
/// Implementations must be registered with `#[typetag::serde]` so a table can be restored.
///
/// # Examples
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use hotkey_domain::order::template::OrderTemplate;
/// use std::any::Any;
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// struct IcebergTemplate {
///     pub display_amount: u32,
/// }
///
/// #[typetag::serde]
/// impl OrderTemplate for IcebergTemplate {
///     fn as_any(&self) -> &dyn Any {
///         self
///     }
/// }
///
/// let template: Box<dyn OrderTemplate> = Box::new(IcebergTemplate { display_amount: 100 });
/// let copy = template.clone();
/// let iceberg = copy.as_any().downcast_ref::<IcebergTemplate>().expect("in doc test");
/// assert_eq!(iceberg.display_amount, 100);
/// ```
#[typetag::serde(tag = "type")]
pub trait OrderTemplate: Any + DynClone + Send + Sync + Debug {
    /// Needed to call the `downcast_ref` method
    fn as_any(&self) -> &dyn Any;
}

clone_trait_object!(OrderTemplate);

/// Template of a single order submitted as is on key press.
/// Missing amount is filled with the default quantity of the venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleOrderTemplate {
    pub order_type: OrderType,
    pub side: OrderSide,
    pub price: Option<Price>,
    pub amount: Option<Amount>,
}

impl SingleOrderTemplate {
    pub fn new(
        order_type: OrderType,
        side: OrderSide,
        price: Option<Price>,
        amount: Option<Amount>,
    ) -> Self {
        Self {
            order_type,
            side,
            price,
            amount,
        }
    }

    pub fn amount_or(&self, default_amount: Amount) -> Amount {
        self.amount.unwrap_or(default_amount)
    }
}

#[typetag::serde(name = "single_order")]
impl OrderTemplate for SingleOrderTemplate {
    fn as_any(&self) -> &dyn Any {
        self
    }
}
