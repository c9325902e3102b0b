// Event total calculation
//
// total = base price + sum(unit price * quantity) over the extra items.
// Missing base price and unit prices count as zero, a missing quantity as one.
// Negative inputs are not rejected here; arithmetic saturates instead of
// overflowing.

use crate::entities::ExtraItem;
use crate::value_objects::Money;

pub const DEFAULT_QUANTITY: u32 = 1;

pub fn line_total(item: &ExtraItem) -> Money {
    item.unit_price
        .unwrap_or(Money::ZERO)
        .saturating_times(item.quantity.unwrap_or(DEFAULT_QUANTITY))
}

pub fn derived_total(base_price: Option<Money>, extra_items: &[ExtraItem]) -> Money {
    let extras: Money = extra_items.iter().map(line_total).sum();
    base_price.unwrap_or(Money::ZERO).saturating_add(extras)
}
