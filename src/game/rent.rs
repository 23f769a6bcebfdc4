/// Return the rent owed for landing on a property with `improvements` upgrades.
///
/// Every improvement adds another `base_rent * multiplier` on top of the
/// unimproved rent, so the rent grows linearly rather than compounding.
/// Rent too large for an `i64` stops at `i64::MAX`.
pub fn rent_due(base_rent: i64, improvements: u32, multiplier: i64) -> i64 {
    let step = base_rent.checked_mul(multiplier).unwrap_or(i64::MAX);
    let mut rent = base_rent;

    for _ in 0..improvements {
        rent = rent.checked_add(step).unwrap_or(i64::MAX);
    }

    rent
}
