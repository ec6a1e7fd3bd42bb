use hotelman_core::{DomainError, DomainResult};

/// Next room number in floor-grouped numbering.
///
/// Floor `n` (1-based) holds `100 * n + 1 ..= 100 * n + rooms_per_floor`, so
/// with 10 rooms per floor the first ten rooms are 101..=110 and the eleventh
/// is 201. Collisions with manually numbered rooms are not checked here; the
/// store rejects duplicate numbers within a hotel.
pub fn next_room_number(rooms_per_floor: u32, existing_room_count: usize) -> DomainResult<u32> {
    if rooms_per_floor == 0 {
        return Err(DomainError::invalid_argument(
            "rooms_per_floor must be positive",
        ));
    }

    let per_floor = u64::from(rooms_per_floor);
    let existing = u64::try_from(existing_room_count)
        .map_err(|_| DomainError::invalid_argument("existing_room_count out of range"))?;

    let number = (existing / per_floor)
        .checked_mul(100)
        .and_then(|floor_base| floor_base.checked_add(100 + existing % per_floor + 1))
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| DomainError::invalid_argument("room number out of range"))?;

    Ok(number)
}
