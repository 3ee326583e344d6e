use time::OffsetDateTime;

/// Creation timestamps are persisted as unix milliseconds, so an
/// `OffsetDateTime` held in memory must carry no sub-millisecond part
/// or it would not round-trip through the store.
pub fn now_millis() -> OffsetDateTime {
    truncate_to_millis(OffsetDateTime::now_utc())
}

pub fn truncate_to_millis(ts: OffsetDateTime) -> OffsetDateTime {
    let millis = ts.unix_timestamp_nanos().div_euclid(1_000_000);
    OffsetDateTime::from_unix_timestamp_nanos(millis * 1_000_000)
        .expect("truncation cannot leave the representable range")
}

pub fn to_unix_millis(ts: OffsetDateTime) -> i64 {
    ts.unix_timestamp_nanos().div_euclid(1_000_000) as i64
}

pub fn from_unix_millis(millis: i64) -> anyhow::Result<OffsetDateTime> {
    Ok(OffsetDateTime::from_unix_timestamp_nanos(
        i128::from(millis) * 1_000_000,
    )?)
}
