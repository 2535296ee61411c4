use chrono_tz::Tz;

/// Parse an IANA zone identifier such as `Europe/Bucharest`.
pub fn parse_zone(zone_id: &str) -> Option<Tz> {
    zone_id.trim().parse::<Tz>().ok()
}
