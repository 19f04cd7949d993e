use chrono::{DateTime, Local, Utc};

/// Formats timestamps the way `ls -l` shows them, e.g. `Mar  5 14:07`.
pub trait ListingDateExt {
    fn to_listing_date(&self) -> String;
}

impl ListingDateExt for DateTime<Utc> {
    fn to_listing_date(&self) -> String {
        self.with_timezone(&Local).format("%b %e %H:%M").to_string()
    }
}
