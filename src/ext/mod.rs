mod listing_date_ext;

pub use listing_date_ext::ListingDateExt;
