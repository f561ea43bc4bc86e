use chrono::{Datelike, NaiveDate};

/// Age in completed years on the reference date.
///
/// `today.year - dob.year`, minus one when the birthday has not yet
/// occurred this year. Eligibility windows are inclusive, so an off-by-one
/// here flips decisions at rule boundaries.
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age
}
