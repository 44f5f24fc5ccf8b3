pub mod completions;
pub mod config;
pub mod matrix;
pub mod profile;

/// Today's date in local time; profile updates and evaluations are dated with it.
pub(crate) fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
