/// All database primary keys are SQLite `INTEGER PRIMARY KEY` rowids.
pub type DbId = i64;

/// All timestamps are UTC wall-clock values as stored by SQLite
/// `CURRENT_TIMESTAMP` (no offset suffix).
pub type Timestamp = chrono::NaiveDateTime;
