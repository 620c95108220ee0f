/// Video dates keep the offset they were supplied with; it is rendered back verbatim.
pub type Timestamp = chrono::DateTime<chrono::FixedOffset>;
