use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

pub(super) fn now_ts() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| String::new())
}

/// Short clock form for the notice line ("12:03:45").
pub(in crate::tui_shell) fn fmt_ts_ui(ts: &str) -> String {
    match OffsetDateTime::parse(ts, &Rfc3339) {
        Ok(t) => format!("{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second()),
        Err(_) => ts.to_string(),
    }
}
