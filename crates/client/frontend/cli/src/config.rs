//! Terminal-only settings read from the environment.
use client_frontend_core::config::read_env;

const NOTICE_ROWS_ENV: &str = "CLI_NOTICE_ROWS";
const SESSION_ID_ENV: &str = "CHARSHEET_SESSION_ID";

#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub notices: NoticePanel,
    /// Log session directory name; a timestamped one is generated when unset.
    pub session_id: Option<String>,
}

impl CliConfig {
    /// Environment variables:
    /// - `CLI_NOTICE_ROWS` - visible notice lines, clamped to 1..=20 (default: 6)
    /// - `CHARSHEET_SESSION_ID` - log session directory name
    pub fn from_env() -> Self {
        Self {
            notices: read_env::<u16>(NOTICE_ROWS_ENV)
                .map(NoticePanel::with_rows)
                .unwrap_or_default(),
            session_id: std::env::var(SESSION_ID_ENV)
                .ok()
                .and_then(|id| sanitize_session_id(&id)),
        }
    }
}

/// Size of the notice panel at the bottom of the sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoticePanel {
    rows: u16,
}

impl NoticePanel {
    pub const MAX_ROWS: u16 = 20;

    pub fn with_rows(rows: u16) -> Self {
        Self {
            rows: rows.clamp(1, Self::MAX_ROWS),
        }
    }

    pub fn rows(self) -> u16 {
        self.rows
    }

    /// Height in terminal lines, borders included.
    pub fn panel_height(self) -> u16 {
        self.rows + 2
    }
}

impl Default for NoticePanel {
    fn default() -> Self {
        Self { rows: 6 }
    }
}

/// The id names a directory under the log root, so path separators are
/// replaced and blank ids fall back to a generated one.
fn sanitize_session_id(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.chars().all(|c| c == '.') {
        return None;
    }
    Some(
        trimmed
            .chars()
            .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
            .collect(),
    )
}
