//! Solves dialog of a single challenge.
//!
//! Solves are fetched on the first open and kept for the lifetime of the card;
//! paging is local and uses the same slicing as the scoreboard.

use contracts::domain::a003_challenge::aggregate::{ChallengeSolve, ChallengeSolvesData};

use crate::domain::a001_leaderboard::pagination::{derive_page, needs_pagination, RenderedEntry};
use crate::shared::api_utils::FetchError;
use crate::shared::load_state::RemoteOutcome;

pub const SOLVES_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolvesDialog {
    raw: Option<Vec<ChallengeSolve>>,
    pending: bool,
    open: bool,
    page: usize,
}

impl SolvesDialog {
    /// Click on the solves counter. Returns `true` when the caller has to fetch.
    pub fn request_open(&mut self) -> bool {
        if self.pending {
            return false;
        }
        if self.raw.is_some() {
            self.show_first_page();
            return false;
        }
        self.pending = true;
        true
    }

    pub fn resolve(&mut self, result: Result<RemoteOutcome<ChallengeSolvesData>, FetchError>) {
        self.pending = false;
        match result {
            Ok(RemoteOutcome::Ready(data)) => {
                self.raw = Some(data.solves);
                self.show_first_page();
            }
            Ok(RemoteOutcome::NotStarted) => log::warn!("Solves requested before the start"),
            Err(e) => log::error!("Failed to fetch solves: {}", e),
        }
    }

    fn show_first_page(&mut self) {
        self.open = true;
        self.page = 1;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_items(&self) -> usize {
        self.raw.as_ref().map_or(0, Vec::len)
    }

    pub fn shows_pagination(&self) -> bool {
        needs_pagination(self.total_items(), SOLVES_PAGE_SIZE)
    }

    /// Current page; empty while the dialog is closed.
    pub fn visible(&self) -> Vec<RenderedEntry<ChallengeSolve>> {
        match &self.raw {
            Some(raw) if self.open => {
                let ordered: Vec<&ChallengeSolve> = raw.iter().collect();
                derive_page(&ordered, self.page, SOLVES_PAGE_SIZE)
            }
            _ => Vec::new(),
        }
    }
}

/// `2024-02-07 03:00 UTC` for a millisecond timestamp.
pub fn format_solve_time(created_at_ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(created_at_ms)
        .map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solves(n: usize) -> ChallengeSolvesData {
        ChallengeSolvesData {
            solves: (0..n)
                .map(|i| ChallengeSolve {
                    id: format!("s{i}"),
                    created_at: 1_707_274_800_000 + i as i64,
                    user_id: format!("u{i}"),
                    user_name: format!("team {i}"),
                })
                .collect(),
        }
    }

    #[test]
    fn test_first_open_fetches_once() {
        let mut dialog = SolvesDialog::default();
        assert!(dialog.request_open());
        assert!(dialog.is_pending());
        // повторный клик во время загрузки ничего не делает
        assert!(!dialog.request_open());
        assert!(!dialog.is_open());

        dialog.resolve(Ok(RemoteOutcome::Ready(solves(3))));
        assert!(dialog.is_open());
        assert!(!dialog.is_pending());

        dialog.close();
        assert!(!dialog.request_open());
        assert!(dialog.is_open());
    }

    #[test]
    fn test_pages_of_ten_with_continuous_ranks() {
        let mut dialog = SolvesDialog::default();
        dialog.request_open();
        dialog.resolve(Ok(RemoteOutcome::Ready(solves(23))));
        assert!(dialog.shows_pagination());

        dialog.set_page(3);
        let page = dialog.visible();
        assert_eq!(page.len(), 3);
        assert_eq!(page[0].rank, 21);
        assert_eq!(page[0].entry.user_name, "team 20");

        // повторное открытие начинается с первой страницы
        dialog.close();
        assert!(dialog.visible().is_empty());
        dialog.request_open();
        assert_eq!(dialog.page(), 1);
        assert_eq!(dialog.visible()[0].rank, 1);
    }

    #[test]
    fn test_failed_fetch_can_be_retried() {
        let mut dialog = SolvesDialog::default();
        assert!(dialog.request_open());
        dialog.resolve(Err(FetchError::Status(404)));
        assert!(!dialog.is_open());
        assert!(!dialog.is_pending());
        assert!(dialog.request_open());
    }

    #[test]
    fn test_single_page_has_no_pagination() {
        let mut dialog = SolvesDialog::default();
        dialog.request_open();
        dialog.resolve(Ok(RemoteOutcome::Ready(solves(10))));
        assert!(!dialog.shows_pagination());
        assert_eq!(dialog.visible().len(), 10);
    }

    #[test]
    fn test_format_solve_time() {
        assert_eq!(format_solve_time(1_707_274_800_000), "2024-02-07 03:00 UTC");
    }
}
