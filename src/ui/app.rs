use crate::model::ScanResult;
use crossterm::event::KeyCode;
use ratatui::widgets::ListState;
use sysinfo::Disks;

pub enum AppState {
    Browsing,
    Confirming,
}

/// How the interactive session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    NothingSelected,
    Cancelled,
    Confirmed(Vec<String>),
}

pub struct App {
    pub results: Vec<ScanResult>,
    pub list_state: ListState,
    pub state: AppState,
    pub disks: Disks,
}

impl App {
    pub fn new(results: Vec<ScanResult>) -> Self {
        let mut list_state = ListState::default();
        if !results.is_empty() {
            list_state.select(Some(0));
        }

        Self {
            results,
            list_state,
            state: AppState::Browsing,
            disks: Disks::new_with_refreshed_list(),
        }
    }

    pub fn next(&mut self) {
        if self.results.is_empty() {
            return;
        }

        let i = match self.list_state.selected() {
            Some(i) if i + 1 < self.results.len() => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.results.is_empty() {
            return;
        }

        let i = match self.list_state.selected() {
            Some(0) | None => self.results.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    pub fn toggle(&mut self) {
        if let Some(i) = self.list_state.selected()
            && let Some(result) = self.results.get_mut(i)
        {
            result.is_selected = !result.is_selected;
        }
    }

    /// Selects everything, or clears the selection if everything is selected.
    pub fn toggle_all(&mut self) {
        let select = !self.results.iter().all(|r| r.is_selected);
        for result in &mut self.results {
            result.is_selected = select;
        }
    }

    pub fn selected(&self) -> impl Iterator<Item = &ScanResult> {
        self.results.iter().filter(|r| r.is_selected)
    }

    pub fn total_selected_size(&self) -> u64 {
        self.selected().map(|r| r.total_size).sum()
    }

    pub fn selected_keys(&self) -> Vec<String> {
        self.selected().map(|r| r.key.clone()).collect()
    }

    /// Applies a key press. Returns a decision once the session is over.
    pub fn handle_key(&mut self, code: KeyCode) -> Option<Decision> {
        match self.state {
            AppState::Browsing => match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    if self.selected().next().is_some() {
                        return Some(Decision::Cancelled);
                    }
                    return Some(Decision::NothingSelected);
                }
                KeyCode::Down | KeyCode::Char('j') => self.next(),
                KeyCode::Up | KeyCode::Char('k') => self.previous(),
                KeyCode::Char(' ') => self.toggle(),
                KeyCode::Char('a') => self.toggle_all(),
                KeyCode::Enter => {
                    if self.selected().next().is_some() {
                        self.state = AppState::Confirming;
                    }
                }
                _ => {}
            },
            AppState::Confirming => match code {
                KeyCode::Char('y') => return Some(Decision::Confirmed(self.selected_keys())),
                KeyCode::Char('n' | 'q') | KeyCode::Esc => {
                    self.state = AppState::Browsing;
                }
                _ => {}
            },
        }
        None
    }
}
