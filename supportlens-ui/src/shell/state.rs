/// Which view the shell shows. Exactly one is mounted at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Dashboard,
    Chat,
}

impl ViewMode {
    pub const ALL: [ViewMode; 2] = [ViewMode::Dashboard, ViewMode::Chat];

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Dashboard => "Dashboard",
            ViewMode::Chat => "Chat",
        }
    }
}

/// Monotonic counter the dashboard watches; every change means "fetch again".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct RefreshSignal(u64);

impl RefreshSignal {
    pub fn generation(self) -> u64 {
        self.0
    }

    fn bump(&mut self) {
        self.0 += 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShellState {
    pub mode: ViewMode,
    pub refresh: RefreshSignal,
}

impl ShellState {
    /// Switch views. Selecting the dashboard always refetches, even when it
    /// is already showing.
    pub fn select(&mut self, mode: ViewMode) {
        self.mode = mode;
        if mode == ViewMode::Dashboard {
            self.refresh.bump();
        }
    }

    /// The explicit refresh control.
    pub fn request_refresh(&mut self) {
        self.refresh.bump();
    }

    /// A chat exchange persisted a new trace on the backend.
    pub fn trace_saved(&mut self) {
        self.refresh.bump();
    }

    pub fn shows_refresh_control(&self) -> bool {
        self.mode == ViewMode::Dashboard
    }
}
