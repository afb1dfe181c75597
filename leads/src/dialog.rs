pub const DEFAULT_SERVICE_LABEL: &str = "Marketing Services Consultation";

/// Open flag and preselected service for the one contact dialog a page owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogState {
    is_open: bool,
    selected_service: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    Open(Option<String>),
    SelectService(String),
    Close,
}

fn usable(label: &str) -> Option<&str> {
    let trimmed = label.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

impl DialogState {
    /// Starts closed with `default_service` preselected.
    pub fn new(default_service: &str) -> Self {
        let selected_service = usable(default_service).unwrap_or(DEFAULT_SERVICE_LABEL);
        Self {
            is_open: false,
            selected_service: selected_service.to_string(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn selected_service(&self) -> &str {
        &self.selected_service
    }

    /// Shows the dialog. A blank or missing label keeps the current selection.
    pub fn open(&mut self, label: Option<&str>) {
        if let Some(label) = label {
            self.select_service(label);
        }
        self.is_open = true;
    }

    pub fn select_service(&mut self, label: &str) {
        if let Some(label) = usable(label) {
            self.selected_service = label.to_string();
        }
    }

    /// Hides the dialog. The selection survives so a reopen remembers it.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn apply(&mut self, action: DialogAction) {
        match action {
            DialogAction::Open(label) => self.open(label.as_deref()),
            DialogAction::SelectService(label) => self.select_service(&label),
            DialogAction::Close => self.close(),
        }
    }
}

impl Default for DialogState {
    fn default() -> Self {
        Self::new(DEFAULT_SERVICE_LABEL)
    }
}
