use crate::dialog::page::ConfigPage;
use crate::dialog::selector::Selector;
use crate::ui::banner::{BannerIntent, BannerReducer, BannerState, ERROR_DISPLAY};
use crate::ui::mvi::Reducer;
use crate::ui::navigator::{NavigatorIntent, NavigatorReducer, NavigatorState};
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// How the dialog was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Every page validated and committed.
    Accepted,
    /// Cancelled; nothing committed.
    Rejected,
}

pub struct ConfigDialog {
    /// Registration order is navigation, validation and commit order.
    pages: Vec<Box<dyn ConfigPage>>,
    index: HashMap<String, usize>,
    navigator: NavigatorState,
    banner: BannerState,
    /// Page currently shown in the content area.
    visible: Option<usize>,
    heading: String,
    /// Field to focus once its page is shown.
    pending: Option<Selector>,
    outcome: Option<DialogOutcome>,
}

impl ConfigDialog {
    /// Registers `pages` in order, shows the first one and then applies
    /// `initial` (`"page"` or `"page/field"`) if it is not empty.
    ///
    /// Page titles must be non-empty and unique.
    pub fn new(pages: Vec<Box<dyn ConfigPage>>, initial: &str) -> Self {
        let mut dialog = Self {
            pages: Vec::with_capacity(pages.len()),
            index: HashMap::new(),
            navigator: NavigatorState::default(),
            banner: BannerState::default(),
            visible: None,
            heading: String::new(),
            pending: None,
            outcome: None,
        };

        for page in pages {
            dialog.add_page(page);
        }

        let rows = dialog
            .pages
            .iter()
            .map(|page| page.title().to_string())
            .collect();
        dialog.dispatch_navigator(NavigatorIntent::Load { rows });

        if !initial.is_empty() {
            dialog.activate(initial);
        }
        dialog
    }

    fn add_page(&mut self, page: Box<dyn ConfigPage>) {
        let title = page.title().to_string();
        debug_assert!(!title.is_empty(), "config page registered without a title");
        debug_assert!(
            !self.index.contains_key(&title),
            "duplicate config page title '{title}'"
        );

        if self.index.contains_key(&title) {
            warn!(page = %title, "duplicate page title, lookups resolve to the first page");
        } else {
            self.index.insert(title, self.pages.len());
        }
        self.pages.push(page);
    }

    /// Runs the navigator reducer and, like a list widget's "current item
    /// changed" signal, shows the new page only when the row actually changed.
    fn dispatch_navigator(&mut self, intent: NavigatorIntent) {
        let before = self.navigator.current;
        dispatch_mvi!(self, navigator, NavigatorReducer, intent);
        if self.navigator.current != before {
            if let Some(title) = self.navigator.current_title().map(str::to_string) {
                self.on_page_changed(&title);
            }
        }
    }

    fn dispatch_banner(&mut self, intent: BannerIntent) {
        dispatch_mvi!(self, banner, BannerReducer, intent);
    }

    fn on_page_changed(&mut self, title: &str) {
        let Some(&idx) = self.index.get(title) else {
            return;
        };

        self.visible = Some(idx);
        self.heading = self.pages[idx].long_title().to_string();

        if self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.page == title)
        {
            if let Some(Selector {
                field: Some(field), ..
            }) = self.pending.take()
            {
                debug!(page = %title, field = %field, "forwarding activation");
                self.pages[idx].activate(&field);
            }
        }
    }

    /// Shows the page titled `title`. Unknown titles are ignored.
    ///
    /// Selecting the page that is already current still re-runs the
    /// page-shown handling so a pending field is forwarded.
    pub fn select_page(&mut self, title: &str) {
        let Some(row) = self.navigator.row_of(title) else {
            debug!(page = %title, "ignoring selection of unknown page");
            return;
        };

        if self.navigator.current == Some(row) {
            self.on_page_changed(title);
        } else {
            self.dispatch_navigator(NavigatorIntent::Select { row });
        }
    }

    /// Navigates to a `"page"` or `"page/field"` selector. An empty selector
    /// shows the first page.
    pub fn activate(&mut self, selector: &str) {
        let selector = Selector::parse(selector);
        self.pending = None;

        if selector.is_empty() {
            self.dispatch_navigator(NavigatorIntent::Select { row: 0 });
            return;
        }

        let page = selector.page.clone();
        if selector.field.is_some() {
            self.pending = Some(selector);
        }
        self.select_page(&page);
    }

    pub fn select_next(&mut self) {
        self.dispatch_navigator(NavigatorIntent::MoveDown);
    }

    pub fn select_previous(&mut self) {
        self.dispatch_navigator(NavigatorIntent::MoveUp);
    }

    /// Validates every page in order. The first failure shows its message,
    /// navigates to the offending field and keeps the dialog open. Otherwise
    /// every page commits and the dialog closes accepted.
    pub fn confirm(&mut self, now: Instant) {
        if !self.is_open() {
            return;
        }

        let failure = self.pages.iter().find_map(|page| {
            page.validate()
                .err()
                .map(|err| (page.title().to_string(), err))
        });

        if let Some((title, err)) = failure {
            info!(page = %title, field = %err.field, error = %err, "validation failed");
            if !err.message.is_empty() {
                self.dispatch_banner(BannerIntent::Show {
                    message: err.message.clone(),
                    expires_at: now + ERROR_DISPLAY,
                });
            }
            self.activate(&Selector::new(title, err.field).to_string());
            return;
        }

        self.dispatch_banner(BannerIntent::Clear);
        for page in &mut self.pages {
            debug!(page = %page.title(), "committing");
            page.commit();
        }
        self.outcome = Some(DialogOutcome::Accepted);
        info!(pages = self.pages.len(), "configuration accepted");
    }

    /// Closes without validating or committing.
    pub fn cancel(&mut self) {
        if !self.is_open() {
            return;
        }
        self.outcome = Some(DialogOutcome::Rejected);
        info!("configuration dialog cancelled");
    }

    pub fn clear_error(&mut self) {
        self.dispatch_banner(BannerIntent::Clear);
    }

    /// Expires the error banner once its display time has passed.
    pub fn on_tick(&mut self, now: Instant) {
        self.dispatch_banner(BannerIntent::Tick { now });
    }

    pub fn current_page_title(&self) -> Option<&str> {
        self.navigator.current_title()
    }

    pub fn current_page(&self) -> Option<&dyn ConfigPage> {
        let idx = self.visible?;
        match self.pages.get(idx) {
            Some(page) => Some(page.as_ref()),
            None => None,
        }
    }

    pub fn current_page_mut(&mut self) -> Option<&mut dyn ConfigPage> {
        let idx = self.visible?;
        match self.pages.get_mut(idx) {
            Some(page) => Some(page.as_mut()),
            None => None,
        }
    }

    /// Long title of the visible page.
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Error banner text, empty when no error is shown.
    pub fn error_message(&self) -> &str {
        self.banner.message()
    }

    pub fn navigator(&self) -> &NavigatorState {
        &self.navigator
    }

    pub fn page_titles(&self) -> &[String] {
        &self.navigator.rows
    }

    pub fn is_open(&self) -> bool {
        self.outcome.is_none()
    }

    pub fn outcome(&self) -> Option<DialogOutcome> {
        self.outcome
    }
}
