use crate::constants::DEFAULT_DISPLAY_PAGE_SIZE;
use crate::filters::{Selection, StatusFilter, SummaryFilter};
use crate::goals::GoalCategory;
use crate::pagination::{paginate, Page};
use crate::summary::{ComplianceOverview, UserSummary};

/// Filter and page state of the user-summary table.
///
/// Changing any filter returns to page 1. Replacing the data keeps the
/// current page, which is clamped when the page is read.
#[derive(Debug, Clone)]
pub struct DashboardView {
    summaries: Vec<UserSummary>,
    filter: SummaryFilter,
    page: usize,
    page_size: usize,
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new(DEFAULT_DISPLAY_PAGE_SIZE)
    }
}

impl DashboardView {
    pub fn new(page_size: usize) -> Self {
        Self {
            summaries: Vec::new(),
            filter: SummaryFilter::default(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn replace_data(&mut self, summaries: Vec<UserSummary>) {
        self.summaries = summaries;
    }

    pub fn summaries(&self) -> &[UserSummary] {
        &self.summaries
    }

    pub fn filter(&self) -> &SummaryFilter {
        &self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if self.filter.search != search {
            self.filter.search = search;
            self.page = 1;
        }
    }

    pub fn set_department(&mut self, department: Selection<String>) {
        if self.filter.department != department {
            self.filter.department = department;
            self.page = 1;
        }
    }

    pub fn set_stage(&mut self, stage: Selection<String>) {
        if self.filter.stage != stage {
            self.filter.stage = stage;
            self.page = 1;
        }
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        if self.filter.status != status {
            self.filter.status = status;
            self.page = 1;
        }
    }

    pub fn set_category(&mut self, category: Selection<GoalCategory>) {
        if self.filter.category != category {
            self.filter.category = category;
            self.page = 1;
        }
    }

    pub fn set_filter(&mut self, filter: SummaryFilter) {
        if self.filter != filter {
            self.filter = filter;
            self.page = 1;
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn filtered(&self) -> Vec<&UserSummary> {
        self.filter.apply(&self.summaries)
    }

    /// The visible page of the filtered summaries.
    pub fn current_page(&self) -> Page<UserSummary> {
        let filtered = self.filtered();
        paginate(&filtered, self.page, self.page_size).to_page(|s| (*s).clone())
    }

    /// Headline numbers over every loaded user, ignoring the filters.
    pub fn overview(&self) -> ComplianceOverview {
        ComplianceOverview::from_summaries(&self.summaries)
    }
}
