//! Load-more pagination over a filtered post list.

use tracing::debug;

/// Initial number of blog posts shown before any load-more click.
pub const BLOG_INITIAL: usize = 6;
/// Posts appended per load-more click on the blog page.
pub const BLOG_BATCH: usize = 3;
/// Hard ceiling after which the blog hides its load-more control.
pub const BLOG_CAP: usize = 15;
/// Items appended per load-more click on the portfolio page.
pub const PORTFOLIO_BATCH: usize = 3;

/// Tracks how many items of a list are currently revealed.
#[derive(Debug, Clone)]
pub struct Paginator {
    total: usize,
    visible: usize,
    batch: usize,
    cap: Option<usize>,
}

impl Paginator {
    pub fn new(total: usize, initial: usize, batch: usize) -> Self {
        Self {
            total,
            visible: initial.min(total),
            batch,
            cap: None,
        }
    }

    /// Blog-page paging: six posts up front, three per click, fifteen at most.
    pub fn blog(total: usize) -> Self {
        Self::new(total, BLOG_INITIAL, BLOG_BATCH).with_cap(BLOG_CAP)
    }

    /// Portfolio-page paging: everything visible up front, three more per click.
    pub fn portfolio(total: usize) -> Self {
        Self::new(total, total, PORTFOLIO_BATCH)
    }

    pub fn with_cap(mut self, cap: usize) -> Self {
        self.cap = Some(cap);
        self
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    /// Items not yet revealed, honoring the cap when one is set.
    pub fn remaining(&self) -> usize {
        self.limit().saturating_sub(self.visible)
    }

    /// Whether the load-more control should be hidden.
    pub fn exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Reveals the next batch and returns how many items were added.
    pub fn next_batch(&mut self) -> usize {
        let added = self.batch.min(self.remaining());
        self.visible += added;
        if self.exhausted() {
            debug!(visible = self.visible, "pagination exhausted");
        }
        added
    }

    /// New items can also arrive out of band, e.g. appended by a feed.
    pub fn grow(&mut self, added: usize) {
        self.total += added;
    }

    fn limit(&self) -> usize {
        match self.cap {
            Some(cap) => self.total.min(cap),
            None => self.total,
        }
    }
}
