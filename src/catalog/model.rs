//! Catalog model types: `Track`, `Category`, `CategoryFilter`, `MediaRef`
//! and the `Catalog` itself.

use std::fmt;
use std::path::PathBuf;

use url::Url;

/// Unique identifier of a catalog track.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(pub u32);

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The category a real track belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Children,
    Adult,
    Choral,
    Orchestral,
}

impl Category {
    /// Human-readable label shown on badges and cart items.
    pub fn label(self) -> &'static str {
        match self {
            Category::Children => "Детские песни",
            Category::Adult => "Песни для взрослых",
            Category::Choral => "Хоровая музыка",
            Category::Orchestral => "Оркестровая музыка",
        }
    }
}

/// Category filter. `All` is a pseudo-category that no track carries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Tab order, left to right.
    pub const TABS: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Children),
        CategoryFilter::Only(Category::Adult),
        CategoryFilter::Only(Category::Choral),
        CategoryFilter::Only(Category::Orchestral),
    ];

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "Все композиции",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    /// Short label used on the tab bar.
    pub fn tab_label(self) -> &'static str {
        match self {
            CategoryFilter::All => "Все",
            CategoryFilter::Only(Category::Children) => "Детские",
            CategoryFilter::Only(Category::Adult) => "Взрослые",
            CategoryFilter::Only(Category::Choral) => "Хоровые",
            CategoryFilter::Only(Category::Orchestral) => "Оркестровые",
        }
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }

    /// Position of this filter in `TABS`.
    pub fn tab_index(self) -> usize {
        Self::TABS.iter().position(|&f| f == self).unwrap_or(0)
    }
}

/// Where a track's preview audio lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaRef {
    Url(Url),
    File(PathBuf),
}

impl MediaRef {
    /// Parse a media reference. `http`/`https` URLs are remote, anything else
    /// is treated as a local path. Blank references mean "no preview".
    pub fn parse(reference: &str) -> Option<Self> {
        let reference = reference.trim();
        if reference.is_empty() {
            return None;
        }

        match Url::parse(reference) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Some(MediaRef::Url(url)),
            _ => Some(MediaRef::File(PathBuf::from(reference))),
        }
    }
}

impl fmt::Display for MediaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaRef::Url(url) => write!(f, "{url}"),
            MediaRef::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// An immutable catalog entry.
#[derive(Clone, Debug)]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub category: Category,
    /// Display string, e.g. `"2:30"`.
    pub duration: String,
    /// Price in whole roubles.
    pub price: u32,
    pub description: String,
    pub media: Option<MediaRef>,
}

/// The track list together with the active filter and cursor.
pub struct Catalog {
    tracks: Vec<Track>,
    filter: CategoryFilter,
    selected: Option<TrackId>,
}

impl Catalog {
    /// Create a catalog showing every track with the cursor on the first one.
    pub fn new(tracks: Vec<Track>) -> Self {
        let selected = tracks.first().map(|t| t.id);
        Self {
            tracks,
            filter: CategoryFilter::All,
            selected,
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn track(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    /// Replace the active filter and keep the cursor inside the visible list.
    pub fn set_category_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.ensure_selected_visible();
    }

    /// Switch to the tab right of the current one, wrapping around.
    pub fn next_filter(&mut self) {
        let tabs = CategoryFilter::TABS;
        let i = (self.filter.tab_index() + 1) % tabs.len();
        self.set_category_filter(tabs[i]);
    }

    /// Switch to the tab left of the current one, wrapping around.
    pub fn prev_filter(&mut self) {
        let tabs = CategoryFilter::TABS;
        let i = (self.filter.tab_index() + tabs.len() - 1) % tabs.len();
        self.set_category_filter(tabs[i]);
    }

    /// Tracks matching the active filter, in catalog order.
    pub fn visible_tracks(&self) -> Vec<&Track> {
        self.tracks
            .iter()
            .filter(|t| self.filter.matches(t.category))
            .collect()
    }

    pub fn selected_id(&self) -> Option<TrackId> {
        self.selected
    }

    pub fn selected_track(&self) -> Option<&Track> {
        self.selected.and_then(|id| self.track(id))
    }

    /// Position of the cursor inside `visible_tracks()`.
    pub fn selected_position(&self) -> Option<usize> {
        let id = self.selected?;
        self.visible_tracks().iter().position(|t| t.id == id)
    }

    /// Move the cursor to the next visible track, wrapping to the first.
    pub fn select_next(&mut self) {
        let visible = self.visible_tracks();
        if visible.is_empty() {
            return;
        }
        let next = match self.selected_position() {
            Some(p) => visible[(p + 1) % visible.len()].id,
            None => visible[0].id,
        };
        self.selected = Some(next);
    }

    /// Move the cursor to the previous visible track, wrapping to the last.
    pub fn select_prev(&mut self) {
        let visible = self.visible_tracks();
        if visible.is_empty() {
            return;
        }
        let prev = match self.selected_position() {
            Some(0) | None => visible[visible.len() - 1].id,
            Some(p) => visible[p - 1].id,
        };
        self.selected = Some(prev);
    }

    fn ensure_selected_visible(&mut self) {
        if self.selected_position().is_some() {
            return;
        }
        self.selected = self.visible_tracks().first().map(|t| t.id);
    }
}
