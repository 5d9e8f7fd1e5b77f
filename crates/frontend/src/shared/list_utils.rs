/// Shared list helpers: search, status filter, pagination, search input.
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Types that can be matched against a free-text search.
pub trait Searchable {
    /// Case-insensitive match of `filter` against the object's fields.
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Types that carry a workflow status (pending, completed, ...).
pub trait HasStatus {
    fn status(&self) -> Option<String>;
}

/// Keep the items matching the search text. Blank text keeps everything.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let filter = filter.trim();
    if filter.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Keep items whose status equals `status` (case-insensitive). `None` keeps everything.
pub fn filter_by_status<T: HasStatus + Clone>(items: Vec<T>, status: Option<&str>) -> Vec<T> {
    match status {
        None => items,
        Some(wanted) => items
            .into_iter()
            .filter(|item| {
                item.status()
                    .map(|s| s.eq_ignore_ascii_case(wanted))
                    .unwrap_or(false)
            })
            .collect(),
    }
}

/// One page of a list.
#[derive(Clone, Debug, PartialEq)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    /// Zero-based, already clamped to the available pages.
    pub page: usize,
    pub page_count: usize,
    pub total: usize,
}

impl<T> PageSlice<T> {
    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count
    }

    /// "11-20 of 42", or "0 of 0" for an empty list.
    pub fn range_label(&self, page_size: usize) -> String {
        if self.total == 0 {
            return "0 of 0".to_string();
        }
        let first = self.page * page_size + 1;
        let last = first + self.items.len() - 1;
        format!("{}-{} of {}", first, last, self.total)
    }
}

/// Cut `items` into pages of `page_size` and return page `page`.
///
/// Pages past the end clamp to the last page; there is always at least one page.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> PageSlice<T> {
    let page_size = page_size.max(1);
    let total = items.len();
    let page_count = total.div_ceil(page_size).max(1);
    let page = page.min(page_count - 1);
    let start = page * page_size;
    let end = (start + page_size).min(total);
    PageSlice {
        items: items[start.min(total)..end].to_vec(),
        page,
        page_count,
        total,
    }
}

/// Search box with debounce and a clear button.
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new filter after typing pauses
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    // Only the latest keystroke's timer may fire.
    let keystroke = RwSignal::new(0u64);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        keystroke.update(|k| *k += 1);
        let ticket = keystroke.get_untracked();
        spawn_local(async move {
            TimeoutFuture::new(300).await;
            if keystroke.get_untracked() == ticket {
                on_change.run(new_value);
            }
        });
    };

    let clear_filter = move |_| {
        keystroke.update(|k| *k += 1);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                class:search-input--active=move || !value.get().trim().is_empty()
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}
