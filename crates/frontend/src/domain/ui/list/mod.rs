//! Generic list screen: fetch a collection, search, filter by status, paginate, delete.

pub mod state;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use serde_json::Value;
use thaw::{
    Button, ButtonAppearance, ButtonSize, Select, Table, TableBody, TableCell, TableCellLayout,
    TableHeader, TableHeaderCell, TableRow,
};

use self::state::ListState;
use crate::config::{AppConfig, DEFAULT_PAGE_SIZE};
use crate::domain::record::{extract_records, pending_count, Record};
use crate::domain::resource::{resource_for, Resource};
use crate::layout::left::navbar::use_nav_badges;
use crate::routes::paths;
use crate::shared::api_utils::record_path;
use crate::shared::icons;
use crate::shared::list_utils::SearchInput;
use crate::shared::payment_math::{breakdown_terms, format_money, format_percent};
use crate::system::access::Feature;
use crate::system::auth::context::use_session_store;
use crate::system::auth::guard::RequireFeature;

/// Guarded list screen for `feature`.
#[component]
pub fn ResourceScreen(feature: Feature) -> impl IntoView {
    view! {
        <RequireFeature feature=feature>
            {move || match resource_for(feature) {
                Some(resource) => view! { <ResourceListPage resource=resource /> }.into_any(),
                None => view! { <Redirect path=paths::DASHBOARD /> }.into_any(),
            }}
        </RequireFeature>
    }
}

fn status_label(status: &str) -> String {
    let mut chars = status.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>().replace('-', " "),
        None => String::new(),
    }
}

/// Cell texts of one row, in header order; bookings add advance and balance.
fn row_cells(resource: &Resource, record: &Record) -> Vec<String> {
    let mut cells: Vec<String> = resource.columns.iter().map(|column| record.display(column)).collect();
    if resource.tracks_payments {
        let b = breakdown_terms(&record.payment_terms());
        cells.push(format!("{} ({})", format_money(b.advance), format_percent(b.advance_percent)));
        cells.push(format!("{} ({})", format_money(b.balance), format_percent(b.balance_percent)));
    }
    cells
}

#[component]
pub fn ResourceListPage(resource: Resource) -> impl IntoView {
    let store = use_session_store();
    let badges = use_nav_badges();
    let page_size = use_context::<AppConfig>()
        .map(|c| c.page_size)
        .unwrap_or(DEFAULT_PAGE_SIZE);

    let (records, set_records) = signal(Vec::<Record>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let state = RwSignal::new(ListState::default());
    let status_value = RwSignal::new(String::new());
    let reload = RwSignal::new(0u32);

    let load = {
        let store = store.clone();
        Callback::new(move |_: ()| {
            let store = store.clone();
            spawn_local(async move {
                set_loading.set(true);
                set_error.set(None);
                match store.get_json::<Value>(resource.endpoint).await {
                    Ok(body) => {
                        let rows = extract_records(body);
                        badges.publish(resource.feature, pending_count(&rows));
                        set_records.set(rows);
                    }
                    Err(e) => {
                        log::warn!("failed to load {}: {}", resource.endpoint, e);
                        set_error.set(Some(format!("Failed to load {}: {}", resource.title(), e)));
                    }
                }
                set_loading.set(false);
            });
        })
    };

    let delete = Callback::new(move |id: String| {
        let store = store.clone();
        spawn_local(async move {
            match store.delete(&record_path(resource.endpoint, &id)).await {
                Ok(()) => reload.update(|n| *n += 1),
                Err(e) => set_error.set(Some(format!("Failed to delete record {}: {}", id, e))),
            }
        });
    });

    Effect::new(move |_| {
        reload.track();
        load.run(());
    });

    Effect::new(move |_| {
        let value = status_value.get();
        state.update(|s| s.set_status(&value));
    });

    let page = Signal::derive(move || state.with(|s| records.with(|rows| s.apply(rows, page_size))));

    let headers = move || {
        let mut labels: Vec<&'static str> = resource.columns.iter().map(|c| c.label).collect();
        if resource.tracks_payments {
            labels.extend(["Advance", "Balance"]);
        }
        labels.push("");
        labels
    };

    let row_view = move |record: Record| {
        let cells = row_cells(&resource, &record)
            .into_iter()
            .map(|text| {
                view! {
                    <TableCell>
                        <TableCellLayout>{text}</TableCellLayout>
                    </TableCell>
                }
            })
            .collect_view();
        let id = record.id();
        view! {
            <TableRow>
                {cells}
                <TableCell>
                    <TableCellLayout>
                        {id.map(|id| view! {
                            <Button
                                size=ButtonSize::Small
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| delete.run(id.clone())
                            >
                                {icons::icon("trash")}
                            </Button>
                        })}
                    </TableCellLayout>
                </TableCell>
            </TableRow>
        }
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{resource.title()}</h1>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        value=Signal::derive(move || state.with(|s| s.search.clone()))
                        on_change=Callback::new(move |text: String| state.update(|s| s.set_search(text)))
                        placeholder=format!("Search {}...", resource.title().to_lowercase())
                    />
                    {(!resource.statuses.is_empty()).then(|| view! {
                        <Select value=status_value>
                            <option value="">"All statuses"</option>
                            {resource.statuses.iter().map(|s| view! {
                                <option value=*s>{status_label(s)}</option>
                            }).collect_view()}
                        </Select>
                    })}
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| reload.update(|n| *n += 1)>
                        "Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || error.get().is_some()>
                    <div class="error-message">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class="page__loading">"Loading..."</div> }
                >
                    <Table>
                        <TableHeader>
                            <TableRow>
                                {headers().into_iter().map(|label| view! {
                                    <TableHeaderCell>{label}</TableHeaderCell>
                                }).collect_view()}
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || page.get().items.into_iter().map(row_view).collect_view()}
                        </TableBody>
                    </Table>
                    <Show when=move || page.with(|p| p.total == 0)>
                        <div class="page__empty">"No records found"</div>
                    </Show>
                    <div class="page__pagination">
                        <Button
                            size=ButtonSize::Small
                            disabled=Signal::derive(move || !page.with(|p| p.has_prev()))
                            on_click=move |_| {
                                let current = page.with_untracked(|p| p.page);
                                state.update(|s| s.go_to(current.saturating_sub(1)));
                            }
                        >
                            "Previous"
                        </Button>
                        <span>{move || page.with(|p| p.range_label(page_size))}</span>
                        <Button
                            size=ButtonSize::Small
                            disabled=Signal::derive(move || !page.with(|p| p.has_next()))
                            on_click=move |_| {
                                let current = page.with_untracked(|p| p.page);
                                state.update(|s| s.go_to(current + 1));
                            }
                        >
                            "Next"
                        </Button>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_booking_row_adds_payment_cells() {
        let bookings = resource_for(Feature::Bookings).unwrap();
        let record = Record::from_value(json!({
            "customerName": "Ama",
            "serviceName": "Deep clean",
            "bookingDate": "2024-03-15T09:30:00Z",
            "totalAmount": 800,
            "advancePaid": 200,
            "status": "pending"
        }))
        .unwrap();

        assert_eq!(
            row_cells(&bookings, &record),
            vec![
                "Ama",
                "Deep clean",
                "15.03.2024 09:30",
                "800.00",
                "pending",
                "200.00 (25.0%)",
                "600.00 (75.0%)",
            ]
        );
    }

    #[test]
    fn test_plain_row_follows_columns() {
        let pickups = resource_for(Feature::PickupRequests).unwrap();
        let record = Record::from_value(json!({"customerName": "Kofi", "status": "scheduled"})).unwrap();
        let cells = row_cells(&pickups, &record);
        assert_eq!(cells.len(), pickups.columns.len());
        assert_eq!(cells[0], "Kofi");
        assert_eq!(cells[4], "scheduled");
    }

    #[test]
    fn test_status_label() {
        assert_eq!(status_label("pending"), "Pending");
        assert_eq!(status_label("on-leave"), "On leave");
        assert_eq!(status_label(""), "");
    }
}
