use super::{
    components::event_list::EventList,
    utils::{SortOrder, ViewMode},
    view_model::LockEventsViewModel,
};
use crate::{
    components::{
        error::InlineErrorMessage,
        layout::{Layout, LoadingSpinner},
    },
    utils::pagination::has_next_page,
};
use leptos::*;

fn toggle_class(active: bool) -> &'static str {
    if active {
        "btn btn-primary"
    } else {
        "btn"
    }
}

#[component]
pub fn LockEventsPage() -> impl IntoView {
    let vm = LockEventsViewModel::new();

    let list = move || {
        vm.events.get().map(|result| match result {
            Ok(_) => view! { <EventList events=vm.shown() mode=vm.view_mode.get() /> }.into_view(),
            Err(err) => {
                let error = create_rw_signal(Some(err));
                view! { <InlineErrorMessage error=error.into() /> }.into_view()
            }
        })
    };

    view! {
        <Layout>
            <div class="page-header">
                <div>
                    <h2>"Events"</h2>
                    <p class="muted">"Lock activity log."</p>
                </div>
                <div class="toolbar">
                    <button class="btn" on:click=move |_| vm.events.refetch()>"Refresh"</button>
                    <button
                        class="btn"
                        disabled=move || vm.page.get() == 0
                        on:click=move |_| vm.page.update(|p| *p = p.saturating_sub(1))
                    >
                        "Prev"
                    </button>
                    <button
                        class="btn"
                        disabled=move || !has_next_page(vm.page.get(), vm.total_pages())
                        on:click=move |_| vm.page.update(|p| *p += 1)
                    >
                        "Next"
                    </button>
                </div>
            </div>
            <p class="muted small">
                {move || {
                    let total_pages = vm.total_pages();
                    let of = if total_pages > 0 { format!(" / {}", total_pages) } else { String::new() };
                    format!("Page {}{} • Loaded {}", vm.page.get() + 1, of, vm.counts().on_page)
                }}
            </p>
            <div class="card filters">
                <label for="lock-id-filter">"Filter by Lock ID"</label>
                <input
                    id="lock-id-filter"
                    class="input"
                    placeholder="e.g. 4001"
                    prop:value=move || vm.filter_input.get()
                    on:input=move |ev| vm.filter_input.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            vm.apply_filter();
                        }
                    }
                />
                <button class="btn" on:click=move |_| vm.apply_filter()>"Apply"</button>
                <button
                    class="btn"
                    disabled=move || vm.filter.get().is_none() && vm.filter_input.get().trim().is_empty()
                    on:click=move |_| vm.clear_filter()
                >
                    "Clear"
                </button>
                {move || vm.filter_error.get().map(|msg| view! { <span class="field-error">{msg}</span> })}
                <span class="muted">"Time"</span>
                <button
                    class=move || toggle_class(vm.order.get() == SortOrder::Newest)
                    on:click=move |_| vm.order.set(SortOrder::Newest)
                >
                    "Newest"
                </button>
                <button
                    class=move || toggle_class(vm.order.get() == SortOrder::Oldest)
                    on:click=move |_| vm.order.set(SortOrder::Oldest)
                >
                    "Oldest"
                </button>
                <span class="muted">"View"</span>
                <button
                    class=move || toggle_class(vm.view_mode.get() == ViewMode::Timeline)
                    on:click=move |_| vm.view_mode.set(ViewMode::Timeline)
                >
                    "Timeline"
                </button>
                <button
                    class=move || toggle_class(vm.view_mode.get() == ViewMode::GroupByLock)
                    on:click=move |_| vm.view_mode.set(ViewMode::GroupByLock)
                >
                    "Group by lock"
                </button>
                {move || vm.filter.get().map(|id| view! { <span class="muted">{format!("Active: Lock {}", id)}</span> })}
            </div>
            <div class="counts">
                <span>{move || format!("Shown events: {}", vm.counts().shown)}</span>
                <span>{move || format!("Total events: {}", vm.counts().total)}</span>
            </div>
            <Transition fallback=|| view! { <LoadingSpinner /> }>{list}</Transition>
        </Layout>
    }
}
