use super::{
    components::{kpis::KpiTiles, table::LockerSection},
    utils::{group_by_locker, kpis, Command},
    view_model::LocksViewModel,
};
use crate::{
    components::{
        error::InlineErrorMessage,
        layout::{Layout, LoadingSpinner},
    },
    utils::pagination::has_next_page,
};
use leptos::*;

#[component]
pub fn LocksPage() -> impl IntoView {
    let vm = LocksViewModel::new();
    let busy = vm.busy();
    let on_command = Callback::new(move |(mac, command): (String, Command)| vm.dispatch(mac, command));

    let list = move || {
        vm.locks.get().map(|result| match result {
            Ok(page) => {
                let groups = group_by_locker(&page.content);
                view! {
                    <KpiTiles kpis=kpis(&page.content) />
                    {if groups.is_empty() {
                        view! { <p class="muted">"No locks on this page."</p> }.into_view()
                    } else {
                        groups
                            .into_iter()
                            .map(|group| view! { <LockerSection group=group busy=busy on_command=on_command /> })
                            .collect_view()
                    }}
                }
                .into_view()
            }
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
                    <h2>"Locks"</h2>
                    <p class="muted">"Lock and unlock by locker."</p>
                </div>
                <div class="toolbar">
                    <button
                        class="btn"
                        disabled=move || busy.get() || vm.page.get() == 0
                        on:click=move |_| vm.prev_page()
                    >
                        "Prev"
                    </button>
                    <span class="muted">{move || format!("Page {}", vm.page.get() + 1)}</span>
                    <button
                        class="btn"
                        disabled=move || busy.get() || !has_next_page(vm.page.get(), vm.total_pages())
                        on:click=move |_| vm.next_page()
                    >
                        "Next"
                    </button>
                    <button class="btn" disabled=move || busy.get() on:click=move |_| vm.refresh()>
                        "Refresh"
                    </button>
                </div>
            </div>
            <InlineErrorMessage error=vm.error.into() />
            {move || vm.pending_notice.get().map(|text| view! { <div class="notice notice-warn">{text}</div> })}
            <Transition fallback=|| view! { <LoadingSpinner /> }>{list}</Transition>
        </Layout>
    }
}
