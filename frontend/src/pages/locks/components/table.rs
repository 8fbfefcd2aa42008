use crate::{
    api::Lock,
    components::badges::{ModeBadge, StateBadge},
    pages::locks::utils::{action_availability, Command, LockerGroup},
};
use leptos::*;

fn button_class(primary: bool) -> &'static str {
    if primary {
        "btn btn-primary"
    } else {
        "btn"
    }
}

#[component]
pub fn LockRow(
    lock: Lock,
    #[prop(into)] busy: Signal<bool>,
    on_command: Callback<(String, Command)>,
) -> impl IntoView {
    let row = store_value(lock);
    let availability = move || row.with_value(|lock| action_availability(lock, busy.get()));
    let primary = row.with_value(|lock| action_availability(lock, false).primary);
    let mac = row.with_value(|lock| lock.mac_address.clone());
    let mac_for_lock = mac.clone();
    let mac_for_unlock = mac.clone();

    let id = row.with_value(|l| l.id);
    let location = row.with_value(|l| l.location_id.map(|id| id.to_string()));

    view! {
        <tr>
            <td>{id}</td>
            <td class="mono">{mac}</td>
            <td><StateBadge state=row.with_value(|l| l.state) /></td>
            <td><ModeBadge mode=row.with_value(|l| l.mode) /></td>
            <td>{location.unwrap_or_else(|| "—".to_string())}</td>
            <td class="actions">
                <button
                    data-action="lock"
                    class=button_class(primary == Some(Command::Lock))
                    disabled=move || !availability().can_lock
                    on:click=move |_| on_command.call((mac_for_lock.clone(), Command::Lock))
                >
                    {Command::Lock.label()}
                </button>
                <button
                    data-action="unlock"
                    class=button_class(primary == Some(Command::Unlock))
                    disabled=move || !availability().can_unlock
                    on:click=move |_| on_command.call((mac_for_unlock.clone(), Command::Unlock))
                >
                    {Command::Unlock.label()}
                </button>
                {move || availability().notice.map(|text| view! { <span class="muted small">{text}</span> })}
            </td>
        </tr>
    }
}

#[component]
pub fn LockerSection(
    group: LockerGroup,
    #[prop(into)] busy: Signal<bool>,
    on_command: Callback<(String, Command)>,
) -> impl IntoView {
    let title = group.title();
    view! {
        <section class="card">
            <h3>{title}</h3>
            <table class="table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"MAC"</th>
                        <th>"State"</th>
                        <th>"Mode"</th>
                        <th>"Location"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {group
                        .locks
                        .into_iter()
                        .map(|lock| view! { <LockRow lock=lock busy=busy on_command=on_command /> })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}
