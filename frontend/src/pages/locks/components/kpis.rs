use crate::pages::locks::utils::Kpis;
use leptos::*;

#[component]
pub fn KpiTiles(kpis: Kpis) -> impl IntoView {
    view! {
        <div class="kpis">
            <div class="kpi">
                <div class="kpi-label">"Lockers"</div>
                <div class="kpi-value">{kpis.lockers}</div>
            </div>
            <div class="kpi">
                <div class="kpi-label">"Locks on page"</div>
                <div class="kpi-value">{kpis.locks}</div>
            </div>
        </div>
    }
}
