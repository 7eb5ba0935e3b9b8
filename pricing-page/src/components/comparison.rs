//! Feature comparison matrix

use leptos::prelude::*;

use super::{Icon, ICON_CHECK, ICON_X};
use crate::content::{Cell, ComparisonGroup, Plan, COMPARISON, PLANS};

/// Feature-by-plan table, one body per category.
#[component]
pub fn FeatureComparison(
    #[prop(default = COMPARISON)] groups: &'static [ComparisonGroup],
    #[prop(default = PLANS)] plans: &'static [Plan],
) -> impl IntoView {
    view! {
        <section id="compare" class="comparison">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Compare plans"</h2>
                </div>
                <div class="table-scroll">
                    <table class="comparison-table">
                        <thead>
                            <tr>
                                <th scope="col">"Feature"</th>
                                {plans
                                    .iter()
                                    .map(|plan| view! { <th scope="col">{plan.name}</th> })
                                    .collect::<Vec<_>>()}
                            </tr>
                        </thead>
                        {groups
                            .iter()
                            .map(|group| {
                                view! {
                                    <tbody>
                                        <tr class="comparison-category">
                                            <th scope="colgroup" colspan={(plans.len() + 1).to_string()}>
                                                {group.category}
                                            </th>
                                        </tr>
                                        {group
                                            .rows
                                            .iter()
                                            .map(|row| {
                                                view! {
                                                    <tr class="comparison-row">
                                                        <th scope="row">{row.feature}</th>
                                                        {row.cells.iter().map(|cell| view! { <td><CellValue cell=*cell /></td> }).collect::<Vec<_>>()}
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </table>
                </div>
            </div>
        </section>
    }
}

#[component]
fn CellValue(cell: Cell) -> impl IntoView {
    match cell {
        Cell::Included => view! {
            <Icon path=ICON_CHECK size="18" class="cell-yes" label="Included" />
        }
        .into_any(),
        Cell::Excluded => view! {
            <Icon path=ICON_X size="18" class="cell-no" label="Not included" />
        }
        .into_any(),
        Cell::Text(text) => view! { <span class="cell-text">{text}</span> }.into_any(),
    }
}
