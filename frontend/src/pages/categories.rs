use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::{
        error_banner::ErrorBanner,
        loading_spinner::{LoadingSpinner, SpinnerSize},
    },
    hooks::use_categories,
    models::Category,
    router::Route,
    state::FetchState,
};

#[function_component(CategoriesPage)]
pub fn categories_page() -> Html {
    let (categories, retry) = use_categories();

    html! {
        <main class={classes!("container", "categories-page")}>
            // The create control stays visible in every fetch state
            <div class={classes!("row", "mt-5")}>
                <div class={classes!("col-md-8")}>
                    <h2>{ "Categories" }</h2>
                </div>
                <div class={classes!("col-md-4", "text-end")}>
                    <Link<Route>
                        to={Route::CreateCategory}
                        classes={classes!("btn", "btn-primary")}
                    >
                        { "Create Category" }
                    </Link<Route>>
                </div>
            </div>

            {
                match &*categories {
                    FetchState::Loading => html! {
                        <LoadingSpinner size={SpinnerSize::Large} />
                    },
                    FetchState::Failed(message) => html! {
                        <ErrorBanner
                            message={format!("Could not load categories: {}", message)}
                            on_retry={retry}
                        />
                    },
                    FetchState::Loaded(list) if list.is_empty() => html! {
                        <p class={classes!("empty-hint", "text-muted", "py-5", "text-center")}>
                            { "No categories yet" }
                        </p>
                    },
                    FetchState::Loaded(list) => category_table(list),
                }
            }
        </main>
    }
}

/// One table row, derived 1:1 from a fetched category. The render key is
/// the category id, which the service keeps unique per response.
#[derive(Clone, PartialEq)]
struct CategoryRow {
    key: String,
    id: i64,
    name: String,
    description: String,
}

fn category_rows(categories: &[Category]) -> Vec<CategoryRow> {
    categories
        .iter()
        .map(|category| CategoryRow {
            key: category.id.to_string(),
            id: category.id,
            name: category.name.clone(),
            description: category.description.clone(),
        })
        .collect()
}

fn category_table(categories: &[Category]) -> Html {
    html! {
        <table class={classes!("table", "table-striped", "table-bordered", "table-hover")}>
            <thead>
                <tr>
                    <th>{ "#" }</th>
                    <th>{ "Name" }</th>
                    <th>{ "Description" }</th>
                </tr>
            </thead>
            <tbody>
                { for category_rows(categories).into_iter().map(|row| html! {
                    <tr key={row.key.clone()}>
                        <td>{ row.id }</td>
                        <td>{ &row.name }</td>
                        <td>{ &row.description }</td>
                    </tr>
                }) }
            </tbody>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: i64, name: &str, description: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn rows_mirror_records_one_to_one_in_service_order() {
        let fetched = vec![
            category(1, "Books", "All books"),
            category(2, "Toys", "Kids toys"),
        ];

        let rows = category_rows(&fetched);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[0].name, "Books");
        assert_eq!(rows[0].description, "All books");
        assert_eq!(rows[1].id, 2);
        assert_eq!(rows[1].name, "Toys");
        assert_eq!(rows[1].description, "Kids toys");
    }

    #[test]
    fn row_keys_are_the_distinct_category_ids() {
        let fetched: Vec<Category> = (1..=5)
            .map(|id| category(id, "Name", "Description"))
            .collect();

        let rows = category_rows(&fetched);

        let keys: std::collections::HashSet<_> =
            rows.iter().map(|row| row.key.clone()).collect();
        assert_eq!(keys.len(), fetched.len());
        for (row, record) in rows.iter().zip(&fetched) {
            assert_eq!(row.key, record.id.to_string());
        }
    }

    #[test]
    fn empty_fetch_yields_no_rows() {
        assert!(category_rows(&[]).is_empty());
    }
}
