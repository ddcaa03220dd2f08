use crate::model::category::Filter;
use crate::model::task::Task;

/// Tasks passing `filter`, in their original order.
pub fn visible_tasks<'a>(tasks: &'a [Task], filter: &Filter) -> Vec<&'a Task> {
    match filter {
        Filter::All => tasks.iter().collect(),
        Filter::Category(name) => tasks.iter().filter(|t| &t.category == name).collect(),
    }
}

/// Choices for the filter selector: `All` first, then each category.
pub fn filter_options(categories: &[String]) -> Vec<Filter> {
    std::iter::once(Filter::All)
        .chain(categories.iter().cloned().map(Filter::Category))
        .collect()
}

/// Position of `filter` in `options`, falling back to `All` (index 0).
pub fn option_index(options: &[Filter], filter: &Filter) -> usize {
    options.iter().position(|f| f == filter).unwrap_or(0)
}
