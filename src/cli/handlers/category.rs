use crate::cli::commands::{CategoryAction, CategoryCmd};
use crate::cli::output::{filter_labels, format_category_deleted};
use crate::ops::category_ops::CategoryManager;
use crate::ops::store::TaskStore;
use crate::session::Session;

pub fn cmd_categories(session: &Session, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = session.load_store()?;
    if json {
        println!("{}", serde_json::to_string_pretty(store.categories())?);
    } else {
        for category in store.categories() {
            println!("{}", category);
        }
    }
    Ok(())
}

pub fn cmd_filters(session: &Session, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = session.load_store()?;
    let labels = filter_labels(&store.filter_options());
    if json {
        println!("{}", serde_json::to_string_pretty(&labels)?);
    } else {
        for label in labels {
            println!("{}", label);
        }
    }
    Ok(())
}

pub fn cmd_category(args: CategoryCmd, session: &Session) -> Result<(), Box<dyn std::error::Error>> {
    let _lock = session.lock()?;
    let mut store = session.load_store()?;
    let mut manager = CategoryManager::new();

    match args.action {
        CategoryAction::Add { name } => {
            manager.input = name;
            if !manager.submit(&mut store)? {
                return Err(format!(
                    "category not added: '{}' is blank or already exists",
                    manager.input.trim()
                )
                .into());
            }
            println!("added category {}", last_category(&store));
        }
        CategoryAction::Rm { name } => match manager.delete(&mut store, &name)? {
            Some(reassigned) => println!(
                "{}",
                format_category_deleted(&name, reassigned, store.fallback_category())
            ),
            None => return Err(format!("category not found: {}", name).into()),
        },
    }
    Ok(())
}

/// Name of the most recently added category
fn last_category(store: &TaskStore) -> &str {
    store.categories().last().map(String::as_str).unwrap_or_default()
}
