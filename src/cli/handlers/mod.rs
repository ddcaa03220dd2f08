mod category;
use category::{cmd_categories, cmd_category, cmd_filters};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::model::category::Filter;
use crate::model::task::Task;
use crate::ops::entry_form::{Submission, TaskForm};
use crate::session::Session;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(
    command: Commands,
    session: &Session,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        // Read commands
        Commands::List(args) => cmd_list(args, session, json),
        Commands::Categories => cmd_categories(session, json),
        Commands::Filters => cmd_filters(session, json),

        // Write commands
        Commands::Add(args) => cmd_add(args, session, json),
        Commands::Toggle(args) => cmd_toggle(args, session, json),
        Commands::Rm(args) => cmd_rm(args, session),
        Commands::Category(args) => cmd_category(args, session),
    }
}

fn print_task(task: &Task, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(task)?);
    } else {
        println!("{}", format_task_line(task));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Task commands
// ---------------------------------------------------------------------------

fn cmd_list(args: ListArgs, session: &Session, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = session.load_store()?;
    let filter = args.category.map(Filter::Category).unwrap_or_default();
    store.set_filter(filter);

    let tasks = store.visible_tasks();
    if json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
    } else {
        for line in format_task_listing(&tasks) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_add(args: AddArgs, session: &Session, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let _lock = session.lock()?;
    let mut store = session.load_store()?;

    let mut form = TaskForm::new(store.categories());
    form.task = args.task;
    form.due_date = args.due;
    if let Some(category) = args.category {
        form.category = category;
    }

    match form.submit(&mut store)? {
        Submission::Added(task) => {
            if json {
                print_task(&task, true)?;
            } else {
                println!("{}", task.id);
            }
            Ok(())
        }
        Submission::Rejected(rejection) => Err(format!("task not added: {}", rejection).into()),
    }
}

fn cmd_toggle(args: IdArgs, session: &Session, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let _lock = session.lock()?;
    let mut store = session.load_store()?;

    let id = store.resolve_id(&args.id)?.to_string();
    store.toggle_complete(&id)?;
    let task = store
        .find_task(&id)
        .ok_or_else(|| format!("task not found: {}", id))?;
    print_task(task, json)
}

fn cmd_rm(args: IdArgs, session: &Session) -> Result<(), Box<dyn std::error::Error>> {
    let _lock = session.lock()?;
    let mut store = session.load_store()?;

    let id = store.resolve_id(&args.id)?.to_string();
    store.delete_task(&id)?;
    println!("deleted {}", id);
    Ok(())
}
