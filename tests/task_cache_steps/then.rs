//! Then steps for client task cache scenarios.

use rstest_bdd_macros::then;
use taskboard::task::ports::TaskRepository;

use super::world::{CacheWorld, run_async};

#[then(r#"the cache lists "{first}" before "{second}""#)]
fn cache_lists_in_order(
    world: &CacheWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    let titles: Vec<String> = world
        .cache
        .snapshot()
        .tasks()
        .iter()
        .map(|task| task.title().as_str().to_owned())
        .collect();
    if titles != [first.clone(), second.clone()] {
        return Err(eyre::eyre!("expected [{first}, {second}], found {titles:?}"));
    }
    Ok(())
}

#[then("no request is in flight")]
fn no_request_in_flight(world: &CacheWorld) -> Result<(), eyre::Report> {
    let state = world.cache.snapshot();
    if state.is_loading() || state.is_creating() || state.deleting_id().is_some() {
        return Err(eyre::eyre!("cache still has a request in flight: {state:?}"));
    }
    Ok(())
}

#[then("the cache has settled without an error")]
fn cache_settled_without_error(world: &CacheWorld) -> Result<(), eyre::Report> {
    no_request_in_flight(world)?;
    if let Some(error) = world.cache.snapshot().error() {
        return Err(eyre::eyre!("unexpected cache error: {error}"));
    }
    Ok(())
}

#[then(r#"the cache error is "{message}""#)]
fn cache_error_is(world: &CacheWorld, message: String) -> Result<(), eyre::Report> {
    let state = world.cache.snapshot();
    if state.error() != Some(message.as_str()) {
        return Err(eyre::eyre!("expected error {message}, found {:?}", state.error()));
    }
    Ok(())
}

#[then("the cache holds {count} tasks")]
fn cache_holds(world: &CacheWorld, count: usize) -> Result<(), eyre::Report> {
    let held = world.cache.snapshot().tasks().len();
    if held != count {
        return Err(eyre::eyre!("expected {count} cached tasks, found {held}"));
    }
    Ok(())
}

#[then("the server holds {count} tasks")]
fn server_holds(world: &CacheWorld, count: usize) -> Result<(), eyre::Report> {
    let held = run_async(world.store.list_all())?.len();
    if held != count {
        return Err(eyre::eyre!("expected {count} stored tasks, found {held}"));
    }
    Ok(())
}

#[then("the form is cleared")]
fn form_is_cleared(world: &CacheWorld) -> Result<(), eyre::Report> {
    if !world.form.title().is_empty() || !world.form.description().is_empty() {
        return Err(eyre::eyre!("form still holds input: {:?}", world.form));
    }
    Ok(())
}

#[then(r#"the form still holds the title "{title}""#)]
fn form_holds_title(world: &CacheWorld, title: String) -> Result<(), eyre::Report> {
    if world.form.title() != title {
        return Err(eyre::eyre!("expected form title {title}, found {}", world.form.title()));
    }
    Ok(())
}

#[then(r#"the form shows the error "{message}""#)]
fn form_shows_error(world: &CacheWorld, message: String) -> Result<(), eyre::Report> {
    if world.form.title_error() != Some(message.as_str()) {
        return Err(eyre::eyre!(
            "expected form error {message}, found {:?}",
            world.form.title_error()
        ));
    }
    Ok(())
}

#[then(r#"the delete prompt for "{title}" is open"#)]
fn prompt_open(world: &CacheWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    if !world.confirmations.is_open(id) {
        return Err(eyre::eyre!("delete prompt for {title} was closed"));
    }
    Ok(())
}

#[then(r#"the delete prompt for "{title}" is closed"#)]
fn prompt_closed(world: &CacheWorld, title: String) -> Result<(), eyre::Report> {
    let open = world
        .task_id(&title)
        .is_ok_and(|id| world.confirmations.is_open(id));
    if open {
        return Err(eyre::eyre!("delete prompt for {title} is still open"));
    }
    Ok(())
}
