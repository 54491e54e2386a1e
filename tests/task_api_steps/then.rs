//! Then steps for task API scenarios.

use rstest_bdd_macros::then;
use serde_json::Value;
use taskboard::task::ports::TaskRepository;

use super::world::{ApiWorld, run_async};

#[then("the response status is {status}")]
fn response_status(world: &ApiWorld, status: u16) -> Result<(), eyre::Report> {
    let (actual, body) = world.response()?;
    if actual.as_u16() != status {
        return Err(eyre::eyre!("expected status {status}, found {actual}: {body}"));
    }
    Ok(())
}

#[then(r#"the response error is "{message}""#)]
fn response_error(world: &ApiWorld, message: String) -> Result<(), eyre::Report> {
    let (_, body) = world.response()?;
    if body["success"] != Value::Bool(false) || body["error"] != Value::String(message.clone()) {
        return Err(eyre::eyre!("expected failure {message}, found {body}"));
    }
    Ok(())
}

#[then(r#"the response message is "{message}""#)]
fn response_message(world: &ApiWorld, message: String) -> Result<(), eyre::Report> {
    let (_, body) = world.response()?;
    if body["success"] != Value::Bool(true) || body["message"] != Value::String(message.clone()) {
        return Err(eyre::eyre!("expected message {message}, found {body}"));
    }
    Ok(())
}

fn listed_titles(body: &Value) -> Result<Vec<String>, eyre::Report> {
    body["data"]
        .as_array()
        .ok_or_else(|| eyre::eyre!("response has no task list: {body}"))?
        .iter()
        .map(|task| {
            task["title"]
                .as_str()
                .map(str::to_owned)
                .ok_or_else(|| eyre::eyre!("task has no title: {task}"))
        })
        .collect()
}

#[then("the response lists no tasks")]
fn response_lists_nothing(world: &ApiWorld) -> Result<(), eyre::Report> {
    let (_, body) = world.response()?;
    let titles = listed_titles(body)?;
    if !titles.is_empty() {
        return Err(eyre::eyre!("expected no tasks, found {titles:?}"));
    }
    Ok(())
}

#[then(r#"the response lists "{first}" before "{second}""#)]
fn response_lists_in_order(
    world: &ApiWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    let (_, body) = world.response()?;
    let titles = listed_titles(body)?;
    if titles != [first.clone(), second.clone()] {
        return Err(eyre::eyre!("expected [{first}, {second}], found {titles:?}"));
    }
    Ok(())
}

#[then(r#"the response task is titled "{title}""#)]
fn response_task_titled(world: &ApiWorld, title: String) -> Result<(), eyre::Report> {
    let (_, body) = world.response()?;
    if body["data"]["title"] != Value::String(title.clone()) {
        return Err(eyre::eyre!("expected task titled {title}, found {body}"));
    }
    Ok(())
}

#[then("the store holds {count} tasks")]
fn store_holds(world: &ApiWorld, count: usize) -> Result<(), eyre::Report> {
    let held = run_async(world.store.list_all())?.len();
    if held != count {
        return Err(eyre::eyre!("expected {count} stored tasks, found {held}"));
    }
    Ok(())
}
