//! Given steps for task API scenarios.

use axum::http::{Method, StatusCode};
use rstest_bdd_macros::given;
use serde_json::json;

use super::world::{ApiWorld, run_async};

#[given("an empty task store")]
fn empty_store(world: &mut ApiWorld) {
    world.created.clear();
}

#[given(r#"a task titled "{title}" was created"#)]
fn task_created(world: &mut ApiWorld, title: String) -> Result<(), eyre::Report> {
    run_async(world.send(Method::POST, "/api/tasks", Some(json!({ "title": title }))))?;
    let (status, body) = world.response()?;
    if *status != StatusCode::CREATED {
        return Err(eyre::eyre!("seeding {title} answered {status}: {body}"));
    }
    let id = body["data"]["id"]
        .as_i64()
        .ok_or_else(|| eyre::eyre!("created task has no id: {body}"))?;
    world.created.insert(title, id);
    Ok(())
}

#[given("the store is unavailable")]
fn store_unavailable(world: &mut ApiWorld) {
    world.store.set_failing(true);
}
