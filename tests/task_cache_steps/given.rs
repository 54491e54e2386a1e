//! Given steps for client task cache scenarios.

use rstest_bdd_macros::given;
use taskboard::{client::TaskApi, task::services::CreateTaskRequest};

use super::world::{CacheWorld, run_async};

#[given(r#"the server has a task titled "{title}""#)]
fn server_has_task(world: &mut CacheWorld, title: String) -> Result<(), eyre::Report> {
    let envelope = run_async(world.api.create_task(&CreateTaskRequest::new(title)))?;
    if !envelope.success {
        return Err(eyre::eyre!("seeding failed: {:?}", envelope.error));
    }
    Ok(())
}

#[given("the cache is activated")]
fn cache_activated(world: &mut CacheWorld) {
    run_async(world.cache.activate());
}

#[given("the store starts failing")]
fn store_fails(world: &mut CacheWorld) {
    world.store.set_failing(true);
}

#[given(r#"the user asks to delete "{title}""#)]
fn user_requests_delete(world: &mut CacheWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    world.confirmations.request(id);
    Ok(())
}
