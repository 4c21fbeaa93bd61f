//! When steps for project provisioning BDD scenarios.

use super::world::{ProvisioningWorld, run_async};
use brunel::project::domain::{ProjectKey, ProjectRecord, Quickstarter};
use rstest_bdd_macros::when;

/// Returns the key of the project the scenario works on.
fn scenario_key(world: &ProvisioningWorld) -> Result<ProjectKey, eyre::Report> {
    world
        .project_key
        .clone()
        .ok_or_else(|| eyre::eyre!("no project key in scenario world"))
}

#[when("the project is created")]
fn create_project(world: &mut ProvisioningWorld) -> Result<(), eyre::Report> {
    let request = world
        .pending_request
        .clone()
        .ok_or_else(|| eyre::eyre!("no pending create request in scenario world"))?;
    world.last_outcome = Some(run_async(world.service.create_project(request)));
    Ok(())
}

#[when("an update requests a platform runtime")]
fn update_requests_platform(world: &mut ProvisioningWorld) -> Result<(), eyre::Report> {
    let key = scenario_key(world)?;
    let request =
        ProjectRecord::new(key, "Demo Project").with_platform_runtime_requested(true);
    world.last_outcome = Some(run_async(world.service.update_project(request)));
    Ok(())
}

#[when(r#"an update adds a "{component}" quickstarter"#)]
fn update_adds_quickstarter(
    world: &mut ProvisioningWorld,
    component: String,
) -> Result<(), eyre::Report> {
    let key = scenario_key(world)?;
    let request =
        ProjectRecord::new(key, "Demo Project").with_quickstarter(Quickstarter::of_type(component));
    world.last_outcome = Some(run_async(world.service.update_project(request)));
    Ok(())
}

#[when(r#"an update adds a "{component}" quickstarter requesting a platform runtime"#)]
fn update_adds_quickstarter_with_platform(
    world: &mut ProvisioningWorld,
    component: String,
) -> Result<(), eyre::Report> {
    let key = scenario_key(world)?;
    let request = ProjectRecord::new(key, "Demo Project")
        .with_platform_runtime_requested(true)
        .with_quickstarter(Quickstarter::of_type(component));
    world.last_outcome = Some(run_async(world.service.update_project(request)));
    Ok(())
}
